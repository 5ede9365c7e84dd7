pub mod stop_words;
pub mod tokenizer;
