use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_STOP_WORDS_PATH: &str = "stop_words.txt";

/// Print the most frequent non-stop-words of a text file
#[derive(Parser, Debug)]
#[command(name = "word-frequency", version)]
pub struct Cli {
    /// Text file to analyze
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Comma-separated stop-word list
    #[arg(
        short,
        long,
        value_name = "PATH",
        env = "WORD_FREQ_STOP_WORDS",
        default_value = DEFAULT_STOP_WORDS_PATH
    )]
    pub stop_words: PathBuf,

    /// Log a description of each pipeline component
    #[arg(long)]
    pub info: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Resolved options handed to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: PathBuf,
    pub stop_words: PathBuf,
    pub show_info: bool,
    pub verbosity: u8,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            stop_words: cli.stop_words,
            show_info: cli.info,
            verbosity: cli.verbose,
        }
    }
}
