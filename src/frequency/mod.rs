use std::collections::HashMap;

use crate::engine::traits::Tally;
use crate::info::{describe, Info};

/// Word counts gathered during a single pass over a document.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencies {
    word_freqs: HashMap<String, usize>,
}

impl WordFrequencies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_count(&mut self, word: &str) {
        if let Some(count) = self.word_freqs.get_mut(word) {
            *count += 1;
        } else {
            self.word_freqs.insert(word.to_string(), 1);
        }
    }

    /// Ranked pairs: count descending, equal counts in word order.
    pub fn sorted(&self) -> Vec<(String, usize)> {
        let mut ranked: Vec<(String, usize)> = self
            .word_freqs
            .iter()
            .map(|(word, &count)| (word.clone(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
    }

    pub fn top(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked = self.sorted();
        ranked.truncate(n);
        ranked
    }

    pub fn count(&self, word: &str) -> usize {
        self.word_freqs.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.word_freqs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_freqs.is_empty()
    }
}

impl Tally for WordFrequencies {
    fn increment_count(&mut self, word: &str) {
        WordFrequencies::increment_count(self, word)
    }

    fn sorted(&self) -> Vec<(String, usize)> {
        WordFrequencies::sorted(self)
    }

    fn top(&self, n: usize) -> Vec<(String, usize)> {
        WordFrequencies::top(self, n)
    }
}

impl Info for WordFrequencies {
    fn info(&self) -> String {
        describe::<Self>("HashMap")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(words: &[&str]) -> WordFrequencies {
        let mut freqs = WordFrequencies::new();
        for word in words {
            freqs.increment_count(word);
        }
        freqs
    }

    #[test]
    fn test_increment_count() {
        let freqs = tally(&["fox", "quick", "fox"]);
        assert_eq!(freqs.count("fox"), 2);
        assert_eq!(freqs.count("quick"), 1);
        assert_eq!(freqs.count("missing"), 0);
        assert_eq!(freqs.len(), 2);
    }

    #[test]
    fn test_sorted_by_count_then_word() {
        let freqs = tally(&["quick", "fox", "ran", "brown", "fox"]);
        assert_eq!(
            freqs.sorted(),
            vec![
                ("fox".to_string(), 2),
                ("brown".to_string(), 1),
                ("quick".to_string(), 1),
                ("ran".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_sorted_counts_are_non_increasing() {
        let freqs = tally(&["b", "a", "c", "a", "b", "a", "d", "e", "e", "e", "e"]);
        let counts: Vec<usize> = freqs.sorted().into_iter().map(|(_, c)| c).collect();
        assert!(counts.windows(2).all(|w| w[0] >= w[1]), "{counts:?}");
    }

    #[test]
    fn test_top_truncates() {
        let words: Vec<String> = (0..30).map(|i| format!("word{i}")).collect();
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let freqs = tally(&refs);

        assert_eq!(freqs.top(25).len(), 25);
        assert_eq!(freqs.top(100).len(), 30);
    }

    #[test]
    fn test_empty() {
        let freqs = WordFrequencies::new();
        assert!(freqs.is_empty());
        assert!(freqs.sorted().is_empty());
        assert!(freqs.top(25).is_empty());
    }

    #[test]
    fn test_info() {
        assert_eq!(
            WordFrequencies::new().info(),
            "WordFrequencies: My major data structure is a HashMap"
        );
    }
}
