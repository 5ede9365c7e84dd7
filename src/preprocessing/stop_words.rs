use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::debug;

use crate::engine::traits::StopWords;
use crate::error::{Error, Result};
use crate::info::{describe, Info};

/// Exclusion list loaded once and never modified afterwards.
#[derive(Debug, Clone)]
pub struct StopWordFilter {
    stop_words: HashSet<String>,
}

impl StopWordFilter {
    /// Loads a comma-separated list and adds every single lowercase letter.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::StopWords {
            path: path.to_path_buf(),
            source,
        })?;

        let filter = Self::from_words(content.split(','));
        debug!("Loaded {} stop words from {}", filter.len(), path.display());
        Ok(filter)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stop_words: HashSet<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_string())
            .filter(|word| !word.is_empty())
            .collect();
        stop_words.extend(('a'..='z').map(String::from));

        Self { stop_words }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl StopWords for StopWordFilter {
    fn is_stop_word(&self, word: &str) -> bool {
        StopWordFilter::is_stop_word(self, word)
    }
}

impl Info for StopWordFilter {
    fn info(&self) -> String {
        describe::<Self>("HashSet")
    }
}
