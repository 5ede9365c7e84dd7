use std::io::Write;
use std::path::Path;

use log::{debug, info};

use crate::document::storage::DataStorage;
use crate::engine::report;
use crate::engine::traits::{StopWords, Tally, WordSource};
use crate::error::Result;
use crate::frequency::WordFrequencies;
use crate::info::Info;
use crate::preprocessing::stop_words::StopWordFilter;

pub const DEFAULT_LIMIT: usize = 25;

/// Drives the pipeline: read words, drop stop words, count, rank, print.
pub struct Controller<S, F, T> {
    storage: S,
    stop_words: F,
    tally: T,
}

impl Controller<DataStorage, StopWordFilter, WordFrequencies> {
    /// Builds the file-backed pipeline. Fails before any counting if either
    /// file cannot be read.
    pub fn from_path<P: AsRef<Path>, Q: AsRef<Path>>(input: P, stop_words: Q) -> Result<Self> {
        let storage = DataStorage::open(input)?;
        let stop_words = StopWordFilter::load(stop_words)?;
        Ok(Self::new(storage, stop_words, WordFrequencies::new()))
    }
}

impl<S, F, T> Controller<S, F, T>
where
    S: WordSource,
    F: StopWords,
    T: Tally,
{
    pub fn new(storage: S, stop_words: F, tally: T) -> Self {
        Self {
            storage,
            stop_words,
            tally,
        }
    }

    /// Counts every non-stop word, then writes the top 25 entries to `out`.
    /// Returns the entries that were written.
    pub fn run<W: Write>(mut self, out: &mut W) -> Result<Vec<(String, usize)>> {
        let mut kept = 0usize;
        let mut skipped = 0usize;

        for word in self.storage.words() {
            if self.stop_words.is_stop_word(&word) {
                skipped += 1;
                continue;
            }
            self.tally.increment_count(&word);
            kept += 1;
        }
        debug!("Counted {} words, skipped {} stop words", kept, skipped);

        let ranked = self.tally.top(DEFAULT_LIMIT);
        info!("Printing {} of the most frequent words", ranked.len());

        report::write_text(out, &ranked)?;
        Ok(ranked)
    }
}

impl<S: Info, F: Info, T: Info> Controller<S, F, T> {
    /// Self-descriptions of the three collaborators, in pipeline order.
    pub fn components_info(&self) -> Vec<String> {
        vec![self.storage.info(), self.stop_words.info(), self.tally.info()]
    }
}

impl<S, F, T> Info for Controller<S, F, T> {}
