//! Seams between the controller and its collaborators.
//!
//! The file-backed components implement these, and tests swap in
//! in-memory doubles.

/// Produces the ordered token sequence of a document.
pub trait WordSource {
    fn words(&self) -> Vec<String>;
}

/// Answers stop-word membership queries.
pub trait StopWords {
    fn is_stop_word(&self, word: &str) -> bool;
}

/// Accumulates word counts and ranks them.
pub trait Tally {
    fn increment_count(&mut self, word: &str);

    /// All `(word, count)` pairs, highest count first.
    fn sorted(&self) -> Vec<(String, usize)>;

    /// The first `n` entries of [`Tally::sorted`].
    fn top(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked = self.sorted();
        ranked.truncate(n);
        ranked
    }
}
