//! Counts the most frequent non-stop-words of a text file.
//!
//! The pipeline is split into a storage reader ([`DataStorage`]), a stop-word
//! filter ([`StopWordFilter`]), a frequency tally ([`WordFrequencies`]) and a
//! [`Controller`] that wires them together.

pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod frequency;
pub mod info;
pub mod logging;
pub mod preprocessing;

pub use document::storage::DataStorage;
pub use engine::controller::{Controller, DEFAULT_LIMIT};
pub use error::{Error, Result};
pub use frequency::WordFrequencies;
pub use info::Info;
pub use preprocessing::stop_words::StopWordFilter;
