use std::fs;
use std::path::Path;

use log::debug;

use crate::engine::traits::WordSource;
use crate::error::{Error, Result};
use crate::info::{describe, Info};
use crate::preprocessing::tokenizer::{normalize, tokenize};

/// Contents of the input file, normalized once at load time.
#[derive(Debug, Clone)]
pub struct DataStorage {
    data: String,
}

impl DataStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Input {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes from {}", content.len(), path.display());

        Ok(Self::from_text(&content))
    }

    pub fn from_text(text: &str) -> Self {
        Self { data: normalize(text) }
    }

    /// Whitespace-delimited tokens, in document order.
    pub fn words(&self) -> Vec<String> {
        tokenize(&self.data)
    }

    pub fn normalized(&self) -> &str {
        &self.data
    }
}

impl WordSource for DataStorage {
    fn words(&self) -> Vec<String> {
        DataStorage::words(self)
    }
}

impl Info for DataStorage {
    fn info(&self) -> String {
        describe::<Self>("String")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_open_normalizes_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "The quick brown fox. The fox ran.").unwrap();

        let storage = DataStorage::open(file.path()).unwrap();
        assert_eq!(storage.words(), vec!["the", "quick", "brown", "fox", "the", "fox", "ran"]);
    }

    #[test]
    fn test_words_are_repeatable() {
        let storage = DataStorage::from_text("One, two; TWO");
        assert_eq!(storage.words(), storage.words());
        assert_eq!(storage.normalized(), "one two two");
    }

    #[test]
    fn test_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let storage = DataStorage::open(file.path()).unwrap();
        assert!(storage.words().is_empty());
    }

    #[test]
    fn test_missing_file_is_an_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        match DataStorage::open(&missing) {
            Err(Error::Input { path, source }) => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_non_utf8_file_is_an_input_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe]).unwrap();

        match DataStorage::open(file.path()) {
            Err(Error::Input { source, .. }) => {
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidData)
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_info() {
        let storage = DataStorage::from_text("");
        assert_eq!(storage.info(), "DataStorage: My major data structure is a String");
    }
}
