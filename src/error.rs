use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read input file {}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot load stop words from {}", path.display())]
    StopWords {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write word frequencies")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
