//! Errors raised around the transformer: reading, naming and writing files.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("can't read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not valid UTF-8: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("can't write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no free output name left next to {path}")]
    OutputPathsExhausted { path: PathBuf },
    #[error("--output needs exactly one input file, got {count}")]
    AmbiguousOutput { count: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
