use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures at the I/O boundary. Normalization, comparison and selection
/// never fail; comparison differences are reported as data.
#[derive(Debug, Error)]
pub enum HtmlCanonError {
    #[error("Failed to read {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read standard input: {0}")]
    ReadStdin(#[source] io::Error),
    #[error("No HTML input provided. Use --file, --html, or pipe content to stdin.")]
    NoInput,
    #[error("Failed to write output: {0}")]
    WriteOutput(#[source] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown format: {0}")]
    UnknownFormat(String),
    #[error("Invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, HtmlCanonError>;
