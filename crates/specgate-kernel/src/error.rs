//! Error types for Specgate kernel operations.

use std::path::PathBuf;

/// Errors arising from corpus loading or extractor construction.
///
/// Once extraction begins nothing here can fire: parsing is total, and
/// every anomaly past this point is absorbed into the violation set.
#[derive(Debug, thiserror::Error)]
pub enum SpecgateError {
    /// The input root or specification path does not exist or has the
    /// wrong file type. Fatal: aborts the run before any extraction.
    #[error("input not found: {0}")]
    InputNotFound(String),

    /// A discovered document could not be read as UTF-8 text.
    #[error("failed reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A report could not be written to the requested destination.
    #[error("failed writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A built-in matcher pattern failed to compile.
    #[error("invalid matcher pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A report could not be serialized for output.
    #[error("failed rendering report: {0}")]
    Render(String),
}
