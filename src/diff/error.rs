use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while comparing artifacts.
#[derive(Error, Debug)]
pub enum DiffError {
    #[error("Text diff generation failed: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("Failed to read previous artifact {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DiffError>;
