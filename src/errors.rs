use std::path::PathBuf;

use thiserror::Error;

/// Represents errors that can abort a generation pass.
///
/// Unresolved template or placeholder references are not errors: they degrade
/// to "no binding" and are reported through
/// [`ResolutionIssue`](crate::resolver::ResolutionIssue) instead.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Writing into an output buffer failed.
    #[error("Formatting error during generation: {0}")]
    Format(#[from] std::fmt::Error),

    /// A local media file could not be copied next to the generated deck.
    #[error("Failed to copy asset '{url}' from {}: {source}", source_path.display())]
    Asset {
        url: String,
        source_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading an input document or writing an artifact failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An input document could not be deserialized.
    #[error("Failed to deserialize document: {0}")]
    Json(#[from] serde_json::Error),

    /// The document handed to the generator is not a presentation.
    #[error("Document '{0}' is not a presentation")]
    NotAPresentation(String),

    /// Invalid input was provided to a generator entry point.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A type alias for `Result<T, GenerationError>` for convenience within the crate.
pub type Result<T> = std::result::Result<T, GenerationError>;
