//! Reports what a regeneration changed in previously written artifacts.

pub mod error;
pub mod report;

pub use error::{DiffError, Result};
pub use report::{compare_artifact, compare_with_dir, ArtifactDiff, DeckDiffReport};
