pub mod assets;
pub mod config;
pub mod converters;
pub mod errors;
pub mod generator;
pub mod identity;
pub mod layout;
pub mod lookup;
pub mod models;
pub mod resolver;
pub mod wasm;

pub use assets::{AssetCopier, FsAssetCopier, PassthroughAssets};
pub use config::GeneratorConfig;
pub use errors::{GenerationError, Result};
pub use generator::{generate_deck, DeckArtifacts, DeckGenerator, DeckGeneratorBuilder};
pub use lookup::{DocumentLookup, NoDocuments, Workspace};
pub use models::document::{Document, Presentation, Template};
pub use resolver::{resolve, Bindings, ReferenceResolver, ResolutionIssue};

// features
#[cfg(feature = "diff")]
pub mod diff;
