//! One generation pass: resolve, then emit markup, stylesheet and script.

use std::fs;
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::assets::{AssetCopier, PassthroughAssets};
use crate::config::GeneratorConfig;
use crate::converters::css::generate_stylesheet;
use crate::converters::html::generate_markup;
use crate::converters::runtime::generate_script;
use crate::converters::GenerationContext;
use crate::errors::{GenerationError, Result};
use crate::identity::IdentityRegistry;
use crate::lookup::{DocumentLookup, NoDocuments};
use crate::models::document::Presentation;
use crate::resolver::resolve;

pub const MARKUP_FILE: &str = "index.html";
pub const STYLESHEET_FILE: &str = "style.css";
pub const SCRIPT_FILE: &str = "main.ts";

/// The three generated texts of a deck.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeckArtifacts {
    pub markup: String,
    pub stylesheet: String,
    pub script: String,
    /// Unresolved references and type mismatches found while resolving.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<String>,
}

impl DeckArtifacts {
    /// `(file name, content)` of each artifact.
    pub fn files(&self) -> [(&'static str, &str); 3] {
        [
            (MARKUP_FILE, &self.markup),
            (STYLESHEET_FILE, &self.stylesheet),
            (SCRIPT_FILE, &self.script),
        ]
    }

    /// Writes every artifact into `dir`, creating it if needed.
    pub fn write_to(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        for (name, content) in self.files() {
            fs::write(dir.join(name), content)?;
        }
        Ok(())
    }
}

/// Runs one generation pass with a fresh identity registry.
///
/// The registry is shared by the three generators; the markup runs first, so
/// identities are numbered in document order.
///
/// # Arguments
/// * `presentation` - The deck to generate.
/// * `lookup` - Locates the template the presentation imports.
/// * `assets` - Rewrites local media URLs, copying the files if it needs to.
/// * `config` - Output settings such as the stylesheet and script paths.
///
/// # Returns
/// A `Result<DeckArtifacts>` with the three artifacts. Unresolved references
/// do not fail the pass; they are listed in `DeckArtifacts::issues`. Errors
/// come only from asset copying and formatting.
pub fn generate_deck(
    presentation: &Presentation,
    lookup: &dyn DocumentLookup,
    assets: &dyn AssetCopier,
    config: &GeneratorConfig,
) -> Result<DeckArtifacts> {
    let bindings = resolve(presentation, lookup);
    let identities = IdentityRegistry::new();
    let ctx = GenerationContext {
        presentation,
        bindings: &bindings,
        identities: &identities,
        assets,
        config,
    };

    let markup = generate_markup(&ctx)?;
    let stylesheet = generate_stylesheet(&ctx)?;
    let script = generate_script(&ctx)?;
    info!(
        "Generated deck '{}': {} identities, {} resolution issues",
        presentation.name,
        identities.len(),
        bindings.issues().len()
    );

    Ok(DeckArtifacts {
        markup,
        stylesheet,
        script,
        issues: bindings.issues().iter().map(|i| i.to_string()).collect(),
    })
}

/// Builder for a [`DeckGenerator`].
#[derive(Default)]
pub struct DeckGeneratorBuilder {
    config: Option<GeneratorConfig>,
    lookup: Option<Box<dyn DocumentLookup>>,
    assets: Option<Box<dyn AssetCopier>>,
}

impl DeckGeneratorBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn set_config(mut self, config: GeneratorConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Where imported templates are looked up. Defaults to no documents.
    pub fn set_lookup(mut self, lookup: impl DocumentLookup + 'static) -> Self {
        self.lookup = Some(Box::new(lookup));
        self
    }

    /// How local media is made available. Defaults to rewriting URLs under
    /// the configured asset prefix without copying anything.
    pub fn set_assets(mut self, assets: impl AssetCopier + 'static) -> Self {
        self.assets = Some(Box::new(assets));
        self
    }

    /// Builds the generator.
    /// Returns an error if the configuration names no stylesheet or script.
    pub fn build(self) -> Result<DeckGenerator> {
        let config = self.config.unwrap_or_default();
        if config.stylesheet_href.trim().is_empty() {
            return Err(GenerationError::InvalidInput(
                "stylesheet href must not be empty".to_string(),
            ));
        }
        if config.script_src.trim().is_empty() {
            return Err(GenerationError::InvalidInput(
                "script src must not be empty".to_string(),
            ));
        }
        let assets = self
            .assets
            .unwrap_or_else(|| Box::new(PassthroughAssets::new(config.asset_url_prefix.clone())));
        Ok(DeckGenerator {
            lookup: self.lookup.unwrap_or_else(|| Box::new(NoDocuments)),
            assets,
            config,
        })
    }
}

/// Generates decks with a fixed configuration, lookup and asset copier.
pub struct DeckGenerator {
    config: GeneratorConfig,
    lookup: Box<dyn DocumentLookup>,
    assets: Box<dyn AssetCopier>,
}

impl DeckGenerator {
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn generate(&self, presentation: &Presentation) -> Result<DeckArtifacts> {
        generate_deck(presentation, &*self.lookup, &*self.assets, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::Workspace;
    use crate::models::document::Document;

    fn load(name: &str) -> Document {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name);
        let json = fs::read_to_string(&path).expect("fixture should exist");
        serde_json::from_str(&json).expect("fixture should parse")
    }

    fn lecture() -> (Presentation, Workspace) {
        let Document::Presentation(presentation) = load("lecture.json") else {
            panic!("lecture.json is not a presentation");
        };
        let workspace = Workspace::new().with_document("decks/course.sdml", load("course.json"));
        (presentation, workspace)
    }

    #[test]
    fn test_regeneration_is_deterministic() {
        let (presentation, workspace) = lecture();
        let generator = DeckGeneratorBuilder::new()
            .set_lookup(workspace)
            .build()
            .unwrap();
        let first = generator.generate(&presentation).unwrap();
        let second = generator.generate(&presentation).unwrap();
        assert_eq!(first, second);
        assert!(first.markup.contains("slide-1"));
    }

    #[test]
    fn test_identities_agree_across_artifacts() {
        let (presentation, workspace) = lecture();
        let generator = DeckGeneratorBuilder::new()
            .set_lookup(workspace)
            .build()
            .unwrap();
        let deck = generator.generate(&presentation).unwrap();

        // The title bound to the template placeholder carries its CSS.
        assert!(deck.markup.contains("<p class=\"content-1\">"));
        assert!(deck.stylesheet.contains("\n.content-1 {\n  font-size: 2.4em;\n}\n"));
        // Code highlight legend is wired through the same identity.
        assert!(deck.markup.contains("data-target=\".highlight-content-"));
        assert!(deck.script.contains("updateLegendImages"));
        assert!(deck.script.contains("slideNumber: true,"));
        assert!(deck.issues.is_empty(), "unexpected issues: {:?}", deck.issues);
    }

    #[test]
    fn test_missing_template_is_reported_not_fatal() {
        let (presentation, _) = lecture();
        let generator = DeckGeneratorBuilder::new().build().unwrap();
        let deck = generator.generate(&presentation).unwrap();
        assert_eq!(deck.issues.len(), 1);
        assert!(deck.issues[0].contains("course.sdml"));
        assert!(deck.markup.contains("<section class=\"vertical"));
    }

    #[test]
    fn test_builder_rejects_empty_script_src() {
        let config = GeneratorConfig {
            script_src: " ".to_string(),
            ..Default::default()
        };
        let result = DeckGeneratorBuilder::new().set_config(config).build();
        assert!(matches!(result, Err(GenerationError::InvalidInput(_))));
    }

    #[test]
    fn test_artifacts_serialize_without_empty_issues() {
        let deck = DeckArtifacts {
            markup: "<html/>".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&deck).unwrap();
        assert_eq!(json["markup"], "<html/>");
        assert!(json.get("issues").is_none());
    }
}
