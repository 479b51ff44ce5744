//! JavaScript entry points.

use wasm_bindgen::prelude::*;

use crate::assets::PassthroughAssets;
use crate::config::GeneratorConfig;
use crate::errors::{GenerationError, Result};
use crate::generator::generate_deck;
use crate::lookup::Workspace;
use crate::models::document::Document;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // A second init (hot reload) keeps the first logger.
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Generates a deck from JSON documents and returns the artifacts as JSON
/// (`{ markup, stylesheet, script, issues? }`).
///
/// `template_json` is made available under the presentation's import path.
/// Media URLs are rewritten under the configured asset prefix; copying the
/// files is left to the caller.
#[wasm_bindgen]
pub fn generate_deck_json(
    presentation_json: &str,
    template_json: Option<String>,
    config_json: Option<String>,
) -> std::result::Result<String, JsError> {
    generate_from_json(presentation_json, template_json.as_deref(), config_json.as_deref())
        .map_err(|e| JsError::new(&e.to_string()))
}

pub(crate) fn generate_from_json(
    presentation_json: &str,
    template_json: Option<&str>,
    config_json: Option<&str>,
) -> Result<String> {
    let presentation = match serde_json::from_str::<Document>(presentation_json)? {
        Document::Presentation(p) => p,
        Document::Template(t) => return Err(GenerationError::NotAPresentation(t.name)),
    };
    let config: GeneratorConfig = config_json
        .map(serde_json::from_str)
        .transpose()?
        .unwrap_or_default();

    let mut workspace = Workspace::new();
    if let (Some(json), Some(import)) = (template_json, presentation.import.as_ref()) {
        workspace.insert(import.path.clone(), serde_json::from_str::<Document>(json)?);
    }

    let assets = PassthroughAssets::new(config.asset_url_prefix.clone());
    let deck = generate_deck(&presentation, &workspace, &assets, &config)?;
    Ok(serde_json::to_string(&deck)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = r#"{
        "$type": "Template",
        "name": "Basic",
        "slideTemplates": [
            { "name": "Title", "content": [
                { "$type": "TextPlaceholder", "name": "title", "type": "freetext", "css": "color: red;" }
            ] }
        ]
    }"#;

    const PRESENTATION: &str = r#"{
        "$type": "Presentation",
        "name": "Talk",
        "import": { "template": "Basic", "path": "basic.sdml" },
        "slides": [
            { "template": "Title", "contents": [
                { "$type": "FreeText", "inline": "Hi", "placeholder": "title",
                  "size": { "width": "50%" }, "css": "color: blue;" }
            ] }
        ]
    }"#;

    #[test]
    fn test_generate_from_json_applies_css_precedence() {
        let json = generate_from_json(PRESENTATION, Some(TEMPLATE), None).unwrap();
        let deck: serde_json::Value = serde_json::from_str(&json).unwrap();
        let css = deck["stylesheet"].as_str().unwrap();

        let width = css.find(".content-1 {\n  width: 50%;\n}").unwrap();
        let red = css.find(".content-1 {\n  color: red;\n}").unwrap();
        let blue = css.find(".content-1 {\n  color: blue;\n}").unwrap();
        assert!(width < red && red < blue);
        assert!(deck.get("issues").is_none());
    }

    #[test]
    fn test_config_json_overrides_defaults() {
        let json = generate_from_json(
            PRESENTATION,
            None,
            Some(r#"{ "stylesheetHref": "deck.css", "theme": "black" }"#),
        )
        .unwrap();
        let deck: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(deck["markup"].as_str().unwrap().contains("href=\"deck.css\""));
        assert!(deck["script"].as_str().unwrap().contains("reveal.js/dist/theme/black.css"));
        // Without the template the import cannot be resolved.
        assert_eq!(deck["issues"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_template_is_not_a_presentation() {
        let err = generate_from_json(TEMPLATE, None, None).unwrap_err();
        assert!(matches!(err, GenerationError::NotAPresentation(name) if name == "Basic"));
    }
}
