//! Generator settings that do not come from the documents themselves.

use std::env;

use serde::{Deserialize, Serialize};

pub const DEFAULT_STYLESHEET_HREF: &str = "style.css";
pub const DEFAULT_SCRIPT_SRC: &str = "/main.ts";
pub const DEFAULT_ASSET_URL_PREFIX: &str = "./assets/";
pub const DEFAULT_THEME: &str = "white";
pub const DEFAULT_HIGHLIGHT_THEME: &str = "monokai";
pub const DEFAULT_ANNOTATION_STORAGE_KEY: &str = "slidedeckml:live-anno-steps:v1";

/// Output settings shared by the three generators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Stylesheet the markup links to.
    pub stylesheet_href: String,
    /// Module path of the behavior script the markup loads.
    pub script_src: String,
    /// Prefix of rewritten local media URLs.
    pub asset_url_prefix: String,
    /// reveal.js theme imported by the behavior script.
    pub theme: String,
    /// highlight.js theme imported with the highlight plugin.
    pub highlight_theme: String,
    /// `localStorage` key under which saved freehand annotations are stored.
    pub annotation_storage_key: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            stylesheet_href: DEFAULT_STYLESHEET_HREF.to_string(),
            script_src: DEFAULT_SCRIPT_SRC.to_string(),
            asset_url_prefix: DEFAULT_ASSET_URL_PREFIX.to_string(),
            theme: DEFAULT_THEME.to_string(),
            highlight_theme: DEFAULT_HIGHLIGHT_THEME.to_string(),
            annotation_storage_key: DEFAULT_ANNOTATION_STORAGE_KEY.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Defaults overlaid with any `SLIDEDECK_*` environment variables.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::default().overlay(|key| env::var(key).ok())
    }

    /// Overlays values produced by `lookup` for each `SLIDEDECK_*` key.
    pub fn overlay<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let fields: [(&str, &mut String); 6] = [
            ("SLIDEDECK_STYLESHEET_HREF", &mut self.stylesheet_href),
            ("SLIDEDECK_SCRIPT_SRC", &mut self.script_src),
            ("SLIDEDECK_ASSET_URL_PREFIX", &mut self.asset_url_prefix),
            ("SLIDEDECK_THEME", &mut self.theme),
            ("SLIDEDECK_HIGHLIGHT_THEME", &mut self.highlight_theme),
            ("SLIDEDECK_ANNOTATION_STORAGE_KEY", &mut self.annotation_storage_key),
        ];
        for (key, slot) in fields {
            if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
                *slot = value;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_replaces_only_present_values() {
        let config = GeneratorConfig::default().overlay(|key| match key {
            "SLIDEDECK_THEME" => Some("black".to_string()),
            "SLIDEDECK_SCRIPT_SRC" => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(config.theme, "black");
        assert_eq!(config.script_src, DEFAULT_SCRIPT_SRC);
        assert_eq!(config.stylesheet_href, DEFAULT_STYLESHEET_HREF);
    }

    #[test]
    fn test_partial_json_config_keeps_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{ "stylesheetHref": "deck.css" }"#).unwrap();
        assert_eq!(config.stylesheet_href, "deck.css");
        assert_eq!(config.asset_url_prefix, DEFAULT_ASSET_URL_PREFIX);
    }
}
