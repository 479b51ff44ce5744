//! Generates the deck's behavior script.
//!
//! A single structural scan decides which viewer features the deck needs;
//! the script then imports reveal.js, registers only the plugins in use and
//! appends the step-sync listener and the annotation overlay when enabled.

pub mod annotation;
pub mod step_sync;

use std::fmt::Write;

use log::{debug, info};

use super::GenerationContext;
use crate::errors::Result;
use crate::models::content::Content;
use crate::models::document::{DeckOption, Presentation, Template};

/// A reveal.js plugin imported by default export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Plugin {
    name: &'static str,
    import_path: &'static str,
    /// Expression placed in the `plugins` list.
    expr: &'static str,
}

const HIGHLIGHT_PLUGIN: Plugin = Plugin {
    name: "RevealHighlight",
    import_path: "reveal.js/plugin/highlight/highlight.js",
    expr: "RevealHighlight",
};

const MATH_PLUGIN: Plugin = Plugin {
    name: "RevealMath",
    import_path: "reveal.js/plugin/math/math.js",
    expr: "RevealMath.KaTeX",
};

/// `(left, right, display)` formula delimiters, written as they appear in
/// the emitted script.
const KATEX_DELIMITERS: [(&str, &str, bool); 4] = [
    ("$$", "$$", true),
    ("$", "$", false),
    (r"\\(", r"\\)", false),
    (r"\\[", r"\\]", true),
];

const KATEX_IGNORED_TAGS: [&str; 6] = ["script", "noscript", "style", "textarea", "pre", "code"];

/// What the deck uses, as far as the behavior script is concerned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureScan {
    pub has_code: bool,
    pub has_math: bool,
    pub has_model: bool,
    pub slide_number: bool,
    pub progress: bool,
    pub live_annotations: bool,
}

impl FeatureScan {
    /// Scans options of the presentation and then of its template, and the
    /// content tree depth first. The content scan stops as soon as every
    /// content feature has been seen.
    pub fn analyze(presentation: &Presentation, template: Option<&Template>) -> Self {
        let mut scan = Self::default();
        scan.apply_options(&presentation.options);
        if let Some(template) = template {
            scan.apply_options(&template.options);
        }

        for slide in &presentation.slides {
            if scan.has_all_content() {
                break;
            }
            scan.scan_contents(&slide.contents);
        }
        scan
    }

    fn apply_options(&mut self, options: &[DeckOption]) {
        for option in options {
            match option {
                DeckOption::SlideNumbers => self.slide_number = true,
                DeckOption::ProgressBar => self.progress = true,
                DeckOption::LiveAnnotations => self.live_annotations = true,
                DeckOption::Unknown => {}
            }
        }
    }

    fn has_all_content(&self) -> bool {
        self.has_code && self.has_math && self.has_model
    }

    fn scan_contents(&mut self, contents: &[Content]) {
        for content in contents {
            if self.has_all_content() {
                return;
            }
            match content {
                Content::CodeBlock(_) => self.has_code = true,
                Content::MathBlock(_) => self.has_math = true,
                Content::Model3D(_) => self.has_model = true,
                Content::LayoutBlock(block) => self.scan_contents(&block.elements),
                _ => {}
            }
        }
    }

    fn plugins(&self) -> Vec<Plugin> {
        let mut plugins = Vec::new();
        if self.has_code {
            plugins.push(HIGHLIGHT_PLUGIN);
        }
        if self.has_math {
            plugins.push(MATH_PLUGIN);
        }
        plugins
    }
}

/// Generates the behavior script for the presentation in `ctx`.
///
/// # Arguments
/// * `ctx` - The generation context. Only the deck options and the kinds of
///   content present decide which plugins and listeners are emitted.
///
/// # Returns
/// A `Result<String>` containing the TypeScript module.
pub fn generate_script(ctx: &GenerationContext<'_>) -> Result<String> {
    let config = ctx.config;
    let scan = FeatureScan::analyze(ctx.presentation, ctx.bindings.template());
    debug!("[generate_script] {:?}", scan);
    let plugins = scan.plugins();

    let mut out = String::new();
    writeln!(out, "import Reveal from \"reveal.js\";")?;
    writeln!(out, "import \"reveal.js/dist/reveal.css\";")?;
    writeln!(out, "import \"reveal.js/dist/theme/{}.css\";", config.theme)?;
    if scan.has_model {
        writeln!(out, "import \"@google/model-viewer\";")?;
    }
    for plugin in &plugins {
        if *plugin == HIGHLIGHT_PLUGIN {
            writeln!(
                out,
                "import \"reveal.js/plugin/highlight/{}.css\";",
                config.highlight_theme
            )?;
        }
        writeln!(out, "import {} from \"{}\";", plugin.name, plugin.import_path)?;
    }
    writeln!(out)?;

    writeln!(out, "Reveal.initialize({{")?;
    writeln!(out, "    hash: true,")?;
    writeln!(out, "    slideNumber: {},", scan.slide_number)?;
    writeln!(out, "    progress: {},", scan.progress)?;
    writeln!(out, "    width: \"100%\",")?;
    writeln!(out, "    height: \"100%\",")?;
    writeln!(out, "    disableLayout: true,")?;
    writeln!(out, "    display: \"flex\",")?;
    if scan.has_math {
        write_katex_config(&mut out)?;
    }
    if !plugins.is_empty() {
        let exprs: Vec<&str> = plugins.iter().map(|p| p.expr).collect();
        writeln!(out, "    plugins: [{}],", exprs.join(", "))?;
    }
    writeln!(out, "}});")?;

    if scan.has_code {
        writeln!(out)?;
        step_sync::write_listener(&mut out)?;
    }
    if scan.live_annotations {
        writeln!(out)?;
        annotation::write_runtime(&config.annotation_storage_key, &mut out)?;
    }

    info!(
        "Generated script (plugins: {}, live annotations: {})",
        plugins.len(),
        scan.live_annotations
    );
    Ok(out)
}

fn write_katex_config(out: &mut String) -> Result<()> {
    writeln!(out, "    katex: {{")?;
    writeln!(out, "        version: \"latest\",")?;
    writeln!(out, "        delimiters: [")?;
    for (left, right, display) in KATEX_DELIMITERS {
        writeln!(
            out,
            "            {{ left: \"{}\", right: \"{}\", display: {} }},",
            left, right, display
        )?;
    }
    writeln!(out, "        ],")?;
    let tags: Vec<String> = KATEX_IGNORED_TAGS
        .iter()
        .map(|t| format!("\"{}\"", t))
        .collect();
    writeln!(out, "        ignoredTags: [{}],", tags.join(", "))?;
    writeln!(out, "    }},")?;
    Ok(())
}
