use serde::{Deserialize, Serialize};

use crate::models::content::Content;
use crate::models::style::LayoutStyle;
use crate::models::template::SlideTemplate;

/// A parsed source file. A file declares either a reusable template or a
/// presentation that fills one in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum Document {
    Template(Template),
    Presentation(Presentation),
}

impl Document {
    /// The declared name of the template or presentation.
    pub fn name(&self) -> &str {
        match self {
            Document::Template(t) => &t.name,
            Document::Presentation(p) => &p.name,
        }
    }

    pub fn as_template(&self) -> Option<&Template> {
        match self {
            Document::Template(t) => Some(t),
            Document::Presentation(_) => None,
        }
    }

    pub fn as_presentation(&self) -> Option<&Presentation> {
        match self {
            Document::Presentation(p) => Some(p),
            Document::Template(_) => None,
        }
    }
}

/// A deck-wide switch declared in a presentation or template `options` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeckOption {
    /// Show the current slide number.
    SlideNumbers,
    /// Show the progress bar at the bottom of the viewer.
    ProgressBar,
    /// Install the freehand annotation overlay.
    LiveAnnotations,
    /// Any option this generator does not know about. Ignored.
    #[serde(other)]
    Unknown,
}

/// A reusable set of slide layouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// The template name, as referenced by `import <name> from "<path>"`.
    pub name: String,

    /// Default font family applied to the whole deck.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,

    /// Default text color applied to the whole deck.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Deck options every presentation importing this template inherits.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<DeckOption>,

    /// The named slide layouts, in declaration order.
    #[serde(default)]
    pub slide_templates: Vec<SlideTemplate>,
}

/// Reference from a presentation to the template it fills in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Import {
    /// Name of the imported template.
    pub template: String,
    /// Path of the file declaring it, relative to the workspace.
    pub path: String,
}

/// A concrete deck of slides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    /// The presentation name; also used as the document title.
    pub name: String,

    /// The template this presentation imports, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<Import>,

    /// Deck options declared on the presentation itself.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<DeckOption>,

    /// The slides, in presentation order.
    #[serde(default)]
    pub slides: Vec<Slide>,
}

/// One slide of a presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// Human-readable slide title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Name of the `SlideTemplate` this slide instantiates. Resolved by name
    /// against the imported template, never by pointer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// Direction and alignment of the slide's top-level content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutStyle>,

    /// Raw CSS declarations applied to the slide container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,

    /// The content blocks, in display order.
    #[serde(default)]
    pub contents: Vec<Content>,
}
