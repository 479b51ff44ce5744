use serde::{Deserialize, Serialize};

use crate::models::style::LayoutStyle;

/// Which text construct a text placeholder expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextKind {
    Freetext,
    Ul,
    Ol,
}

/// Which media element a media placeholder expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Model3d,
}

/// A named, typed slot declared inside a `SlideTemplate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$type", rename_all_fields = "camelCase")]
pub enum ContentPlaceholder {
    TextPlaceholder {
        name: String,
        #[serde(rename = "type")]
        kind: TextKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        css: Option<String>,
    },
    MediaPlaceholder {
        name: String,
        #[serde(rename = "type")]
        kind: MediaKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        css: Option<String>,
    },
    CodePlaceholder {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        css: Option<String>,
    },
    MathPlaceholder {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        css: Option<String>,
    },
    /// A placeholder grouping other placeholders. Establishes a private naming
    /// scope for content nested inside a layout block bound to it.
    LayoutPlaceholder {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        layout: Option<LayoutStyle>,
        #[serde(default)]
        content: Vec<ContentPlaceholder>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        css: Option<String>,
    },
}

impl ContentPlaceholder {
    pub fn name(&self) -> &str {
        match self {
            ContentPlaceholder::TextPlaceholder { name, .. }
            | ContentPlaceholder::MediaPlaceholder { name, .. }
            | ContentPlaceholder::CodePlaceholder { name, .. }
            | ContentPlaceholder::MathPlaceholder { name, .. }
            | ContentPlaceholder::LayoutPlaceholder { name, .. } => name,
        }
    }

    pub fn css(&self) -> Option<&str> {
        match self {
            ContentPlaceholder::TextPlaceholder { css, .. }
            | ContentPlaceholder::MediaPlaceholder { css, .. }
            | ContentPlaceholder::CodePlaceholder { css, .. }
            | ContentPlaceholder::MathPlaceholder { css, .. }
            | ContentPlaceholder::LayoutPlaceholder { css, .. } => css.as_deref(),
        }
    }

    /// Default layout of blocks bound to a layout placeholder.
    pub fn layout(&self) -> Option<&LayoutStyle> {
        match self {
            ContentPlaceholder::LayoutPlaceholder { layout, .. } => layout.as_ref(),
            _ => None,
        }
    }

    /// Placeholders declared directly inside a layout placeholder. Empty for
    /// every other variant.
    pub fn nested(&self) -> &[ContentPlaceholder] {
        match self {
            ContentPlaceholder::LayoutPlaceholder { content, .. } => content,
            _ => &[],
        }
    }

    pub fn is_layout(&self) -> bool {
        matches!(self, ContentPlaceholder::LayoutPlaceholder { .. })
    }

    /// The `$type` tag, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            ContentPlaceholder::TextPlaceholder { .. } => "TextPlaceholder",
            ContentPlaceholder::MediaPlaceholder { .. } => "MediaPlaceholder",
            ContentPlaceholder::CodePlaceholder { .. } => "CodePlaceholder",
            ContentPlaceholder::MathPlaceholder { .. } => "MathPlaceholder",
            ContentPlaceholder::LayoutPlaceholder { .. } => "LayoutPlaceholder",
        }
    }
}

/// A named slide layout inside a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideTemplate {
    /// The layout name a slide refers to with `as <name>`.
    pub name: String,

    /// Top-level placeholders, in declaration order.
    #[serde(default)]
    pub content: Vec<ContentPlaceholder>,

    /// Raw CSS declarations applied to every slide using this layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
}
