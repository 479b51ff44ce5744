use serde::{Deserialize, Serialize};

use crate::models::annotation::Annotation;
use crate::models::highlight::CodeHighlight;
use crate::models::style::{Animation, LayoutStyle, Size};

/// Properties every content variant may carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCommon {
    /// Name of the template placeholder this content fills (`as <name>`).
    /// Resolved by name against the imported template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Raw CSS declarations local to this node. Passed through verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,

    /// Explicit width and/or height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,

    /// Incremental-reveal settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
}

/// A paragraph of text. The parser fills exactly one of `inline` or `block`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<String>,
    #[serde(flatten)]
    pub common: ContentCommon,
}

impl FreeText {
    /// Inline text if present, else the block text, else nothing.
    pub fn text(&self) -> &str {
        self.inline
            .as_deref()
            .or(self.block.as_deref())
            .unwrap_or_default()
    }
}

/// An ordered or unordered list. The list kind is carried by the enclosing
/// `Content` or `ListItem` variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    #[serde(default)]
    pub items: Vec<ListItem>,
    #[serde(flatten)]
    pub common: ContentCommon,
}

/// An entry of a list: literal text or a nested list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum ListItem {
    TextItem {
        #[serde(default)]
        text: String,
    },
    UnorderedList(List),
    OrderedList(List),
}

/// An image, optionally overlaid with annotations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageBlock {
    pub url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(flatten)]
    pub common: ContentCommon,
}

/// A video or 3D model referenced by URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaBlock {
    pub url: String,
    #[serde(flatten)]
    pub common: ContentCommon,
}

/// A listing of source code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeBlock {
    /// Language tag used by the highlighter (`rust`, `ts`, ...).
    pub language: String,
    /// The literal code, newline separated.
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<CodeHighlight>,
    #[serde(flatten)]
    pub common: ContentCommon,
}

/// A display formula in TeX notation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathBlock {
    pub formula: String,
    #[serde(flatten)]
    pub common: ContentCommon,
}

/// A flex container grouping nested content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutStyle>,
    #[serde(default)]
    pub elements: Vec<Content>,
    #[serde(flatten)]
    pub common: ContentCommon,
}

/// A content node of a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum Content {
    FreeText(FreeText),
    UnorderedList(List),
    OrderedList(List),
    Image(ImageBlock),
    Video(MediaBlock),
    Model3D(MediaBlock),
    CodeBlock(CodeBlock),
    MathBlock(MathBlock),
    LayoutBlock(LayoutBlock),
}

impl Content {
    pub fn common(&self) -> &ContentCommon {
        match self {
            Content::FreeText(t) => &t.common,
            Content::UnorderedList(l) | Content::OrderedList(l) => &l.common,
            Content::Image(i) => &i.common,
            Content::Video(m) | Content::Model3D(m) => &m.common,
            Content::CodeBlock(c) => &c.common,
            Content::MathBlock(m) => &m.common,
            Content::LayoutBlock(l) => &l.common,
        }
    }

    /// The placeholder name this node declares, if any.
    pub fn placeholder_ref(&self) -> Option<&str> {
        self.common().placeholder.as_deref()
    }

    /// Direct children of a layout block; empty for leaf variants.
    pub fn children(&self) -> &[Content] {
        match self {
            Content::LayoutBlock(l) => &l.elements,
            _ => &[],
        }
    }

    pub fn is_layout(&self) -> bool {
        matches!(self, Content::LayoutBlock(_))
    }

    /// The `$type` tag, used in diagnostics and logs.
    pub fn type_name(&self) -> &'static str {
        match self {
            Content::FreeText(_) => "FreeText",
            Content::UnorderedList(_) => "UnorderedList",
            Content::OrderedList(_) => "OrderedList",
            Content::Image(_) => "Image",
            Content::Video(_) => "Video",
            Content::Model3D(_) => "Model3D",
            Content::CodeBlock(_) => "CodeBlock",
            Content::MathBlock(_) => "MathBlock",
            Content::LayoutBlock(_) => "LayoutBlock",
        }
    }
}
