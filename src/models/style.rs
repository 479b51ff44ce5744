use std::fmt;

use serde::{Deserialize, Serialize};

/// Stacking direction of a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    /// Children stacked top to bottom (a flex column).
    Vertical,
    /// Children side by side (a flex row).
    Horizontal,
}

impl LayoutType {
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutType::Vertical => "vertical",
            LayoutType::Horizontal => "horizontal",
        }
    }
}

impl fmt::Display for LayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of children along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Start,
    Center,
    End,
}

impl Alignment {
    pub const ALL: [Alignment; 3] = [Alignment::Start, Alignment::Center, Alignment::End];

    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Start => "start",
            Alignment::Center => "center",
            Alignment::End => "end",
        }
    }

    /// The flexbox keyword for this alignment.
    pub fn flex_value(self) -> &'static str {
        match self {
            Alignment::Start => "flex-start",
            Alignment::Center => "center",
            Alignment::End => "flex-end",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry of a `layout` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "$type", rename_all_fields = "camelCase")]
pub enum LayoutOption {
    LayoutTypeOption { layout_type: LayoutType },
    VAlignOption { vertical_alignment: Alignment },
    HAlignOption { horizontal_alignment: Alignment },
}

/// Direction and alignment options of a slide or layout block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutStyle {
    #[serde(default)]
    pub options: Vec<LayoutOption>,
}

/// Explicit dimensions of a content node. Values are CSS lengths, passed
/// through verbatim (`"50%"`, `"320px"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
}

impl Size {
    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }
}

/// Incremental-reveal settings of a content node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    /// The reveal.js fragment effect, e.g. `fade-in`, `grow`.
    pub effect: String,
    /// Explicit fragment step. Without it the viewer uses document order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    /// Transition duration in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u32>,
}
