use std::fmt;

use serde::{Deserialize, Serialize};

/// One line or an inclusive range of lines, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "$type", rename_all_fields = "camelCase")]
pub enum LineSpec {
    SimpleLineHighlight { line: u32 },
    RangeLineHighlight { start_line: u32, end_line: u32 },
}

impl fmt::Display for LineSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineSpec::SimpleLineHighlight { line } => write!(f, "{}", line),
            LineSpec::RangeLineHighlight {
                start_line,
                end_line,
            } => write!(f, "{}-{}", start_line, end_line),
        }
    }
}

/// The set of lines highlighted during one step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineHighlight {
    #[serde(default)]
    pub lines: Vec<LineSpec>,
}

impl fmt::Display for LineHighlight {
    /// Renders as reveal.js expects inside `data-line-numbers`: `1,3-5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, spec) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", spec)?;
        }
        Ok(())
    }
}

/// A step of a visual highlight: the lines to highlight and the legend image
/// to show while they are highlighted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualStep {
    pub line_highlight: LineHighlight,
    /// Legend image for this step. A step without one keeps the previous image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Step-by-step line highlighting of a code block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum CodeHighlight {
    SimpleHighlight {
        #[serde(default)]
        steps: Vec<LineHighlight>,
    },
    VisualHighlight {
        #[serde(default)]
        steps: Vec<VisualStep>,
    },
}

impl CodeHighlight {
    /// Line sets of every step, in order.
    pub fn line_steps(&self) -> Vec<&LineHighlight> {
        match self {
            CodeHighlight::SimpleHighlight { steps } => steps.iter().collect(),
            CodeHighlight::VisualHighlight { steps } => {
                steps.iter().map(|s| &s.line_highlight).collect()
            }
        }
    }

    pub fn is_visual(&self) -> bool {
        matches!(self, CodeHighlight::VisualHighlight { .. })
    }
}
