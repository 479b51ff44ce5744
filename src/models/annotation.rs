use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A coordinate expressed as a percentage of the annotated image.
///
/// Accepts either a bare number (`12.5`) or a percent string (`"12.5%"`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Percent(pub f64);

impl Percent {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Percent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Percent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Percent(n)),
            Raw::Text(s) => s
                .trim()
                .trim_end_matches('%')
                .trim()
                .parse::<f64>()
                .map(Percent)
                .map_err(|_| serde::de::Error::custom(format!("invalid percentage '{}'", s))),
        }
    }
}

/// A shape drawn over an image, optionally revealed at a given fragment step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$type", rename_all_fields = "camelCase")]
pub enum Annotation {
    /// A rectangle with its top-left corner at (`x`, `y`).
    RectAnnotation {
        x: Percent,
        y: Percent,
        w: Percent,
        h: Percent,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        step: Option<u32>,
    },
    /// An arrow from (`x1`, `y1`) pointing at (`x2`, `y2`).
    ArrowAnnotation {
        x1: Percent,
        y1: Percent,
        x2: Percent,
        y2: Percent,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        step: Option<u32>,
    },
}

impl Annotation {
    pub fn step(&self) -> Option<u32> {
        match self {
            Annotation::RectAnnotation { step, .. } | Annotation::ArrowAnnotation { step, .. } => {
                *step
            }
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Annotation::RectAnnotation { label, .. }
            | Annotation::ArrowAnnotation { label, .. } => label.as_deref(),
        }
    }
}
