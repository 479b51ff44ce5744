//! Effective layout classes of slides and layout blocks.

use std::fmt;

use crate::models::style::{Alignment, LayoutOption, LayoutStyle, LayoutType};

pub const DEFAULT_LAYOUT: LayoutType = LayoutType::Vertical;
pub const DEFAULT_V_ALIGNMENT: Alignment = Alignment::Center;
pub const DEFAULT_H_ALIGNMENT: Alignment = Alignment::Center;

/// The class triple emitted on a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutClasses {
    pub layout_type: LayoutType,
    pub vertical: Alignment,
    pub horizontal: Alignment,
}

impl Default for LayoutClasses {
    fn default() -> Self {
        Self {
            layout_type: DEFAULT_LAYOUT,
            vertical: DEFAULT_V_ALIGNMENT,
            horizontal: DEFAULT_H_ALIGNMENT,
        }
    }
}

impl fmt::Display for LayoutClasses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} v-align-{} h-align-{}",
            self.layout_type, self.vertical, self.horizontal
        )
    }
}

/// Resolves the classes for an optional layout style.
///
/// Options are applied in declaration order, so the last option of a kind
/// wins. For a vertical layout the two alignments are swapped afterwards: the
/// stylesheet maps `v-align-*` to `align-items` and `h-align-*` to
/// `justify-content`, and in a flex column those properties act on the
/// horizontal and vertical axis respectively.
pub fn classes_for(style: Option<&LayoutStyle>) -> LayoutClasses {
    let mut classes = LayoutClasses::default();
    let Some(style) = style else {
        return classes;
    };

    for option in &style.options {
        match *option {
            LayoutOption::LayoutTypeOption { layout_type } => classes.layout_type = layout_type,
            LayoutOption::VAlignOption { vertical_alignment } => {
                classes.vertical = vertical_alignment
            }
            LayoutOption::HAlignOption {
                horizontal_alignment,
            } => classes.horizontal = horizontal_alignment,
        }
    }

    if classes.layout_type == LayoutType::Vertical {
        std::mem::swap(&mut classes.vertical, &mut classes.horizontal);
    }
    classes
}
