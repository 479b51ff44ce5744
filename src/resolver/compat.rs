//! Which placeholder each content variant may bind to.

use crate::models::content::Content;
use crate::models::template::{ContentPlaceholder, MediaKind, TextKind};

/// The slot shape a content node fills or a placeholder offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Text(TextKind),
    Media(MediaKind),
    Code,
    Math,
    Layout,
}

impl Slot {
    fn same_family(self, other: Slot) -> bool {
        matches!(
            (self, other),
            (Slot::Text(_), Slot::Text(_))
                | (Slot::Media(_), Slot::Media(_))
                | (Slot::Code, Slot::Code)
                | (Slot::Math, Slot::Math)
                | (Slot::Layout, Slot::Layout)
        )
    }
}

/// How well a bound placeholder fits the content bound to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compatibility {
    Exact,
    /// Right placeholder family, wrong sub-kind (a list bound to a freetext
    /// placeholder, a video bound to an image placeholder).
    KindMismatch,
    Incompatible,
}

/// The slot a content variant expects.
pub fn expected_slot(content: &Content) -> Slot {
    match content {
        Content::FreeText(_) => Slot::Text(TextKind::Freetext),
        Content::UnorderedList(_) => Slot::Text(TextKind::Ul),
        Content::OrderedList(_) => Slot::Text(TextKind::Ol),
        Content::Image(_) => Slot::Media(MediaKind::Image),
        Content::Video(_) => Slot::Media(MediaKind::Video),
        Content::Model3D(_) => Slot::Media(MediaKind::Model3d),
        Content::CodeBlock(_) => Slot::Code,
        Content::MathBlock(_) => Slot::Math,
        Content::LayoutBlock(_) => Slot::Layout,
    }
}

/// The slot a placeholder offers.
pub fn offered_slot(placeholder: &ContentPlaceholder) -> Slot {
    match placeholder {
        ContentPlaceholder::TextPlaceholder { kind, .. } => Slot::Text(*kind),
        ContentPlaceholder::MediaPlaceholder { kind, .. } => Slot::Media(*kind),
        ContentPlaceholder::CodePlaceholder { .. } => Slot::Code,
        ContentPlaceholder::MathPlaceholder { .. } => Slot::Math,
        ContentPlaceholder::LayoutPlaceholder { .. } => Slot::Layout,
    }
}

pub fn compatibility(content: &Content, placeholder: &ContentPlaceholder) -> Compatibility {
    let expected = expected_slot(content);
    let offered = offered_slot(placeholder);
    if expected == offered {
        Compatibility::Exact
    } else if expected.same_family(offered) {
        Compatibility::KindMismatch
    } else {
        Compatibility::Incompatible
    }
}
