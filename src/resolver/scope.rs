//! Candidate placeholder sets visible from a content node.

use crate::models::document::Template;
use crate::models::template::{ContentPlaceholder, SlideTemplate};

/// Where a content node sits, as far as placeholder scoping is concerned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentScope<'a> {
    /// A direct child of the slide.
    Slide,
    /// Nested inside a layout block, carrying that block's own binding.
    LayoutBlock {
        binding: Option<&'a ContentPlaceholder>,
    },
}

/// All placeholders reachable from `placeholders`, pre-order, descending into
/// every layout placeholder.
pub fn flatten<'a>(placeholders: &'a [ContentPlaceholder]) -> Vec<&'a ContentPlaceholder> {
    let mut out = Vec::new();
    collect(placeholders, &mut out);
    out
}

fn collect<'a>(placeholders: &'a [ContentPlaceholder], out: &mut Vec<&'a ContentPlaceholder>) {
    for placeholder in placeholders {
        out.push(placeholder);
        collect(placeholder.nested(), out);
    }
}

/// The placeholders a content node may bind to.
///
/// A layout block bound to a layout placeholder opens a private scope: only
/// the placeholders declared under that layout are visible to its children.
/// Without a slide template every slide template of the imported template is
/// searched.
pub fn candidates<'a>(
    template: &'a Template,
    slide_template: Option<&'a SlideTemplate>,
    scope: ContentScope<'a>,
) -> Vec<&'a ContentPlaceholder> {
    if let ContentScope::LayoutBlock {
        binding: Some(layout),
    } = scope
    {
        if layout.is_layout() {
            return flatten(layout.nested());
        }
    }

    match slide_template {
        Some(slide_template) => flatten(&slide_template.content),
        None => template
            .slide_templates
            .iter()
            .flat_map(|st| flatten(&st.content))
            .collect(),
    }
}
