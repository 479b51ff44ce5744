//! Generates the deck's HTML markup.
//!
//! Every slide becomes a `<section>` of the reveal.js `.slides` container and
//! every content node an element carrying its identity as a CSS class, plus
//! fragment classes and attributes when it is animated. The stylesheet and
//! behavior script select elements through exactly these classes.

mod annotations;
pub(crate) mod code;
mod media;
mod structure;
mod text;
pub(crate) mod utils;

use std::fmt::Write;

use log::info;

use super::GenerationContext;
use crate::errors::Result;
use structure::write_slide;
use utils::escape_html_text;

pub use media::youtube_video_id;

/// Nesting level of `<section>` elements inside the document shell.
const SLIDE_LEVEL: usize = 3;

/// Generates the complete HTML document for the presentation in `ctx`.
///
/// Slides are written in order, each as one `<section>`. Identities are
/// requested from the shared registry as nodes are visited, so running the
/// markup first numbers them in document order.
///
/// # Arguments
/// * `ctx` - The generation context holding the presentation, its bindings and
///   the identity registry shared with the other generators.
///
/// # Returns
/// A `Result<String>` with the full document, or a `GenerationError` if an
/// asset cannot be copied or the output cannot be written.
pub fn generate_markup(ctx: &GenerationContext<'_>) -> Result<String> {
    let presentation = ctx.presentation;
    let mut slides = String::new();
    for slide in &presentation.slides {
        write_slide(ctx, slide, SLIDE_LEVEL, &mut slides)?;
    }

    let mut out = String::new();
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "  <meta charset=\"utf-8\">")?;
    writeln!(out, "  <title>{}</title>", escape_html_text(&presentation.name))?;
    writeln!(
        out,
        "  <link rel=\"stylesheet\" href=\"{}\">",
        ctx.config.stylesheet_href
    )?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "  <div class=\"reveal\">")?;
    writeln!(out, "    <div class=\"slides\">")?;
    out.push_str(&slides);
    writeln!(out, "    </div>")?;
    writeln!(out, "  </div>")?;
    writeln!(
        out,
        "  <script type=\"module\" src=\"{}\"></script>",
        ctx.config.script_src
    )?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;

    info!(
        "Generated markup for '{}' ({} slides)",
        presentation.name,
        presentation.slides.len()
    );
    Ok(out)
}

#[cfg(test)]
mod tests;
