//! Slides, layout blocks and the per-variant dispatch.

use std::fmt::Write;

use log::debug;

use super::annotations::write_annotated_image;
use super::code::write_code_block;
use super::media::{write_image, write_model, write_video};
use super::text::{write_free_text, write_list, write_math, ListTag};
use super::utils::{escape_xml, pad, Fragment};
use crate::converters::GenerationContext;
use crate::errors::Result;
use crate::layout::classes_for;
use crate::models::content::Content;
use crate::models::document::Slide;

/// Writes one `<section>` and all of its content.
pub(crate) fn write_slide<'a>(
    ctx: &GenerationContext<'a>,
    slide: &'a Slide,
    level: usize,
    out: &mut String,
) -> Result<()> {
    let id = ctx.identities.identity(slide);
    let classes = classes_for(slide.layout.as_ref());
    debug!("[write_slide] {} classes='{}'", id, classes);

    write!(out, "{}<section class=\"{} {}\"", pad(level), classes, id)?;
    if let Some(title) = &slide.title {
        write!(out, " data-title=\"{}\"", escape_xml(title))?;
    }
    writeln!(out, ">")?;
    for content in &slide.contents {
        write_content(ctx, content, level + 1, out)?;
    }
    writeln!(out, "{}</section>", pad(level))?;
    Ok(())
}

/// Writes a content node, depth first.
pub(crate) fn write_content<'a>(
    ctx: &GenerationContext<'a>,
    content: &'a Content,
    level: usize,
    out: &mut String,
) -> Result<()> {
    let id = ctx.identities.identity(content);
    let fragment = Fragment::for_animation(content.common().animation.as_ref());

    match content {
        Content::FreeText(text) => write_free_text(text, &id, &fragment, level, out),
        Content::UnorderedList(list) => {
            write_list(ctx, list, ListTag::Ul, &id, &fragment, level, out)
        }
        Content::OrderedList(list) => {
            write_list(ctx, list, ListTag::Ol, &id, &fragment, level, out)
        }
        Content::Image(image) if image.annotations.is_empty() => {
            write_image(ctx, image, &id, &fragment, level, out)
        }
        Content::Image(image) => write_annotated_image(ctx, image, &id, &fragment, level, out),
        Content::Video(video) => write_video(ctx, video, &id, &fragment, level, out),
        Content::Model3D(model) => write_model(ctx, model, &id, &fragment, level, out),
        Content::CodeBlock(code) => write_code_block(ctx, code, &id, &fragment, level, out),
        Content::MathBlock(math) => write_math(math, &id, &fragment, level, out),
        Content::LayoutBlock(block) => {
            let style = block.layout.as_ref().or_else(|| {
                ctx.bindings
                    .placeholder(content)
                    .and_then(|placeholder| placeholder.layout())
            });
            let classes = classes_for(style);
            writeln!(
                out,
                "{}<div class=\"layout {} {}{}\"{}>",
                pad(level),
                classes,
                id,
                fragment.class_suffix,
                fragment.attrs
            )?;
            for child in &block.elements {
                write_content(ctx, child, level + 1, out)?;
            }
            writeln!(out, "{}</div>", pad(level))?;
            Ok(())
        }
    }
}
