//! Paragraphs, lists and formulas.

use std::fmt::Write;

use super::utils::{pad, Fragment};
use crate::converters::GenerationContext;
use crate::errors::Result;
use crate::models::content::{FreeText, List, ListItem, MathBlock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListTag {
    Ul,
    Ol,
}

impl ListTag {
    fn as_str(self) -> &'static str {
        match self {
            ListTag::Ul => "ul",
            ListTag::Ol => "ol",
        }
    }
}

fn write_lines(text: &str, level: usize, out: &mut String) -> Result<()> {
    for line in text.split('\n') {
        writeln!(out, "{}{}", pad(level), line)?;
    }
    Ok(())
}

pub(crate) fn write_free_text(
    text: &FreeText,
    id: &str,
    fragment: &Fragment,
    level: usize,
    out: &mut String,
) -> Result<()> {
    writeln!(
        out,
        "{}<p class=\"{}{}\"{}>",
        pad(level),
        id,
        fragment.class_suffix,
        fragment.attrs
    )?;
    write_lines(text.text(), level + 1, out)?;
    writeln!(out, "{}</p>", pad(level))?;
    Ok(())
}

/// Writes a list. Nested lists get their own identity and sit inside an item
/// whose own marker is hidden, so only the nested list's markers show.
pub(crate) fn write_list<'a>(
    ctx: &GenerationContext<'a>,
    list: &'a List,
    tag: ListTag,
    id: &str,
    fragment: &Fragment,
    level: usize,
    out: &mut String,
) -> Result<()> {
    writeln!(
        out,
        "{}<{} class=\"{}{}\"{}>",
        pad(level),
        tag.as_str(),
        id,
        fragment.class_suffix,
        fragment.attrs
    )?;
    for item in &list.items {
        let (nested, nested_tag) = match item {
            ListItem::TextItem { text } => {
                writeln!(out, "{}<li>{}</li>", pad(level + 1), text)?;
                continue;
            }
            ListItem::UnorderedList(nested) => (nested, ListTag::Ul),
            ListItem::OrderedList(nested) => (nested, ListTag::Ol),
        };
        let nested_id = ctx.identities.identity(nested);
        let nested_fragment = Fragment::for_animation(nested.common.animation.as_ref());
        writeln!(out, "{}<li style=\"list-style-type: none;\">", pad(level + 1))?;
        write_list(
            ctx,
            nested,
            nested_tag,
            &nested_id,
            &nested_fragment,
            level + 2,
            out,
        )?;
        writeln!(out, "{}</li>", pad(level + 1))?;
    }
    writeln!(out, "{}</{}>", pad(level), tag.as_str())?;
    Ok(())
}

pub(crate) fn write_math(
    math: &MathBlock,
    id: &str,
    fragment: &Fragment,
    level: usize,
    out: &mut String,
) -> Result<()> {
    writeln!(
        out,
        "{}<div class=\"math {}{}\"{}>",
        pad(level),
        id,
        fragment.class_suffix,
        fragment.attrs
    )?;
    writeln!(out, "{}$$", pad(level + 1))?;
    write_lines(&math.formula, level + 1, out)?;
    writeln!(out, "{}$$", pad(level + 1))?;
    writeln!(out, "{}</div>", pad(level))?;
    Ok(())
}
