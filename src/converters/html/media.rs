//! Images, videos and 3D models.

use std::fmt::Write;

use super::utils::{escape_xml, pad, Fragment};
use crate::assets::media_src;
use crate::converters::GenerationContext;
use crate::errors::Result;
use crate::models::content::{ImageBlock, MediaBlock};

const YOUTUBE_EMBED: &str = "https://www.youtube.com/embed/";

/// Extracts the video id of a YouTube watch (`youtube.com/watch?v=ID`) or
/// short (`youtu.be/ID`) link.
pub fn youtube_video_id(url: &str) -> Option<&str> {
    if let Some((_, rest)) = url.split_once("youtu.be/") {
        let id = rest.split(['?', '#', '/']).next().unwrap_or_default();
        return (!id.is_empty()).then_some(id);
    }
    if url.contains("youtube.com/watch") {
        let query = url.split_once('?')?.1;
        let query = query.split('#').next().unwrap_or_default();
        return query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "v")
            .map(|(_, value)| value)
            .filter(|value| !value.is_empty());
    }
    None
}

pub(crate) fn write_image(
    ctx: &GenerationContext<'_>,
    image: &ImageBlock,
    id: &str,
    fragment: &Fragment,
    level: usize,
    out: &mut String,
) -> Result<()> {
    let src = escape_xml(&media_src(&image.url, ctx.assets)?);
    writeln!(
        out,
        "{}<img class=\"{}{}\"{} src=\"{}\" alt=\"\" />",
        pad(level),
        id,
        fragment.class_suffix,
        fragment.attrs,
        src
    )?;
    Ok(())
}

/// Writes an embedded YouTube player for YouTube links, a native `<video>`
/// element otherwise.
pub(crate) fn write_video(
    ctx: &GenerationContext<'_>,
    video: &MediaBlock,
    id: &str,
    fragment: &Fragment,
    level: usize,
    out: &mut String,
) -> Result<()> {
    let src = media_src(&video.url, ctx.assets)?;
    match youtube_video_id(&src) {
        Some(video_id) => writeln!(
            out,
            "{}<iframe src=\"{}{}\" class=\"{}{}\"{} frameborder=\"0\" allowfullscreen></iframe>",
            pad(level),
            YOUTUBE_EMBED,
            escape_xml(video_id),
            id,
            fragment.class_suffix,
            fragment.attrs
        )?,
        None => writeln!(
            out,
            "{}<video src=\"{}\" class=\"{}{}\"{} controls></video>",
            pad(level),
            escape_xml(&src),
            id,
            fragment.class_suffix,
            fragment.attrs
        )?,
    }
    Ok(())
}

pub(crate) fn write_model(
    ctx: &GenerationContext<'_>,
    model: &MediaBlock,
    id: &str,
    fragment: &Fragment,
    level: usize,
    out: &mut String,
) -> Result<()> {
    let src = escape_xml(&media_src(&model.url, ctx.assets)?);
    writeln!(
        out,
        "{}<model-viewer class=\"{}{}\"{} src=\"{}\" alt=\"\" camera-controls></model-viewer>",
        pad(level),
        id,
        fragment.class_suffix,
        fragment.attrs,
        src
    )?;
    Ok(())
}
