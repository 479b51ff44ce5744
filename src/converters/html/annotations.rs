//! Vector overlays drawn over annotated images.

use std::fmt::Write;

use super::utils::{escape_xml, pad, strip_quotes, Fragment};
use crate::assets::media_src;
use crate::converters::GenerationContext;
use crate::errors::Result;
use crate::models::annotation::Annotation;
use crate::models::content::ImageBlock;

/// Writes the image and its overlay inside an `annotated-media` wrapper.
/// The wrapper carries the node's identity and fragment state.
pub(crate) fn write_annotated_image(
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
        "{}<div class=\"annotated-media {}{}\"{}>",
        pad(level),
        id,
        fragment.class_suffix,
        fragment.attrs
    )?;
    writeln!(
        out,
        "{}<img class=\"annotated-image\" src=\"{}\" alt=\"\" />",
        pad(level + 1),
        src
    )?;
    for line in annotation_svg(&image.annotations, id)?.lines() {
        writeln!(out, "{}{}", pad(level + 1), line)?;
    }
    writeln!(out, "{}</div>", pad(level))?;
    Ok(())
}

/// Renders annotations as an SVG layer in a 100x100 percentage viewBox.
///
/// Each shape and label revealed at a step is a fragment of its own, so the
/// viewer stages annotations exactly like text fragments. `owner` keeps the
/// arrowhead marker id unique per image.
pub fn annotation_svg(annotations: &[Annotation], owner: &str) -> Result<String> {
    let marker_id = format!("arrowhead-{}", owner);
    let mut svg = String::new();
    writeln!(
        svg,
        "<svg class=\"annotation-layer\" viewBox=\"0 0 100 100\" preserveAspectRatio=\"none\" aria-hidden=\"true\">"
    )?;
    writeln!(svg, "  <defs>")?;
    writeln!(
        svg,
        "    <marker id=\"{}\" markerWidth=\"6\" markerHeight=\"6\" refX=\"5\" refY=\"3\" orient=\"auto\">",
        marker_id
    )?;
    writeln!(svg, "      <path d=\"M0,0 L6,3 L0,6 Z\" class=\"anno-arrowhead\" />")?;
    writeln!(svg, "    </marker>")?;
    writeln!(svg, "  </defs>")?;

    for annotation in annotations {
        let frag = Fragment::for_step(annotation.step());
        let label_at = match *annotation {
            Annotation::RectAnnotation { x, y, w, h, .. } => {
                writeln!(
                    svg,
                    "  <rect class=\"anno-rect{}\"{} x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"1\" ry=\"1\" />",
                    frag.class_suffix, frag.attrs, x, y, w, h
                )?;
                (x.value(), y.value())
            }
            Annotation::ArrowAnnotation { x1, y1, x2, y2, .. } => {
                writeln!(
                    svg,
                    "  <line class=\"anno-arrow{}\"{} x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" marker-end=\"url(#{})\" />",
                    frag.class_suffix, frag.attrs, x1, y1, x2, y2, marker_id
                )?;
                ((x1.value() + x2.value()) / 2.0, (y1.value() + y2.value()) / 2.0)
            }
        };
        if let Some(label) = annotation.label() {
            writeln!(
                svg,
                "  <text class=\"anno-label{}\"{} x=\"{}\" y=\"{}\">{}</text>",
                frag.class_suffix,
                frag.attrs,
                label_at.0,
                label_at.1,
                escape_xml(strip_quotes(label))
            )?;
        }
    }
    write!(svg, "</svg>")?;
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::annotation::Percent;

    #[test]
    fn test_rect_and_arrow_with_steps_and_labels() {
        let annotations = vec![
            Annotation::RectAnnotation {
                x: Percent(10.0),
                y: Percent(20.0),
                w: Percent(30.0),
                h: Percent(15.5),
                label: Some("\"A <b>\"".into()),
                step: Some(1),
            },
            Annotation::ArrowAnnotation {
                x1: Percent(0.0),
                y1: Percent(0.0),
                x2: Percent(50.0),
                y2: Percent(25.0),
                label: Some("here".into()),
                step: None,
            },
        ];
        let svg = annotation_svg(&annotations, "content-4").unwrap();

        assert!(svg.starts_with("<svg class=\"annotation-layer\""));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(
            "<rect class=\"anno-rect fragment\" data-fragment-index=\"1\" x=\"10\" y=\"20\" width=\"30\" height=\"15.5\" rx=\"1\" ry=\"1\" />"
        ));
        assert!(svg.contains(
            "<text class=\"anno-label fragment\" data-fragment-index=\"1\" x=\"10\" y=\"20\">A &lt;b&gt;</text>"
        ));
        assert!(svg.contains(
            "<line class=\"anno-arrow\" x1=\"0\" y1=\"0\" x2=\"50\" y2=\"25\" marker-end=\"url(#arrowhead-content-4)\" />"
        ));
        assert!(svg.contains("<text class=\"anno-label\" x=\"25\" y=\"12.5\">here</text>"));
        assert!(svg.contains("<marker id=\"arrowhead-content-4\""));
    }
}
