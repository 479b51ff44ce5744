//! Generates the deck's stylesheet.
//!
//! After the baseline, every node contributes up to three rules addressed to
//! its identity, in a fixed order so that later rules win:
//!
//! 1. its explicit size,
//! 2. the raw CSS of the placeholder (or slide template) it is bound to,
//! 3. its own raw CSS.
//!
//! Raw CSS is copied verbatim; it is never parsed or validated. A tier with
//! nothing to say emits nothing.

mod baseline;

use std::fmt::Write;

use log::{debug, info};

use super::GenerationContext;
use crate::errors::Result;
use crate::models::content::{Content, ContentCommon, List, ListItem};
use crate::models::document::{Slide, Template};
use crate::models::style::Size;

pub use baseline::write_baseline;

/// Generates the stylesheet for the presentation in `ctx`.
///
/// # Returns
/// A `Result<String>` holding the baseline, the template defaults and then
/// the per-slide rules, in the order described in the module docs.
pub fn generate_stylesheet(ctx: &GenerationContext<'_>) -> Result<String> {
    let mut out = String::new();
    write_baseline(&mut out)?;
    if let Some(template) = ctx.bindings.template() {
        write_template_defaults(template, &mut out)?;
    }
    for slide in &ctx.presentation.slides {
        write_slide_rules(ctx, slide, &mut out)?;
    }
    info!(
        "Generated stylesheet for '{}' ({} bytes)",
        ctx.presentation.name,
        out.len()
    );
    Ok(out)
}

/// The template's default font and color for the whole deck.
fn write_template_defaults(template: &Template, out: &mut String) -> Result<()> {
    if template.font.is_none() && template.color.is_none() {
        return Ok(());
    }
    writeln!(out, "\n.reveal .slides {{")?;
    if let Some(font) = &template.font {
        writeln!(out, "  font-family: {};", font)?;
    }
    if let Some(color) = &template.color {
        writeln!(out, "  color: {};", color)?;
    }
    writeln!(out, "}}")?;
    Ok(())
}

fn write_slide_rules<'a>(
    ctx: &GenerationContext<'a>,
    slide: &'a Slide,
    out: &mut String,
) -> Result<()> {
    for content in &slide.contents {
        write_content_rules(ctx, content, out)?;
    }
    let id = ctx.identities.identity(slide);
    let template_css = ctx
        .bindings
        .slide_template(slide)
        .and_then(|t| t.css.as_deref());
    write_raw_rule(&id, template_css, out)?;
    write_raw_rule(&id, slide.css.as_deref(), out)?;
    Ok(())
}

fn write_content_rules<'a>(
    ctx: &GenerationContext<'a>,
    content: &'a Content,
    out: &mut String,
) -> Result<()> {
    match content {
        Content::LayoutBlock(block) => {
            for child in &block.elements {
                write_content_rules(ctx, child, out)?;
            }
        }
        Content::UnorderedList(list) | Content::OrderedList(list) => {
            write_nested_list_rules(ctx, list, out)?;
        }
        _ => {}
    }

    let id = ctx.identities.identity(content);
    let placeholder_css = ctx.bindings.placeholder(content).and_then(|p| p.css());
    debug!(
        "[write_content_rules] {} placeholder css: {}",
        id,
        placeholder_css.is_some()
    );
    write_tiers(&id, content.common(), placeholder_css, out)
}

/// Nested lists have no placeholder of their own, so only the size and
/// local tiers apply.
fn write_nested_list_rules<'a>(
    ctx: &GenerationContext<'a>,
    list: &'a List,
    out: &mut String,
) -> Result<()> {
    for item in &list.items {
        let nested = match item {
            ListItem::UnorderedList(nested) | ListItem::OrderedList(nested) => nested,
            ListItem::TextItem { .. } => continue,
        };
        write_nested_list_rules(ctx, nested, out)?;
        let id = ctx.identities.identity(nested);
        write_tiers(&id, &nested.common, None, out)?;
    }
    Ok(())
}

fn write_tiers(
    id: &str,
    common: &ContentCommon,
    placeholder_css: Option<&str>,
    out: &mut String,
) -> Result<()> {
    if let Some(size) = &common.size {
        write_size_rule(id, size, out)?;
    }
    write_raw_rule(id, placeholder_css, out)?;
    write_raw_rule(id, common.css.as_deref(), out)?;
    Ok(())
}

fn write_size_rule(id: &str, size: &Size, out: &mut String) -> Result<()> {
    if size.is_empty() {
        return Ok(());
    }
    writeln!(out, "\n.{} {{", id)?;
    if let Some(width) = &size.width {
        writeln!(out, "  width: {};", width)?;
    }
    if let Some(height) = &size.height {
        writeln!(out, "  height: {};", height)?;
    }
    writeln!(out, "}}")?;
    Ok(())
}

fn write_raw_rule(id: &str, css: Option<&str>, out: &mut String) -> Result<()> {
    let Some(css) = css.map(str::trim).filter(|css| !css.is_empty()) else {
        return Ok(());
    };
    writeln!(out, "\n.{} {{", id)?;
    for line in css.lines() {
        writeln!(out, "  {}", line.trim())?;
    }
    writeln!(out, "}}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::PassthroughAssets;
    use crate::config::GeneratorConfig;
    use crate::identity::IdentityRegistry;
    use crate::lookup::Workspace;
    use crate::models::content::{FreeText, LayoutBlock};
    use crate::models::document::{Document, Import, Presentation};
    use crate::models::template::{ContentPlaceholder, SlideTemplate};
    use crate::resolver::resolve;

    fn columns_deck() -> (Presentation, Workspace) {
        let template = Template {
            name: "Basic".into(),
            font: Some("Inter".into()),
            color: Some("#222".into()),
            options: vec![],
            slide_templates: vec![SlideTemplate {
                name: "Columns".into(),
                content: vec![ContentPlaceholder::LayoutPlaceholder {
                    name: "cols".into(),
                    layout: None,
                    content: vec![],
                    css: Some("gap: 1em;".into()),
                }],
                css: Some("background: black;".into()),
            }],
        };
        let child = Content::FreeText(FreeText {
            inline: Some("left".into()),
            block: None,
            common: ContentCommon {
                css: Some("color: red;".into()),
                ..Default::default()
            },
        });
        let block = Content::LayoutBlock(LayoutBlock {
            layout: None,
            elements: vec![child],
            common: ContentCommon {
                placeholder: Some("cols".into()),
                css: Some("padding: 0;".into()),
                ..Default::default()
            },
        });
        let presentation = Presentation {
            name: "Deck".into(),
            import: Some(Import {
                template: "Basic".into(),
                path: "basic.sdml".into(),
            }),
            options: vec![],
            slides: vec![Slide {
                title: None,
                template: Some("Columns".into()),
                layout: None,
                css: Some("border: none;".into()),
                contents: vec![block],
            }],
        };
        let workspace = Workspace::new().with_document("basic.sdml", Document::Template(template));
        (presentation, workspace)
    }

    #[test]
    fn test_stylesheet_rule_order() {
        let (presentation, workspace) = columns_deck();
        let bindings = resolve(&presentation, &workspace);
        assert!(bindings.issues().is_empty());
        let identities = IdentityRegistry::new();
        let assets = PassthroughAssets::default();
        let config = GeneratorConfig::default();
        let ctx = GenerationContext {
            presentation: &presentation,
            bindings: &bindings,
            identities: &identities,
            assets: &assets,
            config: &config,
        };
        let css = generate_stylesheet(&ctx).unwrap();

        let slide = &presentation.slides[0];
        let Content::LayoutBlock(block) = &slide.contents[0] else {
            unreachable!()
        };
        let slide_id = identities.identity(slide);
        let block_id = identities.identity(&slide.contents[0]);
        let child_id = identities.identity(&block.elements[0]);
        let at = |id: &str, body: &str| {
            let rule = format!("\n.{} {{\n  {}\n}}\n", id, body);
            css.find(&rule)
                .unwrap_or_else(|| panic!("missing rule {:?} in:\n{}", rule, css))
        };

        let child = at(&child_id, "color: red;");
        let layout_placeholder = at(&block_id, "gap: 1em;");
        let layout_local = at(&block_id, "padding: 0;");
        let slide_template = at(&slide_id, "background: black;");
        let slide_local = at(&slide_id, "border: none;");
        assert!(child < layout_placeholder);
        assert!(layout_placeholder < layout_local);
        assert!(layout_local < slide_template);
        assert!(slide_template < slide_local);

        let mut baseline = String::new();
        write_baseline(&mut baseline).unwrap();
        assert!(css.starts_with(&baseline));
        assert!(css[baseline.len()..]
            .starts_with("\n.reveal .slides {\n  font-family: Inter;\n  color: #222;\n}\n"));
    }

    #[test]
    fn test_size_rule_skips_missing_dimensions() {
        let mut out = String::new();
        let size = Size {
            width: Some("50%".into()),
            height: None,
        };
        write_size_rule("content-1", &size, &mut out).unwrap();
        assert_eq!(out, "\n.content-1 {\n  width: 50%;\n}\n");

        let mut out = String::new();
        write_size_rule("content-1", &Size::default(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_raw_rule_is_verbatim_and_absent_when_blank() {
        let mut out = String::new();
        write_raw_rule("slide-2", Some("color: red;\n  not even: [css"), &mut out).unwrap();
        assert_eq!(out, "\n.slide-2 {\n  color: red;\n  not even: [css\n}\n");

        let mut out = String::new();
        write_raw_rule("slide-2", Some("   "), &mut out).unwrap();
        write_raw_rule("slide-2", None, &mut out).unwrap();
        assert!(out.is_empty());
    }
}
