use super::*;
use crate::assets::PassthroughAssets;
use crate::config::GeneratorConfig;
use crate::identity::IdentityRegistry;
use crate::lookup::{DocumentLookup, NoDocuments, Workspace};
use crate::models::annotation::{Annotation, Percent};
use crate::models::content::{
    CodeBlock, Content, ContentCommon, FreeText, ImageBlock, LayoutBlock, List, ListItem,
    MediaBlock,
};
use crate::models::document::{Document, Import, Presentation, Slide, Template};
use crate::models::highlight::{CodeHighlight, LineHighlight, LineSpec, VisualStep};
use crate::models::style::{Animation, LayoutOption, LayoutStyle, LayoutType};
use crate::models::template::{ContentPlaceholder, SlideTemplate, TextKind};
use crate::resolver::resolve;

fn text(s: &str) -> Content {
    Content::FreeText(FreeText {
        inline: Some(s.to_string()),
        block: None,
        common: ContentCommon::default(),
    })
}

fn deck(contents: Vec<Content>) -> Presentation {
    Presentation {
        name: "Deck".into(),
        import: None,
        options: vec![],
        slides: vec![Slide {
            title: None,
            template: None,
            layout: None,
            css: None,
            contents,
        }],
    }
}

fn markup_with(presentation: &Presentation, lookup: &dyn DocumentLookup) -> String {
    let bindings = resolve(presentation, lookup);
    let identities = IdentityRegistry::new();
    let assets = PassthroughAssets::default();
    let config = GeneratorConfig::default();
    let ctx = GenerationContext {
        presentation,
        bindings: &bindings,
        identities: &identities,
        assets: &assets,
        config: &config,
    };
    generate_markup(&ctx).unwrap()
}

fn markup(presentation: &Presentation) -> String {
    markup_with(presentation, &NoDocuments)
}

#[test]
fn test_hello_presentation_end_to_end() {
    let template = Template {
        name: "Basic".into(),
        font: None,
        color: None,
        options: vec![],
        slide_templates: vec![SlideTemplate {
            name: "TitleOnly".into(),
            content: vec![ContentPlaceholder::TextPlaceholder {
                name: "title".into(),
                kind: TextKind::Freetext,
                css: None,
            }],
            css: None,
        }],
    };
    let workspace = Workspace::new().with_document("basic.sdml", Document::Template(template));

    let mut hello = text("Hello");
    if let Content::FreeText(t) = &mut hello {
        t.common.placeholder = Some("title".into());
    }
    let mut presentation = deck(vec![hello]);
    presentation.import = Some(Import {
        template: "Basic".into(),
        path: "basic.sdml".into(),
    });
    presentation.slides[0].template = Some("TitleOnly".into());

    let bindings = resolve(&presentation, &workspace);
    let bound = bindings
        .placeholder(&presentation.slides[0].contents[0])
        .expect("title should resolve");
    assert_eq!(bound.name(), "title");
    assert!(bindings.issues().is_empty());

    let html = markup_with(&presentation, &workspace);
    let expected = "\t\t\t<section class=\"vertical v-align-center h-align-center slide-1\">\n\
                    \t\t\t\t<p class=\"content-1\">\n\
                    \t\t\t\t\tHello\n\
                    \t\t\t\t</p>\n\
                    \t\t\t</section>\n";
    assert!(html.contains(expected), "unexpected markup:\n{}", html);
    assert!(html.contains("<title>Deck</title>"));
    assert!(html.contains("<link rel=\"stylesheet\" href=\"style.css\">"));
    assert!(html.contains("<script type=\"module\" src=\"/main.ts\"></script>"));
}

#[test]
fn test_animation_adds_fragment_class_and_attributes() {
    let mut content = text("step");
    if let Content::FreeText(t) = &mut content {
        t.common.animation = Some(Animation {
            effect: "fade-up".into(),
            index: Some(2),
            duration_ms: None,
        });
    }
    let html = markup(&deck(vec![content]));
    assert!(html.contains("<p class=\"content-1 fragment fade-up\" data-fragment-index=\"2\">"));
}

#[test]
fn test_nested_lists_get_identities_and_hidden_markers() {
    let list = Content::UnorderedList(List {
        items: vec![
            ListItem::TextItem { text: "one".into() },
            ListItem::OrderedList(List {
                items: vec![ListItem::TextItem { text: "two".into() }],
                common: ContentCommon::default(),
            }),
        ],
        common: ContentCommon::default(),
    });
    let html = markup(&deck(vec![list]));
    assert!(html.contains("<ul class=\"content-1\">"));
    assert!(html.contains("<li>one</li>"));
    assert!(html.contains(
        "<li style=\"list-style-type: none;\">\n\t\t\t\t\t\t<ol class=\"content-2\">"
    ));
    assert!(html.contains("<li>two</li>"));
}

#[test]
fn test_layout_block_wraps_children_in_order() {
    let block = Content::LayoutBlock(LayoutBlock {
        elements: vec![text("a"), text("b")],
        ..Default::default()
    });
    let html = markup(&deck(vec![block]));
    assert!(html.contains(
        "<div class=\"layout vertical v-align-center h-align-center content-1\">"
    ));
    let a = html.find("content-2").unwrap();
    let b = html.find("content-3").unwrap();
    assert!(a < b);
}

#[test]
fn test_bound_layout_block_defaults_to_placeholder_layout() {
    let row = LayoutStyle {
        options: vec![LayoutOption::LayoutTypeOption {
            layout_type: LayoutType::Horizontal,
        }],
    };
    let template = Template {
        name: "Basic".into(),
        font: None,
        color: None,
        options: vec![],
        slide_templates: vec![SlideTemplate {
            name: "Columns".into(),
            content: vec![ContentPlaceholder::LayoutPlaceholder {
                name: "cols".into(),
                layout: Some(row),
                content: vec![],
                css: None,
            }],
            css: None,
        }],
    };
    let workspace = Workspace::new().with_document("basic.sdml", Document::Template(template));
    let bound = |layout: Option<LayoutStyle>| {
        Content::LayoutBlock(LayoutBlock {
            layout,
            elements: vec![],
            common: ContentCommon {
                placeholder: Some("cols".into()),
                ..Default::default()
            },
        })
    };
    let mut presentation = deck(vec![bound(None), bound(Some(LayoutStyle::default()))]);
    presentation.import = Some(Import {
        template: "Basic".into(),
        path: "basic.sdml".into(),
    });
    presentation.slides[0].template = Some("Columns".into());

    let html = markup_with(&presentation, &workspace);
    assert!(html.contains(
        "<div class=\"layout horizontal v-align-center h-align-center content-1\">"
    ));
    assert!(html.contains(
        "<div class=\"layout vertical v-align-center h-align-center content-2\">"
    ));
}

#[test]
fn test_annotated_image_wraps_overlay() {
    let image = Content::Image(ImageBlock {
        url: "img/chart.png".into(),
        annotations: vec![Annotation::RectAnnotation {
            x: Percent(5.0),
            y: Percent(5.0),
            w: Percent(20.0),
            h: Percent(10.0),
            label: None,
            step: Some(1),
        }],
        common: ContentCommon::default(),
    });
    let plain = Content::Image(ImageBlock {
        url: "https://example.com/logo.png".into(),
        ..Default::default()
    });
    let html = markup(&deck(vec![image, plain]));
    assert!(html.contains("<div class=\"annotated-media content-1\">"));
    assert!(html.contains(
        "<img class=\"annotated-image\" src=\"./assets/img/chart.png\" alt=\"\" />"
    ));
    assert!(html.contains("<rect class=\"anno-rect fragment\" data-fragment-index=\"1\""));
    assert!(html.contains(
        "<img class=\"content-2\" src=\"https://example.com/logo.png\" alt=\"\" />"
    ));
}

#[test]
fn test_youtube_video_becomes_embed() {
    let video = Content::Video(MediaBlock {
        url: "https://youtu.be/abc123".into(),
        common: ContentCommon::default(),
    });
    let local = Content::Video(MediaBlock {
        url: "clip.mp4".into(),
        common: ContentCommon::default(),
    });
    let html = markup(&deck(vec![video, local]));
    assert!(html.contains(
        "<iframe src=\"https://www.youtube.com/embed/abc123\" class=\"content-1\""
    ));
    assert!(html.contains(
        "<video src=\"./assets/clip.mp4\" class=\"content-2\" controls></video>"
    ));
}

fn step(line: u32, url: Option<&str>) -> VisualStep {
    VisualStep {
        line_highlight: LineHighlight {
            lines: vec![LineSpec::SimpleLineHighlight { line }],
        },
        url: url.map(str::to_string),
    }
}

#[test]
fn test_visual_highlight_carries_images_forward() {
    let code = Content::CodeBlock(CodeBlock {
        language: "rust".into(),
        code: "let v = vec![1];\nif a < b {}".into(),
        highlight: Some(CodeHighlight::VisualHighlight {
            steps: vec![
                step(1, None),
                step(2, Some("img/a.png")),
                step(1, None),
                step(2, Some("https://cdn.example/b.png")),
            ],
        }),
        common: ContentCommon::default(),
    });
    let html = markup(&deck(vec![code]));
    assert!(html.contains("<div class=\"code-block content-1 horizontal\">"));
    assert!(html.contains(
        "<code data-trim data-line-numbers=\"1|2|1|2\" data-target=\".highlight-content-1\" \
         data-image-steps=\"./assets/img/a.png|./assets/img/a.png|./assets/img/a.png|https://cdn.example/b.png\" \
         class=\"language-rust\">"
    ));
    assert!(html.contains("if a &lt; b {}"));
    assert!(html.contains(
        "<img alt=\"Legend for code highlighting\" class=\"highlight-content-1\" src=\"./assets/img/a.png\" />"
    ));
}

#[test]
fn test_visual_highlight_without_images_has_no_legend() {
    let code = Content::CodeBlock(CodeBlock {
        language: "rust".into(),
        code: "fn main() {}".into(),
        highlight: Some(CodeHighlight::VisualHighlight {
            steps: vec![step(1, None), step(2, None)],
        }),
        common: ContentCommon::default(),
    });
    let html = markup(&deck(vec![code]));
    assert!(html.contains("<code data-trim data-line-numbers=\"1|2\" class=\"language-rust\">"));
    assert!(!html.contains("data-target"));
    assert!(!html.contains("data-image-steps"));
    assert!(!html.contains("<img"));
}

#[test]
fn test_attribute_values_are_escaped() {
    let image = Content::Image(ImageBlock {
        url: "https://example.com/a.png?w=1&h=\"2\"".into(),
        ..Default::default()
    });
    let code = Content::CodeBlock(CodeBlock {
        language: "js\" onload=\"x".into(),
        code: "a();".into(),
        highlight: None,
        common: ContentCommon::default(),
    });
    let html = markup(&deck(vec![image, code]));
    assert!(html.contains("src=\"https://example.com/a.png?w=1&amp;h=&quot;2&quot;\""));
    assert!(html.contains("class=\"language-js&quot; onload=&quot;x\""));
}

#[test]
fn test_simple_highlight_has_no_legend() {
    let code = Content::CodeBlock(CodeBlock {
        language: "js".into(),
        code: "a();".into(),
        highlight: Some(CodeHighlight::SimpleHighlight {
            steps: vec![LineHighlight {
                lines: vec![LineSpec::RangeLineHighlight {
                    start_line: 1,
                    end_line: 3,
                }],
            }],
        }),
        common: ContentCommon {
            animation: Some(Animation {
                effect: "fade-in".into(),
                index: None,
                duration_ms: Some(300),
            }),
            ..Default::default()
        },
    });
    let html = markup(&deck(vec![code]));
    assert!(html.contains("<pre class=\"fragment fade-in\" style=\"transition-duration: 300ms\">"));
    assert!(html.contains("<code data-trim data-line-numbers=\"1-3\" class=\"language-js\">"));
    assert!(!html.contains("Legend for code highlighting"));
}
