//! Code blocks with stepped line highlighting.

use std::fmt::Write;

use super::utils::{escape_html_text, escape_xml, pad, Fragment};
use crate::assets::media_src;
use crate::converters::runtime::step_sync::image_index;
use crate::converters::GenerationContext;
use crate::errors::Result;
use crate::models::content::CodeBlock;
use crate::models::highlight::{CodeHighlight, LineHighlight, VisualStep};

/// Separates highlight steps inside `data-line-numbers` and image URLs inside
/// `data-image-steps`.
pub const STEP_SEPARATOR: &str = "|";

/// Renders the steps as reveal.js expects them: `1,3-5|7`.
pub fn line_numbers(steps: &[&LineHighlight]) -> String {
    steps
        .iter()
        .map(|step| step.to_string())
        .collect::<Vec<_>>()
        .join(STEP_SEPARATOR)
}

/// One legend image per step.
///
/// A step without an image keeps the previous one. Leading steps without an
/// image show the first image of the list, so the list always lines up with
/// the steps when any step has an image at all.
pub fn image_steps(ctx: &GenerationContext<'_>, steps: &[VisualStep]) -> Result<Vec<String>> {
    let mut carried: Vec<Option<String>> = Vec::with_capacity(steps.len());
    let mut last: Option<String> = None;
    for step in steps {
        if let Some(url) = &step.url {
            last = Some(media_src(url, ctx.assets)?);
        }
        carried.push(last.clone());
    }

    let Some(first) = carried.iter().flatten().next().cloned() else {
        return Ok(Vec::new());
    };
    Ok(carried
        .into_iter()
        .map(|url| url.unwrap_or_else(|| first.clone()))
        .collect())
}

pub(crate) fn write_code_block(
    ctx: &GenerationContext<'_>,
    code: &CodeBlock,
    id: &str,
    fragment: &Fragment,
    level: usize,
    out: &mut String,
) -> Result<()> {
    let mut code_attrs = String::new();
    let mut legend: Option<String> = None;

    if let Some(highlight) = &code.highlight {
        write!(
            code_attrs,
            " data-line-numbers=\"{}\"",
            line_numbers(&highlight.line_steps())
        )?;
        if let CodeHighlight::VisualHighlight { steps } = highlight {
            let images = image_steps(ctx, steps)?;
            if let Some(first) = image_index(0, images.len()) {
                write!(
                    code_attrs,
                    " data-target=\".highlight-{}\" data-image-steps=\"{}\"",
                    id,
                    escape_xml(&images.join(STEP_SEPARATOR))
                )?;
                legend = Some(escape_xml(&images[first]));
            }
        }
    }

    writeln!(out, "{}<div class=\"code-block {} horizontal\">", pad(level), id)?;
    let pre_class = fragment.class_suffix.trim();
    if pre_class.is_empty() {
        writeln!(out, "{}<pre{}>", pad(level + 1), fragment.attrs)?;
    } else {
        writeln!(
            out,
            "{}<pre class=\"{}\"{}>",
            pad(level + 1),
            pre_class,
            fragment.attrs
        )?;
    }
    writeln!(
        out,
        "{}<code data-trim{} class=\"language-{}\">",
        pad(level + 2),
        code_attrs,
        escape_xml(&code.language)
    )?;
    for line in code.code.split('\n') {
        writeln!(out, "{}{}", pad(level + 2), escape_html_text(line))?;
    }
    writeln!(out, "{}</code>", pad(level + 2))?;
    writeln!(out, "{}</pre>", pad(level + 1))?;
    if let Some(src) = legend {
        writeln!(
            out,
            "{}<img alt=\"Legend for code highlighting\" class=\"highlight-{}\" src=\"{}\" />",
            pad(level + 1),
            id,
            src
        )?;
    }
    writeln!(out, "{}</div>", pad(level))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::highlight::LineSpec;

    fn lines(specs: Vec<LineSpec>) -> LineHighlight {
        LineHighlight { lines: specs }
    }

    #[test]
    fn test_line_numbers_join_steps_with_pipes() {
        let a = lines(vec![
            LineSpec::SimpleLineHighlight { line: 1 },
            LineSpec::RangeLineHighlight {
                start_line: 3,
                end_line: 5,
            },
        ]);
        let b = lines(vec![LineSpec::SimpleLineHighlight { line: 7 }]);
        assert_eq!(line_numbers(&[&a, &b]), "1,3-5|7");
        assert_eq!(line_numbers(&[]), "");
    }
}
