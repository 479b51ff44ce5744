use std::fmt::Write;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;
use similar::{ChangeTag, TextDiff};

use super::error::{DiffError, Result};
use crate::generator::DeckArtifacts;

/// Line-level changes of one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDiff {
    pub name: String,
    pub added_lines: usize,
    pub removed_lines: usize,
    /// Unified diff with three lines of context. Empty when unchanged.
    pub unified: String,
}

impl ArtifactDiff {
    pub fn has_differences(&self) -> bool {
        self.added_lines > 0 || self.removed_lines > 0
    }
}

/// Compares the previous and the regenerated text of one artifact.
pub fn compare_artifact(base: &str, changed: &str, name: &str) -> Result<ArtifactDiff> {
    let mut diff = ArtifactDiff {
        name: name.to_string(),
        added_lines: 0,
        removed_lines: 0,
        unified: String::new(),
    };
    if base == changed {
        return Ok(diff);
    }

    let text_diff = TextDiff::from_lines(base, changed);
    for change in text_diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => diff.added_lines += 1,
            ChangeTag::Delete => diff.removed_lines += 1,
            ChangeTag::Equal => (),
        }
    }
    write!(
        diff.unified,
        "{}",
        text_diff
            .unified_diff()
            .header(name, name)
            .context_radius(3)
    )?;
    Ok(diff)
}

/// Differences of every artifact of a deck, formatted as a Markdown report.
#[derive(Debug, Clone)]
pub struct DeckDiffReport {
    pub artifacts: Vec<ArtifactDiff>,
    pub markdown_report: String,
}

impl DeckDiffReport {
    pub fn has_differences(&self) -> bool {
        self.artifacts.iter().any(ArtifactDiff::has_differences)
    }
}

/// Compares a freshly generated deck with the artifacts previously written
/// to `dir`. A missing previous artifact counts as empty.
///
/// # Arguments
/// * `dir` - The output directory of an earlier run.
/// * `deck` - The artifacts of the current run.
///
/// # Returns
/// A `Result<DeckDiffReport>` with one entry per artifact and a Markdown
/// summary, or a `DiffError` if an existing file cannot be read.
pub fn compare_with_dir(dir: &Path, deck: &DeckArtifacts) -> Result<DeckDiffReport> {
    let mut artifacts = Vec::new();
    for (name, content) in deck.files() {
        let path = dir.join(name);
        let previous = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No previous {} in {}", name, dir.display());
                String::new()
            }
            Err(source) => return Err(DiffError::Read { path, source }),
        };
        artifacts.push(compare_artifact(&previous, content, name)?);
    }
    let markdown_report = render_markdown(&artifacts)?;
    Ok(DeckDiffReport {
        artifacts,
        markdown_report,
    })
}

fn render_markdown(artifacts: &[ArtifactDiff]) -> Result<String> {
    let mut report = String::new();
    writeln!(report, "# Summary of Deck Changes\n")?;
    for artifact in artifacts {
        writeln!(report, "---")?;
        writeln!(report, "## `{}`\n", artifact.name)?;
        if !artifact.has_differences() {
            writeln!(report, "> No textual differences found.\n")?;
            continue;
        }
        writeln!(report, "> - Lines Added: {}", artifact.added_lines)?;
        writeln!(report, "> - Lines Removed: {}\n", artifact.removed_lines)?;
        writeln!(report, "```diff")?;
        report.push_str(&artifact.unified);
        if !artifact.unified.ends_with('\n') {
            report.push('\n');
        }
        writeln!(report, "```\n")?;
    }
    writeln!(report, "---")?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_artifact() {
        let css = ".content-1 {\n  color: red;\n}\n";
        let diff = compare_artifact(css, css, "style.css").unwrap();
        assert!(!diff.has_differences());
        assert!(diff.unified.is_empty());
    }

    #[test]
    fn test_changed_artifact_counts_lines() {
        let base = ".content-1 {\n  color: red;\n}\n";
        let changed = ".content-1 {\n  color: blue;\n  width: 50%;\n}\n";
        let diff = compare_artifact(base, changed, "style.css").unwrap();
        assert_eq!(diff.added_lines, 2);
        assert_eq!(diff.removed_lines, 1);
        let mut lines = diff.unified.lines();
        assert!(lines.next().is_some_and(|l| l.starts_with("--- ") && l.ends_with("style.css")));
        assert!(lines.next().is_some_and(|l| l.starts_with("+++ ") && l.ends_with("style.css")));
        assert!(diff.unified.contains("-  color: red;"));
        assert!(diff.unified.contains("+  color: blue;"));
    }

    #[test]
    fn test_report_against_missing_directory() {
        let deck = DeckArtifacts {
            markup: "<html>\n</html>\n".into(),
            stylesheet: String::new(),
            script: "Reveal.initialize({});\n".into(),
            issues: vec![],
        };
        let dir = std::env::temp_dir()
            .join(format!("slidedeck-gen-no-such-dir-{}", std::process::id()));
        let report = compare_with_dir(&dir, &deck).unwrap();
        assert!(report.has_differences());
        let md = &report.markdown_report;
        assert!(md.starts_with("# Summary of Deck Changes"));
        assert!(md.contains("## `index.html`\n\n> - Lines Added: 2"));
        assert!(md.contains("## `style.css`\n\n> No textual differences found."));
        assert!(md.contains("```diff"));
        assert!(md.ends_with("---\n"));
    }
}
