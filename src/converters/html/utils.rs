//! Small helpers shared by the markup writers.

use crate::models::style::Animation;

/// Indentation for a nesting level. The markup is indented with tabs.
pub fn pad(level: usize) -> String {
    "\t".repeat(level)
}

/// Escapes the five XML special characters.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escapes text placed between tags. Quotes are left alone.
pub fn escape_html_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Removes one pair of matching surrounding quotes, if present.
pub fn strip_quotes(text: &str) -> &str {
    for quote in ['"', '\''] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return &text[1..text.len() - 1];
        }
    }
    text
}

/// Class suffix and attributes that stage a node as a reveal.js fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    /// Either empty or ` fragment {effect}`, ready to append to a class list.
    pub class_suffix: String,
    /// Either empty or a sequence of ` name="value"` attributes.
    pub attrs: String,
}

impl Fragment {
    pub fn for_animation(animation: Option<&Animation>) -> Self {
        let Some(animation) = animation else {
            return Self::default();
        };
        let mut attrs = String::new();
        if let Some(index) = animation.index {
            attrs.push_str(&format!(" data-fragment-index=\"{}\"", index));
        }
        if let Some(ms) = animation.duration_ms {
            attrs.push_str(&format!(" style=\"transition-duration: {}ms\"", ms));
        }
        Self {
            class_suffix: format!(" fragment {}", animation.effect),
            attrs,
        }
    }

    /// A plain fragment revealed at `step`, used by annotation shapes.
    pub fn for_step(step: Option<u32>) -> Self {
        match step {
            Some(step) => Self {
                class_suffix: " fragment".to_string(),
                attrs: format!(" data-fragment-index=\"{}\"", step),
            },
            None => Self::default(),
        }
    }
}
