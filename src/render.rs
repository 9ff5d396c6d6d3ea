//! Highlighted snippet rendering with surrounding context.
//!
//! Tokens are joined with single spaces. In the plain style matched tokens
//! are wrapped as `[[token]]`, unmatched ones as `{{token}}`, and truncated
//! context is marked with `...`. Since tokens never contain whitespace,
//! [`locate_highlights`] can recover the highlighted span from a plain
//! snippet.

use crate::models::{AlignmentEntry, AlignmentParams, HighlightStyle};
use colored::Colorize;

pub const MATCH_OPEN: &str = "[[";
pub const MATCH_CLOSE: &str = "]]";
pub const MISMATCH_OPEN: &str = "{{";
pub const MISMATCH_CLOSE: &str = "}}";
pub const ELLIPSIS: &str = "...";

const HTML_ELLIPSIS: &str = "&hellip;";

/// Render the aligned region of `x` with up to `params.context_tokens`
/// tokens of context on each side.
///
/// Entries must be in increasing position order, as produced by
/// [`traceback`](crate::align::traceback). Consecutive entries at the same
/// position are rendered once, using the first.
pub fn render_snippet<S: AsRef<str>>(
    x: &[S],
    entries: &[AlignmentEntry],
    params: &AlignmentParams,
) -> String {
    let (first, last) = match (entries.first(), entries.last()) {
        (Some(first), Some(last)) => (first.position, last.position),
        _ => return String::new(),
    };
    let style = params.style;
    let context = params.context_tokens;

    let mut parts: Vec<String> = Vec::with_capacity(entries.len() + 2 * context + 2);

    // Prefix
    let first = first.min(x.len());
    let prefix_start = first.saturating_sub(context);
    if prefix_start > 0 {
        parts.push(ellipsis(style).to_string());
    }
    parts.extend(x[prefix_start..first].iter().map(|t| context_token(t.as_ref(), style)));

    // Highlighted span
    let mut previous: Option<usize> = None;
    for entry in entries {
        if previous == Some(entry.position) {
            continue;
        }
        previous = Some(entry.position);
        parts.push(highlight(&entry.token, entry.matched, style));
    }

    // Suffix
    let suffix_start = (last + 1).min(x.len());
    let suffix_end = (suffix_start + context).min(x.len());
    parts.extend(x[suffix_start..suffix_end].iter().map(|t| context_token(t.as_ref(), style)));
    if suffix_end < x.len() {
        parts.push(ellipsis(style).to_string());
    }

    parts.join(" ")
}

/// Wrap one aligned token in the markers for its style.
pub fn highlight(token: &str, matched: bool, style: HighlightStyle) -> String {
    match style {
        HighlightStyle::Plain => {
            if matched {
                format!("{MATCH_OPEN}{token}{MATCH_CLOSE}")
            } else {
                format!("{MISMATCH_OPEN}{token}{MISMATCH_CLOSE}")
            }
        }
        HighlightStyle::Html => {
            let class = if matched { "match" } else { "mismatch" };
            format!("<span class=\"{}\">{}</span>", class, escape_html(token))
        }
        HighlightStyle::Ansi => {
            if matched {
                token.green().bold().to_string()
            } else {
                token.red().to_string()
            }
        }
    }
}

fn context_token(token: &str, style: HighlightStyle) -> String {
    match style {
        HighlightStyle::Html => escape_html(token),
        HighlightStyle::Plain | HighlightStyle::Ansi => token.to_string(),
    }
}

fn ellipsis(style: HighlightStyle) -> &'static str {
    match style {
        HighlightStyle::Html => HTML_ELLIPSIS,
        HighlightStyle::Plain | HighlightStyle::Ansi => ELLIPSIS,
    }
}

/// Escape text for embedding in HTML.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Recover `(token, matched)` pairs from a plain-style snippet.
///
/// Context tokens and truncation markers are skipped.
pub fn locate_highlights(snippet: &str) -> Vec<(String, bool)> {
    snippet
        .split_whitespace()
        .filter_map(|word| {
            if let Some(inner) = strip_markers(word, MATCH_OPEN, MATCH_CLOSE) {
                Some((inner.to_string(), true))
            } else {
                strip_markers(word, MISMATCH_OPEN, MISMATCH_CLOSE)
                    .map(|inner| (inner.to_string(), false))
            }
        })
        .collect()
}

fn strip_markers<'a>(word: &'a str, open: &str, close: &str) -> Option<&'a str> {
    word.strip_prefix(open)?.strip_suffix(close)
}
