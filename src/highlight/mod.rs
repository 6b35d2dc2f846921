use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::state::KeywordSelection;

/// A run of hint text, either plain or a recognized keyword occurrence.
///
/// Concatenating the `text` of every segment in a run reconstructs the
/// original input exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Plain { text: String },
    Keyword { text: String, selected: bool },
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain { text } => text,
            Segment::Keyword { text, .. } => text,
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(self, Segment::Keyword { .. })
    }
}

/// Policy for deciding whether a match may land where earlier keywords in the
/// same pass already produced a highlight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HighlightMode {
    /// Segments produced by earlier keywords are claimed ranges; later
    /// keywords match only inside the remaining plain text.
    #[default]
    Claimed,
    /// First-occurrence heuristic kept for compatibility with existing
    /// exports: once any highlight exists, a keyword whose first occurrence
    /// in the reconstructed text falls inside a highlighted span is skipped
    /// entirely for this text. Known to under- and over-skip when repeated
    /// occurrences interleave with other highlights.
    Legacy,
}

/// Rewrite `text` into plain/keyword segments.
///
/// Keywords are processed in the order supplied (caller-defined priority).
/// Empty or whitespace-only keywords are skipped; each remaining keyword is
/// escaped and matched as a literal substring, every occurrence left to
/// right. A keyword whose pattern fails to compile is skipped with a warning
/// and processing continues.
pub fn highlight(
    text: &str,
    keywords: &[String],
    selected: &KeywordSelection,
    mode: HighlightMode,
) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut segments = vec![Segment::Plain {
        text: text.to_string(),
    }];

    for keyword in keywords {
        if keyword.trim().is_empty() {
            continue;
        }

        let pattern = match Regex::new(&regex::escape(keyword)) {
            Ok(pattern) => pattern,
            Err(error) => {
                tracing::warn!(keyword = %keyword, %error, "keyword failed to compile, skipped");
                continue;
            }
        };

        if mode == HighlightMode::Legacy && legacy_skips(&segments, keyword) {
            continue;
        }

        segments = apply_keyword(segments, &pattern, selected.contains(keyword));
    }

    segments
}

/// Wrap every match of `pattern` found in the plain segments, leaving
/// existing keyword segments untouched.
fn apply_keyword(segments: Vec<Segment>, pattern: &Regex, selected: bool) -> Vec<Segment> {
    let mut out = Vec::with_capacity(segments.len());

    for segment in segments {
        let text = match segment {
            Segment::Plain { text } => text,
            keyword @ Segment::Keyword { .. } => {
                out.push(keyword);
                continue;
            }
        };

        let mut cursor = 0;
        for found in pattern.find_iter(&text) {
            if found.start() > cursor {
                out.push(Segment::Plain {
                    text: text[cursor..found.start()].to_string(),
                });
            }
            out.push(Segment::Keyword {
                text: found.as_str().to_string(),
                selected,
            });
            cursor = found.end();
        }
        if cursor < text.len() {
            out.push(Segment::Plain {
                text: text[cursor..].to_string(),
            });
        }
    }

    out
}

/// The legacy nesting-avoidance heuristic: once any highlight exists, inspect
/// the first occurrence of the keyword literal anywhere in the reconstructed
/// text — if it falls inside an already-highlighted span, the keyword is
/// skipped. This checks the first occurrence rather than each match position,
/// which is exactly the imprecision legacy mode preserves.
fn legacy_skips(segments: &[Segment], keyword: &str) -> bool {
    if !segments.iter().any(Segment::is_keyword) {
        return false;
    }

    let full: String = segments.iter().map(Segment::text).collect();
    let Some(position) = full.find(keyword) else {
        return false;
    };

    let mut offset = 0;
    for segment in segments {
        let end = offset + segment.text().len();
        if position < end {
            return segment.is_keyword();
        }
        offset = end;
    }
    false
}
