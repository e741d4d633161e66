//! Inline span resolution.
//!
//! Splits a line of text into plain text, bold (`**x**`) and italic (`*x*`)
//! spans. Spans never nest and never overlap; markers that do not form a
//! valid pair stay in the output as literal text.

use linemark_core::Inline;

const BOLD: &str = "**";
const ITALIC: &str = "*";

/// Resolve bold and italic spans in `text`, left to right.
pub fn resolve_spans(text: &str) -> Vec<Inline> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'*' {
            i += 1;
            continue;
        }

        // Bold first so `**` is never split into two italic markers
        let found = match_pair(text, i, BOLD)
            .map(|(inner, end)| (Inline::strong(inner), end))
            .or_else(|| {
                match_pair(text, i, ITALIC).map(|(inner, end)| (Inline::emphasis(inner), end))
            });

        match found {
            Some((span, end)) => {
                push_text(&mut spans, &text[literal_start..i]);
                spans.push(span);
                i = end;
                literal_start = end;
            }
            None => i += 1,
        }
    }

    push_text(&mut spans, &text[literal_start..]);
    spans
}

/// Match `marker` at `start` against its first closing occurrence.
///
/// Returns the inner text and the byte offset just past the closing marker.
fn match_pair<'a>(text: &'a str, start: usize, marker: &str) -> Option<(&'a str, usize)> {
    let rest = text[start..].strip_prefix(marker)?;
    let close = rest.find(marker)?;
    let inner = &rest[..close];

    if !is_flanked(inner) {
        return None;
    }

    Some((inner, start + marker.len() + close + marker.len()))
}

/// Non-empty, and neither starts nor ends with whitespace.
fn is_flanked(inner: &str) -> bool {
    match (inner.chars().next(), inner.chars().next_back()) {
        (Some(first), Some(last)) => !first.is_whitespace() && !last.is_whitespace(),
        _ => false,
    }
}

fn push_text(spans: &mut Vec<Inline>, text: &str) {
    if !text.is_empty() {
        spans.push(Inline::text(text));
    }
}
