//! Built-in block rules for the linemark dialect.

use linemark_core::{Block, Inline, ListItem};
use once_cell::sync::Lazy;
use regex::Regex;

use super::{LineFilter, Rule};
use crate::cursor::LineCursor;
use crate::inline::resolve_spans;

static BLOCK_QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^>").unwrap());
static HEADING1: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#(?:[^#]|$)").unwrap());
static HEADING2: Lazy<Regex> = Lazy::new(|| Regex::new(r"^##").unwrap());
static NUMBERED_LIST: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]\.(?:\s|$)").unwrap());
static ITALIC_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*[[:alnum:]]+(?: +[[:alnum:]]+)*\*$").unwrap());
static BOLD_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*\*(?:[[:alnum:]]+(?: +[[:alnum:]]+)*)?\*\*$").unwrap());
static BULLETED_LIST: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*\w*(?:\s|$)").unwrap());
static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^---$").unwrap());
static FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^```$").unwrap());
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^`+[^`]*`+$").unwrap());

/// Create all built-in rules, in dispatch order
pub fn markup_rules() -> Vec<(&'static str, Rule)> {
    vec![
        ("block_quote", block_quote_rule()),
        ("heading1", heading_rule(&HEADING1, 1)),
        ("heading2", heading_rule(&HEADING2, 2)),
        ("numbered_list", numbered_list_rule()),
        ("italic_line", italic_line_rule()),
        ("bold_line", bold_line_rule()),
        ("bulleted_list", bulleted_list_rule()),
        ("separator", separator_rule()),
        ("fenced_code", fenced_code_rule()),
        ("inline_code", inline_code_rule()),
        ("paragraph", paragraph_rule()),
    ]
}

fn block_quote_rule() -> Rule {
    Rule::single_line(LineFilter::pattern(&BLOCK_QUOTE), |line| {
        let text = strip_one_space(&line[1..]);
        let content = if text.is_empty() {
            Vec::new()
        } else {
            vec![Inline::text(text)]
        };
        Some(Block::BlockQuote(vec![Block::Paragraph(content)]))
    })
}

fn heading_rule(pattern: &Regex, level: u8) -> Rule {
    let marker_len = usize::from(level);
    Rule::single_line(LineFilter::pattern(pattern), move |line| {
        let text = line[marker_len..].trim_start_matches(' ');
        Some(Block::Heading {
            level,
            content: resolve_spans(text),
        })
    })
}

fn numbered_list_rule() -> Rule {
    Rule::new(LineFilter::pattern(&NUMBERED_LIST), |cursor| {
        // `<digit>.` is two ASCII bytes
        let items = collect_run(cursor, &NUMBERED_LIST, |line| strip_one_space(&line[2..]));
        Some(Block::List {
            ordered: true,
            items,
        })
    })
}

fn italic_line_rule() -> Rule {
    Rule::single_line(LineFilter::pattern(&ITALIC_LINE), |line| {
        Some(Block::Paragraph(vec![Inline::emphasis(line.trim_matches('*'))]))
    })
}

/// A whole line of `**words**` becomes a paragraph holding one bold span.
///
/// `****` matches too and yields an empty bold span, unlike the same text
/// inside a line, where `resolve_spans` keeps it literal.
fn bold_line_rule() -> Rule {
    Rule::single_line(LineFilter::pattern(&BOLD_LINE), |line| {
        Some(Block::Paragraph(vec![Inline::strong(line.trim_matches('*'))]))
    })
}

fn bulleted_list_rule() -> Rule {
    Rule::new(LineFilter::pattern(&BULLETED_LIST), |cursor| {
        let items = collect_run(cursor, &BULLETED_LIST, |line| strip_one_space(&line[1..]));
        Some(Block::List {
            ordered: false,
            items,
        })
    })
}

fn separator_rule() -> Rule {
    Rule::single_line(LineFilter::pattern(&SEPARATOR), |_| Some(Block::Separator))
}

fn fenced_code_rule() -> Rule {
    Rule::new(LineFilter::pattern(&FENCE), |cursor| {
        cursor.advance();

        let mut lines = Vec::new();
        while let Some(line) = cursor.peek() {
            if FENCE.is_match(line) {
                cursor.advance();
                break;
            }
            lines.extend(cursor.advance());
        }

        Some(Block::CodeBlock {
            code: lines.join("\n"),
        })
    })
}

fn inline_code_rule() -> Rule {
    Rule::single_line(LineFilter::pattern(&INLINE_CODE), |line| {
        Some(Block::InlineCode(line.trim_matches('`').to_string()))
    })
}

fn paragraph_rule() -> Rule {
    Rule::single_line(LineFilter::predicate(|_| true), |line| {
        if line.trim().is_empty() {
            None
        } else {
            Some(Block::Paragraph(resolve_spans(&line)))
        }
    })
}

/// Consume consecutive lines matching `pattern` as list items
fn collect_run<F>(cursor: &mut LineCursor, pattern: &Regex, strip: F) -> Vec<ListItem>
where
    F: Fn(&str) -> &str,
{
    let mut items = Vec::new();
    while cursor.peek().is_some_and(|line| pattern.is_match(line)) {
        if let Some(line) = cursor.advance() {
            items.push(ListItem::from_text(strip(&line)));
        }
    }
    items
}

/// Drop a single leading space or tab, if present
fn strip_one_space(text: &str) -> &str {
    text.strip_prefix([' ', '\t']).unwrap_or(text)
}
