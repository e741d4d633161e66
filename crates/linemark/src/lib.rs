//! # linemark
//!
//! Parse a lightweight Markdown dialect into a document tree and render it
//! as HTML.
//!
//! ## Design
//!
//! Input is consumed line by line through a [`LineCursor`]. Each line is
//! matched against an ordered list of block [`Rule`]s; the first match
//! consumes one line (headings, quotes, paragraphs) or a run of lines
//! (lists, fenced code) and yields one block. Headings and paragraphs have
//! their bold and italic spans resolved by [`resolve_spans`].
//!
//! Parsing never fails: every line ends up in some block or is dropped as
//! blank. Only [`MarkupParser::parse_reader`] returns a [`Result`], for I/O.
//!
//! ## Example
//!
//! ```rust
//! use linemark::{parse_str, render, RenderOptions};
//!
//! let document = parse_str("# Hello\n\n**bold** and *italic*");
//! let html = render(&document, &RenderOptions::default());
//! assert_eq!(
//!     html,
//!     "<h1>Hello</h1><p><strong>bold</strong> and <em>italic</em></p>"
//! );
//! ```
//!
//! ## Custom rules
//!
//! ```rust
//! use linemark::{Block, Inline, LineFilter, MarkupParser, Rule};
//!
//! let mut parser = MarkupParser::new();
//! parser.add_rule(
//!     "note",
//!     Rule::single_line(LineFilter::predicate(|line| line.starts_with("!! ")), |line| {
//!         Some(Block::BlockQuote(vec![Block::Paragraph(vec![Inline::text(&line[3..])])]))
//!     }),
//! );
//!
//! let document = parser.parse_str("!! careful");
//! assert_eq!(document.text(), "careful");
//! ```

pub mod cursor;
mod inline;
mod parser;
pub mod rules;

pub use cursor::LineCursor;
pub use inline::resolve_spans;
pub use linemark_core::{
    inlines_text, render, render_block, Block, Document, Inline, ListItem, RenderOptions,
};
pub use parser::MarkupParser;
pub use rules::{LineFilter, Rule, Rules};

/// Error type for linemark operations
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid UTF-8 on line {line}")]
    InvalidUtf8 { line: usize },
}

pub type Result<T> = std::result::Result<T, ParseError>;

/// Parse a sequence of lines with the built-in rules
pub fn parse<I, S>(lines: I) -> Document
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    MarkupParser::new().parse(lines)
}

/// Parse newline-separated text with the built-in rules
pub fn parse_str(text: &str) -> Document {
    MarkupParser::new().parse_str(text)
}

/// Parse text with the built-in rules and render it to HTML
pub fn to_html(text: &str, options: &RenderOptions) -> String {
    MarkupParser::new().to_html(text, options)
}
