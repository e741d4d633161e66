//! HTML rendering
//!
//! Converts a document tree into HTML text. Each node kind maps to one tag
//! and children are rendered in order with no whitespace added between
//! them, apart from the configurable separator between top-level blocks.

use std::borrow::Cow;

use crate::ast::{Block, Document, Inline, ListItem};
use crate::options::RenderOptions;

/// Render a document to an HTML string
pub fn render(document: &Document, options: &RenderOptions) -> String {
    let mut output = String::with_capacity(1024);

    for (i, block) in document.blocks().iter().enumerate() {
        if i > 0 {
            output.push_str(&options.block_separator);
        }
        render_block_into(block, options, &mut output);
    }

    output
}

/// Render a single block to an HTML string
pub fn render_block(block: &Block, options: &RenderOptions) -> String {
    let mut output = String::new();
    render_block_into(block, options, &mut output);
    output
}

fn render_block_into(block: &Block, options: &RenderOptions, out: &mut String) {
    match block {
        Block::Heading { level, content } => {
            let tag = if *level <= 1 { "h1" } else { "h2" };
            open(tag, out);
            render_inlines(content, options, out);
            close(tag, out);
        }

        Block::Paragraph(inlines) => {
            open("p", out);
            render_inlines(inlines, options, out);
            close("p", out);
        }

        Block::BlockQuote(blocks) => {
            open("blockquote", out);
            for block in blocks {
                render_block_into(block, options, out);
            }
            close("blockquote", out);
        }

        Block::List { ordered, items } => render_list(*ordered, items, options, out),

        Block::CodeBlock { code } => {
            out.push_str("<pre><code>");
            out.push_str(&escape(code, options));
            out.push_str("</code></pre>");
        }

        Block::InlineCode(code) => {
            open("code", out);
            out.push_str(&escape(code, options));
            close("code", out);
        }

        Block::Separator => {
            out.push_str(if options.self_closing { "<hr />" } else { "<hr>" });
        }
    }
}

fn render_list(ordered: bool, items: &[ListItem], options: &RenderOptions, out: &mut String) {
    let tag = if ordered { "ol" } else { "ul" };
    open(tag, out);
    for item in items {
        open("li", out);
        render_inlines(&item.content, options, out);
        close("li", out);
    }
    close(tag, out);
}

fn render_inlines(inlines: &[Inline], options: &RenderOptions, out: &mut String) {
    for inline in inlines {
        render_inline(inline, options, out);
    }
}

fn render_inline(inline: &Inline, options: &RenderOptions, out: &mut String) {
    match inline {
        Inline::Text(text) => out.push_str(&escape(text, options)),

        Inline::Strong(content) => {
            open("strong", out);
            render_inlines(content, options, out);
            close("strong", out);
        }

        Inline::Emphasis(content) => {
            open("em", out);
            render_inlines(content, options, out);
            close("em", out);
        }
    }
}

fn open(tag: &str, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
}

fn close(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn escape<'a>(text: &'a str, options: &RenderOptions) -> Cow<'a, str> {
    if options.escape_text {
        html_escape::encode_text(text)
    } else {
        Cow::Borrowed(text)
    }
}
