//! linemark-core - document tree and HTML rendering
//!
//! This crate provides the data structures produced by the `linemark`
//! parser and the renderer that turns them into HTML.
//!
//! # Architecture
//!
//! ```text
//! Text lines ──parse──▶ ┌───────────────┐
//!                       │ Document tree │ ──render──▶ HTML String
//!                       └───────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use linemark_core::{render, Block, Document, Inline, RenderOptions};
//!
//! let mut document = Document::new();
//! document.add_node(Block::Heading {
//!     level: 1,
//!     content: vec![Inline::text("Hello World")],
//! });
//! document.add_node(Block::Paragraph(vec![
//!     Inline::text("This is "),
//!     Inline::strong("bold"),
//!     Inline::text(" text."),
//! ]));
//!
//! let html = render(&document, &RenderOptions::default());
//! assert_eq!(html, "<h1>Hello World</h1><p>This is <strong>bold</strong> text.</p>");
//! ```

mod ast;
mod options;
mod render;

pub use ast::{inlines_text, Block, Document, Inline, ListItem};
pub use options::RenderOptions;
pub use render::{render, render_block};
