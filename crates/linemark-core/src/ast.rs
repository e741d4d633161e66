//! Document tree
//!
//! This module defines the nodes produced by the linemark parser. The tree
//! mirrors the HTML it renders to: every node owns its children, children
//! keep document order, and nodes are only ever appended.

/// Root of a parsed document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block to the end of the document
    pub fn add_node(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Top-level blocks in document order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Flattened text of every block, concatenated
    pub fn text(&self) -> String {
        self.blocks.iter().map(Block::text).collect()
    }
}

impl From<Vec<Block>> for Document {
    fn from(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

/// A block-level node
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Heading with level (1 or 2) and inline content
    Heading {
        level: u8,
        content: Vec<Inline>,
    },

    /// Paragraph containing inline content
    Paragraph(Vec<Inline>),

    /// Block quote wrapping a single paragraph
    BlockQuote(Vec<Block>),

    /// Numbered (`ordered`) or bulleted list
    List {
        ordered: bool,
        items: Vec<ListItem>,
    },

    /// Fenced code block; raw lines joined with `\n`
    CodeBlock {
        code: String,
    },

    /// A line consisting of a single code span
    InlineCode(String),

    /// Horizontal separator
    Separator,
}

/// A list entry holding literal text
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub content: Vec<Inline>,
}

impl ListItem {
    pub fn new(content: Vec<Inline>) -> Self {
        Self { content }
    }

    /// Item holding a single text node
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Inline::Text(text.into())],
        }
    }

    pub fn text(&self) -> String {
        inlines_text(&self.content)
    }

    pub fn is_blank(&self) -> bool {
        self.content.iter().all(|i| i.is_blank())
    }
}

/// An inline node
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    /// Plain text
    Text(String),

    /// Bold span
    Strong(Vec<Inline>),

    /// Italic span
    Emphasis(Vec<Inline>),
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text(text.into())
    }

    /// Bold span around a single text node
    pub fn strong(text: impl Into<String>) -> Self {
        Inline::Strong(vec![Inline::Text(text.into())])
    }

    /// Italic span around a single text node
    pub fn emphasis(text: impl Into<String>) -> Self {
        Inline::Emphasis(vec![Inline::Text(text.into())])
    }

    /// Check if this inline is empty/blank
    pub fn is_blank(&self) -> bool {
        match self {
            Inline::Text(text) => text.trim().is_empty(),
            Inline::Strong(inlines) | Inline::Emphasis(inlines) => {
                inlines.iter().all(|i| i.is_blank())
            }
        }
    }

    /// Literal text with markers already stripped
    pub fn plain_text(&self) -> String {
        match self {
            Inline::Text(text) => text.clone(),
            Inline::Strong(inlines) | Inline::Emphasis(inlines) => inlines_text(inlines),
        }
    }
}

impl Block {
    /// Check if this block is empty/blank
    pub fn is_blank(&self) -> bool {
        match self {
            Block::Heading { content, .. } => content.iter().all(|i| i.is_blank()),
            Block::Paragraph(inlines) => inlines.iter().all(|i| i.is_blank()),
            Block::BlockQuote(blocks) => blocks.iter().all(|b| b.is_blank()),
            Block::List { items, .. } => items.iter().all(|i| i.is_blank()),
            Block::CodeBlock { code } => code.trim().is_empty(),
            Block::InlineCode(code) => code.is_empty(),
            Block::Separator => false,
        }
    }

    /// Flattened text of this block
    pub fn text(&self) -> String {
        match self {
            Block::Heading { content, .. } => inlines_text(content),
            Block::Paragraph(inlines) => inlines_text(inlines),
            Block::BlockQuote(blocks) => blocks.iter().map(Block::text).collect(),
            Block::List { items, .. } => items.iter().map(ListItem::text).collect(),
            Block::CodeBlock { code } => code.clone(),
            Block::InlineCode(code) => code.clone(),
            Block::Separator => String::new(),
        }
    }
}

/// Helper to flatten the text of an inline vec
pub fn inlines_text(inlines: &[Inline]) -> String {
    inlines.iter().map(Inline::plain_text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_preserves_order() {
        let mut doc = Document::new();
        doc.add_node(Block::Separator);
        doc.add_node(Block::Paragraph(vec![Inline::text("after")]));

        assert_eq!(doc.len(), 2);
        assert_eq!(doc.blocks()[0], Block::Separator);
        assert_eq!(doc.text(), "after");
    }

    #[test]
    fn test_into_blocks_returns_owned_children() {
        let mut doc = Document::new();
        doc.add_node(Block::Separator);
        doc.add_node(Block::InlineCode("x".into()));

        assert_eq!(
            doc.into_blocks(),
            vec![Block::Separator, Block::InlineCode("x".into())]
        );
    }

    #[test]
    fn test_list_item_new_matches_from_text() {
        let item = ListItem::new(vec![Inline::text("entry")]);
        assert_eq!(item, ListItem::from_text("entry"));
        assert_eq!(item.text(), "entry");
    }

    #[test]
    fn test_heading_text_strips_markers() {
        let block = Block::Heading {
            level: 1,
            content: vec![
                Inline::strong("Big"),
                Inline::text(" and "),
                Inline::emphasis("slanted"),
            ],
        };
        assert_eq!(block.text(), "Big and slanted");
    }

    #[test]
    fn test_list_text_concatenates_items() {
        let block = Block::List {
            ordered: true,
            items: vec![ListItem::from_text("a"), ListItem::from_text("b")],
        };
        assert_eq!(block.text(), "ab");
    }

    #[test]
    fn test_is_blank() {
        assert!(Block::Paragraph(vec![Inline::text("   ")]).is_blank());
        assert!(!Block::Separator.is_blank());
        assert!(Block::CodeBlock { code: "\n".into() }.is_blank());
        assert!(!Inline::strong("x").is_blank());
    }
}
