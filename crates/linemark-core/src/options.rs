//! Configuration options for HTML rendering

/// Options for HTML rendering
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// String inserted between top-level blocks
    pub block_separator: String,

    /// Escape `&`, `<` and `>` in text content
    pub escape_text: bool,

    /// Render void elements XHTML-style (`<hr />`)
    pub self_closing: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            block_separator: String::new(),
            escape_text: true,
            self_closing: false,
        }
    }
}

impl RenderOptions {
    /// One block per line
    pub fn pretty() -> Self {
        Self {
            block_separator: "\n".to_string(),
            ..Default::default()
        }
    }
}
