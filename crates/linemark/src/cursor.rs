//! Line cursor with one line of lookahead.

/// A cursor over a buffered sequence of input lines.
///
/// Rules classify the current line with [`peek`](LineCursor::peek) and
/// consume it with [`advance`](LineCursor::advance). Every `advance` on a
/// non-exhausted cursor moves [`position`](LineCursor::position) forward by
/// exactly one, which is what the dispatcher relies on to terminate.
#[derive(Debug, Clone, Default)]
pub struct LineCursor {
    lines: Vec<String>,
    pos: usize,
}

impl LineCursor {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            pos: 0,
        }
    }

    /// Split `text` on `\n`, dropping a trailing `\r` from each line.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines())
    }

    /// The current line, without consuming it.
    pub fn peek(&self) -> Option<&str> {
        self.lines.get(self.pos).map(String::as_str)
    }

    /// Consume the current line.
    pub fn advance(&mut self) -> Option<String> {
        let line = self.lines.get_mut(self.pos).map(std::mem::take)?;
        self.pos += 1;
        Some(line)
    }

    /// Index of the current line.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.lines.len()
    }

    pub fn remaining(&self) -> usize {
        self.lines.len().saturating_sub(self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = LineCursor::new(["a", "b"]);
        assert_eq!(cur.peek(), Some("a"));
        assert_eq!(cur.peek(), Some("a"));
        assert_eq!(cur.advance().as_deref(), Some("a"));
        assert_eq!(cur.position(), 1);
        assert_eq!(cur.remaining(), 1);
        assert_eq!(cur.advance().as_deref(), Some("b"));
        assert!(cur.is_exhausted());
    }

    #[test]
    fn advance_past_end_is_a_no_op() {
        let mut cur = LineCursor::new(Vec::<String>::new());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.advance(), None);
        assert_eq!(cur.position(), 0);
    }

    #[test]
    fn from_text_strips_carriage_returns() {
        let mut cur = LineCursor::from_text("one\r\ntwo\n");
        assert_eq!(cur.advance().as_deref(), Some("one"));
        assert_eq!(cur.advance().as_deref(), Some("two"));
        assert!(cur.is_exhausted());
    }

    #[test]
    fn from_text_keeps_blank_lines() {
        let cur = LineCursor::from_text("a\n\nb");
        assert_eq!(cur.remaining(), 3);
    }
}
