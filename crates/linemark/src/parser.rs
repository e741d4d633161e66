//! MarkupParser - the main entry point for converting text to a document tree.

use std::io::{self, BufRead};

use linemark_core::{render, Document, RenderOptions};
use log::{debug, trace, warn};

use crate::cursor::LineCursor;
use crate::rules::{Rule, Rules};
use crate::{ParseError, Result};

/// The main service for parsing linemark text
#[derive(Debug, Default)]
pub struct MarkupParser {
    rules: Rules,
}

impl MarkupParser {
    /// Create a new MarkupParser with the built-in rules
    pub fn new() -> Self {
        Self {
            rules: Rules::new(),
        }
    }

    /// Create a MarkupParser with a custom rule set
    pub fn with_rules(rules: Rules) -> Self {
        Self { rules }
    }

    /// Add a custom rule, checked before the built-in rules
    pub fn add_rule(&mut self, key: &str, rule: Rule) -> &mut Self {
        self.rules.add(key, rule);
        self
    }

    /// Disable a rule by key
    pub fn remove_rule(&mut self, key: &str) -> &mut Self {
        self.rules.remove(key);
        self
    }

    /// Get the current rules
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Parse a sequence of lines
    pub fn parse<I, S>(&self, lines: I) -> Document
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parse_cursor(&mut LineCursor::new(lines))
    }

    /// Parse newline-separated text
    pub fn parse_str(&self, text: &str) -> Document {
        self.parse_cursor(&mut LineCursor::from_text(text))
    }

    /// Read every line from `reader`, then parse
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Document> {
        let mut lines = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            match line {
                Ok(line) => lines.push(line),
                Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                    return Err(ParseError::InvalidUtf8 { line: index + 1 });
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(self.parse(lines))
    }

    /// Parse text and render it straight to HTML
    pub fn to_html(&self, text: &str, options: &RenderOptions) -> String {
        render(&self.parse_str(text), options)
    }

    /// Dispatch lines until the cursor is exhausted
    pub fn parse_cursor(&self, cursor: &mut LineCursor) -> Document {
        let mut document = Document::new();
        let first = cursor.position();

        while let Some(line) = cursor.peek() {
            let start = cursor.position();

            let (name, block) = match self.rules.for_line(line) {
                Some((name, rule)) => {
                    trace!("line {}: {}", start + 1, name);
                    (name, rule.build(cursor))
                }
                None => ("<none>", None),
            };

            if cursor.position() == start {
                if name != "<none>" {
                    warn!("rule `{}` did not consume line {}; skipping it", name, start + 1);
                }
                cursor.advance();
            }

            if let Some(block) = block {
                document.add_node(block);
            }
        }

        debug!(
            "parsed {} lines into {} blocks",
            cursor.position() - first,
            document.len()
        );
        document
    }
}
