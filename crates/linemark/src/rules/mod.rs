//! Rule system for block dispatch.
//!
//! Rules are kept in priority order: the first rule whose filter matches
//! the current line wins. The built-in markup patterns overlap (a bold line
//! is also italic-shaped under a loose reading), so their order is fixed.

mod markup;
mod rule;

pub use markup::markup_rules;
pub use rule::{BuildFn, LineFilter, Rule};

use indexmap::IndexMap;

/// Ordered collection of block rules
#[derive(Debug)]
pub struct Rules {
    /// Custom rules added by the user (checked first)
    custom_rules: IndexMap<String, Rule>,
    /// Built-in markup rules, in dispatch order
    markup_rules: IndexMap<String, Rule>,
}

impl Rules {
    /// Create a new Rules instance with the built-in markup rules
    pub fn new() -> Self {
        Self {
            custom_rules: IndexMap::new(),
            markup_rules: markup_rules()
                .into_iter()
                .map(|(key, rule)| (key.to_string(), rule))
                .collect(),
        }
    }

    /// Create an empty Rules instance
    pub fn empty() -> Self {
        Self {
            custom_rules: IndexMap::new(),
            markup_rules: IndexMap::new(),
        }
    }

    /// Add a custom rule, checked before every built-in rule
    ///
    /// Custom rules are checked in the order they were added. Adding a rule
    /// under an existing custom key replaces it in place; adding one under a
    /// built-in key replaces the built-in, so each key appears once.
    pub fn add(&mut self, key: &str, rule: Rule) {
        self.markup_rules.shift_remove(key);
        self.custom_rules.insert(key.to_string(), rule);
    }

    /// Remove a custom or built-in rule by key
    pub fn remove(&mut self, key: &str) -> Option<Rule> {
        self.custom_rules
            .shift_remove(key)
            .or_else(|| self.markup_rules.shift_remove(key))
    }

    /// Find the first rule matching a line
    pub fn for_line<'a>(&'a self, line: &str) -> Option<(&'a str, &'a Rule)> {
        self.iter().find(|(_, rule)| rule.matches(line))
    }

    /// Rule keys in dispatch order
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|(key, _)| key).collect()
    }

    pub fn len(&self) -> usize {
        self.custom_rules.len() + self.markup_rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.custom_rules
            .iter()
            .chain(self.markup_rules.iter())
            .map(|(key, rule)| (key.as_str(), rule))
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}
