//! Rule and LineFilter types for block dispatch.

use linemark_core::Block;
use regex::Regex;

use crate::cursor::LineCursor;

/// Type alias for block builders
///
/// A builder is called with the cursor positioned on the line its filter
/// matched. It must consume at least that line and returns the block to
/// append, or `None` when the consumed lines produce no node.
pub type BuildFn = Box<dyn Fn(&mut LineCursor) -> Option<Block> + Send + Sync>;

/// A filter determines which lines a rule applies to
pub enum LineFilter {
    /// Match lines against a regular expression
    Pattern(Regex),
    /// Match using a predicate function
    Predicate(Box<dyn Fn(&str) -> bool + Send + Sync>),
}

impl LineFilter {
    /// Create a filter from a compiled pattern
    pub fn pattern(regex: &Regex) -> Self {
        LineFilter::Pattern(regex.clone())
    }

    /// Create a filter with a predicate
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        LineFilter::Predicate(Box::new(f))
    }

    /// Check if this filter matches a line
    pub fn matches(&self, line: &str) -> bool {
        match self {
            LineFilter::Pattern(regex) => regex.is_match(line),
            LineFilter::Predicate(f) => f(line),
        }
    }
}

impl std::fmt::Debug for LineFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineFilter::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
            LineFilter::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// A rule turns the line(s) at the cursor into a block
pub struct Rule {
    /// Filter to determine which lines this rule applies to
    pub filter: LineFilter,
    /// Builder that consumes lines and produces the block
    pub build: BuildFn,
}

impl Rule {
    /// Create a new rule
    pub fn new<F>(filter: LineFilter, build: F) -> Self
    where
        F: Fn(&mut LineCursor) -> Option<Block> + Send + Sync + 'static,
    {
        Self {
            filter,
            build: Box::new(build),
        }
    }

    /// Create a rule that consumes exactly one line
    pub fn single_line<F>(filter: LineFilter, build: F) -> Self
    where
        F: Fn(String) -> Option<Block> + Send + Sync + 'static,
    {
        Self::new(filter, move |cursor| cursor.advance().and_then(&build))
    }

    /// Check if this rule applies to a line
    pub fn matches(&self, line: &str) -> bool {
        self.filter.matches(line)
    }

    /// Apply this rule's builder
    pub fn build(&self, cursor: &mut LineCursor) -> Option<Block> {
        (self.build)(cursor)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("filter", &self.filter).finish_non_exhaustive()
    }
}
