//! Breakpoint tables for responsive expansion.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping from breakpoint name to a minimum viewport width in pixels.
///
/// A zero width marks the unconditional base tier and never produces a media
/// query. [`BreakpointTable::default`] returns the standard display thresholds.
///
/// ```rust
/// use typeset_css::BreakpointTable;
///
/// let table = BreakpointTable::default();
/// let gated: Vec<&str> = table.responsive().map(|(name, _)| name).collect();
/// assert_eq!(gated, vec!["sm", "md", "lg", "xl", "xxl"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreakpointTable(IndexMap<String, u32>);

impl BreakpointTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Adds a breakpoint, returning `self` for chaining.
    pub fn with(mut self, name: &str, width: u32) -> Self {
        self.0.insert(name.to_string(), width);
        self
    }

    pub fn insert(&mut self, name: &str, width: u32) {
        self.0.insert(name.to_string(), width);
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.0.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Breakpoints with a non-zero width, in table order.
    pub fn responsive(&self) -> impl Iterator<Item = (&str, u32)> {
        self.iter().filter(|(_, width)| *width != 0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self::new()
            .with("xs", 0)
            .with("sm", 600)
            .with("md", 840)
            .with("lg", 1145)
            .with("xl", 1545)
            .with("xxl", 2138)
    }
}
