//! Variant names and the variant table.
//!
//! A variant name is `{category}-{size}`, split at the *first* hyphen:
//! `body-medium` is category `body`, size `medium`, and `display-x-large`
//! is category `display`, size `x-large`. Categories containing a hyphen
//! cannot be expressed.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::style::StyleRecord;

/// A borrowed variant name split into category and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantName<'a> {
    pub category: &'a str,
    /// `None` when the name has no hyphen at all.
    pub size: Option<&'a str>,
}

impl<'a> VariantName<'a> {
    /// Splits `name` at its first hyphen.
    ///
    /// ```rust
    /// use typeset_css::VariantName;
    ///
    /// let name = VariantName::parse("display-x-large");
    /// assert_eq!(name.category, "display");
    /// assert_eq!(name.size, Some("x-large"));
    /// ```
    pub fn parse(name: &'a str) -> Self {
        match name.split_once('-') {
            Some((category, size)) => Self {
                category,
                size: Some(size),
            },
            None => Self {
                category: name,
                size: None,
            },
        }
    }

    /// Builds the breakpoint-specific class name `{category}-{breakpoint}-{size}`.
    ///
    /// A name without a size yields `{category}-{breakpoint}`.
    ///
    /// ```rust
    /// use typeset_css::VariantName;
    ///
    /// assert_eq!(VariantName::parse("display-medium").responsive("lg"), "display-lg-medium");
    /// assert_eq!(VariantName::parse("caption").responsive("md"), "caption-md");
    /// ```
    pub fn responsive(&self, breakpoint: &str) -> String {
        match self.size {
            Some(size) => format!("{}-{}-{}", self.category, breakpoint, size),
            None => format!("{}-{}", self.category, breakpoint),
        }
    }
}

/// Ordered mapping from variant name to its style.
///
/// A `None` entry is an explicit "absent" marker: it deletes an inherited
/// variant during option resolution and is skipped by the generator if it
/// is set at runtime. Deserialises from a mapping whose values may be `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantTable(IndexMap<String, Option<StyleRecord>>);

impl VariantTable {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Adds a variant, returning `self` for chaining.
    pub fn with(mut self, name: &str, style: StyleRecord) -> Self {
        self.insert(name, style);
        self
    }

    /// Adds a deletion marker for `name`, returning `self` for chaining.
    pub fn without(mut self, name: &str) -> Self {
        self.0.insert(name.to_string(), None);
        self
    }

    /// Inserts or replaces a variant. A replaced variant keeps its position.
    pub fn insert(&mut self, name: &str, style: StyleRecord) -> Option<StyleRecord> {
        self.0.insert(name.to_string(), Some(style)).flatten()
    }

    /// Marks `name` as absent without removing the entry.
    pub fn mark_absent(&mut self, name: &str) {
        self.0.insert(name.to_string(), None);
    }

    /// Removes a variant entirely, preserving the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<StyleRecord> {
        self.0.shift_remove(name).flatten()
    }

    /// Returns the style for `name` if present and not marked absent.
    pub fn get(&self, name: &str) -> Option<&StyleRecord> {
        self.0.get(name).and_then(Option::as_ref)
    }

    /// Returns the raw entry, distinguishing "absent marker" from "missing".
    pub fn entry_of(&self, name: &str) -> Option<Option<&StyleRecord>> {
        self.0.get(name).map(Option::as_ref)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates over every entry, including absent markers.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Option<&StyleRecord>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Iterates over present variants only, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleRecord)> {
        self.0
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|style| (k.as_str(), style)))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(name, _)| name)
    }

    /// Drops every absent marker, keeping the order of the rest.
    pub fn prune_absent(&mut self) {
        self.0.retain(|_, style| style.is_some());
    }

    /// Returns true if any entry is an absent marker.
    pub fn has_absent(&self) -> bool {
        self.0.values().any(Option::is_none)
    }

    /// Number of entries, absent markers included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Layers `other` over this table.
    ///
    /// Present styles are merged property by property (see
    /// [`StyleRecord::merge`]); absent markers from `other` replace the
    /// existing entry; new names are appended.
    pub fn merge(mut self, other: &VariantTable) -> Self {
        for (name, incoming) in &other.0 {
            match self.0.get_mut(name) {
                Some(slot) => {
                    *slot = match (slot.take(), incoming) {
                        (Some(base), Some(user)) => Some(base.merge(user)),
                        (_, incoming) => incoming.clone(),
                    };
                }
                None => {
                    self.0.insert(name.clone(), incoming.clone());
                }
            }
        }
        self
    }
}

impl FromIterator<(String, StyleRecord)> for VariantTable {
    fn from_iter<I: IntoIterator<Item = (String, StyleRecord)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k, Some(v))).collect())
    }
}
