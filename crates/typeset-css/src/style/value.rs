//! Style values and ordered style records.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single declaration value: either literal CSS text or a bare number.
///
/// Numbers are printed without a trailing `.0` when integral, so a font
/// weight of `400` renders as `400` rather than `400.0`.
///
/// # Example
///
/// ```rust
/// use typeset_css::StyleValue;
///
/// assert_eq!(StyleValue::from(400).to_string(), "400");
/// assert_eq!(StyleValue::from(1.5).to_string(), "1.5");
/// assert_eq!(StyleValue::from("14px").to_string(), "14px");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A numeric value (weights, unitless line heights).
    Number(f64),
    /// Literal CSS text (`14px`, `"Inter", sans-serif`, `var(--x)`).
    Text(String),
}

impl StyleValue {
    /// Returns the literal text when this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            StyleValue::Number(_) => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Text(s) => f.write_str(s),
            StyleValue::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            StyleValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(f64::from(n))
    }
}

impl From<u32> for StyleValue {
    fn from(n: u32) -> Self {
        StyleValue::Number(f64::from(n))
    }
}

/// An insertion-ordered mapping from camelCase property name to value.
///
/// Iteration order is declaration order in the generated CSS.
///
/// # Example
///
/// ```rust
/// use typeset_css::StyleRecord;
///
/// let style = StyleRecord::new()
///     .with("fontSize", "14px")
///     .with("fontWeight", 500);
///
/// assert_eq!(style.len(), 2);
/// assert_eq!(style.get("fontSize").unwrap().to_string(), "14px");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleRecord(IndexMap<String, StyleValue>);

impl StyleRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Sets a property, returning `self` for chaining.
    pub fn with(mut self, property: &str, value: impl Into<StyleValue>) -> Self {
        self.insert(property, value);
        self
    }

    /// Sets a property in place. An existing property keeps its position.
    pub fn insert(&mut self, property: &str, value: impl Into<StyleValue>) {
        self.0.insert(property.to_string(), value.into());
    }

    /// Removes a property, preserving the order of the remaining ones.
    pub fn remove(&mut self, property: &str) -> Option<StyleValue> {
        self.0.shift_remove(property)
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.0.get(property)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Layers `other` over this record: its properties replace existing ones
    /// and new properties are appended.
    pub fn merge(mut self, other: &StyleRecord) -> Self {
        for (property, value) in &other.0 {
            self.0.insert(property.clone(), value.clone());
        }
        self
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display_drops_integral_fraction() {
        assert_eq!(StyleValue::Number(400.0).to_string(), "400");
        assert_eq!(StyleValue::Number(-2.0).to_string(), "-2");
        assert_eq!(StyleValue::Number(0.25).to_string(), "0.25");
    }

    #[test]
    fn test_record_preserves_insertion_order() {
        let style = StyleRecord::new()
            .with("lineHeight", "20px")
            .with("fontSize", "14px")
            .with("fontWeight", 400);

        let keys: Vec<&str> = style.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["lineHeight", "fontSize", "fontWeight"]);
    }

    #[test]
    fn test_merge_overrides_in_place_and_appends() {
        let base = StyleRecord::new()
            .with("fontSize", "14px")
            .with("fontWeight", 400);
        let user = StyleRecord::new()
            .with("fontWeight", 700)
            .with("fontFamily", "Inter");

        let merged = base.merge(&user);
        let entries: Vec<(String, String)> = merged
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(
            entries,
            vec![
                ("fontSize".to_string(), "14px".to_string()),
                ("fontWeight".to_string(), "700".to_string()),
                ("fontFamily".to_string(), "Inter".to_string()),
            ]
        );
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut style = StyleRecord::new()
            .with("a", "1")
            .with("b", "2")
            .with("c", "3");
        style.remove("b");
        let keys: Vec<&str> = style.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn test_deserialize_mixed_values() {
        let style: StyleRecord =
            serde_json::from_str(r#"{"fontSize":"57px","fontWeight":400}"#).unwrap();
        assert_eq!(style.get("fontSize"), Some(&StyleValue::from("57px")));
        assert_eq!(style.get("fontWeight"), Some(&StyleValue::Number(400.0)));
    }
}
