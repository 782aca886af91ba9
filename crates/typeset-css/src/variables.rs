//! Shared CSS custom properties and the `:root` block that declares them.
//!
//! Variables live in their own namespace, separate from variant names and
//! independent of the class prefix. Each entry is emitted as
//! `--v-typography--{name}` and can be referenced from a variant's
//! `fontFamily`, see [`VarScope::resolve_font_family`].

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Token prefix marking an explicit variable reference in a `fontFamily` value.
pub const VAR_TOKEN_PREFIX: &str = "var:";

/// Namespace every custom property is declared under.
pub const VAR_NAMESPACE: &str = "v-typography";

/// An insertion-ordered mapping from short variable name to literal CSS value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableTable(IndexMap<String, String>);

impl VariableTable {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Adds a variable, returning `self` for chaining.
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.0.insert(name.to_string(), value.to_string());
        self
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.0.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// True when `name` maps to a non-empty value.
    pub fn defines(&self, name: &str) -> bool {
        self.get(name).is_some_and(|value| !value.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VariableTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Returns the custom property name for `name`: `--v-typography--{name}`.
///
/// ```rust
/// assert_eq!(typeset_css::custom_property("body-family"), "--v-typography--body-family");
/// ```
pub fn custom_property(name: &str) -> String {
    format!("--{}--{}", VAR_NAMESPACE, name)
}

/// Returns a `var(...)` reference to the custom property for `name`.
pub fn variable_ref(name: &str) -> String {
    format!("var({})", custom_property(name))
}

/// The variable table `fontFamily` values are resolved against.
#[derive(Debug, Clone, Copy)]
pub struct VarScope<'a> {
    pub variables: &'a VariableTable,
}

impl<'a> VarScope<'a> {
    pub fn new(variables: &'a VariableTable) -> Self {
        Self { variables }
    }

    /// Resolves a `fontFamily` value against the table.
    ///
    /// In order: a value already starting with `var(` is kept; an explicit
    /// `var:{key}` token or a bare value equal to a key becomes a reference to
    /// that key; anything else is kept as a literal font stack. Keys whose
    /// value is empty are not referenced.
    pub fn resolve_font_family<'v>(&self, value: &'v str) -> Cow<'v, str> {
        if value.starts_with("var(") {
            return Cow::Borrowed(value);
        }
        if let Some(key) = value.strip_prefix(VAR_TOKEN_PREFIX) {
            if self.variables.defines(key) {
                return Cow::Owned(variable_ref(key));
            }
        }
        if self.variables.defines(value) {
            return Cow::Owned(variable_ref(value));
        }
        Cow::Borrowed(value)
    }
}

/// Emits the `:root{...}` block declaring every variable, or `None` when the
/// table is empty.
///
/// ```rust
/// use typeset_css::{emit_variable_block, VariableTable};
///
/// let vars = VariableTable::new().with("body-family", "Inter");
/// assert_eq!(
///     emit_variable_block(&vars).as_deref(),
///     Some(":root{--v-typography--body-family:Inter;}")
/// );
/// assert_eq!(emit_variable_block(&VariableTable::new()), None);
/// ```
pub fn emit_variable_block(variables: &VariableTable) -> Option<String> {
    if variables.is_empty() {
        return None;
    }
    let mut block = String::from(":root{");
    for (name, value) in variables.iter() {
        block.push_str(&custom_property(name));
        block.push(':');
        block.push_str(value);
        block.push(';');
    }
    block.push('}');
    Some(block)
}
