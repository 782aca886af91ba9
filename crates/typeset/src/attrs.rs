//! Resolving component properties into rendered attributes.
//!
//! A typography component takes a variant name, an optional color, an
//! optional tag and an optional per-instance style override. The stylesheet
//! does the actual styling; this module only decides the element's tag,
//! classes and inline style.

use typeset_css::{base_class, inline_style, StyleRecord};

use crate::context::{use_typography, Context};
use crate::error::TypographyError;
use crate::instance::Typography;

/// Tag used when none is given.
pub const DEFAULT_TAG: &str = "div";

/// Properties of a typography component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypographyProps {
    pub variant: String,
    pub color: Option<String>,
    pub tag: Option<String>,
    pub custom_variant: Option<StyleRecord>,
}

/// Attributes to render for a typography component.
#[derive(Debug, Clone, PartialEq)]
pub struct TypographyAttrs {
    pub tag: String,
    pub classes: Vec<String>,
    /// Inline declarations, `None` when there are none.
    pub style: Option<String>,
}

impl TypographyAttrs {
    /// Classes joined for a `class` attribute.
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }
}

impl TypographyProps {
    pub fn new(variant: impl Into<String>) -> Self {
        Self {
            variant: variant.into(),
            ..Self::default()
        }
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn custom_variant(mut self, style: StyleRecord) -> Self {
        self.custom_variant = Some(style);
        self
    }

    /// Resolves against the instance installed in `ctx`.
    ///
    /// # Errors
    ///
    /// [`TypographyError::NotInstalled`] if no instance was installed.
    pub fn resolve(&self, ctx: &Context) -> Result<TypographyAttrs, TypographyError> {
        let typography = use_typography(ctx)?;
        Ok(self.resolve_with(&typography))
    }

    /// Resolves against a specific instance.
    ///
    /// Unknown variant names are still applied as classes.
    pub fn resolve_with(&self, typography: &Typography) -> TypographyAttrs {
        let mut classes = vec![base_class(&typography.options().prefix)];
        if !self.variant.is_empty() {
            classes.push(self.variant.clone());
        }

        let mut style = self.custom_variant.clone().unwrap_or_default();
        match self.color.as_deref() {
            Some(color) if is_css_color(color) => style.insert("color", color),
            Some(color) if !color.is_empty() => classes.push(format!("text-{}", color)),
            _ => {}
        }

        TypographyAttrs {
            tag: self
                .tag
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_TAG.to_string()),
            classes,
            style: (!style.is_empty()).then(|| inline_style(&style)),
        }
    }
}

/// Literal CSS colors become inline styles; anything else names a theme
/// color class.
fn is_css_color(color: &str) -> bool {
    color.starts_with('#')
        || color.starts_with("var(--")
        || ["rgb(", "rgba(", "hsl(", "hsla("]
            .iter()
            .any(|prefix| color.starts_with(prefix))
}
