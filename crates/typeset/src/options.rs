//! Typography options and their resolution against the built-in defaults.
//!
//! Resolution is two phases, each usable on its own:
//!
//! 1. [`merge_options`]: a structural deep merge of user options over the
//!    defaults. Scalars are replaced, `resetStyles` and each variant are
//!    merged property by property, and `null` variants survive as absent
//!    markers.
//! 2. [`prune_deleted`]: drops every absent marker, producing
//!    [`ResolvedOptions`] with no unset fields.
//!
//! [`resolve_options`] runs both. With `merge: false` the defaults start
//! with an empty catalog, so the resolved table is exactly the user's.
//!
//! ```rust
//! use typeset::{resolve_options, StyleRecord, TypographyOptions, VariantTable};
//!
//! let user = TypographyOptions::new().variants(
//!     VariantTable::new()
//!         .without("label-small")
//!         .with("custom-variant", StyleRecord::new().with("fontSize", "99px")),
//! );
//! let resolved = resolve_options(Some(&user));
//!
//! assert!(resolved.variants.contains("body-medium"));
//! assert!(resolved.variants.contains("custom-variant"));
//! assert!(!resolved.variants.contains("label-small"));
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;
use typeset_css::{StyleRecord, VariableTable, VariantTable};

/// Default class and variable prefix.
pub const DEFAULT_PREFIX: &str = "v-";

/// Default identifier of the published style resource.
pub const DEFAULT_STYLESHEET_ID: &str = "vuetify-typography-stylesheet";

fn variant(size: &str, line_height: &str, weight: u32, spacing: &str) -> StyleRecord {
    StyleRecord::new()
        .with("fontSize", size)
        .with("lineHeight", line_height)
        .with("fontWeight", weight)
        .with("letterSpacing", spacing)
}

static DEFAULT_VARIANTS: Lazy<VariantTable> = Lazy::new(|| {
    VariantTable::new()
        .with("display-large", variant("57px", "64px", 400, "-0.25px"))
        .with("display-medium", variant("45px", "52px", 400, "0px"))
        .with("display-small", variant("36px", "44px", 400, "0px"))
        .with("headline-large", variant("32px", "40px", 400, "0px"))
        .with("headline-medium", variant("28px", "36px", 400, "0px"))
        .with("headline-small", variant("24px", "32px", 400, "0px"))
        .with("body-large", variant("16px", "24px", 400, "0.5px"))
        .with("body-medium", variant("14px", "20px", 400, "0.25px"))
        .with("body-small", variant("12px", "16px", 400, "0.4px"))
        .with("label-large", variant("14px", "20px", 500, "0.1px"))
        .with("label-medium", variant("12px", "16px", 500, "0.5px"))
        .with("label-small", variant("11px", "16px", 500, "0.5px"))
});

/// The built-in variant catalog: display, headline, body and label at
/// large, medium and small sizes.
pub fn default_variants() -> &'static VariantTable {
    &DEFAULT_VARIANTS
}

/// User-supplied, partial typography configuration.
///
/// Every field is optional; omitted fields take their default during
/// resolution. Field names follow the camelCase configuration format:
///
/// ```yaml
/// prefix: "v-"
/// scoped: false
/// merge: true
/// resetStyles:
///   textTransform: none
/// responsive: true
/// stylesheetId: vuetify-typography-stylesheet
/// cspNonce: abc123
/// variants:
///   body-medium:
///     fontFamily: "var:body-family"
///   label-small: null      # delete an inherited variant
/// variables:
///   body-family: Inter
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TypographyOptions {
    pub csp_nonce: Option<String>,
    pub prefix: Option<String>,
    pub scoped: Option<bool>,
    pub merge: Option<bool>,
    pub reset_styles: Option<StyleRecord>,
    pub responsive: Option<bool>,
    pub stylesheet_id: Option<String>,
    pub variants: Option<VariantTable>,
    pub variables: Option<VariableTable>,
}

impl TypographyOptions {
    /// Creates options with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn csp_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.csp_nonce = Some(nonce.into());
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn scoped(mut self, scoped: bool) -> Self {
        self.scoped = Some(scoped);
        self
    }

    /// Whether user variants are layered over the built-in catalog (the
    /// default) or replace it.
    pub fn merge(mut self, merge: bool) -> Self {
        self.merge = Some(merge);
        self
    }

    pub fn reset_styles(mut self, reset: StyleRecord) -> Self {
        self.reset_styles = Some(reset);
        self
    }

    pub fn responsive(mut self, responsive: bool) -> Self {
        self.responsive = Some(responsive);
        self
    }

    pub fn stylesheet_id(mut self, id: impl Into<String>) -> Self {
        self.stylesheet_id = Some(id.into());
        self
    }

    pub fn variants(mut self, variants: VariantTable) -> Self {
        self.variants = Some(variants);
        self
    }

    pub fn variables(mut self, variables: VariableTable) -> Self {
        self.variables = Some(variables);
        self
    }
}

/// Output of [`merge_options`]: fully populated, but the variant table may
/// still hold absent markers.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedOptions {
    pub csp_nonce: Option<String>,
    pub prefix: String,
    pub scoped: bool,
    pub merge: bool,
    pub reset_styles: StyleRecord,
    pub responsive: bool,
    pub stylesheet_id: String,
    pub variants: VariantTable,
    pub variables: Option<VariableTable>,
}

/// Fully resolved configuration. No variant entry is an absent marker.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    pub csp_nonce: Option<String>,
    pub prefix: String,
    pub scoped: bool,
    /// Only meaningful during resolution; kept for inspection.
    pub merge: bool,
    pub reset_styles: StyleRecord,
    pub responsive: bool,
    pub stylesheet_id: String,
    pub variants: VariantTable,
    pub variables: Option<VariableTable>,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        resolve_options(None)
    }
}

/// The canonical defaults, with or without the built-in variant catalog.
pub fn default_options(keep_variants: bool) -> MergedOptions {
    MergedOptions {
        csp_nonce: None,
        prefix: DEFAULT_PREFIX.to_string(),
        scoped: false,
        merge: true,
        reset_styles: StyleRecord::new().with("textTransform", "none"),
        responsive: true,
        stylesheet_id: DEFAULT_STYLESHEET_ID.to_string(),
        variants: if keep_variants {
            DEFAULT_VARIANTS.clone()
        } else {
            VariantTable::new()
        },
        variables: None,
    }
}

/// Phase one: deep-merges `user` over `base`.
pub fn merge_options(base: MergedOptions, user: &TypographyOptions) -> MergedOptions {
    let variables = match (base.variables, &user.variables) {
        (Some(base_vars), Some(user_vars)) => Some(
            base_vars
                .iter()
                .chain(user_vars.iter())
                .collect::<VariableTable>(),
        ),
        (base_vars, user_vars) => user_vars.clone().or(base_vars),
    };

    MergedOptions {
        csp_nonce: user.csp_nonce.clone().or(base.csp_nonce),
        prefix: user.prefix.clone().unwrap_or(base.prefix),
        scoped: user.scoped.unwrap_or(base.scoped),
        merge: user.merge.unwrap_or(base.merge),
        reset_styles: match &user.reset_styles {
            Some(reset) => base.reset_styles.merge(reset),
            None => base.reset_styles,
        },
        responsive: user.responsive.unwrap_or(base.responsive),
        stylesheet_id: user.stylesheet_id.clone().unwrap_or(base.stylesheet_id),
        variants: match &user.variants {
            Some(variants) => base.variants.merge(variants),
            None => base.variants,
        },
        variables,
    }
}

/// Phase two: removes every variant marked absent.
pub fn prune_deleted(merged: MergedOptions) -> ResolvedOptions {
    let mut variants = merged.variants;
    variants.prune_absent();
    ResolvedOptions {
        csp_nonce: merged.csp_nonce,
        prefix: merged.prefix,
        scoped: merged.scoped,
        merge: merged.merge,
        reset_styles: merged.reset_styles,
        responsive: merged.responsive,
        stylesheet_id: merged.stylesheet_id,
        variants,
        variables: merged.variables,
    }
}

/// Resolves optional user options against the defaults.
///
/// This is a pure function: the same input always resolves to the same
/// options.
pub fn resolve_options(user: Option<&TypographyOptions>) -> ResolvedOptions {
    let empty = TypographyOptions::default();
    let user = user.unwrap_or(&empty);
    let keep_variants = user.merge.unwrap_or(true);

    let resolved = prune_deleted(merge_options(default_options(keep_variants), user));
    debug!(
        prefix = %resolved.prefix,
        variants = resolved.variants.len(),
        merge = keep_variants,
        "resolved typography options"
    );
    resolved
}
