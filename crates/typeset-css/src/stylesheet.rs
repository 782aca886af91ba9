//! Layered stylesheet generation.
//!
//! [`generate_stylesheet`] is a pure function of its [`StylesheetSpec`]: the
//! same input always produces byte-identical text. The output is one cascade
//! layer whose lines, each indented by two spaces, are:
//!
//! 1. the `:root{...}` variable block, when variables are present
//! 2. the base rule `.{prefix}typography{reset}`
//! 3. one rule per present variant
//! 4. when responsive, one `@media (min-width:Npx){` ... `}` group per
//!    non-zero breakpoint, holding a `{category}-{breakpoint}-{size}` rule
//!    for every present variant
//!
//! ```text
//! @layer vuetify.typography {
//!   :root{--v-typography--body-family:Inter;}
//!   .v-typography{text-transform:none}
//!   .body-medium{font-size:14px; font-family:var(--v-typography--body-family)}
//!   @media (min-width:600px){
//!   .body-sm-medium{font-size:14px; font-family:var(--v-typography--body-family)}
//!   }
//! }
//! ```

use crate::breakpoints::BreakpointTable;
use crate::style::{stringify_style, StyleRecord};
use crate::variables::{emit_variable_block, VarScope, VariableTable};
use crate::variant::{VariantName, VariantTable};

/// Name of the cascade layer wrapping the whole stylesheet.
pub const LAYER_NAME: &str = "vuetify.typography";

/// Everything the generator reads, borrowed from the caller.
#[derive(Debug, Clone, Copy)]
pub struct StylesheetSpec<'a> {
    /// Class prefix, e.g. `v-`.
    pub prefix: &'a str,
    /// When true, variant rules only match alongside the base class.
    pub scoped: bool,
    /// Declarations for the base `.{prefix}typography` rule.
    pub reset_styles: &'a StyleRecord,
    pub variants: &'a VariantTable,
    pub variables: Option<&'a VariableTable>,
    pub responsive: bool,
    /// Only consulted when `responsive` is set.
    pub breakpoints: Option<&'a BreakpointTable>,
}

/// Returns the base class name, `{prefix}typography`.
pub fn base_class(prefix: &str) -> String {
    format!("{}typography", prefix)
}

/// Generates the full stylesheet text for `spec`.
pub fn generate_stylesheet(spec: &StylesheetSpec<'_>) -> String {
    let mut content: Vec<String> = Vec::new();

    let scope = spec.variables.map(VarScope::new);
    if let Some(block) = spec.variables.and_then(emit_variable_block) {
        content.push(block);
    }

    let base = base_class(spec.prefix);
    content.push(format!(
        ".{}{{{}}}",
        base,
        stringify_style(spec.reset_styles, None)
    ));

    let scoped_prefix = if spec.scoped {
        format!(".{}", base)
    } else {
        String::new()
    };

    // Declarations are identical across tiers, so stringify each variant once.
    let rules: Vec<(&str, String)> = spec
        .variants
        .iter()
        .map(|(name, style)| (name, stringify_style(style, scope)))
        .collect();

    for (name, declarations) in &rules {
        content.push(format!("{}.{}{{{}}}", scoped_prefix, name, declarations));
    }

    if spec.responsive {
        if let Some(breakpoints) = spec.breakpoints {
            for (breakpoint, width) in breakpoints.responsive() {
                content.push(format!("@media (min-width:{}px){{", width));
                for (name, declarations) in &rules {
                    let class = VariantName::parse(name).responsive(breakpoint);
                    content.push(format!("{}.{}{{{}}}", scoped_prefix, class, declarations));
                }
                content.push("}".to_string());
            }
        }
    }

    let body = content
        .iter()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n");
    format!("@layer {} {{\n{}\n}}", LAYER_NAME, body)
}
