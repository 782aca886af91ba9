//! # Typeset CSS - Typography Stylesheet Generation
//!
//! `typeset-css` turns typography variants, shared font variables and a
//! breakpoint table into one layered stylesheet. Everything here is pure:
//! no I/O, no global state, and identical inputs give identical text.
//!
//! It is the generation layer of the `typeset` crate, which adds option
//! resolution, reactivity and publishing on top.
//!
//! ## Core Concepts
//!
//! - [`StyleRecord`]: ordered camelCase property map (`fontSize: 14px`)
//! - [`VariantTable`]: named style catalog; entries may be marked absent
//! - [`VariableTable`]: shared custom properties under `--v-typography--`
//! - [`BreakpointTable`]: ordered `name -> min-width` thresholds
//! - [`generate_stylesheet`]: composes all of the above into CSS text
//!
//! ## Quick Start
//!
//! ```rust
//! use typeset_css::{generate_stylesheet, StyleRecord, StylesheetSpec, VariableTable, VariantTable};
//!
//! let reset = StyleRecord::new().with("textTransform", "none");
//! let variants = VariantTable::new().with(
//!     "body-medium",
//!     StyleRecord::new().with("fontSize", "14px").with("fontFamily", "var:body"),
//! );
//! let variables = VariableTable::new().with("body", "Inter");
//!
//! let css = generate_stylesheet(&StylesheetSpec {
//!     prefix: "v-",
//!     scoped: false,
//!     reset_styles: &reset,
//!     variants: &variants,
//!     variables: Some(&variables),
//!     responsive: false,
//!     breakpoints: None,
//! });
//!
//! assert!(css.starts_with("@layer vuetify.typography {"));
//! assert!(css.contains(":root{--v-typography--body:Inter;}"));
//! assert!(css.contains(".body-medium{font-size:14px; font-family:var(--v-typography--body)}"));
//! ```
//!
//! ## Font Variables
//!
//! A variant's `fontFamily` can name a variable either explicitly
//! (`var:body`) or by its bare key (`body`). Values that already are a
//! `var(...)` reference, and values matching no key, pass through unchanged.

mod breakpoints;
pub mod style;
mod stylesheet;
mod variables;
mod variant;

pub use breakpoints::BreakpointTable;
pub use style::{inline_style, stringify_style, to_kebab_case, StyleRecord, StyleValue};
pub use stylesheet::{base_class, generate_stylesheet, StylesheetSpec, LAYER_NAME};
pub use variables::{
    custom_property, emit_variable_block, variable_ref, VarScope, VariableTable, VAR_NAMESPACE,
    VAR_TOKEN_PREFIX,
};
pub use variant::{VariantName, VariantTable};
