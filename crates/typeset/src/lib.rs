//! # Typeset - Reactive Typography Stylesheets
//!
//! `typeset` turns a declarative typography configuration into one layered
//! stylesheet and keeps it published while the configuration changes.
//!
//! The pure generation layer lives in [`typeset_css`] and is re-exported
//! here. This crate adds:
//!
//! - Option resolution: user options deep-merged over a built-in Material
//!   catalog ([`resolve_options`])
//! - Configuration files in YAML or JSON ([`TypographyConfig`])
//! - Reactivity: the variant table and breakpoints are [`Observable`]s and
//!   the stylesheet is a [`Computed`] value ([`reactive`])
//! - Publishing into a [`StyleSink`]: an in-memory [`Document`], a
//!   directory of `.css` files, or nowhere ([`Headless`])
//! - Explicit dependency injection ([`Context`], [`use_typography`])
//! - Component attribute resolution ([`TypographyProps`])
//!
//! ## Quick Start
//!
//! ```rust
//! use typeset::{
//!     create_typography, use_typography, Context, Document, StyleRecord, TypographyOptions,
//!     VariantTable,
//! };
//!
//! let options = TypographyOptions::new()
//!     .prefix("app-")
//!     .variants(VariantTable::new().without("label-small"));
//!
//! let document = Document::new();
//! let typography = create_typography(options, None, &document)?.expect("enabled");
//!
//! let mut ctx = Context::new();
//! typography.install(&mut ctx);
//!
//! let found = use_typography(&ctx.child())?;
//! found.set_variant("brand-hero", StyleRecord::new().with("fontSize", "80px"));
//!
//! let css = document.content(typography.stylesheet_id()).unwrap_or_default();
//! assert!(css.contains(".app-typography{text-transform:none}"));
//! assert!(css.contains(".brand-hero{font-size:80px}"));
//! assert!(!css.contains(".label-small{"));
//! # Ok::<(), typeset::TypographyError>(())
//! ```
//!
//! ## Disabling
//!
//! A `false` configuration creates no instance:
//!
//! ```rust
//! use typeset::{create_typography, Headless};
//!
//! assert!(create_typography(false, None, &Headless).unwrap().is_none());
//! ```

pub mod attrs;
pub mod config;
pub mod context;
pub mod error;
pub mod instance;
pub mod options;
mod publisher;
pub mod reactive;
pub mod sink;

pub use attrs::{TypographyAttrs, TypographyProps, DEFAULT_TAG};
pub use config::{load_breakpoints, TypographyConfig, CONFIG_EXTENSIONS};
pub use context::{use_typography, Context, InjectionKey, TYPOGRAPHY_KEY};
pub use error::TypographyError;
pub use instance::{create_typography, Typography};
pub use options::{
    default_options, default_variants, merge_options, prune_deleted, resolve_options,
    MergedOptions, ResolvedOptions, TypographyOptions, DEFAULT_PREFIX, DEFAULT_STYLESHEET_ID,
};
pub use reactive::{batch, Computed, Effect, Observable, Signal, Subscription};
pub use sink::{DirectorySink, Document, Headless, StyleElement, StyleResource, StyleSink};

// Re-export the generation layer.
pub use typeset_css;
pub use typeset_css::{
    generate_stylesheet, inline_style, stringify_style, BreakpointTable, StyleRecord, StyleValue,
    StylesheetSpec, VariableTable, VariantTable,
};
