//! The typography instance: resolved options, the live variant table, the
//! derived stylesheet and its publisher.

use std::rc::Rc;

use tracing::debug;
use typeset_css::{generate_stylesheet, BreakpointTable, StyleRecord, StylesheetSpec, VariantTable};

use crate::config::TypographyConfig;
use crate::context::{Context, TYPOGRAPHY_KEY};
use crate::error::TypographyError;
use crate::options::{resolve_options, ResolvedOptions};
use crate::publisher::Publisher;
use crate::reactive::{Computed, Observable, Signal};
use crate::sink::StyleSink;

struct TypographyInner {
    options: Rc<ResolvedOptions>,
    variants: Observable<VariantTable>,
    breakpoints: Option<Observable<BreakpointTable>>,
    css: Computed<String>,
    publisher: Publisher,
}

/// Handle to a typography instance.
///
/// Cloning is cheap and every clone refers to the same instance: a variant
/// set through one handle is visible, and published, through all of them.
#[derive(Clone)]
pub struct Typography {
    inner: Rc<TypographyInner>,
}

/// Creates a typography instance, or `None` when `config` is disabled.
///
/// Options are resolved once. The stylesheet is derived from the resolved
/// options, the instance's variant table and, when given, the breakpoint
/// observable; it is published to `sink` immediately and after every change.
///
/// ```rust
/// use typeset::{create_typography, Document, StyleRecord, DEFAULT_STYLESHEET_ID};
///
/// let document = Document::new();
/// let typography = create_typography(true, None, &document).unwrap().unwrap();
///
/// typography.set_variant("brand-hero", StyleRecord::new().with("fontSize", "80px"));
///
/// let published = document.content(DEFAULT_STYLESHEET_ID).unwrap();
/// assert!(published.contains(".brand-hero{font-size:80px}"));
/// ```
///
/// # Errors
///
/// Returns [`TypographyError::Sink`] if the sink cannot provide a style
/// resource. Failures while publishing later are logged, not returned.
pub fn create_typography(
    config: impl Into<TypographyConfig>,
    breakpoints: Option<Observable<BreakpointTable>>,
    sink: &dyn StyleSink,
) -> Result<Option<Typography>, TypographyError> {
    let options = match config.into() {
        TypographyConfig::Disabled => {
            debug!("typography disabled");
            return Ok(None);
        }
        TypographyConfig::Enabled(options) => Rc::new(resolve_options(Some(&options))),
    };

    let variants = Observable::new(options.variants.clone());
    if options.responsive && breakpoints.is_none() {
        debug!("responsive typography without a breakpoint table; no media rules");
    }

    let css = derive_stylesheet(&options, &variants, breakpoints.as_ref());
    let resource =
        sink.acquire_style_resource(&options.stylesheet_id, options.csp_nonce.as_deref())?;
    if resource.is_none() {
        debug!(id = %options.stylesheet_id, "no style resource; stylesheet will not be published");
    }
    let publisher = Publisher::start(&options.stylesheet_id, &css, resource);

    Ok(Some(Typography {
        inner: Rc::new(TypographyInner {
            options,
            variants,
            breakpoints,
            css,
            publisher,
        }),
    }))
}

fn derive_stylesheet(
    options: &Rc<ResolvedOptions>,
    variants: &Observable<VariantTable>,
    breakpoints: Option<&Observable<BreakpointTable>>,
) -> Computed<String> {
    let mut sources: Vec<Rc<dyn Signal>> = Vec::with_capacity(2);
    sources.push(Rc::new(variants.clone()));
    if let Some(bp) = breakpoints {
        sources.push(Rc::new(bp.clone()));
    }

    let options = Rc::clone(options);
    let variants = variants.clone();
    let breakpoints = breakpoints.cloned();
    Computed::new(sources, move || {
        variants.with(|table| match &breakpoints {
            Some(bp) => bp.with(|thresholds| render(&options, table, Some(thresholds))),
            None => render(&options, table, None),
        })
    })
}

fn render(
    options: &ResolvedOptions,
    variants: &VariantTable,
    breakpoints: Option<&BreakpointTable>,
) -> String {
    generate_stylesheet(&StylesheetSpec {
        prefix: &options.prefix,
        scoped: options.scoped,
        reset_styles: &options.reset_styles,
        variants,
        variables: options.variables.as_ref(),
        responsive: options.responsive,
        breakpoints,
    })
}

impl Typography {
    /// The options this instance was created with, after resolution.
    pub fn options(&self) -> &ResolvedOptions {
        &self.inner.options
    }

    /// The live variant table. Changes made through it are published.
    pub fn variants(&self) -> &Observable<VariantTable> {
        &self.inner.variants
    }

    /// Adds or replaces a variant.
    pub fn set_variant(&self, name: &str, style: StyleRecord) {
        self.inner.variants.update(|table| {
            table.insert(name, style);
        });
    }

    /// Removes a variant, returning its style if it existed.
    pub fn remove_variant(&self, name: &str) -> Option<StyleRecord> {
        let mut removed = None;
        self.inner.variants.update(|table| removed = table.remove(name));
        if removed.is_none() {
            debug!(variant = name, "no such typography variant to remove");
        }
        removed
    }

    /// The breakpoint observable this instance follows, if any.
    pub fn breakpoints(&self) -> Option<&Observable<BreakpointTable>> {
        self.inner.breakpoints.as_ref()
    }

    /// The current stylesheet text.
    pub fn css(&self) -> String {
        self.inner.css.get()
    }

    /// The derived stylesheet, for use as a reactive source.
    pub fn stylesheet(&self) -> &Computed<String> {
        &self.inner.css
    }

    pub fn stylesheet_id(&self) -> &str {
        &self.inner.options.stylesheet_id
    }

    /// Number of times the stylesheet has been written to its resource.
    pub fn publish_count(&self) -> u64 {
        self.inner.publisher.publish_count()
    }

    /// Provides this instance to `ctx` under [`TYPOGRAPHY_KEY`].
    pub fn install(&self, ctx: &mut Context) {
        ctx.provide(TYPOGRAPHY_KEY, self.clone());
    }
}

impl std::fmt::Debug for Typography {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typography")
            .field("prefix", &self.inner.options.prefix)
            .field("stylesheet_id", &self.inner.options.stylesheet_id)
            .field("variants", &self.inner.variants.with(|t| t.len()))
            .field("publish_count", &self.publish_count())
            .finish()
    }
}
