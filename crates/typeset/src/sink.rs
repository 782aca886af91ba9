//! Destinations for the generated stylesheet.
//!
//! A [`StyleSink`] hands out one [`StyleResource`] per stylesheet id. The
//! instance acquires its resource once and overwrites its whole content on
//! every publish.
//!
//! | Sink | Resource |
//! |------|----------|
//! | [`Headless`] | none; publishing is a no-op |
//! | [`Document`] | an in-memory [`StyleElement`], one per id |
//! | [`DirectorySink`] | the file `{dir}/{id}.css` |

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::TypographyError;

/// A writable style resource, such as a `<style>` element.
pub trait StyleResource {
    /// Replaces the entire content of the resource.
    fn replace(&self, css: &str) -> Result<(), TypographyError>;
}

/// Something that can provide a style resource for a stylesheet id.
pub trait StyleSink {
    /// Returns the resource for `id`, creating it on first use.
    ///
    /// `Ok(None)` means there is nothing to publish into (no live
    /// document). The nonce is only applied when the resource is created.
    fn acquire_style_resource(
        &self,
        id: &str,
        nonce: Option<&str>,
    ) -> Result<Option<Rc<dyn StyleResource>>, TypographyError>;
}

/// A sink with no document. Nothing is ever published.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl StyleSink for Headless {
    fn acquire_style_resource(
        &self,
        _id: &str,
        _nonce: Option<&str>,
    ) -> Result<Option<Rc<dyn StyleResource>>, TypographyError> {
        Ok(None)
    }
}

/// A `<style>` element held by a [`Document`].
#[derive(Debug)]
pub struct StyleElement {
    id: String,
    nonce: Option<String>,
    content: RefCell<String>,
    writes: Cell<u64>,
}

impl StyleElement {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn nonce(&self) -> Option<&str> {
        self.nonce.as_deref()
    }

    /// Current text content.
    pub fn content(&self) -> String {
        self.content.borrow().clone()
    }

    /// How many times the content has been replaced.
    pub fn write_count(&self) -> u64 {
        self.writes.get()
    }
}

impl StyleResource for StyleElement {
    fn replace(&self, css: &str) -> Result<(), TypographyError> {
        *self.content.borrow_mut() = css.to_string();
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// An in-memory document holding style elements by id.
///
/// Cloning gives another handle to the same document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Rc<RefCell<IndexMap<String, Rc<StyleElement>>>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the element with `id`.
    pub fn element(&self, id: &str) -> Option<Rc<StyleElement>> {
        self.elements.borrow().get(id).cloned()
    }

    /// Content of the element with `id`, if it exists.
    pub fn content(&self, id: &str) -> Option<String> {
        self.element(id).map(|el| el.content())
    }

    pub fn element_count(&self) -> usize {
        self.elements.borrow().len()
    }
}

impl StyleSink for Document {
    fn acquire_style_resource(
        &self,
        id: &str,
        nonce: Option<&str>,
    ) -> Result<Option<Rc<dyn StyleResource>>, TypographyError> {
        let mut elements = self.elements.borrow_mut();
        let element: Rc<dyn StyleResource> = elements
            .entry(id.to_string())
            .or_insert_with(|| {
                debug!(id, nonce = ?nonce, "created style element");
                Rc::new(StyleElement {
                    id: id.to_string(),
                    nonce: nonce.map(str::to_string),
                    content: RefCell::new(String::new()),
                    writes: Cell::new(0),
                })
            })
            .clone();
        Ok(Some(element))
    }
}

/// Writes each stylesheet to `{dir}/{id}.css`.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing stylesheet `id`.
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.css", id))
    }
}

impl StyleSink for DirectorySink {
    fn acquire_style_resource(
        &self,
        id: &str,
        _nonce: Option<&str>,
    ) -> Result<Option<Rc<dyn StyleResource>>, TypographyError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| TypographyError::Sink {
            id: id.to_string(),
            source,
        })?;
        let file: Rc<dyn StyleResource> = Rc::new(StyleFile {
            id: id.to_string(),
            path: self.path_for(id),
        });
        Ok(Some(file))
    }
}

struct StyleFile {
    id: String,
    path: PathBuf,
}

impl StyleResource for StyleFile {
    fn replace(&self, css: &str) -> Result<(), TypographyError> {
        std::fs::write(&self.path, css).map_err(|source| TypographyError::Sink {
            id: self.id.clone(),
            source,
        })
    }
}
