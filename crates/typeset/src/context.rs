//! Explicit dependency injection for typography instances.
//!
//! A [`Context`] is a chain of scopes. Each scope holds values provided
//! under typed [`InjectionKey`]s; lookups walk from the nearest scope to the
//! root, so a child scope can shadow a value its parent provides.
//!
//! ```rust
//! use typeset::{Context, InjectionKey};
//!
//! const THEME: InjectionKey<String> = InjectionKey::new("app:theme");
//!
//! let mut root = Context::new();
//! root.provide(THEME, "dark".to_string());
//! let child = root.child();
//!
//! assert_eq!(child.inject(THEME).as_deref(), Some("dark"));
//! ```

use std::any::Any;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::error::TypographyError;
use crate::instance::Typography;

/// Typed key for values stored in a [`Context`].
pub struct InjectionKey<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> InjectionKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for InjectionKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for InjectionKey<T> {}

impl<T> std::fmt::Debug for InjectionKey<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("InjectionKey").field(&self.name).finish()
    }
}

/// The key a typography instance is installed under.
pub const TYPOGRAPHY_KEY: InjectionKey<Typography> = InjectionKey::new("typeset:typography");

/// A scope of provided values, with an optional parent scope.
///
/// Cloning is cheap: parents are shared.
#[derive(Clone, Default)]
pub struct Context {
    parent: Option<Rc<Context>>,
    provided: HashMap<&'static str, Rc<dyn Any>>,
}

impl Context {
    /// Creates an empty root scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provides `value` under `key` in this scope, replacing any earlier
    /// value for the same key.
    pub fn provide<T: Clone + 'static>(&mut self, key: InjectionKey<T>, value: T) {
        self.provided.insert(key.name, Rc::new(value));
    }

    /// Creates a child scope that sees everything provided so far.
    pub fn child(&self) -> Context {
        Context {
            parent: Some(Rc::new(self.clone())),
            provided: HashMap::new(),
        }
    }

    /// Looks `key` up in this scope and then in each ancestor.
    pub fn inject<T: Clone + 'static>(&self, key: InjectionKey<T>) -> Option<T> {
        let mut scope = Some(self);
        while let Some(ctx) = scope {
            if let Some(value) = ctx.provided.get(key.name) {
                return value.downcast_ref::<T>().cloned();
            }
            scope = ctx.parent.as_deref();
        }
        None
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<_> = self.provided.keys().collect();
        keys.sort();
        f.debug_struct("Context")
            .field("provided", &keys)
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}

/// Returns the typography instance installed in `ctx` or an ancestor.
///
/// # Errors
///
/// [`TypographyError::NotInstalled`] when no scope provides one.
pub fn use_typography(ctx: &Context) -> Result<Typography, TypographyError> {
    ctx.inject(TYPOGRAPHY_KEY)
        .ok_or(TypographyError::NotInstalled)
}
