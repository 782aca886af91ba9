//! Lazily derived values.
//!
//! A [`Computed<T>`] holds a compute function and the signals it reads. The
//! cached value is tagged with the versions of those signals; a read whose
//! source versions still match returns the cache, any other read recomputes.
//! Reads are therefore always current, even in the middle of a batch.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::trace;

use super::observable::{Signal, Subscription};

struct ComputedInner<T> {
    sources: Vec<Rc<dyn Signal>>,
    compute: Box<dyn Fn() -> T>,
    cache: RefCell<Option<(Vec<u64>, T)>>,
    recomputes: Cell<u64>,
}

/// A derived value recomputed on read when any of its sources changed.
///
/// Cloning shares the cache.
pub struct Computed<T> {
    inner: Rc<ComputedInner<T>>,
}

impl<T> Clone for Computed<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> Computed<T> {
    /// Creates a derived value over `sources`. Nothing is computed until the
    /// first read.
    pub fn new(sources: Vec<Rc<dyn Signal>>, compute: impl Fn() -> T + 'static) -> Self {
        Self {
            inner: Rc::new(ComputedInner {
                sources,
                compute: Box::new(compute),
                cache: RefCell::new(None),
                recomputes: Cell::new(0),
            }),
        }
    }

    /// Returns the current value, recomputing if a source moved.
    pub fn get(&self) -> T {
        let versions = self.source_versions();
        if let Some((cached_versions, value)) = self.inner.cache.borrow().as_ref() {
            if *cached_versions == versions {
                return value.clone();
            }
        }

        let value = (self.inner.compute)();
        self.inner.recomputes.set(self.inner.recomputes.get() + 1);
        trace!(
            recomputes = self.inner.recomputes.get(),
            "recomputed derived value"
        );
        *self.inner.cache.borrow_mut() = Some((versions, value.clone()));
        value
    }

    /// How many times the compute function has run.
    pub fn recompute_count(&self) -> u64 {
        self.inner.recomputes.get()
    }

    fn source_versions(&self) -> Vec<u64> {
        self.inner.sources.iter().map(|s| s.version()).collect()
    }
}

impl<T: Clone + 'static> Signal for Computed<T> {
    fn version(&self) -> u64 {
        self.inner.sources.iter().map(|s| s.version()).sum()
    }

    fn on_change(&self, callback: Rc<dyn Fn()>) -> Subscription {
        Subscription::group(
            self.inner
                .sources
                .iter()
                .map(|s| s.on_change(Rc::clone(&callback)))
                .collect(),
        )
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Computed<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Computed")
            .field("sources", &self.inner.sources.len())
            .field("recomputes", &self.inner.recomputes.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactive::{batch, Observable};

    fn sum_of(a: &Observable<i32>, b: &Observable<i32>) -> Computed<i32> {
        let (ca, cb) = (a.clone(), b.clone());
        let sources = vec![
            Rc::new(a.clone()) as Rc<dyn Signal>,
            Rc::new(b.clone()) as Rc<dyn Signal>,
        ];
        Computed::new(sources, move || ca.get() + cb.get())
    }

    #[test]
    fn test_lazy_until_first_read() {
        let a = Observable::new(1);
        let b = Observable::new(2);
        let sum = sum_of(&a, &b);
        assert_eq!(sum.recompute_count(), 0);
        assert_eq!(sum.get(), 3);
        assert_eq!(sum.recompute_count(), 1);
    }

    #[test]
    fn test_cached_when_sources_unchanged() {
        let a = Observable::new(1);
        let b = Observable::new(2);
        let sum = sum_of(&a, &b);
        sum.get();
        sum.get();
        a.set(1);
        sum.get();
        assert_eq!(sum.recompute_count(), 1);
    }

    #[test]
    fn test_recomputes_after_change() {
        let a = Observable::new(1);
        let b = Observable::new(2);
        let sum = sum_of(&a, &b);
        assert_eq!(sum.get(), 3);
        b.set(10);
        assert_eq!(sum.get(), 11);
        assert_eq!(sum.recompute_count(), 2);
    }

    #[test]
    fn test_current_inside_batch() {
        let a = Observable::new(1);
        let b = Observable::new(2);
        let sum = sum_of(&a, &b);
        batch(|| {
            a.set(5);
            assert_eq!(sum.get(), 7);
        });
    }

    #[test]
    fn test_on_change_fans_out_to_sources() {
        let a = Observable::new(1);
        let b = Observable::new(2);
        let sum = sum_of(&a, &b);
        let fired = Rc::new(Cell::new(0u32));
        let fired_clone = Rc::clone(&fired);
        let _sub = sum.on_change(Rc::new(move || fired_clone.set(fired_clone.get() + 1)));

        a.set(2);
        b.set(3);
        assert_eq!(fired.get(), 2);
        assert_eq!(Signal::version(&sum), 2);
    }
}
