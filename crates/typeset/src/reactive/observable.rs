//! Shared mutable values that announce their changes.
//!
//! An [`Observable`] is a versioned cell that many handles point at. A write
//! that leaves the value equal to what it was is ignored. A real change bumps
//! the version and schedules a notification on the batch queue, so listeners
//! run right away outside [`batch`](super::batch) and once, with the settled
//! value, at the end of a batch.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use super::batch;

type Listener<T> = Rc<dyn Fn(&T)>;

struct Slot<T> {
    key: u64,
    value: T,
    version: u64,
    listeners: Vec<Weak<dyn Fn(&T)>>,
}

/// Anything a derived value or an effect can depend on.
pub trait Signal {
    /// Counter that moves whenever the value changes.
    fn version(&self) -> u64;

    /// Registers `callback` to run after each change.
    fn on_change(&self, callback: Rc<dyn Fn()>) -> Subscription;
}

/// A shared, versioned value. Clones are handles to the same value.
pub struct Observable<T> {
    slot: Rc<RefCell<Slot<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.slot.borrow();
        f.debug_struct("Observable")
            .field("value", &slot.value)
            .field("version", &slot.version)
            .finish_non_exhaustive()
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Slot {
                key: batch::next_key(),
                value,
                version: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        self.slot.borrow().value.clone()
    }

    /// Reads the current value in place.
    pub fn with<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.slot.borrow().value)
    }

    pub fn set(&self, value: T) {
        self.update(move |current| *current = value);
    }

    /// Edits the value in place; listeners hear about it only if the result
    /// differs from the value before the edit.
    ///
    /// # Panics
    ///
    /// Calling `update` on the same observable from inside `edit`.
    pub fn update(&self, edit: impl FnOnce(&mut T)) {
        let changed = {
            let mut slot = self.slot.borrow_mut();
            let before = slot.value.clone();
            edit(&mut slot.value);
            let changed = slot.value != before;
            if changed {
                slot.version += 1;
            }
            changed
        };
        if changed {
            let key = self.slot.borrow().key;
            let this = self.clone();
            batch::schedule(key, move || this.deliver());
        }
    }

    /// Registers `listener`. It stays registered while the returned guard
    /// is alive.
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let listener: Listener<T> = Rc::new(listener);
        self.slot
            .borrow_mut()
            .listeners
            .push(Rc::downgrade(&listener));
        Subscription {
            _guard: Box::new(listener),
        }
    }

    pub fn version(&self) -> u64 {
        self.slot.borrow().version
    }

    /// Registered listeners, counting dropped ones until the next delivery.
    pub fn subscriber_count(&self) -> usize {
        self.slot.borrow().listeners.len()
    }

    fn deliver(&self) {
        let (value, live) = {
            let mut slot = self.slot.borrow_mut();
            let live: Vec<Listener<T>> =
                slot.listeners.iter().filter_map(Weak::upgrade).collect();
            slot.listeners.retain(|listener| listener.strong_count() > 0);
            (slot.value.clone(), live)
        };
        for listener in live {
            listener(&value);
        }
    }
}

impl<T: Clone + PartialEq + 'static> Signal for Observable<T> {
    fn version(&self) -> u64 {
        Observable::version(self)
    }

    fn on_change(&self, callback: Rc<dyn Fn()>) -> Subscription {
        self.subscribe(move |_| callback())
    }
}

/// Keeps a listener registered until dropped.
pub struct Subscription {
    _guard: Box<dyn std::any::Any>,
}

impl Subscription {
    /// Combines several guards into one.
    pub fn group(subscriptions: Vec<Subscription>) -> Self {
        Subscription {
            _guard: Box::new(subscriptions),
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Subscription")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactive::batch;
    use std::cell::Cell;

    fn recorder<T: Clone + 'static>() -> (Rc<RefCell<Vec<T>>>, impl Fn(&T) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |value: &T| sink.borrow_mut().push(value.clone()))
    }

    #[test]
    fn test_set_changes_value_and_version() {
        let table = Observable::new(String::from("xs"));
        assert_eq!(table.version(), 0);

        table.set(String::from("sm"));
        assert_eq!(table.get(), "sm");
        assert_eq!(table.version(), 1);
    }

    #[test]
    fn test_equal_write_is_ignored() {
        let width = Observable::new(600);
        let (seen, listener) = recorder::<i32>();
        let _guard = width.subscribe(listener);

        width.set(600);
        width.update(|w| *w += 0);

        assert_eq!(width.version(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_update_edits_in_place() {
        let names = Observable::new(vec!["body-medium"]);
        names.update(|v| v.push("label-small"));
        assert_eq!(names.with(|v| v.len()), 2);
        assert_eq!(names.version(), 1);
    }

    #[test]
    fn test_listeners_run_in_registration_order() {
        let value = Observable::new(0);
        let order = Rc::new(RefCell::new(String::new()));
        let first = Rc::clone(&order);
        let _a = value.subscribe(move |_| first.borrow_mut().push('a'));
        let second = Rc::clone(&order);
        let _b = value.subscribe(move |_| second.borrow_mut().push('b'));

        value.set(1);
        assert_eq!(order.borrow().as_str(), "ab");
    }

    #[test]
    fn test_dropped_guard_stops_delivery() {
        let value = Observable::new(0);
        let (seen, listener) = recorder::<i32>();
        let guard = value.subscribe(listener);

        value.set(1);
        drop(guard);
        value.set(2);

        assert_eq!(*seen.borrow(), vec![1]);
        assert_eq!(value.subscriber_count(), 0);
    }

    #[test]
    fn test_clones_share_value_and_listeners() {
        let original = Observable::new(0);
        let (seen, listener) = recorder::<i32>();
        let _guard = original.subscribe(listener);

        original.clone().set(7);
        assert_eq!(original.get(), 7);
        assert_eq!(*seen.borrow(), vec![7]);
    }

    #[test]
    fn test_batch_delivers_settled_value_once() {
        let value = Observable::new(0);
        let (seen, listener) = recorder::<i32>();
        let _guard = value.subscribe(listener);

        batch::batch(|| {
            value.set(1);
            value.set(2);
            value.set(3);
            assert_eq!(value.get(), 3);
            assert!(seen.borrow().is_empty());
        });

        assert_eq!(*seen.borrow(), vec![3]);
        assert_eq!(value.version(), 3);
    }

    #[test]
    fn test_signal_on_change() {
        let value = Observable::new("a".to_string());
        let fired = Rc::new(Cell::new(0u32));
        let count = Rc::clone(&fired);
        let _guard = Signal::on_change(&value, Rc::new(move || count.set(count.get() + 1)));

        value.set("b".to_string());
        assert_eq!(fired.get(), 1);
        assert_eq!(Signal::version(&value), 1);
    }
}
