//! Batched change notification.
//!
//! Inside [`batch`], observable notifications and effect runs are queued
//! instead of running immediately. When the outermost batch ends the queue
//! is flushed: every changed observable notifies once, then every affected
//! effect runs once, seeing only settled values.
//!
//! Jobs are keyed; a key already waiting in the queue is not queued again.
//! Outside a batch each change flushes on its own, so effects still run
//! after all notifications of that change.

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};

type Job = Box<dyn FnOnce()>;

#[derive(Default)]
struct BatchState {
    depth: usize,
    flushing: bool,
    queue: VecDeque<(u64, Job)>,
    pending: HashSet<u64>,
}

thread_local! {
    static STATE: RefCell<BatchState> = RefCell::new(BatchState::default());
}

static NEXT_KEY: AtomicU64 = AtomicU64::new(1);

/// Allocates a key unique for the lifetime of the process.
pub(crate) fn next_key() -> u64 {
    NEXT_KEY.fetch_add(1, Ordering::Relaxed)
}

/// Runs `f` with notifications deferred until the outermost batch ends.
///
/// ```rust
/// use typeset::reactive::{batch, Observable};
///
/// let a = Observable::new(1);
/// let b = Observable::new(2);
/// batch(|| {
///     a.set(10);
///     b.set(20);
/// });
/// assert_eq!(a.get() + b.get(), 30);
/// ```
pub fn batch<R>(f: impl FnOnce() -> R) -> R {
    let _guard = BatchGuard::enter();
    f()
}

/// Returns true while inside a batch or while a flush is running.
pub fn is_batching() -> bool {
    STATE.with(|s| {
        let s = s.borrow();
        s.depth > 0 || s.flushing
    })
}

/// Queues `job` under `key`, flushing right away when not already batching.
pub(crate) fn schedule(key: u64, job: impl FnOnce() + 'static) {
    let _guard = BatchGuard::enter();
    STATE.with(|s| {
        let mut s = s.borrow_mut();
        if s.pending.insert(key) {
            s.queue.push_back((key, Box::new(job)));
        }
    });
}

struct BatchGuard;

impl BatchGuard {
    fn enter() -> Self {
        STATE.with(|s| s.borrow_mut().depth += 1);
        BatchGuard
    }
}

impl Drop for BatchGuard {
    fn drop(&mut self) {
        let should_flush = STATE.with(|s| {
            let mut s = s.borrow_mut();
            s.depth -= 1;
            if std::thread::panicking() && s.depth == 0 {
                s.queue.clear();
                s.pending.clear();
                return false;
            }
            s.depth == 0 && !s.flushing
        });
        if should_flush {
            flush();
        }
    }
}

/// Clears the flushing flag when the flush ends, including by panic.
struct FlushGuard;

impl Drop for FlushGuard {
    fn drop(&mut self) {
        STATE.with(|s| {
            let mut s = s.borrow_mut();
            s.flushing = false;
            if std::thread::panicking() {
                s.queue.clear();
                s.pending.clear();
            }
        });
    }
}

fn flush() {
    STATE.with(|s| s.borrow_mut().flushing = true);
    let _guard = FlushGuard;
    loop {
        let next = STATE.with(|s| {
            let mut s = s.borrow_mut();
            s.queue.pop_front().map(|(key, job)| {
                s.pending.remove(&key);
                job
            })
        });
        match next {
            Some(job) => job(),
            None => break,
        }
    }
}
