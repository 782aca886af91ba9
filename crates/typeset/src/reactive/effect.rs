//! Side effects that re-run when their sources change.

use std::cell::Cell;
use std::rc::Rc;

use super::batch;
use super::observable::{Signal, Subscription};

/// A callback run once on creation and again after every change to any of
/// its sources.
///
/// Runs go through the batch queue under the effect's own key, so a flush
/// that changes several sources runs the effect once. Dropping the `Effect`
/// stops it.
pub struct Effect {
    runs: Rc<Cell<u64>>,
    _subscriptions: Vec<Subscription>,
}

impl Effect {
    pub fn new(sources: &[&dyn Signal], run: impl Fn() + 'static) -> Self {
        let key = batch::next_key();
        let runs = Rc::new(Cell::new(0u64));

        let job: Rc<dyn Fn()> = {
            let runs = Rc::clone(&runs);
            Rc::new(move || {
                runs.set(runs.get() + 1);
                run();
            })
        };

        job();

        let subscriptions = sources
            .iter()
            .map(|source| {
                let job = Rc::clone(&job);
                source.on_change(Rc::new(move || {
                    let job = Rc::clone(&job);
                    batch::schedule(key, move || job());
                }))
            })
            .collect();

        Self {
            runs,
            _subscriptions: subscriptions,
        }
    }

    /// Number of times the callback has run, including the initial run.
    pub fn run_count(&self) -> u64 {
        self.runs.get()
    }
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Effect")
            .field("runs", &self.runs.get())
            .finish_non_exhaustive()
    }
}
