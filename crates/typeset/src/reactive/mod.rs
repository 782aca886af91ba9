//! Single-threaded reactive primitives.
//!
//! - [`Observable`]: shared mutable value with change notification
//! - [`Computed`]: lazily derived value over a set of [`Signal`]s
//! - [`Effect`]: callback re-run whenever its sources change
//! - [`batch`]: coalesces notifications so effects see settled values
//!
//! The typography instance keeps its variant table in an `Observable`,
//! derives the stylesheet as a `Computed<String>` and publishes it from an
//! `Effect`.

mod batch;
mod computed;
mod effect;
mod observable;

pub use batch::{batch, is_batching};
pub use computed::Computed;
pub use effect::Effect;
pub use observable::{Observable, Signal, Subscription};
