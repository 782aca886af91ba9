//! Keeps a style resource in sync with a derived stylesheet.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{debug, warn};

use crate::reactive::{Computed, Effect};
use crate::sink::StyleResource;

/// Publishes the current stylesheet whenever it changes.
///
/// Writes that would not change the resource's content are skipped. Write
/// failures are logged and the next change tries again.
pub(crate) struct Publisher {
    published: Rc<Cell<u64>>,
    _effect: Effect,
}

impl Publisher {
    pub(crate) fn start(
        id: &str,
        css: &Computed<String>,
        resource: Option<Rc<dyn StyleResource>>,
    ) -> Self {
        let published = Rc::new(Cell::new(0u64));
        let last = Rc::new(RefCell::new(None::<String>));

        let effect = {
            let id = id.to_string();
            let stylesheet = css.clone();
            let published = Rc::clone(&published);
            Effect::new(&[css], move || {
                let Some(resource) = resource.as_ref() else {
                    return;
                };
                let text = stylesheet.get();
                if last.borrow().as_deref() == Some(text.as_str()) {
                    return;
                }
                match resource.replace(&text) {
                    Ok(()) => {
                        published.set(published.get() + 1);
                        debug!(id = %id, bytes = text.len(), "published stylesheet");
                        *last.borrow_mut() = Some(text);
                    }
                    Err(e) => warn!(id = %id, error = %e, "failed to publish stylesheet"),
                }
            })
        };

        Self {
            published,
            _effect: effect,
        }
    }

    /// Number of successful writes to the resource.
    pub(crate) fn publish_count(&self) -> u64 {
        self.published.get()
    }
}
