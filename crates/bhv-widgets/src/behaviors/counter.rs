#![forbid(unsafe_code)]

//! Click counter shown in the view's text.

use std::cell::Cell;
use std::rc::Rc;

use bhv_core::{Behavior, BehaviorError};
use bhv_runtime::SubscriptionScope;

use crate::capability::{Clickable, TextContent};

/// Counts clicks and displays the running total as the view's text.
///
/// The text is set to the current count (`"0"` for a fresh behavior) on
/// attach. The count survives detach, so a re-attached counter continues
/// where it stopped.
#[derive(Debug, Default)]
pub struct IncrementCounterBehavior {
    count: Rc<Cell<u64>>,
    scope: SubscriptionScope,
}

impl IncrementCounterBehavior {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clicks counted so far.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count.get()
    }
}

impl<V: Clickable + TextContent> Behavior<V> for IncrementCounterBehavior {
    fn on_attached(&mut self, view: &Rc<V>) -> Result<(), BehaviorError> {
        view.set_text(&self.count.get().to_string());

        let count = Rc::clone(&self.count);
        let target = Rc::downgrade(view);
        self.scope.subscribe(view.clicked(), move |_| {
            count.set(count.get() + 1);
            if let Some(view) = target.upgrade() {
                view.set_text(&count.get().to_string());
            }
        });
        Ok(())
    }

    fn on_detaching(&mut self, _view: &Rc<V>) {
        self.scope.clear();
    }

    fn name(&self) -> &'static str {
        "IncrementCounterBehavior"
    }
}
