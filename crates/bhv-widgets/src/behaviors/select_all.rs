#![forbid(unsafe_code)]

//! Select the whole text when a field gains focus.

use std::rc::Rc;

use bhv_core::{Behavior, BehaviorError};
use bhv_runtime::SubscriptionScope;

use crate::capability::{FocusSource, TextSelection};

/// Selects all of a text field's content each time it gains focus.
#[derive(Debug, Default)]
pub struct SelectAllOnFocusBehavior {
    scope: SubscriptionScope,
}

impl SelectAllOnFocusBehavior {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V: FocusSource + TextSelection> Behavior<V> for SelectAllOnFocusBehavior {
    fn on_attached(&mut self, view: &Rc<V>) -> Result<(), BehaviorError> {
        let target = Rc::downgrade(view);
        self.scope.subscribe(view.focus_changed(), move |gained| {
            if !*gained {
                return;
            }
            if let Some(view) = target.upgrade() {
                view.select_all();
            }
        });
        Ok(())
    }

    fn on_detaching(&mut self, _view: &Rc<V>) {
        self.scope.clear();
    }

    fn name(&self) -> &'static str {
        "SelectAllOnFocusBehavior"
    }
}
