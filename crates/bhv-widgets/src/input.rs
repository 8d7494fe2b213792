#![forbid(unsafe_code)]

//! Editor action notifications raised by text fields.

use std::cell::Cell;

/// The action key an editor reported (the soft keyboard's "enter" key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorAction {
    Unspecified,
    None,
    Go,
    Search,
    Send,
    Next,
    Done,
    Previous,
}

/// Payload of an editor action notification.
///
/// Handlers set [`handled`](Self::set_handled) to stop the toolkit's default
/// processing of the key.
#[derive(Debug)]
pub struct EditorActionArgs {
    action: EditorAction,
    handled: Cell<bool>,
}

impl EditorActionArgs {
    #[must_use]
    pub fn new(action: EditorAction) -> Self {
        Self {
            action,
            handled: Cell::new(false),
        }
    }

    #[must_use]
    pub fn action(&self) -> EditorAction {
        self.action
    }

    #[must_use]
    pub fn is_handled(&self) -> bool {
        self.handled.get()
    }

    pub fn set_handled(&self) {
        self.handled.set(true);
    }
}
