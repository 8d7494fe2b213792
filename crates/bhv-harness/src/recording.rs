#![forbid(unsafe_code)]

//! Behaviors and collaborators that record what happened to them.

use std::cell::RefCell;
use std::rc::Rc;

use bhv_core::{Behavior, BehaviorError, BehaviorHandle, View};
use bhv_widgets::{SoftKeyboard, WindowToken};

/// A behavior hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    Attached,
    Detaching,
}

/// Shared, ordered log of hook calls. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Rc<RefCell<Vec<(&'static str, Hook)>>>,
}

impl Journal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, tag: &'static str, hook: Hook) {
        self.entries.borrow_mut().push((tag, hook));
    }

    /// Snapshot of all entries in call order.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, Hook)> {
        self.entries.borrow().clone()
    }

    /// Tags that received `hook`, in call order.
    #[must_use]
    pub fn tags(&self, hook: Hook) -> Vec<&'static str> {
        self.entries
            .borrow()
            .iter()
            .filter(|(_, h)| *h == hook)
            .map(|(tag, _)| *tag)
            .collect()
    }

    #[must_use]
    pub fn count(&self, tag: &'static str, hook: Hook) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| **entry == (tag, hook))
            .count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

/// Records its hooks into a [`Journal`] under a tag. Works on any view.
#[derive(Debug)]
pub struct RecordingBehavior {
    tag: &'static str,
    journal: Journal,
    fail_with: Option<BehaviorError>,
}

impl RecordingBehavior {
    #[must_use]
    pub fn new(tag: &'static str, journal: &Journal) -> Self {
        Self {
            tag,
            journal: journal.clone(),
            fail_with: None,
        }
    }

    /// Make `on_attached` return `err` after recording the call.
    #[must_use]
    pub fn failing(mut self, err: BehaviorError) -> Self {
        self.fail_with = Some(err);
        self
    }

    /// Wrap into a type-erased handle for batches.
    #[must_use]
    pub fn handle<V: View>(self) -> BehaviorHandle<V> {
        BehaviorHandle::new(self).into_dyn()
    }
}

impl<V: View> Behavior<V> for RecordingBehavior {
    fn on_attached(&mut self, _view: &Rc<V>) -> Result<(), BehaviorError> {
        self.journal.record(self.tag, Hook::Attached);
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn on_detaching(&mut self, _view: &Rc<V>) {
        self.journal.record(self.tag, Hook::Detaching);
    }

    fn name(&self) -> &'static str {
        self.tag
    }
}

/// A [`SoftKeyboard`] that remembers each hide request.
#[derive(Debug, Default)]
pub struct RecordingSoftKeyboard {
    hidden: RefCell<Vec<WindowToken>>,
}

impl RecordingSoftKeyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Windows the keyboard was hidden for, in order.
    #[must_use]
    pub fn hidden(&self) -> Vec<WindowToken> {
        self.hidden.borrow().clone()
    }
}

impl SoftKeyboard for RecordingSoftKeyboard {
    fn hide_soft_input(&self, window: WindowToken) {
        tracing::trace!(window = window.0, "hide soft input");
        self.hidden.borrow_mut().push(window);
    }
}
