#![forbid(unsafe_code)]

//! Dismiss the soft keyboard on the editor's action key.

use std::fmt;
use std::rc::Rc;

use bhv_core::{Behavior, BehaviorError};
use bhv_runtime::SubscriptionScope;

use crate::capability::{EditorActionSource, SoftKeyboard};
use crate::input::EditorAction;

/// Hides the soft keyboard when the user presses Done, Search, Go or Next,
/// and marks the action handled.
///
/// Requires a [`SoftKeyboard`] collaborator; attaching without one fails
/// with [`BehaviorError::MissingConfiguration`].
///
/// ```
/// use bhv_widgets::{HideKeyboardOnEnterBehavior, SoftKeyboard, WindowToken};
/// use std::rc::Rc;
///
/// struct Ime;
/// impl SoftKeyboard for Ime {
///     fn hide_soft_input(&self, _window: WindowToken) {}
/// }
///
/// let behavior = HideKeyboardOnEnterBehavior::new().with_soft_keyboard(Rc::new(Ime));
/// assert!(behavior.soft_keyboard.is_some());
/// ```
#[derive(Default)]
pub struct HideKeyboardOnEnterBehavior {
    pub soft_keyboard: Option<Rc<dyn SoftKeyboard>>,
    scope: SubscriptionScope,
}

impl HideKeyboardOnEnterBehavior {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_soft_keyboard(mut self, keyboard: Rc<dyn SoftKeyboard>) -> Self {
        self.soft_keyboard = Some(keyboard);
        self
    }
}

/// Action keys that finish editing.
fn dismisses_keyboard(action: EditorAction) -> bool {
    matches!(
        action,
        EditorAction::Done | EditorAction::Search | EditorAction::Go | EditorAction::Next
    )
}

impl<V: EditorActionSource> Behavior<V> for HideKeyboardOnEnterBehavior {
    fn on_attached(&mut self, view: &Rc<V>) -> Result<(), BehaviorError> {
        let keyboard = self
            .soft_keyboard
            .clone()
            .ok_or(BehaviorError::MissingConfiguration {
                behavior: "HideKeyboardOnEnterBehavior",
                property: "soft_keyboard",
            })?;

        let target = Rc::downgrade(view);
        self.scope.subscribe(view.editor_action(), move |args| {
            if !dismisses_keyboard(args.action()) {
                return;
            }
            if let Some(view) = target.upgrade() {
                tracing::debug!(action = ?args.action(), "hiding soft keyboard");
                keyboard.hide_soft_input(view.window_token());
                args.set_handled();
            }
        });
        Ok(())
    }

    fn on_detaching(&mut self, _view: &Rc<V>) {
        self.scope.clear();
    }

    fn name(&self) -> &'static str {
        "HideKeyboardOnEnterBehavior"
    }
}

impl fmt::Debug for HideKeyboardOnEnterBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HideKeyboardOnEnterBehavior")
            .field("soft_keyboard", &self.soft_keyboard.is_some())
            .field("scope", &self.scope)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behaviors::testing::{FakeField, FakeKeyboard};
    use crate::capability::WindowToken;
    use crate::input::EditorActionArgs;
    use bhv_core::BehaviorHandle;

    type Handle = BehaviorHandle<FakeField, HideKeyboardOnEnterBehavior>;

    fn attached(keyboard: &Rc<FakeKeyboard>) -> (Rc<FakeField>, Handle) {
        let view = Rc::new(FakeField::default());
        let shared: Rc<dyn SoftKeyboard> = Rc::clone(keyboard) as Rc<dyn SoftKeyboard>;
        let behavior =
            BehaviorHandle::new(HideKeyboardOnEnterBehavior::new().with_soft_keyboard(shared));
        behavior.attach(&view).unwrap();
        (view, behavior)
    }

    #[test]
    fn missing_keyboard_fails_attach() {
        let view = Rc::new(FakeField::default());
        let behavior = BehaviorHandle::new(HideKeyboardOnEnterBehavior::new());

        let err = behavior.attach(&view).unwrap_err();
        assert_eq!(
            err,
            BehaviorError::MissingConfiguration {
                behavior: "HideKeyboardOnEnterBehavior",
                property: "soft_keyboard",
            }
        );
        assert_eq!(view.editor_action.subscriber_count(), 0);
    }

    #[test]
    fn finishing_actions_hide_and_mark_handled() {
        let keyboard = Rc::new(FakeKeyboard::default());
        let (view, _behavior) = attached(&keyboard);

        for action in [
            EditorAction::Done,
            EditorAction::Search,
            EditorAction::Go,
            EditorAction::Next,
        ] {
            let args = EditorActionArgs::new(action);
            view.editor_action.emit(&args);
            assert!(args.is_handled(), "{action:?}");
        }
        assert_eq!(keyboard.hidden.borrow().len(), 4);
        assert!(keyboard.hidden.borrow().iter().all(|w| *w == WindowToken(7)));
    }

    #[test]
    fn other_actions_pass_through() {
        let keyboard = Rc::new(FakeKeyboard::default());
        let (view, _behavior) = attached(&keyboard);

        let args = EditorActionArgs::new(EditorAction::Send);
        view.editor_action.emit(&args);

        assert!(!args.is_handled());
        assert!(keyboard.hidden.borrow().is_empty());
    }

    #[test]
    fn detach_unsubscribes() {
        let keyboard = Rc::new(FakeKeyboard::default());
        let (view, behavior) = attached(&keyboard);
        behavior.remove();

        view.editor_action.emit(&EditorActionArgs::new(EditorAction::Done));
        assert!(keyboard.hidden.borrow().is_empty());
        assert!(view.editor_action.stats().is_balanced());
    }
}
