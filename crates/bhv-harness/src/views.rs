#![forbid(unsafe_code)]

//! Fake views with a hand-driven lifecycle.
//!
//! Every notification a real toolkit would raise is a plain method here, so
//! tests read as the user interaction they simulate.

use std::cell::{Cell, RefCell};

use bhv_core::{Lifecycle, View};
use bhv_runtime::{Event, Subscription};
use bhv_widgets::trigger::{forward, forward_if};
use bhv_widgets::{
    Background, BackgroundHost, Clickable, EditorAction, EditorActionArgs, EditorActionSource,
    Enableable, FocusSource, TextContent, TextSelection, Trigger, TriggerHandler, TriggerSource,
    WindowToken,
};

/// Shared state of both fakes.
#[derive(Debug)]
struct Common {
    lifecycle: Lifecycle,
    text: RefCell<String>,
    enabled: Cell<bool>,
    background: Cell<Option<Background>>,
}

impl Default for Common {
    fn default() -> Self {
        Self {
            lifecycle: Lifecycle::new(),
            text: RefCell::new(String::new()),
            enabled: Cell::new(true),
            background: Cell::new(None),
        }
    }
}

/// A clickable button. Publishes `Click` and `LongClick`.
#[derive(Debug, Default)]
pub struct FakeButton {
    common: Common,
    clicked: Event<()>,
    long_clicked: Event<()>,
}

impl FakeButton {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn click(&self) {
        self.clicked.emit(&());
    }

    pub fn long_click(&self) {
        self.long_clicked.emit(&());
    }

    #[must_use]
    pub fn long_clicked(&self) -> &Event<()> {
        &self.long_clicked
    }
}

impl View for FakeButton {
    fn lifecycle(&self) -> Option<&Lifecycle> {
        Some(&self.common.lifecycle)
    }

    fn kind(&self) -> &'static str {
        "FakeButton"
    }
}

impl Clickable for FakeButton {
    fn clicked(&self) -> &Event<()> {
        &self.clicked
    }
}

impl TextContent for FakeButton {
    fn text(&self) -> String {
        self.common.text.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        *self.common.text.borrow_mut() = text.to_owned();
    }
}

impl Enableable for FakeButton {
    fn is_enabled(&self) -> bool {
        self.common.enabled.get()
    }

    fn set_enabled(&self, enabled: bool) {
        self.common.enabled.set(enabled);
    }
}

impl BackgroundHost for FakeButton {
    fn background(&self) -> Option<Background> {
        self.common.background.get()
    }

    fn set_background(&self, background: Option<Background>) {
        self.common.background.set(background);
    }
}

impl TriggerSource for FakeButton {
    fn subscribe_trigger(&self, trigger: Trigger, handler: TriggerHandler) -> Option<Subscription> {
        match trigger {
            Trigger::Click => Some(forward(&self.clicked, handler)),
            Trigger::LongClick => Some(forward(&self.long_clicked, handler)),
            _ => None,
        }
    }
}

/// A single-line text field. Publishes focus, editing, text and editor
/// action triggers; not clickable.
#[derive(Debug)]
pub struct FakeTextField {
    common: Common,
    focus: Event<bool>,
    text_changed: Event<String>,
    editor_action: Event<EditorActionArgs>,
    window: WindowToken,
    select_all_calls: Cell<u32>,
}

impl Default for FakeTextField {
    fn default() -> Self {
        Self::in_window(WindowToken(1))
    }
}

impl FakeTextField {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A field shown in `window`.
    #[must_use]
    pub fn in_window(window: WindowToken) -> Self {
        Self {
            common: Common::default(),
            focus: Event::new(),
            text_changed: Event::new(),
            editor_action: Event::new(),
            window,
            select_all_calls: Cell::new(0),
        }
    }

    pub fn gain_focus(&self) {
        self.focus.emit(&true);
    }

    pub fn lose_focus(&self) {
        self.focus.emit(&false);
    }

    /// Replace the text as the user would, raising `TextChanged`.
    pub fn type_text(&self, text: &str) {
        self.set_text(text);
        self.text_changed.emit(&text.to_owned());
    }

    /// Press the editor action key. Returns whether a handler marked the
    /// action handled.
    pub fn press_editor_action(&self, action: EditorAction) -> bool {
        let args = EditorActionArgs::new(action);
        self.editor_action.emit(&args);
        args.is_handled()
    }

    #[must_use]
    pub fn select_all_calls(&self) -> u32 {
        self.select_all_calls.get()
    }

    #[must_use]
    pub fn text_changed(&self) -> &Event<String> {
        &self.text_changed
    }
}

impl View for FakeTextField {
    fn lifecycle(&self) -> Option<&Lifecycle> {
        Some(&self.common.lifecycle)
    }

    fn kind(&self) -> &'static str {
        "FakeTextField"
    }
}

impl TextContent for FakeTextField {
    fn text(&self) -> String {
        self.common.text.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        *self.common.text.borrow_mut() = text.to_owned();
    }
}

impl FocusSource for FakeTextField {
    fn focus_changed(&self) -> &Event<bool> {
        &self.focus
    }
}

impl TextSelection for FakeTextField {
    fn select_all(&self) {
        self.select_all_calls.set(self.select_all_calls.get() + 1);
    }
}

impl Enableable for FakeTextField {
    fn is_enabled(&self) -> bool {
        self.common.enabled.get()
    }

    fn set_enabled(&self, enabled: bool) {
        self.common.enabled.set(enabled);
    }
}

impl BackgroundHost for FakeTextField {
    fn background(&self) -> Option<Background> {
        self.common.background.get()
    }

    fn set_background(&self, background: Option<Background>) {
        self.common.background.set(background);
    }
}

impl EditorActionSource for FakeTextField {
    fn editor_action(&self) -> &Event<EditorActionArgs> {
        &self.editor_action
    }

    fn window_token(&self) -> WindowToken {
        self.window
    }
}

impl TriggerSource for FakeTextField {
    fn subscribe_trigger(&self, trigger: Trigger, handler: TriggerHandler) -> Option<Subscription> {
        let sub = match trigger {
            Trigger::FocusGained | Trigger::EditingDidBegin => {
                forward_if(&self.focus, |gained| *gained, handler)
            }
            Trigger::FocusLost | Trigger::EditingDidEnd => {
                forward_if(&self.focus, |gained| !*gained, handler)
            }
            Trigger::TextChanged => forward(&self.text_changed, handler),
            Trigger::EditorAction => forward(&self.editor_action, handler),
            Trigger::Click | Trigger::LongClick => return None,
        };
        Some(sub)
    }
}
