#![forbid(unsafe_code)]

//! Integration tests: concrete behaviors on fake views, driven through the
//! lifecycle helpers.

use std::cell::Cell;
use std::rc::Rc;

use bhv_core::{BehaviorError, BehaviorHandle, View, ViewBehaviorExt};
use bhv_harness::{FakeButton, FakeTextField, RecordingSoftKeyboard, init_tracing};
use bhv_runtime::{Command, RelayCommand};
use bhv_widgets::{
    Background, BackgroundHost, BorderColoredBehavior, Clickable, Color, EditorAction,
    Enableable, EventToCommandBehavior, HideKeyboardOnEnterBehavior, IncrementCounterBehavior,
    RoundCornerBehavior, SelectAllOnFocusBehavior, SoftKeyboard, TextContent, Trigger,
    WindowToken,
};

fn go_live<V: View>(view: &V) {
    if let Some(lifecycle) = view.lifecycle() {
        lifecycle.mark_live().unwrap();
    }
}

fn tear_down<V: View>(view: &V) {
    if let Some(lifecycle) = view.lifecycle() {
        lifecycle.mark_torn_down();
    }
}

// ============================================================================
// IncrementCounterBehavior
// ============================================================================

#[test]
fn counter_reads_three_after_three_clicks() {
    init_tracing();
    let button = Rc::new(FakeButton::new());
    let counter = BehaviorHandle::new(IncrementCounterBehavior::new());

    button.attach_behavior(&counter).unwrap();
    go_live(&*button);
    assert_eq!(button.text(), "0");

    button.click();
    button.click();
    button.click();
    assert_eq!(button.text(), "3");
}

#[test]
fn counter_unsubscribes_on_teardown() {
    let button = Rc::new(FakeButton::new());
    let counter = BehaviorHandle::new(IncrementCounterBehavior::new());

    button.attach_behavior(&counter).unwrap();
    go_live(&*button);
    button.click();
    tear_down(&*button);
    button.click();

    assert_eq!(button.text(), "1");
    assert!(button.clicked().stats().is_balanced());
}

// ============================================================================
// SelectAllOnFocusBehavior
// ============================================================================

#[test]
fn select_all_once_on_focus_and_not_on_blur() {
    let field = Rc::new(FakeTextField::new());
    let select = BehaviorHandle::new(SelectAllOnFocusBehavior::new());

    field.attach_behavior(&select).unwrap();
    go_live(&*field);

    field.gain_focus();
    assert_eq!(field.select_all_calls(), 1);

    field.lose_focus();
    assert_eq!(field.select_all_calls(), 1);
}

// ============================================================================
// HideKeyboardOnEnterBehavior
// ============================================================================

#[test]
fn keyboard_hidden_for_field_window_on_done() {
    let keyboard = Rc::new(RecordingSoftKeyboard::new());
    let field = Rc::new(FakeTextField::in_window(WindowToken(42)));
    let shared: Rc<dyn SoftKeyboard> = keyboard.clone();
    let hide = BehaviorHandle::new(HideKeyboardOnEnterBehavior::new().with_soft_keyboard(shared));

    field.attach_behavior(&hide).unwrap();
    go_live(&*field);

    assert!(field.press_editor_action(EditorAction::Done));
    assert!(!field.press_editor_action(EditorAction::Send));
    assert_eq!(keyboard.hidden(), [WindowToken(42)]);
}

#[test]
fn keyboard_behavior_without_collaborator_fails_on_live() {
    let field = Rc::new(FakeTextField::new());
    let hide = BehaviorHandle::new(HideKeyboardOnEnterBehavior::new());

    field.attach_behavior(&hide).unwrap();
    let err = field.lifecycle().map(|l| l.mark_live());

    assert!(matches!(
        err,
        Some(Err(BehaviorError::MissingConfiguration {
            property: "soft_keyboard",
            ..
        }))
    ));
}

// ============================================================================
// Decorations
// ============================================================================

#[test]
fn border_then_round_corner_in_batch_order() {
    let field = Rc::new(FakeTextField::new());
    let batch: [BehaviorHandle<FakeTextField>; 2] = [
        BehaviorHandle::new(BorderColoredBehavior::new(Color::RED, 2.0)).into_dyn(),
        BehaviorHandle::new(RoundCornerBehavior::new(Color::WHITE, 6.0)).into_dyn(),
    ];

    field.attach_behaviors(&batch).unwrap();
    assert!(field.background().is_none());

    go_live(&*field);
    assert_eq!(
        field.background(),
        Some(Background::RoundRect {
            fill: Color::WHITE,
            radius: 6.0
        })
    );
}

// ============================================================================
// EventToCommandBehavior
// ============================================================================

#[test]
fn command_enabled_state_follows_predicate_without_reattach() {
    let ready = Rc::new(Cell::new(false));
    let r = Rc::clone(&ready);
    let command = Rc::new(RelayCommand::new(|_: &()| {}).with_can_execute(move |_| r.get()));
    let button = Rc::new(FakeButton::new());
    let bridge = BehaviorHandle::new(EventToCommandBehavior::new(
        Trigger::Click,
        Rc::clone(&command),
    ));

    button.attach_behavior(&bridge).unwrap();
    go_live(&*button);
    assert!(!button.is_enabled());

    ready.set(true);
    command.raise_can_execute_changed();
    assert!(button.is_enabled());
}

#[test]
fn command_runs_per_trigger_and_stops_after_teardown() {
    let runs = Rc::new(Cell::new(0));
    let r = Rc::clone(&runs);
    let command = Rc::new(RelayCommand::new(move |_: &()| r.set(r.get() + 1)));
    let button = Rc::new(FakeButton::new());
    let bridge = BehaviorHandle::new(EventToCommandBehavior::new(
        Trigger::LongClick,
        Rc::clone(&command),
    ));

    button.attach_behavior(&bridge).unwrap();
    go_live(&*button);
    button.click();
    button.long_click();
    button.long_click();
    tear_down(&*button);
    button.long_click();

    assert_eq!(runs.get(), 2);
    assert!(button.long_clicked().stats().is_balanced());
    assert!(command.can_execute_changed().stats().is_balanced());
}

#[test]
fn trigger_from_name_binds_text_changes() {
    let runs = Rc::new(Cell::new(0));
    let r = Rc::clone(&runs);
    let command = Rc::new(RelayCommand::new(move |_: &()| r.set(r.get() + 1)));
    let field = Rc::new(FakeTextField::new());
    let trigger: Trigger = "TextChanged".parse().unwrap();
    let bridge = BehaviorHandle::new(EventToCommandBehavior::new(trigger, command));

    field.attach_behavior(&bridge).unwrap();
    go_live(&*field);
    field.type_text("a");
    field.type_text("ab");

    assert_eq!(runs.get(), 2);
    assert_eq!(field.text(), "ab");
}

#[test]
fn unsupported_trigger_surfaces_on_live() {
    let command = Rc::new(RelayCommand::new(|_: &()| {}));
    let field = Rc::new(FakeTextField::new());
    let bridge = BehaviorHandle::new(EventToCommandBehavior::new(Trigger::Click, command));

    field.attach_behavior(&bridge).unwrap();
    let result = field.lifecycle().map(|l| l.mark_live());

    assert_eq!(
        result,
        Some(Err(BehaviorError::UnsupportedTrigger {
            trigger: "Click",
            view: "FakeTextField",
        }))
    );
}
