#![no_main]

use std::rc::Rc;

use arbitrary::Arbitrary;
use bhv_core::{
    Activation, AttachOptions, BehaviorHandle, View, attach_behaviors_with, remove_behaviors,
};
use bhv_harness::{FakeButton, Hook, Journal, RecordingBehavior};
use libfuzzer_sys::fuzz_target;

const TAGS: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

#[derive(Debug, Arbitrary)]
enum Step {
    Live,
    TornDown,
    Remove,
    Attach { count: u8, immediate: bool, if_live: bool },
}

fuzz_target!(|steps: Vec<Step>| {
    let journal = Journal::new();
    let button = Rc::new(FakeButton::new());
    let Some(lifecycle) = button.lifecycle() else {
        return;
    };
    let mut batches: Vec<Vec<BehaviorHandle<FakeButton>>> = Vec::new();

    for step in steps.into_iter().take(64) {
        match step {
            Step::Live => {
                let _ = lifecycle.mark_live();
            }
            Step::TornDown => lifecycle.mark_torn_down(),
            Step::Remove => {
                if let Some(batch) = batches.last() {
                    remove_behaviors(&button, batch);
                }
            }
            Step::Attach {
                count,
                immediate,
                if_live,
            } => {
                let n = usize::from(count) % TAGS.len() + 1;
                let batch: Vec<BehaviorHandle<FakeButton>> = TAGS[..n]
                    .iter()
                    .map(|&tag| RecordingBehavior::new(tag, &journal).handle())
                    .collect();
                let activation = if immediate {
                    Activation::Immediate
                } else {
                    Activation::OnLive
                };
                let opts = AttachOptions::new()
                    .activation(activation)
                    .activate_if_live(if_live);
                let _ = attach_behaviors_with(&button, &batch, opts);
                batches.push(batch);
            }
        }
    }

    // A behavior never detaches more often than it attached.
    for &tag in &TAGS {
        assert!(journal.count(tag, Hook::Detaching) <= journal.count(tag, Hook::Attached));
    }
});
