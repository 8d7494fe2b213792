#![no_main]

use bhv_core::AttachOptions;
use bhv_widgets::Trigger;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(trigger) = input.parse::<Trigger>() {
        assert_eq!(trigger.name(), input);
    }

    // Must never panic, whatever the input.
    let _ = AttachOptions::from_toml_str(input);
});
