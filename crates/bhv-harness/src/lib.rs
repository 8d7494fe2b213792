#![forbid(unsafe_code)]

//! Test fixtures for behaviors.
//!
//! - [`FakeButton`] and [`FakeTextField`]: views with a [`Lifecycle`]
//!   whose notifications are raised by hand (`click()`, `gain_focus()`,
//!   `lifecycle().mark_live()`, ...).
//! - [`RecordingBehavior`]: writes every hook call into a shared
//!   [`Journal`], for asserting order and multiplicity.
//! - [`RecordingSoftKeyboard`]: remembers which windows it was asked to
//!   hide the keyboard for.
//!
//! [`Lifecycle`]: bhv_core::Lifecycle

pub mod recording;
pub mod views;

pub use recording::{Hook, Journal, RecordingBehavior, RecordingSoftKeyboard};
pub use views::{FakeButton, FakeTextField};

use tracing_subscriber::EnvFilter;

/// Install a test-writer `fmt` subscriber once per process.
///
/// The filter comes from `RUST_LOG`, defaulting to `warn`. Later calls are
/// no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(filter)
        .try_init();
}
