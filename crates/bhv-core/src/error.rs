#![forbid(unsafe_code)]

//! Errors raised while attaching behaviors.
//!
//! Every error here is a programming or configuration mistake surfaced
//! synchronously to whoever triggered the attach. Nothing is retried and
//! nothing already applied is rolled back.

/// Errors from behavior attachment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BehaviorError {
    /// A required collaborator or property was left unset.
    #[error("{property} property needs to be set in order to use {behavior}")]
    MissingConfiguration {
        behavior: &'static str,
        property: &'static str,
    },
    /// The view does not publish the requested trigger.
    #[error("the trigger {trigger} was not found on {view}")]
    UnsupportedTrigger {
        trigger: &'static str,
        view: &'static str,
    },
    /// A trigger name did not match any known trigger.
    #[error("unknown trigger name: {0}")]
    UnknownTrigger(String),
    /// Attach options could not be parsed.
    #[error("invalid attach options: {0}")]
    InvalidOptions(String),
}
