#![forbid(unsafe_code)]

//! Attach policy options.
//!
//! The defaults reproduce the plain contract: wait for "became live" when
//! the view has a lifecycle, attach immediately when it has none.
//!
//! # Example
//!
//! ```
//! use bhv_core::{Activation, AttachOptions};
//!
//! // Views that may already be on screen when behaviors are attached.
//! let opts = AttachOptions {
//!     activate_if_live: true,
//!     ..Default::default()
//! };
//! assert_eq!(opts.activation, Activation::OnLive);
//! ```

use crate::view::Lifecycle;

/// When a behavior batch is activated on a view with a lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "policy-config",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Activation {
    /// Wait for the next "became live" notification.
    #[default]
    OnLive,
    /// Attach right away; teardown still removes the batch.
    Immediate,
}

/// Options for the attach helpers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "policy-config",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct AttachOptions {
    /// Activation policy for views with a lifecycle.
    pub activation: Activation,
    /// With [`Activation::OnLive`], attach right away if the view is already
    /// live instead of waiting for its next "became live" notification.
    pub activate_if_live: bool,
}

impl AttachOptions {
    /// Default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            activation: Activation::OnLive,
            activate_if_live: false,
        }
    }

    /// Set the activation policy.
    #[must_use]
    pub const fn activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    /// Set whether an already-live view is activated right away.
    #[must_use]
    pub const fn activate_if_live(mut self, yes: bool) -> Self {
        self.activate_if_live = yes;
        self
    }

    /// Whether a batch attached to a view with `lifecycle` activates now.
    pub(crate) fn activates_now(&self, lifecycle: Option<&Lifecycle>) -> bool {
        match (lifecycle, self.activation) {
            (None, _) | (Some(_), Activation::Immediate) => true,
            (Some(lifecycle), Activation::OnLive) => self.activate_if_live && lifecycle.is_live(),
        }
    }

    /// Parse options from TOML.
    ///
    /// ```toml
    /// activation = "on-live"
    /// activate_if_live = true
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`BehaviorError::InvalidOptions`](crate::BehaviorError::InvalidOptions)
    /// on malformed input or unknown keys.
    #[cfg(feature = "policy-config")]
    pub fn from_toml_str(input: &str) -> Result<Self, crate::BehaviorError> {
        toml::from_str(input).map_err(|err| crate::BehaviorError::InvalidOptions(err.to_string()))
    }
}
