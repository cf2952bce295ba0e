//! Policy violations reported when a submission is gated.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single reason a registration submission is refused.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolicyViolation {
    #[error("Password rule '{rule}' not met: {description}")]
    RuleFailed { rule: String, description: String },

    #[error("Password confirmation is empty")]
    ConfirmationMissing,

    #[error("Password confirmation does not match")]
    ConfirmationMismatch,
}

impl PolicyViolation {
    /// True for violations caused by the confirmation field.
    pub fn is_confirmation(&self) -> bool {
        matches!(self, Self::ConfirmationMissing | Self::ConfirmationMismatch)
    }
}
