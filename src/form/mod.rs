//! Imperative shell for the registration page.
//!
//! The page's event handlers become one call each: password input, confirmation
//! input, visibility toggle and submit. Each call returns a render model; the
//! host translates it to DOM updates and, for a blocked submit, cancels the
//! event and shows the message.

mod adapter;
mod indicator;
mod visibility;

pub use adapter::{RegistrationForm, SubmitDecision};
pub use indicator::{FormFeedback, IndicatorStatus, MatchIndicator, RuleIndicator};
pub use visibility::{Field, FieldVisibility};
