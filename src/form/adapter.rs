//! Registration form adapter.

use crate::core::{Evaluation, PasswordPolicy};
use crate::enforcement::{enforce_evaluation, PolicyViolation};
use crate::form::indicator::{FormFeedback, MatchIndicator};
use crate::form::visibility::{Field, FieldVisibility};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use tracing::{debug, warn};

/// Decision returned when the form is submitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum SubmitDecision {
    /// Let the browser submit the form
    Proceed,

    /// Cancel the submission and show `message`
    Blocked {
        message: String,
        violations: Vec<PolicyViolation>,
    },
}

impl SubmitDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Proceed)
    }
}

/// Event-driven shell around a [`PasswordPolicy`].
///
/// Holds the current field values and visibility only. Every response is
/// recomputed from scratch, so the order of events never matters beyond the
/// values they leave behind.
///
/// # Example
///
/// ```rust
/// use signup_guard::core::PasswordPolicy;
/// use signup_guard::form::RegistrationForm;
///
/// let mut form = RegistrationForm::new(PasswordPolicy::standard());
///
/// form.on_password_input("Passw0rd!");
/// assert!(!form.on_submit().is_allowed());
///
/// form.on_confirmation_input("Passw0rd!");
/// assert!(form.on_submit().is_allowed());
/// ```
#[derive(Clone, Debug)]
pub struct RegistrationForm {
    policy: PasswordPolicy,
    password: String,
    confirmation: String,
    password_visibility: FieldVisibility,
    confirmation_visibility: FieldVisibility,
}

impl RegistrationForm {
    pub fn new(policy: PasswordPolicy) -> Self {
        Self {
            policy,
            password: String::new(),
            confirmation: String::new(),
            password_visibility: FieldVisibility::Hidden,
            confirmation_visibility: FieldVisibility::Hidden,
        }
    }

    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn confirmation(&self) -> &str {
        &self.confirmation
    }

    /// Evaluate the current field values.
    pub fn evaluation(&self) -> Evaluation {
        self.policy.evaluate(&self.password, &self.confirmation)
    }

    /// Full feedback for the current values. On a fresh form this paints
    /// every rule as failing.
    pub fn render(&self) -> FormFeedback {
        FormFeedback::from_evaluation(&self.evaluation(), self.policy.messages())
    }

    /// Password field changed: repaint the rules and the match message.
    pub fn on_password_input(&mut self, value: &str) -> FormFeedback {
        self.password = value.to_string();
        self.render()
    }

    /// Confirmation field changed: repaint the match message only.
    pub fn on_confirmation_input(&mut self, value: &str) -> MatchIndicator {
        self.confirmation = value.to_string();
        MatchIndicator::new(self.evaluation().match_state(), self.policy.messages())
    }

    /// Gate the submission.
    pub fn on_submit(&self) -> SubmitDecision {
        let evaluation = self.evaluation();

        match enforce_evaluation(&evaluation, &self.confirmation) {
            Validation::Success(_) => {
                debug!("registration form submission allowed");
                SubmitDecision::Proceed
            }
            Validation::Failure(errors) => {
                let violations: Vec<PolicyViolation> = errors.iter().cloned().collect();
                warn!(
                    violations = violations.len(),
                    match_state = ?evaluation.match_state(),
                    "registration form submission blocked"
                );
                SubmitDecision::Blocked {
                    message: self.policy.messages().blocked.clone(),
                    violations,
                }
            }
        }
    }

    pub fn visibility(&self, field: Field) -> FieldVisibility {
        match field {
            Field::Password => self.password_visibility,
            Field::Confirmation => self.confirmation_visibility,
        }
    }

    /// Flip a field between hidden and shown, returning the new state.
    pub fn toggle_visibility(&mut self, field: Field) -> FieldVisibility {
        let slot = match field {
            Field::Password => &mut self.password_visibility,
            Field::Confirmation => &mut self.confirmation_visibility,
        };
        *slot = slot.toggled();
        *slot
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new(PasswordPolicy::standard())
    }
}
