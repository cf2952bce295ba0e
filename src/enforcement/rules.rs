//! Submission enforcement using Validation.

use crate::core::{Evaluation, MatchState, PasswordPolicy};
use crate::enforcement::violations::PolicyViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of enforcing the policy on a submission.
pub type PolicyValidation = Validation<(), NonEmptyVec<PolicyViolation>>;

impl PasswordPolicy {
    /// Enforce the policy on a submission, accumulating ALL violations.
    /// Returns Validation::Success(()) exactly when the evaluation is allowed.
    /// Returns Validation::Failure with one violation per failed rule, in
    /// rule order, followed by the confirmation violation if any.
    pub fn enforce(&self, password: &str, confirmation: &str) -> PolicyValidation {
        enforce_evaluation(&self.evaluate(password, confirmation), confirmation)
    }
}

/// Turn an existing evaluation into a validation.
pub fn enforce_evaluation(evaluation: &Evaluation, confirmation: &str) -> PolicyValidation {
    let mut checks: Vec<PolicyValidation> = evaluation
        .outcomes()
        .iter()
        .map(|outcome| {
            if outcome.passed {
                Validation::success(())
            } else {
                Validation::fail(PolicyViolation::RuleFailed {
                    rule: outcome.name.clone(),
                    description: outcome.description.clone(),
                })
            }
        })
        .collect();

    let confirmation_check = match evaluation.match_state() {
        MatchState::Match => Validation::success(()),
        MatchState::Mismatch => Validation::fail(PolicyViolation::ConfirmationMismatch),
        // An empty password with a filled confirmation still differs from it.
        MatchState::Undetermined if !confirmation.is_empty() => {
            Validation::fail(PolicyViolation::ConfirmationMismatch)
        }
        MatchState::Undetermined => Validation::fail(PolicyViolation::ConfirmationMissing),
    };
    checks.push(confirmation_check);

    Validation::all_vec(checks).map(|_| ())
}
