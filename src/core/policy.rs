//! The password policy: a rule set plus the copy the form shows around it.

use super::evaluation::{Evaluation, MatchState, RuleOutcome};
use super::rule_set::RuleSet;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::debug;

/// User-facing messages that are not tied to a single rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyMessages {
    /// Shown when the confirmation matches
    pub matched: String,
    /// Shown when the confirmation differs
    pub mismatched: String,
    /// Shown when a submission is blocked
    pub blocked: String,
}

impl Default for PolicyMessages {
    fn default() -> Self {
        Self {
            matched: "Пароли совпадают".to_string(),
            mismatched: "Пароли не совпадают".to_string(),
            blocked: "Пожалуйста, исправьте ошибки в форме".to_string(),
        }
    }
}

/// Password policy for the registration form.
///
/// Evaluation is pure: the policy holds no per-form state, so one instance
/// can serve any number of forms.
///
/// # Example
///
/// ```rust
/// use signup_guard::core::{MatchState, PasswordPolicy};
///
/// let policy = PasswordPolicy::standard();
///
/// let evaluation = policy.evaluate("Passw0rd!", "Passw0rd!");
/// assert!(evaluation.allowed());
///
/// let evaluation = policy.evaluate("Passw0rd!", "Passw0rd");
/// assert_eq!(evaluation.match_state(), MatchState::Mismatch);
/// assert!(!evaluation.allowed());
/// ```
#[derive(Clone, Debug)]
pub struct PasswordPolicy {
    rules: RuleSet,
    messages: PolicyMessages,
}

impl PasswordPolicy {
    pub fn new(rules: RuleSet, messages: PolicyMessages) -> Self {
        Self { rules, messages }
    }

    /// The registration policy with default rules and messages.
    pub fn standard() -> Self {
        Self::new(RuleSet::standard(), PolicyMessages::default())
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn messages(&self) -> &PolicyMessages {
        &self.messages
    }

    /// Evaluate the password alone, in rule order.
    pub fn check_password(&self, password: &str) -> Vec<RuleOutcome> {
        self.rules.evaluate(password)
    }

    /// Evaluate both fields.
    pub fn evaluate(&self, password: &str, confirmation: &str) -> Evaluation {
        let evaluation = Evaluation::new(
            self.rules.evaluate(password),
            MatchState::of(password, confirmation),
        );

        debug!(
            rules = evaluation.outcomes().len(),
            failed = evaluation.failed().count(),
            match_state = ?evaluation.match_state(),
            allowed = evaluation.allowed(),
            "evaluated password policy"
        );

        evaluation
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_policy() -> &'static PasswordPolicy {
    static STANDARD: OnceLock<PasswordPolicy> = OnceLock::new();
    STANDARD.get_or_init(PasswordPolicy::standard)
}

/// Evaluate against the standard registration policy.
///
/// # Example
///
/// ```rust
/// use signup_guard::core::{evaluate, MatchState};
///
/// let evaluation = evaluate("abc", "");
/// let passed: Vec<bool> = evaluation.outcomes().iter().map(|o| o.passed).collect();
///
/// assert_eq!(passed, [false, false, true, false, false]);
/// assert_eq!(evaluation.match_state(), MatchState::Undetermined);
/// assert!(!evaluation.allowed());
/// ```
pub fn evaluate(password: &str, confirmation: &str) -> Evaluation {
    standard_policy().evaluate(password, confirmation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passed(evaluation: &Evaluation) -> Vec<bool> {
        evaluation.outcomes().iter().map(|o| o.passed).collect()
    }

    #[test]
    fn short_password_without_confirmation() {
        let evaluation = evaluate("abc", "");

        assert_eq!(passed(&evaluation), vec![false, false, true, false, false]);
        assert_eq!(evaluation.match_state(), MatchState::Undetermined);
        assert!(!evaluation.allowed());
    }

    #[test]
    fn strong_password_confirmed() {
        let evaluation = evaluate("Passw0rd!", "Passw0rd!");

        assert!(passed(&evaluation).iter().all(|p| *p));
        assert_eq!(evaluation.match_state(), MatchState::Match);
        assert!(evaluation.allowed());
    }

    #[test]
    fn strong_password_with_mismatched_confirmation() {
        let evaluation = evaluate("Passw0rd!", "Passw0rd");

        assert!(evaluation.rules_satisfied());
        assert_eq!(evaluation.match_state(), MatchState::Mismatch);
        assert!(!evaluation.allowed());
    }

    #[test]
    fn both_fields_empty() {
        let evaluation = evaluate("", "");

        assert!(passed(&evaluation).iter().all(|p| !*p));
        assert_eq!(evaluation.match_state(), MatchState::Undetermined);
        assert!(!evaluation.allowed());
    }

    #[test]
    fn strong_password_without_confirmation_is_not_allowed() {
        let evaluation = evaluate("Passw0rd!", "");

        assert!(evaluation.rules_satisfied());
        assert!(!evaluation.allowed());
    }

    #[test]
    fn evaluation_is_idempotent() {
        let policy = PasswordPolicy::standard();

        assert_eq!(
            policy.evaluate("Passw0rd!", "Passw0rd"),
            policy.evaluate("Passw0rd!", "Passw0rd")
        );
    }

    #[test]
    fn check_password_matches_evaluate_outcomes() {
        let policy = PasswordPolicy::standard();

        assert_eq!(
            policy.check_password("abc"),
            policy.evaluate("abc", "abc").outcomes()
        );
    }

    #[test]
    fn default_messages_are_russian() {
        let messages = PolicyMessages::default();

        assert_eq!(messages.matched, "Пароли совпадают");
        assert_eq!(messages.mismatched, "Пароли не совпадают");
        assert_eq!(messages.blocked, "Пожалуйста, исправьте ошибки в форме");
    }
}
