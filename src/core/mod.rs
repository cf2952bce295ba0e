//! Core password policy types and logic.
//!
//! This module contains the pure functional core of the validator:
//! - Named rules as pure predicates over the password
//! - The ordered rule set and the policy wrapping it
//! - Derived evaluation state, including the tri-state confirmation match
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod evaluation;
mod policy;
mod rule;
mod rule_set;

pub use evaluation::{match_state, Evaluation, MatchState, RuleOutcome};
pub use policy::{evaluate, PasswordPolicy, PolicyMessages};
pub use rule::{
    PasswordRule, LENGTH, LOWERCASE, MIN_LENGTH, NUMBER, SPECIAL, SPECIAL_CHARACTERS, UPPERCASE,
};
pub use rule_set::RuleSet;
