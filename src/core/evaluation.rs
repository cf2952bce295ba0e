//! Derived validation state.
//!
//! Nothing here is stored between events: an [`Evaluation`] is computed from
//! the two current field values and dropped once the caller has rendered it.

use serde::{Deserialize, Serialize};

/// Result of a single rule for a single password.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    /// Rule identifier
    pub name: String,
    /// Text shown next to the rule indicator
    pub description: String,
    pub passed: bool,
}

/// Tri-state comparison of the confirmation field against the password.
///
/// An empty field on either side yields `Undetermined`, which is neither a
/// match nor a mismatch: the form shows no message for it.
///
/// # Example
///
/// ```rust
/// use signup_guard::core::MatchState;
///
/// assert_eq!(MatchState::of("Passw0rd!", ""), MatchState::Undetermined);
/// assert_eq!(MatchState::of("Passw0rd!", "Passw0rd!"), MatchState::Match);
/// assert_eq!(MatchState::of("Passw0rd!", "passw0rd!"), MatchState::Mismatch);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchState {
    Undetermined,
    Match,
    Mismatch,
}

impl MatchState {
    /// Compare exactly: case-sensitive, no trimming, no normalisation.
    pub fn of(password: &str, confirmation: &str) -> Self {
        if password.is_empty() || confirmation.is_empty() {
            Self::Undetermined
        } else if password == confirmation {
            Self::Match
        } else {
            Self::Mismatch
        }
    }

    pub fn is_match(self) -> bool {
        matches!(self, Self::Match)
    }

    pub fn is_undetermined(self) -> bool {
        matches!(self, Self::Undetermined)
    }
}

/// Shorthand for [`MatchState::of`].
pub fn match_state(password: &str, confirmation: &str) -> MatchState {
    MatchState::of(password, confirmation)
}

/// Full validation state for one `(password, confirmation)` pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    outcomes: Vec<RuleOutcome>,
    match_state: MatchState,
}

impl Evaluation {
    pub fn new(outcomes: Vec<RuleOutcome>, match_state: MatchState) -> Self {
        Self {
            outcomes,
            match_state,
        }
    }

    /// Rule results in rule order.
    pub fn outcomes(&self) -> &[RuleOutcome] {
        &self.outcomes
    }

    pub fn match_state(&self) -> MatchState {
        self.match_state
    }

    /// True when every rule passed.
    pub fn rules_satisfied(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    /// Outcomes of the rules that failed, in rule order.
    pub fn failed(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    /// The submit gate: all rules pass and the confirmation matches.
    pub fn allowed(&self) -> bool {
        self.rules_satisfied() && self.match_state.is_match()
    }
}
