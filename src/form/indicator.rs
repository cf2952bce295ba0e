//! Render models for the registration form's live feedback.
//!
//! These carry exactly what the page needs to paint: text plus the CSS and
//! icon classes of the Bootstrap/Font Awesome markup the form uses.

use crate::core::{Evaluation, MatchState, PolicyMessages, RuleOutcome};
use serde::{Deserialize, Serialize};

/// Pass/fail styling of one rule indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorStatus {
    Success,
    Danger,
}

impl IndicatorStatus {
    pub fn from_passed(passed: bool) -> Self {
        if passed {
            Self::Success
        } else {
            Self::Danger
        }
    }

    /// Class for the list item text.
    pub fn text_class(self) -> &'static str {
        match self {
            Self::Success => "text-success",
            Self::Danger => "text-danger",
        }
    }

    /// Full class attribute for the indicator icon.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fas fa-check text-success",
            Self::Danger => "fas fa-times text-danger",
        }
    }
}

/// One entry of the rule list, index-aligned with the policy's rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleIndicator {
    pub name: String,
    pub description: String,
    pub status: IndicatorStatus,
}

impl From<&RuleOutcome> for RuleIndicator {
    fn from(outcome: &RuleOutcome) -> Self {
        Self {
            name: outcome.name.clone(),
            description: outcome.description.clone(),
            status: IndicatorStatus::from_passed(outcome.passed),
        }
    }
}

/// Feedback under the confirmation field.
///
/// `Undetermined` renders nothing: no message and no validity class.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchIndicator {
    pub state: MatchState,
    pub message: Option<String>,
}

impl MatchIndicator {
    pub fn new(state: MatchState, messages: &PolicyMessages) -> Self {
        let message = match state {
            MatchState::Undetermined => None,
            MatchState::Match => Some(messages.matched.clone()),
            MatchState::Mismatch => Some(messages.mismatched.clone()),
        };
        Self { state, message }
    }

    /// Validity class for the confirmation input.
    pub fn input_class(&self) -> Option<&'static str> {
        match self.state {
            MatchState::Undetermined => None,
            MatchState::Match => Some("is-valid"),
            MatchState::Mismatch => Some("is-invalid"),
        }
    }

    /// Icon shown before the message.
    pub fn icon_class(&self) -> Option<&'static str> {
        match self.state {
            MatchState::Undetermined => None,
            MatchState::Match => Some(IndicatorStatus::Success.icon_class()),
            MatchState::Mismatch => Some(IndicatorStatus::Danger.icon_class()),
        }
    }
}

/// Everything repainted after a password keystroke.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFeedback {
    pub rules: Vec<RuleIndicator>,
    pub confirmation: MatchIndicator,
}

impl FormFeedback {
    pub fn from_evaluation(evaluation: &Evaluation, messages: &PolicyMessages) -> Self {
        Self {
            rules: evaluation.outcomes().iter().map(RuleIndicator::from).collect(),
            confirmation: MatchIndicator::new(evaluation.match_state(), messages),
        }
    }
}
