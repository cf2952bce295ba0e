//! Ordered, fixed collection of password rules.

use super::evaluation::RuleOutcome;
use super::rule::{PasswordRule, MIN_LENGTH, SPECIAL_CHARACTERS};

/// Totally ordered set of rules.
///
/// Order is presentation order: the n-th outcome of [`RuleSet::evaluate`]
/// always belongs to the n-th rule, so indicators rendered from it stay
/// aligned with the rule definitions.
///
/// # Example
///
/// ```rust
/// use signup_guard::core::RuleSet;
///
/// let rules = RuleSet::standard();
/// let names: Vec<&str> = rules.iter().map(|r| r.name()).collect();
///
/// assert_eq!(names, ["length", "uppercase", "lowercase", "number", "special"]);
/// ```
#[derive(Clone, Debug)]
pub struct RuleSet {
    rules: Vec<PasswordRule>,
}

impl RuleSet {
    /// The five registration rules with the default minimum length.
    pub fn standard() -> Self {
        Self::with_min_length(MIN_LENGTH)
    }

    /// The five registration rules with a custom minimum length.
    pub fn with_min_length(min: usize) -> Self {
        Self::configured(min, SPECIAL_CHARACTERS)
    }

    /// The five registration rules with a custom length and special set.
    pub fn configured(min: usize, special_characters: &str) -> Self {
        Self {
            rules: vec![
                PasswordRule::min_length(min),
                PasswordRule::uppercase(),
                PasswordRule::lowercase(),
                PasswordRule::digit(),
                PasswordRule::special(special_characters),
            ],
        }
    }

    /// Build from rules already in presentation order.
    pub fn from_rules(rules: Vec<PasswordRule>) -> Self {
        Self { rules }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PasswordRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Look up a rule by identifier.
    pub fn get(&self, name: &str) -> Option<&PasswordRule> {
        self.rules.iter().find(|r| r.name() == name)
    }

    /// Evaluate every rule in order. No rule is skipped, even on empty input.
    pub fn evaluate(&self, password: &str) -> Vec<RuleOutcome> {
        self.rules
            .iter()
            .map(|rule| RuleOutcome {
                name: rule.name().to_string(),
                description: rule.description().to_string(),
                passed: rule.check(password),
            })
            .collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a PasswordRule;
    type IntoIter = std::slice::Iter<'a, PasswordRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
