//! Builder for constructing password policies.

use crate::builder::error::BuildError;
use crate::core::{
    PasswordPolicy, PasswordRule, PolicyMessages, RuleSet, MIN_LENGTH, SPECIAL_CHARACTERS,
};
use std::collections::{BTreeMap, HashSet};

/// Builder for constructing password policies with a fluent API.
///
/// Starts from the five standard rules; custom rules are appended after them
/// in the order they are added.
pub struct PolicyBuilder {
    standard_rules: bool,
    min_length: usize,
    special_characters: String,
    custom: Vec<PasswordRule>,
    descriptions: BTreeMap<String, String>,
    messages: PolicyMessages,
}

impl PolicyBuilder {
    /// Create a new builder with the standard rules enabled.
    pub fn new() -> Self {
        Self {
            standard_rules: true,
            min_length: MIN_LENGTH,
            special_characters: SPECIAL_CHARACTERS.to_string(),
            custom: Vec::new(),
            descriptions: BTreeMap::new(),
            messages: PolicyMessages::default(),
        }
    }

    /// Drop the five standard rules; only rules added with `require` remain.
    pub fn without_standard_rules(mut self) -> Self {
        self.standard_rules = false;
        self
    }

    /// Set the minimum password length.
    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = n;
        self
    }

    /// Set the characters accepted by the `special` rule.
    pub fn special_characters(mut self, chars: impl Into<String>) -> Self {
        self.special_characters = chars.into();
        self
    }

    /// Append a pre-built rule.
    pub fn require(mut self, rule: PasswordRule) -> Self {
        self.custom.push(rule);
        self
    }

    /// Append a rule from a predicate.
    pub fn require_pred<F>(
        self,
        name: impl Into<String>,
        description: impl Into<String>,
        predicate: F,
    ) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.require(PasswordRule::new(name, description, predicate))
    }

    /// Override the description of a rule by name.
    pub fn describe(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.descriptions.insert(name.into(), description.into());
        self
    }

    /// Replace all non-rule messages.
    pub fn messages(mut self, messages: PolicyMessages) -> Self {
        self.messages = messages;
        self
    }

    /// Set the message shown when submission is blocked.
    pub fn blocking_message(mut self, message: impl Into<String>) -> Self {
        self.messages.blocked = message.into();
        self
    }

    /// Build the policy.
    /// Returns an error if the configuration cannot produce a usable rule set.
    pub fn build(mut self) -> Result<PasswordPolicy, BuildError> {
        let mut rules = Vec::with_capacity(5 + self.custom.len());

        if self.standard_rules {
            if self.min_length == 0 {
                return Err(BuildError::ZeroMinLength);
            }
            if self.special_characters.is_empty() {
                return Err(BuildError::EmptySpecialCharacters);
            }
            rules.extend(
                RuleSet::configured(self.min_length, &self.special_characters)
                    .iter()
                    .cloned(),
            );
        }
        rules.append(&mut self.custom);

        if rules.is_empty() {
            return Err(BuildError::NoRules);
        }

        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.name().to_string()) {
                return Err(BuildError::DuplicateRule {
                    name: rule.name().to_string(),
                });
            }
        }

        for (name, description) in self.descriptions {
            let rule = rules
                .iter_mut()
                .find(|r| r.name() == name)
                .ok_or_else(|| BuildError::UnknownRule { name: name.clone() })?;
            *rule = rule.clone().with_description(description);
        }

        Ok(PasswordPolicy::new(RuleSet::from_rules(rules), self.messages))
    }
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(policy: &PasswordPolicy) -> Vec<&str> {
        policy.rules().iter().map(|r| r.name()).collect()
    }

    #[test]
    fn default_builder_matches_standard_policy() {
        let built = PolicyBuilder::new().build().unwrap();
        let standard = PasswordPolicy::standard();

        assert_eq!(names(&built), names(&standard));
        for password in ["", "abc", "Passw0rd!", "PASSWORD1!", "пароль"] {
            assert_eq!(
                built.check_password(password),
                standard.check_password(password)
            );
        }
        assert_eq!(built.messages(), standard.messages());
    }

    #[test]
    fn special_rule_stays_last_among_standard_rules() {
        let policy = PolicyBuilder::new().special_characters("-_").build().unwrap();

        assert_eq!(
            names(&policy),
            vec!["length", "uppercase", "lowercase", "number", "special"]
        );
        let special = policy.rules().get("special").unwrap();
        assert!(special.check("a_b"));
        assert!(!special.check("a!b"));
    }

    #[test]
    fn custom_rules_follow_standard_rules() {
        let policy = PolicyBuilder::new()
            .require_pred("no_spaces", "Без пробелов", |p| !p.contains(' '))
            .build()
            .unwrap();

        assert_eq!(names(&policy).last(), Some(&"no_spaces"));
        assert_eq!(policy.rules().len(), 6);
    }

    #[test]
    fn custom_only_policy() {
        let policy = PolicyBuilder::new()
            .without_standard_rules()
            .require(PasswordRule::digit())
            .build()
            .unwrap();

        assert_eq!(names(&policy), vec!["number"]);
        assert!(policy.evaluate("1", "1").allowed());
    }

    #[test]
    fn describe_overrides_description() {
        let policy = PolicyBuilder::new()
            .describe("number", "At least one digit")
            .build()
            .unwrap();

        assert_eq!(
            policy.rules().get("number").map(|r| r.description()),
            Some("At least one digit")
        );
    }

    #[test]
    fn blocking_message_is_applied() {
        let policy = PolicyBuilder::new()
            .blocking_message("Please fix the form")
            .build()
            .unwrap();

        assert_eq!(policy.messages().blocked, "Please fix the form");
        assert_eq!(policy.messages().matched, "Пароли совпадают");
    }

    #[test]
    fn rejects_empty_rule_list() {
        let result = PolicyBuilder::new().without_standard_rules().build();

        assert_eq!(result.unwrap_err(), BuildError::NoRules);
    }

    #[test]
    fn rejects_zero_min_length() {
        let result = PolicyBuilder::new().min_length(0).build();

        assert_eq!(result.unwrap_err(), BuildError::ZeroMinLength);
    }

    #[test]
    fn rejects_empty_special_set() {
        let result = PolicyBuilder::new().special_characters("").build();

        assert_eq!(result.unwrap_err(), BuildError::EmptySpecialCharacters);
    }

    #[test]
    fn rejects_duplicate_rule_names() {
        let result = PolicyBuilder::new().require(PasswordRule::digit()).build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::DuplicateRule {
                name: "number".to_string()
            }
        );
    }

    #[test]
    fn rejects_description_for_unknown_rule() {
        let result = PolicyBuilder::new().describe("emoji", "Эмодзи").build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::UnknownRule {
                name: "emoji".to_string()
            }
        );
    }
}
