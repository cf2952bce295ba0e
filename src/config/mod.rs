//! Serializable policy configuration.
//!
//! Lets a host page ship the policy settings (and their localised copy) as
//! JSON instead of code. Every field is optional; missing fields fall back to
//! the standard registration policy.

use crate::builder::PolicyBuilder;
use crate::core::{PasswordPolicy, PolicyMessages, MIN_LENGTH, SPECIAL_CHARACTERS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

pub mod error;

pub use error::ConfigError;

/// Settings for the standard rule set.
///
/// # Example
///
/// ```rust
/// use signup_guard::config::PolicyConfig;
///
/// let config = PolicyConfig::from_json_str(r#"{
///     "min_length": 10,
///     "descriptions": { "number": "At least one digit" }
/// }"#).unwrap();
///
/// let policy = config.into_policy().unwrap();
/// assert!(!policy.evaluate("Passw0rd!", "Passw0rd!").allowed());
/// assert!(policy.evaluate("Passw0rd!!", "Passw0rd!!").allowed());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    /// Minimum number of characters
    pub min_length: usize,

    /// Characters accepted by the `special` rule
    pub special_characters: String,

    /// Rule name -> description overrides
    pub descriptions: BTreeMap<String, String>,

    /// Match and blocking messages
    pub messages: PolicyMessages,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_length: MIN_LENGTH,
            special_characters: SPECIAL_CHARACTERS.to_string(),
            descriptions: BTreeMap::new(),
            messages: PolicyMessages::default(),
        }
    }
}

impl PolicyConfig {
    /// Parse a JSON document.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        Ok(config)
    }

    /// Render as pretty JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the policy this configuration describes.
    pub fn into_policy(self) -> Result<PasswordPolicy, ConfigError> {
        debug!(
            min_length = self.min_length,
            overrides = self.descriptions.len(),
            "building password policy from configuration"
        );

        let builder = self
            .descriptions
            .into_iter()
            .fold(PolicyBuilder::new(), |b, (name, description)| {
                b.describe(name, description)
            });

        let policy = builder
            .min_length(self.min_length)
            .special_characters(self.special_characters)
            .messages(self.messages)
            .build()?;

        Ok(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::BuildError;

    #[test]
    fn empty_document_yields_standard_policy() {
        let config = PolicyConfig::from_json_str("{}").unwrap();
        assert_eq!(config, PolicyConfig::default());

        let policy = config.into_policy().unwrap();
        let standard = PasswordPolicy::standard();
        for password in ["", "abc", "Passw0rd!"] {
            assert_eq!(
                policy.check_password(password),
                standard.check_password(password)
            );
        }
    }

    #[test]
    fn partial_messages_keep_defaults() {
        let config =
            PolicyConfig::from_json_str(r#"{ "messages": { "blocked": "Fix the form" } }"#)
                .unwrap();

        assert_eq!(config.messages.blocked, "Fix the form");
        assert_eq!(config.messages.matched, "Пароли совпадают");
    }

    #[test]
    fn descriptions_are_localised() {
        let config = PolicyConfig::from_json_str(
            r#"{ "descriptions": { "length": "At least 8 characters", "special": "Symbol" } }"#,
        )
        .unwrap();

        let policy = config.into_policy().unwrap();
        let descriptions: Vec<&str> = policy.rules().iter().map(|r| r.description()).collect();
        assert_eq!(
            descriptions,
            vec![
                "At least 8 characters",
                "Заглавная буква",
                "Строчная буква",
                "Цифра",
                "Symbol"
            ]
        );
    }

    #[test]
    fn unknown_field_is_a_parse_error() {
        let result = PolicyConfig::from_json_str(r#"{ "max_length": 64 }"#);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = PolicyConfig::from_json_str("{ min_length: ");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn unknown_rule_description_is_rejected() {
        let config =
            PolicyConfig::from_json_str(r#"{ "descriptions": { "emoji": "Эмодзи" } }"#).unwrap();

        let result = config.into_policy();
        assert!(matches!(
            result,
            Err(ConfigError::Build(BuildError::UnknownRule { .. }))
        ));
    }

    #[test]
    fn zero_min_length_is_rejected() {
        let config = PolicyConfig::from_json_str(r#"{ "min_length": 0 }"#).unwrap();

        assert!(matches!(
            config.into_policy(),
            Err(ConfigError::Build(BuildError::ZeroMinLength))
        ));
    }

    #[test]
    fn config_survives_json_rendering() {
        let mut config = PolicyConfig {
            min_length: 12,
            ..PolicyConfig::default()
        };
        config
            .descriptions
            .insert("number".to_string(), "Digit".to_string());

        let json = config.to_json_string().unwrap();
        assert_eq!(PolicyConfig::from_json_str(&json).unwrap(), config);
    }
}
