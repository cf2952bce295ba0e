//! Build errors for password policies.

use thiserror::Error;

/// Errors that can occur when building a password policy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("No rules defined. Keep the standard rules or add at least one with .require()")]
    NoRules,

    #[error("Minimum length must be at least 1")]
    ZeroMinLength,

    #[error("Special character set is empty. Pass at least one character to .special_characters()")]
    EmptySpecialCharacters,

    #[error("Rule '{name}' is defined more than once")]
    DuplicateRule { name: String },

    #[error("Cannot describe unknown rule '{name}'")]
    UnknownRule { name: String },
}
