//! Named password rules.
//!
//! A rule is a pure predicate over the candidate password, paired with the
//! identifier the form uses for its indicator and a human-readable
//! description. Rules never inspect the confirmation field.

use std::fmt;
use std::sync::Arc;

/// Minimum password length enforced by the standard rule set.
pub const MIN_LENGTH: usize = 8;

/// Characters accepted by the standard `special` rule.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Identifier of the minimum length rule.
pub const LENGTH: &str = "length";
/// Identifier of the uppercase letter rule.
pub const UPPERCASE: &str = "uppercase";
/// Identifier of the lowercase letter rule.
pub const LOWERCASE: &str = "lowercase";
/// Identifier of the digit rule.
pub const NUMBER: &str = "number";
/// Identifier of the special character rule.
pub const SPECIAL: &str = "special";

type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Pure predicate that a password must satisfy.
///
/// # Example
///
/// ```rust
/// use signup_guard::core::PasswordRule;
///
/// let no_spaces = PasswordRule::new("no_spaces", "Без пробелов", |p: &str| {
///     !p.contains(' ')
/// });
///
/// assert!(no_spaces.check("Passw0rd!"));
/// assert!(!no_spaces.check("Pass w0rd!"));
/// ```
#[derive(Clone)]
pub struct PasswordRule {
    name: String,
    description: String,
    predicate: Predicate,
}

impl PasswordRule {
    /// Create a rule from a pure predicate.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(name: impl Into<String>, description: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// At least `min` characters, counted as Unicode scalar values.
    pub fn min_length(min: usize) -> Self {
        Self::new(LENGTH, format!("Минимум {min} символов"), move |p: &str| {
            p.chars().count() >= min
        })
    }

    /// At least one ASCII uppercase letter.
    pub fn uppercase() -> Self {
        Self::new(UPPERCASE, "Заглавная буква", |p: &str| {
            p.chars().any(|c| c.is_ascii_uppercase())
        })
    }

    /// At least one ASCII lowercase letter.
    pub fn lowercase() -> Self {
        Self::new(LOWERCASE, "Строчная буква", |p: &str| {
            p.chars().any(|c| c.is_ascii_lowercase())
        })
    }

    /// At least one ASCII digit.
    pub fn digit() -> Self {
        Self::new(NUMBER, "Цифра", |p: &str| p.chars().any(|c| c.is_ascii_digit()))
    }

    /// At least one character drawn from `allowed`.
    pub fn special(allowed: impl Into<String>) -> Self {
        let allowed: String = allowed.into();
        Self::new(SPECIAL, "Спецсимвол", move |p: &str| {
            p.chars().any(|c| allowed.contains(c))
        })
    }

    /// Replace the description, keeping name and predicate.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Evaluate the predicate. Pure; never short-circuits on empty input.
    pub fn check(&self, password: &str) -> bool {
        (self.predicate)(password)
    }
}

impl fmt::Debug for PasswordRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordRule")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
