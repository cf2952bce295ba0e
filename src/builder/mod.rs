//! Builder API for ergonomic policy construction.
//!
//! This module provides a fluent builder and a declarative macro for creating
//! password policies with minimal boilerplate while keeping rule order explicit.

pub mod error;
pub mod macros;
pub mod policy;

pub use error::BuildError;
pub use policy::PolicyBuilder;

use crate::core::{PasswordPolicy, PolicyMessages, RuleSet};

/// Create a policy from a declared rule set with the default messages.
///
/// # Example
///
/// ```
/// use signup_guard::builder::policy_from_rules;
/// use signup_guard::password_rules;
///
/// let policy = policy_from_rules(password_rules! {
///     "length" => "At least 4 characters": |p| p.chars().count() >= 4,
/// })
/// .unwrap();
///
/// assert!(policy.evaluate("abcd", "abcd").allowed());
/// ```
pub fn policy_from_rules(rules: RuleSet) -> Result<PasswordPolicy, BuildError> {
    let builder = rules
        .iter()
        .cloned()
        .fold(PolicyBuilder::new().without_standard_rules(), |b, rule| {
            b.require(rule)
        });
    builder.messages(PolicyMessages::default()).build()
}
