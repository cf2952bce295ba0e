//! Validation-based enforcement of the password policy on submit.
//!
//! This module gates form submission using Stillwater's `Validation` type
//! to accumulate ALL violations instead of fail-fast behavior.
//!
//! # Philosophy
//!
//! Following Stillwater's philosophy: "Don't stop at first error - collect them all!"
//!
//! A registration form that reports one unmet rule at a time makes users fix
//! their password in rounds. The `Validation` type accumulates every unmet
//! rule and the confirmation problem, so one blocked submit explains all of it.
//!
//! # Example
//!
//! ```rust
//! use signup_guard::core::PasswordPolicy;
//! use signup_guard::enforcement::PolicyViolation;
//! use stillwater::validation::Validation;
//!
//! let policy = PasswordPolicy::standard();
//!
//! match policy.enforce("passw0rd!", "passw0rd!") {
//!     Validation::Failure(violations) => {
//!         assert_eq!(violations.len(), 1);
//!         assert!(violations
//!             .iter()
//!             .all(|v| matches!(v, PolicyViolation::RuleFailed { .. })));
//!     }
//!     Validation::Success(_) => panic!("expected the uppercase rule to fail"),
//! }
//! ```

pub mod rules;
pub mod violations;

// Re-export commonly used types
pub use rules::{enforce_evaluation, PolicyValidation};
pub use violations::PolicyViolation;
