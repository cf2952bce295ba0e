//! Signup Guard: a pure password policy validator for registration forms
//!
//! Signup Guard is built on the "pure core, imperative shell" philosophy.
//! The policy logic is a set of pure functions with no side effects, while
//! the registration page's event handling lives in a thin adapter that only
//! turns field values into render models.
//!
//! # Core Concepts
//!
//! - **Rule**: a named pure predicate over the password
//! - **Rule set**: the fixed, ordered list of rules shown to the user
//! - **Tri-state match**: the confirmation is undetermined, a match or a mismatch
//! - **Allowed**: every rule passes and the confirmation matches
//!
//! Rules are cosmetic: they guide the user, the server still decides.
//!
//! # Example
//!
//! ```rust
//! use signup_guard::core::{evaluate, MatchState};
//!
//! let evaluation = evaluate("Passw0rd!", "Passw0rd!");
//! assert!(evaluation.outcomes().iter().all(|o| o.passed));
//! assert_eq!(evaluation.match_state(), MatchState::Match);
//! assert!(evaluation.allowed());
//!
//! let evaluation = evaluate("", "");
//! assert!(evaluation.outcomes().iter().all(|o| !o.passed));
//! assert_eq!(evaluation.match_state(), MatchState::Undetermined);
//! assert!(!evaluation.allowed());
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod enforcement;
pub mod form;

// Re-export commonly used types
pub use builder::{BuildError, PolicyBuilder};
pub use config::{ConfigError, PolicyConfig};
pub use crate::core::{evaluate, Evaluation, MatchState, PasswordPolicy, PasswordRule, RuleSet};
pub use enforcement::PolicyViolation;
pub use form::{RegistrationForm, SubmitDecision};
