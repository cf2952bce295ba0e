//! Configuration error types.

use crate::builder::BuildError;
use thiserror::Error;

/// Errors that can occur while loading a policy configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed into a configuration
    #[error("Failed to parse policy configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration parsed but does not describe a usable policy
    #[error("Invalid policy configuration: {0}")]
    Build(#[from] BuildError),
}
