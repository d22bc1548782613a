//! Build errors for history engine construction.

use thiserror::Error;

/// A single problem found while validating an engine configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("History limit must allow at least one undo step")]
    ZeroLimit,

    #[error("Initializing command kind must not be empty")]
    EmptyInitKind,

    #[error("Initializing command cannot use reserved kind '{kind}'")]
    ReservedInitCommand { kind: String },
}

/// Errors that can occur when building a history engine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid history configuration: {}", describe(.violations))]
    InvalidConfig { violations: Vec<ConfigViolation> },

    #[error("Failed to parse history configuration: {0}")]
    Config(#[from] serde_json::Error),
}

fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
