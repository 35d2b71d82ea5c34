//! Squad building errors

use thiserror::Error;
use xi_core::{FormationError, SquadError};
use xi_ports::RuleViolation;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid formation: {0}")]
    InvalidFormation(#[from] FormationError),

    #[error("Squad budget violated: {0}")]
    Budget(#[from] SquadError),

    #[error("Squad failed validation: {}", join_messages(.0))]
    RuleViolations(Vec<RuleViolation>),
}

/// Alias used by callers that import several error types
pub type BuildError = Error;

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Violations carried by a failed validation, empty for other errors
    pub fn violations(&self) -> &[RuleViolation] {
        match self {
            Error::RuleViolations(violations) => violations,
            _ => &[],
        }
    }
}

fn join_messages(violations: &[RuleViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
