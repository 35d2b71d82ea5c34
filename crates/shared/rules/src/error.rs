use thiserror::Error;
use xi_core::FormationError;

/// Errors raised while constructing rules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("Unknown rule: {0}")]
    UnknownRule(String),

    #[error(transparent)]
    InvalidFormation(#[from] FormationError),
}

pub type RuleErrorResult<T> = std::result::Result<T, RuleError>;
