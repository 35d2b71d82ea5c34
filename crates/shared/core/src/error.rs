use thiserror::Error;

use crate::values::{PlayerId, Price};

/// Malformed formation strings, rejected before any data is processed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormationError {
    #[error("Invalid formation format '{0}'. Use '3-5-2' etc.")]
    InvalidFormat(String),

    #[error("Formation count out of range in '{0}'")]
    CountOutOfRange(String),
}

/// Errors raised while mutating a squad
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SquadError {
    #[error(
        "Budget exceeded! Adding player {player_id} (price {price}) would bring cost to {new_total} over budget {budget}"
    )]
    BudgetExceeded {
        player_id: PlayerId,
        price: Price,
        new_total: Price,
        budget: Price,
    },
}
