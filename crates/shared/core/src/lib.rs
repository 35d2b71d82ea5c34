//! XI Core Domain
//!
//! Pure domain types for the XI squad advisor.
//! This crate contains no I/O and no logging, and is 100% unit testable.

pub mod entities;
pub mod error;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Player, PlayerStatus, Position, Squad};
pub use error::{FormationError, SquadError};
pub use values::{Formation, PlayerId, PositionCounts, Price, Score, TeamId, round_price};
