//! XI Ports
//!
//! Port definitions (traits) for the XI squad advisor.
//! These define the seams between the squad builder and its pluggable
//! scoring and validation policies.

mod error;
mod rule;
mod scoring;

pub use error::{RuleResult, RuleViolation};
pub use rule::SquadRule;
pub use scoring::PlayerScorer;
