//! XI Squad Advisor
//!
//! The advisor turns a snapshot of player records into a recommended
//! starting XI:
//! - **Scoring**: Weighted linear desirability score per player
//! - **Recommendations**: Filtered, ranked (player, score) sequences
//! - **Rule Validation**: Runs every configured rule, collects all violations
//! - **Selection**: Greedy, position-capped XI builder
//!
//! ## Architecture
//!
//! ```text
//! Players ──► ┌────────────────────────────────────────┐
//!             │            Squad Selector              │
//!             │  ┌─────────────────────────────────┐   │
//!             │  │   Position Caps                 │   │
//!             │  │   - 10/35/35/20 budget split    │   │
//!             │  │   - divided per formation slot  │   │
//!             │  └───────────────┬─────────────────┘   │
//!             │                  │ per-slot caps       │
//!             │  ┌───────────────▼─────────────────┐   │
//!             │  │   Candidate Ranking             │   │
//!             │  │   - available, under cap        │   │
//!             │  │   - score desc, stable          │   │
//!             │  └───────────────┬─────────────────┘   │
//!             │                  │ top N per position  │
//!             │  ┌───────────────▼─────────────────┐   │
//!             │  │   Squad (budget-checked insert) │   │
//!             │  └───────────────┬─────────────────┘   │
//!             │                  │                     │
//!             │  ┌───────────────▼─────────────────┐   │
//!             │  │   Formation + configured rules  │   │
//!             │  └───────────────┬─────────────────┘   │
//!             └──────────────────┼─────────────────────┘
//!                                ▼
//!                          Starting XI
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use xi_advisor::{build_starting_xi, Advisor};
//! use xi_rules::{BudgetRule, MaxFromTeamRule};
//!
//! let advisor = Advisor::new()
//!     .with_rule(BudgetRule::new())
//!     .with_rule(MaxFromTeamRule::new(3));
//!
//! let xi = build_starting_xi(&players, &advisor, "4-4-2", dec!(100.0))?;
//! for player in &xi {
//!     println!("{player} score={}", advisor.score(player));
//! }
//! ```

pub mod advisor;
pub mod error;
pub mod recommend;
pub mod scoring;
pub mod selector;

// Re-export main types
pub use advisor::Advisor;
pub use error::{BuildError, Result};
pub use recommend::{Recommendation, RecommendFilter, Recommendations, rank_players, recommend};
pub use scoring::{ScoringWeights, WeightedScorer};
pub use selector::{BudgetSplit, PositionCaps, SquadSelector, build_starting_xi};
