//! Player Scoring
//!
//! Linear desirability score used to rank candidates:
//!
//! ```text
//! score = w_points  * total_points
//!       + w_form    * form
//!       + w_ppg     * points_per_game
//!       + w_minutes * minutes
//!       + w_value   * value_ratio
//! ```
//!
//! where `value_ratio = total_points / price`, or zero for free players.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use xi_core::{Player, Score};
use xi_ports::PlayerScorer;

/// Weights of the linear score components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Weight on season total points
    pub points: Decimal,
    /// Weight on recent form
    pub form: Decimal,
    /// Weight on points per game
    pub ppg: Decimal,
    /// Weight on minutes played
    pub minutes: Decimal,
    /// Weight on points per unit of price
    pub value: Decimal,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            points: dec!(1.0),
            form: dec!(8.0),
            ppg: dec!(6.0),
            minutes: dec!(0.002),
            value: dec!(10.0),
        }
    }
}

impl ScoringWeights {
    /// All weights zero; useful as a base for single-component scoring
    pub fn zero() -> Self {
        Self {
            points: Decimal::ZERO,
            form: Decimal::ZERO,
            ppg: Decimal::ZERO,
            minutes: Decimal::ZERO,
            value: Decimal::ZERO,
        }
    }
}

/// Scores players with a weighted sum of their statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeightedScorer {
    weights: ScoringWeights,
}

impl WeightedScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Points per unit of price; zero when the player is free
    pub fn value_ratio(player: &Player) -> Decimal {
        if player.price > Decimal::ZERO {
            Decimal::from(player.total_points)
                .checked_div(player.price)
                .unwrap_or(Decimal::ZERO)
        } else {
            Decimal::ZERO
        }
    }
}

impl PlayerScorer for WeightedScorer {
    fn name(&self) -> &str {
        "Weighted Linear"
    }

    fn score(&self, player: &Player) -> Score {
        let w = &self.weights;
        w.points * Decimal::from(player.total_points)
            + w.form * player.form
            + w.ppg * player.points_per_game
            + w.minutes * Decimal::from(player.minutes)
            + w.value * Self::value_ratio(player)
    }
}
