use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::position::Position;
use super::status::PlayerStatus;
use crate::values::{PlayerId, Price, TeamId};

/// A fantasy player record
///
/// Built once from upstream data and never mutated afterwards.
/// Equality and hashing use the id alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Unique upstream identifier
    pub id: PlayerId,

    /// Display name
    pub name: String,

    /// Club the player belongs to
    pub team_id: TeamId,

    /// Position category
    pub position: Position,

    /// Current price (millions)
    pub price: Price,

    /// Points accumulated this season
    pub total_points: i32,

    /// Recent performance metric
    pub form: Decimal,

    /// Minutes played this season
    pub minutes: u32,

    /// Average points per game played
    pub points_per_game: Decimal,

    /// Percentage of managers who selected the player
    pub selected_by_percent: Decimal,

    /// Availability
    pub status: PlayerStatus,
}

impl Player {
    /// Create an available player with zeroed statistics
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        team_id: TeamId,
        position: Position,
        price: Price,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            team_id,
            position,
            price,
            total_points: 0,
            form: Decimal::ZERO,
            minutes: 0,
            points_per_game: Decimal::ZERO,
            selected_by_percent: Decimal::ZERO,
            status: PlayerStatus::Available,
        }
    }

    /// Set season statistics
    pub fn with_stats(
        mut self,
        total_points: i32,
        form: Decimal,
        minutes: u32,
        points_per_game: Decimal,
    ) -> Self {
        self.total_points = total_points;
        self.form = form;
        self.minutes = minutes;
        self.points_per_game = points_per_game;
        self
    }

    /// Set selection popularity
    pub fn with_selected_by(mut self, selected_by_percent: Decimal) -> Self {
        self.selected_by_percent = selected_by_percent;
        self
    }

    /// Set availability status
    pub fn with_status(mut self, status: PlayerStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns true if the player can be picked
    pub fn is_available(&self) -> bool {
        self.status.is_available()
    }

    /// Order two players by total points, ascending
    ///
    /// Kept out of `Ord` so ordering does not disagree with id-based equality.
    pub fn cmp_by_points(a: &Player, b: &Player) -> Ordering {
        a.total_points.cmp(&b.total_points)
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - £{}m", self.name, self.position, self.price)
    }
}
