//! Recommendations
//!
//! Filters a player collection and ranks the survivors by score.
//! Filters are conjunctive; an absent filter imposes no constraint.
//! Ranking is a stable sort, so equal scores keep collection order.

use serde::{Deserialize, Serialize};
use xi_core::{Player, Position, Price, Score, TeamId};
use xi_ports::PlayerScorer;

/// Optional narrowing criteria for recommendations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendFilter {
    /// Only this position
    pub position: Option<Position>,
    /// Price at most this
    pub max_price: Option<Price>,
    /// Minutes played at least this
    pub min_minutes: Option<u32>,
    /// Only this team
    pub team_id: Option<TeamId>,
}

impl RecommendFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_max_price(mut self, max_price: Price) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn with_min_minutes(mut self, min_minutes: u32) -> Self {
        self.min_minutes = Some(min_minutes);
        self
    }

    pub fn with_team(mut self, team_id: TeamId) -> Self {
        self.team_id = Some(team_id);
        self
    }

    /// Returns true if the player passes every present filter
    pub fn matches(&self, player: &Player) -> bool {
        self.position.is_none_or(|p| player.position == p)
            && self.max_price.is_none_or(|max| player.price <= max)
            && self.min_minutes.is_none_or(|min| player.minutes >= min)
            && self.team_id.is_none_or(|team| player.team_id == team)
    }
}

/// A player paired with its score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation<'a> {
    pub player: &'a Player,
    pub score: Score,
}

/// Score players and sort by score descending
///
/// The sort is stable: equal scores keep their input order.
pub fn rank_players<'a, I>(players: I, scorer: &dyn PlayerScorer) -> Vec<Recommendation<'a>>
where
    I: IntoIterator<Item = &'a Player>,
{
    let mut ranked: Vec<Recommendation<'a>> = players
        .into_iter()
        .map(|player| Recommendation {
            player,
            score: scorer.score(player),
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Top-ranked players for a filter, best first
///
/// Restartable: iterate it as many times as needed, it never recomputes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recommendations<'a> {
    ranked: Vec<Recommendation<'a>>,
}

impl<'a> Recommendations<'a> {
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recommendation<'a>> {
        self.ranked.iter()
    }

    /// The recommended players without their scores
    pub fn players(&self) -> impl Iterator<Item = &'a Player> + '_ {
        self.ranked.iter().map(|r| r.player)
    }

    pub fn as_slice(&self) -> &[Recommendation<'a>] {
        &self.ranked
    }
}

impl<'s, 'a> IntoIterator for &'s Recommendations<'a> {
    type Item = &'s Recommendation<'a>;
    type IntoIter = std::slice::Iter<'s, Recommendation<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranked.iter()
    }
}

impl<'a> IntoIterator for Recommendations<'a> {
    type Item = Recommendation<'a>;
    type IntoIter = std::vec::IntoIter<Recommendation<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranked.into_iter()
    }
}

/// Filter, rank and cap a player collection
///
/// The input collection is never modified.
pub fn recommend<'a>(
    players: &'a [Player],
    scorer: &dyn PlayerScorer,
    filter: &RecommendFilter,
    limit: usize,
) -> Recommendations<'a> {
    let mut ranked = rank_players(players.iter().filter(|p| filter.matches(p)), scorer);
    ranked.truncate(limit);
    Recommendations { ranked }
}
