use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use super::player::Player;
use crate::error::SquadError;
use crate::values::{PlayerId, PositionCounts, Price, round_price};

/// A budget-capped selection of players
///
/// Holds shared references to players owned elsewhere, in insertion order.
/// The cumulative price of the held players never exceeds the budget.
#[derive(Debug, Clone, Serialize)]
pub struct Squad<'a> {
    budget: Price,
    players: Vec<&'a Player>,
}

impl<'a> Squad<'a> {
    /// Create an empty squad with a budget ceiling
    pub fn new(budget: Price) -> Self {
        Self {
            budget,
            players: Vec::new(),
        }
    }

    /// Add a player if the budget allows
    ///
    /// On failure the squad is left untouched.
    pub fn add_player(&mut self, player: &'a Player) -> Result<(), SquadError> {
        let new_total = self.total_cost() + player.price;
        if new_total > self.budget {
            return Err(SquadError::BudgetExceeded {
                player_id: player.id,
                price: player.price,
                new_total,
                budget: self.budget,
            });
        }
        self.players.push(player);
        Ok(())
    }

    /// Remove every player with the given id, returning how many were removed
    pub fn remove_player(&mut self, player_id: PlayerId) -> usize {
        let before = self.players.len();
        self.players.retain(|p| p.id != player_id);
        before - self.players.len()
    }

    /// Sum of held player prices
    pub fn total_cost(&self) -> Price {
        self.players.iter().map(|p| p.price).sum()
    }

    /// Budget left to spend
    pub fn remaining_budget(&self) -> Price {
        self.budget - self.total_cost()
    }

    pub fn budget(&self) -> Price {
        self.budget
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Returns true if a player with this id is held
    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    /// Held players in insertion order
    pub fn players(&self) -> &[&'a Player] {
        &self.players
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Player> + '_ {
        self.players.iter().copied()
    }

    /// Players per position
    pub fn position_counts(&self) -> PositionCounts {
        PositionCounts::from_players(self.iter())
    }
}

impl<'s, 'a> IntoIterator for &'s Squad<'a> {
    type Item = &'a Player;
    type IntoIter = std::iter::Copied<std::slice::Iter<'s, &'a Player>>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter().copied()
    }
}

impl fmt::Display for Squad<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Squad(players={}, cost={:.1}/{:.1})",
            self.players.len(),
            round_price(self.total_cost()),
            round_price(self.budget)
        )
    }
}

impl Default for Squad<'_> {
    fn default() -> Self {
        Self::new(Decimal::ONE_HUNDRED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Position;
    use rust_decimal_macros::dec;

    fn player(id: PlayerId, position: Position, price: Price) -> Player {
        Player::new(id, format!("Player {id}"), 1, position, price)
    }

    #[test]
    fn test_add_within_budget() {
        let gk = player(1, Position::Goalkeeper, dec!(4.5));
        let def = player(2, Position::Defender, dec!(5.0));

        let mut squad = Squad::new(dec!(10.0));
        squad.add_player(&gk).unwrap();
        squad.add_player(&def).unwrap();

        assert_eq!(squad.len(), 2);
        assert_eq!(squad.total_cost(), dec!(9.5));
        assert_eq!(squad.remaining_budget(), dec!(0.5));
    }

    #[test]
    fn test_add_exactly_at_budget() {
        let a = player(1, Position::Forward, dec!(6.0));
        let b = player(2, Position::Forward, dec!(4.0));

        let mut squad = Squad::new(dec!(10.0));
        squad.add_player(&a).unwrap();
        squad.add_player(&b).unwrap();

        assert_eq!(squad.total_cost(), dec!(10.0));
    }

    #[test]
    fn test_add_over_budget_leaves_squad_unchanged() {
        let a = player(1, Position::Midfielder, dec!(8.0));
        let b = player(2, Position::Midfielder, dec!(2.5));

        let mut squad = Squad::new(dec!(10.0));
        squad.add_player(&a).unwrap();

        let err = squad.add_player(&b).unwrap_err();
        assert_eq!(
            err,
            SquadError::BudgetExceeded {
                player_id: 2,
                price: dec!(2.5),
                new_total: dec!(10.5),
                budget: dec!(10.0),
            }
        );
        assert_eq!(squad.len(), 1);
        assert_eq!(squad.total_cost(), dec!(8.0));
        assert!(!squad.contains(2));
    }

    #[test]
    fn test_remove_by_id() {
        let a = player(1, Position::Defender, dec!(4.0));
        let b = player(2, Position::Defender, dec!(4.5));

        let mut squad = Squad::new(dec!(100));
        squad.add_player(&a).unwrap();
        squad.add_player(&b).unwrap();

        assert_eq!(squad.remove_player(1), 1);
        assert_eq!(squad.remove_player(1), 0);
        assert_eq!(squad.len(), 1);
        assert_eq!(squad.total_cost(), dec!(4.5));
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let players: Vec<Player> = (1..=4)
            .map(|id| player(id, Position::Midfielder, dec!(5.0)))
            .collect();

        let mut squad = Squad::new(dec!(100));
        for p in players.iter().rev() {
            squad.add_player(p).unwrap();
        }

        let ids: Vec<_> = (&squad).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
        assert_eq!(squad.position_counts().midfielders, 4);
    }

    #[test]
    fn test_display() {
        let gk = player(1, Position::Goalkeeper, dec!(4.5));
        let mut squad = Squad::new(dec!(100));
        squad.add_player(&gk).unwrap();

        assert_eq!(squad.to_string(), "Squad(players=1, cost=4.5/100.0)");
    }

    #[test]
    fn test_display_rounds_cost() {
        let gk = player(1, Position::Goalkeeper, dec!(9.96));
        let mut squad = Squad::new(dec!(99.95));
        squad.add_player(&gk).unwrap();

        assert_eq!(squad.to_string(), "Squad(players=1, cost=10.0/100.0)");
    }
}
