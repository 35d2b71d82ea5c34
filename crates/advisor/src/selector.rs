//! Greedy Starting-XI Selector
//!
//! One pass, no backtracking:
//!
//! 1. Parse the formation (goalkeeper count is always 1)
//! 2. Split the budget into per-slot price caps per position
//! 3. Keep available candidates priced at or under their position cap
//! 4. Rank by score (stable) and take the top N per position
//! 5. Insert into a fresh squad (budget-checked on every insert)
//! 6. Validate against the formation and every configured rule
//!
//! The 10/35/35/20 split is a fixed heuristic, not an optimization. Per-slot
//! caps do not bound cumulative spend, so squad insertion is the real budget
//! backstop: an overflow aborts the build instead of trying cheaper players.

use log::{debug, info, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use xi_core::{Formation, Player, Position, Price, Squad};
use xi_ports::SquadRule;
use xi_rules::FormationRule;

use crate::advisor::Advisor;
use crate::error::{Error, Result};
use crate::recommend::rank_players;

/// Share of the total budget reserved for each position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetSplit {
    pub goalkeeper: Decimal,
    pub defenders: Decimal,
    pub midfielders: Decimal,
    pub forwards: Decimal,
}

impl BudgetSplit {
    /// Share of the budget for a position
    pub fn share(&self, position: Position) -> Decimal {
        match position {
            Position::Goalkeeper => self.goalkeeper,
            Position::Defender => self.defenders,
            Position::Midfielder => self.midfielders,
            Position::Forward => self.forwards,
        }
    }
}

impl Default for BudgetSplit {
    fn default() -> Self {
        Self {
            goalkeeper: dec!(0.10),
            defenders: dec!(0.35),
            midfielders: dec!(0.35),
            forwards: dec!(0.20),
        }
    }
}

/// Maximum price per slot for each position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionCaps {
    pub goalkeeper: Price,
    pub defender: Price,
    pub midfielder: Price,
    pub forward: Price,
}

impl PositionCaps {
    /// Divide each position's budget share evenly among its slots
    ///
    /// A position with no slots gets a zero cap.
    pub fn new(budget: Price, formation: &Formation, split: &BudgetSplit) -> Self {
        let cap = |position: Position| -> Price {
            let slots = formation.slots(position);
            if slots == 0 {
                return Decimal::ZERO;
            }
            budget * split.share(position) / Decimal::from(slots)
        };

        Self {
            goalkeeper: cap(Position::Goalkeeper),
            defender: cap(Position::Defender),
            midfielder: cap(Position::Midfielder),
            forward: cap(Position::Forward),
        }
    }

    pub fn get(&self, position: Position) -> Price {
        match position {
            Position::Goalkeeper => self.goalkeeper,
            Position::Defender => self.defender,
            Position::Midfielder => self.midfielder,
            Position::Forward => self.forward,
        }
    }
}

/// Builds a starting XI from a player pool
pub struct SquadSelector<'a> {
    advisor: &'a Advisor,
    split: BudgetSplit,
}

impl<'a> SquadSelector<'a> {
    pub fn new(advisor: &'a Advisor) -> Self {
        Self {
            advisor,
            split: BudgetSplit::default(),
        }
    }

    /// Override the budget split
    pub fn with_split(mut self, split: BudgetSplit) -> Self {
        self.split = split;
        self
    }

    /// Highest-scoring eligible players for one position, best first
    pub fn pick<'p>(
        &self,
        players: &'p [Player],
        position: Position,
        cap: Price,
        slots: usize,
    ) -> Vec<&'p Player> {
        let eligible = players
            .iter()
            .filter(|p| p.position == position && p.is_available() && p.price <= cap);
        let ranked = rank_players(eligible, self.advisor.scorer());

        debug!(
            "{}: cap={}, {} eligible, {} slots",
            position.code(),
            cap,
            ranked.len(),
            slots
        );
        if ranked.len() < slots {
            warn!(
                "Only {} eligible {} under cap {} for {} slots",
                ranked.len(),
                position.code(),
                cap,
                slots
            );
        }

        ranked.into_iter().take(slots).map(|r| r.player).collect()
    }

    /// Build and validate a squad
    pub fn build<'p>(
        &self,
        players: &'p [Player],
        formation: Formation,
        budget: Price,
    ) -> Result<Squad<'p>> {
        let caps = PositionCaps::new(budget, &formation, &self.split);
        let mut squad = Squad::new(budget);

        for position in Position::ALL {
            let slots = formation.slots(position) as usize;
            for player in self.pick(players, position, caps.get(position), slots) {
                squad.add_player(player)?;
            }
        }

        let mut violations = Vec::new();
        if let Err(violation) = FormationRule::from_formation(formation).validate(&squad) {
            violations.push(violation);
        }
        // A configured formation rule repeats the mismatch found above
        for violation in self.advisor.validate_squad(&squad) {
            if !violations.contains(&violation) {
                violations.push(violation);
            }
        }

        if !violations.is_empty() {
            warn!("{} for {} failed {} rule(s)", squad, formation, violations.len());
            return Err(Error::RuleViolations(violations));
        }

        info!("Built {} for formation {}", squad, formation);
        Ok(squad)
    }
}

/// Build a starting XI for a "D-M-F" formation within a budget
pub fn build_starting_xi<'p>(
    players: &'p [Player],
    advisor: &Advisor,
    formation: &str,
    budget: Price,
) -> Result<Squad<'p>> {
    let formation = Formation::parse(formation)?;
    SquadSelector::new(advisor).build(players, formation, budget)
}
