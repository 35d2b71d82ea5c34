use log::debug;
use xi_core::{Price, Squad};
use xi_ports::{RuleResult, RuleViolation, SquadRule};

/// Total squad cost must not exceed the budget
///
/// By default the ceiling is the squad's own budget, which re-checks the
/// invariant `Squad` already enforces on insertion. A tighter ceiling can be
/// set to keep money in reserve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BudgetRule {
    ceiling: Option<Price>,
}

impl BudgetRule {
    /// Check against the squad's own budget
    pub fn new() -> Self {
        Self { ceiling: None }
    }

    /// Check against a fixed ceiling instead of the squad budget
    pub fn with_ceiling(ceiling: Price) -> Self {
        Self {
            ceiling: Some(ceiling),
        }
    }

    fn ceiling_for(&self, squad: &Squad<'_>) -> Price {
        self.ceiling.unwrap_or_else(|| squad.budget())
    }
}

impl SquadRule for BudgetRule {
    fn name(&self) -> &str {
        "Budget"
    }

    fn validate(&self, squad: &Squad<'_>) -> RuleResult<()> {
        let cost = squad.total_cost();
        let budget = self.ceiling_for(squad);

        debug!("Budget check: cost={}, ceiling={}", cost, budget);

        if cost > budget {
            return Err(RuleViolation::BudgetExceeded { cost, budget });
        }
        Ok(())
    }
}
