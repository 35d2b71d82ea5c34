use thiserror::Error;
use xi_core::{PositionCounts, Price, TeamId, round_price};

/// A broken squad-legality rule
///
/// `Display` renders the human-readable message shown to users.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("Budget exceeded: {:.1} > {:.1}", tenths(.cost), tenths(.budget))]
    BudgetExceeded { cost: Price, budget: Price },

    #[error("Formation mismatch. Expected {expected} but got {actual}")]
    FormationMismatch {
        expected: PositionCounts,
        actual: PositionCounts,
    },

    #[error("Too many players from team {team_id}: {count} > {max}")]
    TooManyFromTeam {
        team_id: TeamId,
        count: usize,
        max: usize,
    },
}

pub type RuleResult<T> = std::result::Result<T, RuleViolation>;

fn tenths(value: &Price) -> Price {
    round_price(*value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use xi_core::Formation;

    #[test]
    fn test_budget_message() {
        let violation = RuleViolation::BudgetExceeded {
            cost: dec!(101.5),
            budget: dec!(100),
        };
        assert_eq!(violation.to_string(), "Budget exceeded: 101.5 > 100.0");
    }

    #[test]
    fn test_budget_message_rounds_to_tenths() {
        let violation = RuleViolation::BudgetExceeded {
            cost: dec!(100.06),
            budget: dec!(100),
        };
        assert_eq!(violation.to_string(), "Budget exceeded: 100.1 > 100.0");

        let violation = RuleViolation::BudgetExceeded {
            cost: dec!(9.96),
            budget: dec!(9.94),
        };
        assert_eq!(violation.to_string(), "Budget exceeded: 10.0 > 9.9");
    }

    #[test]
    fn test_formation_message_names_both_shapes() {
        let violation = RuleViolation::FormationMismatch {
            expected: Formation::new(3, 5, 2).required(),
            actual: Formation::new(4, 4, 2).required(),
        };
        assert_eq!(
            violation.to_string(),
            "Formation mismatch. Expected GK=1 DEF=3 MID=5 FWD=2 but got GK=1 DEF=4 MID=4 FWD=2"
        );
    }

    #[test]
    fn test_team_message() {
        let violation = RuleViolation::TooManyFromTeam {
            team_id: 7,
            count: 4,
            max: 3,
        };
        assert_eq!(violation.to_string(), "Too many players from team 7: 4 > 3");
    }
}
