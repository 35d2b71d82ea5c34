//! XI Squad Rules
//!
//! Implementations of squad-legality rules for the XI squad advisor.

mod budget;
mod error;
mod formation;
mod team;

pub use budget::BudgetRule;
pub use error::{RuleError, RuleErrorResult};
pub use formation::FormationRule;
pub use team::MaxFromTeamRule;

// Re-export the trait from ports for convenience
pub use xi_ports::{RuleResult, RuleViolation, SquadRule};

use xi_core::Formation;

/// Parameters shared by rules built from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleParams {
    /// Formation checked by the formation rule
    pub formation: Formation,
    /// Cap checked by the per-team rule
    pub max_per_team: usize,
}

impl Default for RuleParams {
    fn default() -> Self {
        Self {
            formation: Formation::default(),
            max_per_team: MaxFromTeamRule::DEFAULT_MAX_PER_TEAM,
        }
    }
}

/// Factory function to create rules by name
pub fn create_rule(rule_name: &str, params: &RuleParams) -> RuleErrorResult<Box<dyn SquadRule>> {
    match rule_name.to_lowercase().replace('-', "_").as_str() {
        "budget" => Ok(Box::new(BudgetRule::new())),
        "formation" => Ok(Box::new(FormationRule::from_formation(params.formation))),
        "max_per_team" | "max_from_team" | "team" => {
            Ok(Box::new(MaxFromTeamRule::new(params.max_per_team)))
        }
        _ => Err(RuleError::UnknownRule(rule_name.to_string())),
    }
}

/// Build every named rule, failing on the first unknown name
pub fn create_rules<S: AsRef<str>>(
    rule_names: &[S],
    params: &RuleParams,
) -> RuleErrorResult<Vec<Box<dyn SquadRule>>> {
    rule_names
        .iter()
        .map(|name| create_rule(name.as_ref(), params))
        .collect()
}
