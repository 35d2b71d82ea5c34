use xi_core::Squad;

use crate::error::RuleResult;

/// Port for squad-legality rules
///
/// Rules are siblings behind one narrow contract:
/// - Budget ceiling
/// - Formation shape
/// - Per-team cap
/// - etc.
///
/// A rule only reads the squad; it never mutates it.
pub trait SquadRule: Send + Sync {
    /// Accept the squad, or report the specific violation
    fn validate(&self, squad: &Squad<'_>) -> RuleResult<()>;

    /// Get the name of the rule
    fn name(&self) -> &str;
}
