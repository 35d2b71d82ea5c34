use log::debug;
use xi_core::{Formation, FormationError, Squad};
use xi_ports::{RuleResult, RuleViolation, SquadRule};

/// Squad must match a "D-M-F" formation exactly, plus one goalkeeper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormationRule {
    formation: Formation,
}

impl FormationRule {
    /// Create from a formation string such as "3-5-2"
    ///
    /// Malformed strings fail here, never at validation time.
    pub fn new(formation: &str) -> Result<Self, FormationError> {
        Ok(Self::from_formation(Formation::parse(formation)?))
    }

    pub fn from_formation(formation: Formation) -> Self {
        Self { formation }
    }

    pub fn formation(&self) -> Formation {
        self.formation
    }
}

impl SquadRule for FormationRule {
    fn name(&self) -> &str {
        "Formation"
    }

    fn validate(&self, squad: &Squad<'_>) -> RuleResult<()> {
        let expected = self.formation.required();
        let actual = squad.position_counts();

        debug!("Formation check {}: expected {}, got {}", self.formation, expected, actual);

        if expected != actual {
            return Err(RuleViolation::FormationMismatch { expected, actual });
        }
        Ok(())
    }
}
