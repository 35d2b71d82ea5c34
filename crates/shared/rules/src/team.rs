use log::debug;
use std::collections::BTreeMap;
use xi_core::{Squad, TeamId};
use xi_ports::{RuleResult, RuleViolation, SquadRule};

/// No team may supply more than `max_per_team` players
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxFromTeamRule {
    max_per_team: usize,
}

impl MaxFromTeamRule {
    pub const DEFAULT_MAX_PER_TEAM: usize = 3;

    pub fn new(max_per_team: usize) -> Self {
        Self { max_per_team }
    }

    pub fn max_per_team(&self) -> usize {
        self.max_per_team
    }
}

impl Default for MaxFromTeamRule {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_PER_TEAM)
    }
}

impl SquadRule for MaxFromTeamRule {
    fn name(&self) -> &str {
        "Max From Team"
    }

    /// Reports the lowest offending team id
    fn validate(&self, squad: &Squad<'_>) -> RuleResult<()> {
        let mut team_counts: BTreeMap<TeamId, usize> = BTreeMap::new();
        for player in squad {
            *team_counts.entry(player.team_id).or_insert(0) += 1;
        }

        debug!("Team counts: {:?} (max {})", team_counts, self.max_per_team);

        match team_counts
            .into_iter()
            .find(|&(_, count)| count > self.max_per_team)
        {
            Some((team_id, count)) => Err(RuleViolation::TooManyFromTeam {
                team_id,
                count,
                max: self.max_per_team,
            }),
            None => Ok(()),
        }
    }
}
