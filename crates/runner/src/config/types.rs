use chrono::Duration;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use xi_advisor::{Advisor, ScoringWeights};
use xi_core::{Formation, Price};
use xi_rules::{MaxFromTeamRule, RuleParams, create_rules};

use super::loader::ConfigError;

/// Run configuration for the `xi` command line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// "D-M-F" formation for the XI
    pub formation: Formation,
    /// Total budget (millions)
    pub budget: Price,
    /// Cap used by the per-team rule
    pub max_per_team: usize,
    /// Rules run against every built squad, by name
    pub rules: Vec<String>,
    /// Scoring weights
    pub weights: ScoringWeights,
    /// Cached bootstrap snapshot
    pub snapshot_path: PathBuf,
    /// Snapshot older than this is treated as stale
    pub snapshot_max_age_secs: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            formation: Formation::default(),
            budget: dec!(100.0),
            max_per_team: MaxFromTeamRule::DEFAULT_MAX_PER_TEAM,
            rules: vec!["budget".to_string(), "max_per_team".to_string()],
            weights: ScoringWeights::default(),
            snapshot_path: PathBuf::from("data/cache/bootstrap_static.json"),
            snapshot_max_age_secs: 3600,
        }
    }
}

impl RunnerConfig {
    /// Parameters handed to the rule factory
    pub fn rule_params(&self) -> RuleParams {
        RuleParams {
            formation: self.formation,
            max_per_team: self.max_per_team,
        }
    }

    /// Maximum snapshot age
    pub fn snapshot_max_age(&self) -> Duration {
        Duration::seconds(i64::try_from(self.snapshot_max_age_secs).unwrap_or(i64::MAX))
    }

    /// Build an advisor with the configured scorer weights and rules
    pub fn build_advisor(&self) -> Result<Advisor, ConfigError> {
        let rules = create_rules(self.rules.as_slice(), &self.rule_params())?;
        Ok(Advisor::new().with_weights(self.weights).with_rules(rules))
    }
}
