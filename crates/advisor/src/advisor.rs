//! Advisor
//!
//! Couples a scorer with a list of squad rules. Validation runs every rule
//! and returns all violations as data: one failing rule never stops the
//! others, and no rule can modify the squad.

use log::{debug, warn};
use xi_core::{Player, Score, Squad};
use xi_ports::{PlayerScorer, RuleViolation, SquadRule};

use crate::recommend::{RecommendFilter, Recommendations, recommend};
use crate::scoring::{ScoringWeights, WeightedScorer};

/// Scores players and checks squads against configured rules
pub struct Advisor {
    scorer: Box<dyn PlayerScorer>,
    rules: Vec<Box<dyn SquadRule>>,
}

impl Advisor {
    /// Default weighted scorer and no rules
    pub fn new() -> Self {
        Self {
            scorer: Box::new(WeightedScorer::default()),
            rules: Vec::new(),
        }
    }

    /// Replace the scorer
    pub fn with_scorer(mut self, scorer: impl PlayerScorer + 'static) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    /// Use the weighted scorer with custom weights
    pub fn with_weights(self, weights: ScoringWeights) -> Self {
        self.with_scorer(WeightedScorer::new(weights))
    }

    /// Append a rule
    pub fn with_rule(mut self, rule: impl SquadRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Append already-boxed rules, e.g. from `xi_rules::create_rules`
    pub fn with_rules(mut self, rules: Vec<Box<dyn SquadRule>>) -> Self {
        self.rules.extend(rules);
        self
    }

    pub fn scorer(&self) -> &dyn PlayerScorer {
        self.scorer.as_ref()
    }

    /// Names of the configured rules, in run order
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Score a single player
    pub fn score(&self, player: &Player) -> Score {
        self.scorer.score(player)
    }

    /// Run every rule and collect all violations
    ///
    /// An empty list means the squad is legal.
    pub fn validate_squad(&self, squad: &Squad<'_>) -> Vec<RuleViolation> {
        self.rules
            .iter()
            .filter_map(|rule| match rule.validate(squad) {
                Ok(()) => {
                    debug!("Rule '{}' passed for {}", rule.name(), squad);
                    None
                }
                Err(violation) => {
                    warn!("Rule '{}' failed: {}", rule.name(), violation);
                    Some(violation)
                }
            })
            .collect()
    }

    /// Violation messages for display
    pub fn violation_messages(&self, squad: &Squad<'_>) -> Vec<String> {
        self.validate_squad(squad)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Ranked (player, score) recommendations using this advisor's scorer
    pub fn top_recommendations<'a>(
        &self,
        players: &'a [Player],
        limit: usize,
        filter: &RecommendFilter,
    ) -> Recommendations<'a> {
        recommend(players, self.scorer(), filter, limit)
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new()
    }
}
