use xi_core::{Player, Score};

/// Port for player desirability scoring
///
/// Implementations must be pure, total and deterministic: the same player
/// always yields the same score and no input makes scoring fail.
pub trait PlayerScorer: Send + Sync {
    /// Score a player; higher is more desirable
    fn score(&self, player: &Player) -> Score;

    /// Get the name of the scoring model
    fn name(&self) -> &str;
}
