use serde::{Deserialize, Serialize};

/// Player availability status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// Fit and selectable ("a")
    Available,
    /// Doubtful for the next fixture ("d")
    Doubtful,
    /// Injured ("i")
    Injured,
    /// Suspended ("s")
    Suspended,
    /// Not available, e.g. on loan ("n")
    NotAvailable,
    /// Left the league or otherwise unavailable ("u")
    Unavailable,
}

impl PlayerStatus {
    /// Parse an upstream status code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "a" => Some(PlayerStatus::Available),
            "d" => Some(PlayerStatus::Doubtful),
            "i" => Some(PlayerStatus::Injured),
            "s" => Some(PlayerStatus::Suspended),
            "n" => Some(PlayerStatus::NotAvailable),
            "u" => Some(PlayerStatus::Unavailable),
            _ => None,
        }
    }

    /// Upstream status code
    pub fn code(&self) -> &'static str {
        match self {
            PlayerStatus::Available => "a",
            PlayerStatus::Doubtful => "d",
            PlayerStatus::Injured => "i",
            PlayerStatus::Suspended => "s",
            PlayerStatus::NotAvailable => "n",
            PlayerStatus::Unavailable => "u",
        }
    }

    /// Returns true if the player can be picked
    pub fn is_available(&self) -> bool {
        matches!(self, PlayerStatus::Available)
    }
}
