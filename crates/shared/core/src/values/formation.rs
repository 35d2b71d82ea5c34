use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::entities::{Player, Position};
use crate::error::FormationError;

/// Number of players per position category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionCounts {
    pub goalkeepers: u32,
    pub defenders: u32,
    pub midfielders: u32,
    pub forwards: u32,
}

impl PositionCounts {
    /// Count the positions of a set of players
    pub fn from_players<'a, I>(players: I) -> Self
    where
        I: IntoIterator<Item = &'a Player>,
    {
        let mut counts = Self::default();
        for player in players {
            *counts.slot_mut(player.position) += 1;
        }
        counts
    }

    /// Count for a single position
    pub fn get(&self, position: Position) -> u32 {
        match position {
            Position::Goalkeeper => self.goalkeepers,
            Position::Defender => self.defenders,
            Position::Midfielder => self.midfielders,
            Position::Forward => self.forwards,
        }
    }

    /// Total number of players across all positions
    pub fn total(&self) -> u64 {
        [self.goalkeepers, self.defenders, self.midfielders, self.forwards]
            .into_iter()
            .map(u64::from)
            .sum()
    }

    fn slot_mut(&mut self, position: Position) -> &mut u32 {
        match position {
            Position::Goalkeeper => &mut self.goalkeepers,
            Position::Defender => &mut self.defenders,
            Position::Midfielder => &mut self.midfielders,
            Position::Forward => &mut self.forwards,
        }
    }
}

impl fmt::Display for PositionCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GK={} DEF={} MID={} FWD={}",
            self.goalkeepers, self.defenders, self.midfielders, self.forwards
        )
    }
}

/// A "D-M-F" formation
///
/// Declares how many defenders, midfielders and forwards line up.
/// The goalkeeper count is always exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Formation {
    pub defenders: u32,
    pub midfielders: u32,
    pub forwards: u32,
}

impl Formation {
    /// Goalkeepers required by every formation
    pub const GOALKEEPERS: u32 = 1;

    /// Formations commonly offered to users
    pub const PRESETS: [&'static str; 5] = ["3-4-3", "3-5-2", "4-4-2", "4-3-3", "5-3-2"];

    pub fn new(defenders: u32, midfielders: u32, forwards: u32) -> Self {
        Self {
            defenders,
            midfielders,
            forwards,
        }
    }

    /// Parse a "D-M-F" string, e.g. "4-4-2"
    pub fn parse(formation: &str) -> Result<Self, FormationError> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let pattern = PATTERN
            .get_or_init(|| Regex::new(r"^([0-9]+)-([0-9]+)-([0-9]+)$").expect("valid regex"));

        let caps = pattern
            .captures(formation)
            .ok_or_else(|| FormationError::InvalidFormat(formation.to_string()))?;

        let count = |idx: usize| -> Result<u32, FormationError> {
            caps[idx]
                .parse::<u32>()
                .map_err(|_| FormationError::CountOutOfRange(formation.to_string()))
        };

        Ok(Self::new(count(1)?, count(2)?, count(3)?))
    }

    /// Number of slots the formation declares for a position
    pub fn slots(&self, position: Position) -> u32 {
        self.required().get(position)
    }

    /// Required players per position, goalkeeper included
    pub fn required(&self) -> PositionCounts {
        PositionCounts {
            goalkeepers: Self::GOALKEEPERS,
            defenders: self.defenders,
            midfielders: self.midfielders,
            forwards: self.forwards,
        }
    }

    /// Total squad size the formation asks for (11 for a standard XI)
    pub fn squad_size(&self) -> u64 {
        self.required().total()
    }
}

impl Default for Formation {
    fn default() -> Self {
        Self::new(4, 4, 2)
    }
}

impl FromStr for Formation {
    type Err = FormationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Formation {
    type Error = FormationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Formation> for String {
    fn from(formation: Formation) -> Self {
        formation.to_string()
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.defenders, self.midfielders, self.forwards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standard_formation() {
        let formation = Formation::parse("4-4-2").unwrap();
        assert_eq!(formation, Formation::new(4, 4, 2));
        assert_eq!(formation.squad_size(), 11);
        assert_eq!(formation.slots(Position::Goalkeeper), 1);
        assert_eq!(formation.slots(Position::Forward), 2);
    }

    #[test]
    fn test_parse_multi_digit_counts() {
        let formation: Formation = "10-0-12".parse().unwrap();
        assert_eq!(formation, Formation::new(10, 0, 12));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "4-4", "4-4-2-1", "a-b-c", " 4-4-2", "4-4-2 ", "4--2", "-4-4-2", "4_4_2"] {
            assert_eq!(
                Formation::parse(bad),
                Err(FormationError::InvalidFormat(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_overflowing_count() {
        let input = "99999999999-4-2";
        assert_eq!(
            Formation::parse(input),
            Err(FormationError::CountOutOfRange(input.to_string()))
        );
    }

    #[test]
    fn test_squad_size_of_largest_counts() {
        let formation = Formation::parse("4294967295-4294967295-2").unwrap();
        assert_eq!(formation.squad_size(), 2 * u64::from(u32::MAX) + 3);
    }

    #[test]
    fn test_presets_parse() {
        for preset in Formation::PRESETS {
            let formation = Formation::parse(preset).unwrap();
            assert_eq!(formation.to_string(), preset);
            assert_eq!(formation.squad_size(), 11);
        }
    }

    #[test]
    fn test_position_counts_display() {
        let counts = Formation::new(3, 5, 2).required();
        assert_eq!(counts.to_string(), "GK=1 DEF=3 MID=5 FWD=2");
    }
}
