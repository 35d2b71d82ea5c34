//! Player-name search with input validation

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;
use xi_core::Player;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Invalid search text '{0}': use letters, digits, spaces, apostrophes, hyphens or dots")]
    InvalidText(String),
}

/// Returns true for non-empty text made only of letters, digits, spaces,
/// apostrophes, hyphens and dots (after trimming)
pub fn validate_search_text(text: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9 .'\-]+$").expect("valid regex"));

    let text = text.trim();
    !text.is_empty() && pattern.is_match(text)
}

/// Players whose name contains the text, case-insensitive, in collection order
pub fn search_players<'a>(players: &'a [Player], text: &str) -> Result<Vec<&'a Player>, SearchError> {
    if !validate_search_text(text) {
        return Err(SearchError::InvalidText(text.to_string()));
    }

    let needle = text.trim().to_lowercase();
    Ok(players
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use xi_core::Position;

    #[test]
    fn test_validate_search_text() {
        assert!(validate_search_text("Saka"));
        assert!(validate_search_text("  O'Reilly "));
        assert!(validate_search_text("Alexander-Arnold"));
        assert!(validate_search_text("J. Timber 2"));

        assert!(!validate_search_text(""));
        assert!(!validate_search_text("   "));
        assert!(!validate_search_text("Saka; DROP"));
        assert!(!validate_search_text("<script>"));
    }

    #[test]
    fn test_search_players() {
        let players = vec![
            Player::new(1, "Saka", 1, Position::Midfielder, dec!(10.0)),
            Player::new(2, "Salah", 12, Position::Midfielder, dec!(13.0)),
            Player::new(3, "Isak", 15, Position::Forward, dec!(9.0)),
        ];

        let hits: Vec<_> = search_players(&players, "sa")
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(hits, vec![1, 2, 3]);

        let hits = search_players(&players, " SAL ").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);

        assert_eq!(
            search_players(&players, "sa$"),
            Err(SearchError::InvalidText("sa$".to_string()))
        );
    }
}
