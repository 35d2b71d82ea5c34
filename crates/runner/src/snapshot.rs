//! Bootstrap Snapshot
//!
//! Reads the cached bootstrap JSON written by the league data fetcher and
//! cleans its `elements` into player records. Fetching itself happens
//! elsewhere; this module only reads what is already on disk.

use chrono::{DateTime, Duration, Utc};
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use xi_core::{Player, PlayerId, PlayerStatus, Position, TeamId};

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to read snapshot: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse snapshot: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Invalid {field} '{value}' for player {player_id}")]
    InvalidNumber {
        player_id: PlayerId,
        field: &'static str,
        value: String,
    },
}

/// Raw player record as published upstream
#[derive(Debug, Clone, Deserialize)]
struct RawElement {
    id: PlayerId,
    web_name: String,
    team: TeamId,
    element_type: u8,
    /// Price in tenths of a million
    now_cost: i64,
    total_points: i32,
    #[serde(default)]
    form: Option<String>,
    minutes: u32,
    #[serde(default)]
    points_per_game: Option<String>,
    #[serde(default)]
    selected_by_percent: Option<String>,
    status: String,
}

/// Raw team record as published upstream
#[derive(Debug, Clone, Deserialize)]
struct RawTeam {
    id: TeamId,
    name: String,
    #[serde(default)]
    short_name: String,
}

#[derive(Debug, Clone, Deserialize)]
struct RawBootstrap {
    elements: Vec<RawElement>,
    #[serde(default)]
    teams: Vec<RawTeam>,
}

/// A club, for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub short_name: String,
}

/// Cleaned players and teams from one bootstrap snapshot
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub players: Vec<Player>,
    pub teams: HashMap<TeamId, Team>,
}

impl Snapshot {
    /// Parse a bootstrap JSON document
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let raw: RawBootstrap = serde_json::from_str(json)?;

        let mut players = Vec::with_capacity(raw.elements.len());
        for element in raw.elements {
            if let Some(player) = clean_player_record(element)? {
                players.push(player);
            }
        }

        let teams = raw
            .teams
            .into_iter()
            .map(|t| {
                (
                    t.id,
                    Team {
                        id: t.id,
                        name: t.name,
                        short_name: t.short_name,
                    },
                )
            })
            .collect();

        debug!("Snapshot parsed: {} players", players.len());
        Ok(Self { players, teams })
    }

    /// Load a snapshot file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load a snapshot file only if it exists and is younger than `max_age`
    pub fn load_fresh<P: AsRef<Path>>(path: P, max_age: Duration) -> Result<Option<Self>, SnapshotError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No snapshot at {}", path.display());
            return Ok(None);
        }

        let modified: DateTime<Utc> = std::fs::metadata(path)?.modified()?.into();
        let age = Utc::now() - modified;
        if age > max_age {
            warn!(
                "Snapshot {} is stale ({}s old, max {}s)",
                path.display(),
                age.num_seconds(),
                max_age.num_seconds()
            );
            return Ok(None);
        }

        Self::load(path).map(Some)
    }

    /// Team name for display, falling back to the id
    pub fn team_name(&self, team_id: TeamId) -> String {
        self.teams
            .get(&team_id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| format!("Team {team_id}"))
    }
}

/// Clean one raw record into a player
///
/// Element types outside the four playing positions are skipped.
fn clean_player_record(raw: RawElement) -> Result<Option<Player>, SnapshotError> {
    let Some(position) = Position::from_id(raw.element_type) else {
        debug!(
            "Skipping element {} with non-player type {}",
            raw.id, raw.element_type
        );
        return Ok(None);
    };

    let status = PlayerStatus::from_code(&raw.status).unwrap_or_else(|| {
        warn!(
            "Unknown status '{}' for player {}, treating as unavailable",
            raw.status, raw.id
        );
        PlayerStatus::Unavailable
    });

    let form = parse_metric(raw.id, "form", raw.form.as_deref())?;
    let points_per_game = parse_metric(raw.id, "points_per_game", raw.points_per_game.as_deref())?;
    let selected_by = parse_metric(
        raw.id,
        "selected_by_percent",
        raw.selected_by_percent.as_deref(),
    )?;

    Ok(Some(
        Player::new(raw.id, raw.web_name, raw.team, position, Decimal::new(raw.now_cost, 1))
            .with_stats(raw.total_points, form, raw.minutes, points_per_game)
            .with_selected_by(selected_by)
            .with_status(status),
    ))
}

/// Parse a decimal metric published as a string; missing or empty is zero
fn parse_metric(
    player_id: PlayerId,
    field: &'static str,
    value: Option<&str>,
) -> Result<Decimal, SnapshotError> {
    match value.map(str::trim) {
        None | Some("") => Ok(Decimal::ZERO),
        Some(text) => Decimal::from_str(text).map_err(|_| SnapshotError::InvalidNumber {
            player_id,
            field,
            value: text.to_string(),
        }),
    }
}
