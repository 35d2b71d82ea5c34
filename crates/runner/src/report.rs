//! Plain-text reports for the command line

use std::fmt::Write;
use xi_advisor::{Advisor, Recommendations};
use xi_core::{Player, Score, Squad, round_price};

use crate::snapshot::Snapshot;

const HEADER: &str = "Name                 Pos  Team             Price   Pts   Mins    Score";

fn player_row(out: &mut String, player: &Player, score: Option<Score>, snapshot: &Snapshot) {
    let score = score
        .map(|s| s.round_dp(2).to_string())
        .unwrap_or_else(|| "-".to_string());
    let _ = writeln!(
        out,
        "{:<20} {:<4} {:<16} {:>5} {:>5} {:>6} {:>8}",
        truncate(&player.name, 20),
        player.position.code(),
        truncate(&snapshot.team_name(player.team_id), 16),
        round_price(player.price).to_string(),
        player.total_points,
        player.minutes,
        score
    );
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

/// Squad summary followed by one row per player with its score
pub fn squad_report(squad: &Squad<'_>, advisor: &Advisor, snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{squad}");
    let _ = writeln!(out, "{HEADER}");
    for player in squad {
        player_row(&mut out, player, Some(advisor.score(player)), snapshot);
    }
    let _ = writeln!(out, "Remaining budget: {:.1}", round_price(squad.remaining_budget()));
    out
}

/// Ranked recommendations, best first
pub fn recommendations_report(recommendations: &Recommendations<'_>, snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{HEADER}");
    for rec in recommendations {
        player_row(&mut out, rec.player, Some(rec.score), snapshot);
    }
    out
}

/// Plain player list, e.g. search hits
pub fn players_report(players: &[&Player], snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{HEADER}");
    for player in players {
        player_row(&mut out, player, None, snapshot);
    }
    out
}
