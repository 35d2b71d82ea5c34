//! Snapshot Pipeline Integration Test
//!
//! Tests the full flow:
//! 1. Cached bootstrap JSON written to disk
//! 2. Snapshot loaded (fresh) and cleaned into players
//! 3. Advisor built from run configuration
//! 4. Starting XI built and rendered through the CLI handler

use chrono::Duration;
use clap::Parser;
use rust_decimal_macros::dec;
use serde_json::{Value, json};
use std::path::PathBuf;
use xi_advisor::build_starting_xi;
use xi_core::{PlayerStatus, Position};
use xi_runner::cli::{Cli, run};
use xi_runner::{Snapshot, load_config_from_str, load_default_config};

/// Six players per position across ten teams; every tenth one injured
fn bootstrap_json() -> Value {
    let mut elements = Vec::new();
    for id in 1..=24u32 {
        let element_type = (id - 1) / 6 + 1;
        let status = if id % 10 == 0 { "i" } else { "a" };
        elements.push(json!({
            "id": id,
            "web_name": format!("Player{id}"),
            "team": id % 10 + 1,
            "element_type": element_type,
            "now_cost": 40 + (id % 6) * 5,
            "total_points": 30 + (id * 13) % 71,
            "form": format!("{}.{}", id % 7, id % 10),
            "minutes": 600 + id * 50,
            "points_per_game": format!("{}.5", id % 5),
            "selected_by_percent": "3.2",
            "status": status,
        }));
    }
    let teams: Vec<Value> = (1..=10)
        .map(|id| json!({ "id": id, "name": format!("Club {id}"), "short_name": format!("C{id}") }))
        .collect();
    json!({ "elements": elements, "teams": teams })
}

fn write_snapshot(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("xi-runner-{}-{}.json", name, std::process::id()));
    std::fs::write(&path, bootstrap_json().to_string()).unwrap();
    path
}

#[test]
fn test_fresh_snapshot_builds_xi() {
    let _ = env_logger::try_init();
    let path = write_snapshot("fresh");

    let snapshot = Snapshot::load_fresh(&path, Duration::hours(1))
        .unwrap()
        .expect("just-written snapshot is fresh");
    assert_eq!(snapshot.players.len(), 24);
    assert_eq!(snapshot.team_name(3), "Club 3");

    let config = load_default_config().unwrap();
    let advisor = config.build_advisor().unwrap();
    let xi = build_starting_xi(&snapshot.players, &advisor, "4-4-2", config.budget).unwrap();

    assert_eq!(xi.len(), 11);
    assert_eq!(xi.position_counts().goalkeepers, 1);
    assert!(xi.iter().all(|p| p.status == PlayerStatus::Available));
    assert!(xi.total_cost() <= dec!(100.0));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_zero_max_age_treats_snapshot_as_stale() {
    let path = write_snapshot("stale");

    std::thread::sleep(std::time::Duration::from_millis(20));
    let loaded = Snapshot::load_fresh(&path, Duration::zero()).unwrap();
    assert!(loaded.is_none());

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_cli_build_report() {
    let path = write_snapshot("cli-build");
    let cli = Cli::try_parse_from([
        "xi",
        "--snapshot",
        path.to_str().unwrap(),
        "build",
        "-f",
        "3-4-3",
    ])
    .unwrap();

    let report = run(&cli).unwrap();
    let lines: Vec<&str> = report.lines().collect();

    assert!(lines[0].starts_with("Best XI - 3-4-3"));
    assert!(lines[1].starts_with("Squad(players=11"));
    // Title, summary, header, 11 players, remaining budget
    assert_eq!(lines.len(), 15);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_cli_build_failure_is_error() {
    let path = write_snapshot("cli-short");
    // Six defenders exist, one injured: a 6-3-1 cannot be filled
    let cli = Cli::try_parse_from([
        "xi",
        "--snapshot",
        path.to_str().unwrap(),
        "build",
        "-f",
        "6-3-1",
    ])
    .unwrap();

    let err = run(&cli).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Could not build XI"));
    assert!(message.contains("Formation mismatch"));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_cli_recommend_and_search() {
    let path = write_snapshot("cli-recommend");
    let snapshot_arg = path.to_str().unwrap();

    let cli = Cli::try_parse_from([
        "xi", "--snapshot", snapshot_arg, "recommend", "--position", "FWD", "--limit", "3",
    ])
    .unwrap();
    let report = run(&cli).unwrap();
    assert_eq!(report.lines().count(), 4);

    let cli = Cli::try_parse_from(["xi", "--snapshot", snapshot_arg, "search", "player2"]).unwrap();
    let report = run(&cli).unwrap();
    // Player2, Player20..Player24
    assert_eq!(report.lines().count(), 1 + 6);

    let cli = Cli::try_parse_from(["xi", "--snapshot", snapshot_arg, "search", "bad;text"]).unwrap();
    assert!(run(&cli).is_err());

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_config_overrides_rules() {
    let config = load_config_from_str(r#"{ "rules": ["max_per_team"], "max_per_team": 1 }"#).unwrap();
    let path = write_snapshot("config-rules");
    let snapshot = Snapshot::load(&path).unwrap();

    let advisor = config.build_advisor().unwrap();
    let err = build_starting_xi(&snapshot.players, &advisor, "4-4-2", config.budget).unwrap_err();
    assert!(!err.violations().is_empty());

    let positions: Vec<Position> = snapshot.players.iter().map(|p| p.position).collect();
    assert_eq!(positions.iter().filter(|p| **p == Position::Forward).count(), 6);

    std::fs::remove_file(&path).unwrap();
}
