//! Command line definitions and handlers

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use rust_decimal::Decimal;
use std::path::PathBuf;
use xi_advisor::{RecommendFilter, build_starting_xi};
use xi_core::{Formation, Position, TeamId};

use crate::config::{RunnerConfig, load_config, load_default_config};
use crate::report::{players_report, recommendations_report, squad_report};
use crate::search::search_players;
use crate::snapshot::Snapshot;

/// XI - fantasy starting lineup advisor
#[derive(Parser, Debug)]
#[command(name = "xi")]
#[command(
    version,
    about = "Recommend a fantasy-football starting XI from a cached league snapshot",
    after_help = "\
Examples:
  xi build                              Best 4-4-2 XI within 100.0
  xi build -f 3-5-2 -b 95.5             Custom formation and budget
  xi recommend --position MID --limit 5 Top five midfielders
  xi search saka                        Find players by name
  xi formations                         Common formations"
)]
pub struct Cli {
    /// Path to the cached bootstrap snapshot (overrides config)
    #[arg(long, global = true, env = "XI_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    /// Path to a JSON run configuration
    #[arg(long, global = true, env = "XI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Use the snapshot even if it is older than the configured maximum age
    #[arg(long, global = true)]
    pub allow_stale: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the best starting XI for a formation and budget
    Build {
        /// Formation as DEF-MID-FWD, e.g. 4-4-2
        #[arg(long, short = 'f')]
        formation: Option<Formation>,

        /// Total budget in millions
        #[arg(long, short = 'b')]
        budget: Option<Decimal>,
    },

    /// List top-scoring players, optionally filtered
    Recommend {
        /// GK, DEF, MID or FWD
        #[arg(long, short = 'p')]
        position: Option<Position>,

        /// Maximum price in millions
        #[arg(long)]
        max_price: Option<Decimal>,

        /// Minimum minutes played
        #[arg(long)]
        min_minutes: Option<u32>,

        /// Team id
        #[arg(long)]
        team: Option<TeamId>,

        /// Number of players to show
        #[arg(long, short = 'n', default_value = "10")]
        limit: usize,
    },

    /// Search players by name
    Search {
        /// Letters, digits, spaces, apostrophes, hyphens or dots
        text: String,
    },

    /// List the common formations
    Formations,
}

impl Commands {
    fn filter(&self) -> RecommendFilter {
        match self {
            Commands::Recommend {
                position,
                max_price,
                min_minutes,
                team,
                ..
            } => RecommendFilter {
                position: *position,
                max_price: *max_price,
                min_minutes: *min_minutes,
                team_id: *team,
            },
            _ => RecommendFilter::default(),
        }
    }
}

/// Initialise `env_logger`; `RUST_LOG` wins over the CLI level
pub fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn load_run_config(cli: &Cli) -> Result<RunnerConfig> {
    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => load_default_config().context("loading embedded config")?,
    };
    Ok(config)
}

fn load_snapshot(cli: &Cli, config: &RunnerConfig) -> Result<Snapshot> {
    let path = cli.snapshot.as_ref().unwrap_or(&config.snapshot_path);

    if cli.allow_stale {
        return Snapshot::load(path).with_context(|| format!("loading snapshot {}", path.display()));
    }

    match Snapshot::load_fresh(path, config.snapshot_max_age())
        .with_context(|| format!("loading snapshot {}", path.display()))?
    {
        Some(snapshot) => Ok(snapshot),
        None => bail!(
            "Snapshot {} is missing or older than {}s; refresh it or pass --allow-stale",
            path.display(),
            config.snapshot_max_age_secs
        ),
    }
}

/// Execute a parsed command line, returning the report to print
pub fn run(cli: &Cli) -> Result<String> {
    if let Commands::Formations = cli.command {
        return Ok(formations_report());
    }

    let mut config = load_run_config(cli)?;

    if let Commands::Build { formation, budget } = &cli.command {
        if let Some(formation) = formation {
            config.formation = *formation;
        }
        if let Some(budget) = budget {
            config.budget = *budget;
        }
        config.validate()?;
    }

    let snapshot = load_snapshot(cli, &config)?;
    info!("Loaded {} players", snapshot.players.len());
    let advisor = config.build_advisor()?;

    match &cli.command {
        Commands::Build { .. } => {
            let formation = config.formation.to_string();
            let xi = build_starting_xi(&snapshot.players, &advisor, &formation, config.budget)
                .with_context(|| format!("Could not build XI ({formation}, budget {})", config.budget))?;
            Ok(format!(
                "Best XI - {} (Budget £{}m)\n{}",
                formation,
                config.budget,
                squad_report(&xi, &advisor, &snapshot)
            ))
        }
        Commands::Recommend { limit, .. } => {
            let recs = advisor.top_recommendations(&snapshot.players, *limit, &cli.command.filter());
            Ok(recommendations_report(&recs, &snapshot))
        }
        Commands::Search { text } => {
            let hits = search_players(&snapshot.players, text)?;
            if hits.is_empty() {
                return Ok(format!("No players matching '{}'\n", text.trim()));
            }
            Ok(players_report(&hits, &snapshot))
        }
        Commands::Formations => Ok(formations_report()),
    }
}

fn formations_report() -> String {
    Formation::PRESETS
        .iter()
        .filter_map(|preset| preset.parse::<Formation>().ok())
        .map(|f| format!("{f}  ({})\n", f.required()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_build() {
        let cli = Cli::try_parse_from(["xi", "build", "-f", "3-5-2", "-b", "95.5"]).unwrap();
        match cli.command {
            Commands::Build { formation, budget } => {
                assert_eq!(formation, Some(Formation::new(3, 5, 2)));
                assert_eq!(budget, Some(dec!(95.5)));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_formation() {
        assert!(Cli::try_parse_from(["xi", "build", "-f", "442"]).is_err());
    }

    #[test]
    fn test_recommend_filter_from_flags() {
        let cli = Cli::try_parse_from([
            "xi",
            "recommend",
            "--position",
            "mid",
            "--max-price",
            "8.0",
            "--team",
            "7",
        ])
        .unwrap();

        let filter = cli.command.filter();
        assert_eq!(filter.position, Some(Position::Midfielder));
        assert_eq!(filter.max_price, Some(dec!(8.0)));
        assert_eq!(filter.min_minutes, None);
        assert_eq!(filter.team_id, Some(7));
    }

    #[test]
    fn test_formations_need_no_snapshot() {
        let cli = Cli::try_parse_from(["xi", "--snapshot", "/nonexistent/snap.json", "formations"])
            .unwrap();
        let report = run(&cli).unwrap();

        assert_eq!(report.lines().count(), Formation::PRESETS.len());
        assert!(report.contains("4-4-2  (GK=1 DEF=4 MID=4 FWD=2)"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["xi", "search", "saka", "--snapshot", "snap.json", "--allow-stale"])
                .unwrap();
        assert_eq!(cli.snapshot, Some(PathBuf::from("snap.json")));
        assert!(cli.allow_stale);
    }
}
