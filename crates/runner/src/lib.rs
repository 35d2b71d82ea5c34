//! XI Runner
//!
//! Everything around the squad advisor that touches the outside world:
//!
//! - **Config**: Run configuration (formation, budget, rules, weights)
//! - **Snapshot**: Cached bootstrap JSON cleaned into player records
//! - **Search**: Validated player-name search
//! - **Report**: Plain-text rendering of squads and recommendations
//! - **CLI**: The `xi` command line
//!
//! ## Architecture
//!
//! ```text
//!   bootstrap JSON ──► Snapshot ──► Vec<Player> ─┐
//!                                                ▼
//!   runner config ──► RunnerConfig ──► Advisor ──► build_starting_xi
//!                                                │
//!                                                ▼
//!                                         Report (stdout)
//! ```

pub mod cli;
pub mod config;
pub mod report;
pub mod search;
pub mod snapshot;

// Re-export main types
pub use config::{ConfigError, RunnerConfig, load_config, load_config_from_str, load_default_config};
pub use search::{SearchError, search_players, validate_search_text};
pub use snapshot::{Snapshot, SnapshotError, Team};
