//! Predicted combined scores for upcoming NBA games.
//!
//! The schedule comes from the NBA live scoreboard and each team's recent
//! form from its game log on stats.nba.com. Both are reached through the
//! provider traits so the CLI and the Compute service can bring their own
//! HTTP stack.

pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod nba;
pub mod predict;
pub mod provider;
pub mod render;
pub mod schedule;
pub mod stats;
pub mod strategy;

pub use config::{PredictorConfig, StrategyKind};
pub use error::{ConfigError, PredictError, ProviderError, StatsError};
pub use models::{Game, GameLogEntry, PredictedTotal, Prediction, TeamAverages, TeamId};
pub use predict::predict;
pub use provider::{GameLogProvider, ScheduleProvider};
pub use schedule::{fetch_schedule, upcoming_games, Schedule};
pub use strategy::{PredictionStrategy, ScoredAllowed, ScoredOnly, TeamStats};
