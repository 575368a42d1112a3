use crate::error::ConfigError;
use crate::models::{Game, TeamId};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Which prediction formula to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Sum of both teams' scoring averages; missing data is shown to the user
    #[default]
    ScoredOnly,
    /// Midpoint of home offense and away defense; missing data becomes the fallback pair
    ScoredAllowed,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::ScoredOnly => "scored-only",
            StrategyKind::ScoredAllowed => "scored-allowed",
        }
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "scored-only" => Ok(StrategyKind::ScoredOnly),
            "scored-allowed" => Ok(StrategyKind::ScoredAllowed),
            other => Err(ConfigError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Settings shared by the CLI and the Compute service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    pub strategy: StrategyKind,

    /// Number of most recent games averaged per team
    pub sample_size: usize,

    /// Per-request timeout for team game logs, in seconds
    pub request_timeout_secs: u64,

    /// Scored average substituted by the scored-allowed strategy when stats are missing
    pub fallback_scored: f64,

    /// Allowed average substituted by the scored-allowed strategy when stats are missing
    pub fallback_allowed: f64,

    /// Game listed when the schedule cannot be fetched
    pub placeholder_game: Game,

    /// Season to pull game logs from (e.g. "2024-25"); current season when unset
    pub season: Option<String>,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            sample_size: 10,
            request_timeout_secs: 10,
            fallback_scored: 110.0,
            fallback_allowed: 110.0,
            placeholder_game: placeholder_game(),
            season: None,
        }
    }
}

pub fn placeholder_game() -> Game {
    Game {
        game_id: "0022301234".to_string(),
        home_team_id: TeamId(1610612737),
        home_team: "Atlanta Hawks".to_string(),
        away_team_id: TeamId(1610612738),
        away_team: "Boston Celtics".to_string(),
        date: "2024-03-30T23:30:00Z".to_string(),
    }
}

impl PredictorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Apply a single `key = value` override, as read from a key/value store.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "strategy" => self.strategy = value.parse()?,
            "sample_size" => self.sample_size = value.trim().parse().map_err(|_| invalid())?,
            "request_timeout_secs" => {
                self.request_timeout_secs = value.trim().parse().map_err(|_| invalid())?
            }
            "fallback_scored" => self.fallback_scored = value.trim().parse().map_err(|_| invalid())?,
            "fallback_allowed" => {
                self.fallback_allowed = value.trim().parse().map_err(|_| invalid())?
            }
            "season" => self.season = Some(value.trim().to_string()).filter(|s| !s.is_empty()),
            _ => return Err(invalid()),
        }
        Ok(())
    }
}
