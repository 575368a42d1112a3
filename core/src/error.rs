use crate::models::TeamId;
use thiserror::Error;

/// Failure talking to, or making sense of, the stats provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("response is missing {0}")]
    Missing(String),
}

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("no games logged for team {0}")]
    NoGames(TeamId),

    #[error("stats for team {team} unavailable: {source}")]
    Provider {
        team: TeamId,
        #[source]
        source: ProviderError,
    },
}

/// Failure while producing a single game's prediction.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("combined total {0} is not a finite number")]
    NonFinite(f64),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown strategy '{0}' (expected scored-only or scored-allowed)")]
    UnknownStrategy(String),

    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },
}
