use anyhow::{Context, Result};
use hoops_core::nba::{self, SCOREBOARD_URL, STATS_HEADERS};
use hoops_core::{Game, GameLogEntry, GameLogProvider, ProviderError, ScheduleProvider, TeamId};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = "hoops total predictor 0.1";

/// Blocking client for the NBA scoreboard and stats endpoints.
pub struct NbaClient {
    client: Client,
    season: String,
}

impl NbaClient {
    pub fn new(season: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(2)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client, season })
    }

    fn get_text(
        &self,
        request: reqwest::blocking::RequestBuilder,
        url: &str,
    ) -> Result<String, ProviderError> {
        let response = request.send().map_err(|e| transport_error(url, e))?;

        if !response.status().is_success() {
            return Err(ProviderError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        response.text().map_err(|e| transport_error(url, e))
    }
}

impl ScheduleProvider for NbaClient {
    fn scoreboard(&self) -> Result<Vec<Game>, ProviderError> {
        debug!("Fetching scoreboard from {}", SCOREBOARD_URL);
        let request = self
            .client
            .get(SCOREBOARD_URL)
            .header("User-Agent", USER_AGENT);
        let body = self.get_text(request, SCOREBOARD_URL)?;
        nba::parse_scoreboard(&body)
    }
}

impl GameLogProvider for NbaClient {
    fn team_game_log(
        &self,
        team_id: TeamId,
        timeout: Duration,
    ) -> Result<Vec<GameLogEntry>, ProviderError> {
        let url = nba::team_game_log_url(team_id, &self.season);
        debug!("Fetching game log for team {} from {}", team_id, url);

        let request = STATS_HEADERS
            .iter()
            .fold(self.client.get(&url).timeout(timeout), |request, (name, value)| {
                request.header(*name, *value)
            });
        let body = self.get_text(request, &url)?;
        nba::parse_team_game_log(&body)
    }
}

fn transport_error(url: &str, e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout {
            url: url.to_string(),
        }
    } else {
        ProviderError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        }
    }
}
