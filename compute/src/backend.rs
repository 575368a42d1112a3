use fastly::backend::BackendCreationError;
use fastly::{Backend, Request};
use hoops_core::nba::{self, SCOREBOARD_URL, STATS_HEADERS, STATS_HOST};
use hoops_core::{Game, GameLogEntry, GameLogProvider, ProviderError, ScheduleProvider, TeamId};
use std::cell::RefCell;
use std::time::Duration;
use tracing::debug;

/// Static backend pointing at cdn.nba.com.
const SCOREBOARD_BACKEND: &str = "nba-cdn";

/// Dynamic backend for stats.nba.com, created per request so the
/// configured timeout applies.
const STATS_BACKEND: &str = "nba-stats";

/// NBA data fetched through Fastly backends.
pub struct FastlyNba {
    season: String,
    stats_backend: RefCell<Option<Backend>>,
}

impl FastlyNba {
    pub fn new(season: String) -> Self {
        Self {
            season,
            stats_backend: RefCell::new(None),
        }
    }

    fn stats_backend(&self, timeout: Duration) -> Result<Backend, ProviderError> {
        if let Some(backend) = self.stats_backend.borrow().as_ref() {
            return Ok(backend.clone());
        }

        let backend = match Backend::builder(STATS_BACKEND, STATS_HOST)
            .override_host(STATS_HOST)
            .enable_ssl()
            .sni_hostname(STATS_HOST)
            .connect_timeout(timeout)
            .first_byte_timeout(timeout)
            .between_bytes_timeout(timeout)
            .finish()
        {
            Ok(backend) => backend,
            Err(BackendCreationError::NameInUse) => {
                Backend::from_name(STATS_BACKEND).map_err(|e| ProviderError::Transport {
                    url: STATS_HOST.to_string(),
                    message: e.to_string(),
                })?
            }
            Err(e) => {
                return Err(ProviderError::Transport {
                    url: STATS_HOST.to_string(),
                    message: e.to_string(),
                })
            }
        };

        *self.stats_backend.borrow_mut() = Some(backend.clone());
        Ok(backend)
    }
}

fn send(req: Request, backend: Backend, url: &str) -> Result<String, ProviderError> {
    let resp = req.send(backend).map_err(|e| ProviderError::Transport {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    if !resp.get_status().is_success() {
        return Err(ProviderError::Status {
            url: url.to_string(),
            status: resp.get_status().as_u16(),
        });
    }

    Ok(resp.into_body_str())
}

impl ScheduleProvider for FastlyNba {
    fn scoreboard(&self) -> Result<Vec<Game>, ProviderError> {
        let backend = Backend::from_name(SCOREBOARD_BACKEND).map_err(|e| {
            ProviderError::Transport {
                url: SCOREBOARD_URL.to_string(),
                message: e.to_string(),
            }
        })?;

        debug!("Fetching scoreboard from {}", SCOREBOARD_URL);
        let body = send(Request::get(SCOREBOARD_URL), backend, SCOREBOARD_URL)?;
        nba::parse_scoreboard(&body)
    }
}

impl GameLogProvider for FastlyNba {
    fn team_game_log(
        &self,
        team_id: TeamId,
        timeout: Duration,
    ) -> Result<Vec<GameLogEntry>, ProviderError> {
        let url = nba::team_game_log_url(team_id, &self.season);
        debug!("Fetching game log for team {} from {}", team_id, url);

        let req = STATS_HEADERS
            .iter()
            .fold(Request::get(url.as_str()), |req, (name, value)| {
                req.with_header(*name, *value)
            });
        let body = send(req, self.stats_backend(timeout)?, &url)?;
        nba::parse_team_game_log(&body)
    }
}
