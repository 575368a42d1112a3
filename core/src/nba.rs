//! NBA endpoints and their response formats.
//!
//! The live scoreboard is served from the public CDN; team game logs come
//! from stats.nba.com, which rejects requests that don't look like they
//! originate from a browser on nba.com.

use crate::error::ProviderError;
use crate::models::{Game, GameLogEntry, TeamId};
use chrono::{Datelike, NaiveDate, Utc};
use serde::Deserialize;

pub const SCOREBOARD_HOST: &str = "cdn.nba.com";
pub const SCOREBOARD_URL: &str =
    "https://cdn.nba.com/static/json/liveData/scoreboard/todaysScoreboard_00.json";

pub const STATS_HOST: &str = "stats.nba.com";

/// Headers stats.nba.com expects; without them requests hang until timeout.
pub const STATS_HEADERS: [(&str, &str); 5] = [
    (
        "User-Agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36",
    ),
    ("Accept", "application/json, text/plain, */*"),
    ("Accept-Language", "en-US,en;q=0.9"),
    ("Origin", "https://www.nba.com"),
    ("Referer", "https://www.nba.com/"),
];

#[derive(Deserialize)]
struct ScoreboardResponse {
    scoreboard: Scoreboard,
}

#[derive(Deserialize)]
struct Scoreboard {
    games: Vec<ScoreboardGame>,
}

#[derive(Deserialize)]
struct ScoreboardGame {
    #[serde(rename = "gameId")]
    game_id: String,
    #[serde(rename = "gameTimeUTC")]
    game_time_utc: String,
    #[serde(rename = "homeTeam")]
    home_team: ScoreboardTeam,
    #[serde(rename = "awayTeam")]
    away_team: ScoreboardTeam,
}

#[derive(Deserialize)]
struct ScoreboardTeam {
    #[serde(rename = "teamId")]
    team_id: u32,
    #[serde(rename = "teamName")]
    team_name: String,
}

#[derive(Deserialize)]
struct StatsResponse {
    #[serde(rename = "resultSets")]
    result_sets: Vec<ResultSet>,
}

#[derive(Deserialize)]
struct ResultSet {
    headers: Vec<String>,
    #[serde(rename = "rowSet")]
    row_set: Vec<Vec<serde_json::Value>>,
}

/// Map a scoreboard payload into games, keeping the provider's order.
pub fn parse_scoreboard(body: &str) -> Result<Vec<Game>, ProviderError> {
    let response: ScoreboardResponse = serde_json::from_str(body)?;
    let games = response
        .scoreboard
        .games
        .into_iter()
        .map(|game| Game {
            game_id: game.game_id,
            home_team_id: TeamId(game.home_team.team_id),
            home_team: game.home_team.team_name,
            away_team_id: TeamId(game.away_team.team_id),
            away_team: game.away_team.team_name,
            date: game.game_time_utc,
        })
        .collect();
    Ok(games)
}

/// Parse a `teamgamelog` payload, most recent game first.
///
/// The `PTS` column is required; rows whose value is null or not a number
/// keep the game with `points: None`. `OPP_PTS` is read the same way when
/// the result set carries it.
pub fn parse_team_game_log(body: &str) -> Result<Vec<GameLogEntry>, ProviderError> {
    let response: StatsResponse = serde_json::from_str(body)?;
    let log = response
        .result_sets
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::Missing("result set".to_string()))?;

    let column = |name: &str| log.headers.iter().position(|h| h == name);
    let pts = column("PTS").ok_or_else(|| ProviderError::Missing("PTS column".to_string()))?;
    let opp_pts = column("OPP_PTS");

    Ok(log
        .row_set
        .iter()
        .map(|row| GameLogEntry {
            points: row.get(pts).and_then(|v| v.as_f64()),
            opponent_points: opp_pts.and_then(|i| row.get(i)).and_then(|v| v.as_f64()),
        })
        .collect())
}

pub fn team_game_log_url(team_id: TeamId, season: &str) -> String {
    format!(
        "https://stats.nba.com/stats/teamgamelog?TeamID={}&Season={}&SeasonType=Regular%20Season",
        team_id, season
    )
}

/// Season label ("2024-25") for the season in progress on `date`.
/// A new season is considered started from October.
pub fn season_for(date: NaiveDate) -> String {
    let start = if date.month() > 9 {
        date.year()
    } else {
        date.year() - 1
    };
    format!("{}-{:02}", start, (start + 1) % 100)
}

pub fn current_season() -> String {
    season_for(Utc::now().date_naive())
}
