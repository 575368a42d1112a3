use crate::config::PredictorConfig;
use crate::error::ProviderError;
use crate::models::Game;
use crate::provider::ScheduleProvider;
use tracing::{info, warn};

/// Games offered for selection in one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub games: Vec<Game>,
    /// Set when the provider failed and the placeholder game was substituted
    pub placeholder: bool,
}

/// Fetch the current slate, preserving provider order.
///
/// No date-window filtering is applied; whatever the scoreboard returns is
/// what gets listed.
pub fn fetch_schedule(provider: &dyn ScheduleProvider) -> Result<Vec<Game>, ProviderError> {
    let games = provider.scoreboard()?;
    info!("Fetched {} scheduled games", games.len());
    Ok(games)
}

/// Fetch the slate, substituting the configured placeholder game on any failure.
pub fn upcoming_games(provider: &dyn ScheduleProvider, config: &PredictorConfig) -> Schedule {
    match fetch_schedule(provider) {
        Ok(games) => Schedule {
            games,
            placeholder: false,
        },
        Err(e) => {
            warn!("Schedule unavailable, using placeholder game: {}", e);
            Schedule {
                games: vec![config.placeholder_game.clone()],
                placeholder: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamId;
    use crate::provider::fakes::{game, FixedSchedule};

    #[test]
    fn test_provider_order_is_kept() {
        let provider = FixedSchedule(Ok(vec![
            game(1, "Knicks", 2, "76ers"),
            game(3, "Lakers", 4, "Warriors"),
        ]));

        let schedule = upcoming_games(&provider, &PredictorConfig::default());
        assert!(!schedule.placeholder);
        let names: Vec<_> = schedule.games.iter().map(|g| g.home_team.as_str()).collect();
        assert_eq!(names, ["Knicks", "Lakers"]);
    }

    #[test]
    fn test_failure_yields_single_placeholder() {
        let schedule = upcoming_games(&FixedSchedule(Err(())), &PredictorConfig::default());

        assert!(schedule.placeholder);
        assert_eq!(schedule.games.len(), 1);
        let game = &schedule.games[0];
        assert_eq!(game.game_id, "0022301234");
        assert_eq!(game.home_team_id, TeamId(1610612737));
        assert_eq!(game.home_team, "Atlanta Hawks");
        assert_eq!(game.away_team_id, TeamId(1610612738));
        assert_eq!(game.away_team, "Boston Celtics");
        assert_eq!(game.date, "2024-03-30T23:30:00Z");
    }

    #[test]
    fn test_placeholder_is_configurable() {
        let config = PredictorConfig {
            placeholder_game: game(9, "Home", 8, "Away"),
            ..PredictorConfig::default()
        };

        let schedule = upcoming_games(&FixedSchedule(Err(())), &config);
        assert_eq!(schedule.games, vec![game(9, "Home", 8, "Away")]);
    }

    #[test]
    fn test_empty_slate_is_not_a_failure() {
        let schedule = upcoming_games(&FixedSchedule(Ok(vec![])), &PredictorConfig::default());
        assert!(schedule.games.is_empty());
        assert!(!schedule.placeholder);
    }

    #[test]
    fn test_fetch_schedule_surfaces_errors() {
        assert!(fetch_schedule(&FixedSchedule(Err(()))).is_err());
    }
}
