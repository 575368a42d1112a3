use crate::error::ProviderError;
use crate::models::{Game, GameLogEntry, TeamId};
use std::time::Duration;

/// Source of the current slate of games.
pub trait ScheduleProvider {
    fn scoreboard(&self) -> Result<Vec<Game>, ProviderError>;
}

/// Source of completed games for a team, most recent first.
pub trait GameLogProvider {
    fn team_game_log(
        &self,
        team_id: TeamId,
        timeout: Duration,
    ) -> Result<Vec<GameLogEntry>, ProviderError>;
}
