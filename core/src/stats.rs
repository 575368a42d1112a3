use crate::config::PredictorConfig;
use crate::error::StatsError;
use crate::models::{GameLogEntry, TeamAverages, TeamId};
use crate::provider::GameLogProvider;

/// Average the team's most recent `sample_size` games.
///
/// Games missing a score still fill a slot in the sample but are left out of
/// that column's mean. `allowed` is `None` when no sampled game reports
/// opponent points; no sampled game with points is `NoGames`.
pub fn team_averages(
    provider: &dyn GameLogProvider,
    team_id: TeamId,
    config: &PredictorConfig,
) -> Result<TeamAverages, StatsError> {
    let log = provider
        .team_game_log(team_id, config.request_timeout())
        .map_err(|source| StatsError::Provider {
            team: team_id,
            source,
        })?;

    let sample = &log[..log.len().min(config.sample_size)];
    averages(sample).ok_or(StatsError::NoGames(team_id))
}

fn averages(sample: &[GameLogEntry]) -> Option<TeamAverages> {
    let scored = mean(sample.iter().filter_map(|g| g.points))?;
    let allowed = mean(sample.iter().filter_map(|g| g.opponent_points));
    Some(TeamAverages { scored, allowed })
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}
