//! Prediction formulas.
//!
//! Each strategy owns both halves of its behavior: how a team's recent form
//! is summarized (including what happens when the stats provider has
//! nothing to offer) and how two summaries become a predicted total.

use crate::config::{PredictorConfig, StrategyKind};
use crate::error::{PredictError, StatsError};
use crate::models::{PredictedTotal, TeamAverages, TeamId};
use crate::provider::GameLogProvider;
use crate::stats::team_averages;
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TeamStats {
    Available(TeamAverages),
    Unavailable,
}

pub trait PredictionStrategy {
    fn kind(&self) -> StrategyKind;

    fn team_stats(&self, provider: &dyn GameLogProvider, team_id: TeamId) -> TeamStats;

    fn combine(&self, home: &TeamStats, away: &TeamStats) -> Result<PredictedTotal, PredictError>;

    /// Whether games dropped during a batch are written to the log.
    fn logs_failures(&self) -> bool {
        true
    }
}

impl StrategyKind {
    pub fn build(self, config: &PredictorConfig) -> Box<dyn PredictionStrategy> {
        match self {
            StrategyKind::ScoredOnly => Box::new(ScoredOnly::new(config.clone())),
            StrategyKind::ScoredAllowed => Box::new(ScoredAllowed::new(config.clone())),
        }
    }
}

/// Predicted total is the sum of both teams' scoring averages.
///
/// A team without usable stats makes the whole matchup unavailable.
pub struct ScoredOnly {
    config: PredictorConfig,
}

impl ScoredOnly {
    pub fn new(config: PredictorConfig) -> Self {
        Self { config }
    }
}

impl PredictionStrategy for ScoredOnly {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ScoredOnly
    }

    fn team_stats(&self, provider: &dyn GameLogProvider, team_id: TeamId) -> TeamStats {
        match team_averages(provider, team_id, &self.config) {
            Ok(averages) => TeamStats::Available(averages),
            Err(StatsError::NoGames(_)) => TeamStats::Unavailable,
            Err(e) => {
                error!("Error fetching stats for team {}: {}", team_id, e);
                TeamStats::Unavailable
            }
        }
    }

    fn combine(&self, home: &TeamStats, away: &TeamStats) -> Result<PredictedTotal, PredictError> {
        match (home, away) {
            (TeamStats::Available(home), TeamStats::Available(away)) => {
                round_total(home.scored + away.scored)
            }
            _ => Ok(PredictedTotal::Unavailable),
        }
    }
}

/// Predicted total is the midpoint of the home team's scoring and the away
/// team's points allowed.
///
/// Missing stats are replaced by the configured fallback pair, so this
/// strategy always yields a number.
pub struct ScoredAllowed {
    config: PredictorConfig,
}

impl ScoredAllowed {
    pub fn new(config: PredictorConfig) -> Self {
        Self { config }
    }

    /// Scored and allowed averages, or the fallback pair when either is missing.
    fn scored_allowed(&self, stats: &TeamStats) -> (f64, f64) {
        match stats {
            TeamStats::Available(TeamAverages {
                scored,
                allowed: Some(allowed),
            }) => (*scored, *allowed),
            _ => (self.config.fallback_scored, self.config.fallback_allowed),
        }
    }
}

impl PredictionStrategy for ScoredAllowed {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ScoredAllowed
    }

    fn team_stats(&self, provider: &dyn GameLogProvider, team_id: TeamId) -> TeamStats {
        let fetched = match team_averages(provider, team_id, &self.config) {
            Ok(averages) => TeamStats::Available(averages),
            Err(_) => TeamStats::Unavailable,
        };
        let (scored, allowed) = self.scored_allowed(&fetched);
        TeamStats::Available(TeamAverages {
            scored,
            allowed: Some(allowed),
        })
    }

    fn combine(&self, home: &TeamStats, away: &TeamStats) -> Result<PredictedTotal, PredictError> {
        let (home_scored, _) = self.scored_allowed(home);
        let (_, away_allowed) = self.scored_allowed(away);
        round_total((home_scored + away_allowed) * 0.5)
    }

    fn logs_failures(&self) -> bool {
        false
    }
}

/// Round to the nearest integer, ties to even.
fn round_total(total: f64) -> Result<PredictedTotal, PredictError> {
    if !total.is_finite() {
        return Err(PredictError::NonFinite(total));
    }
    Ok(PredictedTotal::Points(total.round_ties_even() as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GameLogEntry;
    use crate::provider::fakes::FakeLogs;

    fn available(scored: f64, allowed: Option<f64>) -> TeamStats {
        TeamStats::Available(TeamAverages { scored, allowed })
    }

    #[test]
    fn test_scored_only_sums_averages() {
        let strategy = ScoredOnly::new(PredictorConfig::default());
        let logs = FakeLogs::default()
            .scored(1, &[100.0, 110.0, 120.0])
            .scored(2, &[90.0, 100.0, 110.0]);

        let home = strategy.team_stats(&logs, TeamId(1));
        let away = strategy.team_stats(&logs, TeamId(2));
        assert_eq!(strategy.combine(&home, &away).unwrap(), PredictedTotal::Points(210));
    }

    #[test]
    fn test_scored_only_no_games_is_unavailable() {
        let strategy = ScoredOnly::new(PredictorConfig::default());
        let logs = FakeLogs::default().scored(1, &[]).scored(2, &[120.0]);

        assert_eq!(strategy.team_stats(&logs, TeamId(1)), TeamStats::Unavailable);
        let total = strategy
            .combine(&strategy.team_stats(&logs, TeamId(2)), &TeamStats::Unavailable)
            .unwrap();
        assert_eq!(total, PredictedTotal::Unavailable);
    }

    #[test]
    fn test_scored_only_fetch_error_is_unavailable() {
        let strategy = ScoredOnly::new(PredictorConfig::default());
        assert_eq!(
            strategy.team_stats(&FakeLogs::default(), TeamId(1)),
            TeamStats::Unavailable
        );
    }

    #[test]
    fn test_scored_only_rounds_half_to_even() {
        let strategy = ScoredOnly::new(PredictorConfig::default());
        let total = |h, a| strategy.combine(&available(h, None), &available(a, None)).unwrap();

        assert_eq!(total(105.25, 105.25), PredictedTotal::Points(210));
        assert_eq!(total(105.75, 105.75), PredictedTotal::Points(212));
        assert_eq!(total(105.2, 105.1), PredictedTotal::Points(210));
    }

    #[test]
    fn test_scored_allowed_uses_home_offense_and_away_defense() {
        let strategy = ScoredAllowed::new(PredictorConfig::default());
        let total = strategy
            .combine(&available(120.0, Some(80.0)), &available(95.0, Some(100.0)))
            .unwrap();
        assert_eq!(total, PredictedTotal::Points(110));
    }

    #[test]
    fn test_scored_allowed_falls_back_on_failure() {
        let strategy = ScoredAllowed::new(PredictorConfig::default());
        let logs = FakeLogs::default();

        let home = strategy.team_stats(&logs, TeamId(1));
        let away = strategy.team_stats(&logs, TeamId(2));
        assert_eq!(home, available(110.0, Some(110.0)));
        assert_eq!(strategy.combine(&home, &away).unwrap(), PredictedTotal::Points(110));
    }

    #[test]
    fn test_scored_allowed_no_games_looks_like_fallback() {
        let strategy = ScoredAllowed::new(PredictorConfig::default());
        let logs = FakeLogs::default().scored(1, &[]);
        assert_eq!(strategy.team_stats(&logs, TeamId(1)), available(110.0, Some(110.0)));
    }

    #[test]
    fn test_scored_allowed_requires_opponent_points() {
        let strategy = ScoredAllowed::new(PredictorConfig::default());
        let logs = FakeLogs::default().scored(1, &[130.0, 140.0]);
        assert_eq!(strategy.team_stats(&logs, TeamId(1)), available(110.0, Some(110.0)));
    }

    #[test]
    fn test_scored_allowed_reads_logs() {
        let strategy = ScoredAllowed::new(PredictorConfig::default());
        let logs = FakeLogs::default().with(
            1,
            vec![
                GameLogEntry::with_opponent(118.0, 101.0),
                GameLogEntry::with_opponent(122.0, 99.0),
            ],
        );
        assert_eq!(strategy.team_stats(&logs, TeamId(1)), available(120.0, Some(100.0)));
    }

    #[test]
    fn test_scored_allowed_custom_fallback() {
        let config = PredictorConfig {
            fallback_scored: 100.0,
            fallback_allowed: 104.0,
            ..PredictorConfig::default()
        };
        let strategy = ScoredAllowed::new(config);
        let logs = FakeLogs::default();

        let home = strategy.team_stats(&logs, TeamId(1));
        let away = strategy.team_stats(&logs, TeamId(2));
        assert_eq!(strategy.combine(&home, &away).unwrap(), PredictedTotal::Points(102));
    }

    #[test]
    fn test_scored_allowed_combine_fills_missing_sides() {
        let strategy = ScoredAllowed::new(PredictorConfig::default());

        let total = strategy
            .combine(&available(120.0, None), &TeamStats::Unavailable)
            .unwrap();
        assert_eq!(total, PredictedTotal::Points(110));

        let total = strategy
            .combine(&TeamStats::Unavailable, &available(90.0, Some(100.0)))
            .unwrap();
        assert_eq!(total, PredictedTotal::Points(105));
    }

    #[test]
    fn test_non_finite_total_is_an_error() {
        let strategy = ScoredOnly::new(PredictorConfig::default());
        let result = strategy.combine(&available(f64::INFINITY, None), &available(100.0, None));
        assert!(result.is_err());
    }

    #[test]
    fn test_build_from_kind() {
        let config = PredictorConfig::default();
        assert_eq!(
            StrategyKind::ScoredOnly.build(&config).kind(),
            StrategyKind::ScoredOnly
        );
        let allowed = StrategyKind::ScoredAllowed.build(&config);
        assert_eq!(allowed.kind(), StrategyKind::ScoredAllowed);
        assert!(!allowed.logs_failures());
    }
}
