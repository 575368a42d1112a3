use crate::models::{Game, Prediction};
use crate::provider::GameLogProvider;
use crate::strategy::PredictionStrategy;
use tracing::{debug, error};

/// Predict totals for the games at the selected positions.
///
/// Output follows the order of `selected`. Entries that don't parse as a
/// position in `games` are skipped, as is any game whose total can't be
/// computed; every other entry yields exactly one prediction.
pub fn predict<S: AsRef<str>>(
    selected: &[S],
    games: &[Game],
    strategy: &dyn PredictionStrategy,
    provider: &dyn GameLogProvider,
) -> Vec<Prediction> {
    let mut predictions = Vec::with_capacity(selected.len());

    for raw in selected {
        let raw = raw.as_ref();
        let Some(game) = resolve(raw, games) else {
            debug!("Skipping selection {:?}", raw);
            continue;
        };

        let home = strategy.team_stats(provider, game.home_team_id);
        let away = strategy.team_stats(provider, game.away_team_id);

        match strategy.combine(&home, &away) {
            Ok(total) => predictions.push(Prediction {
                matchup: game.matchup(),
                total,
            }),
            Err(e) => {
                if strategy.logs_failures() {
                    error!("Error processing game {}: {}", raw, e);
                }
            }
        }
    }

    predictions
}

/// Negative positions count back from the end of the slate.
fn resolve<'a>(raw: &str, games: &'a [Game]) -> Option<&'a Game> {
    let index: i64 = raw.trim().parse().ok()?;
    let index = if index < 0 {
        index.checked_add(games.len() as i64)?
    } else {
        index
    };
    games.get(usize::try_from(index).ok()?)
}
