use serde::{Deserialize, Serialize};
use std::fmt;

/// NBA team identifier as used by both the scoreboard and the stats API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub u32);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One scheduled game. Only meaningful within a single request, where it is
/// addressed by its position in the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub game_id: String,
    pub home_team_id: TeamId,
    pub home_team: String,
    pub away_team_id: TeamId,
    pub away_team: String,
    /// Kickoff time, ISO-8601 in UTC
    pub date: String,
}

impl Game {
    pub fn matchup(&self) -> String {
        format!("{} vs {}", self.home_team, self.away_team)
    }
}

/// A completed game from a team's log. Either score may be missing from the feed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameLogEntry {
    pub points: Option<f64>,
    pub opponent_points: Option<f64>,
}

impl GameLogEntry {
    pub fn scored(points: f64) -> Self {
        Self {
            points: Some(points),
            opponent_points: None,
        }
    }

    pub fn with_opponent(points: f64, opponent_points: f64) -> Self {
        Self {
            points: Some(points),
            opponent_points: Some(opponent_points),
        }
    }
}

/// Recent-form averages for one team.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamAverages {
    pub scored: f64,
    pub allowed: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictedTotal {
    Points(i64),
    Unavailable,
}

impl fmt::Display for PredictedTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictedTotal::Points(points) => write!(f, "{}", points),
            PredictedTotal::Unavailable => f.write_str("Data unavailable"),
        }
    }
}

impl Serialize for PredictedTotal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            PredictedTotal::Points(points) => serializer.serialize_i64(*points),
            PredictedTotal::Unavailable => serializer.serialize_str("Data unavailable"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub matchup: String,
    pub total: PredictedTotal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_total_displays_literal() {
        assert_eq!(PredictedTotal::Unavailable.to_string(), "Data unavailable");
        assert_eq!(PredictedTotal::Points(221).to_string(), "221");
    }

    #[test]
    fn test_prediction_serializes_total_as_number_or_string() {
        let known = Prediction {
            matchup: "Atlanta Hawks vs Boston Celtics".to_string(),
            total: PredictedTotal::Points(224),
        };
        let unknown = Prediction {
            matchup: "Atlanta Hawks vs Boston Celtics".to_string(),
            total: PredictedTotal::Unavailable,
        };

        assert_eq!(serde_json::to_value(&known).unwrap()["total"], 224);
        assert_eq!(
            serde_json::to_value(&unknown).unwrap()["total"],
            "Data unavailable"
        );
    }

    #[test]
    fn test_matchup_lists_home_first() {
        let game = Game {
            game_id: "0022400001".to_string(),
            home_team_id: TeamId(1610612747),
            home_team: "Lakers".to_string(),
            away_team_id: TeamId(1610612744),
            away_team: "Warriors".to_string(),
            date: "2025-01-01T03:30:00Z".to_string(),
        };
        assert_eq!(game.matchup(), "Lakers vs Warriors");
    }
}
