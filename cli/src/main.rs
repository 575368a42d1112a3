mod client;
mod logging;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::{Parser, Subcommand};
use hoops_core::{nba, predict, upcoming_games, Game, Prediction, PredictorConfig, StrategyKind};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use crate::client::NbaClient;

#[derive(Parser)]
#[command(name = "hoops")]
#[command(about = "Predict combined scores for upcoming NBA games")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Prediction formula: scored-only or scored-allowed
    #[arg(short, long, global = true)]
    strategy: Option<StrategyKind>,

    /// JSON file with predictor settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Timeout for each team game-log request, in seconds
    #[arg(short, long, global = true)]
    timeout: Option<u64>,

    /// Season to read game logs from, e.g. 2024-25
    #[arg(long, global = true)]
    season: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List today's games with the position used to select them
    Games,

    /// Predict totals for the games at the given positions
    Predict {
        /// Positions from `hoops games`
        #[arg(required = true, allow_negative_numbers = true)]
        indices: Vec<String>,
    },
}

#[derive(Serialize)]
struct GamesReport<'a> {
    placeholder: bool,
    games: &'a [Game],
}

#[derive(Serialize)]
struct PredictReport<'a> {
    strategy: StrategyKind,
    predictions: &'a [Prediction],
}

fn load_config(cli: &Cli) -> Result<PredictorConfig> {
    let mut config = match &cli.config {
        Some(path) => PredictorConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => PredictorConfig::default(),
    };

    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    if let Some(timeout) = cli.timeout {
        config.request_timeout_secs = timeout;
    }
    if let Some(season) = &cli.season {
        config.season = Some(season.clone());
    }

    Ok(config)
}

fn kickoff(date: &str) -> String {
    DateTime::parse_from_rfc3339(date)
        .map(|utc| utc.with_timezone(&Local).format("%a %b %e %H:%M").to_string())
        .unwrap_or_else(|_| date.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::initialize_logging(cli.verbose);

    let config = load_config(&cli)?;
    let season = config.season.clone().unwrap_or_else(nba::current_season);
    info!("Using {} strategy, season {}", config.strategy.as_str(), season);

    let client = NbaClient::new(season)?;
    let schedule = upcoming_games(&client, &config);

    match &cli.command {
        Command::Games => {
            if cli.json {
                let report = GamesReport {
                    placeholder: schedule.placeholder,
                    games: &schedule.games,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            if schedule.games.is_empty() {
                println!("No games scheduled.");
            }
            for (index, game) in schedule.games.iter().enumerate() {
                println!(
                    "{:>3}  {} @ {}  ({})",
                    index,
                    game.away_team,
                    game.home_team,
                    kickoff(&game.date)
                );
            }
        }
        Command::Predict { indices } => {
            let strategy = config.strategy.build(&config);
            let predictions =
                predict(indices.as_slice(), &schedule.games, strategy.as_ref(), &client);

            if cli.json {
                let report = PredictReport {
                    strategy: strategy.kind(),
                    predictions: &predictions,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            for prediction in &predictions {
                println!("{}: {}", prediction.matchup, prediction.total);
            }
        }
    }

    Ok(())
}
