//! Fastly Compute service listing today's NBA games and predicting totals.

mod backend;

use fastly::http::{header, Method, StatusCode};
use fastly::{mime, ConfigStore, Error, Request, Response};
use hoops_core::{form, nba, predict, render, upcoming_games, Game, Prediction, PredictorConfig};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::backend::FastlyNba;

/// Config store holding predictor overrides (`strategy`, `request_timeout_secs`, ...).
const CONFIG_STORE: &str = "hoops";
const CONFIG_KEYS: [&str; 6] = [
    "strategy",
    "sample_size",
    "request_timeout_secs",
    "fallback_scored",
    "fallback_allowed",
    "season",
];

#[derive(Serialize)]
struct GamesBody<'a> {
    games: &'a [Game],
}

#[derive(Serialize)]
struct PredictionsBody<'a> {
    strategy: &'static str,
    predictions: &'a [Prediction],
}

fn initialize_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .without_time();

    // A warm instance may already have a subscriber installed.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}

fn load_config() -> PredictorConfig {
    let mut config = PredictorConfig::default();

    let store = match ConfigStore::try_open(CONFIG_STORE) {
        Ok(store) => store,
        Err(e) => {
            info!("Config store {} not available, using defaults: {}", CONFIG_STORE, e);
            return config;
        }
    };

    for key in CONFIG_KEYS {
        match store.try_get(key) {
            Ok(Some(value)) => {
                if let Err(e) = config.apply_override(key, &value) {
                    warn!("Ignoring config override: {}", e);
                }
            }
            Ok(None) => {}
            Err(e) => warn!("Failed to read config key {}: {}", key, e),
        }
    }

    config
}

fn html(body: String) -> Response {
    Response::from_status(StatusCode::OK)
        .with_content_type(mime::TEXT_HTML_UTF_8)
        .with_body(body)
}

fn json<T: Serialize>(value: &T) -> Result<Response, Error> {
    Ok(Response::from_status(StatusCode::OK)
        .with_content_type(mime::APPLICATION_JSON)
        .with_header("Access-Control-Allow-Origin", "*")
        .with_body(serde_json::to_string(value)?))
}

/// The entry point for the service.
///
/// Every request fetches the schedule afresh; prediction requests resolve
/// the submitted positions against that fresh schedule.
#[fastly::main]
fn main(mut req: Request) -> Result<Response, Error> {
    initialize_logging();
    info!(
        "FASTLY_SERVICE_VERSION: {}",
        std::env::var("FASTLY_SERVICE_VERSION").unwrap_or_else(|_| String::new())
    );

    if req.get_method() == Method::OPTIONS {
        return Ok(Response::from_status(StatusCode::OK)
            .with_header("Access-Control-Allow-Origin", "*")
            .with_header("Access-Control-Allow-Headers", "*")
            .with_header("Vary", "Origin")
            .with_body_text_plain(""));
    }

    match req.get_method() {
        &Method::PUT | &Method::PATCH | &Method::DELETE => {
            return Ok(Response::from_status(StatusCode::METHOD_NOT_ALLOWED)
                .with_header(header::ALLOW, "GET, POST")
                .with_body_text_plain("This method is not allowed\n"))
        }
        _ => (),
    };

    let config = load_config();
    let season = config.season.clone().unwrap_or_else(nba::current_season);
    let nba = FastlyNba::new(season);

    let method = req.get_method().clone();
    let path = req.get_path().to_string();

    match (method, path.as_str()) {
        (Method::GET, "/") => {
            let schedule = upcoming_games(&nba, &config);
            Ok(html(render::games_page(&schedule.games)))
        }
        (Method::GET, "/games.json") => {
            let schedule = upcoming_games(&nba, &config);
            json(&GamesBody {
                games: &schedule.games,
            })
        }
        (Method::POST, "/predict" | "/predict.json") => {
            let as_json = path.ends_with(".json");
            let selected = form::selected_indices(&req.take_body_bytes());
            let schedule = upcoming_games(&nba, &config);
            let strategy = config.strategy.build(&config);
            let predictions =
                predict(selected.as_slice(), &schedule.games, strategy.as_ref(), &nba);
            info!(
                "Predicted {} of {} selected games with {}",
                predictions.len(),
                selected.len(),
                strategy.kind().as_str()
            );

            if as_json {
                json(&PredictionsBody {
                    strategy: strategy.kind().as_str(),
                    predictions: &predictions,
                })
            } else {
                Ok(html(render::predictions_page(&predictions)))
            }
        }
        _ => Ok(Response::from_status(StatusCode::NOT_FOUND)
            .with_header("Access-Control-Allow-Origin", "*")
            .with_body_text_plain("The page you requested could not be found\n")),
    }
}
