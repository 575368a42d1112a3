//! HTML pages served by the Compute service.

use crate::models::{Game, Prediction};
use std::fmt::Write;

const STYLE: &str = "body{font-family:sans-serif;max-width:40em;margin:2em auto}li{margin:.4em 0}";

/// Selectable list of games; each checkbox submits its position as `game_index`.
pub fn games_page(games: &[Game]) -> String {
    let mut body = String::new();
    body.push_str("<h1>Upcoming games</h1>\n");

    if games.is_empty() {
        body.push_str("<p>No games scheduled.</p>\n");
        return page("Upcoming games", &body);
    }

    body.push_str("<form method=\"post\" action=\"/predict\">\n<ul>\n");
    for (index, game) in games.iter().enumerate() {
        let _ = writeln!(
            body,
            "<li><label><input type=\"checkbox\" name=\"game_index\" value=\"{}\"> {} @ {} <small>{}</small></label></li>",
            index,
            escape(&game.away_team),
            escape(&game.home_team),
            escape(&game.date),
        );
    }
    body.push_str("</ul>\n<button type=\"submit\">Predict totals</button>\n</form>\n");

    page("Upcoming games", &body)
}

pub fn predictions_page(predictions: &[Prediction]) -> String {
    let mut body = String::new();
    body.push_str("<h1>Predicted totals</h1>\n");

    if predictions.is_empty() {
        body.push_str("<p>No games selected.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for prediction in predictions {
            let _ = writeln!(
                body,
                "<li>{}: <strong>{}</strong></li>",
                escape(&prediction.matchup),
                escape(&prediction.total.to_string()),
            );
        }
        body.push_str("</ul>\n");
    }
    body.push_str("<p><a href=\"/\">Back to games</a></p>\n");

    page("Predicted totals", &body)
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        STYLE,
        body
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
