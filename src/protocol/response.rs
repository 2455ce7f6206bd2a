//! JSON move responses

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    search::SearchReport,
    tictactoe::Coord,
};

/// Response body: `{"move": "<row><col>"}`, optionally with the root scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    #[serde(rename = "move")]
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<Vec<i64>>,
}

impl MoveResponse {
    pub fn from_report(report: &SearchReport, include_scores: bool) -> Self {
        Self {
            position: encode_coord(report.chosen),
            scores: include_scores.then(|| report.score_values()),
        }
    }

    /// The move as a coordinate
    pub fn coord(&self) -> Result<Coord> {
        decode_coord(&self.position)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// `(1, 2)` becomes `"12"`
pub fn encode_coord(coord: Coord) -> String {
    format!("{}{}", coord.row, coord.col)
}

pub fn decode_coord(text: &str) -> Result<Coord> {
    let digits: Vec<usize> = text
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as usize)
        .collect();
    match digits.as_slice() {
        [row, col] if text.chars().count() == 2 => Ok(Coord::new(*row, *col)),
        _ => Err(Error::query(format!("move '{text}' is not <row><col>"))),
    }
}
