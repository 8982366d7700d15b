//! Batch classification: one result per game, failures recorded, never fatal.

use std::collections::BTreeMap;
use mate_patterns::{classify, Classification, MateError, MatedPosition};
use serde::Serialize;
use tracing::{info, warn};

use crate::source::TerminalGame;

#[derive(Debug, Clone, Serialize)]
pub struct TaggedGame {
    pub id: String,
    pub fen: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct BatchReport {
    pub games: Vec<TaggedGame>,
    /// How often each label was emitted across the batch.
    pub label_counts: BTreeMap<String, usize>,
}

impl BatchReport {
    pub fn tagged(&self) -> usize {
        self.games.iter().filter(|g| g.error.is_none()).count()
    }

    pub fn failed(&self) -> usize {
        self.games.len() - self.tagged()
    }
}

/// Classify one terminal position, using the recorded winner when known.
pub fn tag_game(game: &TerminalGame) -> Result<Classification, MateError> {
    let position = MatedPosition::from_fen(&game.fen)?;
    let position = match game.winner {
        Some(winner) => MatedPosition::with_winner(*position.board(), winner),
        None => position,
    };
    classify(&position)
}

pub fn tag_games(games: &[TerminalGame]) -> BatchReport {
    let mut report = BatchReport::default();

    for game in games {
        let tagged = match tag_game(game) {
            Ok(classification) => {
                let labels = classification.label_strings();
                for label in &labels {
                    *report.label_counts.entry(label.clone()).or_insert(0) += 1;
                }
                TaggedGame {
                    id: game.id.clone(),
                    fen: game.fen.clone(),
                    labels,
                    error: None,
                }
            }
            Err(e) => {
                warn!(game_id = %game.id, error = %e, "Failed to classify game");
                TaggedGame {
                    id: game.id.clone(),
                    fen: game.fen.clone(),
                    labels: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        };
        report.games.push(tagged);
    }

    info!(
        tagged = report.tagged(),
        failed = report.failed(),
        "Batch classified"
    );
    report
}
