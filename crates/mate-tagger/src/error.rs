//! Tagger error types

use chess_core::ReplayError;
use mate_patterns::MateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaggerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Lichess error: {0}")]
    Lichess(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Replay error: {0}")]
    Replay(#[from] ReplayError),

    #[error("Classification error: {0}")]
    Classify(#[from] MateError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
