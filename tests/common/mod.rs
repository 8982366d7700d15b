use std::str::FromStr;

use chess::Board;
use mate_patterns::{classify, MatedPosition};

/// Build a mated position from a FEN; the side to move is the loser.
pub fn position(fen: &str) -> MatedPosition {
    MatedPosition::new(Board::from_str(fen).expect("invalid FEN"))
}

/// Classify a FEN and return the emitted labels as strings.
pub fn labels(fen: &str) -> Vec<String> {
    classify(&position(fen))
        .unwrap_or_else(|e| panic!("classification failed for {fen}: {e}"))
        .label_strings()
}

/// Space-separated SAN moves, as in a Lichess export.
#[allow(dead_code)]
pub fn moves(san: &str) -> Vec<String> {
    san.split_whitespace().map(str::to_string).collect()
}
