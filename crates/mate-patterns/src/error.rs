//! Error types for board queries and classification

use chess::{Color, Square};
use thiserror::Error;

/// A board query that cannot be answered for the given input.
///
/// Raised inside a single predicate and recovered there; it never reaches
/// the caller of [`crate::classify`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("no {0:?} king on the board")]
    MissingKing(Color),

    #[error("king has no neighbour at index {0}")]
    NoNeighbour(usize),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MateError {
    #[error("position is not a check: no checking pieces")]
    NotInCheck,

    #[error("checking square {0} holds no piece")]
    EmptyCheckingSquare(Square),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error(transparent)]
    Query(#[from] QueryError),
}
