use thiserror::Error;

/// A move list that cannot be replayed from the standard start position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    #[error("invalid SAN '{san}' at ply {ply}")]
    InvalidSan { ply: usize, san: String },

    #[error("illegal move '{san}' at ply {ply}")]
    IllegalMove { ply: usize, san: String },
}
