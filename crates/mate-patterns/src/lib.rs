//! Checkmate pattern classification.
//!
//! Given a position that is already checkmate, name the classical mating
//! patterns it shows (smothered, back-rank, Anastasia's, ...). The work is
//! split into the board query contract, the zone of the mated king, the
//! predicate catalog and the engine that dispatches over it.

pub mod board;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod pattern;
pub mod predicates;
pub mod zone;

pub use board::{BoardQuery, MatedPosition};
pub use engine::{classify, classify_fen, Classification};
pub use error::{MateError, QueryError};
pub use pattern::{MateLabel, Pattern};
pub use zone::{classify_zone, KingZone, Zone};
