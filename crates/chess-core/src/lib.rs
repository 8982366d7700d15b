//! Game data shared by the tagger: PGN reading and SAN replay.

pub mod error;
pub mod game_data;
pub mod pgn;
pub mod replay;

pub use error::ReplayError;
pub use game_data::{GameData, GameMetadata};
pub use pgn::{extract_header, parse_pgn, split_games};
pub use replay::{final_fen, final_position};
