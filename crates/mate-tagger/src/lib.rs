//! Fetch finished games, replay them to the mating position and tag each
//! one with its checkmate patterns.

pub mod cli;
pub mod config;
pub mod error;
pub mod lichess;
pub mod report;
pub mod source;
pub mod tagger;

pub use config::{OutputFormat, TaggerConfig};
pub use error::TaggerError;
pub use source::{GameSource, TerminalGame};
pub use tagger::{tag_game, tag_games, BatchReport, TaggedGame};
