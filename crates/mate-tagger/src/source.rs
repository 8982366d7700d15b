//! Where terminal positions come from: a Lichess account, a PGN file or
//! FEN strings given directly.

use std::path::PathBuf;

use chess::Color;
use chess_core::{pgn, replay};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::TaggerConfig;
use crate::error::TaggerError;
use crate::lichess::LichessClient;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameSource {
    Lichess {
        username: String,
        max_games: Option<usize>,
    },
    PgnFile(PathBuf),
    Fens(Vec<String>),
}

/// Final position of one game, ready for classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminalGame {
    pub id: String,
    pub fen: String,
    /// Winner from the game record; `None` means "the side not to move".
    #[serde(skip)]
    pub winner: Option<Color>,
}

impl GameSource {
    pub async fn load(&self, config: &TaggerConfig) -> Result<Vec<TerminalGame>, TaggerError> {
        match self {
            GameSource::Lichess {
                username,
                max_games,
            } => {
                let client = LichessClient::new(config)?;
                let games = client.fetch_mated_games(username, *max_games).await?;
                Ok(games
                    .into_iter()
                    .filter_map(|g| replay_to_terminal(g.id, &g.moves, g.winner))
                    .collect())
            }
            GameSource::PgnFile(path) => {
                let text = tokio::fs::read_to_string(path).await?;
                let games = games_from_pgn(&text);
                info!(path = %path.display(), games = games.len(), "Loaded mated games from PGN");
                Ok(games)
            }
            GameSource::Fens(fens) => Ok(fens
                .iter()
                .enumerate()
                .map(|(i, fen)| TerminalGame {
                    id: format!("fen-{}", i + 1),
                    fen: fen.clone(),
                    winner: None,
                })
                .collect()),
        }
    }
}

/// Standard games ending in mate from a (multi-game) PGN text.
pub fn games_from_pgn(text: &str) -> Vec<TerminalGame> {
    pgn::split_games(text)
        .iter()
        .enumerate()
        .filter_map(|(i, raw)| {
            let game = pgn::parse_pgn(raw)?;
            if !game.is_standard() || !game.ends_in_mate() {
                return None;
            }
            let id = game
                .metadata
                .id
                .clone()
                .unwrap_or_else(|| format!("game-{}", i + 1));
            let winner = game.winner().map(|c| match c {
                shakmaty::Color::White => Color::White,
                shakmaty::Color::Black => Color::Black,
            });
            replay_to_terminal(id, &game.moves, winner)
        })
        .collect()
}

fn replay_to_terminal(id: String, moves: &[String], winner: Option<Color>) -> Option<TerminalGame> {
    match replay::final_fen(moves) {
        Ok(fen) => Some(TerminalGame { id, fen, winner }),
        Err(e) => {
            warn!(game_id = %id, error = %e, "Skipping game that does not replay");
            None
        }
    }
}
