//! Replay SAN move lists to the final position with shakmaty.

use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::{Chess, EnPassantMode, Position};

use crate::error::ReplayError;

/// Move numbers ("12." / "12...") and result markers carry no move.
fn is_move_token(token: &str) -> bool {
    if token.is_empty() || matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*") {
        return false;
    }
    !token.trim_end_matches('.').chars().all(|c| c.is_ascii_digit())
}

/// Play every move from the standard start position.
pub fn final_position(moves: &[String]) -> Result<Chess, ReplayError> {
    let mut pos = Chess::default();
    let mut ply = 0;

    for san_str in moves {
        let san_str = san_str.trim();
        if !is_move_token(san_str) {
            continue;
        }
        ply += 1;

        let san: San = san_str.parse().map_err(|_| ReplayError::InvalidSan {
            ply,
            san: san_str.to_string(),
        })?;

        let mv = san.to_move(&pos).map_err(|_| ReplayError::IllegalMove {
            ply,
            san: san_str.to_string(),
        })?;

        pos.play_unchecked(mv);
    }

    Ok(pos)
}

/// FEN of the position after the last move.
pub fn final_fen(moves: &[String]) -> Result<String, ReplayError> {
    let pos = final_position(moves)?;
    Ok(Fen::from_position(&pos, EnPassantMode::Legal).to_string())
}

/// Split a space-separated move string, as found in Lichess exports.
pub fn split_moves(moves: &str) -> Vec<String> {
    moves.split_whitespace().map(str::to_string).collect()
}
