//! Patterns pinned to absolute squares rather than to the king's zone.

use chess::{Color, Piece, Square};

use crate::board::rank_of;
use crate::error::QueryError;
use crate::predicates::MateContext;

/// Queen takes on f7 (f2) backed by the bishop from c4 (c5).
pub fn scholars(ctx: &MateContext) -> Result<bool, QueryError> {
    let (queen_square, bishop_square) = match ctx.winner {
        Color::White => (Square::F7, Square::C4),
        Color::Black => (Square::F2, Square::C5),
    };
    Ok(ctx.checker == queen_square && ctx.is_winner_piece(bishop_square, Piece::Bishop))
}

/// Rook mates along the back rank, guarded by a pawn standing right in
/// front of the king.
pub fn anderssens(ctx: &MateContext) -> Result<bool, QueryError> {
    let pawn_square = ctx.at(2)?;
    if !ctx.is_winner_piece(pawn_square, Piece::Pawn) {
        return Ok(false);
    }
    if !matches!(rank_of(ctx.checker), 0 | 7) {
        return Ok(false);
    }
    // Corners have no fifth neighbour
    Ok(ctx.checker == ctx.at(0)? || ctx.adjacent.get(4) == Some(&ctx.checker))
}
