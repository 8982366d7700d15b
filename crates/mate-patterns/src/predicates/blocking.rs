//! Patterns decided by which neighbours of the king are blocked by its own
//! pieces and where the checking piece stands.

use crate::board::{file_of, rank_of, square_distance};
use crate::error::QueryError;
use crate::predicates::{covers_all, MateContext};

use chess::Piece;

fn free_squares(ctx: &MateContext) -> Vec<chess::Square> {
    ctx.adjacent
        .iter()
        .copied()
        .filter(|&sq| !ctx.is_blocked(sq))
        .collect()
}

/// Every neighbour is occupied by the king's own pieces.
pub fn smothered(ctx: &MateContext) -> Result<bool, QueryError> {
    Ok(ctx.adjacent.iter().all(|&sq| ctx.is_blocked(sq)))
}

/// Knight mate on the edge: one free square, or two free squares covered by
/// the same attackers.
pub fn suffocation_edge(ctx: &MateContext) -> Result<bool, QueryError> {
    match free_squares(ctx).as_slice() {
        [_] => Ok(true),
        [a, b] => Ok(ctx.board.attackers_of(ctx.winner, *a) == ctx.board.attackers_of(ctx.winner, *b)),
        _ => Ok(false),
    }
}

/// Knight mate in the corner with exactly one free neighbour.
pub fn suffocation_corner(ctx: &MateContext) -> Result<bool, QueryError> {
    Ok(free_squares(ctx).len() == 1)
}

/// The three squares in front of the king are its own pieces and the
/// checker covers both squares along the edge.
pub fn back_rank_edge(ctx: &MateContext) -> Result<bool, QueryError> {
    for i in 1..=3 {
        if !ctx.blocked_at(i)? {
            return Ok(false);
        }
    }
    let coverage = ctx.checker_coverage()?;
    Ok(covers_all(coverage, &[ctx.at(0)?, ctx.at(4)?]))
}

pub fn back_rank_corner(ctx: &MateContext) -> Result<bool, QueryError> {
    if !(ctx.blocked_at(1)? && ctx.blocked_at(2)?) {
        return Ok(false);
    }
    let coverage = ctx.checker_coverage()?;
    Ok(covers_all(coverage, &[ctx.at(0)?]))
}

/// King flanked on both sides along the edge, queen two squares away.
pub fn epaulette(ctx: &MateContext) -> Result<bool, QueryError> {
    Ok(ctx.blocked_at(0)?
        && ctx.blocked_at(4)?
        && square_distance(ctx.king, ctx.checker) == 2)
}

/// Queen adjacent on a file or rank, both diagonal squares behind the king
/// blocked.
pub fn swallows_tail(ctx: &MateContext) -> Result<bool, QueryError> {
    // (blocked, blocked, checker position)
    const SHAPES: [(usize, usize, usize); 4] = [(0, 2, 6), (2, 7, 3), (7, 5, 1), (5, 0, 4)];
    for (a, b, checker) in SHAPES {
        if ctx.blocked_at(a)? && ctx.blocked_at(b)? && ctx.checker_is(checker)? {
            return Ok(square_distance(ctx.king, ctx.checker) == 1);
        }
    }
    Ok(false)
}

/// Queen diagonally adjacent, the two squares on the far side blocked.
pub fn dovetail(ctx: &MateContext) -> Result<bool, QueryError> {
    const SHAPES: [(usize, usize, usize); 4] = [(1, 3, 7), (1, 4, 5), (4, 6, 0), (6, 3, 2)];
    for (a, b, checker) in SHAPES {
        if ctx.blocked_at(a)? && ctx.blocked_at(b)? && ctx.checker_is(checker)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Exactly one neighbour blocked and a second rook on the opposite side
/// lined up with the checker.
pub fn blind_swine(ctx: &MateContext) -> Result<bool, QueryError> {
    let blocked = ctx.adjacent.iter().filter(|&&sq| ctx.is_blocked(sq)).count();
    if blocked != 1 {
        return Ok(false);
    }

    let partner = if ctx.blocked_at(4)? {
        ctx.at(1)?
    } else if ctx.blocked_at(0)? {
        ctx.at(3)?
    } else {
        return Ok(false);
    };

    Ok(ctx.is_winner_piece(partner, Piece::Rook)
        && (file_of(ctx.checker) == file_of(partner) || rank_of(ctx.checker) == rank_of(partner)))
}
