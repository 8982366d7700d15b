//! Patterns decided by which of the winner's pieces guard the checker or
//! cover the king's flight squares.

use chess::{BitBoard, Piece, Square, EMPTY};

use crate::board::{contains, file_of, rank_of, square_distance};
use crate::error::QueryError;
use crate::predicates::{covers_all, MateContext};

/// Winner's queens and rooks attacking `target`.
fn heavy_attackers(ctx: &MateContext, target: Square) -> BitBoard {
    ctx.supporters(target, Piece::Queen) | ctx.supporters(target, Piece::Rook)
}

/// Some supporter of `target` of the given kind also attacks every square
/// in `also`.
fn supporter_covering(
    ctx: &MateContext,
    target: Square,
    piece: Piece,
    also: &[Square],
) -> Result<bool, QueryError> {
    for supporter in ctx.supporters(target, piece) {
        if covers_all(ctx.board.attacks_from(supporter)?, also) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Some supporter of the checker of the given kind stands `distance`
/// squares from `from`.
fn supporter_at_distance(ctx: &MateContext, piece: Piece, from: Square, distance: u32) -> bool {
    ctx.supporters(ctx.checker, piece)
        .any(|sq| square_distance(sq, from) == distance)
}

/// Rook on the edge, at most two flight squares left and a bishop
/// covering one of them.
pub fn pillsburys(ctx: &MateContext) -> Result<bool, QueryError> {
    let free: Vec<Square> = ctx
        .adjacent
        .iter()
        .copied()
        .filter(|&sq| !ctx.is_blocked(sq))
        .collect();
    if free.is_empty() || free.len() > 2 {
        return Ok(false);
    }
    Ok(free.iter().any(|&sq| ctx.has_supporter(sq, Piece::Bishop)))
}

/// A knight takes both diagonal flight squares next to the king.
pub fn anastasias_edge(ctx: &MateContext) -> Result<bool, QueryError> {
    let (a, b) = (ctx.at(1)?, ctx.at(3)?);
    Ok(ctx.supporters(a, Piece::Knight) & ctx.supporters(b, Piece::Knight) != EMPTY)
}

pub fn anastasias_corner(ctx: &MateContext) -> Result<bool, QueryError> {
    Ok(ctx.blocked_at(1)? && ctx.has_supporter(ctx.at(0)?, Piece::Knight))
}

/// Rook next to the cornered king, guarded by a knight two squares away.
pub fn arabian(ctx: &MateContext) -> Result<bool, QueryError> {
    Ok(supporter_at_distance(ctx, Piece::Knight, ctx.king, 2))
}

fn corner_with_heavy_piece(ctx: &MateContext, checker: Piece) -> Result<bool, QueryError> {
    if ctx.checker_piece()? != checker || !ctx.blocked_at(2)? {
        return Ok(false);
    }
    Ok(ctx
        .adjacent
        .iter()
        .skip(1)
        .any(|&sq| heavy_attackers(ctx, sq) != EMPTY))
}

/// Knight mates in the corner while a rook or queen holds the file.
pub fn corner_mate(ctx: &MateContext) -> Result<bool, QueryError> {
    corner_with_heavy_piece(ctx, Piece::Knight)
}

/// Bishop mates in the corner while a rook or queen holds the file.
pub fn morphys(ctx: &MateContext) -> Result<bool, QueryError> {
    corner_with_heavy_piece(ctx, Piece::Bishop)
}

/// Rook mates along the edge, guarded by a bishop, one escape blocked.
pub fn opera(ctx: &MateContext) -> Result<bool, QueryError> {
    let guarded = ctx.has_supporter(ctx.checker, Piece::Bishop);
    if ctx.checker_is(0)? {
        return Ok(ctx.blocked_at(3)? && guarded);
    }
    if ctx.checker_is(4)? {
        return Ok(ctx.blocked_at(1)? && guarded);
    }
    Ok(false)
}

pub fn mayets_edge(ctx: &MateContext) -> Result<bool, QueryError> {
    let guarded = ctx.has_supporter(ctx.checker, Piece::Bishop);
    if ctx.checker_is(0)? {
        return Ok((ctx.blocked_at(1)? || ctx.blocked_at(2)?) && guarded);
    }
    if ctx.checker_is(4)? {
        return Ok((ctx.blocked_at(2)? || ctx.blocked_at(3)?) && guarded);
    }
    Ok(false)
}

pub fn mayets_corner(ctx: &MateContext) -> Result<bool, QueryError> {
    Ok(ctx.checker_is(0)?
        && (ctx.blocked_at(2)? || ctx.blocked_at(1)?)
        && ctx.has_supporter(ctx.checker, Piece::Bishop))
}

/// Queen on a diagonal flight square, guarded by a piece that also covers
/// the diagonal square on the other side.
fn diagonal_queen_guard(ctx: &MateContext, guard: Piece) -> Result<bool, QueryError> {
    let opposite = if ctx.checker_is(1)? {
        ctx.at(3)?
    } else if ctx.checker_is(3)? {
        ctx.at(1)?
    } else {
        return Ok(false);
    };
    supporter_covering(ctx, ctx.checker, guard, &[opposite])
}

pub fn damianos(ctx: &MateContext) -> Result<bool, QueryError> {
    diagonal_queen_guard(ctx, Piece::Pawn)
}

pub fn max_langes(ctx: &MateContext) -> Result<bool, QueryError> {
    diagonal_queen_guard(ctx, Piece::Bishop)
}

/// Queen straight in front of the king, guarded from two squares away.
pub fn damianos_bishop_edge(ctx: &MateContext) -> Result<bool, QueryError> {
    Ok(ctx.checker_is(2)? && supporter_at_distance(ctx, Piece::Bishop, ctx.king, 2))
}

pub fn lollis_edge(ctx: &MateContext) -> Result<bool, QueryError> {
    Ok(ctx.checker_is(2)? && supporter_at_distance(ctx, Piece::Pawn, ctx.king, 2))
}

pub fn damianos_bishop_corner(ctx: &MateContext) -> Result<bool, QueryError> {
    Ok((ctx.checker_is(0)? || ctx.checker_is(2)?)
        && supporter_at_distance(ctx, Piece::Bishop, ctx.king, 2))
}

pub fn lollis_corner(ctx: &MateContext) -> Result<bool, QueryError> {
    if !(ctx.checker_is(0)? || ctx.checker_is(2)?) {
        return Ok(false);
    }
    let on_seventh = rank_of(ctx.checker) == 6 && rank_of(ctx.king) == 7;
    let on_second = rank_of(ctx.checker) == 1 && rank_of(ctx.king) == 0;
    Ok((on_seventh || on_second) && supporter_at_distance(ctx, Piece::Pawn, ctx.king, 2))
}

fn winner_king_covers(ctx: &MateContext, indices: &[usize]) -> Result<bool, QueryError> {
    let covered = ctx.board.attacks_from(ctx.winner_king()?)?;
    for &i in indices {
        if !contains(covered, ctx.at(i)?) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// The winner's king takes the three squares in front of the mated king.
pub fn box_edge(ctx: &MateContext) -> Result<bool, QueryError> {
    winner_king_covers(ctx, &[1, 2, 3])
}

pub fn box_corner(ctx: &MateContext) -> Result<bool, QueryError> {
    if matches!(file_of(ctx.checker), 0 | 7) {
        winner_king_covers(ctx, &[1, 2])
    } else if matches!(rank_of(ctx.checker), 0 | 7) {
        winner_king_covers(ctx, &[0, 1])
    } else {
        Ok(false)
    }
}

/// Queen mates right next to the king, guarded by the winner's king.
pub fn queen_and_king_edge(ctx: &MateContext) -> Result<bool, QueryError> {
    let guarded = square_distance(ctx.checker, ctx.winner_king()?) == 1;
    Ok(guarded && (ctx.checker_is(1)? || ctx.checker_is(2)?))
}

pub fn queen_and_king_corner(ctx: &MateContext) -> Result<bool, QueryError> {
    Ok(square_distance(ctx.checker, ctx.winner_king()?) == 1)
}

/// Heavy piece mates on the corner file or rank; a bishop takes the last
/// square while the king's own pawn blocks the diagonal.
pub fn grecos(ctx: &MateContext) -> Result<bool, QueryError> {
    if !ctx.blocked_at(1)? {
        return Ok(false);
    }
    let target = if matches!(file_of(ctx.checker), 0 | 7) {
        ctx.at(0)?
    } else if matches!(rank_of(ctx.checker), 0 | 7) {
        ctx.at(2)?
    } else {
        return Ok(false);
    };
    Ok(ctx.has_supporter(target, Piece::Bishop))
}

/// Queen diagonally adjacent while one bishop covers the two squares
/// beside it.
pub fn dovetail_bishop(ctx: &MateContext) -> Result<bool, QueryError> {
    // (checker position, covered, covered)
    const SHAPES: [(usize, usize, usize); 4] = [(7, 1, 3), (5, 1, 4), (0, 4, 6), (2, 6, 3)];
    for (checker, a, b) in SHAPES {
        if ctx.checker_is(checker)? {
            let targets = [ctx.at(a)?, ctx.at(b)?];
            return supporter_covering(ctx, targets[0], Piece::Bishop, &targets);
        }
    }
    Ok(false)
}

/// Rook on the edge next to the king, guarded diagonally by a queen that
/// also covers the far side.
pub fn kill_box(ctx: &MateContext) -> Result<bool, QueryError> {
    let (a, b) = if ctx.checker_is(0)? {
        (ctx.at(3)?, ctx.at(4)?)
    } else if ctx.checker_is(4)? {
        (ctx.at(0)?, ctx.at(1)?)
    } else {
        return Ok(false);
    };
    for queen in ctx.supporters(ctx.checker, Piece::Queen) {
        if square_distance(queen, ctx.checker) == 2
            && covers_all(ctx.board.attacks_from(queen)?, &[a, b])
        {
            return Ok(true);
        }
    }
    Ok(false)
}

fn rook_guard_two_away(ctx: &MateContext, also: &[Square]) -> Result<bool, QueryError> {
    for rook in ctx.supporters(ctx.checker, Piece::Rook) {
        if square_distance(rook, ctx.checker) == 2
            && covers_all(ctx.board.attacks_from(rook)?, also)
        {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Queen and rook form a triangle with the king on the edge.
pub fn triangle_edge(ctx: &MateContext) -> Result<bool, QueryError> {
    if ctx.checker_is(1)? {
        rook_guard_two_away(ctx, &[ctx.at(2)?, ctx.at(4)?])
    } else if ctx.checker_is(3)? {
        rook_guard_two_away(ctx, &[ctx.at(2)?, ctx.at(0)?])
    } else {
        Ok(false)
    }
}

/// The guarding rook stands next to the king, two squares from the queen.
pub fn triangle_center(ctx: &MateContext) -> Result<bool, QueryError> {
    let mut sides_blocked = false;
    for i in [1, 3, 4, 6] {
        sides_blocked |= ctx.blocked_at(i)?;
    }
    if !sides_blocked {
        return Ok(false);
    }
    Ok(ctx
        .supporters(ctx.checker, Piece::Rook)
        .into_iter()
        .any(|rook| square_distance(rook, ctx.checker) == 2 && ctx.adjacent.contains(&rook)))
}

/// Bishop checks from two squares away while another piece takes the
/// square in front of the king.
pub fn balestra(ctx: &MateContext) -> Result<bool, QueryError> {
    if square_distance(ctx.checker, ctx.king) != 2 {
        return Ok(false);
    }
    let front = ctx.at(2)?;
    Ok(ctx.board.attackers_of(ctx.winner, front).into_iter().any(|sq| {
        square_distance(sq, ctx.king) == 2 && square_distance(ctx.checker, sq) == 3
    }))
}

/// Rook next to the king, guarded by a knight that itself stands next to
/// the king.
pub fn hook_center(ctx: &MateContext) -> Result<bool, QueryError> {
    // (checker position, knight positions)
    const SHAPES: [(usize, [usize; 2]); 4] = [(1, [5, 7]), (3, [2, 7]), (6, [0, 2]), (4, [0, 5])];
    for (checker, knights) in SHAPES {
        if ctx.checker_is(checker)? {
            for i in knights {
                if ctx.is_winner_piece(ctx.at(i)?, Piece::Knight) {
                    return Ok(true);
                }
            }
            return Ok(false);
        }
    }
    Ok(false)
}

pub fn hook_edge(ctx: &MateContext) -> Result<bool, QueryError> {
    let knight = if ctx.checker_is(0)? {
        ctx.at(3)?
    } else if ctx.checker_is(4)? {
        ctx.at(1)?
    } else {
        return Ok(false);
    };
    Ok(ctx.is_winner_piece(knight, Piece::Knight))
}

/// A heavy piece on the adjacent file or rank covers the squares in front
/// of the king while the checker sweeps the edge.
pub fn ladder_edge(ctx: &MateContext) -> Result<bool, QueryError> {
    let coverage = ctx.checker_coverage()?;
    if !covers_all(coverage, &[ctx.at(0)?, ctx.at(4)?]) {
        return Ok(false);
    }

    let (cf, cr) = (file_of(ctx.checker), rank_of(ctx.checker));
    let front = ctx.adjacent.get(1..=3).ok_or(QueryError::NoNeighbour(3))?;
    for &sq in front {
        if sq == ctx.checker {
            continue;
        }
        let found = heavy_attackers(ctx, sq).any(|attacker| {
            let (af, ar) = (file_of(attacker), rank_of(attacker));
            (cf == 0 && af == 1) || (cf == 7 && af == 6) || (cr == 0 && ar == 1) || (cr == 7 && ar == 6)
        });
        if found {
            return Ok(true);
        }
    }
    Ok(false)
}

pub fn ladder_corner(ctx: &MateContext) -> Result<bool, QueryError> {
    let along_file = matches!(file_of(ctx.checker), 0 | 7);
    let along_rank = matches!(rank_of(ctx.checker), 0 | 7);
    let squares = if along_file {
        ctx.adjacent.get(..2)
    } else if along_rank {
        ctx.adjacent.get(1..)
    } else {
        return Ok(false);
    }
    .ok_or(QueryError::NoNeighbour(1))?;

    for &sq in squares {
        if sq == ctx.checker {
            continue;
        }
        let found = heavy_attackers(ctx, sq).any(|attacker| {
            if along_file {
                matches!(file_of(attacker), 1 | 6)
            } else {
                matches!(rank_of(attacker), 1 | 6)
            }
        });
        if found {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::test_support::matches;

    #[test]
    fn test_pillsburys() {
        // Rook g3 checks, bishop b2 covers g7
        assert!(matches("5rk1/5p1p/8/8/8/6R1/1B6/6K1 b - - 0 1", pillsburys));
        assert!(!matches("5rk1/5p1p/8/8/8/6R1/8/6K1 b - - 0 1", pillsburys));
    }

    #[test]
    fn test_anastasias_edge() {
        assert!(matches("8/4N1pk/8/8/8/8/8/6KR b - - 0 1", anastasias_edge));
        assert!(!matches("8/6pk/8/3N4/8/8/8/6KR b - - 0 1", anastasias_edge));
    }

    #[test]
    fn test_anastasias_corner() {
        assert!(matches("7k/4N1p1/8/8/8/8/8/6KR b - - 0 1", anastasias_corner));
        assert!(!matches("7k/6p1/8/8/8/8/8/6KR b - - 0 1", anastasias_corner));
    }

    #[test]
    fn test_arabian() {
        assert!(matches("7k/7R/5N2/8/8/8/8/6K1 b - - 0 1", arabian));
        // Knight g5 guards the rook from three squares away
        assert!(!matches("7k/7R/8/6N1/8/8/8/6K1 b - - 0 1", arabian));
    }

    #[test]
    fn test_corner_mate() {
        assert!(matches("7k/5N1p/8/8/8/8/8/6RK b - - 0 1", corner_mate));
        assert!(!matches("7k/5N1p/8/8/8/8/8/7K b - - 0 1", corner_mate));
    }

    #[test]
    fn test_morphys() {
        assert!(matches("7k/7p/5B2/8/8/8/8/6RK b - - 0 1", morphys));
        // Same shape with a knight checking
        assert!(!matches("7k/5N1p/8/8/8/8/8/6RK b - - 0 1", morphys));
    }

    #[test]
    fn test_opera() {
        assert!(matches("3Rk3/5p2/8/6B1/8/8/8/4K3 b - - 0 1", opera));
        assert!(!matches("3Rk3/8/8/6B1/8/8/8/4K3 b - - 0 1", opera));
    }

    #[test]
    fn test_mayets_edge() {
        assert!(matches("6kR/5p1p/8/8/8/8/1B6/6K1 b - - 0 1", mayets_edge));
        assert!(!matches("6kR/5p1p/8/8/8/8/8/6K1 b - - 0 1", mayets_edge));
    }

    #[test]
    fn test_mayets_corner() {
        assert!(matches("6Rk/7p/8/8/8/8/B7/6K1 b - - 0 1", mayets_corner));
        assert!(!matches("6Rk/7p/8/8/8/8/8/6K1 b - - 0 1", mayets_corner));
    }

    #[test]
    fn test_damianos_and_max_langes() {
        let pawn = "5rk1/7Q/6P1/8/8/8/8/6K1 b - - 0 1";
        let bishop = "5rk1/7Q/6B1/8/8/8/8/6K1 b - - 0 1";
        assert!(matches(pawn, damianos));
        assert!(!matches(pawn, max_langes));
        assert!(matches(bishop, max_langes));
        assert!(!matches(bishop, damianos));
    }

    #[test]
    fn test_scholars_is_not_max_langes() {
        // Bishop c4 guards f7 but cannot see d7
        assert!(!matches(
            "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4",
            max_langes
        ));
    }

    #[test]
    fn test_damianos_bishop_and_lollis_edge() {
        let bishop = "6k1/6Q1/7B/8/8/8/8/6K1 b - - 0 1";
        let pawn = "6k1/6Q1/5P2/8/8/8/8/6K1 b - - 0 1";
        assert!(matches(bishop, damianos_bishop_edge));
        assert!(!matches(bishop, lollis_edge));
        assert!(matches(pawn, lollis_edge));
        assert!(!matches(pawn, damianos_bishop_edge));
    }

    #[test]
    fn test_damianos_bishop_and_lollis_corner() {
        let bishop = "7k/7Q/6B1/8/8/8/8/6K1 b - - 0 1";
        let pawn = "7k/7Q/6P1/8/8/8/8/6K1 b - - 0 1";
        assert!(matches(bishop, damianos_bishop_corner));
        assert!(!matches(bishop, lollis_corner));
        assert!(matches(pawn, lollis_corner));
        assert!(!matches(pawn, damianos_bishop_corner));
    }

    #[test]
    fn test_box_edge() {
        assert!(matches("R3k3/8/4K3/8/8/8/8/8 b - - 0 1", box_edge));
        assert!(!matches("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1", box_edge));
    }

    #[test]
    fn test_box_corner() {
        assert!(matches("R6k/8/7K/8/8/8/8/8 b - - 0 1", box_corner));
        assert!(!matches("R6k/8/8/8/8/8/8/6K1 b - - 0 1", box_corner));
    }

    #[test]
    fn test_queen_and_king_edge() {
        assert!(matches("4k3/4Q3/4K3/8/8/8/8/8 b - - 0 1", queen_and_king_edge));
        assert!(!matches("4k3/4Q3/8/8/8/8/8/4K3 b - - 0 1", queen_and_king_edge));
    }

    #[test]
    fn test_queen_and_king_corner() {
        assert!(matches("7k/6Q1/5K2/8/8/8/8/8 b - - 0 1", queen_and_king_corner));
        assert!(!matches("7k/6Q1/8/8/8/8/8/B5K1 b - - 0 1", queen_and_king_corner));
    }

    #[test]
    fn test_grecos() {
        assert!(matches("7k/6p1/8/8/2B5/8/8/6KR b - - 0 1", grecos));
        assert!(!matches("7k/6p1/8/8/8/8/8/6KR b - - 0 1", grecos));
    }

    #[test]
    fn test_dovetail_bishop() {
        assert!(matches("8/5B2/8/4k3/5Q2/8/8/4K3 b - - 0 1", dovetail_bishop));
        assert!(!matches("8/8/4p3/3pk3/5Q2/6P1/8/4K3 b - - 0 1", dovetail_bishop));
    }

    #[test]
    fn test_kill_box() {
        assert!(matches("4kR2/8/3Q4/8/8/8/8/4K3 b - - 0 1", kill_box));
        assert!(!matches("4kR2/8/8/8/8/8/8/3QK3 b - - 0 1", kill_box));
    }

    #[test]
    fn test_triangle_edge() {
        assert!(matches("4k3/3R1Q2/8/8/8/8/8/4K3 b - - 0 1", triangle_edge));
        // Rook guards the queen from the far end of the rank
        assert!(!matches("4k3/R4Q2/8/8/8/8/8/4K3 b - - 0 1", triangle_edge));
    }

    #[test]
    fn test_triangle_center() {
        assert!(matches("8/8/3Q1R2/3pk3/8/8/8/4K3 b - - 0 1", triangle_center));
        assert!(!matches("8/8/3Q1R2/4k3/8/8/8/4K3 b - - 0 1", triangle_center));
        // Rook c6 guards the queen from outside the king's square
        assert!(!matches("8/8/2R1Q3/3pk3/8/8/8/4K3 b - - 0 1", triangle_center));
    }

    #[test]
    fn test_balestra() {
        assert!(matches("4k3/8/2B2Q2/8/8/8/8/4K3 b - - 0 1", balestra));
        assert!(!matches("4k3/8/2B5/5Q2/8/8/8/4K3 b - - 0 1", balestra));
    }

    #[test]
    fn test_hook_center() {
        assert!(matches("8/8/4R3/4k3/5N2/8/8/4K3 b - - 0 1", hook_center));
        // Knight g5 guards the rook from outside the king's square
        assert!(!matches("8/8/4R3/4k1N1/8/8/8/4K3 b - - 0 1", hook_center));
    }

    #[test]
    fn test_hook_edge() {
        assert!(matches("4kR2/3N4/8/8/8/8/8/4K3 b - - 0 1", hook_edge));
        assert!(!matches("4kR2/8/4N3/8/8/8/8/4K3 b - - 0 1", hook_edge));
    }

    #[test]
    fn test_ladder_edge() {
        assert!(matches("R3k3/1R6/8/8/8/8/8/4K3 b - - 0 1", ladder_edge));
        assert!(!matches("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1", ladder_edge));
    }

    #[test]
    fn test_ladder_corner() {
        assert!(matches("R6k/1R6/8/8/8/8/8/7K b - - 0 1", ladder_corner));
        assert!(!matches("R6k/8/8/8/8/8/8/7K b - - 0 1", ladder_corner));
    }
}
