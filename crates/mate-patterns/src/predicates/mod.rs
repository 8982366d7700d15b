//! Pattern predicates.
//!
//! Each predicate answers one question about a mated position and is a pure
//! function of the [`MateContext`]. A query error (empty square, missing
//! neighbour) means the predicate does not apply; the engine treats it as
//! "no match".

pub mod blocking;
pub mod fixed;
pub mod support;

use chess::{BitBoard, Color, Piece, Square, EMPTY};

use crate::board::{contains, BoardQuery};
use crate::error::QueryError;

/// Everything a predicate may look at for one checking piece.
pub struct MateContext<'a> {
    pub board: &'a dyn BoardQuery,
    /// Ordered neighbours of the mated king, see [`crate::zone`].
    pub adjacent: &'a [Square],
    pub checker: Square,
    pub winner: Color,
    /// Square of the mated king.
    pub king: Square,
}

impl<'a> MateContext<'a> {
    pub fn loser(&self) -> Color {
        !self.winner
    }

    /// Neighbour at a fixed position of the adjacency list.
    pub fn at(&self, index: usize) -> Result<Square, QueryError> {
        self.adjacent
            .get(index)
            .copied()
            .ok_or(QueryError::NoNeighbour(index))
    }

    /// Occupied by one of the mated side's own pieces.
    pub fn is_blocked(&self, square: Square) -> bool {
        self.board.color_at(square) == Some(self.loser())
    }

    pub fn blocked_at(&self, index: usize) -> Result<bool, QueryError> {
        Ok(self.is_blocked(self.at(index)?))
    }

    pub fn checker_is(&self, index: usize) -> Result<bool, QueryError> {
        Ok(self.checker == self.at(index)?)
    }

    pub fn checker_piece(&self) -> Result<Piece, QueryError> {
        self.board
            .piece_at(self.checker)
            .ok_or(QueryError::EmptySquare(self.checker))
    }

    /// A winner's piece of the given kind stands on `square`.
    pub fn is_winner_piece(&self, square: Square, piece: Piece) -> bool {
        self.board.piece_at(square) == Some(piece) && self.board.color_at(square) == Some(self.winner)
    }

    /// Winner's pieces of one kind that attack `target`.
    pub fn supporters(&self, target: Square, piece: Piece) -> BitBoard {
        self.board
            .attackers_of(self.winner, target)
            .filter(|&sq| self.board.piece_at(sq) == Some(piece))
            .fold(EMPTY, |acc, sq| acc | BitBoard::from_square(sq))
    }

    pub fn has_supporter(&self, target: Square, piece: Piece) -> bool {
        self.supporters(target, piece) != EMPTY
    }

    /// Squares the checking piece covers, looking through the mated king.
    pub fn checker_coverage(&self) -> Result<BitBoard, QueryError> {
        self.board.attacks_through(self.checker, self.king)
    }

    pub fn winner_king(&self) -> Result<Square, QueryError> {
        self.board.king_square(self.winner)
    }
}

/// Every square in `squares` is a member of `set`.
pub(crate) fn covers_all(set: BitBoard, squares: &[Square]) -> bool {
    squares.iter().all(|&sq| contains(set, sq))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::str::FromStr;

    use chess::{Board, Square};

    use super::MateContext;
    use crate::board::{BoardQuery, MatedPosition};
    use crate::error::QueryError;
    use crate::zone::classify_zone;

    /// Run a predicate against the single checker of a FEN position.
    pub fn check_fen(
        fen: &str,
        predicate: impl Fn(&MateContext) -> Result<bool, QueryError>,
    ) -> Result<bool, QueryError> {
        let pos = MatedPosition::new(Board::from_str(fen).unwrap());
        let king = pos.king_square(!pos.winner()).unwrap();
        let checker = pos.checking_squares().to_square();
        check_with(&pos, king, checker, predicate)
    }

    pub fn check_with(
        pos: &MatedPosition,
        king: Square,
        checker: Square,
        predicate: impl Fn(&MateContext) -> Result<bool, QueryError>,
    ) -> Result<bool, QueryError> {
        let kz = classify_zone(king);
        let ctx = MateContext {
            board: pos,
            adjacent: &kz.adjacent,
            checker,
            winner: pos.winner(),
            king,
        };
        predicate(&ctx)
    }

    pub fn matches(fen: &str, predicate: fn(&MateContext) -> Result<bool, QueryError>) -> bool {
        check_fen(fen, predicate).unwrap_or(false)
    }
}
