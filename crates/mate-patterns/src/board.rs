//! Board query contract used by the pattern predicates.
//!
//! The classifier never re-derives chess rules; it asks a [`BoardQuery`]
//! for piece placement, attack sets and checkers. [`MatedPosition`] answers
//! those questions for a `chess::Board` in the same terms python-chess uses
//! (`attacks`, `attackers`, `square_distance`).

use std::str::FromStr;

use chess::{
    BitBoard, Board, BoardBuilder, Color, File, Piece, Rank, Square, ALL_COLORS, ALL_SQUARES, EMPTY,
};

use crate::error::{MateError, QueryError};

/// Read-only view of one terminal position.
pub trait BoardQuery {
    fn piece_at(&self, square: Square) -> Option<Piece>;

    fn color_at(&self, square: Square) -> Option<Color>;

    /// Squares holding `color` pieces that attack `square`.
    fn attackers_of(&self, color: Color, square: Square) -> BitBoard;

    /// Squares attacked by the piece on `square`.
    fn attacks_from(&self, square: Square) -> Result<BitBoard, QueryError>;

    /// Like [`BoardQuery::attacks_from`], but slider rays pass through
    /// `transparent` as if it were empty.
    fn attacks_through(&self, square: Square, transparent: Square)
        -> Result<BitBoard, QueryError>;

    fn king_square(&self, color: Color) -> Result<Square, QueryError>;

    /// Squares of the pieces giving check to the side to move.
    fn checking_squares(&self) -> BitBoard;

    /// The side that delivered mate.
    fn winner(&self) -> Color;
}

/// A terminal position backed by `chess::Board`.
#[derive(Clone, Copy, Debug)]
pub struct MatedPosition {
    board: Board,
    winner: Color,
}

impl MatedPosition {
    /// The mated side is the side to move, so the winner is the other one.
    pub fn new(board: Board) -> Self {
        let winner = !board.side_to_move();
        Self { board, winner }
    }

    /// Use the winner recorded in the game result instead of deriving it.
    pub fn with_winner(board: Board, winner: Color) -> Self {
        Self { board, winner }
    }

    pub fn from_fen(fen: &str) -> Result<Self, MateError> {
        Ok(Self::new(parse_board(fen)?))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    fn attacks_with_occupancy(
        &self,
        square: Square,
        occupied: BitBoard,
    ) -> Result<BitBoard, QueryError> {
        let piece = self
            .board
            .piece_on(square)
            .ok_or(QueryError::EmptySquare(square))?;

        let attacks = match piece {
            Piece::Pawn => {
                let color = self
                    .board
                    .color_on(square)
                    .ok_or(QueryError::EmptySquare(square))?;
                pawn_attacks(square, color)
            }
            Piece::Knight => chess::get_knight_moves(square),
            Piece::King => chess::get_king_moves(square),
            Piece::Bishop => chess::get_bishop_moves(square, occupied),
            Piece::Rook => chess::get_rook_moves(square, occupied),
            Piece::Queen => {
                chess::get_bishop_moves(square, occupied) | chess::get_rook_moves(square, occupied)
            }
        };
        Ok(attacks)
    }
}

/// Parse a FEN into a `chess::Board`.
///
/// `Board::from_str` looks up king attacks before its sanity checks run, so a
/// FEN without exactly one king per side is rejected here first.
pub fn parse_board(fen: &str) -> Result<Board, MateError> {
    let invalid = |e: chess::Error| MateError::InvalidFen(e.to_string());
    let builder = BoardBuilder::from_str(fen).map_err(invalid)?;

    for color in ALL_COLORS {
        let kings = ALL_SQUARES
            .iter()
            .filter(|&&sq| builder[sq] == Some((Piece::King, color)))
            .count();
        if kings != 1 {
            return Err(MateError::InvalidFen(format!(
                "expected one {color:?} king, found {kings}"
            )));
        }
    }

    Board::try_from(&builder).map_err(invalid)
}

impl BoardQuery for MatedPosition {
    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_on(square)
    }

    fn color_at(&self, square: Square) -> Option<Color> {
        self.board.color_on(square)
    }

    fn attackers_of(&self, color: Color, square: Square) -> BitBoard {
        attackers(&self.board, color, square)
    }

    fn attacks_from(&self, square: Square) -> Result<BitBoard, QueryError> {
        self.attacks_with_occupancy(square, *self.board.combined())
    }

    fn attacks_through(
        &self,
        square: Square,
        transparent: Square,
    ) -> Result<BitBoard, QueryError> {
        let occupied = *self.board.combined() & !BitBoard::from_square(transparent);
        self.attacks_with_occupancy(square, occupied)
    }

    fn king_square(&self, color: Color) -> Result<Square, QueryError> {
        let king_bb = *self.board.pieces(Piece::King) & *self.board.color_combined(color);
        if king_bb == EMPTY {
            return Err(QueryError::MissingKing(color));
        }
        Ok(king_bb.to_square())
    }

    fn checking_squares(&self) -> BitBoard {
        *self.board.checkers()
    }

    fn winner(&self) -> Color {
        self.winner
    }
}

/// Pawn attack squares (just the diagonal attacks, not pushes)
pub fn pawn_attacks(square: Square, color: Color) -> BitBoard {
    let forward = match color {
        Color::White => 1,
        Color::Black => -1,
    };

    [-1, 1]
        .iter()
        .filter_map(|&df| offset(square, df, forward))
        .fold(EMPTY, |acc, sq| acc | BitBoard::from_square(sq))
}

/// Get all pieces of a given color that attack a square
/// Equivalent of python-chess board.attackers(color, square)
pub fn attackers(board: &Board, color: Color, square: Square) -> BitBoard {
    let occupied = *board.combined();
    let color_pieces = *board.color_combined(color);

    let mut result = EMPTY;

    // Pawns: reverse lookup from the target square with the opposite color
    result |= pawn_attacks(square, !color) & *board.pieces(Piece::Pawn) & color_pieces;

    result |= chess::get_knight_moves(square) & *board.pieces(Piece::Knight) & color_pieces;
    result |= chess::get_king_moves(square) & *board.pieces(Piece::King) & color_pieces;

    let diagonal = *board.pieces(Piece::Bishop) | *board.pieces(Piece::Queen);
    result |= chess::get_bishop_moves(square, occupied) & diagonal & color_pieces;

    let straight = *board.pieces(Piece::Rook) | *board.pieces(Piece::Queen);
    result |= chess::get_rook_moves(square, occupied) & straight & color_pieces;

    result
}

/// Square shifted by a file/rank delta, or `None` if that leaves the board.
pub fn offset(square: Square, file_delta: i8, rank_delta: i8) -> Option<Square> {
    let file = file_of(square) as i8 + file_delta;
    let rank = rank_of(square) as i8 + rank_delta;
    if !(0..8).contains(&file) || !(0..8).contains(&rank) {
        return None;
    }
    Some(Square::make_square(
        Rank::from_index(rank as usize),
        File::from_index(file as usize),
    ))
}

pub fn file_of(square: Square) -> u8 {
    square.get_file().to_index() as u8
}

pub fn rank_of(square: Square) -> u8 {
    square.get_rank().to_index() as u8
}

/// Distance between two squares (Chebyshev distance)
pub fn square_distance(s1: Square, s2: Square) -> u32 {
    let df = (file_of(s1) as i32 - file_of(s2) as i32).unsigned_abs();
    let dr = (rank_of(s1) as i32 - rank_of(s2) as i32).unsigned_abs();
    df.max(dr)
}

/// Is `square` a member of `set`?
pub fn contains(set: BitBoard, square: Square) -> bool {
    set & BitBoard::from_square(square) != EMPTY
}
