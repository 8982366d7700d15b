//! Pattern names and emitted labels.

use std::fmt;

use chess::Piece;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    Smothered,
    Suffocation,
    Pillsburys,
    BackRank,
    Scholars,
    Anastasias,
    Arabian,
    Epaulette,
    BlindSwine,
    SwallowsTail,
    Corner,
    Morphys,
    Opera,
    Mayets,
    Damianos,
    MaxLanges,
    DamianosBishop,
    Lollis,
    Box,
    QueenAndKing,
    Grecos,
    Dovetail,
    DovetailBishop,
    KillBox,
    Triangle,
    Balestra,
    Hook,
    Anderssens,
    Ladder,
    DoubleBishop,
    Blackburnes,
    KingAndTwoBishops,
    BishopAndKnight,
}

impl Pattern {
    pub const ALL: [Pattern; 33] = [
        Pattern::Smothered,
        Pattern::Suffocation,
        Pattern::Pillsburys,
        Pattern::BackRank,
        Pattern::Scholars,
        Pattern::Anastasias,
        Pattern::Arabian,
        Pattern::Epaulette,
        Pattern::BlindSwine,
        Pattern::SwallowsTail,
        Pattern::Corner,
        Pattern::Morphys,
        Pattern::Opera,
        Pattern::Mayets,
        Pattern::Damianos,
        Pattern::MaxLanges,
        Pattern::DamianosBishop,
        Pattern::Lollis,
        Pattern::Box,
        Pattern::QueenAndKing,
        Pattern::Grecos,
        Pattern::Dovetail,
        Pattern::DovetailBishop,
        Pattern::KillBox,
        Pattern::Triangle,
        Pattern::Balestra,
        Pattern::Hook,
        Pattern::Anderssens,
        Pattern::Ladder,
        Pattern::DoubleBishop,
        Pattern::Blackburnes,
        Pattern::KingAndTwoBishops,
        Pattern::BishopAndKnight,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Pattern::Smothered => "Smothered mate",
            Pattern::Suffocation => "Suffocation mate",
            Pattern::Pillsburys => "Pillsbury's mate",
            Pattern::BackRank => "Back-rank mate",
            Pattern::Scholars => "Scholar's mate",
            Pattern::Anastasias => "Anastasia's mate",
            Pattern::Arabian => "Arabian mate",
            Pattern::Epaulette => "Epaulette mate",
            Pattern::BlindSwine => "Blind swine mate",
            Pattern::SwallowsTail => "Swallow's tail mate",
            Pattern::Corner => "Corner mate",
            Pattern::Morphys => "Morphy's mate",
            Pattern::Opera => "Opera mate",
            Pattern::Mayets => "Mayet's mate",
            Pattern::Damianos => "Damiano's mate",
            Pattern::MaxLanges => "Max Lange's mate",
            Pattern::DamianosBishop => "Damiano's bishop mate",
            Pattern::Lollis => "Lolli's mate",
            Pattern::Box => "Box mate",
            Pattern::QueenAndKing => "Queen and king mate",
            Pattern::Grecos => "Greco's mate",
            Pattern::Dovetail => "Dovetail mate",
            Pattern::DovetailBishop => "Dovetail bishop mate",
            Pattern::KillBox => "Kill box mate",
            Pattern::Triangle => "Triangle mate",
            Pattern::Balestra => "Balestra mate",
            Pattern::Hook => "Hook mate",
            Pattern::Anderssens => "Anderssen's mate",
            Pattern::Ladder => "Ladder mate",
            Pattern::DoubleBishop => "Double bishop mate",
            Pattern::Blackburnes => "Blackburne's mate",
            Pattern::KingAndTwoBishops => "King and two bishops mate",
            Pattern::BishopAndKnight => "Bishop and knight mate",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One emission of a classification pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MateLabel {
    /// Generic announcement naming the checking piece.
    Delivered(Piece),
    Pattern(Pattern),
    DoubleCheckmate,
}

pub fn piece_name(piece: Piece) -> &'static str {
    match piece {
        Piece::Pawn => "Pawn",
        Piece::Knight => "Knight",
        Piece::Bishop => "Bishop",
        Piece::Rook => "Rook",
        Piece::Queen => "Queen",
        Piece::King => "King",
    }
}

impl fmt::Display for MateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MateLabel::Delivered(piece) => write!(f, "{} delivered mate", piece_name(*piece)),
            MateLabel::Pattern(pattern) => f.write_str(pattern.label()),
            MateLabel::DoubleCheckmate => f.write_str("Double checkmate"),
        }
    }
}
