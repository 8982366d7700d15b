//! Registry of pattern checks keyed by (checking piece, king zone).
//!
//! Adding a pattern means writing its predicate and registering an
//! [`Entry`] in the right bucket. Bucket order is evaluation order.

use chess::Piece;

use crate::error::QueryError;
use crate::pattern::Pattern;
use crate::predicates::{blocking, fixed, support, MateContext};
use crate::zone::Zone;

pub type Predicate = fn(&MateContext) -> Result<bool, QueryError>;

#[derive(Clone, Copy)]
pub enum Check {
    Run(Predicate),
    /// Named pattern without a signature yet; never matches.
    NotYetImplemented,
}

impl Check {
    pub fn evaluate(self, ctx: &MateContext) -> Result<bool, QueryError> {
        match self {
            Check::Run(predicate) => predicate(ctx),
            Check::NotYetImplemented => Ok(false),
        }
    }
}

#[derive(Clone, Copy)]
pub struct Entry {
    pub pattern: Pattern,
    pub check: Check,
}

const fn run(pattern: Pattern, predicate: Predicate) -> Entry {
    Entry {
        pattern,
        check: Check::Run(predicate),
    }
}

const fn todo(pattern: Pattern) -> Entry {
    Entry {
        pattern,
        check: Check::NotYetImplemented,
    }
}

static QUEEN_CORNER: [Entry; 7] = [
    run(Pattern::BackRank, blocking::back_rank_corner),
    run(Pattern::DamianosBishop, support::damianos_bishop_corner),
    run(Pattern::Lollis, support::lollis_corner),
    run(Pattern::QueenAndKing, support::queen_and_king_corner),
    run(Pattern::Box, support::box_corner),
    run(Pattern::Grecos, support::grecos),
    run(Pattern::Ladder, support::ladder_corner),
];

static ROOK_CORNER: [Entry; 8] = [
    run(Pattern::BackRank, blocking::back_rank_corner),
    run(Pattern::Anderssens, fixed::anderssens),
    run(Pattern::Anastasias, support::anastasias_corner),
    run(Pattern::Arabian, support::arabian),
    run(Pattern::Mayets, support::mayets_corner),
    run(Pattern::Box, support::box_corner),
    run(Pattern::Grecos, support::grecos),
    run(Pattern::Ladder, support::ladder_corner),
];

static BISHOP_CORNER: [Entry; 2] = [
    run(Pattern::Morphys, support::morphys),
    todo(Pattern::BishopAndKnight),
];

static KNIGHT_CORNER: [Entry; 3] = [
    run(Pattern::Smothered, blocking::smothered),
    run(Pattern::Suffocation, blocking::suffocation_corner),
    run(Pattern::Corner, support::corner_mate),
];

static QUEEN_CENTER: [Entry; 4] = [
    run(Pattern::SwallowsTail, blocking::swallows_tail),
    run(Pattern::Dovetail, blocking::dovetail),
    run(Pattern::DovetailBishop, support::dovetail_bishop),
    run(Pattern::Triangle, support::triangle_center),
];

static ROOK_CENTER: [Entry; 2] = [
    run(Pattern::Hook, support::hook_center),
    run(Pattern::BlindSwine, blocking::blind_swine),
];

static QUEEN_EDGE: [Entry; 11] = [
    run(Pattern::Scholars, fixed::scholars),
    run(Pattern::BackRank, blocking::back_rank_edge),
    run(Pattern::Epaulette, blocking::epaulette),
    run(Pattern::DamianosBishop, support::damianos_bishop_edge),
    run(Pattern::Lollis, support::lollis_edge),
    run(Pattern::Damianos, support::damianos),
    run(Pattern::MaxLanges, support::max_langes),
    run(Pattern::QueenAndKing, support::queen_and_king_edge),
    run(Pattern::Box, support::box_edge),
    run(Pattern::Ladder, support::ladder_edge),
    run(Pattern::Triangle, support::triangle_edge),
];

static ROOK_EDGE: [Entry; 11] = [
    run(Pattern::Ladder, support::ladder_edge),
    run(Pattern::Pillsburys, support::pillsburys),
    run(Pattern::BlindSwine, blocking::blind_swine),
    run(Pattern::BackRank, blocking::back_rank_edge),
    run(Pattern::Anastasias, support::anastasias_edge),
    run(Pattern::Opera, support::opera),
    run(Pattern::Mayets, support::mayets_edge),
    run(Pattern::KillBox, support::kill_box),
    run(Pattern::Box, support::box_edge),
    run(Pattern::Anderssens, fixed::anderssens),
    run(Pattern::Hook, support::hook_edge),
];

static BISHOP_EDGE: [Entry; 5] = [
    run(Pattern::Balestra, support::balestra),
    todo(Pattern::DoubleBishop),
    todo(Pattern::Blackburnes),
    todo(Pattern::KingAndTwoBishops),
    todo(Pattern::BishopAndKnight),
];

static KNIGHT_EDGE: [Entry; 2] = [
    run(Pattern::Smothered, blocking::smothered),
    run(Pattern::Suffocation, blocking::suffocation_edge),
];

/// Checks that apply when `piece` gives mate to a king in `zone`, or `None`
/// when nothing beyond the generic announcement is known.
pub fn bucket(piece: Piece, zone: Zone) -> Option<&'static [Entry]> {
    let entries: &'static [Entry] = match (piece, zone) {
        (Piece::Queen, Zone::Corner) => &QUEEN_CORNER,
        (Piece::Rook, Zone::Corner) => &ROOK_CORNER,
        (Piece::Bishop, Zone::Corner) => &BISHOP_CORNER,
        (Piece::Knight, Zone::Corner) => &KNIGHT_CORNER,
        (Piece::Queen, Zone::Center) => &QUEEN_CENTER,
        (Piece::Rook, Zone::Center) => &ROOK_CENTER,
        (Piece::Queen, Zone::Edge) => &QUEEN_EDGE,
        (Piece::Rook, Zone::Edge) => &ROOK_EDGE,
        (Piece::Bishop, Zone::Edge) => &BISHOP_EDGE,
        (Piece::Knight, Zone::Edge) => &KNIGHT_EDGE,
        _ => return None,
    };
    Some(entries)
}

/// Every registered (piece, zone, entry) triple, in bucket order.
pub fn all_entries() -> impl Iterator<Item = (Piece, Zone, &'static Entry)> {
    const PIECES: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];
    const ZONES: [Zone; 3] = [Zone::Corner, Zone::Edge, Zone::Center];

    PIECES.into_iter().flat_map(|piece| {
        ZONES.into_iter().flat_map(move |zone| {
            bucket(piece, zone)
                .unwrap_or(&[])
                .iter()
                .map(move |entry| (piece, zone, entry))
        })
    })
}
