//! Zone classification of the mated king's square.
//!
//! The adjacency order is positional: predicates address "index 2" or
//! "index 4" of the list, so the tables below must not be reordered.
//!
//! ```text
//! Center         Edge (file 0)   Edge (file 7)   Edge (rank 0)   Edge (rank 7)
//!  0 1 2           0 1             3 4             1 2 3           4 K 0
//!  3 K 4           K 2             2 K             0 K 4           3 2 1
//!  5 6 7           4 3             1 0
//! ```

use chess::Square;
use serde::Serialize;

use crate::board::{file_of, offset, rank_of};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Zone {
    Corner,
    Edge,
    Center,
}

/// Zone of the king plus the ordered squares around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KingZone {
    pub zone: Zone,
    pub adjacent: Vec<Square>,
}

// Corner neighbours are fixed constants: along the rank, diagonal, along the file.
const CORNERS: [(Square, [Square; 3]); 4] = [
    (Square::A1, [Square::B1, Square::B2, Square::A2]),
    (Square::H1, [Square::G1, Square::G2, Square::H2]),
    (Square::A8, [Square::B8, Square::B7, Square::A7]),
    (Square::H8, [Square::G8, Square::G7, Square::H7]),
];

const LEFT_EDGE: [(i8, i8); 5] = [(0, 1), (1, 1), (1, 0), (1, -1), (0, -1)];
const RIGHT_EDGE: [(i8, i8); 5] = [(0, -1), (-1, -1), (-1, 0), (-1, 1), (0, 1)];
const BOTTOM_EDGE: [(i8, i8); 5] = [(-1, 0), (-1, 1), (0, 1), (1, 1), (1, 0)];
const TOP_EDGE: [(i8, i8); 5] = [(1, 0), (1, -1), (0, -1), (-1, -1), (-1, 0)];

const CENTER: [(i8, i8); 8] = [
    (-1, 1),
    (0, 1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub fn zone_of(king: Square) -> Zone {
    let on_file_edge = matches!(file_of(king), 0 | 7);
    let on_rank_edge = matches!(rank_of(king), 0 | 7);
    match (on_file_edge, on_rank_edge) {
        (true, true) => Zone::Corner,
        (false, false) => Zone::Center,
        _ => Zone::Edge,
    }
}

pub fn classify_zone(king: Square) -> KingZone {
    let zone = zone_of(king);
    let adjacent = match zone {
        Zone::Corner => CORNERS
            .iter()
            .find(|(corner, _)| *corner == king)
            .map(|(_, squares)| squares.to_vec())
            .unwrap_or_default(),
        Zone::Edge => neighbours(king, edge_offsets(king)),
        Zone::Center => neighbours(king, &CENTER),
    };
    KingZone { zone, adjacent }
}

fn edge_offsets(king: Square) -> &'static [(i8, i8)] {
    if file_of(king) == 0 {
        &LEFT_EDGE
    } else if file_of(king) == 7 {
        &RIGHT_EDGE
    } else if rank_of(king) == 0 {
        &BOTTOM_EDGE
    } else {
        &TOP_EDGE
    }
}

fn neighbours(king: Square, deltas: &[(i8, i8)]) -> Vec<Square> {
    deltas
        .iter()
        .filter_map(|&(df, dr)| offset(king, df, dr))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess::ALL_SQUARES;

    #[test]
    fn test_every_square_has_one_zone() {
        let mut counts = [0usize; 3];
        for king in ALL_SQUARES {
            let kz = classify_zone(king);
            let expected_len = match kz.zone {
                Zone::Corner => {
                    counts[0] += 1;
                    3
                }
                Zone::Edge => {
                    counts[1] += 1;
                    5
                }
                Zone::Center => {
                    counts[2] += 1;
                    8
                }
            };
            assert_eq!(kz.adjacent.len(), expected_len, "king on {king}");
        }
        assert_eq!(counts, [4, 24, 36]);
    }

    #[test]
    fn test_adjacent_squares_touch_the_king() {
        for king in ALL_SQUARES {
            for sq in classify_zone(king).adjacent {
                assert_eq!(crate::board::square_distance(king, sq), 1, "{king} -> {sq}");
            }
        }
    }

    #[test]
    fn test_corner_tables() {
        assert_eq!(
            classify_zone(Square::H8).adjacent,
            vec![Square::G8, Square::G7, Square::H7]
        );
        assert_eq!(
            classify_zone(Square::A1).adjacent,
            vec![Square::B1, Square::B2, Square::A2]
        );
    }

    #[test]
    fn test_edge_order() {
        // e8: f8, f7, e7, d7, d8
        assert_eq!(
            classify_zone(Square::E8).adjacent,
            vec![Square::F8, Square::F7, Square::E7, Square::D7, Square::D8]
        );
        // h5: h4, g4, g5, g6, h6
        assert_eq!(
            classify_zone(Square::H5).adjacent,
            vec![Square::H4, Square::G4, Square::G5, Square::G6, Square::H6]
        );
        // a2: a3, b3, b2, b1, a1
        assert_eq!(
            classify_zone(Square::A2).adjacent,
            vec![Square::A3, Square::B3, Square::B2, Square::B1, Square::A1]
        );
        // d1: c1, c2, d2, e2, e1
        assert_eq!(
            classify_zone(Square::D1).adjacent,
            vec![Square::C1, Square::C2, Square::D2, Square::E2, Square::E1]
        );
    }

    #[test]
    fn test_center_order() {
        assert_eq!(
            classify_zone(Square::B2).adjacent,
            vec![
                Square::A3,
                Square::B3,
                Square::C3,
                Square::A2,
                Square::C2,
                Square::A1,
                Square::B1,
                Square::C1,
            ]
        );
    }

    #[test]
    fn test_zone_ignores_board_contents() {
        assert_eq!(zone_of(Square::G1), Zone::Edge);
        assert_eq!(zone_of(Square::G2), Zone::Center);
        assert_eq!(zone_of(Square::A8), Zone::Corner);
    }
}
