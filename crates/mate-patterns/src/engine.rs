//! Classification engine: one pass over one mated position.

use chess::{Piece, Square};
use tracing::debug;

use crate::board::{BoardQuery, MatedPosition};
use crate::catalog::bucket;
use crate::error::MateError;
use crate::pattern::{MateLabel, Pattern};
use crate::predicates::MateContext;
use crate::zone::{classify_zone, Zone};

/// Labels emitted for one position, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Zone of the mated king; `None` for a double check.
    pub zone: Option<Zone>,
    /// Piece that gave mate; `None` for a double check.
    pub checker: Option<Piece>,
    labels: Vec<MateLabel>,
}

impl Classification {
    fn double_check() -> Self {
        Self {
            zone: None,
            checker: None,
            labels: vec![MateLabel::DoubleCheckmate],
        }
    }

    pub fn labels(&self) -> &[MateLabel] {
        &self.labels
    }

    /// Named patterns only, without the delivered-mate announcement.
    pub fn patterns(&self) -> impl Iterator<Item = Pattern> + '_ {
        self.labels.iter().filter_map(|label| match label {
            MateLabel::Pattern(p) => Some(*p),
            _ => None,
        })
    }

    pub fn label_strings(&self) -> Vec<String> {
        self.labels.iter().map(ToString::to_string).collect()
    }

    pub fn is_double_check(&self) -> bool {
        self.labels == [MateLabel::DoubleCheckmate]
    }
}

impl IntoIterator for Classification {
    type Item = MateLabel;
    type IntoIter = std::vec::IntoIter<MateLabel>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.into_iter()
    }
}

/// Classify a mated position.
///
/// A double check yields only [`MateLabel::DoubleCheckmate`]. Otherwise the
/// first label announces the checking piece, followed by every pattern of
/// its (piece, zone) bucket that matches, in catalog order.
pub fn classify(board: &dyn BoardQuery) -> Result<Classification, MateError> {
    let winner = board.winner();
    let king = board.king_square(!winner)?;

    let checkers = board.checking_squares();
    match checkers.popcnt() {
        0 => return Err(MateError::NotInCheck),
        1 => {}
        _ => return Ok(Classification::double_check()),
    }

    let checker: Square = checkers.to_square();
    let piece = board
        .piece_at(checker)
        .ok_or(MateError::EmptyCheckingSquare(checker))?;

    let king_zone = classify_zone(king);
    let mut labels = vec![MateLabel::Delivered(piece)];

    if let Some(entries) = bucket(piece, king_zone.zone) {
        let ctx = MateContext {
            board,
            adjacent: &king_zone.adjacent,
            checker,
            winner,
            king,
        };

        for entry in entries {
            match entry.check.evaluate(&ctx) {
                Ok(true) => labels.push(MateLabel::Pattern(entry.pattern)),
                Ok(false) => {}
                Err(e) => {
                    debug!(pattern = %entry.pattern, error = %e, "Predicate not applicable");
                }
            }
        }
    }

    Ok(Classification {
        zone: Some(king_zone.zone),
        checker: Some(piece),
        labels,
    })
}

/// Parse a FEN and classify it, taking the side not to move as the winner.
pub fn classify_fen(fen: &str) -> Result<Classification, MateError> {
    let position = MatedPosition::from_fen(fen)?;
    classify(&position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryError;
    use chess::{BitBoard, Board, Color};

    fn labels(fen: &str) -> Vec<String> {
        classify_fen(fen).unwrap().label_strings()
    }

    #[test]
    fn test_corner_back_rank() {
        assert_eq!(
            labels("Q6k/6pp/8/8/8/8/8/6K1 b - - 0 1"),
            vec!["Queen delivered mate", "Back-rank mate"]
        );
    }

    #[test]
    fn test_double_check_short_circuits() {
        let result = classify_fen("3qkb2/3p1p2/3N4/8/8/8/8/4RK2 b - - 0 1").unwrap();
        assert!(result.is_double_check());
        assert_eq!(result.zone, None);
        assert_eq!(result.label_strings(), vec!["Double checkmate"]);
    }

    #[test]
    fn test_no_bucket_gives_announcement_only() {
        // Pawn g7 checks h8; pawns have no bucket
        assert_eq!(
            labels("6rk/6Pp/5K2/8/8/8/8/8 b - - 0 1"),
            vec!["Pawn delivered mate"]
        );
    }

    #[test]
    fn test_not_in_check() {
        let position = MatedPosition::new(Board::default());
        assert_eq!(classify(&position), Err(MateError::NotInCheck));
    }

    #[test]
    fn test_patterns_skip_announcement() {
        let result = classify_fen("6rk/5Npp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        assert_eq!(result.checker, Some(Piece::Knight));
        assert_eq!(result.zone, Some(Zone::Corner));
        assert_eq!(result.patterns().collect::<Vec<_>>(), vec![Pattern::Smothered]);
    }

    /// Board whose x-ray query always fails.
    struct NoXray(MatedPosition);

    impl BoardQuery for NoXray {
        fn piece_at(&self, square: Square) -> Option<Piece> {
            self.0.piece_at(square)
        }

        fn color_at(&self, square: Square) -> Option<Color> {
            self.0.color_at(square)
        }

        fn attackers_of(&self, color: Color, square: Square) -> BitBoard {
            self.0.attackers_of(color, square)
        }

        fn attacks_from(&self, square: Square) -> Result<BitBoard, QueryError> {
            self.0.attacks_from(square)
        }

        fn attacks_through(&self, square: Square, _: Square) -> Result<BitBoard, QueryError> {
            Err(QueryError::EmptySquare(square))
        }

        fn king_square(&self, color: Color) -> Result<Square, QueryError> {
            self.0.king_square(color)
        }

        fn checking_squares(&self) -> BitBoard {
            self.0.checking_squares()
        }

        fn winner(&self) -> Color {
            self.0.winner()
        }
    }

    #[test]
    fn test_failing_predicate_does_not_stop_the_rest() {
        let fen = "R3k3/3nbn2/4K3/8/8/8/8/8 b - - 0 1";
        assert_eq!(
            labels(fen),
            vec!["Rook delivered mate", "Back-rank mate", "Box mate"]
        );

        // Back-rank needs the x-ray query; Box does not
        let flaky = NoXray(MatedPosition::from_fen(fen).unwrap());
        assert_eq!(
            classify(&flaky).unwrap().label_strings(),
            vec!["Rook delivered mate", "Box mate"]
        );
    }

    #[test]
    fn test_idempotent() {
        let position = MatedPosition::from_fen(
            "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4",
        )
        .unwrap();
        let first = classify(&position).unwrap();
        let second = classify(&position).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_into_iter_yields_labels_in_order() {
        let result = classify_fen("Q6k/6pp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        let collected: Vec<MateLabel> = result.into_iter().collect();
        assert_eq!(
            collected,
            vec![
                MateLabel::Delivered(Piece::Queen),
                MateLabel::Pattern(Pattern::BackRank)
            ]
        );
    }
}
