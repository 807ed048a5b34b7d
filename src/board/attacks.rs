//! Attack oracle: is a given square attacked by a given side?
//!
//! This is the dominant cost of legality checking (a full-board scan per
//! query), so the fixed-offset jump patterns for knights and kings are
//! precomputed per square and shared with move generation.

use once_cell::sync::Lazy;

use super::state::Board;
use super::types::{Color, Piece, Square};

fn jump_targets(deltas: &[(isize, isize)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        deltas
            .iter()
            .filter_map(|&(dr, df)| from.offset(dr, df))
            .collect()
    })
}

/// Knight destinations per origin square, off-board targets already removed.
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| {
    jump_targets(&[
        (2, 1),
        (1, 2),
        (-1, 2),
        (-2, 1),
        (-2, -1),
        (-1, -2),
        (1, -2),
        (2, -1),
    ])
});

/// King destinations per origin square (castling excluded).
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| {
    jump_targets(&[
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ])
});

/// The squares a pawn of `color` on `from` threatens. Distinct from where it
/// may move: pawns attack diagonally only, never straight ahead.
pub(crate) fn pawn_attack_squares(from: Square, color: Color) -> impl Iterator<Item = Square> {
    let dir = color.pawn_direction();
    [-1, 1].into_iter().filter_map(move |df| from.offset(dir, df))
}

impl Board {
    /// Whether any piece of `by` attacks `target`.
    ///
    /// Scans all 64 squares and tests each attacker's attack pattern. Pawn
    /// attacks use the diagonal-only pattern; king attacks use the adjacency
    /// table so castling generation can consult the oracle without recursing.
    #[must_use]
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        for rank in 0..8 {
            for file in 0..8 {
                let from = Square(rank, file);
                let (color, piece) = match self.piece_at(from) {
                    Some(occupant) => occupant,
                    None => continue,
                };
                if color != by {
                    continue;
                }
                let hits = match piece {
                    Piece::Pawn => pawn_attack_squares(from, color).any(|sq| sq == target),
                    Piece::King => KING_TARGETS[from.as_index()].contains(&target),
                    _ => self.pseudo_destinations(from).contains(&target),
                };
                if hits {
                    return true;
                }
            }
        }
        false
    }

    /// Whether `color`'s king is currently attacked.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.opponent())
    }
}
