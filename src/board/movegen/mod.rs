//! Pseudo-legal move generation, one submodule per piece family.
//!
//! Generation is a pure function of (board, origin): the piece's own color is
//! read from the square, so the same routines serve the side to move, the
//! attack oracle, and the legality filter. "Pseudo-legal" means the mover's
//! own king may still be left in check; the legality filter deals with that.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::state::Board;
use super::types::{Piece, Square};

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Board {
    /// Pseudo-legal destination squares for the piece on `from`.
    ///
    /// Returns an empty list for an empty square. Destinations are in a
    /// fixed, deterministic order for a given position.
    #[must_use]
    pub fn pseudo_destinations(&self, from: Square) -> Vec<Square> {
        let (color, piece) = match self.piece_at(from) {
            Some(occupant) => occupant,
            None => return Vec::new(),
        };
        match piece {
            Piece::Pawn => self.pawn_destinations(from, color),
            Piece::Knight => self.knight_destinations(from, color),
            Piece::Bishop => self.ray_destinations(from, color, &BISHOP_DIRECTIONS),
            Piece::Rook => self.ray_destinations(from, color, &ROOK_DIRECTIONS),
            Piece::Queen => self.ray_destinations(from, color, &QUEEN_DIRECTIONS),
            Piece::King => self.king_destinations(from, color),
        }
    }
}
