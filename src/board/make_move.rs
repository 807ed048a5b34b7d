//! Move application: validation, board mutation, and the special moves
//! (castling rook shift, en passant removal, queen promotion).

use super::error::MoveError;
use super::state::Board;
use super::types::{Color, Piece, Square};

impl Board {
    /// Validate and apply a move for the side to move.
    ///
    /// Rejection never mutates the board. On success the board is updated
    /// (including castling rights, en passant target, king cache, and
    /// promotion), the side to move flips, and any captured piece is
    /// returned so callers can display or score it.
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
    ) -> Result<Option<(Color, Piece)>, MoveError> {
        // Coordinates are checked before any board read.
        if !from.on_board() {
            return Err(MoveError::OffBoard {
                rank: from.0,
                file: from.1,
            });
        }
        if !to.on_board() {
            return Err(MoveError::OffBoard {
                rank: to.0,
                file: to.1,
            });
        }

        let (color, _) = self.piece_at(from).ok_or(MoveError::EmptySquare { at: from })?;
        if color != self.side_to_move {
            return Err(MoveError::WrongSide {
                at: from,
                expected: self.side_to_move,
            });
        }

        if !self.pseudo_destinations(from).contains(&to) {
            return Err(MoveError::IllegalDestination { from, to });
        }

        let saved = self.snapshot();
        let captured = self.apply_unchecked(from, to);
        if self.in_check(color) {
            self.restore(&saved);
            return Err(MoveError::SelfCheck { from, to });
        }

        self.side_to_move = color.opponent();
        Ok(captured)
    }

    /// Apply a pseudo-legal move without validation or side flip.
    ///
    /// This is the single mutation path shared by real application, the
    /// legality filter, and selector scoring, so a simulated move behaves
    /// exactly like a played one. The caller owns snapshot/restore.
    pub(crate) fn apply_unchecked(&mut self, from: Square, to: Square) -> Option<(Color, Piece)> {
        let (color, piece) = match self.clear_square(from) {
            Some(occupant) => occupant,
            None => return None,
        };

        let mut captured = self.piece_at(to);

        // En passant removes the passed pawn from the origin rank, not the
        // destination square.
        if piece == Piece::Pawn && Some(to) == self.en_passant_target {
            captured = self.clear_square(Square(from.rank(), to.file()));
        }

        self.set_piece(to, color, piece);

        if piece == Piece::King {
            // A two-file king move is a castle; bring the rook across.
            let back_rank = color.back_rank();
            if from.file() == 4 && to.file() == 6 {
                let _ = self.clear_square(Square(back_rank, 7));
                self.set_piece(Square(back_rank, 5), color, Piece::Rook);
            } else if from.file() == 4 && to.file() == 2 {
                let _ = self.clear_square(Square(back_rank, 0));
                self.set_piece(Square(back_rank, 3), color, Piece::Rook);
            }
            self.castling.remove_all(color);
        }

        if piece == Piece::Rook && from.rank() == color.back_rank() {
            if from.file() == 0 {
                self.castling.remove(color, false);
            } else if from.file() == 7 {
                self.castling.remove(color, true);
            }
        }

        // Capturing a rook on its home corner revokes that right too.
        if let Some((victim_color, Piece::Rook)) = captured {
            if to.rank() == victim_color.back_rank() {
                if to.file() == 0 {
                    self.castling.remove(victim_color, false);
                } else if to.file() == 7 {
                    self.castling.remove(victim_color, true);
                }
            }
        }

        // The en passant window lasts exactly one ply.
        self.en_passant_target = None;
        if piece == Piece::Pawn && from.rank().abs_diff(to.rank()) == 2 {
            self.en_passant_target = Some(Square((from.rank() + to.rank()) / 2, from.file()));
        }

        // Promotion is forced: a pawn on the far rank becomes a queen.
        if piece == Piece::Pawn && to.rank() == color.pawn_promotion_rank() {
            self.set_piece(to, color, Piece::Queen);
        }

        captured
    }
}
