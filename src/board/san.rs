//! Algebraic notation formatting.
//!
//! A pure formatting function over the pre-move board: the move is replayed
//! on a scratch copy to determine check and checkmate suffixes. Examples:
//! "e4", "Nf3", "Bxc6+", "O-O", "exd6", "a8=Q#".

use super::state::Board;
use super::types::{file_char, rank_char, Color, Move, Piece, Square};

impl Board {
    /// Format a move in algebraic notation. The move must be legal on this
    /// board; the board itself is not modified.
    #[must_use]
    pub fn move_to_san(&self, mv: Move) -> String {
        let (color, piece) = match self.piece_at(mv.from()) {
            Some(occupant) => occupant,
            None => return mv.to_string(),
        };

        let is_en_passant = piece == Piece::Pawn && Some(mv.to()) == self.en_passant_target;
        let is_capture = self.piece_at(mv.to()).is_some() || is_en_passant;

        let mut san = String::new();

        if piece == Piece::King && mv.from().file() == 4 && mv.to().file().abs_diff(4) == 2 {
            san.push_str(if mv.to().file() == 6 { "O-O" } else { "O-O-O" });
        } else {
            if piece != Piece::Pawn {
                san.push(piece.to_char().to_ascii_uppercase());
                let (needs_file, needs_rank) = self.disambiguation(mv, color, piece);
                if needs_file {
                    san.push(file_char(mv.from().file()));
                }
                if needs_rank {
                    san.push(rank_char(mv.from().rank()));
                }
            } else if is_capture {
                // Pawn captures always name the origin file.
                san.push(file_char(mv.from().file()));
            }

            if is_capture {
                san.push('x');
            }
            san.push(file_char(mv.to().file()));
            san.push(rank_char(mv.to().rank()));

            if piece == Piece::Pawn && mv.to().rank() == color.pawn_promotion_rank() {
                san.push_str("=Q");
            }
        }

        // Replay on a scratch copy for the check/checkmate suffix.
        let mut after = self.clone();
        let _ = after.apply_unchecked(mv.from(), mv.to());
        let opponent = color.opponent();
        if after.in_check(opponent) {
            if after.legal_moves(opponent).is_empty() {
                san.push('#');
            } else {
                san.push('+');
            }
        }

        san
    }

    /// Whether another piece of the same type and color could also reach the
    /// destination, forcing a file and/or rank qualifier.
    fn disambiguation(&self, mv: Move, color: Color, piece: Piece) -> (bool, bool) {
        let mut needs_file = false;
        let mut needs_rank = false;

        for rank in 0..8 {
            for file in 0..8 {
                let from = Square(rank, file);
                if from == mv.from() || self.piece_at(from) != Some((color, piece)) {
                    continue;
                }
                if self.pseudo_destinations(from).contains(&mv.to()) {
                    if from.file() != mv.from().file() {
                        needs_file = true;
                    } else {
                        needs_rank = true;
                    }
                }
            }
        }

        (needs_file, needs_rank)
    }
}
