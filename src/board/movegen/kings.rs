use super::super::attacks::KING_TARGETS;
use super::super::state::Board;
use super::super::types::{Color, Piece, Square};

impl Board {
    pub(crate) fn king_destinations(&self, from: Square, color: Color) -> Vec<Square> {
        let mut moves: Vec<Square> = KING_TARGETS[from.as_index()]
            .iter()
            .copied()
            .filter(|&to| match self.piece_at(to) {
                Some((target_color, _)) => target_color != color,
                None => true,
            })
            .collect();

        // Castling, only from the untouched starting square.
        let back_rank = color.back_rank();
        if from == Square(back_rank, 4) {
            if self.can_castle(color, true) {
                moves.push(Square(back_rank, 6));
            }
            if self.can_castle(color, false) {
                moves.push(Square(back_rank, 2));
            }
        }

        moves
    }

    /// Castling legality: the right is still held, the rook is home, the
    /// squares between king and rook are empty, and neither the king's
    /// current square nor its transit and destination squares are attacked.
    fn can_castle(&self, color: Color, kingside: bool) -> bool {
        if !self.castling.has(color, kingside) {
            return false;
        }

        let back_rank = color.back_rank();
        let (rook_file, between_files, king_path_files): (usize, &[usize], &[usize]) = if kingside {
            (7, &[5, 6], &[4, 5, 6])
        } else {
            (0, &[1, 2, 3], &[4, 3, 2])
        };

        if self.piece_at(Square(back_rank, rook_file)) != Some((color, Piece::Rook)) {
            return false;
        }
        if between_files
            .iter()
            .any(|&file| !self.is_empty(Square(back_rank, file)))
        {
            return false;
        }

        let opponent = color.opponent();
        king_path_files
            .iter()
            .all(|&file| !self.is_square_attacked(Square(back_rank, file), opponent))
    }
}
