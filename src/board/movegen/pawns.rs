use super::super::state::Board;
use super::super::types::{Color, Square};

impl Board {
    pub(crate) fn pawn_destinations(&self, from: Square, color: Color) -> Vec<Square> {
        let mut moves = Vec::new();
        let dir = color.pawn_direction();

        // Forward advances onto empty squares only.
        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                moves.push(forward);

                if from.rank() == color.pawn_start_rank() {
                    if let Some(double) = from.offset(2 * dir, 0) {
                        if self.is_empty(double) {
                            moves.push(double);
                        }
                    }
                }
            }
        }

        // Diagonal captures, including onto the (empty) en passant target.
        for df in [-1, 1] {
            let target = match from.offset(dir, df) {
                Some(sq) => sq,
                None => continue,
            };
            match self.piece_at(target) {
                Some((target_color, _)) if target_color != color => moves.push(target),
                Some(_) => {}
                None => {
                    if Some(target) == self.en_passant_target {
                        moves.push(target);
                    }
                }
            }
        }

        moves
    }
}
