use super::super::state::Board;
use super::super::types::{Color, Square};

impl Board {
    /// Ray-casting for bishops, rooks, and queens. Each ray extends until it
    /// hits a piece: inclusive of an enemy (capture), exclusive of a friend.
    pub(crate) fn ray_destinations(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
    ) -> Vec<Square> {
        let mut moves = Vec::new();

        for &(dr, df) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, df) {
                match self.piece_at(to) {
                    None => moves.push(to),
                    Some((target_color, _)) => {
                        if target_color != color {
                            moves.push(to);
                        }
                        break;
                    }
                }
                current = to;
            }
        }

        moves
    }
}
