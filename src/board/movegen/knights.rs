use super::super::attacks::KNIGHT_TARGETS;
use super::super::state::Board;
use super::super::types::{Color, Square};

impl Board {
    pub(crate) fn knight_destinations(&self, from: Square, color: Color) -> Vec<Square> {
        KNIGHT_TARGETS[from.as_index()]
            .iter()
            .copied()
            .filter(|&to| match self.piece_at(to) {
                Some((target_color, _)) => target_color != color,
                None => true,
            })
            .collect()
    }
}
