//! Legality filter and terminal-state classification.
//!
//! Pseudo-legal moves become legal moves by brute force: snapshot, apply,
//! ask the attack oracle about the mover's king, restore. No pin or
//! discovered-check precomputation; this simple loop is the correctness
//! backbone of the whole engine.

use super::state::Board;
use super::types::{Color, Move, Square};

/// Status of the game from the perspective of the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The side to move is checkmated; the winner is the opponent.
    Checkmate { winner: Color },
    Stalemate,
}

impl Board {
    /// Legal destination squares for the piece on `from`, in generation order.
    #[must_use]
    pub fn legal_destinations(&mut self, from: Square) -> Vec<Square> {
        let color = match self.piece_at(from) {
            Some((color, _)) => color,
            None => return Vec::new(),
        };

        let mut legal = Vec::new();
        let saved = self.snapshot();
        for to in self.pseudo_destinations(from) {
            let _ = self.apply_unchecked(from, to);
            if !self.in_check(color) {
                legal.push(to);
            }
            self.restore(&saved);
        }
        legal
    }

    /// All fully legal moves for `side`, scanning squares in row-major order
    /// so the enumeration order is deterministic for a given position.
    #[must_use]
    pub fn legal_moves(&mut self, side: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for rank in 0..8 {
            for file in 0..8 {
                let from = Square(rank, file);
                match self.piece_at(from) {
                    Some((color, _)) if color == side => {}
                    _ => continue,
                }
                for to in self.legal_destinations(from) {
                    moves.push(Move::new(from, to));
                }
            }
        }
        moves
    }

    /// Whether `side` is checkmated: in check with no legal moves.
    #[must_use]
    pub fn is_checkmate(&mut self, side: Color) -> bool {
        self.in_check(side) && self.legal_moves(side).is_empty()
    }

    /// Whether `side` is stalemated: not in check, yet no legal moves.
    #[must_use]
    pub fn is_stalemate(&mut self, side: Color) -> bool {
        !self.in_check(side) && self.legal_moves(side).is_empty()
    }

    /// Classify the position for the side to move. Derived on demand from a
    /// full legality pass, never cached.
    #[must_use]
    pub fn status(&mut self, side: Color) -> GameStatus {
        if self.legal_moves(side).is_empty() {
            if self.in_check(side) {
                GameStatus::Checkmate {
                    winner: side.opponent(),
                }
            } else {
                GameStatus::Stalemate
            }
        } else {
            GameStatus::InProgress
        }
    }
}
