//! Static position evaluation: material plus piece-square bonuses.
//!
//! Pure function of the board, positive favoring White. Rooks and queens
//! intentionally receive no positional table; material dominates for them
//! and the simplification keeps scoring cheap.

use super::state::Board;
use super::types::{Color, Piece, Square};

#[rustfmt::skip]
const PAWN_TABLE: [[i32; 8]; 8] = [
    [ 0,  0,  0,  0,  0,  0,  0,  0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [ 5,  5, 10, 25, 25, 10,  5,  5],
    [ 0,  0,  0, 20, 20,  0,  0,  0],
    [ 5, -5,-10,  0,  0,-10, -5,  5],
    [ 5, 10, 10,-20,-20, 10, 10,  5],
    [ 0,  0,  0,  0,  0,  0,  0,  0],
];

#[rustfmt::skip]
const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50,-40,-30,-30,-30,-30,-40,-50],
    [-40,-20,  0,  0,  0,  0,-20,-40],
    [-30,  0, 10, 15, 15, 10,  0,-30],
    [-30,  5, 15, 20, 20, 15,  5,-30],
    [-30,  0, 15, 20, 20, 15,  0,-30],
    [-30,  5, 10, 15, 15, 10,  5,-30],
    [-40,-20,  0,  5,  5,  0,-20,-40],
    [-50,-40,-30,-30,-30,-30,-40,-50],
];

#[rustfmt::skip]
const BISHOP_TABLE: [[i32; 8]; 8] = [
    [-20,-10,-10,-10,-10,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0,  5, 10, 10,  5,  0,-10],
    [-10,  5,  5, 10, 10,  5,  5,-10],
    [-10,  0, 10, 10, 10, 10,  0,-10],
    [-10, 10, 10, 10, 10, 10, 10,-10],
    [-10,  5,  0,  0,  0,  0,  5,-10],
    [-20,-10,-10,-10,-10,-10,-10,-20],
];

#[rustfmt::skip]
const KING_TABLE: [[i32; 8]; 8] = [
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-20,-30,-30,-40,-40,-30,-30,-20],
    [-10,-20,-20,-20,-20,-20,-20,-10],
    [ 20, 20,  0,  0,  0,  0, 20, 20],
    [ 20, 30, 10,  0,  0, 10, 30, 20],
];

fn positional_bonus(piece: Piece, color: Color, sq: Square) -> i32 {
    // White reads the table by rank, Black mirrored.
    let rank = match color {
        Color::White => sq.rank(),
        Color::Black => 7 - sq.rank(),
    };
    match piece {
        Piece::Pawn => PAWN_TABLE[rank][sq.file()],
        Piece::Knight => KNIGHT_TABLE[rank][sq.file()],
        Piece::Bishop => BISHOP_TABLE[rank][sq.file()],
        Piece::King => KING_TABLE[rank][sq.file()],
        Piece::Rook | Piece::Queen => 0,
    }
}

impl Board {
    /// Score the position in centipawns, positive favoring White.
    ///
    /// Identical boards always produce identical scores.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        let mut score = 0;
        for rank in 0..8 {
            for file in 0..8 {
                let sq = Square(rank, file);
                if let Some((color, piece)) = self.piece_at(sq) {
                    let sign = color.sign();
                    score += sign * piece.value();
                    score += sign * positional_bonus(piece, color, sq);
                }
            }
        }
        score
    }
}
