//! FEN import and export.
//!
//! Only the first four fields are interpreted (placement, side to move,
//! castling, en passant); halfmove and fullmove counters are accepted and
//! ignored since the engine does not track clocks.

use super::error::FenError;
use super::state::Board;
use super::types::{CastlingRights, Color, Piece, Square};

impl Board {
    /// Parse a board position from FEN notation.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut seen_kings = [false; 2];
        for (rank_idx, rank_str) in parts[0].split('/').enumerate() {
            if rank_idx >= 8 {
                return Err(FenError::TooManyRanks { ranks: rank_idx + 1 });
            }
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    // FEN lists rank 8 first.
                    board.set_piece(Square(7 - rank_idx, file), color, piece);
                    if piece == Piece::King {
                        seen_kings[color.index()] = true;
                    }
                    file += 1;
                }
            }
        }

        for color in [Color::White, Color::Black] {
            if !seen_kings[color.index()] {
                return Err(FenError::MissingKing { color });
            }
        }

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        board.castling = CastlingRights::none();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => board.castling.set(Color::White, true),
                    'Q' => board.castling.set(Color::White, false),
                    'k' => board.castling.set(Color::Black, true),
                    'q' => board.castling.set(Color::Black, false),
                    _ => return Err(FenError::InvalidCastling { char: c }),
                }
            }
        }

        board.en_passant_target = match parts[3] {
            "-" => None,
            sq => Some(sq.parse().map_err(|_| FenError::InvalidEnPassant {
                found: sq.to_string(),
            })?),
        };

        Ok(board)
    }

    /// Serialize the position to FEN. The halfmove clock and fullmove number
    /// are emitted as "0 1".
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for rank in (0..8).rev() {
            let mut empty_run = 0;
            for file in 0..8 {
                match self.piece_at(Square(rank, file)) {
                    Some((color, piece)) => {
                        if empty_run > 0 {
                            fen.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        fen.push(piece.to_fen_char(color));
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                fen.push_str(&empty_run.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        let mut any_right = false;
        for (color, kingside, c) in [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ] {
            if self.castling.has(color, kingside) {
                fen.push(c);
                any_right = true;
            }
        }
        if !any_right {
            fen.push('-');
        }

        fen.push(' ');
        match self.en_passant_target {
            Some(sq) => fen.push_str(&sq.to_string()),
            None => fen.push('-'),
        }

        fen.push_str(" 0 1");
        fen
    }
}
