//! Board state: the 8x8 grid plus the bookkeeping that rides along with it.

use std::fmt;

use super::types::{CastlingRights, Color, Piece, Square};

/// The full mutable game position.
///
/// The board is a single owned value. Code that needs to try a move out
/// (the legality filter, the move selector) takes a [`Snapshot`] first and
/// restores it on every exit path, so a `Board` is never left mid-simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [[Option<(Color, Piece)>; 8]; 8],
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    // Cached king locations, kept in sync by every mutation path.
    pub(crate) king_squares: [Square; 2],
}

/// Saved copy of everything a speculative move can touch: board cells,
/// king-location cache, castling rights, and the en passant target.
///
/// The side to move is deliberately absent; simulation never changes it.
#[derive(Clone, Debug)]
pub struct Snapshot {
    squares: [[Option<(Color, Piece)>; 8]; 8],
    castling: CastlingRights,
    en_passant_target: Option<Square>,
    king_squares: [Square; 2],
}

impl Board {
    /// Standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, file), Color::White, *piece);
            board.set_piece(Square(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square(6, file), Color::Black, Piece::Pawn);
            board.set_piece(Square(7, file), Color::Black, *piece);
        }
        board.castling = CastlingRights::all();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant_target: None,
            king_squares: [Square(0, 4), Square(7, 4)],
        }
    }

    /// The side whose turn it is.
    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Current castling rights.
    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// The square a pawn may capture onto en passant, if any.
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Contents of a square.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.rank()][sq.file()]
    }

    #[inline]
    #[must_use]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.rank()][sq.file()].is_none()
    }

    /// Cached location of a color's king.
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.rank()][sq.file()] = Some((color, piece));
        if piece == Piece::King {
            self.king_squares[color.index()] = sq;
        }
    }

    pub(crate) fn clear_square(&mut self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.rank()][sq.file()].take()
    }

    /// Capture the state a speculative move may mutate.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            squares: self.squares,
            castling: self.castling,
            en_passant_target: self.en_passant_target,
            king_squares: self.king_squares,
        }
    }

    /// Restore a previously taken snapshot, undoing any simulated move.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.squares = snapshot.squares;
        self.castling = snapshot.castling;
        self.en_passant_target = snapshot.en_passant_target;
        self.king_squares = snapshot.king_squares;
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    /// ASCII diagram, rank 8 at the top, FEN piece letters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                match self.squares[rank][file] {
                    Some((color, piece)) => write!(f, " {}", piece.to_fen_char(color))?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
