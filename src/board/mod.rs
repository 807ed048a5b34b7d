//! Chess board representation and game logic.
//!
//! Uses a plain 8x8 mailbox board with full rule support: castling,
//! en passant, and queen promotion. Legality is verified by speculative
//! apply and rollback rather than precomputed pin detection.
//!
//! # Example
//! ```
//! use chess_ai::board::{Board, Color};
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attacks;
mod error;
mod eval;
mod fen;
mod legal;
mod make_move;
mod movegen;
mod san;
mod select;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{FenError, MoveError, MoveParseError, SquareError};
pub use legal::GameStatus;
pub use select::Difficulty;
pub use state::{Board, Snapshot};
pub use types::{CastlingRights, Color, Move, Piece, Square};
