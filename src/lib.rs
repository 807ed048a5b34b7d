pub mod board;
pub mod game;

pub use board::{Board, CastlingRights, Color, Difficulty, GameStatus, Move, Piece, Square};
pub use game::{DrawReason, GameSession, Outcome, PLY_CAP};
