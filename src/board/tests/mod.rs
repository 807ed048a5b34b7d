//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Pseudo-legal generation per piece type
//! - `legality.rs` - Self-check filtering, terminal states, special moves
//! - `eval.rs` - Evaluation determinism and symmetry
//! - `select.rs` - Difficulty-tiered move selection
//! - `fen.rs` - FEN import/export
//! - `san.rs` - Algebraic notation formatting
//! - `proptest.rs` - Property-based tests over random playouts

mod movegen;
mod proptest;
mod san;

use crate::board::Board;

/// Parse a FEN that is known to be valid in a test.
pub(crate) fn board_from(fen: &str) -> Board {
    match Board::try_from_fen(fen) {
        Ok(board) => board,
        Err(err) => panic!("bad test FEN '{fen}': {err}"),
    }
}
