//! Algebraic notation tests.

use super::board_from;
use crate::board::{Board, Move, Square};

fn san(board: &Board, from: (usize, usize), to: (usize, usize)) -> String {
    board.move_to_san(Move::new(Square(from.0, from.1), Square(to.0, to.1)))
}

#[test]
fn test_pawn_push_and_knight_move() {
    let board = Board::new();
    assert_eq!(san(&board, (1, 4), (3, 4)), "e4");
    assert_eq!(san(&board, (0, 6), (2, 5)), "Nf3");
}

#[test]
fn test_pawn_capture_names_origin_file() {
    let mut board = Board::new();
    board.apply_move(Square(1, 4), Square(3, 4)).unwrap(); // e4
    board.apply_move(Square(6, 3), Square(4, 3)).unwrap(); // d5
    assert_eq!(san(&board, (3, 4), (4, 3)), "exd5");
}

#[test]
fn test_en_passant_formats_as_capture() {
    let board = board_from("7k/8/8/K2pP3/8/8/8/8 w - d6 0 1");
    assert_eq!(san(&board, (4, 4), (5, 3)), "exd6");
}

#[test]
fn test_castling_notation() {
    let board = board_from("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    assert_eq!(san(&board, (0, 4), (0, 6)), "O-O");
    assert_eq!(san(&board, (0, 4), (0, 2)), "O-O-O");
}

#[test]
fn test_check_suffix() {
    let board = board_from("4k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
    assert_eq!(san(&board, (0, 0), (7, 0)), "Ra8+");
}

#[test]
fn test_checkmate_suffix() {
    let mut board = Board::new();
    board.apply_move(Square(1, 5), Square(2, 5)).unwrap(); // f3
    board.apply_move(Square(6, 4), Square(4, 4)).unwrap(); // e5
    board.apply_move(Square(1, 6), Square(3, 6)).unwrap(); // g4
    assert_eq!(san(&board, (7, 3), (3, 7)), "Qh4#");
}

#[test]
fn test_file_disambiguation() {
    let board = board_from("4k3/8/8/8/8/8/8/1N1K1N2 w - - 0 1");
    assert_eq!(san(&board, (0, 1), (1, 3)), "Nbd2");
}

#[test]
fn test_rank_disambiguation() {
    let board = board_from("4k3/8/8/R7/8/8/8/R3K3 w - - 0 1");
    assert_eq!(san(&board, (0, 0), (2, 0)), "R1a3");
}

#[test]
fn test_promotion_notation() {
    let board = board_from("8/P6k/8/8/8/8/8/K7 w - - 0 1");
    assert_eq!(san(&board, (6, 0), (7, 0)), "a8=Q");
}
