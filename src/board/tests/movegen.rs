//! Pseudo-legal move generation tests.

use super::board_from;
use crate::board::{Board, Color, Square};

#[test]
fn test_starting_position_has_twenty_moves() {
    let mut board = Board::new();
    // 16 pawn moves + 4 knight moves.
    assert_eq!(board.legal_moves(Color::White).len(), 20);
    assert_eq!(board.legal_moves(Color::Black).len(), 20);
}

#[test]
fn test_empty_square_generates_nothing() {
    let board = Board::new();
    assert!(board.pseudo_destinations(Square(3, 3)).is_empty());
}

#[test]
fn test_knight_in_corner_has_two_jumps() {
    let board = board_from("N6k/8/8/8/8/8/8/K7 w - - 0 1");
    let moves = board.pseudo_destinations(Square(7, 0));
    assert_eq!(moves.len(), 2);
    assert!(moves.contains(&Square(5, 1)));
    assert!(moves.contains(&Square(6, 2)));
}

#[test]
fn test_knight_ignores_blockers_but_not_friends() {
    let mut board = Board::new();
    // b1 knight jumps over the pawn rank; a3 and c3 only.
    let moves = board.pseudo_destinations(Square(0, 1));
    assert_eq!(moves.len(), 2);
    // d2 is friendly, so it is excluded even though the offset fits.
    assert!(!moves.contains(&Square(1, 3)));
    board.legal_moves(Color::White); // smoke: generation does not panic
}

#[test]
fn test_blocked_pawn_cannot_advance_or_capture_straight() {
    let board = board_from("4k3/8/8/8/8/4p3/4P3/4K3 w - - 0 1");
    // The enemy pawn straight ahead is neither passable nor capturable.
    assert!(board.pseudo_destinations(Square(1, 4)).is_empty());
}

#[test]
fn test_pawn_double_step_requires_both_squares_empty() {
    let board = board_from("4k3/8/8/8/4p3/8/4P3/4K3 w - - 0 1");
    let moves = board.pseudo_destinations(Square(1, 4));
    assert_eq!(moves, vec![Square(2, 4)]);
}

#[test]
fn test_pawn_double_step_only_from_home_rank() {
    let board = board_from("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1");
    let moves = board.pseudo_destinations(Square(2, 4));
    assert_eq!(moves, vec![Square(3, 4)]);
}

#[test]
fn test_pawn_diagonal_capture() {
    let board = board_from("4k3/8/8/8/3p4/4P3/8/4K3 w - - 0 1");
    let moves = board.pseudo_destinations(Square(2, 4));
    assert!(moves.contains(&Square(3, 3)));
    assert!(moves.contains(&Square(3, 4)));
    assert_eq!(moves.len(), 2);
}

#[test]
fn test_rook_ray_stops_at_friend_exclusive() {
    let board = board_from("4k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
    let moves = board.pseudo_destinations(Square(0, 0));
    // Three squares along the rank up to the king, seven up the file.
    assert_eq!(moves.len(), 10);
    assert!(!moves.contains(&Square(0, 4)));
}

#[test]
fn test_bishop_ray_stops_at_enemy_inclusive() {
    let board = board_from("4k3/8/8/3r4/8/8/B7/4K3 w - - 0 1");
    let moves = board.pseudo_destinations(Square(1, 0));
    assert!(moves.contains(&Square(4, 3)));
    assert!(!moves.contains(&Square(5, 4)));
}

#[test]
fn test_queen_combines_rook_and_bishop_rays() {
    let board = board_from("4k3/8/8/8/8/8/8/K2Q4 w - - 0 1");
    let queen = board.pseudo_destinations(Square(0, 3));
    // d1: 6 along the rank (b1, c1, e1..h1), 7 up the file, 3 + 4 diagonals.
    assert_eq!(queen.len(), 20);
}

#[test]
fn test_king_single_steps() {
    let board = board_from("4k3/8/8/8/3K4/8/8/8 w - - 0 1");
    assert_eq!(board.pseudo_destinations(Square(3, 3)).len(), 8);
}
