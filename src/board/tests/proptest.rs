//! Property-based tests using proptest.

use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::board::{Board, Color, GameStatus};

fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

proptest! {
    /// Property: a move reported legal never leaves the mover's own king
    /// attacked once applied.
    #[test]
    fn prop_applied_legal_moves_never_self_check(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
    ) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let side = board.side_to_move();
            let moves = board.legal_moves(side);
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            prop_assert!(board.apply_move(mv.from(), mv.to()).is_ok());
            prop_assert!(!board.in_check(side));
        }
    }

    /// Property: computing legal moves and status is observation only; the
    /// board reads back identically afterwards.
    #[test]
    fn prop_legality_pass_restores_board(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
    ) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let side = board.side_to_move();
            let moves = board.legal_moves(side);
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            let _ = board.apply_move(mv.from(), mv.to());

            let fen = board.to_fen();
            let next = board.side_to_move();
            let _ = board.legal_moves(next);
            let _ = board.status(next);
            let _ = board.in_check(next);
            prop_assert_eq!(board.to_fen(), fen);
        }
    }

    /// Property: checkmate and stalemate are mutually exclusive, and status
    /// agrees with the two predicates.
    #[test]
    fn prop_terminal_classification_is_consistent(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
    ) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let side = board.side_to_move();
            let mate = board.is_checkmate(side);
            let stale = board.is_stalemate(side);
            prop_assert!(!(mate && stale));
            match board.status(side) {
                GameStatus::Checkmate { winner } => {
                    prop_assert!(mate);
                    prop_assert_eq!(winner, side.opponent());
                }
                GameStatus::Stalemate => prop_assert!(stale),
                GameStatus::InProgress => prop_assert!(!mate && !stale),
            }

            let moves = board.legal_moves(side);
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            let _ = board.apply_move(mv.from(), mv.to());
        }
    }

    /// Property: both kings stay on the board through any legal playout.
    #[test]
    fn prop_kings_are_never_captured(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
    ) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let side = board.side_to_move();
            let moves = board.legal_moves(side);
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            let _ = board.apply_move(mv.from(), mv.to());

            for color in [Color::White, Color::Black] {
                let king = board.king_square(color);
                prop_assert_eq!(
                    board.piece_at(king),
                    Some((color, crate::board::Piece::King))
                );
            }
        }
    }
}
