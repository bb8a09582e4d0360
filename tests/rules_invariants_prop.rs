//! Property tests for the stateless rules engine.
//!
//! - Line scans always count the origin and report at most two blocked ends.
//! - Win, forbidden and evaluation queries never modify the board and give
//!   the same answer when repeated.

use gomoku::rules::{scan, Direction};
use gomoku::{check_forbidden, check_win, evaluate, Board, Pos, RuleSet, Stone, BOARD_SIZE};
use proptest::prelude::*;

fn stone_from(code: u8) -> Stone {
    match code {
        1 => Stone::Black,
        2 => Stone::White,
        _ => Stone::Empty,
    }
}

fn arb_board() -> impl Strategy<Value = Board> {
    // Mostly empty cells so that runs and empty ends both occur
    let cell = prop_oneof![4 => Just(0u8), 1 => Just(1u8), 1 => Just(2u8)];
    prop::collection::vec(cell, BOARD_SIZE * BOARD_SIZE).prop_map(|codes| {
        let mut board = Board::new();
        for (idx, code) in codes.into_iter().enumerate() {
            board.place_stone(Pos::from_index(idx), stone_from(code));
        }
        board
    })
}

fn arb_pos() -> impl Strategy<Value = Pos> {
    (0..BOARD_SIZE as u8, 0..BOARD_SIZE as u8).prop_map(|(r, c)| Pos::new(r, c))
}

fn arb_side() -> impl Strategy<Value = Stone> {
    prop_oneof![Just(Stone::Black), Just(Stone::White)]
}

proptest! {
    #[test]
    fn scan_count_and_blocked_ends_in_range(board in arb_board(), origin in arb_pos(), side in arb_side()) {
        for dir in Direction::ALL {
            let pattern = scan(&board, origin, dir, side);
            prop_assert!(pattern.count >= 1);
            prop_assert!(pattern.blocked_ends <= 2);
            prop_assert!(pattern.count as usize <= BOARD_SIZE);
        }
    }

    #[test]
    fn win_check_is_idempotent(board in arb_board(), last in arb_pos(), side in arb_side()) {
        let before = board;
        for rule_set in [RuleSet::Free, RuleSet::Forbidden] {
            let first = check_win(&board, last, side, rule_set);
            let second = check_win(&board, last, side, rule_set);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.won, !first.line.is_empty());
            if first.won {
                prop_assert!(first.line.len() >= 5);
            }
        }
        prop_assert_eq!(board, before);
    }

    #[test]
    fn forbidden_check_is_idempotent(board in arb_board(), cell in arb_pos()) {
        let mut board = board;
        board.remove_stone(cell);
        let before = board;
        let first = check_forbidden(&board, cell);
        let second = check_forbidden(&board, cell);
        prop_assert_eq!(first, second);
        prop_assert_eq!(board, before);
    }

    #[test]
    fn evaluate_leaves_board_untouched(board in arb_board(), cell in arb_pos(), side in arb_side()) {
        let mut board = board;
        board.remove_stone(cell);
        let before = board;
        let first = evaluate(&board, cell, side);
        prop_assert_eq!(first, evaluate(&board, cell, side));
        prop_assert_eq!(board, before);
    }
}
