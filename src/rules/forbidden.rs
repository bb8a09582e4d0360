//! Forbidden moves for Black under the Forbidden rule set
//!
//! A simplified Renju restriction checked on a hypothetical Black stone:
//! - Overline: six or more in a row
//! - Double-four: two directions with exactly four in a row
//! - Double-three: two directions with an open three (both ends empty)
//!
//! Only contiguous runs are considered. There is no look-ahead to confirm a
//! four or an open three can actually become a five, and gapped shapes such
//! as `_OO_O_` are not recognized.

use crate::board::{Board, Pos, Stone};
use crate::error::MoveError;

use super::line::scan_all;
use super::RuleSet;

/// Why a Black move is forbidden. `Display` gives the text shown to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ForbiddenReason {
    #[error("Overline")]
    Overline,
    #[error("Double Four")]
    DoubleFour,
    #[error("Double Three")]
    DoubleThree,
}

/// Check whether Black placing at `pos` is forbidden.
///
/// Always evaluated for Black, whoever is to move; callers only invoke it
/// under the Forbidden rule set on Black's turn. `pos` is assumed empty.
/// Only the highest-priority reason is reported
/// (overline, then double-four, then double-three).
pub fn check_forbidden(board: &Board, pos: Pos) -> Option<ForbiddenReason> {
    let hypothetical = board.with_stone(pos, Stone::Black);
    let patterns = scan_all(&hypothetical, pos, Stone::Black);

    if patterns.iter().any(|p| p.count > 5) {
        return Some(ForbiddenReason::Overline);
    }

    let fours = patterns.iter().filter(|p| p.count == 4).count();
    if fours >= 2 {
        return Some(ForbiddenReason::DoubleFour);
    }

    let open_threes = patterns
        .iter()
        .filter(|p| p.count == 3 && p.is_open())
        .count();
    if open_threes >= 2 {
        return Some(ForbiddenReason::DoubleThree);
    }

    None
}

/// Board-level legality of `stone` at `pos`: the cell must be empty and,
/// for Black under the Forbidden rule set, the placement not forbidden.
pub fn validate_placement(
    board: &Board,
    pos: Pos,
    stone: Stone,
    rule_set: RuleSet,
) -> Result<(), MoveError> {
    if !board.is_empty(pos) {
        return Err(MoveError::Occupied(pos));
    }
    if rule_set.restricts(stone) {
        if let Some(reason) = check_forbidden(board, pos) {
            return Err(reason.into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(board: &mut Board, cells: &[(u8, u8)], stone: Stone) {
        for &(r, c) in cells {
            board.place_stone(Pos::new(r, c), stone);
        }
    }

    #[test]
    fn test_double_three() {
        let mut board = Board::new();
        // Horizontal _B_B_ and vertical _B_B_ crossing at (7,7)
        place_all(&mut board, &[(7, 6), (7, 8), (6, 7), (8, 7)], Stone::Black);
        assert_eq!(
            check_forbidden(&board, Pos::new(7, 7)),
            Some(ForbiddenReason::DoubleThree)
        );
    }

    #[test]
    fn test_single_open_three_allowed() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 6), (7, 8)], Stone::Black);
        assert_eq!(check_forbidden(&board, Pos::new(7, 7)), None);
    }

    #[test]
    fn test_blocked_three_does_not_count() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 6), (7, 8), (6, 7), (8, 7)], Stone::Black);
        board.place_stone(Pos::new(7, 9), Stone::White);
        assert_eq!(check_forbidden(&board, Pos::new(7, 7)), None);
    }

    #[test]
    fn test_three_blocked_by_edge_does_not_count() {
        let mut board = Board::new();
        place_all(&mut board, &[(0, 1), (0, 2), (1, 0), (2, 0)], Stone::Black);
        // Row 0 is blocked by the top edge on the vertical; horizontal by the left edge
        assert_eq!(check_forbidden(&board, Pos::new(0, 0)), None);
    }

    #[test]
    fn test_double_four() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 4), (7, 5), (7, 6)], Stone::Black);
        place_all(&mut board, &[(4, 7), (5, 7), (6, 7)], Stone::Black);
        assert_eq!(
            check_forbidden(&board, Pos::new(7, 7)),
            Some(ForbiddenReason::DoubleFour)
        );
    }

    #[test]
    fn test_double_four_ignores_blocked_ends() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 4), (7, 5), (7, 6)], Stone::Black);
        place_all(&mut board, &[(4, 7), (5, 7), (6, 7)], Stone::Black);
        place_all(&mut board, &[(7, 3), (3, 7)], Stone::White);
        assert_eq!(
            check_forbidden(&board, Pos::new(7, 7)),
            Some(ForbiddenReason::DoubleFour)
        );
    }

    #[test]
    fn test_four_and_three_allowed() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 4), (7, 5), (7, 6)], Stone::Black);
        place_all(&mut board, &[(5, 7), (6, 7)], Stone::Black);
        assert_eq!(check_forbidden(&board, Pos::new(7, 7)), None);
    }

    #[test]
    fn test_overline() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 2), (7, 3), (7, 4), (7, 5), (7, 6)], Stone::Black);
        assert_eq!(
            check_forbidden(&board, Pos::new(7, 7)),
            Some(ForbiddenReason::Overline)
        );
    }

    #[test]
    fn test_overline_beats_double_four() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 2), (7, 3), (7, 4), (7, 5), (7, 6)], Stone::Black);
        place_all(&mut board, &[(4, 7), (5, 7), (6, 7)], Stone::Black);
        place_all(&mut board, &[(4, 4), (5, 5), (6, 6)], Stone::Black);
        assert_eq!(
            check_forbidden(&board, Pos::new(7, 7)),
            Some(ForbiddenReason::Overline)
        );
    }

    #[test]
    fn test_exact_five_is_not_forbidden() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 3), (7, 4), (7, 5), (7, 6)], Stone::Black);
        assert_eq!(check_forbidden(&board, Pos::new(7, 7)), None);
    }

    #[test]
    fn test_white_stones_never_forbidden_shapes() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 6), (7, 8), (6, 7), (8, 7)], Stone::White);
        assert_eq!(check_forbidden(&board, Pos::new(7, 7)), None);
    }

    #[test]
    fn test_check_does_not_mutate_board() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 6), (7, 8), (6, 7), (8, 7)], Stone::Black);
        let before = board;
        let _ = check_forbidden(&board, Pos::new(7, 7));
        assert_eq!(board, before);
        assert!(board.is_empty(Pos::new(7, 7)));
    }

    #[test]
    fn test_reason_text() {
        assert_eq!(ForbiddenReason::Overline.to_string(), "Overline");
        assert_eq!(ForbiddenReason::DoubleFour.to_string(), "Double Four");
        assert_eq!(ForbiddenReason::DoubleThree.to_string(), "Double Three");
    }

    #[test]
    fn test_validate_placement() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 6), (7, 8), (6, 7), (8, 7)], Stone::Black);
        let pos = Pos::new(7, 7);
        assert_eq!(
            validate_placement(&board, pos, Stone::Black, RuleSet::Forbidden),
            Err(MoveError::Forbidden(ForbiddenReason::DoubleThree))
        );
        assert_eq!(validate_placement(&board, pos, Stone::Black, RuleSet::Free), Ok(()));
        assert_eq!(validate_placement(&board, pos, Stone::White, RuleSet::Forbidden), Ok(()));
        assert_eq!(
            validate_placement(&board, Pos::new(7, 6), Stone::White, RuleSet::Free),
            Err(MoveError::Occupied(Pos::new(7, 6)))
        );
    }
}
