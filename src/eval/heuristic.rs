//! Heuristic evaluation of a single candidate cell
//!
//! There is no board-wide evaluation and no look-ahead: a cell is scored by
//! pretending `color` plays there and summing the pattern score of the line
//! through it in each of the four directions.

use crate::board::{Board, Pos, Stone};
use crate::rules::line::{scan_all, LinePattern};

use super::patterns::PatternScore;

/// Score one scanned line.
///
/// A line blocked at both ends is worthless unless it is already a five.
#[must_use]
pub fn score_pattern(pattern: LinePattern) -> u32 {
    let LinePattern { count, blocked_ends } = pattern;

    if count >= 5 {
        return PatternScore::WIN;
    }
    if blocked_ends >= 2 {
        return 0;
    }

    let open = blocked_ends == 0;
    match count {
        4 if open => PatternScore::LIVE_4,
        4 => PatternScore::DEAD_4,
        3 if open => PatternScore::LIVE_3,
        3 => PatternScore::DEAD_3,
        2 if open => PatternScore::LIVE_2,
        2 => PatternScore::DEAD_2,
        _ => PatternScore::ONE,
    }
}

/// Evaluate how good `pos` would be for `color`.
///
/// # Arguments
/// * `board` - Current board state (not modified)
/// * `pos` - Empty candidate cell
/// * `color` - The color that would play there
///
/// # Returns
/// Sum of [`score_pattern`] over the four directions
#[must_use]
pub fn evaluate(board: &Board, pos: Pos, color: Stone) -> u32 {
    if color == Stone::Empty {
        return 0;
    }

    let hypothetical = board.with_stone(pos, color);
    scan_all(&hypothetical, pos, color)
        .into_iter()
        .map(score_pattern)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(count: u8, blocked_ends: u8) -> LinePattern {
        LinePattern { count, blocked_ends }
    }

    #[test]
    fn test_score_table() {
        assert_eq!(score_pattern(line(5, 0)), PatternScore::WIN);
        assert_eq!(score_pattern(line(6, 2)), PatternScore::WIN);
        assert_eq!(score_pattern(line(4, 0)), PatternScore::LIVE_4);
        assert_eq!(score_pattern(line(4, 1)), PatternScore::DEAD_4);
        assert_eq!(score_pattern(line(3, 0)), PatternScore::LIVE_3);
        assert_eq!(score_pattern(line(3, 1)), PatternScore::DEAD_3);
        assert_eq!(score_pattern(line(2, 0)), PatternScore::LIVE_2);
        assert_eq!(score_pattern(line(2, 1)), PatternScore::DEAD_2);
        assert_eq!(score_pattern(line(1, 0)), PatternScore::ONE);
        assert_eq!(score_pattern(line(1, 1)), PatternScore::ONE);
    }

    #[test]
    fn test_enclosed_lines_worthless() {
        for count in 1..5 {
            assert_eq!(score_pattern(line(count, 2)), 0);
        }
    }

    #[test]
    fn test_empty_board_center() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Pos::center(), Stone::Black), 40);
        assert_eq!(evaluate(&board, Pos::center(), Stone::White), 40);
    }

    #[test]
    fn test_empty_board_corner() {
        // Three directions touch one edge, the anti-diagonal touches two
        let board = Board::new();
        assert_eq!(evaluate(&board, Pos::new(0, 0), Stone::Black), 30);
    }

    #[test]
    fn test_open_four() {
        let mut board = Board::new();
        for col in 4..7 {
            board.place_stone(Pos::new(7, col), Stone::Black);
        }
        let score = evaluate(&board, Pos::new(7, 7), Stone::Black);
        assert_eq!(score, PatternScore::LIVE_4 + 3 * PatternScore::ONE);
    }

    #[test]
    fn test_completing_five() {
        let mut board = Board::new();
        for col in 3..7 {
            board.place_stone(Pos::new(7, col), Stone::White);
        }
        board.place_stone(Pos::new(7, 2), Stone::Black);
        let score = evaluate(&board, Pos::new(7, 7), Stone::White);
        assert!(score >= PatternScore::WIN);
    }

    #[test]
    fn test_enclosed_three() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 3), Stone::White);
        board.place_stone(Pos::new(7, 4), Stone::Black);
        board.place_stone(Pos::new(7, 5), Stone::Black);
        board.place_stone(Pos::new(7, 7), Stone::White);
        let score = evaluate(&board, Pos::new(7, 6), Stone::Black);
        assert_eq!(score, 3 * PatternScore::ONE);
    }

    #[test]
    fn test_evaluate_leaves_board_untouched() {
        let board = Board::new();
        let _ = evaluate(&board, Pos::center(), Stone::Black);
        assert!(board.is_board_empty());
    }
}
