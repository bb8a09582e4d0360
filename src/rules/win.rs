//! Win condition checking
//!
//! Free rules: five or more in a row wins for either color.
//! Forbidden rules: White still wins with five or more, Black only with
//! exactly five (a Black overline is not a win).

use crate::board::{Board, Pos, Stone};

use super::line::{scan_cells, Direction};
use super::RuleSet;

/// Outcome of checking the most recent move.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WinCheck {
    pub won: bool,
    /// The winning cells from one end to the other; empty when not won
    pub line: Vec<Pos>,
}

impl WinCheck {
    fn no_win() -> Self {
        Self::default()
    }
}

/// Whether a run of `count` stones wins for `stone` under `rule_set`.
#[inline]
pub fn is_winning_count(count: usize, stone: Stone, rule_set: RuleSet) -> bool {
    match (rule_set, stone) {
        (RuleSet::Forbidden, Stone::Black) => count == 5,
        _ => count >= 5,
    }
}

/// Check whether the stone just placed at `last` completes a winning line.
///
/// Directions are tried in [`Direction::ALL`] order and only the first
/// qualifying line is reported.
pub fn check_win(board: &Board, last: Pos, stone: Stone, rule_set: RuleSet) -> WinCheck {
    if stone == Stone::Empty {
        return WinCheck::no_win();
    }

    for dir in Direction::ALL {
        let line = scan_cells(board, last, dir, stone);
        if is_winning_count(line.len(), stone, rule_set) {
            return WinCheck { won: true, line };
        }
    }

    WinCheck::no_win()
}
