//! Game rules for Gomoku
//!
//! This module implements the rule sets:
//! - Line scanning shared by every rule and the evaluator
//! - Win conditions (five in a row, exact five for Black under Forbidden)
//! - Forbidden moves for Black (overline, double-four, double-three)

use crate::board::Stone;

pub mod forbidden;
pub mod line;
pub mod win;

// Re-exports for convenient access
pub use forbidden::{check_forbidden, validate_placement, ForbiddenReason};
pub use line::{scan, scan_all, scan_cells, Direction, LinePattern};
pub use win::{check_win, is_winning_count, WinCheck};

/// Rule set chosen once per game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RuleSet {
    /// No restrictions; five or more wins for both colors
    #[default]
    Free,
    /// Black is restricted and only wins with exactly five
    Forbidden,
}

impl RuleSet {
    pub fn name(self) -> &'static str {
        match self {
            RuleSet::Free => "Free",
            RuleSet::Forbidden => "Forbidden",
        }
    }

    /// Whether `stone` must pass the forbidden-move check under these rules.
    #[inline]
    pub fn restricts(self, stone: Stone) -> bool {
        self == RuleSet::Forbidden && stone == Stone::Black
    }
}
