//! Gomoku engine with Free and Forbidden rules
//!
//! A Gomoku (five-in-a-row) engine for a 15x15 board:
//! - Free rules: five or more in a row wins
//! - Forbidden rules: Black (first to move) may not play an overline,
//!   double-four or double-three, and only wins with exactly five
//! - A computer opponent scoring each candidate cell with a static
//!   heuristic, no look-ahead
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Line scanning, win detection, forbidden moves
//! - [`eval`]: Single-cell heuristic evaluation
//! - [`engine`]: Move selection for the computer side
//! - [`ui`]: egui shell owning the game state
//!
//! Everything outside [`ui`] is stateless: each call takes a board snapshot
//! and never modifies it.
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{check_forbidden, check_win, Board, ForbiddenReason, Pos, RuleSet, Stone};
//!
//! let mut board = Board::new();
//! for col in 3..7 {
//!     board.place_stone(Pos::new(7, col), Stone::Black);
//! }
//!
//! // Completing the five is legal and wins
//! assert_eq!(check_forbidden(&board, Pos::new(7, 7)), None);
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//! let result = check_win(&board, Pos::new(7, 7), Stone::Black, RuleSet::Forbidden);
//! assert!(result.won);
//! assert_eq!(result.line.len(), 5);
//!
//! // A sixth stone would be an overline for Black
//! assert_eq!(check_forbidden(&board, Pos::new(7, 8)), Some(ForbiddenReason::Overline));
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use engine::{candidate_moves, MoveResult, MoveSelector, PendingMove, SelectorConfig};
pub use error::{EngineError, MoveError};
pub use eval::evaluate;
pub use rules::{check_forbidden, check_win, validate_placement, ForbiddenReason, RuleSet, WinCheck};
