//! Candidate cell evaluation
//!
//! - [`patterns`]: score weights per line shape
//! - [`heuristic`]: per-cell scoring over the four directions

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, score_pattern};
pub use patterns::PatternScore;
