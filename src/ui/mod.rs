//! GUI module for the Gomoku game
//!
//! This module provides a native Rust GUI using egui/eframe. It is a thin
//! shell: the game state owns the board and turn, the engine decides.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use game_state::{AiState, GameMode, GameOutcome, GameState};
