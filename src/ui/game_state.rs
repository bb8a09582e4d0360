//! Game state management for the Gomoku GUI
//!
//! Owns the authoritative board, turn and history. All rule decisions are
//! delegated to the stateless engine functions.

use crate::engine::{MoveResult, MoveSelector, PendingMove, SelectorConfig};
use crate::error::{EngineError, MoveError};
use crate::rules::{check_forbidden, check_win, validate_placement, RuleSet};
use crate::{Board, Pos, Stone};
use std::time::Duration;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs computer
    PvE { human_color: Stone },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_color: Stone::Black,
        }
    }
}

/// Computer thinking state
pub enum AiState {
    Idle,
    Thinking(PendingMove),
}

/// How a finished game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Win { winner: Stone, line: Vec<Pos> },
    Draw,
}

impl GameOutcome {
    pub fn winning_line(&self) -> Option<&[Pos]> {
        match self {
            GameOutcome::Win { line, .. } => Some(line),
            GameOutcome::Draw => None,
        }
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub rule_set: RuleSet,
    pub current_turn: Stone,
    pub outcome: Option<GameOutcome>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Stone)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,

    selector_config: SelectorConfig,
}

impl GameState {
    pub fn new(mode: GameMode, rule_set: RuleSet) -> Self {
        Self::with_config(mode, rule_set, SelectorConfig::default())
    }

    /// Game with a custom selector configuration (thinking delay, seed).
    /// The computer color always follows from `mode`.
    pub fn with_config(mode: GameMode, rule_set: RuleSet, config: SelectorConfig) -> Self {
        tracing::info!(?mode, rules = rule_set.name(), "new game");
        Self {
            board: Board::new(),
            mode,
            rule_set,
            current_turn: Stone::Black,
            outcome: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            suggested_move: None,
            message: None,
            selector_config: config,
        }
    }

    /// Restart with the same mode and rules
    pub fn reset(&mut self) {
        *self = Self::with_config(self.mode, self.rule_set, self.selector_config);
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn == human_color,
            GameMode::PvP => true,
        }
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking(_))
    }

    /// Why the current player may not play at `pos`, if anything.
    pub fn check_placement(&self, pos: Pos) -> Result<(), MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        if self.is_ai_thinking() {
            return Err(MoveError::ComputerThinking);
        }
        if !self.is_human_turn() {
            return Err(MoveError::NotYourTurn);
        }
        validate_placement(&self.board, pos, self.current_turn, self.rule_set)
    }

    /// Empty cells the side to move may not play because of the Forbidden rules.
    pub fn forbidden_cells(&self) -> Vec<Pos> {
        if self.is_game_over() || !self.rule_set.restricts(self.current_turn) {
            return Vec::new();
        }
        Pos::all()
            .filter(|&pos| self.board.is_empty(pos) && check_forbidden(&self.board, pos).is_some())
            .collect()
    }

    /// Attempt to place a stone for the human player.
    /// A rejection is also shown to the player through `message`.
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), MoveError> {
        if let Err(err) = self.check_placement(pos) {
            tracing::warn!(row = pos.row, col = pos.col, %err, "placement rejected");
            self.message = Some(err.to_string());
            return Err(err);
        }
        self.execute_move(pos);
        Ok(())
    }

    /// Execute a move (for both human and computer)
    fn execute_move(&mut self, pos: Pos) {
        let color = self.current_turn;

        self.board.place_stone(pos, color);
        self.move_history.push((pos, color));
        self.last_move = Some(pos);
        self.suggested_move = None;
        self.message = None;
        tracing::info!(
            color = color.name(),
            row = pos.row,
            col = pos.col,
            ply = self.move_history.len(),
            "stone placed"
        );

        let win = check_win(&self.board, pos, color, self.rule_set);
        if win.won {
            tracing::info!(winner = color.name(), length = win.line.len(), "game won");
            self.outcome = Some(GameOutcome::Win {
                winner: color,
                line: win.line,
            });
            return;
        }

        if self.board.is_full() {
            tracing::info!("game drawn");
            self.outcome = Some(GameOutcome::Draw);
            return;
        }

        self.current_turn = color.opponent();
    }

    fn selector(&self) -> MoveSelector {
        MoveSelector::with_config(self.selector_config.with_computer(self.current_turn))
    }

    /// Start the computer's asynchronous move selection
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.is_game_over() {
            return;
        }

        let pending = self.selector().spawn(self.board, self.rule_set);
        self.ai_state = AiState::Thinking(pending);
    }

    /// Poll the computer's selection and play it once available
    pub fn check_ai_result(&mut self) {
        let polled = match &self.ai_state {
            AiState::Thinking(pending) => pending.try_result(),
            AiState::Idle => None,
        };
        if let Some(result) = polled {
            self.ai_state = AiState::Idle;
            self.apply_ai_result(result);
        }
    }

    /// Block until the computer's selection arrives and play it
    pub fn wait_ai_result(&mut self) {
        if let AiState::Thinking(pending) = std::mem::replace(&mut self.ai_state, AiState::Idle) {
            self.apply_ai_result(pending.wait());
        }
    }

    fn apply_ai_result(&mut self, result: Result<MoveResult, EngineError>) {
        let move_result = match result {
            Ok(move_result) => move_result,
            Err(err) => {
                tracing::error!(%err, "computer move failed");
                self.message = Some(format!("Computer error: {err}"));
                return;
            }
        };

        let best_move = move_result.best_move;
        self.last_ai_result = Some(move_result);

        match best_move {
            Some(pos) if self.board.is_empty(pos) => self.execute_move(pos),
            Some(pos) => {
                tracing::error!(row = pos.row, col = pos.col, "computer chose an occupied cell");
                self.message = Some("Computer chose an occupied cell".to_string());
            }
            None => {
                tracing::info!(color = self.current_turn.name(), "computer has no legal move, game drawn");
                self.message = Some("Computer has no legal move".to_string());
                self.outcome = Some(GameOutcome::Draw);
            }
        }
    }

    /// Computer thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking(pending) => Some(pending.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Request a hint for the side to move (PvP mode)
    pub fn request_suggestion(&mut self) {
        if self.is_game_over() || self.is_ai_thinking() {
            return;
        }

        let mut rng = self.selector_config.rng();
        let result = self.selector().select_move(&self.board, self.rule_set, &mut rng);
        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Undo last move
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        // For PvE, undo two moves (human + computer)
        let undo_count = match self.mode {
            GameMode::PvE { .. } if self.move_history.len() >= 2 => 2,
            _ => 1,
        };

        // Simple undo: reset and replay
        let moves_to_keep = self.move_history.len().saturating_sub(undo_count);
        let moves: Vec<_> = self.move_history.drain(..moves_to_keep).collect();
        self.move_history.clear();

        self.board = Board::new();
        self.current_turn = Stone::Black;
        self.outcome = None;
        self.last_move = None;
        self.suggested_move = None;
        self.message = None;

        for (pos, color) in moves {
            self.board.place_stone(pos, color);
            self.move_history.push((pos, color));
            self.last_move = Some(pos);
            self.current_turn = color.opponent();
        }
    }
}
