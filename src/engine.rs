//! Computer opponent: single-ply heuristic move selection
//!
//! The selector does not search. It scores every candidate cell once:
//!
//! 1. **Candidates**: empty cells within two cells (Chebyshev) of a stone,
//!    the center on an empty board, every empty cell as a last resort
//! 2. **Attack**: how good the cell is for the computer
//! 3. **Defense**: how good the cell would be for the human, weighted 1.1;
//!    dropped when the human is Black and the cell is forbidden for Black
//! 4. **Tie-break**: uniform random choice among the best-scoring cells
//!
//! # Example
//!
//! ```
//! use gomoku::{Board, MoveSelector, Pos, RuleSet, SelectorConfig, Stone};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let selector = MoveSelector::with_config(SelectorConfig::default());
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let result = selector.select_move(&board, RuleSet::Free, &mut rng);
//! println!("Best move: {:?}", result.best_move);
//! println!("Score: {}", result.score);
//! ```

use crate::board::{Board, Pos, Stone};
use crate::error::EngineError;
use crate::eval::evaluate;
use crate::rules::{check_forbidden, validate_placement, RuleSet};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// Cells farther than this from every stone are not considered.
const NEIGHBOR_RADIUS: i32 = 2;

/// Defense weight in tenths (1.1).
const DEFENSE_WEIGHT_TENTHS: u64 = 11;
const ATTACK_WEIGHT_TENTHS: u64 = 10;

/// Selector configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Color played by the computer; the human plays the other one
    pub computer: Stone,
    /// Artificial pause before an asynchronous selection returns
    pub think_delay: Duration,
    /// Fixed tie-break seed, entropy when `None`
    pub seed: Option<u64>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            computer: Stone::White,
            think_delay: Duration::from_millis(500),
            seed: None,
        }
    }
}

impl SelectorConfig {
    #[must_use]
    pub fn with_computer(mut self, computer: Stone) -> Self {
        self.computer = computer;
        self
    }

    #[must_use]
    pub fn with_think_delay(mut self, think_delay: Duration) -> Self {
        self.think_delay = think_delay;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Tie-break source for one selection.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Result of a move selection with scoring details.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    /// Chosen cell, `None` only when no candidate exists
    pub best_move: Option<Pos>,
    /// `attack + 1.1 * defense` of the chosen cell
    pub score: f64,
    /// Heuristic value of the cell for the computer
    pub attack: u32,
    /// Heuristic value of the cell for the human (after the forbidden discount)
    pub defense: u32,
    /// Number of cells scored
    pub candidates: usize,
    /// Number of cells sharing the best score
    pub tied: usize,
    /// Time spent scoring in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    fn no_move(candidates: usize, time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0.0,
            attack: 0,
            defense: 0,
            candidates,
            tied: 0,
            time_ms,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ScoredCell {
    pos: Pos,
    attack: u32,
    defense: u32,
}

impl ScoredCell {
    /// Final score in tenths, exact so that ties compare equal.
    #[inline]
    fn tenths(&self) -> u64 {
        u64::from(self.attack) * ATTACK_WEIGHT_TENTHS
            + u64::from(self.defense) * DEFENSE_WEIGHT_TENTHS
    }
}

/// Cells worth scoring on `board`.
///
/// Empty cells near an existing stone; only the center on an empty board;
/// every empty cell if nothing else qualifies. Empty only on a full board.
pub fn candidate_moves(board: &Board) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![Pos::center()];
    }

    let near: Vec<Pos> = Pos::all()
        .filter(|&pos| board.is_empty(pos) && board.has_neighbor(pos, NEIGHBOR_RADIUS))
        .collect();
    if !near.is_empty() {
        return near;
    }

    Pos::all().filter(|&pos| board.is_empty(pos)).collect()
}

/// Heuristic move selector for the computer side.
#[derive(Debug, Clone, Default)]
pub struct MoveSelector {
    config: SelectorConfig,
}

impl MoveSelector {
    /// Selector with the default configuration (computer plays White,
    /// 500ms thinking delay, random tie-break).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn computer(&self) -> Stone {
        self.config.computer
    }

    pub fn human(&self) -> Stone {
        self.config.computer.opponent()
    }

    /// Score a single cell for the computer.
    fn score_cell(&self, board: &Board, pos: Pos, rule_set: RuleSet) -> ScoredCell {
        let attack = evaluate(board, pos, self.computer());
        let mut defense = evaluate(board, pos, self.human());

        // The human cannot play a forbidden cell, so there is nothing to block
        if rule_set.restricts(self.human()) && check_forbidden(board, pos).is_some() {
            defense = 0;
        }

        ScoredCell {
            pos,
            attack,
            defense,
        }
    }

    /// Choose the computer's move synchronously.
    ///
    /// # Arguments
    /// * `board` - Snapshot of the current position (not modified)
    /// * `rule_set` - Rules of the current game
    /// * `rng` - Tie-break source; a seeded rng makes the choice reproducible
    pub fn select_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        rule_set: RuleSet,
        rng: &mut R,
    ) -> MoveResult {
        let start = Instant::now();

        let mut candidates = candidate_moves(board);
        candidates.retain(|&pos| validate_placement(board, pos, self.computer(), rule_set).is_ok());

        let mut best_tenths = 0u64;
        let mut tied: Vec<ScoredCell> = Vec::new();
        for &pos in &candidates {
            let cell = self.score_cell(board, pos, rule_set);
            let tenths = cell.tenths();
            if tied.is_empty() || tenths > best_tenths {
                best_tenths = tenths;
                tied.clear();
                tied.push(cell);
            } else if tenths == best_tenths {
                tied.push(cell);
            }
        }

        let time_ms = start.elapsed().as_millis() as u64;
        let Some(chosen) = tied.choose(rng).copied() else {
            tracing::debug!(candidates = candidates.len(), "no candidate cell");
            return MoveResult::no_move(candidates.len(), time_ms);
        };

        tracing::debug!(
            row = chosen.pos.row,
            col = chosen.pos.col,
            attack = chosen.attack,
            defense = chosen.defense,
            candidates = candidates.len(),
            tied = tied.len(),
            "selected move"
        );

        MoveResult {
            best_move: Some(chosen.pos),
            score: best_tenths as f64 / 10.0,
            attack: chosen.attack,
            defense: chosen.defense,
            candidates: candidates.len(),
            tied: tied.len(),
            time_ms,
        }
    }

    /// Convenience wrapper returning only the chosen cell.
    pub fn get_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        rule_set: RuleSet,
        rng: &mut R,
    ) -> Option<Pos> {
        self.select_move(board, rule_set, rng).best_move
    }

    /// Choose the computer's move on a worker thread.
    ///
    /// The worker waits for the configured thinking delay, then selects a
    /// move on its own copy of `board`. Poll the returned handle with
    /// [`PendingMove::try_result`] or block on [`PendingMove::wait`].
    pub fn spawn(&self, board: Board, rule_set: RuleSet) -> PendingMove {
        let selector = self.clone();
        let (tx, rx) = channel();

        thread::spawn(move || {
            thread::sleep(selector.config.think_delay);
            let mut rng = selector.config.rng();
            let result = selector.select_move(&board, rule_set, &mut rng);
            let _ = tx.send(result);
        });

        PendingMove {
            receiver: rx,
            start_time: Instant::now(),
        }
    }
}

/// Handle to an in-flight asynchronous selection. There is no cancellation.
pub struct PendingMove {
    receiver: Receiver<MoveResult>,
    start_time: Instant,
}

impl PendingMove {
    /// Non-blocking poll. `None` while the worker is still thinking.
    pub fn try_result(&self) -> Option<Result<MoveResult, EngineError>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(Ok(result)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(EngineError::WorkerDisconnected)),
        }
    }

    /// Block until the worker delivers its move.
    pub fn wait(self) -> Result<MoveResult, EngineError> {
        self.receiver
            .recv()
            .map_err(|_| EngineError::WorkerDisconnected)
    }

    /// Time since the selection was requested
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}
