use crate::board::Pos;
use crate::rules::ForbiddenReason;

/// Reasons a placement is rejected by the game shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is over")]
    GameOver,

    #[error("computer is thinking")]
    ComputerThinking,

    #[error("not your turn")]
    NotYourTurn,

    #[error("cell ({}, {}) is already occupied", .0.row, .0.col)]
    Occupied(Pos),

    #[error("forbidden move: {0}")]
    Forbidden(#[from] ForbiddenReason),
}

/// Errors from the asynchronous move selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("move selection worker exited without a result")]
    WorkerDisconnected,
}
