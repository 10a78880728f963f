use thiserror::Error;

/// Errors raised by move application and the engine entry points.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("cell {0} is outside the 3x3 board")]
    InvalidCell(u8),

    #[error("cell {0} is already occupied")]
    IllegalMove(u8),

    #[error("no empty cell to move into")]
    NoMovesAvailable,
}

/// Convenience Result type for game operations
pub type Result<T> = std::result::Result<T, GameError>;
