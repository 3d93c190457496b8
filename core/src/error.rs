use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates outside the board")]
    OutOfBounds,
    #[error("Board dimensions must be positive")]
    ZeroSize,
    #[error("Mine count must leave at least one safe cell")]
    TooManyMines,
    #[error("Mine layout does not match the board dimensions")]
    LayoutMismatch,
}

pub type Result<T> = core::result::Result<T, GameError>;
