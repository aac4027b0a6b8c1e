use crate::Position;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Position {position} is out of bounds, valid range is (0, 0)..={max}")]
    OutOfBounds { position: Position, max: Position },
    #[error("Invalid operation: {0}")]
    InvalidOperation(#[from] InvalidMove),
    #[error("Grid dimensions {height}x{width} must both be positive")]
    InvalidDimensions { height: u32, width: u32 },
    #[error("Too many mines ({mines}) for a grid of {cells} cells")]
    TooManyMines { mines: u32, cells: u32 },
    #[error("Mine layout is malformed")]
    InvalidLayout,
    #[error("Placement armed {placed} mines, expected {expected}")]
    PlacementMismatch { expected: u32, placed: u32 },
}

/// Structurally valid moves that the current game state forbids.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("the game is over, reset to play again")]
    GameOver,
    #[error("cell is flagged, unflag it before revealing")]
    CellFlagged,
    #[error("cell is already revealed")]
    CellRevealed,
    #[error("the first move must be a reveal")]
    FirstMoveMustReveal,
    #[error("cell is still hidden")]
    CellHidden,
}

pub type Result<T> = std::result::Result<T, GameError>;
