pub mod cell;
pub mod difficulty;
pub mod error;
pub mod game;
pub mod grid;
pub mod minefield;
pub mod placement;
pub mod position;
pub mod reveal;
pub mod stats;
pub mod timer;

pub use cell::{Cell, CellEvent, CellState};
pub use difficulty::{Difficulty, ParseDifficultyError};
pub use error::{GameError, InvalidMove, Result};
pub use game::{CellView, Game, GameStatus, RevealOutcome, SessionRecord};
pub use grid::GridDimension;
pub use minefield::Minefield;
pub use placement::{FixedPlacer, MinePlacer, RandomPlacer};
pub use position::Position;
pub use stats::GameStatistics;
pub use timer::Timer;
