//! Commonly used types and utilities for ease of import.

pub use crate::{
    BoardEngine, BoardEvent, BoardSize, Direction, GameStatus, LevelSource, Orientation, Piece,
    Position, StaticLevels,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, render_board, Session};
