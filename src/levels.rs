//! Level catalog: the source of starting layouts handed to the engine.

use alloc::vec::Vec;

use crate::game::{BoardError, Orientation, Piece};

use crate::game::Orientation::{Horizontal as H, Vertical as V};

/// Supplies the starting pieces for a level index.
///
/// Implementations are responsible for authoring correctness: no overlapping
/// pieces and exactly one target.
pub trait LevelSource {
    fn level_count(&self) -> usize;

    fn get_level(&self, index: usize) -> Result<Vec<Piece>, BoardError>;
}

/// Compact static description of one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDef {
    pub id: &'static str,
    pub x: i32,
    pub y: i32,
    pub length: u8,
    pub orientation: Orientation,
    pub target: bool,
}

impl PieceDef {
    const fn new(id: &'static str, x: i32, y: i32, length: u8, orientation: Orientation) -> Self {
        Self {
            id,
            x,
            y,
            length,
            orientation,
            target: false,
        }
    }

    const fn target(id: &'static str, x: i32, y: i32, length: u8) -> Self {
        Self {
            id,
            x,
            y,
            length,
            orientation: V,
            target: true,
        }
    }

    pub fn to_piece(self) -> Piece {
        let piece = Piece::new(self.id, (self.x, self.y), self.length, self.orientation);
        if self.target {
            piece.target()
        } else {
            piece
        }
    }
}

// All levels are 6×6 with the target exiting upward through column 2.
const LEVEL_1: &[PieceDef] = &[
    PieceDef::target("T", 2, 3, 2),
    PieceDef::new("A", 0, 1, 3, H),
    PieceDef::new("B", 4, 0, 2, V),
    PieceDef::new("C", 3, 5, 2, H),
];

const LEVEL_2: &[PieceDef] = &[
    PieceDef::target("T", 2, 4, 2),
    PieceDef::new("A", 1, 0, 2, H),
    PieceDef::new("B", 0, 2, 3, H),
    PieceDef::new("C", 5, 0, 2, V),
    PieceDef::new("D", 4, 2, 3, V),
    PieceDef::new("E", 0, 5, 2, H),
    PieceDef::new("F", 3, 3, 2, V),
];

const LEVEL_3: &[PieceDef] = &[
    PieceDef::target("T", 2, 4, 2),
    PieceDef::new("A", 0, 3, 3, H),
    PieceDef::new("B", 2, 1, 2, H),
    PieceDef::new("C", 3, 2, 3, V),
    PieceDef::new("D", 1, 0, 2, V),
    PieceDef::new("E", 4, 0, 2, H),
    PieceDef::new("F", 0, 4, 2, V),
];

/// Levels shipped with the crate.
pub const CATALOG: &[&[PieceDef]] = &[LEVEL_1, LEVEL_2, LEVEL_3];

/// [`LevelSource`] over a static table of level definitions.
#[derive(Debug, Clone, Copy)]
pub struct StaticLevels {
    levels: &'static [&'static [PieceDef]],
}

impl StaticLevels {
    pub const fn new(levels: &'static [&'static [PieceDef]]) -> Self {
        Self { levels }
    }
}

impl Default for StaticLevels {
    fn default() -> Self {
        Self::new(CATALOG)
    }
}

impl LevelSource for StaticLevels {
    fn level_count(&self) -> usize {
        self.levels.len()
    }

    fn get_level(&self, index: usize) -> Result<Vec<Piece>, BoardError> {
        let defs = self
            .levels
            .get(index)
            .ok_or(BoardError::LevelNotFound(index))?;
        Ok(defs.iter().map(|d| d.to_piece()).collect())
    }
}
