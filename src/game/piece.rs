//! Pieces, their orientation and grid positions.

use alloc::string::String;
use core::fmt;

/// Orientation of a piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One-cell step used by directional nudges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// `(dx, dy)` with y growing downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Integer grid coordinate; `y` grows downwards and may be negative only in
/// the goal lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert a render-space coordinate, truncating toward zero.
    pub fn from_f32(x: f32, y: f32) -> Self {
        Self {
            x: x as i32,
            y: y as i32,
        }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Opaque piece identifier, unique within a board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(transparent))]
pub struct PieceId(String);

impl PieceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PieceId {
    fn from(id: &str) -> Self {
        PieceId(String::from(id))
    }
}

impl From<String> for PieceId {
    fn from(id: String) -> Self {
        PieceId(id)
    }
}

impl PartialEq<str> for PieceId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PieceId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A rigid block occupying `length` cells along its axis, starting at `position`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub id: PieceId,
    pub position: Position,
    pub length: u8,
    pub orientation: Orientation,
    pub is_target: bool,
}

impl Piece {
    pub fn new(
        id: impl Into<PieceId>,
        position: impl Into<Position>,
        length: u8,
        orientation: Orientation,
    ) -> Self {
        Self {
            id: id.into(),
            position: position.into(),
            length,
            orientation,
            is_target: false,
        }
    }

    /// Mark this piece as the one that must reach the goal.
    pub fn target(mut self) -> Self {
        self.is_target = true;
        self
    }

    /// Cells covered along x and y: `(length, 1)` or `(1, length)`.
    pub fn span(&self) -> (i32, i32) {
        match self.orientation {
            Orientation::Horizontal => (self.length as i32, 1),
            Orientation::Vertical => (1, self.length as i32),
        }
    }

    /// Cells this piece would cover with its leading cell at `origin`.
    pub fn cells_at(&self, origin: Position) -> impl Iterator<Item = Position> {
        let orientation = self.orientation;
        (0..self.length as i32).map(move |i| match orientation {
            Orientation::Horizontal => origin.offset(i, 0),
            Orientation::Vertical => origin.offset(0, i),
        })
    }

    /// Cells covered at the current position.
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        self.cells_at(self.position)
    }

    pub fn contains(&self, cell: Position) -> bool {
        self.cells().any(|c| c == cell)
    }
}
