//! Common types for the board engine: errors and move rejection reasons.

use core::fmt;

use crate::game::bitboard::BitBoardError;
use crate::game::piece::{PieceId, Position};

/// Why a proposed move was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRejection {
    /// No piece with this id is on the board.
    UnknownPiece(PieceId),
    /// The piece would occupy a cell outside its legal range.
    OutOfBounds { cell: Position },
    /// The piece would overlap another piece's current cells.
    Overlaps { other: PieceId, cell: Position },
    /// The occupancy mask could not be built for this board.
    Mask(BitBoardError),
}

impl From<BitBoardError> for MoveRejection {
    fn from(err: BitBoardError) -> Self {
        MoveRejection::Mask(err)
    }
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::UnknownPiece(id) => write!(f, "No piece named '{}' on the board", id),
            MoveRejection::OutOfBounds { cell } => {
                write!(f, "Cell ({}, {}) is outside the board", cell.x, cell.y)
            }
            MoveRejection::Overlaps { other, cell } => write!(
                f,
                "Cell ({}, {}) is occupied by piece '{}'",
                cell.x, cell.y, other
            ),
            MoveRejection::Mask(e) => write!(f, "Occupancy error: {}", e),
        }
    }
}

/// Errors returned by board setup and level lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., board too large for the occupancy mask).
    BitBoardError(BitBoardError),
    /// Board side below the smallest playable size.
    SizeTooSmall(usize),
    /// Requested level index is not in the catalog.
    LevelNotFound(usize),
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::SizeTooSmall(n) => write!(f, "Board size {} is too small", n),
            BoardError::LevelNotFound(i) => write!(f, "Level {} does not exist", i),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(feature = "std")]
impl std::error::Error for MoveRejection {}
