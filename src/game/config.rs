use crate::game::bitboard::Occupancy;
use crate::game::common::BoardError;
use crate::game::piece::Position;

/// Side length of every shipped level.
pub const BOARD_SIZE: u8 = 6;
/// Largest side the `u128` occupancy mask can hold.
pub const MAX_BOARD_SIZE: u8 = 11;
pub const MIN_BOARD_SIZE: u8 = 2;

/// Validated board side length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "u8", into = "u8"))]
pub struct BoardSize(u8);

impl BoardSize {
    /// The 6×6 board used by all catalog levels.
    pub const STANDARD: BoardSize = BoardSize(BOARD_SIZE);

    pub fn new(size: u8) -> Result<Self, BoardError> {
        if size < MIN_BOARD_SIZE {
            return Err(BoardError::SizeTooSmall(size as usize));
        }
        Occupancy::try_new(size as usize)?;
        Ok(BoardSize(size))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_i32(self) -> i32 {
        self.0 as i32
    }

    /// Exit cell one row above the board, left of centre: `(size/2 - 1, -1)`.
    pub fn default_goal(self) -> Position {
        Position::new(self.as_i32() / 2 - 1, -1)
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        BoardSize::STANDARD
    }
}

impl TryFrom<u8> for BoardSize {
    type Error = BoardError;

    fn try_from(size: u8) -> Result<Self, Self::Error> {
        BoardSize::new(size)
    }
}

impl From<BoardSize> for u8 {
    fn from(size: BoardSize) -> u8 {
        size.0
    }
}
