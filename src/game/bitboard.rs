//! Occupancy bitboard for square grids whose side is chosen at runtime.
//!
//! The board is packed row-major into the unsigned integer `T`, one bit per
//! cell, so a `size × size` grid needs `size * size <= T::BITS`. The type is
//! `no_std` friendly and never allocates.

use core::ops::BitAnd;
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board side squared exceeds the capacity of `T`.
    SizeTooLarge { size: usize, capacity: usize },
    /// Column or row is outside `[0, size)`.
    IndexOutOfBounds { x: i32, y: i32 },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { size, capacity } => {
                write!(
                    f,
                    "SizeTooLarge: size*size={} exceeds T::BITS={}",
                    size * size,
                    capacity
                )
            }
            BitBoardError::IndexOutOfBounds { x, y } => {
                write!(f, "IndexOutOfBounds: x={}, y={}", x, y)
            }
        }
    }
}

/// A `size × size` bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    size: usize,
}

impl<T> BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of cells a board of this type can hold.
    pub fn capacity() -> usize {
        mem::size_of::<T>() * 8
    }

    /// Create an empty board without a size check.
    #[inline]
    pub fn new(size: usize) -> Self {
        BitBoard {
            bits: T::zero(),
            size,
        }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if `size * size` exceeds `T::BITS`.
    pub fn try_new(size: usize) -> Result<Self, BitBoardError> {
        let capacity = Self::capacity();
        if size * size > capacity {
            Err(BitBoardError::SizeTooLarge { size, capacity })
        } else {
            Ok(BitBoard {
                bits: T::zero(),
                size,
            })
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of set bits (occupied cells).
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Whether `(x, y)` lies on the board.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    /// Gets the bit at `(x, y)`.
    pub fn get(&self, x: i32, y: i32) -> Result<bool, BitBoardError> {
        let idx = self.index(x, y)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Sets the bit at `(x, y)`.
    pub fn set(&mut self, x: i32, y: i32) -> Result<(), BitBoardError> {
        let idx = self.index(x, y)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Result<usize, BitBoardError> {
        if self.contains(x, y) {
            Ok(y as usize * self.size + x as usize)
        } else {
            Err(BitBoardError::IndexOutOfBounds { x, y })
        }
    }

    /// Iterator over the set cells as `(x, y)`, row by row.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T> {
        SetBits {
            board: self,
            idx: 0,
        }
    }
}

impl<T> fmt::Debug for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", self.size)?;
        write!(f, "{}", self)?;
        writeln!(f)
    }
}

impl<T> fmt::Display for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let bit = if ((self.bits >> (y * self.size + x)) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            if y + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the set bits of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T>,
    idx: usize,
}

impl<'a, T> Iterator for SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (i32, i32);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let size = self.board.size;
        while self.idx < size * size {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some(((idx % size) as i32, (idx / size) as i32));
            }
        }
        None
    }
}

// Keeps the left operand's size; mixing sizes is a caller bug.
impl<T> BitAnd for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        debug_assert_eq!(self.size, rhs.size);
        Self {
            bits: self.bits & rhs.bits,
            size: self.size,
        }
    }
}

/// Occupancy mask used by the engine; fits boards up to 11×11.
pub type Occupancy = BitBoard<u128>;
