//! Board engine (no_std + alloc compatible)
//!
//! Pure move validation, clamping and win detection with no I/O. Only the
//! `log` facade and `num-traits` are pulled in, so the engine can be embedded
//! in a mobile host or compiled to WebAssembly.

pub mod bitboard;
pub mod board;
pub mod common;
pub mod config;
pub mod engine;
pub mod piece;

// Re-export commonly used types
pub use bitboard::{BitBoard, BitBoardError, Occupancy};
pub use board::{Board, BoardState};
pub use common::{BoardError, MoveRejection};
pub use config::*;
pub use engine::{BoardEngine, BoardEvent, GameStatus, Listener, Move, MoveOutcome};
pub use piece::{Direction, Orientation, Piece, PieceId, Position};
