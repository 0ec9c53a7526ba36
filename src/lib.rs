#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod game;
pub mod levels;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;

pub use crate::game::*;
pub use levels::{LevelSource, PieceDef, StaticLevels, CATALOG};
#[cfg(feature = "std")]
pub use cli::{render_board, Command, Session};
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
