//! A Monte Carlo agent for playing the board game 'Connect 4'
//!
//! This agent estimates the value of every playable column by playing
//! many uniformly random games to completion and scoring how quickly
//! (and for whom) they end.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_mc::{apply_move, Board, Cell, MonteCarlo};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::new();
//! apply_move(&mut board, 3, Cell::PlayerOne)?;
//!
//! let mut engine = MonteCarlo::new().with_trials(500).with_seed(7);
//! let best_move = engine.select_move(&board, Cell::PlayerTwo);
//!
//! assert!(matches!(best_move, Some(column) if column < connect4_mc::WIDTH));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;
pub use board::*;

pub mod error;
pub use error::*;

pub mod rules;
pub use rules::*;

pub mod rollout;

pub mod monte_carlo;
pub use monte_carlo::*;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

// a four-in-a-row must fit along both axes
const_assert!(WIDTH >= 4 && HEIGHT >= 4);
// columns are entered as a single digit
const_assert!(WIDTH <= 9);
