//! A depth-limited minimax agent for the board game 'Connect 4'
//!
//! The agent searches every line of play up to a fixed depth and scores the
//! leaves with one of two static evaluation heuristics. Nodes expanded are
//! tallied per heuristic so the two can be compared offline.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{arrayboard::ArrayBoard, counter::NodeCounter, evaluate::Evaluator, minimax::choose_move};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let counter = NodeCounter::new();
//! let board = ArrayBoard::from_moves("112233")?;
//! let best_move = choose_move(&board, 2, Evaluator::Basic, &counter)?;
//!
//! assert_eq!(best_move, 3);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod arrayboard;

pub mod moves;

pub mod evaluate;

pub mod counter;

pub mod minimax;

pub mod player;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of tiles in a row needed to win
pub const CONNECT: usize = 4;

/// A move is the index of the column a tile is dropped into, starting from 0
pub type Move = usize;

/// A position score, higher is better for the player it was computed for
pub type Score = i32;

// a line of CONNECT tiles has to fit on the board in both directions
const_assert!(CONNECT <= WIDTH && CONNECT <= HEIGHT);
