//! Static evaluation heuristics
//!
//! Scores are always from the point of view of the player about to move on
//! the evaluated board. A finished game scores [`GAME_OVER_SCORE`]: the game
//! can only have been ended by the previous mover, so it is a loss or a draw
//! for the player being scored.

use anyhow::anyhow;

use std::fmt;
use std::str::FromStr;

use crate::{board::Board, Score};

/// The score of any position where the game has already ended
pub const GAME_OVER_SCORE: Score = -1000;

/// Weight of the longest chain in both heuristics
const CHAIN_WEIGHT: Score = 10;

/// The available evaluation heuristics
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Evaluator {
    /// Longest chain and center bias
    Basic,
    /// As `Basic`, plus the balance of still-completable winning lines
    Advanced,
}

impl Evaluator {
    pub const ALL: [Evaluator; 2] = [Evaluator::Basic, Evaluator::Advanced];

    /// Scores `board` for the player about to move
    pub fn evaluate<B: Board>(self, board: &B) -> Score {
        match self {
            Evaluator::Basic => basic_evaluate(board),
            Evaluator::Advanced => advanced_evaluate(board),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Evaluator::Basic => "basic",
            Evaluator::Advanced => "advanced",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Evaluator::Basic => 0,
            Evaluator::Advanced => 1,
        }
    }
}

impl fmt::Display for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Evaluator {
    type Err = anyhow::Error;

    fn from_str(name: &str) -> anyhow::Result<Self> {
        Evaluator::ALL
            .iter()
            .copied()
            .find(|evaluator| evaluator.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| anyhow!("unknown evaluator '{}', expected 'basic' or 'advanced'", name))
    }
}

/// Longest chain of the player to move, with a bonus for their tiles near the
/// center column and a penalty for the opponent's
pub fn basic_evaluate<B: Board>(board: &B) -> Score {
    if board.is_game_over() {
        return GAME_OVER_SCORE;
    }
    chain_score(board) + center_bias(board)
}

/// The basic score plus the difference between the winning lines still open
/// through the current player's tiles and those through the opponent's
pub fn advanced_evaluate<B: Board>(board: &B) -> Score {
    if board.is_game_over() {
        return GAME_OVER_SCORE;
    }
    let (current, other) = (board.current_player(), board.other_player());

    let mut win_count = 0;
    let mut loss_count = 0;
    for row in 0..board.height() {
        for column in 0..board.width() {
            match board.cell(row, column) {
                Some(tile) if tile == current => {
                    win_count += board.winning_line_count_through(row, column, current) as Score
                }
                Some(tile) if tile == other => {
                    loss_count += board.winning_line_count_through(row, column, other) as Score
                }
                _ => {}
            }
        }
    }

    (win_count - loss_count) + chain_score(board) + center_bias(board)
}

fn chain_score<B: Board>(board: &B) -> Score {
    board.longest_chain(board.current_player()) as Score * CHAIN_WEIGHT
}

// own tiles lose their distance from the center, opponent tiles add it
fn center_bias<B: Board>(board: &B) -> Score {
    let (current, other) = (board.current_player(), board.other_player());
    let center = (board.width() / 2) as Score;

    let mut bias = 0;
    for row in 0..board.height() {
        for column in 0..board.width() {
            let distance = (center - column as Score).abs();
            match board.cell(row, column) {
                Some(tile) if tile == current => bias -= distance,
                Some(tile) if tile == other => bias += distance,
                _ => {}
            }
        }
    }
    bias
}
