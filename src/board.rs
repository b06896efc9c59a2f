//! The interface the search consumes from a game board

use thiserror::Error;

use crate::Move;

/// Why a column cannot be played
#[derive(Error, Copy, Clone, Debug, Eq, PartialEq)]
pub enum InvalidMove {
    #[error("Invalid move, column {column} out of range. Columns must be below {width}")]
    OutOfRange { column: Move, width: usize },
    #[error("Invalid move, column {column} full")]
    ColumnFull { column: Move },
}

/// A Connect 4 position as seen by the search
///
/// Boards are treated as values: `apply_move` returns the following position
/// and leaves `self` untouched. After a successful move the other player is
/// current on the returned board.
pub trait Board: Clone {
    /// Identifies the owner of a tile
    type Player: Copy + Eq;

    /// True once the game has been won or drawn
    fn is_game_over(&self) -> bool;

    /// The player about to move
    fn current_player(&self) -> Self::Player;

    /// The player who moved last
    fn other_player(&self) -> Self::Player;

    /// The owner of the tile at `row`, `column`, if any
    fn cell(&self, row: usize, column: usize) -> Option<Self::Player>;

    /// Length of the longest horizontal, vertical or diagonal run of `player`'s tiles
    fn longest_chain(&self, player: Self::Player) -> usize;

    /// Number of winning lines through `row`, `column` that `player` could still complete
    fn winning_line_count_through(&self, row: usize, column: usize, player: Self::Player) -> usize;

    fn apply_move(&self, column: Move) -> Result<Self, InvalidMove>;

    fn width(&self) -> usize;

    fn height(&self) -> usize;
}
