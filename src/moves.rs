//! Legal move generation and the leaf test of the search

use crate::{board::Board, Move};

/// Iterates over the legal moves of a position in ascending column order,
/// yielding each column with the board it produces
///
/// Columns the board refuses (full or out of range) are skipped. Cloning the
/// iterator before it is advanced restarts the enumeration.
#[derive(Clone)]
pub struct NextMoves<'a, B: Board> {
    board: &'a B,
    column: Move,
}

impl<'a, B: Board> NextMoves<'a, B> {
    pub fn new(board: &'a B) -> Self {
        Self { board, column: 0 }
    }
}

impl<'a, B: Board> Iterator for NextMoves<'a, B> {
    type Item = (Move, B);

    fn next(&mut self) -> Option<Self::Item> {
        while self.column < self.board.width() {
            let column = self.column;
            self.column += 1;
            if let Ok(next) = self.board.apply_move(column) {
                return Some((column, next));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.board.width().saturating_sub(self.column)))
    }
}

/// Returns every legal move of `board` together with the resulting position
pub fn next_moves<B: Board>(board: &B) -> NextMoves<'_, B> {
    NextMoves::new(board)
}

/// True when the search should stop at this node: no depth left or the game has ended
pub fn is_terminal<B: Board>(depth: u32, board: &B) -> bool {
    depth == 0 || board.is_game_over()
}
