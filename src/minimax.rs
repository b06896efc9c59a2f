//! Depth-limited minimax search
//!
//! The search visits every node within the depth bound, there is no pruning.
//! Maximizing nodes are those where the root player is to move. Leaf scores
//! are oriented to the root player: the heuristics score the player to move,
//! so a leaf at a minimizing node contributes the negated evaluation.

use log::{debug, trace};
use thiserror::Error;

use crate::{board::Board, counter::NodeCounter, evaluate::Evaluator, moves::*, Move, Score};

/// Why the search could not pick a move
#[derive(Error, Copy, Clone, Debug, Eq, PartialEq)]
pub enum SearchError {
    #[error("no legal moves in a position that is not over")]
    NoLegalMoves,
    #[error("the game is over, there is no move to choose")]
    GameOver,
}

/// Searches `depth` plies ahead and returns the best move for the player to move
///
/// Among equally valued moves the lowest column wins. A depth of 0 is searched
/// as a depth of 1, since the root always expands its children.
pub fn choose_move<B: Board>(
    board: &B,
    depth: u32,
    evaluator: Evaluator,
    counter: &NodeCounter,
) -> Result<Move, SearchError> {
    if board.is_game_over() {
        return Err(SearchError::GameOver);
    }
    let start = counter.get(evaluator);
    counter.record(evaluator);

    let mut best: Option<(Move, Score)> = None;
    for (column, next) in next_moves(board) {
        let value = minimax_value(&next, depth.saturating_sub(1), false, evaluator, counter)?;
        trace!("{} search: column {} scores {}", evaluator, column, value);
        // a later move only replaces the best one if strictly better
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((column, value)),
        }
    }

    let (column, value) = best.ok_or(SearchError::NoLegalMoves)?;
    debug!(
        "{} search to depth {}: column {} with score {}, {} nodes",
        evaluator,
        depth,
        column,
        value,
        counter.get(evaluator) - start
    );
    Ok(column)
}

/// The minimax value of `board` for the root player, searching `depth` plies
pub fn minimax_value<B: Board>(
    board: &B,
    depth: u32,
    maximizing: bool,
    evaluator: Evaluator,
    counter: &NodeCounter,
) -> Result<Score, SearchError> {
    counter.record(evaluator);

    if is_terminal(depth, board) {
        let score = evaluator.evaluate(board);
        return Ok(if maximizing { score } else { -score });
    }

    let mut best: Option<Score> = None;
    for (_, next) in next_moves(board) {
        let value = minimax_value(&next, depth - 1, !maximizing, evaluator, counter)?;
        best = Some(match best {
            None => value,
            Some(best) if maximizing => best.max(value),
            Some(best) => best.min(value),
        });
    }
    best.ok_or(SearchError::NoLegalMoves)
}
