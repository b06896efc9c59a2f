//! Ready-made players: a random baseline and the minimax agents

use rand::{rngs::StdRng, Rng, SeedableRng};

use std::sync::Arc;

use crate::{
    board::Board,
    counter::NodeCounter,
    evaluate::Evaluator,
    minimax::{self, SearchError},
    moves::next_moves,
    Move,
};

/// The search depth of the bundled minimax players
pub const DEFAULT_DEPTH: u32 = 4;

/// Picks a move for a position
pub trait Strategy<B: Board> {
    fn choose_move(&mut self, board: &B) -> Result<Move, SearchError>;

    fn name(&self) -> &str;
}

/// Plays a uniformly random legal move
pub struct RandomPlayer<R: Rng = StdRng> {
    rng: R,
}

impl RandomPlayer<StdRng> {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A random player that always makes the same sequence of choices
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomPlayer<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<B: Board, R: Rng> Strategy<B> for RandomPlayer<R> {
    fn choose_move(&mut self, board: &B) -> Result<Move, SearchError> {
        if board.is_game_over() {
            return Err(SearchError::GameOver);
        }
        let moves: Vec<Move> = next_moves(board).map(|(column, _)| column).collect();
        if moves.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }
        Ok(moves[self.rng.gen_range(0..moves.len())])
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Plays the minimax choice at a fixed depth with a fixed heuristic
#[derive(Clone, Debug)]
pub struct MinimaxPlayer {
    depth: u32,
    evaluator: Evaluator,
    counter: Arc<NodeCounter>,
}

impl MinimaxPlayer {
    pub fn new(depth: u32, evaluator: Evaluator, counter: Arc<NodeCounter>) -> Self {
        Self {
            depth,
            evaluator,
            counter,
        }
    }

    /// Searches `DEFAULT_DEPTH` plies with the basic heuristic
    pub fn basic(counter: Arc<NodeCounter>) -> Self {
        Self::new(DEFAULT_DEPTH, Evaluator::Basic, counter)
    }

    /// Searches `DEFAULT_DEPTH` plies with the advanced heuristic
    pub fn advanced(counter: Arc<NodeCounter>) -> Self {
        Self::new(DEFAULT_DEPTH, Evaluator::Advanced, counter)
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn evaluator(&self) -> Evaluator {
        self.evaluator
    }
}

impl<B: Board> Strategy<B> for MinimaxPlayer {
    fn choose_move(&mut self, board: &B) -> Result<Move, SearchError> {
        minimax::choose_move(board, self.depth, self.evaluator, &self.counter)
    }

    fn name(&self) -> &str {
        self.evaluator.name()
    }
}

/// The root search as handed to a [`SearchDriver`]
pub type SearchFn<B> = fn(&B, u32, Evaluator, &NodeCounter) -> Result<Move, SearchError>;

/// An external driver that decides how deep to search, for example by
/// deepening until a time budget runs out
pub trait SearchDriver<B: Board> {
    fn run(
        &mut self,
        board: &B,
        search: SearchFn<B>,
        evaluator: Evaluator,
        counter: &NodeCounter,
    ) -> Result<Move, SearchError>;
}

/// Leaves the depth to a [`SearchDriver`], searching with the basic heuristic
pub struct ProgressiveDeepeningPlayer<D> {
    driver: D,
    counter: Arc<NodeCounter>,
}

impl<D> ProgressiveDeepeningPlayer<D> {
    pub fn new(driver: D, counter: Arc<NodeCounter>) -> Self {
        Self { driver, counter }
    }
}

impl<B: Board, D: SearchDriver<B>> Strategy<B> for ProgressiveDeepeningPlayer<D> {
    fn choose_move(&mut self, board: &B) -> Result<Move, SearchError> {
        self.driver
            .run(board, minimax::choose_move::<B>, Evaluator::Basic, &self.counter)
    }

    fn name(&self) -> &str {
        "progressive"
    }
}
