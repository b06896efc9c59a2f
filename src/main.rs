use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use std::sync::Arc;
use std::time::Instant;

use connect4_minimax::{
    arrayboard::ArrayBoard,
    counter::{NodeCounter, NodeCounts},
    evaluate::Evaluator,
    minimax::SearchError,
    player::{MinimaxPlayer, Strategy, DEFAULT_DEPTH},
    Move,
};

/// Compare minimax evaluation heuristics on Connect 4 positions
#[derive(Parser)]
#[command(name = "connect4_minimax", about = "Compare minimax heuristics on Connect 4 positions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search a single position with each heuristic
    Analyse {
        /// Move history as 1-indexed columns, e.g. 4453 (empty for the start position)
        #[arg(default_value = "")]
        moves: String,

        /// Search depth in plies
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: u32,

        /// Heuristics to search with
        #[arg(long, value_delimiter = ',', default_value = "basic,advanced")]
        evaluators: Vec<Evaluator>,

        /// Draw the position before searching
        #[arg(long)]
        show: bool,
    },
    /// Search many positions in parallel and total the nodes expanded
    Compare {
        /// Move histories as 1-indexed columns
        #[arg(required = true)]
        positions: Vec<String>,

        /// Search depth in plies
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: u32,

        /// Heuristics to search with
        #[arg(long, value_delimiter = ',', default_value = "basic,advanced")]
        evaluators: Vec<Evaluator>,
    },
}

// one heuristic's verdict on one position
struct Outcome {
    evaluator: Evaluator,
    choice: Result<Move, SearchError>,
    nodes: u64,
}

fn search(board: &ArrayBoard, depth: u32, evaluators: &[Evaluator]) -> (Vec<Outcome>, NodeCounts) {
    let counter = Arc::new(NodeCounter::new());
    let outcomes = evaluators
        .iter()
        .map(|&evaluator| {
            let before = counter.snapshot();
            let mut player = MinimaxPlayer::new(depth, evaluator, counter.clone());
            let choice = player.choose_move(board);
            Outcome {
                evaluator,
                choice,
                nodes: counter.snapshot().since(&before).get(evaluator),
            }
        })
        .collect();
    (outcomes, counter.snapshot())
}

fn describe(choice: &Result<Move, SearchError>) -> String {
    match choice {
        // columns are shown 1-indexed, as move strings are written
        Ok(column) => (column + 1).to_string(),
        Err(err) => format!("none ({})", err),
    }
}

fn analyse(moves: &str, depth: u32, evaluators: &[Evaluator], show: bool) -> Result<()> {
    let board = ArrayBoard::from_moves(moves)
        .with_context(|| format!("parsing position '{}'", moves))?;
    if show {
        board.display()?;
    }

    let start = Instant::now();
    let (outcomes, _) = search(&board, depth, evaluators);
    let elapsed = start.elapsed();

    for outcome in outcomes.iter() {
        println!(
            "{:>8}: best move {}, {} nodes expanded",
            outcome.evaluator,
            describe(&outcome.choice),
            outcome.nodes
        );
    }
    println!("Searched to depth {} in {:.3}s", depth, elapsed.as_secs_f64());
    Ok(())
}

fn compare(positions: &[String], depth: u32, evaluators: &[Evaluator]) -> Result<()> {
    let boards = positions
        .iter()
        .map(|moves| {
            ArrayBoard::from_moves(moves).with_context(|| format!("parsing position '{}'", moves))
        })
        .collect::<Result<Vec<_>>>()?;

    let progress = ProgressBar::new(boards.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Searching positions: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let start = Instant::now();
    let results: Vec<(Vec<Outcome>, NodeCounts)> = boards
        .par_iter()
        .map(|board| {
            let result = search(board, depth, evaluators);
            progress.inc(1);
            result
        })
        .collect();
    progress.finish();
    let elapsed = start.elapsed();

    let mut totals = NodeCounts::default();
    for (moves, (outcomes, counts)) in positions.iter().zip(results.iter()) {
        let verdicts: Vec<String> = outcomes
            .iter()
            .map(|outcome| {
                format!(
                    "{}: {} ({} nodes)",
                    outcome.evaluator,
                    describe(&outcome.choice),
                    outcome.nodes
                )
            })
            .collect();
        let label = if moves.is_empty() { "<start>" } else { moves.as_str() };
        println!("{:<20} {}", label, verdicts.join(", "));
        totals = totals + *counts;
    }

    for &evaluator in evaluators.iter() {
        println!(
            "Total nodes expanded with {} evaluation: {}",
            evaluator,
            totals.get(evaluator)
        );
    }
    println!(
        "Searched {} positions to depth {} in {:.3}s",
        boards.len(),
        depth,
        elapsed.as_secs_f64()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Analyse {
            moves,
            depth,
            evaluators,
            show,
        } => analyse(&moves, depth, &evaluators, show),
        Command::Compare {
            positions,
            depth,
            evaluators,
        } => compare(&positions, depth, &evaluators),
    }
}
