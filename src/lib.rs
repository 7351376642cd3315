//! Pile Game Solver
//!
//! This library classifies every state of a bounded two-player
//! state-elimination game as winning or losing within one or two moves,
//! using a single backward-induction pass, and extracts the standard
//! puzzle answers (minimum losing-in-1 state, two smallest winning-in-2
//! states, minimum losing-in-2 state).

pub mod analysis;
pub mod config;
pub mod game;
pub mod puzzle;
pub mod utils;

pub use analysis::{Analyzer, ClassificationResult, Label, PuzzleAnswers};
pub use config::Settings;
pub use game::{
    Comparator, ConstructionError, Direction, DivideMode, Game, Move, TerminalCondition,
};
pub use puzzle::{PuzzleProblem, PuzzleReport};

use anyhow::Result;

/// Main entry point for solving a configured pile game puzzle
pub fn solve_puzzle(settings: Settings) -> Result<PuzzleReport> {
    let problem = PuzzleProblem::new(settings)?;
    problem.solve()
}
