//! Backward-induction classification of game states

pub mod answers;
pub mod classifier;

pub use answers::PuzzleAnswers;
pub use classifier::{Analyzer, ClassificationResult, Label};
