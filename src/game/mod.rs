//! Core game model: moves, terminal condition, and the game definition

pub mod moves;
pub mod rules;
pub mod terminal;

pub use moves::{DivideMode, Move};
pub use rules::{Direction, Game};
pub use terminal::{Comparator, TerminalCondition};

use thiserror::Error;

/// Errors raised while constructing moves, terminal conditions, or games.
///
/// All construction errors are fatal to building the object in question;
/// once construction succeeds there are no runtime errors during
/// classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("comparator must be 'le' or 'ge', got '{found}'")]
    InvalidComparator { found: String },

    #[error("divide move requires a non-zero divisor")]
    DivisorZero,

    #[error("invalid state range: min {s_min} exceeds max {s_max}")]
    InvalidRange { s_min: i64, s_max: i64 },
}
