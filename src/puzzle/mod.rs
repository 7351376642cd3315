//! Puzzle pipeline: problem driver, report, and monotonicity audit

pub mod problem;
pub mod report;
pub mod validator;

pub use problem::PuzzleProblem;
pub use report::PuzzleReport;
pub use validator::{MonotonicityAuditor, MonotonicityViolation, ViolationKind};
