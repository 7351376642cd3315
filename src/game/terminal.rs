//! Terminal condition: the predicate that ends the game

use super::ConstructionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of the terminal threshold comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    /// Terminal when s <= threshold (terminal region is the small states)
    Le,
    /// Terminal when s >= threshold (terminal region is the large states)
    Ge,
}

impl FromStr for Comparator {
    type Err = ConstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "le" | "<=" => Ok(Comparator::Le),
            "ge" | ">=" => Ok(Comparator::Ge),
            other => Err(ConstructionError::InvalidComparator {
                found: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparator::Le => write!(f, "<="),
            Comparator::Ge => write!(f, ">="),
        }
    }
}

/// Threshold predicate deciding whether a state ends the game.
///
/// The predicate is defined for any integer, independent of any range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalCondition {
    pub threshold: i64,
    pub comparator: Comparator,
}

impl TerminalCondition {
    /// Create a new terminal condition
    pub fn new(threshold: i64, comparator: Comparator) -> Self {
        Self {
            threshold,
            comparator,
        }
    }

    /// Check whether a state is terminal
    pub fn is_terminal(&self, s: i64) -> bool {
        match self.comparator {
            Comparator::Le => s <= self.threshold,
            Comparator::Ge => s >= self.threshold,
        }
    }
}

impl fmt::Display for TerminalCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s {} {}", self.comparator, self.threshold)
    }
}
