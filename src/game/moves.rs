//! Move variants: the deterministic state transitions of a pile game

use super::ConstructionError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Rounding mode for division moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivideMode {
    /// Quotient floored toward negative infinity
    Floor,
    /// Quotient rounded toward positive infinity
    Ceil,
    /// Quotient rounded to the nearest integer, ties to the nearest even
    Round,
}

impl fmt::Display for DivideMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DivideMode::Floor => write!(f, "floor"),
            DivideMode::Ceil => write!(f, "ceil"),
            DivideMode::Round => write!(f, "round"),
        }
    }
}

/// A deterministic transition from one game state to another.
///
/// Moves are immutable once constructed. The display name carried by each
/// variant is used only for output and never affects classification.
#[derive(Clone)]
pub enum Move {
    /// s → s + k
    Add(i64),
    /// s → s - k
    Subtract(i64),
    /// s → s * k
    Multiply(i64),
    /// s → s / divisor under the given rounding mode
    Divide { divisor: i64, mode: DivideMode },
    /// An opaque transition paired with a display label
    Custom {
        label: String,
        f: Arc<dyn Fn(i64) -> i64 + Send + Sync>,
    },
}

impl Move {
    /// Create an addition move
    pub fn add(amount: i64) -> Self {
        Move::Add(amount)
    }

    /// Create a subtraction move
    pub fn subtract(amount: i64) -> Self {
        Move::Subtract(amount)
    }

    /// Create a multiplication move
    pub fn multiply(factor: i64) -> Self {
        Move::Multiply(factor)
    }

    /// Create a division move, rejecting a zero divisor
    pub fn divide(divisor: i64, mode: DivideMode) -> Result<Self, ConstructionError> {
        if divisor == 0 {
            return Err(ConstructionError::DivisorZero);
        }
        Ok(Move::Divide { divisor, mode })
    }

    /// Create a custom move from an opaque transition function
    pub fn custom<F>(label: impl Into<String>, f: F) -> Self
    where
        F: Fn(i64) -> i64 + Send + Sync + 'static,
    {
        Move::Custom {
            label: label.into(),
            f: Arc::new(f),
        }
    }

    /// Apply the move to a state. Total once construction succeeded.
    pub fn apply(&self, s: i64) -> i64 {
        match self {
            Move::Add(k) => s + k,
            Move::Subtract(k) => s - k,
            Move::Multiply(k) => s * k,
            Move::Divide { divisor, mode } => match mode {
                DivideMode::Floor => floor_div(s, *divisor),
                // Exact for negative operands as well
                DivideMode::Ceil => -floor_div(-s, *divisor),
                DivideMode::Round => round_div(s, *divisor),
            },
            Move::Custom { f, .. } => f(s),
        }
    }

    /// Human-readable name of the move
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Add(k) => write!(f, "+{}", k),
            Move::Subtract(k) => write!(f, "-{}", k),
            Move::Multiply(k) => write!(f, "*{}", k),
            Move::Divide { divisor, mode } => write!(f, "//{}({})", divisor, mode),
            Move::Custom { label, .. } => write!(f, "{}", label),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

/// Integer division floored toward negative infinity.
///
/// Rust's `/` truncates toward zero, which differs on negative operands.
fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    if a % b != 0 && (a < 0) != (b < 0) {
        q - 1
    } else {
        q
    }
}

/// Division rounded to the nearest integer, ties to the nearest even
/// integer, computed in exact integer arithmetic.
fn round_div(a: i64, b: i64) -> i64 {
    let q = floor_div(a, b);
    let twice_rem = 2 * (a - q * b).abs();
    match twice_rem.cmp(&b.abs()) {
        Ordering::Less => q,
        Ordering::Greater => q + 1,
        Ordering::Equal => {
            if q % 2 == 0 {
                q
            } else {
                q + 1
            }
        }
    }
}
