//! Monotonicity audit for configured move sets
//!
//! The classifier assumes every move steps toward the terminal region, so
//! that destinations are always visited before the states that reach them.
//! That assumption is a documented precondition, not a runtime check; this
//! auditor recomputes every destination across the scanned interval and
//! flags the ones the scan order would visit late or never. Advisory only:
//! a violation predicts spurious unresolved labels, it does not abort
//! anything.

use crate::analysis::Analyzer;
use crate::game::{Comparator, Direction, Game};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a destination breaks the backward-induction order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// The destination is not nearer the terminal region than its source,
    /// so the scan has not visited it yet when the source is classified
    WrongDirection,
    /// The destination steps in the right direction but leaves the
    /// scanned interval, so it is never visited at all
    OutsideScan,
}

/// A single move application that breaks the scan-order guarantee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonotonicityViolation {
    pub state: i64,
    pub destination: i64,
    pub move_name: String,
    pub kind: ViolationKind,
}

impl fmt::Display for MonotonicityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.kind {
            ViolationKind::WrongDirection => "moves away from the terminal region",
            ViolationKind::OutsideScan => "escapes the scanned interval",
        };
        write!(
            f,
            "state {}: move {} reaches {} ({})",
            self.state, self.move_name, self.destination, reason
        )
    }
}

/// Recomputes every reachable destination over the scanned interval and
/// reports the ones that fall on the wrong side of the scan order.
pub struct MonotonicityAuditor<'a> {
    game: &'a Game,
}

impl<'a> MonotonicityAuditor<'a> {
    /// Create an auditor for the given game
    pub fn new(game: &'a Game) -> Self {
        Self { game }
    }

    /// Whether the declared direction contradicts the terminal comparator.
    ///
    /// A `<=` terminal pairs with decreasing moves, a `>=` terminal with
    /// increasing ones; any other pairing means the declaration itself is
    /// suspect, independent of the per-move audit.
    pub fn direction_mismatch(&self) -> bool {
        match self.game.terminal().comparator {
            Comparator::Le => self.game.direction() != Direction::Decreasing,
            Comparator::Ge => self.game.direction() != Direction::Increasing,
        }
    }

    /// Audit every move application across the scanned interval.
    ///
    /// Violations are returned sorted by source state, then destination.
    pub fn audit(&self) -> Vec<MonotonicityViolation> {
        let game = self.game;
        let t = game.terminal();
        let states = Analyzer::new(game).scan_states();

        let mut violations: Vec<MonotonicityViolation> = states
            .par_iter()
            .flat_map_iter(|&s| {
                game.moves().iter().filter_map(move |m| {
                    let d = m.apply(s);
                    if t.is_terminal(d) {
                        return None;
                    }
                    let kind = match t.comparator {
                        // Ascending scan from threshold+1: a non-terminal
                        // destination below s is always already visited.
                        Comparator::Le => {
                            if d >= s {
                                Some(ViolationKind::WrongDirection)
                            } else {
                                None
                            }
                        }
                        Comparator::Ge => {
                            if d <= s {
                                Some(ViolationKind::WrongDirection)
                            } else if d > game.s_max() {
                                Some(ViolationKind::OutsideScan)
                            } else {
                                None
                            }
                        }
                    };
                    kind.map(|kind| MonotonicityViolation {
                        state: s,
                        destination: d,
                        move_name: m.name(),
                        kind,
                    })
                })
            })
            .collect();

        violations.sort_by_key(|v| (v.state, v.destination));
        violations
    }
}
