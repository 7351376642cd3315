//! Game definition and reachable-state enumeration

use super::{ConstructionError, Move, TerminalCondition};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Declared monotonic direction of a game's move set.
///
/// Every move is expected to step states toward the terminal region in
/// this direction. The classification scan relies on that property but
/// does not verify it; see [`crate::puzzle::MonotonicityAuditor`] for an
/// optional audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Increasing,
    Decreasing,
}

/// A two-player state-elimination game: a terminal condition, an ordered
/// move list, an inclusive state range, and a declared direction.
///
/// Immutable once constructed. Move order affects nothing semantically,
/// only enumeration.
#[derive(Debug, Clone)]
pub struct Game {
    terminal: TerminalCondition,
    moves: Vec<Move>,
    s_min: i64,
    s_max: i64,
    direction: Direction,
}

impl Game {
    /// Create a new game, rejecting an inverted state range
    pub fn new(
        terminal: TerminalCondition,
        moves: Vec<Move>,
        s_min: i64,
        s_max: i64,
        direction: Direction,
    ) -> Result<Self, ConstructionError> {
        if s_min > s_max {
            return Err(ConstructionError::InvalidRange { s_min, s_max });
        }
        Ok(Self {
            terminal,
            moves,
            s_min,
            s_max,
            direction,
        })
    }

    /// The terminal condition
    pub fn terminal(&self) -> TerminalCondition {
        self.terminal
    }

    /// The ordered move list
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Lower bound of the state range (inclusive)
    pub fn s_min(&self) -> i64 {
        self.s_min
    }

    /// Upper bound of the state range (inclusive)
    pub fn s_max(&self) -> i64 {
        self.s_max
    }

    /// The declared monotonic direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Distinct states reachable from `s` in one move, sorted ascending
    pub fn next_states(&self, s: i64) -> Vec<i64> {
        let dests: BTreeSet<i64> = self.moves.iter().map(|m| m.apply(s)).collect();
        dests.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Comparator, DivideMode};

    fn reference_game() -> Game {
        Game::new(
            TerminalCondition::new(30, Comparator::Le),
            vec![
                Move::subtract(3),
                Move::subtract(5),
                Move::divide(4, DivideMode::Floor).unwrap(),
            ],
            31,
            600,
            Direction::Decreasing,
        )
        .unwrap()
    }

    #[test]
    fn test_next_states_sorted_ascending() {
        let game = reference_game();
        assert_eq!(game.next_states(31), vec![7, 26, 28]);
        assert_eq!(game.next_states(34), vec![8, 29, 31]);
    }

    #[test]
    fn test_next_states_deduplicates() {
        let game = Game::new(
            TerminalCondition::new(0, Comparator::Le),
            vec![Move::subtract(2), Move::subtract(2), Move::add(-2)],
            1,
            10,
            Direction::Decreasing,
        )
        .unwrap();
        assert_eq!(game.next_states(5), vec![3]);
    }

    #[test]
    fn test_next_states_strictly_increasing_everywhere() {
        let game = reference_game();
        for s in 31..=200 {
            let dests = game.next_states(s);
            assert!(dests.windows(2).all(|w| w[0] < w[1]), "s = {}", s);
        }
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = Game::new(
            TerminalCondition::new(30, Comparator::Le),
            vec![Move::subtract(1)],
            100,
            50,
            Direction::Decreasing,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConstructionError::InvalidRange {
                s_min: 100,
                s_max: 50
            }
        );
    }

    #[test]
    fn test_single_state_range_allowed() {
        assert!(Game::new(
            TerminalCondition::new(30, Comparator::Le),
            vec![Move::subtract(1)],
            31,
            31,
            Direction::Decreasing,
        )
        .is_ok());
    }
}
