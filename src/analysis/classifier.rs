//! Depth-1/depth-2 outcome classifier over a bounded state range

use crate::game::{Comparator, Game};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Outcome label for a non-terminal state, from the mover's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    /// Some move reaches a terminal state
    WinInOne,
    /// Every move hands the opponent an immediate win
    LoseInOne,
    /// Some move forces the opponent into a one-move loss
    WinInTwo,
    /// Every move hands the opponent a win within one move
    LoseInTwo,
    /// Not resolvable within two moves
    Unresolved,
}

impl Label {
    /// Compact code used in tables and summaries
    pub fn code(&self) -> &'static str {
        match self {
            Label::WinInOne => "W1",
            Label::LoseInOne => "L1",
            Label::WinInTwo => "W2",
            Label::LoseInTwo => "L2",
            Label::Unresolved => "unresolved",
        }
    }

    /// All labels, in rule-priority order
    pub fn all() -> [Label; 5] {
        [
            Label::WinInOne,
            Label::LoseInOne,
            Label::WinInTwo,
            Label::LoseInTwo,
            Label::Unresolved,
        ]
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Mapping from every visited non-terminal state to its outcome label.
///
/// Terminal states and states outside the scanned interval never appear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    labels: BTreeMap<i64, Label>,
}

impl ClassificationResult {
    /// Label of a visited state, if any
    pub fn get(&self, s: i64) -> Option<Label> {
        self.labels.get(&s).copied()
    }

    /// Number of classified states
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether no states were classified
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// All (state, label) pairs in ascending state order
    pub fn iter(&self) -> impl Iterator<Item = (i64, Label)> + '_ {
        self.labels.iter().map(|(&s, &l)| (s, l))
    }

    /// States carrying the given label, ascending
    pub fn states_with(&self, label: Label) -> impl Iterator<Item = i64> + '_ {
        self.iter()
            .filter(move |&(_, l)| l == label)
            .map(|(s, _)| s)
    }

    /// Number of states carrying the given label
    pub fn count_of(&self, label: Label) -> usize {
        self.states_with(label).count()
    }

    /// Smallest and largest visited state, if any were visited
    pub fn scan_span(&self) -> Option<(i64, i64)> {
        let lo = self.labels.keys().next()?;
        let hi = self.labels.keys().next_back()?;
        Some((*lo, *hi))
    }
}

/// Classifies every scannable state of a game in one backward-induction
/// pass.
///
/// Holds no mutable state between calls; each [`Analyzer::classify`] run
/// is independent and produces a fresh result.
pub struct Analyzer<'a> {
    game: &'a Game,
}

impl<'a> Analyzer<'a> {
    /// Create an analyzer for the given game
    pub fn new(game: &'a Game) -> Self {
        Self { game }
    }

    /// States the classification pass visits, in visit order.
    ///
    /// With a `<=` terminal the scan runs ascending from just above the
    /// threshold up to `s_max`; with a `>=` terminal it runs descending
    /// from just below the threshold down to `s_min`. Either way, every
    /// destination nearer the terminal region than the current state has
    /// already been visited, which is what makes a single linear pass
    /// sufficient.
    pub fn scan_states(&self) -> Vec<i64> {
        let g = self.game;
        let t = g.terminal();
        match t.comparator {
            Comparator::Le => (t.threshold + 1..=g.s_max()).collect(),
            Comparator::Ge => (g.s_min()..=g.s_max().min(t.threshold - 1))
                .rev()
                .collect(),
        }
    }

    /// Classify every scannable state as winning or losing within one or
    /// two moves, or unresolved at that depth.
    ///
    /// Requires the game's moves to be monotone in the declared direction;
    /// if they are not, destinations may be unvisited at lookup time and
    /// the output quietly degrades to spurious `Unresolved` labels.
    pub fn classify(&self) -> ClassificationResult {
        let t = self.game.terminal();

        let mut labels: BTreeMap<i64, Label> = BTreeMap::new();
        let mut win1: HashSet<i64> = HashSet::new();
        let mut lose1: HashSet<i64> = HashSet::new();
        let mut win2: HashSet<i64> = HashSet::new();

        for s in self.scan_states() {
            let dests = self.game.next_states(s);

            // Rule priority is fixed; first match wins. Membership lookups
            // only ever see states visited earlier in the scan, so a
            // destination outside the scanned interval can satisfy the
            // existential rules via is_terminal but never the universal
            // ones.
            let label = if dests.iter().any(|&d| t.is_terminal(d)) {
                Label::WinInOne
            } else if !dests.is_empty() && dests.iter().all(|d| win1.contains(d)) {
                Label::LoseInOne
            } else if dests.iter().any(|d| lose1.contains(d)) {
                Label::WinInTwo
            } else if !dests.is_empty()
                && dests.iter().all(|d| win1.contains(d) || win2.contains(d))
            {
                Label::LoseInTwo
            } else {
                Label::Unresolved
            };

            match label {
                Label::WinInOne => {
                    win1.insert(s);
                }
                Label::LoseInOne => {
                    lose1.insert(s);
                }
                Label::WinInTwo => {
                    win2.insert(s);
                }
                Label::LoseInTwo | Label::Unresolved => {}
            }
            labels.insert(s, label);
        }

        ClassificationResult { labels }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, DivideMode, Move, TerminalCondition};

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

    fn doubling_game() -> Game {
        Game::new(
            TerminalCondition::new(56, Comparator::Ge),
            vec![Move::add(1), Move::add(2), Move::multiply(2)],
            1,
            55,
            Direction::Increasing,
        )
        .unwrap()
    }

    #[test]
    fn test_scan_order_ascending_for_le() {
        let game = reference_game();
        let states = Analyzer::new(&game).scan_states();
        assert_eq!(states.first(), Some(&31));
        assert_eq!(states.last(), Some(&600));
        assert_eq!(states.len(), 570);
    }

    #[test]
    fn test_scan_order_descending_for_ge() {
        let game = doubling_game();
        let states = Analyzer::new(&game).scan_states();
        assert_eq!(states.first(), Some(&55));
        assert_eq!(states.last(), Some(&1));
    }

    #[test]
    fn test_win_in_one_just_above_threshold() {
        let game = reference_game();
        let result = Analyzer::new(&game).classify();

        // 31 -> {7, 26, 28}, all terminal
        assert_eq!(result.get(31), Some(Label::WinInOne));
        // 34 -> {8, 29, 31}; 8 and 29 are terminal
        assert_eq!(result.get(34), Some(Label::WinInOne));
    }

    #[test]
    fn test_reference_game_labels() {
        let game = reference_game();
        let result = Analyzer::new(&game).classify();

        assert_eq!(
            result.states_with(Label::LoseInOne).collect::<Vec<_>>(),
            vec![124, 125, 126]
        );
        assert_eq!(
            result.states_with(Label::WinInTwo).take(2).collect::<Vec<_>>(),
            vec![127, 128]
        );
        assert_eq!(result.states_with(Label::LoseInTwo).next(), Some(132));

        assert_eq!(result.count_of(Label::WinInOne), 93);
        assert_eq!(result.count_of(Label::LoseInOne), 3);
        assert_eq!(result.count_of(Label::WinInTwo), 17);
        assert_eq!(result.count_of(Label::LoseInTwo), 6);
        assert_eq!(result.count_of(Label::Unresolved), 451);
        assert_eq!(result.len(), 570);
    }

    #[test]
    fn test_doubling_game_labels() {
        let game = doubling_game();
        let result = Analyzer::new(&game).classify();

        for s in 28..=30 {
            assert_eq!(result.get(s), Some(Label::WinInOne), "s = {}", s);
        }
        assert_eq!(result.get(27), Some(Label::LoseInOne));
        assert_eq!(result.get(26), Some(Label::WinInTwo));
        assert_eq!(result.get(25), Some(Label::WinInTwo));
        assert_eq!(result.get(24), Some(Label::LoseInTwo));
        assert_eq!(result.get(23), Some(Label::Unresolved));
    }

    #[test]
    fn test_structural_invariants() {
        let game = reference_game();
        let result = Analyzer::new(&game).classify();
        let t = game.terminal();

        for (s, label) in result.iter() {
            let dests = game.next_states(s);
            match label {
                Label::WinInOne => {
                    assert!(dests.iter().any(|&d| t.is_terminal(d)), "s = {}", s);
                }
                Label::LoseInOne => {
                    assert!(!dests.is_empty());
                    assert!(
                        dests.iter().all(|&d| result.get(d) == Some(Label::WinInOne)),
                        "s = {}",
                        s
                    );
                }
                Label::WinInTwo => {
                    assert!(
                        dests.iter().any(|&d| result.get(d) == Some(Label::LoseInOne)),
                        "s = {}",
                        s
                    );
                }
                Label::LoseInTwo => {
                    assert!(!dests.is_empty());
                    assert!(
                        dests.iter().all(|&d| matches!(
                            result.get(d),
                            Some(Label::WinInOne) | Some(Label::WinInTwo)
                        )),
                        "s = {}",
                        s
                    );
                }
                Label::Unresolved => {}
            }
        }
    }

    #[test]
    fn test_classify_is_idempotent() {
        let game = reference_game();
        let analyzer = Analyzer::new(&game);
        assert_eq!(analyzer.classify(), analyzer.classify());
    }

    #[test]
    fn test_terminal_states_not_in_output() {
        let game = reference_game();
        let result = Analyzer::new(&game).classify();
        assert_eq!(result.get(30), None);
        assert_eq!(result.get(0), None);
        assert_eq!(result.get(601), None);
    }

    #[test]
    fn test_destinations_escaping_range_force_unresolved() {
        // The -1 move escapes downward past s_min; those destinations are
        // never labeled, so states not rescued by rule 1 stay unresolved.
        let game = Game::new(
            TerminalCondition::new(20, Comparator::Ge),
            vec![Move::add(3), Move::subtract(1)],
            10,
            19,
            Direction::Increasing,
        )
        .unwrap();
        let result = Analyzer::new(&game).classify();

        for s in 17..=19 {
            assert_eq!(result.get(s), Some(Label::WinInOne), "s = {}", s);
        }
        for s in 10..=16 {
            assert_eq!(result.get(s), Some(Label::Unresolved), "s = {}", s);
        }
    }

    #[test]
    fn test_empty_move_set_never_loses() {
        let game = Game::new(
            TerminalCondition::new(30, Comparator::Le),
            vec![],
            31,
            40,
            Direction::Decreasing,
        )
        .unwrap();
        let result = Analyzer::new(&game).classify();
        for s in 31..=40 {
            assert_eq!(result.get(s), Some(Label::Unresolved), "s = {}", s);
        }
    }

    #[test]
    fn test_ge_scan_clamped_by_s_max() {
        // Threshold far above the range: scan starts at s_max, not at
        // threshold - 1.
        let game = Game::new(
            TerminalCondition::new(1000, Comparator::Ge),
            vec![Move::multiply(3)],
            1,
            5,
            Direction::Increasing,
        )
        .unwrap();
        let states = Analyzer::new(&game).scan_states();
        assert_eq!(states, vec![5, 4, 3, 2, 1]);
    }
}
