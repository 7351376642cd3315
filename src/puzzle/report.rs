//! Classification report produced by the puzzle pipeline

use crate::analysis::{ClassificationResult, Label, PuzzleAnswers};
use crate::game::Game;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Everything a completed classification run produced: the three derived
/// answers, summary statistics, and the full label table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleReport {
    /// The three derived puzzle answers
    pub answers: PuzzleAnswers,
    /// The terminal condition, rendered
    pub terminal: String,
    /// Display names of the game's moves, in definition order
    pub move_names: Vec<String>,
    /// Smallest and largest state the scan visited, if any
    pub scan_span: Option<(i64, i64)>,
    /// Number of states classified
    pub scanned_states: usize,
    /// Number of states per label code
    pub label_counts: BTreeMap<String, usize>,
    /// The full state → label mapping
    pub classification: ClassificationResult,
    /// Wall time of the classification pass
    #[serde(skip)]
    pub classify_time: Duration,
}

impl PuzzleReport {
    /// Assemble a report from a completed classification
    pub fn new(game: &Game, classification: ClassificationResult, classify_time: Duration) -> Self {
        let answers = PuzzleAnswers::extract(&classification);
        let label_counts: BTreeMap<String, usize> = classification
            .iter()
            .map(|(_, label)| label.code().to_string())
            .counts()
            .into_iter()
            .collect();

        Self {
            answers,
            terminal: game.terminal().to_string(),
            move_names: game.moves().iter().map(|m| m.name()).collect(),
            scan_span: classification.scan_span(),
            scanned_states: classification.len(),
            label_counts,
            classification,
            classify_time,
        }
    }

    /// Count of states carrying the given label
    pub fn count_of(&self, label: Label) -> usize {
        self.label_counts.get(label.code()).copied().unwrap_or(0)
    }
}
