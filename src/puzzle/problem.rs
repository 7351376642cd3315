//! Puzzle problem driver: configuration to report

use super::{MonotonicityAuditor, PuzzleReport};
use crate::analysis::Analyzer;
use crate::config::Settings;
use crate::game::Game;
use anyhow::{Context, Result};
use std::time::Instant;

/// A configured pile-game puzzle ready to be solved
pub struct PuzzleProblem {
    settings: Settings,
    game: Game,
}

impl PuzzleProblem {
    /// Create a problem from settings, building the game they describe
    pub fn new(settings: Settings) -> Result<Self> {
        let game = settings
            .game
            .build()
            .context("Failed to build game from configuration")?;
        Ok(Self { settings, game })
    }

    /// Create a problem with an explicit game (useful for testing and
    /// for games with custom moves, which have no config representation)
    pub fn with_game(settings: Settings, game: Game) -> Self {
        Self { settings, game }
    }

    /// The game under analysis
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The problem settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run the optional monotonicity audit and the classification pass,
    /// and assemble the report.
    pub fn solve(&self) -> Result<PuzzleReport> {
        println!(
            "Classifying states for terminal {} with moves [{}]...",
            self.game.terminal(),
            self.report_move_list()
        );

        if self.settings.analysis.audit_monotonicity {
            self.run_audit();
        }

        let start = Instant::now();
        let classification = Analyzer::new(&self.game).classify();
        let classify_time = start.elapsed();

        println!(
            "Classified {} states in {:.3}s",
            classification.len(),
            classify_time.as_secs_f64()
        );

        Ok(PuzzleReport::new(&self.game, classification, classify_time))
    }

    /// Run only the monotonicity audit, returning its violations
    pub fn audit(&self) -> Vec<super::MonotonicityViolation> {
        MonotonicityAuditor::new(&self.game).audit()
    }

    fn run_audit(&self) {
        let auditor = MonotonicityAuditor::new(&self.game);
        if auditor.direction_mismatch() {
            eprintln!(
                "Warning: declared direction {:?} does not match terminal {}",
                self.game.direction(),
                self.game.terminal()
            );
        }
        let violations = auditor.audit();
        if !violations.is_empty() {
            eprintln!(
                "Warning: {} move application(s) break the scan order; affected states may come out unresolved",
                violations.len()
            );
            for v in violations.iter().take(5) {
                eprintln!("  {}", v);
            }
            if violations.len() > 5 {
                eprintln!("  ... and {} more", violations.len() - 5);
            }
        }
    }

    fn report_move_list(&self) -> String {
        self.game
            .moves()
            .iter()
            .map(|m| m.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Comparator, Direction, Move, TerminalCondition};

    #[test]
    fn test_solve_with_default_settings() {
        let problem = PuzzleProblem::new(Settings::default()).unwrap();
        let report = problem.solve().unwrap();

        assert_eq!(report.answers.min_lose_in_one, Some(124));
        assert_eq!(report.answers.win_in_two_pair, vec![127, 128]);
        assert_eq!(report.answers.min_lose_in_two, Some(132));
    }

    #[test]
    fn test_with_game_supports_custom_moves() {
        let game = Game::new(
            TerminalCondition::new(0, Comparator::Le),
            vec![Move::subtract(1), Move::custom("halve", |s| s / 2)],
            1,
            20,
            Direction::Decreasing,
        )
        .unwrap();
        let problem = PuzzleProblem::with_game(Settings::default(), game);
        let report = problem.solve().unwrap();

        assert_eq!(report.scanned_states, 20);
        // 1 -> {0}, terminal; 2 -> {1} only (both moves collapse to 1)
        assert_eq!(report.classification.get(1), Some(crate::analysis::Label::WinInOne));
        assert_eq!(report.classification.get(2), Some(crate::analysis::Label::LoseInOne));
    }

    #[test]
    fn test_invalid_config_surfaces_construction_error() {
        let mut settings = Settings::default();
        settings.game.range.min = 700;
        settings.game.range.max = 600;
        assert!(PuzzleProblem::new(settings).is_err());
    }
}
