//! Configuration settings for the pile game solver

use crate::game::{
    Comparator, ConstructionError, Direction, DivideMode, Game, Move, TerminalCondition,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub game: GameConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

/// Description of the game to analyze
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub terminal: TerminalConfig,
    pub moves: Vec<MoveConfig>,
    pub range: RangeConfig,
    pub direction: Direction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalConfig {
    pub threshold: i64,
    pub comparator: Comparator,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeConfig {
    pub min: i64,
    pub max: i64,
}

/// A configurable move. Custom moves carry an opaque function and are
/// only constructible through the API, not from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveConfig {
    Add {
        amount: i64,
    },
    Subtract {
        amount: i64,
    },
    Multiply {
        factor: i64,
    },
    Divide {
        divisor: i64,
        #[serde(default = "default_divide_mode")]
        mode: DivideMode,
    },
}

fn default_divide_mode() -> DivideMode {
    DivideMode::Floor
}

impl MoveConfig {
    /// Build the runtime move this entry describes
    pub fn build(&self) -> Result<Move, ConstructionError> {
        match self {
            MoveConfig::Add { amount } => Ok(Move::add(*amount)),
            MoveConfig::Subtract { amount } => Ok(Move::subtract(*amount)),
            MoveConfig::Multiply { factor } => Ok(Move::multiply(*factor)),
            MoveConfig::Divide { divisor, mode } => Move::divide(*divisor, *mode),
        }
    }
}

impl GameConfig {
    /// Build the game this configuration describes
    pub fn build(&self) -> Result<Game, ConstructionError> {
        let moves = self
            .moves
            .iter()
            .map(MoveConfig::build)
            .collect::<Result<Vec<_>, _>>()?;
        Game::new(
            TerminalCondition::new(self.terminal.threshold, self.terminal.comparator),
            moves,
            self.range.min,
            self.range.max,
            self.direction,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Run the monotonicity audit before classifying
    pub audit_monotonicity: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Include the full state → label table in console output
    pub show_labels: bool,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        // The reference game: subtract 3 or 5, or divide by 4 rounding
        // down; the game ends at 30 stones or fewer.
        Self {
            game: GameConfig {
                terminal: TerminalConfig {
                    threshold: 30,
                    comparator: Comparator::Le,
                },
                moves: vec![
                    MoveConfig::Subtract { amount: 3 },
                    MoveConfig::Subtract { amount: 5 },
                    MoveConfig::Divide {
                        divisor: 4,
                        mode: DivideMode::Floor,
                    },
                ],
                range: RangeConfig { min: 31, max: 600 },
                direction: Direction::Decreasing,
            },
            analysis: AnalysisConfig {
                audit_monotonicity: false,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                show_labels: false,
                output_directory: PathBuf::from("output/reports"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.game.moves.is_empty() {
            anyhow::bail!("Game must declare at least one move");
        }

        for m in &self.game.moves {
            if let MoveConfig::Divide { divisor: 0, .. } = m {
                anyhow::bail!("Divide move must have a non-zero divisor");
            }
        }

        if self.game.range.min > self.game.range.max {
            anyhow::bail!(
                "Range min {} exceeds range max {}",
                self.game.range.min,
                self.game.range.max
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(threshold) = cli_overrides.threshold {
            self.game.terminal.threshold = threshold;
        }
        if let Some(min) = cli_overrides.range_min {
            self.game.range.min = min;
        }
        if let Some(max) = cli_overrides.range_max {
            self.game.range.max = max;
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub threshold: Option<i64>,
    pub range_min: Option<i64>,
    pub range_max: Option<i64>,
    pub output_dir: Option<PathBuf>,
}
