//! Main CLI application for the pile game solver

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pile_game_solver::{
    analysis::Label,
    config::{CliOverrides, MoveConfig, RangeConfig, Settings},
    game::{Comparator, Direction},
    puzzle::PuzzleProblem,
    utils::{ColorOutput, ReportFormatter},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pile_game_solver")]
#[command(about = "Two-player pile game state classifier")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify the configured game and print the puzzle answers
    Solve {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Terminal threshold (overrides config)
        #[arg(short, long)]
        threshold: Option<i64>,

        /// Lower bound of the state range (overrides config)
        #[arg(long)]
        min: Option<i64>,

        /// Upper bound of the state range (overrides config)
        #[arg(long)]
        max: Option<i64>,

        /// Output directory for the saved report (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Save the full report to the output directory
        #[arg(long)]
        save: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the full state → label table
    Classify {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Restrict the table to one label (W1, L1, W2, L2, unresolved)
        #[arg(long)]
        only: Option<String>,
    },

    /// Audit the move set for monotonicity violations
    Check {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,
    },

    /// Create example configuration files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            config,
            threshold,
            min,
            max,
            output,
            save,
            verbose,
        } => solve_command(config, threshold, min, max, output, save, verbose),
        Commands::Classify { config, only } => classify_command(config, only),
        Commands::Check { config } => check_command(config),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Ok(Settings::default())
    }
}

fn solve_command(
    config_path: PathBuf,
    threshold: Option<i64>,
    min: Option<i64>,
    max: Option<i64>,
    output_dir: Option<PathBuf>,
    save: bool,
    verbose: bool,
) -> Result<()> {
    println!("{}", ColorOutput::info("🎯 Pile game solver"));

    let mut settings = load_settings(&config_path)?;

    let cli_overrides = CliOverrides {
        threshold,
        range_min: min,
        range_max: max,
        output_dir: output_dir.clone(),
    };
    settings.merge_with_cli(&cli_overrides);

    settings.validate().context("Configuration validation failed")?;

    if verbose {
        println!("Configuration:");
        println!("  Terminal threshold: {}", settings.game.terminal.threshold);
        println!(
            "  Range: [{}, {}]",
            settings.game.range.min, settings.game.range.max
        );
        println!("  Moves: {}", settings.game.moves.len());
        println!();
    }

    let problem = PuzzleProblem::new(settings.clone()).context("Failed to create puzzle")?;
    let report = problem.solve().context("Failed to classify game states")?;

    println!();
    print!("{}", ReportFormatter::format_summary(&report));
    println!();
    print!("{}", ReportFormatter::format_answers(&report));

    if settings.output.show_labels {
        println!();
        print!("{}", ReportFormatter::format_label_table(&report, None));
    }

    if save {
        let path = ReportFormatter::save_report(
            &report,
            &settings.output.output_directory,
            &settings.output.format,
        )
        .context("Failed to save report")?;
        println!(
            "{}",
            ColorOutput::success(&format!("Report saved to {}", path.display()))
        );
    }

    Ok(())
}

fn classify_command(config_path: PathBuf, only: Option<String>) -> Result<()> {
    let settings = load_settings(&config_path)?;
    settings.validate().context("Configuration validation failed")?;

    let only = match only.as_deref() {
        None => None,
        Some("W1") => Some(Label::WinInOne),
        Some("L1") => Some(Label::LoseInOne),
        Some("W2") => Some(Label::WinInTwo),
        Some("L2") => Some(Label::LoseInTwo),
        Some("unresolved") => Some(Label::Unresolved),
        Some(other) => {
            anyhow::bail!("Unknown label '{}': expected W1, L1, W2, L2 or unresolved", other)
        }
    };

    let problem = PuzzleProblem::new(settings).context("Failed to create puzzle")?;
    let report = problem.solve().context("Failed to classify game states")?;

    println!();
    print!("{}", ReportFormatter::format_label_table(&report, only));

    Ok(())
}

fn check_command(config_path: PathBuf) -> Result<()> {
    println!("{}", ColorOutput::info("🔍 Auditing move set monotonicity..."));

    let settings = load_settings(&config_path)?;
    settings.validate().context("Configuration validation failed")?;

    let problem = PuzzleProblem::new(settings).context("Failed to create puzzle")?;
    let violations = problem.audit();

    if violations.is_empty() {
        println!(
            "{}",
            ColorOutput::success("All move applications respect the scan order")
        );
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "{} move application(s) break the scan order:",
                violations.len()
            ))
        );
        for v in &violations {
            println!("  {}", v);
        }
        println!(
            "{}",
            ColorOutput::warning("Affected states may be reported as unresolved")
        );
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("🛠️  Setting up project structure..."));

    let config_dir = directory.join("config");
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create directory {}", config_dir.display()))?;

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    // An increasing variant: add 1 or 2 stones or double the pile,
    // first player to reach 56 or more wins
    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    let mut doubling = Settings::default();
    doubling.game.terminal.threshold = 56;
    doubling.game.terminal.comparator = Comparator::Ge;
    doubling.game.moves = vec![
        MoveConfig::Add { amount: 1 },
        MoveConfig::Add { amount: 2 },
        MoveConfig::Multiply { factor: 2 },
    ];
    doubling.game.range = RangeConfig { min: 1, max: 55 };
    doubling.game.direction = Direction::Increasing;
    doubling.to_file(&examples_dir.join("doubling.yaml"))?;

    let mut audited = Settings::default();
    audited.analysis.audit_monotonicity = true;
    audited.to_file(&examples_dir.join("audited.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());
    println!("\n{}", ColorOutput::success("✅ Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- solve --config config/default.yaml");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "pile_game_solver",
            "solve",
            "--config",
            "test.yaml",
            "--threshold",
            "40",
            "--max",
            "1000",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_classify_rejects_unknown_label() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("missing.yaml");
        let result = classify_command(config, Some("W3".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("config/examples/doubling.yaml").exists());

        // The generated default must load back cleanly
        let loaded =
            Settings::from_file(&temp_dir.path().join("config/default.yaml")).unwrap();
        assert_eq!(loaded.game.terminal.threshold, 30);
    }
}
