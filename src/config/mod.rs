//! Configuration management for the pile game solver

pub mod settings;

pub use settings::{
    AnalysisConfig, CliOverrides, GameConfig, MoveConfig, OutputConfig, OutputFormat, RangeConfig,
    Settings, TerminalConfig,
};
