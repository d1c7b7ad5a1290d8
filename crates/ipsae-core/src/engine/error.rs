use super::config::ConfigError;
use super::scorer::ScoringError;
use crate::core::io::csv_table::CsvTableError;
use crate::core::io::report::ReportError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a batch run.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Output directory not found: {}", .0.display())]
    OutputDirNotFound(PathBuf),

    #[error("Scoring tool not found: {}", .0.display())]
    ScoringToolNotFound(PathBuf),

    #[error("Predictions directory not found at {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("No structure pairs found under {}", .0.display())]
    NoStructurePairs(PathBuf),

    #[error("Failed to read directory '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write results to '{}': {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: CsvTableError,
    },

    #[error("Internal logic error: {0}")]
    Internal(String),
}

/// Reasons a single structure pair contributes no rows. Never fatal to the batch.
#[derive(Debug, Error)]
pub enum PairError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error("Failed to parse report '{}': {source}", .path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: ReportError,
    },

    #[error("Report '{}' contains no data rows", .path.display())]
    EmptyReport { path: PathBuf },
}
