use super::config::ScoringConfig;
use crate::core::models::pair::StructurePair;
use crate::core::utils::format::format_float;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Failed to launch scoring command '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Scoring command exited with {status}")]
    CommandFailed {
        status: ExitStatus,
        stdout: String,
        stderr: String,
    },

    #[error("Expected output file not found: {file_name}")]
    ReportNotFound { file_name: String },
}

/// Where the scoring tool left its report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLocation {
    /// The directory the tool ran in. Reports found here are removed after parsing.
    WorkingDir,
    /// Next to the structure file.
    StructureDir,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringReport {
    pub path: PathBuf,
    pub location: ReportLocation,
}

/// Runs the external scoring tool for one structure pair at a time.
///
/// The cutoffs are rendered once with [`format_float`] and reused both as command-line
/// arguments and to predict the report name `<cif_stem>_<pae>_<dist>.txt`. The tool names its
/// report from the arguments it receives, so the two must never be formatted independently.
pub struct Scorer<'a> {
    config: &'a ScoringConfig,
    working_dir: &'a Path,
    pae_arg: String,
    dist_arg: String,
}

impl<'a> Scorer<'a> {
    pub fn new(config: &'a ScoringConfig, working_dir: &'a Path) -> Self {
        Self {
            config,
            working_dir,
            pae_arg: format_float(config.pae_cutoff),
            dist_arg: format_float(config.dist_cutoff),
        }
    }

    pub fn report_file_name(&self, pair: &StructurePair) -> String {
        format!("{}_{}_{}.txt", pair.cif_stem(), self.pae_arg, self.dist_arg)
    }

    /// Builds the child process: `[interpreter] tool <pae> <cif> <pae_cutoff> <dist_cutoff>`.
    pub fn command_for(&self, pair: &StructurePair) -> Command {
        let mut command = match &self.config.interpreter {
            Some(interpreter) => {
                let mut c = Command::new(interpreter);
                c.arg(&self.config.tool_path);
                c
            }
            None => Command::new(&self.config.tool_path),
        };
        command
            .arg(&pair.pae_file)
            .arg(&pair.cif_file)
            .arg(&self.pae_arg)
            .arg(&self.dist_arg)
            .current_dir(self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        command
    }

    /// Runs the tool on `pair` and returns the location of its report.
    ///
    /// Blocks until the child exits. Failures are logged here and returned; they never
    /// affect other pairs.
    pub fn score(&self, pair: &StructurePair) -> Result<ScoringReport, ScoringError> {
        let mut command = self.command_for(pair);
        debug!("Running: {}", render_command(&command));

        let output = command.output().map_err(|source| {
            warn!("Unexpected error launching scoring tool: {}", source);
            ScoringError::Spawn {
                program: command.get_program().to_string_lossy().into_owned(),
                source,
            }
        })?;

        if !output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            warn!(
                "Scoring tool failed for {} ({})",
                pair.cif_file_name(),
                output.status
            );
            warn!("stdout: {}", stdout.trim_end());
            warn!("stderr: {}", stderr.trim_end());
            return Err(ScoringError::CommandFailed {
                status: output.status,
                stdout,
                stderr,
            });
        }

        self.locate_report(pair).ok_or_else(|| {
            let file_name = self.report_file_name(pair);
            warn!("Expected output file not found: {}", file_name);
            ScoringError::ReportNotFound { file_name }
        })
    }

    /// Looks for the report in the working directory first, then beside the structure file.
    pub fn locate_report(&self, pair: &StructurePair) -> Option<ScoringReport> {
        let file_name = self.report_file_name(pair);

        let in_working_dir = self.working_dir.join(&file_name);
        if in_working_dir.exists() {
            return Some(ScoringReport {
                path: in_working_dir,
                location: ReportLocation::WorkingDir,
            });
        }

        let beside_structure = pair.cif_dir().join(&file_name);
        if beside_structure.exists() {
            return Some(ScoringReport {
                path: beside_structure,
                location: ReportLocation::StructureDir,
            });
        }

        None
    }
}

fn render_command(command: &Command) -> String {
    std::iter::once(command.get_program())
        .chain(command.get_args())
        .map(|part| part.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}
