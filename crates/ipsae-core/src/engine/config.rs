use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

/// How the external scoring tool is launched and what cutoffs it receives.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub tool_path: PathBuf,
    /// Program used to run `tool_path` (e.g. `python`); `None` executes the tool directly.
    pub interpreter: Option<String>,
    pub pae_cutoff: f64,
    pub dist_cutoff: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
    pub prefix: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
    /// Structure-prediction output directory; pairs are searched in its `predictions/` child.
    pub prediction_root: PathBuf,
    /// Directory the scoring tool runs in and the first place its report is looked for.
    pub working_dir: PathBuf,
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
}

#[derive(Default)]
pub struct BatchConfigBuilder {
    prediction_root: Option<PathBuf>,
    working_dir: Option<PathBuf>,
    tool_path: Option<PathBuf>,
    interpreter: Option<String>,
    pae_cutoff: Option<f64>,
    dist_cutoff: Option<f64>,
    output_dir: Option<PathBuf>,
    prefix: Option<String>,
}

impl BatchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prediction_root(mut self, path: PathBuf) -> Self {
        self.prediction_root = Some(path);
        self
    }
    pub fn working_dir(mut self, path: PathBuf) -> Self {
        self.working_dir = Some(path);
        self
    }
    pub fn tool_path(mut self, path: PathBuf) -> Self {
        self.tool_path = Some(path);
        self
    }
    pub fn interpreter(mut self, program: Option<String>) -> Self {
        self.interpreter = program;
        self
    }
    pub fn pae_cutoff(mut self, cutoff: f64) -> Self {
        self.pae_cutoff = Some(cutoff);
        self
    }
    pub fn dist_cutoff(mut self, cutoff: f64) -> Self {
        self.dist_cutoff = Some(cutoff);
        self
    }
    pub fn output_dir(mut self, path: PathBuf) -> Self {
        self.output_dir = Some(path);
        self
    }
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn build(self) -> Result<BatchConfig, ConfigError> {
        let pae_cutoff = self
            .pae_cutoff
            .ok_or(ConfigError::MissingParameter("pae_cutoff"))?;
        let dist_cutoff = self
            .dist_cutoff
            .ok_or(ConfigError::MissingParameter("dist_cutoff"))?;
        ensure_finite("pae_cutoff", pae_cutoff)?;
        ensure_finite("dist_cutoff", dist_cutoff)?;

        let prefix = self.prefix.ok_or(ConfigError::MissingParameter("prefix"))?;
        if prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "prefix",
                reason: "output prefix cannot be empty".to_string(),
            });
        }

        let interpreter = self.interpreter.filter(|p| !p.trim().is_empty());

        let scoring = ScoringConfig {
            tool_path: self
                .tool_path
                .ok_or(ConfigError::MissingParameter("tool_path"))?,
            interpreter,
            pae_cutoff,
            dist_cutoff,
        };
        let output = OutputConfig {
            output_dir: self
                .output_dir
                .ok_or(ConfigError::MissingParameter("output_dir"))?,
            prefix,
        };
        Ok(BatchConfig {
            prediction_root: self
                .prediction_root
                .ok_or(ConfigError::MissingParameter("prediction_root"))?,
            working_dir: self
                .working_dir
                .ok_or(ConfigError::MissingParameter("working_dir"))?,
            scoring,
            output,
        })
    }
}

fn ensure_finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            name,
            reason: format!("expected a finite number, got {}", value),
        })
    }
}
