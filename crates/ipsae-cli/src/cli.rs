use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "ipsae-batch - Score every predicted model in a structure-prediction output directory with an ipSAE-style tool and collate the reports into CSV files.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    // --- Inputs ---
    /// Structure-prediction output directory (must contain a `predictions/` folder).
    #[arg(value_name = "OUT_DIR")]
    pub out_dir: PathBuf,

    /// Path to the scoring tool executable or script (e.g. ipsae.py).
    #[arg(value_name = "SCORING_TOOL")]
    pub scoring_tool: PathBuf,

    // --- Scoring ---
    /// PAE cutoff passed to the scoring tool [default: 15.0]
    #[arg(long = "pae_cutoff", visible_alias = "pae-cutoff", value_name = "FLOAT")]
    pub pae_cutoff: Option<f64>,

    /// Distance cutoff passed to the scoring tool [default: 15.0]
    #[arg(long = "dist_cutoff", visible_alias = "dist-cutoff", value_name = "FLOAT")]
    pub dist_cutoff: Option<f64>,

    /// Program used to run the scoring tool, e.g. 'python'.
    /// By default the tool is executed directly.
    #[arg(long, value_name = "PROGRAM")]
    pub interpreter: Option<String>,

    // --- Output ---
    /// Prefix for the output CSV files [default: ipsae_results]
    #[arg(
        long = "output_prefix",
        visible_alias = "output-prefix",
        value_name = "PREFIX"
    )]
    pub output_prefix: Option<String>,

    // --- Configuration ---
    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S scoring.pae-cutoff=10
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    // --- Logging ---
    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
