use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::utils::parser;
use ipsae_batch::engine::config::{BatchConfig, BatchConfigBuilder};
use std::path::Path;

/// Merges defaults, the config file, `--set` overrides and CLI flags into a [`BatchConfig`].
///
/// The scoring tool runs in `working_dir` and the result CSVs are written there too.
pub fn build_config(args: &Cli, working_dir: &Path) -> Result<BatchConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let scoring_file = file_config.scoring.take().unwrap_or_default();
    let output_file = file_config.output.take().unwrap_or_default();

    let pae_cutoff = args
        .pae_cutoff
        .or(scoring_file.pae_cutoff)
        .unwrap_or(defaults.pae_cutoff);
    let dist_cutoff = args
        .dist_cutoff
        .or(scoring_file.dist_cutoff)
        .unwrap_or(defaults.dist_cutoff);
    let interpreter = args.interpreter.clone().or(scoring_file.interpreter);
    let prefix = args
        .output_prefix
        .clone()
        .or(output_file.prefix)
        .unwrap_or(defaults.output_prefix);

    let config = BatchConfigBuilder::new()
        .prediction_root(args.out_dir.clone())
        .working_dir(working_dir.to_path_buf())
        .tool_path(args.scoring_tool.clone())
        .interpreter(interpreter)
        .pae_cutoff(pae_cutoff)
        .dist_cutoff(dist_cutoff)
        .output_dir(working_dir.to_path_buf())
        .prefix(prefix)
        .build()?;

    Ok(config)
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) =
            parser::split_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;
        let to_config_error = |e: parser::ParseError| CliError::Config(e.to_string());

        match key {
            "scoring.pae-cutoff" => {
                config
                    .scoring
                    .get_or_insert_with(Default::default)
                    .pae_cutoff = Some(parser::parse_float(key, value).map_err(to_config_error)?);
            }
            "scoring.dist-cutoff" => {
                config
                    .scoring
                    .get_or_insert_with(Default::default)
                    .dist_cutoff = Some(parser::parse_float(key, value).map_err(to_config_error)?);
            }
            "scoring.interpreter" => {
                config
                    .scoring
                    .get_or_insert_with(Default::default)
                    .interpreter = Some(value.to_string());
            }
            "output.prefix" => {
                config.output.get_or_insert_with(Default::default).prefix = Some(value.to_string());
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
