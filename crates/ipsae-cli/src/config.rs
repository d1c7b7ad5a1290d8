//! Run configuration assembled from built-in defaults, an optional TOML file, `--set`
//! overrides and command-line flags, in increasing order of precedence.

mod builder;
mod defaults;
mod file;

pub use builder::build_config;
