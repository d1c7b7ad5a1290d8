//! # Engine Module
//!
//! The pipeline stages of a batch run and the types they share.
//!
//! - **Configuration** ([`config`]) - Validated run parameters and their builder
//! - **Discovery** ([`discovery`]) - Locating PAE/CIF pairs under `predictions/`
//! - **Scoring** ([`scorer`]) - Running the external scoring tool and locating its report
//! - **Aggregation** ([`aggregate`]) - Parsing reports, tagging provenance, partitioning and
//!   writing the combined table
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//! - **Error Handling** ([`error`]) - Fatal and per-pair error types

pub mod aggregate;
pub mod config;
pub mod discovery;
pub mod error;
pub mod progress;
pub mod scorer;
