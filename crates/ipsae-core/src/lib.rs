//! # ipsae-batch Core Library
//!
//! Batch driver for an external ipSAE-style interface scoring tool. The library walks the
//! `predictions/` tree written by a structure predictor, scores every PAE/CIF model pair by
//! running the external tool, and merges the per-model reports into CSV tables.
//!
//! ## Architecture
//!
//! The crate keeps the same three layers for every concern:
//!
//! - **[`core`]: The Foundation.** Plain data models (`StructurePair`, `ResultTable`, `Value`),
//!   the whitespace report and CSV readers/writers, and formatting helpers.
//!
//! - **[`engine`]: The Pipeline Stages.** Pair discovery, scorer invocation, report aggregation
//!   and partitioning, plus the configuration, error and progress types they share.
//!
//! - **[`workflows`]: The Public API.** Ties the stages together into a single sequential batch
//!   run that consumes a `BatchConfig` and returns a `BatchSummary`.

pub mod core;
pub mod engine;
pub mod workflows;
