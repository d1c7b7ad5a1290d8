//! # Workflows Module
//!
//! Top-level entry points of the library. A workflow validates its inputs, runs the engine
//! stages in order and returns a summary of what it produced.
//!
//! - **Batch Workflow** ([`batch`]) - Discover pairs, score each one with the external tool,
//!   and write the partitioned CSV results.

pub mod batch;
