//! Provides input/output functionality for tabular score files.
//!
//! The external scoring tool writes whitespace-aligned text reports ([`report`]); the batch
//! results are written as comma-separated tables ([`csv_table`]). Both formats are read through
//! [`traits::TableFile`]; only CSV implements [`traits::TableFileWriter`].

pub mod csv_table;
pub mod report;
pub mod traits;
