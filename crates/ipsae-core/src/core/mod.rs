//! Foundation types shared by every pipeline stage.
//!
//! - [`models`] holds the structure-pair and tabular data models.
//! - [`io`] reads whitespace-delimited score reports and reads/writes CSV tables.
//! - [`utils`] contains small formatting helpers.

pub mod io;
pub mod models;
pub mod utils;
