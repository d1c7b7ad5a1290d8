use crate::core::models::table::ResultTable;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading a tabular file format.
///
/// Implementors handle format-specific parsing; the path-based helper only adds buffered
/// file handling on top of it.
pub trait TableFile {
    /// The error type for I/O and parsing failures.
    type Error: Error + From<io::Error>;

    /// Reads a table from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is malformed or the reader fails.
    fn read_from(reader: &mut impl BufRead) -> Result<ResultTable, Self::Error>;

    /// Reads a table from a file path.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<ResultTable, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}

/// A [`TableFile`] format that can also be written.
pub trait TableFileWriter: TableFile {
    /// Writes a table, header first, to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(table: &ResultTable, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Writes a table to a file path, creating or truncating the file.
    fn write_to_path<P: AsRef<Path>>(table: &ResultTable, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(table, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
