use crate::core::io::traits::{TableFile, TableFileWriter};
use crate::core::models::table::ResultTable;
use crate::core::models::value::Value;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvTableError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Comma-separated table with a header row and no index column.
///
/// Missing values are written as empty fields; floats use the same rendering as the scoring
/// cutoffs (`15.0`, `0.87`).
pub struct CsvFile;

impl TableFile for CsvFile {
    type Error = CsvTableError;

    fn read_from(reader: &mut impl BufRead) -> Result<ResultTable, Self::Error> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let columns = csv_reader
            .headers()?
            .iter()
            .map(str::to_string)
            .collect();
        let mut table = ResultTable::new(columns);

        for record in csv_reader.records() {
            let record = record?;
            table.push_row(record.iter().map(Value::infer).collect());
        }
        Ok(table)
    }
}

impl TableFileWriter for CsvFile {
    fn write_to(table: &ResultTable, writer: &mut impl Write) -> Result<(), Self::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(table.columns())?;
        for row in table.rows() {
            csv_writer.write_record(row.iter().map(ToString::to_string))?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
