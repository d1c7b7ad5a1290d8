use crate::core::io::traits::TableFile;
use crate::core::models::table::ResultTable;
use crate::core::models::value::Value;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Report has no header line")]
    MissingHeader,
    #[error("Parse error on line {line}: expected at most {expected} fields, found {found}")]
    TooManyFields {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Whitespace-delimited score report as written by the scoring tool.
///
/// The first non-blank line names the columns. Fields are separated by any run of spaces or
/// tabs; blank lines are ignored. Rows with fewer fields than the header are padded with
/// missing values, rows with more fields are rejected.
pub struct ReportFile;

impl TableFile for ReportFile {
    type Error = ReportError;

    fn read_from(reader: &mut impl BufRead) -> Result<ResultTable, Self::Error> {
        let mut table: Option<ResultTable> = None;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }

            match table.as_mut() {
                None => {
                    table = Some(ResultTable::new(
                        fields.into_iter().map(str::to_string).collect(),
                    ));
                }
                Some(t) => {
                    let expected = t.columns().len();
                    if fields.len() > expected {
                        return Err(ReportError::TooManyFields {
                            line: line_num,
                            expected,
                            found: fields.len(),
                        });
                    }
                    t.push_row(fields.into_iter().map(Value::infer).collect());
                }
            }
        }

        table.ok_or(ReportError::MissingHeader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn parse(content: &str) -> Result<ResultTable, ReportError> {
        ReportFile::read_from(&mut Cursor::new(content))
    }

    #[test]
    fn reads_space_aligned_report_with_typed_cells() {
        let content = "\
Chn1 Chn2  PAE  Dist  Type   ipSAE    n0res
A    B     15   15    asym   0.873    120
B    A     15   15    asym   0.801    118
";
        let table = parse(content).unwrap();

        assert_eq!(
            table.columns(),
            ["Chn1", "Chn2", "PAE", "Dist", "Type", "ipSAE", "n0res"]
        );
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(0, "Chn1"), Some(&Value::text("A")));
        assert_eq!(table.get(0, "ipSAE"), Some(&Value::Float(0.873)));
        assert_eq!(table.get(1, "n0res"), Some(&Value::Int(118)));
    }

    #[test]
    fn tabs_and_blank_lines_are_tolerated() {
        let content = "\n\nChn1\tChn2\t Type\n\nA\t\tB  max\n\n";
        let table = parse(content).unwrap();

        assert_eq!(table.columns(), ["Chn1", "Chn2", "Type"]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0, "Type"), Some(&Value::text("max")));
    }

    #[test]
    fn short_rows_are_padded_with_missing() {
        let table = parse("a b c\n1 2\n").unwrap();
        assert_eq!(table.get(0, "c"), Some(&Value::Missing));
    }

    #[test]
    fn long_rows_are_rejected_with_line_number() {
        let err = parse("a b\n1 2\n1 2 3\n").unwrap_err();
        assert!(matches!(
            err,
            ReportError::TooManyFields {
                line: 3,
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn empty_input_has_no_header() {
        assert!(matches!(parse(""), Err(ReportError::MissingHeader)));
        assert!(matches!(parse("  \n\t\n"), Err(ReportError::MissingHeader)));
    }

    #[test]
    fn header_only_report_is_an_empty_table() {
        let table = parse("Chn1 Chn2 Type Score\n").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns().len(), 4);
    }

    #[test]
    fn unreadable_path_is_an_io_error() {
        let dir = tempdir().unwrap();
        let result = ReportFile::read_from_path(dir.path().join("absent.txt"));
        assert!(matches!(result, Err(ReportError::Io(_))));
    }
}
