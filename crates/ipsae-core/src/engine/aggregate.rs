use super::error::{EngineError, PairError};
use super::scorer::{ReportLocation, ScoringReport};
use crate::core::io::csv_table::CsvFile;
use crate::core::io::report::ReportFile;
use crate::core::io::traits::{TableFile, TableFileWriter};
use crate::core::models::pair::StructurePair;
use crate::core::models::table::ResultTable;
use crate::core::models::value::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const INPUT_NAME_COLUMN: &str = "input_name";
pub const PAE_FILE_COLUMN: &str = "pae_file";
pub const CIF_FILE_COLUMN: &str = "cif_file";

pub const TYPE_COLUMN: &str = "Type";
pub const CHAIN1_COLUMN: &str = "Chn1";
pub const CHAIN2_COLUMN: &str = "Chn2";

pub const COMPLETE_SUFFIX: &str = "complete";
pub const A_TO_B_SUFFIX: &str = "A_to_B";
pub const B_TO_A_SUFFIX: &str = "B_to_A";

/// Collects the per-pair tables of a batch run.
#[derive(Debug, Default)]
pub struct Aggregator {
    tables: Vec<ResultTable>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a scoring report, tags it with the pair's provenance and keeps it.
    ///
    /// A report found in the working directory is deleted once it has been parsed; reports
    /// beside the structure file are left in place. Returns the number of rows added.
    pub fn add_report(
        &mut self,
        pair: &StructurePair,
        report: &ScoringReport,
    ) -> Result<usize, PairError> {
        let mut table =
            ReportFile::read_from_path(&report.path).map_err(|source| PairError::Report {
                path: report.path.clone(),
                source,
            })?;
        if table.is_empty() {
            return Err(PairError::EmptyReport {
                path: report.path.clone(),
            });
        }

        tag_provenance(&mut table, pair);
        let rows = table.len();
        self.tables.push(table);

        if report.location == ReportLocation::WorkingDir {
            if let Err(e) = fs::remove_file(&report.path) {
                debug!("Could not remove temporary report {:?}: {}", report.path, e);
            }
        }

        Ok(rows)
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Concatenates every collected table, or `None` if nothing was collected.
    pub fn combine(self) -> Option<ResultTable> {
        if self.tables.is_empty() {
            None
        } else {
            Some(ResultTable::concat(self.tables))
        }
    }
}

/// Adds the `input_name`, `pae_file` and `cif_file` columns to every row.
pub fn tag_provenance(table: &mut ResultTable, pair: &StructurePair) {
    table.set_constant_column(INPUT_NAME_COLUMN, Value::text(pair.group_name.as_str()));
    table.set_constant_column(PAE_FILE_COLUMN, Value::text(pair.pae_file_name()));
    table.set_constant_column(CIF_FILE_COLUMN, Value::text(pair.cif_file_name()));
}

/// One output file: `<prefix>_<suffix>.csv`.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    pub suffix: String,
    pub table: ResultTable,
}

/// Splits the combined table into the files written at the end of a run.
///
/// In order: one partition per distinct `Type` value, then `A_to_B` and `B_to_A` chain
/// directions, then the complete table. The criteria are independent, so a row may appear in
/// several partitions. Empty selections and absent key columns produce no partition.
pub fn partition(combined: &ResultTable) -> Vec<Partition> {
    let mut partitions = Vec::new();

    if let Some(type_idx) = combined.column_index(TYPE_COLUMN) {
        let types = combined.distinct_values(TYPE_COLUMN);
        info!("Found interaction types: {:?}", types);
        for interaction_type in types {
            let table = combined.filter_rows(|row| {
                !row[type_idx].is_missing() && row[type_idx].to_string() == interaction_type
            });
            if !table.is_empty() {
                partitions.push(Partition {
                    suffix: interaction_type,
                    table,
                });
            }
        }
    }

    if let (Some(chn1), Some(chn2)) = (
        combined.column_index(CHAIN1_COLUMN),
        combined.column_index(CHAIN2_COLUMN),
    ) {
        for (suffix, from, to) in [(A_TO_B_SUFFIX, "A", "B"), (B_TO_A_SUFFIX, "B", "A")] {
            let table = combined.filter_rows(|row| {
                row[chn1].as_text() == Some(from) && row[chn2].as_text() == Some(to)
            });
            if !table.is_empty() {
                partitions.push(Partition {
                    suffix: suffix.to_string(),
                    table,
                });
            }
        }
    }

    partitions.push(Partition {
        suffix: COMPLETE_SUFFIX.to_string(),
        table: combined.clone(),
    });
    partitions
}

pub fn output_path(output_dir: &Path, prefix: &str, suffix: &str) -> PathBuf {
    output_dir.join(format!("{}_{}.csv", prefix, suffix))
}

/// A CSV file written by [`write_partitions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub rows: usize,
}

pub fn write_partitions(
    partitions: &[Partition],
    output_dir: &Path,
    prefix: &str,
) -> Result<Vec<WrittenFile>, EngineError> {
    let mut written = Vec::with_capacity(partitions.len());
    for partition in partitions {
        let path = output_path(output_dir, prefix, &partition.suffix);
        CsvFile::write_to_path(&partition.table, &path).map_err(|source| {
            EngineError::Output {
                path: path.clone(),
                source,
            }
        })?;
        info!("Saved {} rows to {}", partition.table.len(), path.display());
        written.push(WrittenFile {
            path,
            rows: partition.table.len(),
        });
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn table(columns: &[&str], rows: &[&[&str]]) -> ResultTable {
        let mut t = ResultTable::new(columns.iter().map(|c| c.to_string()).collect());
        for row in rows {
            t.push_row(row.iter().map(|v| Value::infer(v)).collect());
        }
        t
    }

    fn suffixes(partitions: &[Partition]) -> Vec<&str> {
        partitions.iter().map(|p| p.suffix.as_str()).collect()
    }

    fn find<'a>(partitions: &'a [Partition], suffix: &str) -> Option<&'a Partition> {
        partitions.iter().find(|p| p.suffix == suffix)
    }

    #[test]
    fn type_partitions_cover_each_value_and_sum_to_complete() {
        let combined = table(
            &["Type", "Score"],
            &[&["asym", "1"], &["max", "2"], &["asym", "3"], &["max", "4"], &["asym", "5"]],
        );

        let partitions = partition(&combined);

        assert_eq!(suffixes(&partitions), ["asym", "max", "complete"]);
        let asym = find(&partitions, "asym").unwrap();
        let max = find(&partitions, "max").unwrap();
        assert_eq!(asym.table.len(), 3);
        assert_eq!(max.table.len(), 2);
        assert!(asym
            .table
            .rows()
            .iter()
            .all(|row| row[0] == Value::text("asym")));
        assert_eq!(asym.table.len() + max.table.len(), combined.len());
    }

    #[test]
    fn chain_direction_partitions_skip_other_pairs() {
        let combined = table(
            &["Chn1", "Chn2"],
            &[
                &["A", "B"],
                &["A", "B"],
                &["A", "B"],
                &["B", "A"],
                &["B", "A"],
                &["A", "A"],
            ],
        );

        let partitions = partition(&combined);

        assert_eq!(suffixes(&partitions), ["A_to_B", "B_to_A", "complete"]);
        assert_eq!(find(&partitions, "A_to_B").unwrap().table.len(), 3);
        assert_eq!(find(&partitions, "B_to_A").unwrap().table.len(), 2);
        assert_eq!(find(&partitions, "complete").unwrap().table.len(), 6);
    }

    #[test]
    fn empty_direction_produces_no_partition() {
        let combined = table(&["Chn1", "Chn2", "Type"], &[&["A", "B", "asym"]]);

        let partitions = partition(&combined);

        assert_eq!(suffixes(&partitions), ["asym", "A_to_B", "complete"]);
    }

    #[test]
    fn partitions_overlap_between_type_and_direction() {
        let combined = table(
            &["Chn1", "Chn2", "Type"],
            &[&["A", "B", "asym"], &["B", "A", "asym"], &["A", "B", "max"]],
        );

        let partitions = partition(&combined);

        let asym = find(&partitions, "asym").unwrap();
        let a_to_b = find(&partitions, "A_to_B").unwrap();
        assert_eq!(asym.table.len(), 2);
        assert_eq!(a_to_b.table.len(), 2);
        assert_eq!(asym.table.rows()[0], a_to_b.table.rows()[0]);
    }

    #[test]
    fn missing_key_columns_leave_only_complete() {
        let combined = table(&["Chn1", "Score"], &[&["A", "0.5"]]);
        let partitions = partition(&combined);
        assert_eq!(suffixes(&partitions), ["complete"]);
    }

    #[test]
    fn rows_without_type_are_only_in_complete() {
        let left = table(&["Type"], &[&["asym"]]);
        let right = table(&["Other"], &[&["x"]]);
        let combined = ResultTable::concat([left, right]);

        let partitions = partition(&combined);

        assert_eq!(suffixes(&partitions), ["asym", "complete"]);
        assert_eq!(find(&partitions, "asym").unwrap().table.len(), 1);
    }

    #[test]
    fn write_partitions_creates_prefixed_csv_files() {
        let dir = tempdir().unwrap();
        let combined = table(&["Chn1", "Chn2", "Type"], &[&["A", "B", "asym"]]);

        let written = write_partitions(&partition(&combined), dir.path(), "run").unwrap();

        assert_eq!(written.len(), 3);
        for name in ["run_asym.csv", "run_A_to_B.csv", "run_complete.csv"] {
            let content = fs::read_to_string(dir.path().join(name)).unwrap();
            assert_eq!(content, "Chn1,Chn2,Type\nA,B,asym\n");
        }
        assert!(!dir.path().join("run_B_to_A.csv").exists());
    }

    #[test]
    fn write_partitions_reports_unwritable_destination() {
        let dir = tempdir().unwrap();
        let combined = table(&["a"], &[&["1"]]);
        let missing_dir = dir.path().join("absent");

        let result = write_partitions(&partition(&combined), &missing_dir, "run");

        assert!(matches!(result, Err(EngineError::Output { .. })));
    }

    fn pair_in(dir: &Path) -> StructurePair {
        StructurePair::new(
            dir.join("pae_foo_model_0.npz"),
            dir.join("foo_model_0.cif"),
            "foo",
        )
    }

    #[test]
    fn add_report_tags_provenance_and_removes_working_dir_report() {
        let dir = tempdir().unwrap();
        let report_path = dir.path().join("foo_model_0_15.0_15.0.txt");
        fs::write(&report_path, "Chn1 Chn2 Type Score\nA B asym 0.87\n").unwrap();
        let report = ScoringReport {
            path: report_path.clone(),
            location: ReportLocation::WorkingDir,
        };

        let mut aggregator = Aggregator::new();
        let rows = aggregator.add_report(&pair_in(dir.path()), &report).unwrap();

        assert_eq!(rows, 1);
        assert!(!report_path.exists());
        let combined = aggregator.combine().unwrap();
        assert_eq!(
            combined.columns(),
            ["Chn1", "Chn2", "Type", "Score", "input_name", "pae_file", "cif_file"]
        );
        assert_eq!(combined.get(0, "input_name"), Some(&Value::text("foo")));
        assert_eq!(
            combined.get(0, "pae_file"),
            Some(&Value::text("pae_foo_model_0.npz"))
        );
        assert_eq!(
            combined.get(0, "cif_file"),
            Some(&Value::text("foo_model_0.cif"))
        );
    }

    #[test]
    fn add_report_keeps_report_beside_structure() {
        let dir = tempdir().unwrap();
        let report_path = dir.path().join("foo_model_0_15.0_15.0.txt");
        fs::write(&report_path, "Chn1 Chn2\nA B\n").unwrap();
        let report = ScoringReport {
            path: report_path.clone(),
            location: ReportLocation::StructureDir,
        };

        let mut aggregator = Aggregator::new();
        aggregator.add_report(&pair_in(dir.path()), &report).unwrap();

        assert!(report_path.exists());
        assert_eq!(aggregator.table_count(), 1);
    }

    #[test]
    fn header_only_report_is_rejected_and_not_deleted() {
        let dir = tempdir().unwrap();
        let report_path = dir.path().join("r.txt");
        fs::write(&report_path, "Chn1 Chn2 Type\n").unwrap();
        let report = ScoringReport {
            path: report_path.clone(),
            location: ReportLocation::WorkingDir,
        };

        let mut aggregator = Aggregator::new();
        let result = aggregator.add_report(&pair_in(dir.path()), &report);

        assert!(matches!(result, Err(PairError::EmptyReport { .. })));
        assert!(report_path.exists());
        assert!(aggregator.is_empty());
        assert!(aggregator.combine().is_none());
    }

    #[test]
    fn malformed_report_is_a_pair_error() {
        let dir = tempdir().unwrap();
        let report_path = dir.path().join("r.txt");
        fs::write(&report_path, "a b\n1 2 3\n").unwrap();
        let report = ScoringReport {
            path: report_path,
            location: ReportLocation::StructureDir,
        };

        let mut aggregator = Aggregator::new();
        let result = aggregator.add_report(&pair_in(dir.path()), &report);

        assert!(matches!(result, Err(PairError::Report { .. })));
    }
}
