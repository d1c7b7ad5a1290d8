use super::value::Value;
use std::collections::{HashMap, HashSet};

/// A row-oriented table with named columns.
///
/// Every row holds exactly one [`Value`] per column, in column order. Rows shorter than the
/// column list are padded with [`Value::Missing`] on insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl ResultTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Appends a row, padding it with missing values up to the column count.
    ///
    /// Values beyond the column count are discarded; readers validate row width before
    /// calling this.
    pub fn push_row(&mut self, mut row: Vec<Value>) {
        row.resize(self.columns.len(), Value::Missing);
        self.rows.push(row);
    }

    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let col = self.column_index(column)?;
        self.rows.get(row).map(|r| &r[col])
    }

    /// Sets `column` to `value` on every row, adding the column at the end if it is new.
    pub fn set_constant_column(&mut self, column: &str, value: Value) {
        match self.column_index(column) {
            Some(idx) => {
                for row in &mut self.rows {
                    row[idx] = value.clone();
                }
            }
            None => {
                self.columns.push(column.to_string());
                for row in &mut self.rows {
                    row.push(value.clone());
                }
            }
        }
    }

    /// Returns a new table with the same columns and only the rows matching `predicate`.
    pub fn filter_rows(&self, predicate: impl Fn(&[Value]) -> bool) -> ResultTable {
        ResultTable {
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .filter(|row| predicate(row))
                .cloned()
                .collect(),
        }
    }

    /// Distinct non-missing renderings of `column`, in order of first appearance.
    pub fn distinct_values(&self, column: &str) -> Vec<String> {
        let Some(idx) = self.column_index(column) else {
            return Vec::new();
        };
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .map(|row| &row[idx])
            .filter(|value| !value.is_missing())
            .map(ToString::to_string)
            .filter(|rendered| seen.insert(rendered.clone()))
            .collect()
    }

    /// Row-wise union of `tables`, aligning columns by name.
    ///
    /// The resulting column list is the union of all input columns in order of first
    /// appearance. Rows coming from a table that lacks a column hold [`Value::Missing`] there.
    pub fn concat(tables: impl IntoIterator<Item = ResultTable>) -> ResultTable {
        let tables: Vec<ResultTable> = tables.into_iter().collect();

        let mut columns: Vec<String> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        for table in &tables {
            for column in &table.columns {
                if !positions.contains_key(column) {
                    positions.insert(column.clone(), columns.len());
                    columns.push(column.clone());
                }
            }
        }

        let total_rows = tables.iter().map(ResultTable::len).sum();
        let mut combined = ResultTable {
            columns,
            rows: Vec::with_capacity(total_rows),
        };

        for table in tables {
            let mapping: Vec<usize> = table.columns.iter().map(|c| positions[c]).collect();
            for row in table.rows {
                let mut aligned = vec![Value::Missing; combined.columns.len()];
                for (value, &target) in row.into_iter().zip(&mapping) {
                    aligned[target] = value;
                }
                combined.rows.push(aligned);
            }
        }

        combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: &[&str], rows: &[&[&str]]) -> ResultTable {
        let mut t = ResultTable::new(columns.iter().map(|c| c.to_string()).collect());
        for row in rows {
            t.push_row(row.iter().map(|v| Value::infer(v)).collect());
        }
        t
    }

    #[test]
    fn push_row_pads_short_rows_with_missing() {
        let mut t = ResultTable::new(vec!["a".into(), "b".into(), "c".into()]);
        t.push_row(vec![Value::Int(1)]);
        assert_eq!(t.rows()[0], vec![Value::Int(1), Value::Missing, Value::Missing]);
    }

    #[test]
    fn set_constant_column_appends_new_column_to_every_row() {
        let mut t = table(&["Chn1", "Score"], &[&["A", "0.5"], &["B", "0.7"]]);
        t.set_constant_column("input_name", Value::text("foo"));

        assert_eq!(t.columns().last().map(String::as_str), Some("input_name"));
        assert_eq!(t.get(0, "input_name"), Some(&Value::text("foo")));
        assert_eq!(t.get(1, "input_name"), Some(&Value::text("foo")));
    }

    #[test]
    fn set_constant_column_overwrites_existing_column() {
        let mut t = table(&["input_name"], &[&["old"]]);
        t.set_constant_column("input_name", Value::text("new"));
        assert_eq!(t.columns().len(), 1);
        assert_eq!(t.get(0, "input_name"), Some(&Value::text("new")));
    }

    #[test]
    fn concat_of_disjoint_tables_unions_columns_with_missing_values() {
        let left = table(&["a", "b"], &[&["1", "x"]]);
        let right = table(&["c"], &[&["2.5"], &["3.5"]]);

        let combined = ResultTable::concat([left, right]);

        assert_eq!(combined.columns(), ["a", "b", "c"]);
        assert_eq!(combined.len(), 3);
        assert_eq!(
            combined.rows()[0],
            vec![Value::Int(1), Value::text("x"), Value::Missing]
        );
        assert_eq!(
            combined.rows()[2],
            vec![Value::Missing, Value::Missing, Value::Float(3.5)]
        );
    }

    #[test]
    fn concat_aligns_reordered_columns_by_name() {
        let left = table(&["a", "b"], &[&["1", "2"]]);
        let right = table(&["b", "a"], &[&["20", "10"]]);

        let combined = ResultTable::concat([left, right]);

        assert_eq!(combined.columns(), ["a", "b"]);
        assert_eq!(combined.get(1, "a"), Some(&Value::Int(10)));
        assert_eq!(combined.get(1, "b"), Some(&Value::Int(20)));
    }

    #[test]
    fn concat_of_nothing_is_empty() {
        let combined = ResultTable::concat(Vec::new());
        assert!(combined.is_empty());
        assert!(combined.columns().is_empty());
    }

    #[test]
    fn distinct_values_preserve_first_appearance_and_skip_missing() {
        let t = table(
            &["Type"],
            &[&["max"], &["asym"], &["max"], &["NaN"], &["asym"]],
        );
        assert_eq!(t.distinct_values("Type"), vec!["max", "asym"]);
        assert!(t.distinct_values("Absent").is_empty());
    }

    #[test]
    fn filter_rows_keeps_columns_and_matching_rows() {
        let t = table(&["Type", "Score"], &[&["asym", "1"], &["max", "2"]]);
        let idx = t.column_index("Type").unwrap();

        let filtered = t.filter_rows(|row| row[idx].as_text() == Some("max"));

        assert_eq!(filtered.columns(), t.columns());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.get(0, "Score"), Some(&Value::Int(2)));
    }
}
