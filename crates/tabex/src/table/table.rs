//! In-memory tabular data.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{Result, TabexError};

use super::cell::ColumnKind;

/// Ordered, uniquely named columns and rows aligned to them.
///
/// Both invariants (unique column names, one value per column in every row)
/// are checked on construction and preserved by every mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table, validating column uniqueness and row arity.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(columns.len());
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(TabexError::DuplicateColumn(name.clone()));
            }
        }

        let expected = columns.len();
        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(TabexError::MalformedData {
                row: idx + 1,
                expected,
                found: row.len(),
            });
        }

        Ok(Self { columns, rows })
    }

    /// Column names in display order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Get all values for a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(|s| s.as_str()).unwrap_or(""))
    }

    /// Get a column by name.
    pub fn column_by_name(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.column_index(name)?;
        Some(self.column_values(index).collect())
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col).map(|s| s.as_str()))
    }

    /// Inferred kind of the column at `index`.
    pub fn column_kind(&self, index: usize) -> ColumnKind {
        ColumnKind::infer(self.column_values(index))
    }

    /// Inferred kinds for every column, in column order.
    pub fn column_kinds(&self) -> Vec<ColumnKind> {
        (0..self.column_count()).map(|i| self.column_kind(i)).collect()
    }

    /// Remove the named columns and their values from every row.
    ///
    /// Names not present in the table are ignored. Returns the removed names
    /// in their former table order.
    pub(crate) fn remove_columns(&mut self, names: &HashSet<&str>) -> Vec<String> {
        let keep: Vec<bool> = self
            .columns
            .iter()
            .map(|c| !names.contains(c.as_str()))
            .collect();

        if keep.iter().all(|&k| k) {
            return Vec::new();
        }

        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.columns.len());
        for (name, &k) in std::mem::take(&mut self.columns).into_iter().zip(&keep) {
            if k {
                kept.push(name);
            } else {
                removed.push(name);
            }
        }
        self.columns = kept;

        for row in &mut self.rows {
            let mut flags = keep.iter();
            row.retain(|_| flags.next().copied().unwrap_or(true));
        }

        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> Table {
        Table::new(
            strings(&["name", "age", "city"]),
            vec![
                strings(&["Alice", "30", "NYC"]),
                strings(&["Bob", "25", "LA"]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_duplicate_columns() {
        let err = Table::new(strings(&["a", "a"]), vec![]).unwrap_err();
        assert!(matches!(err, TabexError::DuplicateColumn(ref n) if n == "a"));
    }

    #[test]
    fn test_new_rejects_ragged_rows() {
        let err = Table::new(
            strings(&["a", "b"]),
            vec![strings(&["1", "2"]), strings(&["3"])],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TabexError::MalformedData {
                row: 2,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_accessors() {
        let table = sample();
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_index("city"), Some(2));
        assert_eq!(table.get(1, 0), Some("Bob"));
        assert_eq!(table.column_by_name("age"), Some(vec!["30", "25"]));
        assert_eq!(table.column_by_name("zip"), None);
    }

    #[test]
    fn test_remove_middle_column() {
        let mut table = sample();
        let removed = table.remove_columns(&HashSet::from(["age"]));

        assert_eq!(removed, vec!["age"]);
        assert_eq!(table.columns(), strings(&["name", "city"]).as_slice());
        assert_eq!(table.rows()[0], strings(&["Alice", "NYC"]));
        assert_eq!(table.rows()[1], strings(&["Bob", "LA"]));
    }

    #[test]
    fn test_remove_reports_table_order() {
        let mut table = sample();
        let removed = table.remove_columns(&HashSet::from(["city", "name", "zip"]));
        assert_eq!(removed, vec!["name", "city"]);
        assert_eq!(table.columns(), strings(&["age"]).as_slice());
    }

    #[test]
    fn test_remove_all_columns_keeps_rows() {
        let mut table = sample();
        table.remove_columns(&HashSet::from(["name", "age", "city"]));
        assert_eq!(table.column_count(), 0);
        assert_eq!(table.row_count(), 2);
        assert!(table.rows().iter().all(|r| r.is_empty()));
    }

    #[test]
    fn test_column_kinds() {
        assert_eq!(
            sample().column_kinds(),
            vec![ColumnKind::Text, ColumnKind::Numeric, ColumnKind::Text]
        );
    }
}
