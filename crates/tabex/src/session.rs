//! The data session: owner of the currently loaded table.

use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexSet;
use regex::Regex;
use tracing::info;

use crate::error::{Result, TabexError};
use crate::input::{Parser, ParserConfig, SourceMetadata};
use crate::table::Table;

/// Configuration for a [`DataSession`].
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Parser configuration used by [`DataSession::load`].
    pub parser: ParserConfig,
}

/// Holds at most one table at a time.
///
/// Loading replaces the current table wholesale. A failed load or a failed
/// edit leaves the current table untouched.
pub struct DataSession {
    parser: Parser,
    table: Option<Table>,
    source: Option<SourceMetadata>,
}

impl DataSession {
    /// Create an empty session with default configuration.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Create an empty session with custom configuration.
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            parser: Parser::with_config(config.parser),
            table: None,
            source: None,
        }
    }

    /// Load a delimited file, replacing the current table.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<&Table> {
        let path = path.as_ref();
        let (table, source) = self.parser.parse_file(path)?;

        info!(
            file = %source.file,
            columns = table.column_count(),
            rows = table.row_count(),
            "loaded table"
        );

        self.source = Some(source);
        Ok(self.table.insert(table))
    }

    /// Remove every named column from the current table.
    ///
    /// Unknown names are ignored and an empty set is a no-op. Returns the
    /// names that were removed, in their former table order.
    pub fn remove_columns<I, S>(&mut self, names: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let table = self.table.as_mut().ok_or(TabexError::NoTableLoaded)?;

        let names: Vec<S> = names.into_iter().collect();
        let lookup: HashSet<&str> = names.iter().map(|n| n.as_ref()).collect();
        if lookup.is_empty() {
            return Ok(Vec::new());
        }

        let removed = table.remove_columns(&lookup);
        if !removed.is_empty() {
            info!(removed = ?removed, remaining = table.column_count(), "removed columns");
        }
        Ok(removed)
    }

    /// Read-only view of the current table.
    pub fn current_table(&self) -> Result<&Table> {
        self.table.as_ref().ok_or(TabexError::NoTableLoaded)
    }

    /// Metadata of the file the current table was loaded from.
    pub fn source(&self) -> Option<&SourceMetadata> {
        self.source.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.table.is_some()
    }

    /// Drop the current table.
    pub fn clear(&mut self) {
        self.table = None;
        self.source = None;
    }

    /// Start a pending removal over the current columns.
    pub fn selection(&self) -> Result<ColumnSelection> {
        Ok(ColumnSelection::for_table(self.current_table()?))
    }

    /// Apply a pending removal, consuming it.
    pub fn apply_selection(&mut self, selection: ColumnSelection) -> Result<Vec<String>> {
        self.remove_columns(selection.marked())
    }

    /// Current column names matching `pattern`, in table order.
    pub fn columns_matching(&self, pattern: &Regex) -> Result<Vec<String>> {
        Ok(self
            .current_table()?
            .columns()
            .iter()
            .filter(|c| pattern.is_match(c))
            .cloned()
            .collect())
    }
}

impl Default for DataSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Columns marked for removal but not yet removed.
#[derive(Debug, Clone)]
pub struct ColumnSelection {
    columns: IndexSet<String>,
    marked: Vec<bool>,
}

impl ColumnSelection {
    /// A selection over the columns of `table`, nothing marked.
    pub fn for_table(table: &Table) -> Self {
        let columns: IndexSet<String> = table.columns().iter().cloned().collect();
        let marked = vec![false; columns.len()];
        Self { columns, marked }
    }

    /// Column names available for marking, in table order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.as_str())
    }

    /// Mark a column. Returns false if the column is unknown.
    pub fn mark(&mut self, name: &str) -> bool {
        self.set(name, true)
    }

    /// Unmark a column. Returns false if the column is unknown.
    pub fn unmark(&mut self, name: &str) -> bool {
        self.set(name, false)
    }

    /// Flip a column's mark. Returns the new state, or None if unknown.
    pub fn toggle(&mut self, name: &str) -> Option<bool> {
        let idx = self.columns.get_index_of(name)?;
        self.marked[idx] = !self.marked[idx];
        Some(self.marked[idx])
    }

    pub fn is_marked(&self, name: &str) -> bool {
        self.columns
            .get_index_of(name)
            .map(|idx| self.marked[idx])
            .unwrap_or(false)
    }

    /// Marked column names, in table order.
    pub fn marked(&self) -> Vec<&str> {
        self.columns
            .iter()
            .zip(&self.marked)
            .filter(|(_, m)| **m)
            .map(|(c, _)| c.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        !self.marked.iter().any(|&m| m)
    }

    fn set(&mut self, name: &str, value: bool) -> bool {
        match self.columns.get_index_of(name) {
            Some(idx) => {
                self.marked[idx] = value;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file
    }

    fn loaded(content: &str) -> (DataSession, NamedTempFile) {
        let file = create_test_file(content);
        let mut session = DataSession::new();
        session.load(file.path()).expect("load failed");
        (session, file)
    }

    #[test]
    fn test_empty_session() {
        let mut session = DataSession::new();
        assert!(!session.is_loaded());
        assert!(matches!(
            session.current_table(),
            Err(TabexError::NoTableLoaded)
        ));
        assert!(matches!(
            session.remove_columns(["a"]),
            Err(TabexError::NoTableLoaded)
        ));
        assert!(matches!(session.selection(), Err(TabexError::NoTableLoaded)));
    }

    #[test]
    fn test_load_records_source() {
        let (session, _file) = loaded("name,age\nAlice,30\nBob,25\n");
        let source = session.source().unwrap();
        assert_eq!(source.format, "csv");
        assert_eq!(source.row_count, 2);
        assert_eq!(source.column_count, 2);
        assert!(source.hash.starts_with("sha256:"));
    }

    #[test]
    fn test_remove_empty_set_is_noop() {
        let (mut session, _file) = loaded("name,age\nAlice,30\n");
        let before = session.current_table().unwrap().clone();
        let removed = session.remove_columns(Vec::<String>::new()).unwrap();
        assert!(removed.is_empty());
        assert_eq!(session.current_table().unwrap(), &before);
    }

    #[test]
    fn test_clear() {
        let (mut session, _file) = loaded("a\n1\n");
        session.clear();
        assert!(!session.is_loaded());
        assert!(session.source().is_none());
    }

    #[test]
    fn test_selection_marks_in_table_order() {
        let (mut session, _file) = loaded("a,b,c,d\n1,2,3,4\n");
        let mut selection = session.selection().unwrap();

        assert!(selection.is_empty());
        assert!(selection.mark("d"));
        assert!(selection.mark("b"));
        assert!(!selection.mark("zzz"));
        assert_eq!(selection.toggle("c"), Some(true));
        assert_eq!(selection.toggle("c"), Some(false));
        assert_eq!(selection.toggle("zzz"), None);
        assert!(selection.is_marked("b"));
        assert!(!selection.is_marked("c"));
        assert_eq!(selection.marked(), vec!["b", "d"]);

        let removed = session.apply_selection(selection).unwrap();
        assert_eq!(removed, vec!["b", "d"]);
        assert_eq!(session.current_table().unwrap().columns(), ["a", "c"]);
    }

    #[test]
    fn test_unmark() {
        let (session, _file) = loaded("a,b\n1,2\n");
        let mut selection = session.selection().unwrap();
        selection.mark("a");
        assert!(selection.unmark("a"));
        assert!(selection.is_empty());
        assert_eq!(selection.columns().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_columns_matching() {
        let (session, _file) = loaded("id,tmp_a,name,tmp_b\n1,2,3,4\n");
        let pattern = Regex::new("^tmp_").unwrap();
        assert_eq!(
            session.columns_matching(&pattern).unwrap(),
            vec!["tmp_a", "tmp_b"]
        );
    }
}
