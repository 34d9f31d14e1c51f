//! Export entry point.

use std::path::Path;

use tracing::info;

use super::document::{self, DocumentLayout, DocumentOptions};
use super::format::ExportFormat;
use super::spreadsheet;
use crate::error::Result;
use crate::table::Table;

/// Configuration for an [`Exporter`].
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Name of the single worksheet in spreadsheet output.
    pub sheet_name: String,
    /// Document output options.
    pub document: DocumentOptions,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            sheet_name: "Sheet1".to_string(),
            document: DocumentOptions::default(),
        }
    }
}

/// Serializes a table to one of the supported formats.
///
/// The table is only read. The destination is created or overwritten; its
/// parent directory must already exist.
pub struct Exporter {
    config: ExportConfig,
}

impl Exporter {
    /// Create an exporter with default configuration.
    pub fn new() -> Self {
        Self::with_config(ExportConfig::default())
    }

    /// Create an exporter with custom configuration.
    pub fn with_config(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Write `table` to `destination` in `format`.
    pub fn export(
        &self,
        table: &Table,
        format: ExportFormat,
        destination: impl AsRef<Path>,
    ) -> Result<()> {
        let destination = destination.as_ref();

        match format {
            ExportFormat::Spreadsheet => {
                spreadsheet::write_workbook(table, &self.config.sheet_name, destination)?;
            }
            ExportFormat::Document => {
                let layout = DocumentLayout::from_table(table, &self.config.document);
                document::write_document(&layout, &self.config.document, destination)?;
            }
        }

        info!(
            format = %format,
            path = %destination.display(),
            rows = table.row_count(),
            columns = table.column_count(),
            "exported table"
        );
        Ok(())
    }

    /// Like [`Exporter::export`], with the format given by name
    /// (`xlsx`/`spreadsheet` or `pdf`/`document`).
    pub fn export_named(
        &self,
        table: &Table,
        format: &str,
        destination: impl AsRef<Path>,
    ) -> Result<()> {
        let format: ExportFormat = format.parse()?;
        self.export(table, format, destination)
    }

    /// The page layout a document export of `table` would produce.
    pub fn document_layout(&self, table: &Table) -> DocumentLayout {
        DocumentLayout::from_table(table, &self.config.document)
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new()
    }
}
