//! Export format selector.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TabexError;

/// The supported export targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// XLSX workbook with a single sheet.
    Spreadsheet,
    /// Paginated PDF, one line per row.
    Document,
}

impl ExportFormat {
    /// All formats, in the order a selector should offer them.
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Spreadsheet, ExportFormat::Document];

    /// File extension for this format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Spreadsheet => "xlsx",
            ExportFormat::Document => "pdf",
        }
    }

    /// Destination next to `source` with this format's extension.
    pub fn default_destination(&self, source: impl AsRef<Path>) -> PathBuf {
        source.as_ref().with_extension(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = TabexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "xlsx" | "spreadsheet" => Ok(ExportFormat::Spreadsheet),
            "pdf" | "document" => Ok(ExportFormat::Document),
            _ => Err(TabexError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}
