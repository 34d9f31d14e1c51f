//! Table export to spreadsheet and document formats.

mod document;
mod exporter;
mod format;
mod spreadsheet;

pub use document::{DocumentLayout, DocumentOptions};
pub use exporter::{ExportConfig, Exporter};
pub use format::ExportFormat;
