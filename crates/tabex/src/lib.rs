//! tabex: load a delimited table, drop columns, export it.
//!
//! A [`DataSession`] owns the currently loaded [`Table`] and applies column
//! removals to it. An [`Exporter`] writes a table to a spreadsheet (XLSX) or
//! a paginated document (PDF).
//!
//! # Example
//!
//! ```no_run
//! use tabex::{DataSession, ExportFormat, Exporter};
//!
//! let mut session = DataSession::new();
//! session.load("people.csv")?;
//! session.remove_columns(["age"])?;
//!
//! let exporter = Exporter::new();
//! exporter.export(session.current_table()?, ExportFormat::Spreadsheet, "people.xlsx")?;
//! # Ok::<(), tabex::TabexError>(())
//! ```

pub mod error;
pub mod export;
pub mod input;
pub mod table;

mod session;

pub use error::{Result, TabexError};
pub use export::{DocumentLayout, DocumentOptions, ExportConfig, ExportFormat, Exporter};
pub use input::{Parser, ParserConfig, RowArity, SourceMetadata};
pub use session::{ColumnSelection, DataSession, SessionConfig};
pub use table::{CellValue, ColumnKind, Table};
