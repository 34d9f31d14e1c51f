//! Table model and cell typing.

mod cell;
mod table;

pub use cell::{CellValue, ColumnKind};
pub use table::Table;
