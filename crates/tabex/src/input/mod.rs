//! Input parsing and source metadata.

mod parser;
mod source;

pub use parser::{Parser, ParserConfig, RowArity};
pub use source::SourceMetadata;
