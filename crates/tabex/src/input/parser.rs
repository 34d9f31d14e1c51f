//! Delimited text parser producing a [`Table`].

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use super::source::SourceMetadata;
use crate::error::{Result, TabexError};
use crate::table::Table;

/// What to do with a data row whose field count differs from the header's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowArity {
    /// Fail the load with [`TabexError::MalformedData`].
    #[default]
    Strict,
    /// Pad short rows with empty values and truncate long ones.
    Coerce,
}

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Quote character.
    pub quote: u8,
    /// Handling of rows with the wrong number of fields.
    pub arity: RowArity,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            arity: RowArity::Strict,
        }
    }
}

/// Parses delimited text files with a header row.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the table and metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(Table, SourceMetadata)> {
        let path = path.as_ref();
        let read_err = |e| TabexError::FileRead {
            path: path.to_path_buf(),
            source: e,
        };

        let mut file = File::open(path).map_err(read_err)?;
        let size_bytes = file.metadata().map_err(read_err)?.len();

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(read_err)?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let text = std::str::from_utf8(&contents).map_err(|_| TabexError::Encoding {
            path: path.to_path_buf(),
        })?;

        let (table, coerced_rows) = self.parse_records(text)?;

        let format = match self.config.delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        let mut source = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            size_bytes,
            format,
            table.row_count(),
            table.column_count(),
        );
        source.coerced_rows = coerced_rows;

        Ok((table, source))
    }

    /// Parse delimited text already held in memory.
    pub fn parse_str(&self, text: &str) -> Result<Table> {
        self.parse_records(text).map(|(table, _)| table)
    }

    fn parse_records(&self, text: &str) -> Result<(Table, usize)> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .quote(self.config.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        // The reader already skips empty lines. Anything else it yields,
        // including a lone `""` or a line of spaces, is a value.
        let mut records = reader.records();

        let header = match records.next() {
            Some(record) => record?,
            None => return Err(TabexError::EmptyData("No header row found".to_string())),
        };
        let columns = normalize_headers(header.iter());
        let expected = columns.len();

        let mut rows = Vec::new();
        let mut coerced = 0;

        for (idx, result) in records.enumerate() {
            let record = result?;
            let mut row: Vec<String> = record.iter().map(|s| s.to_string()).collect();

            if row.len() != expected {
                match self.config.arity {
                    RowArity::Strict => {
                        return Err(TabexError::MalformedData {
                            row: idx + 1,
                            expected,
                            found: row.len(),
                        });
                    }
                    RowArity::Coerce => {
                        warn!(row = idx + 1, expected, found = row.len(), "coercing row arity");
                        row.resize(expected, String::new());
                        coerced += 1;
                    }
                }
            }

            rows.push(row);
        }

        debug!(
            columns = expected,
            rows = rows.len(),
            coerced,
            "parsed delimited data"
        );

        Ok((Table::new(columns, rows)?, coerced))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Name unnamed header fields and disambiguate repeated ones.
///
/// Empty names become `Unnamed: <position>`. A repeated name gets the first
/// free `.N` suffix, so `a,a,b` becomes `a, a.1, b`.
fn normalize_headers<'a>(fields: impl Iterator<Item = &'a str>) -> Vec<String> {
    let raw: Vec<String> = fields
        .enumerate()
        .map(|(i, f)| {
            if f.trim().is_empty() {
                format!("Unnamed: {}", i)
            } else {
                f.to_string()
            }
        })
        .collect();

    let mut taken: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut names = Vec::with_capacity(raw.len());

    for name in raw {
        if taken.insert(name.clone()) {
            names.push(name);
            continue;
        }

        let mut suffix = 1;
        let unique = loop {
            let candidate = format!("{}.{}", name, suffix);
            if !taken.contains(&candidate) {
                break candidate;
            }
            suffix += 1;
        };
        taken.insert(unique.clone());
        names.push(unique);
    }

    names
}
