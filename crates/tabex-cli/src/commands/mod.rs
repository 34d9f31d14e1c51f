//! CLI command implementations.

pub mod columns;
pub mod export;
pub mod view;

use colored::Colorize;
use tabex::{DataSession, ParserConfig, RowArity, SessionConfig};

use crate::cli::{DropArgs, LoadArgs};

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Build a session from the load flags and load the file.
pub fn open_session(args: &LoadArgs) -> Result<DataSession, Box<dyn std::error::Error>> {
    if !args.delimiter.is_ascii() {
        return Err(format!("Delimiter must be a single ASCII character: {:?}", args.delimiter).into());
    }

    let config = SessionConfig {
        parser: ParserConfig {
            delimiter: args.delimiter as u8,
            arity: if args.lenient {
                RowArity::Coerce
            } else {
                RowArity::Strict
            },
            ..ParserConfig::default()
        },
    };

    let mut session = DataSession::with_config(config);
    session.load(&args.file)?;

    if let Some(source) = session.source() {
        if source.coerced_rows > 0 {
            println!(
                "{} {} rows padded or truncated to the header width",
                "Warning:".yellow().bold(),
                source.coerced_rows
            );
        }
    }

    Ok(session)
}

/// Mark the requested columns and remove them in one step.
///
/// Names that are not columns of the table are reported and skipped.
pub fn apply_drops(
    session: &mut DataSession,
    args: &DropArgs,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut selection = session.selection()?;

    for name in &args.columns {
        if !selection.mark(name) {
            println!(
                "{} no column named {}",
                "Warning:".yellow().bold(),
                name.cyan()
            );
        }
    }

    if let Some(ref pattern) = args.drop_matching {
        for name in session.columns_matching(pattern)? {
            selection.mark(&name);
        }
    }

    Ok(session.apply_selection(selection)?)
}
