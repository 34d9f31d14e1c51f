//! CLI argument definitions using clap.

use clap::{ArgAction, Args, Parser, Subcommand};
use regex::Regex;
use std::path::PathBuf;
use tabex::ExportFormat;

/// tabex: view, trim and export tabular data files
#[derive(Parser)]
#[command(name = "tabex")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a data file as a grid
    View {
        #[command(flatten)]
        load: LoadArgs,

        #[command(flatten)]
        drop: DropArgs,

        /// Show at most this many rows
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// List the columns of a data file
    Columns {
        #[command(flatten)]
        load: LoadArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export a data file to a spreadsheet or document
    Export {
        #[command(flatten)]
        load: LoadArgs,

        #[command(flatten)]
        drop: DropArgs,

        /// Output format (xlsx or pdf)
        #[arg(short, long)]
        format: ExportFormat,

        /// Output path (default: <file> with the format's extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the column names as the first line of a PDF
        #[arg(long)]
        include_header: bool,

        /// Worksheet name for xlsx output
        #[arg(long, default_value = "Sheet1")]
        sheet_name: String,
    },
}

/// Input file and how to read it.
#[derive(Args)]
pub struct LoadArgs {
    /// Path to the data file (CSV)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Field delimiter
    #[arg(long, default_value = ",")]
    pub delimiter: char,

    /// Pad or truncate rows whose field count differs from the header
    #[arg(long)]
    pub lenient: bool,
}

/// Columns to remove after loading.
#[derive(Args)]
pub struct DropArgs {
    /// Remove a column by name (repeatable)
    #[arg(short = 'd', long = "drop", value_name = "COLUMN")]
    pub columns: Vec<String>,

    /// Remove every column whose name matches a regular expression
    #[arg(long, value_name = "REGEX")]
    pub drop_matching: Option<Regex>,
}
