//! Example: load a CSV file, drop columns and export it.
//!
//! Usage:
//!   cargo run --example export -- <file_path> <xlsx|pdf> [column ...]
//!
//! Example:
//!   cargo run --example export -- people.csv xlsx age

use std::env;

use tabex::{DataSession, ExportFormat, Exporter};

fn main() -> tabex::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: cargo run --example export -- <file_path> <xlsx|pdf> [column ...]");
        std::process::exit(1);
    }

    let format: ExportFormat = args[2].parse()?;

    let mut session = DataSession::new();
    let table = session.load(&args[1])?;
    println!(
        "Loaded {} rows x {} columns: {}",
        table.row_count(),
        table.column_count(),
        table.columns().join(", ")
    );

    let removed = session.remove_columns(&args[3..])?;
    if !removed.is_empty() {
        println!("Removed: {}", removed.join(", "));
    }

    let destination = format.default_destination(&args[1]);
    Exporter::new().export(session.current_table()?, format, &destination)?;
    println!("Wrote {}", destination.display());

    Ok(())
}
