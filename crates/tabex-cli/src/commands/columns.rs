//! Columns command - list the columns of a data file.

use colored::Colorize;

use super::{open_session, CommandResult};
use crate::cli::LoadArgs;

pub fn run(load: LoadArgs, json_output: bool) -> CommandResult {
    let session = open_session(&load)?;
    let table = session.current_table()?;
    let kinds = table.column_kinds();

    if json_output {
        let columns: Vec<_> = table
            .columns()
            .iter()
            .zip(&kinds)
            .enumerate()
            .map(|(position, (name, kind))| {
                serde_json::json!({
                    "position": position,
                    "name": name,
                    "kind": kind,
                })
            })
            .collect();

        let output = serde_json::json!({
            "source": session.source(),
            "columns": columns,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if let Some(source) = session.source() {
        println!(
            "{} {} ({} rows)",
            "Columns of".cyan().bold(),
            source.file.white(),
            table.row_count()
        );
        println!();
    }

    for (position, (name, kind)) in table.columns().iter().zip(&kinds).enumerate() {
        println!("  {:>3}  {:30} {}", position + 1, name, kind.to_string().dimmed());
    }

    Ok(())
}
