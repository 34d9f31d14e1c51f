//! View command - render a data file as a grid.

use colored::Colorize;
use tabex::Table;

use super::{apply_drops, open_session, CommandResult};
use crate::cli::{DropArgs, LoadArgs};

const MAX_CELL_WIDTH: usize = 40;

pub fn run(load: LoadArgs, drop: DropArgs, limit: Option<usize>) -> CommandResult {
    let mut session = open_session(&load)?;
    let removed = apply_drops(&mut session, &drop)?;
    let table = session.current_table()?;

    let shown = limit.unwrap_or(table.row_count()).min(table.row_count());
    let lines = render_grid(table, shown);

    let mut lines = lines.into_iter();
    if let Some(header) = lines.next() {
        println!("{}", header.bold());
    }
    for line in lines {
        println!("{}", line);
    }

    println!();
    print!(
        "{} rows x {} columns",
        table.row_count().to_string().white().bold(),
        table.column_count().to_string().white().bold()
    );
    if shown < table.row_count() {
        print!(" (showing first {})", shown);
    }
    println!();
    if !removed.is_empty() {
        println!("{} {}", "Removed:".cyan().bold(), removed.join(", "));
    }

    Ok(())
}

/// Lay out the header, a rule, and the first `rows` rows as padded text.
fn render_grid(table: &Table, rows: usize) -> Vec<String> {
    if table.column_count() == 0 {
        return Vec::new();
    }

    let mut widths: Vec<usize> = table
        .columns()
        .iter()
        .map(|c| c.chars().count().min(MAX_CELL_WIDTH))
        .collect();
    for row in table.rows().iter().take(rows) {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count().min(MAX_CELL_WIDTH));
        }
    }

    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<w$}", clip(cell, w), w = w))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows + 2);
    lines.push(format_row(table.columns()));
    lines.push(
        widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in table.rows().iter().take(rows) {
        lines.push(format_row(row.as_slice()));
    }
    lines
}

/// Shorten a cell to `width` characters, marking the cut with `…`.
fn clip(cell: &str, width: usize) -> String {
    if cell.chars().count() <= width {
        return cell.to_string();
    }
    let mut clipped: String = cell.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}
