//! Export command - load, drop columns, and write xlsx or pdf.

use std::path::{Path, PathBuf};

use colored::Colorize;
use tabex::{DocumentOptions, ExportConfig, ExportFormat, Exporter};

use super::{apply_drops, open_session, CommandResult};
use crate::cli::{DropArgs, LoadArgs};

pub struct ExportArgs {
    pub format: ExportFormat,
    pub output: Option<PathBuf>,
    pub include_header: bool,
    pub sheet_name: String,
}

pub fn run(load: LoadArgs, drop: DropArgs, args: ExportArgs) -> CommandResult {
    let mut session = open_session(&load)?;
    let removed = apply_drops(&mut session, &drop)?;
    if !removed.is_empty() {
        println!("{} {}", "Removed".cyan().bold(), removed.join(", "));
    }

    let destination = resolve_destination(&load.file, args.output, args.format);
    if same_file(&load.file, &destination) {
        return Err(format!(
            "Refusing to overwrite the input file {}; pass -o to choose another destination",
            destination.display()
        )
        .into());
    }

    let exporter = Exporter::with_config(ExportConfig {
        sheet_name: args.sheet_name,
        document: DocumentOptions {
            include_header: args.include_header,
            ..DocumentOptions::default()
        },
    });

    let table = session.current_table()?;
    exporter.export(table, args.format, &destination)?;

    println!(
        "{} {} rows x {} columns to {}",
        "Exported".green().bold(),
        table.row_count(),
        table.column_count(),
        destination.display().to_string().cyan()
    );

    Ok(())
}

/// Output path: the given one (extension added if missing) or the input
/// path with the format's extension.
fn resolve_destination(input: &Path, output: Option<PathBuf>, format: ExportFormat) -> PathBuf {
    match output {
        Some(mut path) => {
            if path.extension().is_none() {
                path.set_extension(format.extension());
            }
            path
        }
        None => format.default_destination(input),
    }
}

/// Whether two paths name the same file. Paths that do not exist yet only
/// match when they are spelled the same.
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_destination() {
        assert_eq!(
            resolve_destination(Path::new("data/people.csv"), None, ExportFormat::Document),
            PathBuf::from("data/people.pdf")
        );
    }

    #[test]
    fn test_output_gets_extension() {
        assert_eq!(
            resolve_destination(
                Path::new("people.csv"),
                Some(PathBuf::from("out/report")),
                ExportFormat::Spreadsheet
            ),
            PathBuf::from("out/report.xlsx")
        );
    }

    #[test]
    fn test_output_extension_kept() {
        assert_eq!(
            resolve_destination(
                Path::new("people.csv"),
                Some(PathBuf::from("report.data")),
                ExportFormat::Spreadsheet
            ),
            PathBuf::from("report.data")
        );
    }

    #[test]
    fn test_default_destination_can_be_the_input() {
        let input = Path::new("report.pdf");
        let destination = resolve_destination(input, None, ExportFormat::Document);
        assert!(same_file(input, &destination));
    }

    #[test]
    fn test_same_file_through_relative_segments() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        let input = dir.path().join("report.pdf");
        std::fs::write(&input, "a\n1\n").unwrap();

        let spelled_differently = dir.path().join("sub").join("..").join("report.pdf");
        assert!(same_file(&input, &spelled_differently));
        assert!(!same_file(&input, &dir.path().join("report.xlsx")));
    }

    #[test]
    fn test_export_refuses_to_overwrite_input() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("report.pdf");
        std::fs::write(&input, "a,b\n1,2\n").unwrap();

        let load = LoadArgs {
            file: input.clone(),
            delimiter: ',',
            lenient: false,
        };
        let args = ExportArgs {
            format: ExportFormat::Document,
            output: None,
            include_header: false,
            sheet_name: "Sheet1".to_string(),
        };

        let err = run(
            load,
            DropArgs {
                columns: Vec::new(),
                drop_matching: None,
            },
            args,
        ).unwrap_err();
        assert!(err.to_string().contains("Refusing to overwrite"));
        assert_eq!(std::fs::read_to_string(&input).unwrap(), "a,b\n1,2\n");
    }
}
