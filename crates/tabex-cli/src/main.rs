//! tabex CLI - view, trim and export tabular data files.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};
use commands::export::ExportArgs;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let result = match cli.command {
        Commands::View { load, drop, limit } => commands::view::run(load, drop, limit),

        Commands::Columns { load, json } => commands::columns::run(load, json),

        Commands::Export {
            load,
            drop,
            format,
            output,
            include_header,
            sheet_name,
        } => commands::export::run(
            load,
            drop,
            ExportArgs {
                format,
                output,
                include_header,
                sheet_name,
            },
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
