//! GroupForge CLI - Command-line interface for group assignment.

use clap::Parser;
use groupforge_cli::commands;
use groupforge_cli::{Cli, Command, Formatter};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> groupforge_cli::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        groupforge_console::init_quiet();
    }

    let formatter = Formatter::new(!cli.no_color);

    match cli.command {
        Command::Solve(args) => {
            let out = commands::execute_solve(&args, &formatter)?;
            commands::emit(&out, args.output.as_deref())
        }
        Command::Import(args) => {
            let out = commands::execute_import(&args)?;
            commands::emit(&out, None)
        }
        Command::Matrix(args) => {
            let out = commands::execute_matrix(&args)?;
            commands::emit(&out, args.output.as_deref())
        }
    }
}
