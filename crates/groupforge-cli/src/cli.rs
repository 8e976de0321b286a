//! CLI command definitions and argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// GroupForge CLI - Split people into well-matched groups.
#[derive(Debug, Parser)]
#[command(name = "groupforge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log engine progress to the console
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary (default)
    #[default]
    Text,
    /// JSON with groups and warnings
    Json,
    /// `Group,Person` rows
    Csv,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Assign the people of a problem file to groups
    Solve(SolveArgs),

    /// Turn a `Name,Description` CSV into a problem file
    Import(ImportArgs),

    /// Export the pairwise rating matrix of a problem as CSV
    Matrix(MatrixArgs),
}

/// Arguments for the solve command.
#[derive(Debug, Parser)]
pub struct SolveArgs {
    /// Problem file (.json, .toml, .yaml)
    pub problem: PathBuf,

    /// Configuration file; defaults to ./groupforge.toml when present
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// People per group
    #[arg(short = 's', long, conflicts_with = "group_count")]
    pub group_size: Option<usize>,

    /// Number of groups
    #[arg(short = 'g', long)]
    pub group_count: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the import command.
#[derive(Debug, Parser)]
pub struct ImportArgs {
    /// CSV file with a `Name,Description` header
    pub csv: PathBuf,

    /// Problem file to write; prints JSON to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the matrix command.
#[derive(Debug, Parser)]
pub struct MatrixArgs {
    /// Problem file (.json, .toml, .yaml)
    pub problem: PathBuf,

    /// Write the matrix to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_solve() {
        let cli = Cli::try_parse_from([
            "groupforge",
            "solve",
            "team.json",
            "--group-size",
            "3",
            "--format",
            "csv",
            "--no-color",
        ])
        .unwrap();

        assert!(cli.no_color);
        let Command::Solve(args) = cli.command else {
            panic!("expected solve");
        };
        assert_eq!(args.problem, PathBuf::from("team.json"));
        assert_eq!(args.group_size, Some(3));
        assert_eq!(args.format, OutputFormat::Csv);
    }

    #[test]
    fn test_group_size_conflicts_with_group_count() {
        let result = Cli::try_parse_from([
            "groupforge",
            "solve",
            "team.json",
            "--group-size",
            "3",
            "--group-count",
            "2",
        ]);
        assert!(result.is_err());
    }
}
