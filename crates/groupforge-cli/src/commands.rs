//! Command implementations.
//!
//! Each command returns the text it produced; [`emit`] sends it to a file
//! or stdout.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use groupforge::{GroupingConfig, GroupingProblem, CONFIG_FILE};
use groupforge_io::{
    load_problem, parse_people_csv, problem_to_string, save_problem, write_rating_matrix_csv,
    ProblemFormat,
};

use crate::cli::{ImportArgs, MatrixArgs, SolveArgs};
use crate::error::Result;
use crate::output::Formatter;

/// Loads the problem and configuration, then renders the assignment.
pub fn execute_solve(args: &SolveArgs, formatter: &Formatter) -> Result<String> {
    let problem = load_problem(&args.problem)?;

    let mut config = resolve_config(args.config.as_deref(), Path::new(CONFIG_FILE))?;
    if let Some(size) = args.group_size {
        config = config.with_group_size(size);
    }
    if let Some(count) = args.group_count {
        config = config.with_group_count(count);
    }

    let assignment = groupforge::solve(&problem, &config)?;
    formatter.format_assignment(&assignment, args.format)
}

/// Loads `explicit` if given, else `fallback` when that file exists, else
/// the default configuration.
///
/// A file that exists but does not parse is an error in both cases.
pub fn resolve_config(explicit: Option<&Path>, fallback: &Path) -> Result<GroupingConfig> {
    match explicit {
        Some(path) => Ok(GroupingConfig::load(path)?),
        None if fallback.exists() => Ok(GroupingConfig::load(fallback)?),
        None => Ok(GroupingConfig::default()),
    }
}

/// Converts a people CSV into a problem.
///
/// With `--output` the problem is saved there and a short summary is
/// returned; otherwise the problem itself is returned as JSON.
pub fn execute_import(args: &ImportArgs) -> Result<String> {
    let text = fs::read_to_string(&args.csv)?;
    let people = parse_people_csv(&text)?;
    let problem = GroupingProblem::from_people(people)?;

    match &args.output {
        Some(path) => {
            save_problem(path, &problem)?;
            Ok(format!(
                "Imported {} people into {}\n",
                problem.len(),
                path.display()
            ))
        }
        None => Ok(problem_to_string(&problem, ProblemFormat::Json)?),
    }
}

/// Renders the rating matrix of a problem.
pub fn execute_matrix(args: &MatrixArgs) -> Result<String> {
    let problem = load_problem(&args.problem)?;
    Ok(write_rating_matrix_csv(&problem))
}

/// Writes command output to `path`, or to stdout when `path` is `None`.
pub fn emit(text: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => fs::write(path, text)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            if !text.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
    }
    Ok(())
}
