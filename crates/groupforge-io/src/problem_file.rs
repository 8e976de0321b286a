//! Problem files in JSON, TOML or YAML.

use std::fs;
use std::path::Path;

use groupforge_core::GroupingProblem;
use groupforge_solver::Assignment;

use crate::error::IoError;

/// Serialization format of a problem file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemFormat {
    Json,
    Toml,
    Yaml,
}

impl ProblemFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(ProblemFormat::Json),
            "toml" => Ok(ProblemFormat::Toml),
            "yaml" | "yml" => Ok(ProblemFormat::Yaml),
            _ => Err(IoError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parses and validates a problem.
pub fn problem_from_str(s: &str, format: ProblemFormat) -> Result<GroupingProblem, IoError> {
    let problem: GroupingProblem = match format {
        ProblemFormat::Json => serde_json::from_str(s)?,
        ProblemFormat::Toml => toml::from_str(s)?,
        ProblemFormat::Yaml => serde_yaml::from_str(s)?,
    };
    problem.validate()?;
    Ok(problem)
}

pub fn problem_to_string(
    problem: &GroupingProblem,
    format: ProblemFormat,
) -> Result<String, IoError> {
    Ok(match format {
        ProblemFormat::Json => serde_json::to_string_pretty(problem)?,
        ProblemFormat::Toml => toml::to_string_pretty(problem)?,
        ProblemFormat::Yaml => serde_yaml::to_string(problem)?,
    })
}

/// Loads a problem, choosing the format by extension.
pub fn load_problem(path: impl AsRef<Path>) -> Result<GroupingProblem, IoError> {
    let path = path.as_ref();
    let format = ProblemFormat::from_path(path)?;
    let contents = fs::read_to_string(path)?;
    problem_from_str(&contents, format)
}

/// Saves a problem, choosing the format by extension.
pub fn save_problem(path: impl AsRef<Path>, problem: &GroupingProblem) -> Result<(), IoError> {
    let path = path.as_ref();
    let format = ProblemFormat::from_path(path)?;
    fs::write(path, problem_to_string(problem, format)?)?;
    Ok(())
}

/// Pretty JSON for an assignment, warnings included.
pub fn write_assignment_json(assignment: &Assignment) -> Result<String, IoError> {
    Ok(serde_json::to_string_pretty(assignment)?)
}
