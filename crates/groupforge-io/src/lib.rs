//! GroupForge file formats
//!
//! - People lists imported from `Name,Description` CSV
//! - Assignment and rating matrix CSV exports
//! - Whole problems stored as JSON, TOML or YAML

mod csv;
mod error;
mod problem_file;

pub use csv::{parse_people_csv, write_assignment_csv, write_rating_matrix_csv};
pub use error::IoError;
pub use problem_file::{
    load_problem, problem_from_str, problem_to_string, save_problem, write_assignment_json,
    ProblemFormat,
};
