//! Entry points that hide the engine wiring.

use groupforge_config::GroupingConfig;
use groupforge_core::{GroupingProblem, PairConstraint, PairRating, Person, Result};
use groupforge_solver::{Assignment, AssignmentEngine};

/// Configuration file read by [`solve_default`].
pub const CONFIG_FILE: &str = "groupforge.toml";

/// Solves a problem with an explicit configuration.
///
/// # Errors
///
/// Fails only when the configured sizing is invalid.
pub fn solve(problem: &GroupingProblem, config: &GroupingConfig) -> Result<Assignment> {
    init_console();
    let engine = AssignmentEngine::from_config(config, problem.len())?;
    Ok(engine.assign_problem(problem))
}

/// Solves a problem with `groupforge.toml` from the working directory, or
/// the default configuration when that file is missing or unreadable.
pub fn solve_default(problem: &GroupingProblem) -> Result<Assignment> {
    let config = GroupingConfig::load(CONFIG_FILE).unwrap_or_default();
    solve(problem, &config)
}

/// Partitions `people` into groups of at most `group_size` members.
///
/// Ratings and constraints are taken as given: later duplicates for the
/// same pair are ignored and ids outside `people` have no effect.
///
/// # Errors
///
/// Returns [`groupforge_core::GroupForgeError::Config`] when `group_size`
/// is 0.
pub fn assign(
    people: &[Person],
    ratings: &[PairRating],
    constraints: &[PairConstraint],
    group_size: usize,
) -> Result<Assignment> {
    init_console();
    let engine = AssignmentEngine::new(group_size)?;
    Ok(engine.assign(people, ratings, constraints))
}

#[cfg(feature = "console")]
fn init_console() {
    groupforge_console::init();
}

#[cfg(not(feature = "console"))]
fn init_console() {}
