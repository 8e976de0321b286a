//! Shared test fixtures for GroupForge crates.
//!
//! This crate provides data builders only. It does NOT depend on
//! `groupforge-scoring` so the scoring crate can use it as a dev-dependency.
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! groupforge-test = { workspace = true }
//! ```
//!
//! ```
//! use groupforge_test::{people, rating};
//!
//! let team = people(&["A", "B", "C"]);
//! assert_eq!(team[0].id.as_str(), "A");
//! let r = rating("A", "B", 5);
//! assert_eq!(r.rating, 5);
//! ```

use groupforge_core::{
    ConstraintKind, GroupingProblem, PairConstraint, PairRating, Person, PersonId,
};

/// People whose id equals their name.
pub fn people(names: &[&str]) -> Vec<Person> {
    names.iter().map(|name| Person::new(*name, *name)).collect()
}

/// `count` people named `P1`, `P2`, ...
pub fn numbered_people(count: usize) -> Vec<Person> {
    (1..=count)
        .map(|i| {
            let name = format!("P{i}");
            Person::new(name.clone(), name)
        })
        .collect()
}

pub fn id(name: &str) -> PersonId {
    PersonId::from(name)
}

pub fn rating(a: &str, b: &str, value: i64) -> PairRating {
    PairRating::new(a, b, value)
}

pub fn must_pair(a: &str, b: &str) -> PairConstraint {
    PairConstraint::must_pair(format!("must-{a}-{b}").as_str(), a, b)
}

pub fn cannot_pair(a: &str, b: &str) -> PairConstraint {
    PairConstraint::cannot_pair(format!("cannot-{a}-{b}").as_str(), a, b)
}

/// A problem holding `names` as people, ids equal to names.
pub fn problem_from_names(names: &[&str]) -> GroupingProblem {
    let mut problem = GroupingProblem::new();
    for person in people(names) {
        problem
            .insert_person(person)
            .expect("fixture names are unique and non-blank");
    }
    problem
}

/// A problem with ratings and constraints applied through the upsert API.
pub fn rated_problem(
    names: &[&str],
    ratings: &[(&str, &str, i64)],
    constraints: &[(&str, &str, ConstraintKind)],
) -> GroupingProblem {
    let mut problem = problem_from_names(names);
    for (a, b, value) in ratings {
        problem
            .set_rating(&id(a), &id(b), *value)
            .expect("fixture rating is valid");
    }
    for (a, b, kind) in constraints {
        problem
            .set_constraint(&id(a), &id(b), Some(*kind))
            .expect("fixture constraint is valid");
    }
    problem
}
