//! GroupForge Core - Core types and traits for group assignment
//!
//! This crate provides the fundamental abstractions for GroupForge:
//! - Domain types for people, pair ratings, pair constraints and groups
//! - The [`GroupingProblem`] aggregate that enforces upsert semantics
//! - Score types for comparing partitions

pub mod domain;
pub mod error;
pub mod score;

pub use domain::{
    ConstraintId, ConstraintKind, Group, GroupId, GroupingProblem, PairConstraint, PairKey,
    PairRating, Person, PersonId, RatingScale,
};
pub use error::{GroupForgeError, Result};
pub use score::{HardSoftScore, Score};
