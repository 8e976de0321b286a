//! Domain model for group assignment.
//!
//! - [`Person`]: a participant to be grouped
//! - [`PairRating`] / [`PairConstraint`]: what is known about a pair
//! - [`Group`]: one output group with its members and score
//! - [`GroupingProblem`]: the input aggregate with upsert semantics

mod group;
mod pair;
mod person;
mod problem;
mod scale;


pub use group::{Group, GroupId};
pub use pair::{ConstraintId, ConstraintKind, PairConstraint, PairKey, PairRating};
pub use person::{Person, PersonId};
pub use problem::GroupingProblem;
pub use scale::RatingScale;
