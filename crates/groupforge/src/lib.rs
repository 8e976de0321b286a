//! GroupForge - Group Assignment in Rust
//!
//! Splits people into groups of a target size, maximizing the summed
//! pairwise affinity while honoring must-pair and cannot-pair constraints
//! where capacity allows.
//!
//! # Example
//!
//! ```rust
//! use groupforge::prelude::*;
//!
//! let mut problem = GroupingProblem::new();
//! let ada = problem.add_person("Ada", None).unwrap();
//! let bob = problem.add_person("Bob", None).unwrap();
//! let cy = problem.add_person("Cy", None).unwrap();
//! let _dee = problem.add_person("Dee", None).unwrap();
//! problem.set_rating(&ada, &bob, 5).unwrap();
//! problem.set_constraint(&ada, &cy, Some(ConstraintKind::CannotPair)).unwrap();
//!
//! let config = GroupingConfig::new().with_group_size(2);
//! let assignment = groupforge::solve(&problem, &config).unwrap();
//!
//! assert_eq!(assignment.len(), 2);
//! assert!(assignment.is_feasible());
//! ```

// Domain model
pub use groupforge_core::{
    ConstraintId, ConstraintKind, Group, GroupForgeError, GroupId, GroupingProblem, PairConstraint,
    PairKey, PairRating, Person, PersonId, RatingScale, Result,
};

// Score types
pub use groupforge_core::{HardSoftScore, Score};

// Standalone group scoring
pub use groupforge_scoring::{score_group, GroupScorer, PairIndex};

// Engine and results
pub use groupforge_solver::{Assignment, AssignmentEngine, AssignmentWarning};

// Configuration
pub use groupforge_config::{GroupSizing, GroupingConfig};

mod solve;
pub use solve::{assign, solve, solve_default, CONFIG_FILE};

pub mod prelude {
    pub use super::{
        Assignment, AssignmentEngine, AssignmentWarning, ConstraintKind, Group, GroupForgeError,
        GroupId, GroupingConfig, GroupingProblem, HardSoftScore, PairConstraint, PairRating,
        Person, PersonId, RatingScale, Score,
    };
}
