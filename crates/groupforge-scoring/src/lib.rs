//! Scoring infrastructure for GroupForge.
//!
//! - [`PairIndex`]: symmetric rating and constraint lookup per pair
//! - [`ClassifiedConstraints`]: must-pair / cannot-pair split
//! - [`GroupScorer`]: affinity of a single group
//! - [`PartitionScorer`]: hard/soft evaluation of a whole partition

pub mod classifier;
pub mod group_scorer;
pub mod pair_index;
pub mod partition;

pub use classifier::ClassifiedConstraints;
pub use group_scorer::{score_group, GroupScorer};
pub use pair_index::PairIndex;
pub use partition::{PartitionScorer, PartitionViolations};
