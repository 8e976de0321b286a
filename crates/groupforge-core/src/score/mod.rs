//! Score types for comparing partitions
//!
//! A partition is judged on two levels: hard constraint violations
//! (cannot-pair breaches, broken must-pairs, over-full groups) and soft
//! affinity (the summed pair ratings inside every group).

mod hard_soft;
mod traits;

#[cfg(test)]
mod tests;

pub use hard_soft::HardSoftScore;
pub use traits::Score;
