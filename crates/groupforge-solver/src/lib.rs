//! GroupForge assignment engine
//!
//! This crate turns people, pair ratings and pair constraints into groups:
//! - Must-pair seeding and greedy placement with a fallback rule
//! - Optional swap-based local search
//! - [`Assignment`] results with reporting helpers and warnings
//! - Run statistics

pub mod phase;
pub mod scope;
pub mod stats;

mod assignment;
mod engine;

pub use assignment::{Assignment, AssignmentWarning};
pub use engine::AssignmentEngine;
pub use phase::{
    Acceptor, GreedyPhase, HillClimbingAcceptor, LateAcceptanceAcceptor, LocalSearchPhase,
    MustPairPhase, Phase,
};
pub use scope::SolverScope;
pub use stats::SolverStats;
