//! Solver phases.
//!
//! A run always executes [`MustPairPhase`] followed by [`GreedyPhase`];
//! configured [`LocalSearchPhase`]s may follow to improve the partition.

mod acceptor;
mod greedy;
mod local_search;
mod must_pair;

pub use acceptor::{Acceptor, HillClimbingAcceptor, LateAcceptanceAcceptor};
pub use greedy::GreedyPhase;
pub use local_search::LocalSearchPhase;
pub use must_pair::MustPairPhase;

use crate::scope::SolverScope;

/// A phase of an assignment run.
pub trait Phase {
    /// Runs the phase against the working partition.
    fn solve(&mut self, scope: &mut SolverScope<'_>);

    /// Human-readable phase name used in log events.
    fn phase_type_name(&self) -> &'static str;
}
