//! Solver statistics.
//!
//! Stack-allocated counters for one assignment run.

use std::time::{Duration, Instant};

/// Run-level statistics.
///
/// # Example
///
/// ```
/// use groupforge_solver::stats::SolverStats;
///
/// let mut stats = SolverStats::default();
/// stats.start();
/// stats.record_step();
/// stats.record_move(true);
/// stats.record_move(false);
/// stats.record_fallback();
///
/// assert_eq!(stats.step_count, 1);
/// assert_eq!(stats.moves_evaluated, 2);
/// assert_eq!(stats.moves_accepted, 1);
/// assert_eq!(stats.fallback_count, 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct SolverStats {
    start_time: Option<Instant>,
    /// Total steps taken across all phases.
    pub step_count: u64,
    /// Total local search moves evaluated.
    pub moves_evaluated: u64,
    /// Total local search moves accepted.
    pub moves_accepted: u64,
    /// People placed by the fallback rule.
    pub fallback_count: u64,
}

impl SolverStats {
    /// Marks the start of solving.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Returns the elapsed time since solving started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Records a move evaluation and whether it was accepted.
    pub fn record_move(&mut self, accepted: bool) {
        self.moves_evaluated += 1;
        if accepted {
            self.moves_accepted += 1;
        }
    }

    /// Records a step completion.
    pub fn record_step(&mut self) {
        self.step_count += 1;
    }

    pub fn record_fallback(&mut self) {
        self.fallback_count += 1;
    }

    /// Moves evaluated per second since the start.
    pub fn moves_per_second(&self) -> u64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            (self.moves_evaluated as f64 / secs) as u64
        } else {
            0
        }
    }
}
