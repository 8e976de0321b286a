//! Move acceptors for local search.

use std::fmt::Debug;

use groupforge_core::Score;

/// Decides whether a local search move becomes the next step.
pub trait Acceptor<Sc: Score>: Debug {
    /// Returns true if a move scoring `move_score` may replace a step
    /// scoring `last_step_score`.
    fn is_accepted(&self, last_step_score: &Sc, move_score: &Sc) -> bool;

    /// Called once before the first step.
    fn phase_started(&mut self, _initial_score: &Sc) {}

    /// Called after each accepted step.
    fn step_ended(&mut self, _step_score: &Sc) {}
}

/// Hill climbing: accepts moves that do not make the score worse.
#[derive(Debug, Clone, Copy, Default)]
pub struct HillClimbingAcceptor;

impl<Sc: Score> Acceptor<Sc> for HillClimbingAcceptor {
    fn is_accepted(&self, last_step_score: &Sc, move_score: &Sc) -> bool {
        move_score >= last_step_score
    }
}

/// Late acceptance acceptor - accepts moves that improve on a historical score.
///
/// Maintains a circular buffer of recent step scores and accepts moves
/// that are not worse than the score from N steps ago.
///
/// # Example
///
/// ```
/// use groupforge_core::HardSoftScore;
/// use groupforge_solver::phase::{Acceptor, LateAcceptanceAcceptor};
///
/// let mut acceptor = LateAcceptanceAcceptor::<HardSoftScore>::new(2);
/// acceptor.phase_started(&HardSoftScore::of(0, 10));
///
/// // Worse than the last step but as good as the late score
/// assert!(acceptor.is_accepted(&HardSoftScore::of(0, 12), &HardSoftScore::of(0, 10)));
/// assert!(!acceptor.is_accepted(&HardSoftScore::of(0, 12), &HardSoftScore::of(0, 9)));
/// ```
#[derive(Debug, Clone)]
pub struct LateAcceptanceAcceptor<Sc: Score> {
    late_acceptance_size: usize,
    score_history: Vec<Option<Sc>>,
    current_index: usize,
}

impl<Sc: Score> LateAcceptanceAcceptor<Sc> {
    /// Creates a new late acceptance acceptor keeping `late_acceptance_size`
    /// historical scores. A size of 0 is treated as 1.
    pub fn new(late_acceptance_size: usize) -> Self {
        let late_acceptance_size = late_acceptance_size.max(1);
        Self {
            late_acceptance_size,
            score_history: vec![None; late_acceptance_size],
            current_index: 0,
        }
    }
}

impl<Sc: Score> Acceptor<Sc> for LateAcceptanceAcceptor<Sc> {
    fn is_accepted(&self, last_step_score: &Sc, move_score: &Sc) -> bool {
        if move_score >= last_step_score {
            return true;
        }

        match &self.score_history[self.current_index] {
            Some(late_score) => move_score >= late_score,
            None => true,
        }
    }

    fn phase_started(&mut self, initial_score: &Sc) {
        for slot in &mut self.score_history {
            *slot = Some(*initial_score);
        }
        self.current_index = 0;
    }

    fn step_ended(&mut self, step_score: &Sc) {
        self.score_history[self.current_index] = Some(*step_score);
        self.current_index = (self.current_index + 1) % self.late_acceptance_size;
    }
}
