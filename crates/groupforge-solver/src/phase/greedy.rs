//! Greedy placement phase with fallback.

use tracing::{trace, warn};

use crate::phase::Phase;
use crate::scope::SolverScope;

/// Places every remaining person into the best eligible group.
///
/// People are visited in input order. A group is eligible when it has room
/// and holds nobody the person has a cannot-pair constraint with. The
/// eligible group with the strictly highest incremental score wins, the
/// first one on ties. When no group is eligible the person goes to the
/// least populated group regardless of capacity and constraints, so every
/// person is always placed.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPhase;

impl GreedyPhase {
    pub fn new() -> Self {
        Self
    }

    fn best_group(scope: &SolverScope<'_>, position: usize) -> Option<(usize, i64)> {
        let person = &scope.people()[position];
        let constraints = scope.constraints();
        let scorer = scope.group_scorer();

        let mut best: Option<(usize, i64)> = None;
        for (g, members) in scope.groups().iter().enumerate() {
            if members.len() >= scope.capacity() {
                continue;
            }
            if constraints.conflicts_with(&person.id, members.iter().map(|m| &m.id)) {
                continue;
            }

            let gain = scorer.incremental_score(&person.id, members.iter().map(|m| &m.id));
            if best.map_or(true, |(_, best_gain)| gain > best_gain) {
                best = Some((g, gain));
            }
        }
        best
    }
}

impl Phase for GreedyPhase {
    fn solve(&mut self, scope: &mut SolverScope<'_>) {
        for position in 0..scope.people().len() {
            if scope.is_assigned(position) {
                continue;
            }

            match Self::best_group(scope, position) {
                Some((group, gain)) => {
                    scope.place(position, group);
                    scope.stats_mut().record_step();
                    trace!(
                        event = "step",
                        step = scope.stats().step_count,
                        entity = position as u64,
                        group = group as u64,
                        score = gain,
                        accepted = true,
                    );
                }
                None => {
                    let Some(group) = scope.least_populated_group() else {
                        // No groups at all: only possible with no people
                        continue;
                    };
                    scope.place_fallback(position, group);
                    scope.stats_mut().record_step();
                    warn!(
                        event = "fallback",
                        person = %scope.people()[position].id,
                        group = group as u64,
                    );
                }
            }
        }
    }

    fn phase_type_name(&self) -> &'static str {
        "Greedy Placement"
    }
}
