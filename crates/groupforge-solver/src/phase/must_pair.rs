//! Must-pair seeding phase.

use tracing::{debug, trace};

use crate::phase::Phase;
use crate::scope::SolverScope;

/// Seeds groups with must-pair clusters.
///
/// Constraints are processed in input order. A constraint is honored when
/// neither person is placed yet and the least populated group still has
/// room for both. Otherwise both people are left to the greedy phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct MustPairPhase;

impl MustPairPhase {
    pub fn new() -> Self {
        Self
    }
}

impl Phase for MustPairPhase {
    fn solve(&mut self, scope: &mut SolverScope<'_>) {
        let constraints = scope.constraints();

        for constraint in constraints.must_pair() {
            let (Some(first), Some(second)) = (
                scope.position_of(&constraint.first),
                scope.position_of(&constraint.second),
            ) else {
                debug!(
                    event = "must_pair_skipped",
                    constraint = %constraint.id,
                    reason = "unresolved",
                );
                continue;
            };

            if scope.is_assigned(first) || scope.is_assigned(second) {
                debug!(
                    event = "must_pair_skipped",
                    constraint = %constraint.id,
                    reason = "already_assigned",
                );
                continue;
            }

            let Some(group) = scope.least_populated_group() else {
                continue;
            };

            if scope.groups()[group].len() + 2 > scope.capacity() {
                debug!(
                    event = "must_pair_skipped",
                    constraint = %constraint.id,
                    reason = "capacity",
                );
                continue;
            }

            scope.place(first, group);
            scope.place(second, group);
            scope.stats_mut().record_step();
            trace!(
                event = "step",
                step = scope.stats().step_count,
                entity = first as u64,
                group = group as u64,
                accepted = true,
            );
        }
    }

    fn phase_type_name(&self) -> &'static str {
        "Must-Pair Seeding"
    }
}
