//! Swap-based local search improvement phase.

use std::time::{Duration, Instant};

use groupforge_core::{HardSoftScore, Person, Score};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::phase::{Acceptor, Phase};
use crate::scope::SolverScope;

/// Improves a complete partition by swapping people between groups.
///
/// Each step swaps two randomly chosen people from two different non-empty
/// groups. Swaps keep group sizes unchanged. A swap that lowers the hard
/// score is always rejected; all other swaps go through the acceptor. The
/// best partition seen is restored when the phase ends.
///
/// Randomness comes from a seeded [`ChaCha8Rng`], so a run with the same
/// seed and step-based termination is reproducible.
#[derive(Debug)]
pub struct LocalSearchPhase<A> {
    acceptor: A,
    step_count_limit: u64,
    unimproved_step_count_limit: Option<u64>,
    time_limit: Option<Duration>,
    rng: ChaCha8Rng,
}

impl<A> LocalSearchPhase<A>
where
    A: Acceptor<HardSoftScore>,
{
    pub fn new(acceptor: A, step_count_limit: u64, seed: u64) -> Self {
        Self {
            acceptor,
            step_count_limit,
            unimproved_step_count_limit: None,
            time_limit: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn with_unimproved_step_count_limit(mut self, limit: Option<u64>) -> Self {
        self.unimproved_step_count_limit = limit;
        self
    }

    pub fn with_time_limit(mut self, limit: Option<Duration>) -> Self {
        self.time_limit = limit;
        self
    }

    fn pick_swap(&mut self, groups: &[Vec<&Person>], candidates: &[usize]) -> Swap {
        let first = self.rng.random_range(0..candidates.len());
        let mut second = self.rng.random_range(0..candidates.len() - 1);
        if second >= first {
            second += 1;
        }

        let (g1, g2) = (candidates[first], candidates[second]);
        Swap {
            first: (g1, self.rng.random_range(0..groups[g1].len())),
            second: (g2, self.rng.random_range(0..groups[g2].len())),
        }
    }
}

/// Exchange of two members, each given as `(group, slot)`.
#[derive(Debug, Clone, Copy)]
struct Swap {
    first: (usize, usize),
    second: (usize, usize),
}

impl Swap {
    fn apply(self, groups: &mut [Vec<&Person>]) {
        let (g1, m1) = self.first;
        let (g2, m2) = self.second;
        let held = groups[g1][m1];
        groups[g1][m1] = groups[g2][m2];
        groups[g2][m2] = held;
    }
}

impl<A> Phase for LocalSearchPhase<A>
where
    A: Acceptor<HardSoftScore>,
{
    fn solve(&mut self, scope: &mut SolverScope<'_>) {
        let candidates: Vec<usize> = scope
            .groups()
            .iter()
            .enumerate()
            .filter(|(_, members)| !members.is_empty())
            .map(|(g, _)| g)
            .collect();
        if candidates.len() < 2 {
            return;
        }

        let scorer = scope.partition_scorer();
        let mut current = scorer.score(scope.groups());
        let mut best = current;
        let mut best_groups = scope.groups().to_vec();
        let mut unimproved = 0u64;

        self.acceptor.phase_started(&current);
        let start = Instant::now();
        let mut last_progress = start;

        for step in 0..self.step_count_limit {
            if self.time_limit.is_some_and(|limit| start.elapsed() >= limit) {
                break;
            }
            if self
                .unimproved_step_count_limit
                .is_some_and(|limit| unimproved >= limit)
            {
                break;
            }

            let swap = self.pick_swap(scope.groups(), &candidates);
            swap.apply(scope.groups_mut());
            let score = scorer.score(scope.groups());

            let accepted =
                score.hard() >= current.hard() && self.acceptor.is_accepted(&current, &score);
            scope.stats_mut().record_move(accepted);

            if accepted {
                current = score;
                self.acceptor.step_ended(&score);
                scope.stats_mut().record_step();
                trace!(
                    event = "step",
                    step = step,
                    score = %score,
                    accepted = true,
                );

                if score.is_better_than(&best) {
                    best = score;
                    best_groups = scope.groups().to_vec();
                    unimproved = 0;
                } else {
                    unimproved += 1;
                }
            } else {
                trace!(
                    event = "step",
                    step = step,
                    score = %score,
                    accepted = false,
                );
                swap.apply(scope.groups_mut());
                unimproved += 1;
            }

            let now = Instant::now();
            if now.duration_since(last_progress).as_secs() >= 1 {
                debug!(
                    event = "progress",
                    steps = scope.stats().step_count,
                    speed = scope.stats().moves_per_second(),
                    score = %best,
                );
                last_progress = now;
            }
        }

        *scope.groups_mut() = best_groups;
    }

    fn phase_type_name(&self) -> &'static str {
        "Local Search"
    }
}
