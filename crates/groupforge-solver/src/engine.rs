//! The assignment engine.

use std::time::Instant;

use groupforge_config::{
    AcceptorConfig, GroupingConfig, LocalSearchConfig, PhaseConfig, DEFAULT_GROUP_SIZE,
    DEFAULT_LATE_ACCEPTANCE_SIZE, DEFAULT_RANDOM_SEED,
};
use groupforge_core::{
    Group, GroupForgeError, GroupId, GroupingProblem, HardSoftScore, PairConstraint, PairRating,
    Person, PersonId, RatingScale, Result, Score,
};
use groupforge_scoring::{ClassifiedConstraints, PairIndex};
use tracing::info;

use crate::assignment::{Assignment, AssignmentWarning};
use crate::phase::{
    GreedyPhase, HillClimbingAcceptor, LateAcceptanceAcceptor, LocalSearchPhase, MustPairPhase,
    Phase,
};
use crate::scope::SolverScope;

/// Partitions people into groups of a target size.
///
/// A run seeds must-pair clusters, places everyone else greedily and then
/// runs any configured local search phases. Runs are deterministic: the
/// same input and engine settings always give the same assignment.
///
/// # Examples
///
/// ```
/// use groupforge_core::{PairRating, Person};
/// use groupforge_solver::AssignmentEngine;
///
/// let people: Vec<Person> = ["A", "B", "C", "D"]
///     .iter()
///     .map(|n| Person::new(*n, *n))
///     .collect();
/// let ratings = vec![PairRating::new("A", "B", 5)];
///
/// let engine = AssignmentEngine::new(2).unwrap();
/// let assignment = engine.assign(&people, &ratings, &[]);
///
/// assert_eq!(assignment.len(), 2);
/// assert_eq!(assignment.total_score(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct AssignmentEngine {
    group_size: usize,
    scale: RatingScale,
    seed: u64,
    local_search: Vec<LocalSearchConfig>,
}

impl AssignmentEngine {
    /// Creates an engine with target group size `group_size`.
    ///
    /// # Errors
    ///
    /// Returns [`GroupForgeError::Config`] when `group_size` is 0.
    pub fn new(group_size: usize) -> Result<Self> {
        if group_size == 0 {
            return Err(GroupForgeError::Config(
                "group size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            group_size,
            scale: RatingScale::default(),
            seed: DEFAULT_RANDOM_SEED,
            local_search: Vec::new(),
        })
    }

    /// Creates an engine from a configuration for `people` people.
    ///
    /// Group sizing by count is resolved against `people` here.
    pub fn from_config(config: &GroupingConfig, people: usize) -> Result<Self> {
        config
            .validate()
            .map_err(|e| GroupForgeError::Config(e.to_string()))?;
        let group_size = config
            .group_size_for(people)
            .map_err(|e| GroupForgeError::Config(e.to_string()))?;

        let mut engine = Self::new(group_size)?
            .with_scale(config.rating_scale)
            .with_seed(config.seed());
        for phase in &config.phases {
            let PhaseConfig::LocalSearch(local_search) = phase;
            engine = engine.with_local_search(local_search.clone());
        }
        Ok(engine)
    }

    /// Sets the scale whose neutral rating scores unrated pairs.
    pub fn with_scale(mut self, scale: RatingScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Appends a local search phase run after greedy placement.
    pub fn with_local_search(mut self, config: LocalSearchConfig) -> Self {
        self.local_search.push(config);
        self
    }

    pub fn group_size(&self) -> usize {
        self.group_size
    }

    pub fn scale(&self) -> RatingScale {
        self.scale
    }

    /// Solves a problem using the problem's own rating scale.
    pub fn assign_problem(&self, problem: &GroupingProblem) -> Assignment {
        self.run(
            problem.people(),
            problem.ratings(),
            problem.constraints(),
            problem.scale(),
        )
    }

    /// Partitions `people` into non-empty groups.
    ///
    /// Ratings and constraints may mention ids outside `people`; those
    /// entries have no effect.
    pub fn assign(
        &self,
        people: &[Person],
        ratings: &[PairRating],
        constraints: &[PairConstraint],
    ) -> Assignment {
        self.run(people, ratings, constraints, self.scale)
    }

    fn run(
        &self,
        people: &[Person],
        ratings: &[PairRating],
        constraints: &[PairConstraint],
        scale: RatingScale,
    ) -> Assignment {
        let solve_start = Instant::now();
        let group_count = people.len().div_ceil(self.group_size);
        let index = PairIndex::with_scale(ratings, constraints, scale);
        let classified = ClassifiedConstraints::classify(constraints);

        info!(
            event = "solve_start",
            entity_count = people.len(),
            group_count = group_count,
            constraint_count = classified.len(),
            group_size = self.group_size,
        );

        let mut scope = SolverScope::new(people, &index, &classified, self.group_size, group_count);
        scope.stats_mut().start();

        for (phase_index, mut phase) in self.phases().into_iter().enumerate() {
            let phase_start = Instant::now();
            let steps_before = scope.stats().step_count;
            info!(
                event = "phase_start",
                phase = phase.phase_type_name(),
                phase_index = phase_index,
            );

            phase.solve(&mut scope);

            info!(
                event = "phase_end",
                phase = phase.phase_type_name(),
                phase_index = phase_index,
                duration_ms = phase_start.elapsed().as_millis() as u64,
                steps = scope.stats().step_count - steps_before,
                score = %scope.calculate_score(),
            );
        }

        let assignment = self.build_assignment(&scope, scale);
        let score = assignment.score();
        info!(
            event = "solve_end",
            duration_ms = solve_start.elapsed().as_millis() as u64,
            score = %score,
            feasible = score.is_feasible(),
            warnings = assignment.warnings().len(),
            moves_evaluated = scope.stats().moves_evaluated,
        );
        assignment
    }

    fn phases(&self) -> Vec<Box<dyn Phase>> {
        let mut phases: Vec<Box<dyn Phase>> =
            vec![Box::new(MustPairPhase::new()), Box::new(GreedyPhase::new())];
        for (i, config) in self.local_search.iter().enumerate() {
            phases.push(self.local_search_phase(config, i as u64));
        }
        phases
    }

    fn local_search_phase(&self, config: &LocalSearchConfig, offset: u64) -> Box<dyn Phase> {
        let seed = self.seed.wrapping_add(offset);
        let step_limit = config.step_count_limit();
        let termination = config.termination.clone().unwrap_or_default();
        let unimproved_limit = termination.unimproved_step_count_limit;
        let time_limit = termination.time_limit();

        match &config.acceptor {
            Some(AcceptorConfig::HillClimbing) => Box::new(
                LocalSearchPhase::new(HillClimbingAcceptor, step_limit, seed)
                    .with_unimproved_step_count_limit(unimproved_limit)
                    .with_time_limit(time_limit),
            ),
            Some(AcceptorConfig::LateAcceptance(late)) => Box::new(
                LocalSearchPhase::new(
                    LateAcceptanceAcceptor::<HardSoftScore>::new(late.size()),
                    step_limit,
                    seed,
                )
                .with_unimproved_step_count_limit(unimproved_limit)
                .with_time_limit(time_limit),
            ),
            None => Box::new(
                LocalSearchPhase::new(
                    LateAcceptanceAcceptor::<HardSoftScore>::new(DEFAULT_LATE_ACCEPTANCE_SIZE),
                    step_limit,
                    seed,
                )
                .with_unimproved_step_count_limit(unimproved_limit)
                .with_time_limit(time_limit),
            ),
        }
    }

    fn build_assignment(&self, scope: &SolverScope<'_>, scale: RatingScale) -> Assignment {
        let warnings = collect_warnings(scope);
        let scorer = scope.group_scorer();

        let groups = scope
            .groups()
            .iter()
            .enumerate()
            .filter(|(_, members)| !members.is_empty())
            .map(|(g, members)| {
                let members: Vec<Person> = members.iter().map(|m| (*m).clone()).collect();
                Group {
                    id: GroupId(g),
                    total_score: scorer.score(&members),
                    members,
                }
            })
            .collect();

        Assignment::new(groups, warnings, self.group_size, scale)
    }
}

impl Default for AssignmentEngine {
    fn default() -> Self {
        Self {
            group_size: DEFAULT_GROUP_SIZE,
            scale: RatingScale::default(),
            seed: DEFAULT_RANDOM_SEED,
            local_search: Vec::new(),
        }
    }
}

/// Scans the final partition for everything the run could not honor.
fn collect_warnings(scope: &SolverScope<'_>) -> Vec<AssignmentWarning> {
    let people = scope.people();
    let mut warnings: Vec<AssignmentWarning> = scope
        .fallbacks()
        .iter()
        .map(|&(position, group)| AssignmentWarning::FallbackPlacement {
            person: people[position].id.clone(),
            // Local search may have moved the person since placement
            group: GroupId(scope.group_of_position(position).unwrap_or(group)),
        })
        .collect();

    let group_of = |id: &PersonId| {
        scope
            .position_of(id)
            .and_then(|position| scope.group_of_position(position))
    };

    for constraint in scope.constraints().must_pair() {
        if let (Some(a), Some(b)) = (group_of(&constraint.first), group_of(&constraint.second)) {
            if a != b {
                warnings.push(AssignmentWarning::MustPairNotHonored {
                    constraint: constraint.id.clone(),
                    first: constraint.first.clone(),
                    second: constraint.second.clone(),
                });
            }
        }
    }

    for constraint in scope.constraints().cannot_pair() {
        if let (Some(a), Some(b)) = (group_of(&constraint.first), group_of(&constraint.second)) {
            if a == b {
                warnings.push(AssignmentWarning::CannotPairViolated {
                    constraint: constraint.id.clone(),
                    group: GroupId(a),
                    first: constraint.first.clone(),
                    second: constraint.second.clone(),
                });
            }
        }
    }

    for (g, members) in scope.groups().iter().enumerate() {
        if members.len() > scope.capacity() {
            warnings.push(AssignmentWarning::CapacityExceeded {
                group: GroupId(g),
                size: members.len(),
                capacity: scope.capacity(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests;
