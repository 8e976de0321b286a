//! Working state of one assignment run.

use std::collections::HashMap;

use groupforge_core::{HardSoftScore, Person, PersonId};
use groupforge_scoring::{ClassifiedConstraints, GroupScorer, PairIndex, PartitionScorer};

use crate::stats::SolverStats;

/// Mutable state shared by the phases of a single run.
///
/// Groups hold borrowed people; placement is tracked per input position so
/// every input entry is placed exactly once.
pub struct SolverScope<'p> {
    people: &'p [Person],
    index: &'p PairIndex,
    constraints: &'p ClassifiedConstraints<'p>,
    capacity: usize,
    position_by_id: HashMap<&'p PersonId, usize>,
    groups: Vec<Vec<&'p Person>>,
    assigned: Vec<bool>,
    fallbacks: Vec<(usize, usize)>,
    stats: SolverStats,
}

impl<'p> SolverScope<'p> {
    /// Creates a scope with `group_count` empty groups of `capacity`.
    pub fn new(
        people: &'p [Person],
        index: &'p PairIndex,
        constraints: &'p ClassifiedConstraints<'p>,
        capacity: usize,
        group_count: usize,
    ) -> Self {
        let mut position_by_id = HashMap::with_capacity(people.len());
        for (position, person) in people.iter().enumerate() {
            position_by_id.entry(&person.id).or_insert(position);
        }

        Self {
            people,
            index,
            constraints,
            capacity,
            position_by_id,
            groups: vec![Vec::new(); group_count],
            assigned: vec![false; people.len()],
            fallbacks: Vec::new(),
            stats: SolverStats::default(),
        }
    }

    pub fn people(&self) -> &'p [Person] {
        self.people
    }

    pub fn constraints(&self) -> &'p ClassifiedConstraints<'p> {
        self.constraints
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn group_scorer(&self) -> GroupScorer<'p> {
        GroupScorer::new(self.index)
    }

    pub fn partition_scorer(&self) -> PartitionScorer<'p> {
        PartitionScorer::new(self.index, self.constraints, self.capacity)
    }

    /// Input position of the first person with `id`.
    pub fn position_of(&self, id: &PersonId) -> Option<usize> {
        self.position_by_id.get(id).copied()
    }

    pub fn is_assigned(&self, position: usize) -> bool {
        self.assigned[position]
    }

    /// Group holding the input entry at `position`.
    pub fn group_of_position(&self, position: usize) -> Option<usize> {
        let target = &self.people[position];
        self.groups
            .iter()
            .position(|members| members.iter().any(|m| std::ptr::eq(*m, target)))
    }

    pub fn groups(&self) -> &[Vec<&'p Person>] {
        &self.groups
    }

    pub fn groups_mut(&mut self) -> &mut Vec<Vec<&'p Person>> {
        &mut self.groups
    }

    /// Index of the group with the fewest members, first on ties.
    pub fn least_populated_group(&self) -> Option<usize> {
        self.groups
            .iter()
            .enumerate()
            .min_by_key(|(_, members)| members.len())
            .map(|(g, _)| g)
    }

    /// Places the person at `position` into group `group`.
    pub fn place(&mut self, position: usize, group: usize) {
        self.groups[group].push(&self.people[position]);
        self.assigned[position] = true;
    }

    /// Places a person ignoring capacity and cannot-pair constraints.
    pub fn place_fallback(&mut self, position: usize, group: usize) {
        self.place(position, group);
        self.fallbacks.push((position, group));
        self.stats.record_fallback();
    }

    /// `(position, group)` for every fallback placement, in order.
    pub fn fallbacks(&self) -> &[(usize, usize)] {
        &self.fallbacks
    }

    pub fn unassigned_count(&self) -> usize {
        self.assigned.iter().filter(|a| !**a).count()
    }

    pub fn calculate_score(&self) -> HardSoftScore {
        self.partition_scorer().score(&self.groups)
    }

    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut SolverStats {
        &mut self.stats
    }
}
