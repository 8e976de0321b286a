//! Hard/soft evaluation of a complete partition.

use std::collections::HashMap;

use groupforge_core::{HardSoftScore, Person, PersonId};

use crate::classifier::ClassifiedConstraints;
use crate::group_scorer::GroupScorer;
use crate::pair_index::PairIndex;

/// Hard constraint violations found in a partition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartitionViolations {
    /// Cannot-pair constraints whose two people share a group.
    pub cannot_pair: usize,
    /// Must-pair constraints whose two people ended in different groups.
    pub must_pair: usize,
    /// Members beyond capacity, summed over all groups.
    pub over_capacity: usize,
}

impl PartitionViolations {
    pub fn total(&self) -> usize {
        self.cannot_pair + self.must_pair + self.over_capacity
    }
}

/// Scores a partition as a [`HardSoftScore`].
///
/// The hard level is minus the number of violations, the soft level is the
/// summed group affinity. Constraints naming people absent from the
/// partition are ignored.
#[derive(Debug, Clone, Copy)]
pub struct PartitionScorer<'a> {
    scorer: GroupScorer<'a>,
    constraints: &'a ClassifiedConstraints<'a>,
    capacity: usize,
}

impl<'a> PartitionScorer<'a> {
    pub fn new(
        index: &'a PairIndex,
        constraints: &'a ClassifiedConstraints<'a>,
        capacity: usize,
    ) -> Self {
        Self {
            scorer: GroupScorer::new(index),
            constraints,
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn score(&self, groups: &[Vec<&Person>]) -> HardSoftScore {
        let violations = self.violations(groups);
        let soft = groups
            .iter()
            .map(|members| self.scorer.score_ids(members.iter().map(|m| &m.id)))
            .sum();
        HardSoftScore::of(-(violations.total() as i64), soft)
    }

    pub fn violations(&self, groups: &[Vec<&Person>]) -> PartitionViolations {
        let group_of: HashMap<&PersonId, usize> = groups
            .iter()
            .enumerate()
            .flat_map(|(g, members)| members.iter().map(move |m| (&m.id, g)))
            .collect();

        let mut violations = PartitionViolations::default();
        for constraint in self.constraints.cannot_pair() {
            if let (Some(a), Some(b)) = (
                group_of.get(&constraint.first),
                group_of.get(&constraint.second),
            ) {
                if a == b {
                    violations.cannot_pair += 1;
                }
            }
        }
        for constraint in self.constraints.must_pair() {
            if let (Some(a), Some(b)) = (
                group_of.get(&constraint.first),
                group_of.get(&constraint.second),
            ) {
                if a != b {
                    violations.must_pair += 1;
                }
            }
        }
        violations.over_capacity = groups
            .iter()
            .map(|members| members.len().saturating_sub(self.capacity))
            .sum();
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use groupforge_core::{PairConstraint, PairRating};
    use groupforge_test::people;

    #[test]
    fn test_feasible_partition() {
        let all = people(&["A", "B", "C", "D"]);
        let ratings = vec![PairRating::new(all[0].id.clone(), all[1].id.clone(), 5)];
        let constraints = vec![PairConstraint::cannot_pair(
            "c1",
            all[0].id.clone(),
            all[2].id.clone(),
        )];
        let index = PairIndex::new(&ratings, &constraints);
        let classified = ClassifiedConstraints::classify(&constraints);
        let scorer = PartitionScorer::new(&index, &classified, 2);

        let groups = vec![vec![&all[0], &all[1]], vec![&all[2], &all[3]]];
        assert_eq!(scorer.score(&groups), HardSoftScore::of(0, 8));
    }

    #[test]
    fn test_violations_are_counted() {
        let all = people(&["A", "B", "C", "D"]);
        let constraints = vec![
            PairConstraint::cannot_pair("c1", all[0].id.clone(), all[1].id.clone()),
            PairConstraint::must_pair("m1", all[2].id.clone(), all[3].id.clone()),
            PairConstraint::must_pair("ghost", all[2].id.clone(), "nobody"),
        ];
        let index = PairIndex::new(&[], &constraints);
        let classified = ClassifiedConstraints::classify(&constraints);
        let scorer = PartitionScorer::new(&index, &classified, 2);

        let groups = vec![vec![&all[0], &all[1], &all[2]], vec![&all[3]]];
        let violations = scorer.violations(&groups);

        assert_eq!(
            violations,
            PartitionViolations {
                cannot_pair: 1,
                must_pair: 1,
                over_capacity: 1,
            }
        );
        assert_eq!(scorer.score(&groups), HardSoftScore::of(-3, 9));
    }
}
