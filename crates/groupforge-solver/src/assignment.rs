//! Result of an assignment run.

use std::fmt;

use groupforge_core::{ConstraintId, Group, GroupId, HardSoftScore, PersonId, RatingScale};

/// Something the engine had to give up on to place everyone.
///
/// Warnings describe the finished partition; they never abort a run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum AssignmentWarning {
    /// A must-pair whose two people ended in different groups.
    MustPairNotHonored {
        constraint: ConstraintId,
        first: PersonId,
        second: PersonId,
    },
    /// A cannot-pair whose two people share a group.
    CannotPairViolated {
        constraint: ConstraintId,
        group: GroupId,
        first: PersonId,
        second: PersonId,
    },
    /// A group holding more people than the target size.
    CapacityExceeded {
        group: GroupId,
        size: usize,
        capacity: usize,
    },
    /// A person placed by the fallback rule.
    FallbackPlacement { person: PersonId, group: GroupId },
}

impl AssignmentWarning {
    /// Hard violations this warning stands for.
    ///
    /// Fallback placements count as zero: their consequences are reported
    /// by the other variants.
    pub fn violation_count(&self) -> usize {
        match self {
            AssignmentWarning::MustPairNotHonored { .. }
            | AssignmentWarning::CannotPairViolated { .. } => 1,
            AssignmentWarning::CapacityExceeded { size, capacity, .. } => {
                size.saturating_sub(*capacity)
            }
            AssignmentWarning::FallbackPlacement { .. } => 0,
        }
    }
}

impl fmt::Display for AssignmentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentWarning::MustPairNotHonored {
                constraint,
                first,
                second,
            } => write!(
                f,
                "must-pair {constraint} not honored: {first} and {second} are in different groups"
            ),
            AssignmentWarning::CannotPairViolated {
                constraint,
                group,
                first,
                second,
            } => write!(
                f,
                "cannot-pair {constraint} violated: {first} and {second} share {group}"
            ),
            AssignmentWarning::CapacityExceeded {
                group,
                size,
                capacity,
            } => write!(f, "{group} has {size} members, capacity is {capacity}"),
            AssignmentWarning::FallbackPlacement { person, group } => {
                write!(f, "{person} placed in {group} by fallback")
            }
        }
    }
}

/// Non-empty groups produced by an assignment run, plus warnings.
///
/// Group ids keep their creation index, so after empty groups are dropped
/// the ids may have gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    groups: Vec<Group>,
    warnings: Vec<AssignmentWarning>,
    group_size: usize,
    scale: RatingScale,
}

impl Assignment {
    pub fn new(
        groups: Vec<Group>,
        warnings: Vec<AssignmentWarning>,
        group_size: usize,
        scale: RatingScale,
    ) -> Self {
        Self {
            groups,
            warnings,
            group_size,
            scale,
        }
    }

    /// An assignment with no groups, as produced for an empty input.
    pub fn empty(group_size: usize, scale: RatingScale) -> Self {
        Self::new(Vec::new(), Vec::new(), group_size, scale)
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<Group> {
        self.groups
    }

    pub fn warnings(&self) -> &[AssignmentWarning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Target group size the run was configured with.
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    pub fn scale(&self) -> RatingScale {
        self.scale
    }

    /// Number of people placed across all groups.
    pub fn person_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// Sum of all group scores.
    pub fn total_score(&self) -> i64 {
        self.groups.iter().map(|g| g.total_score).sum()
    }

    /// Score if every member pair was rated `max_rating`.
    pub fn max_possible_score(&self, max_rating: i64) -> i64 {
        self.groups
            .iter()
            .map(|g| g.pair_count() as i64 * max_rating)
            .sum()
    }

    /// Ratio of the total score to the maximum on this assignment's scale.
    ///
    /// Returns 0.0 when no group has a pair.
    pub fn efficiency(&self) -> f64 {
        let max = self.max_possible_score(self.scale.max);
        if max == 0 {
            0.0
        } else {
            self.total_score() as f64 / max as f64
        }
    }

    /// The group holding the person with `id`.
    pub fn group_of(&self, id: &PersonId) -> Option<&Group> {
        self.groups.iter().find(|g| g.contains(id))
    }

    /// Hard level is minus the number of violations, soft level the total.
    pub fn score(&self) -> HardSoftScore {
        let violations: usize = self
            .warnings
            .iter()
            .map(AssignmentWarning::violation_count)
            .sum();
        HardSoftScore::of(-(violations as i64), self.total_score())
    }

    /// True when no constraint is broken and no group is over capacity.
    pub fn is_feasible(&self) -> bool {
        self.warnings.iter().all(|w| w.violation_count() == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use groupforge_core::Score;
    use groupforge_test::people;

    fn group(index: usize, names: &[&str], total_score: i64) -> Group {
        Group {
            id: GroupId(index),
            members: people(names),
            total_score,
        }
    }

    #[test]
    fn test_reporting_helpers() {
        let assignment = Assignment::new(
            vec![group(0, &["A", "B", "C"], 12), group(1, &["D"], 0)],
            Vec::new(),
            3,
            RatingScale::default(),
        );

        assert_eq!(assignment.total_score(), 12);
        assert_eq!(assignment.max_possible_score(5), 15);
        assert!((assignment.efficiency() - 0.8).abs() < f64::EPSILON);
        assert_eq!(assignment.person_count(), 4);
        assert_eq!(
            assignment.group_of(&PersonId::from("D")).map(|g| g.id),
            Some(GroupId(1))
        );
        assert!(assignment.group_of(&PersonId::from("Z")).is_none());
    }

    #[test]
    fn test_efficiency_without_pairs_is_zero() {
        let assignment = Assignment::new(
            vec![group(0, &["A"], 0)],
            Vec::new(),
            2,
            RatingScale::default(),
        );
        assert_eq!(assignment.efficiency(), 0.0);
        assert_eq!(Assignment::empty(2, RatingScale::default()).efficiency(), 0.0);
    }

    #[test]
    fn test_score_counts_violations() {
        let warnings = vec![
            AssignmentWarning::FallbackPlacement {
                person: PersonId::from("C"),
                group: GroupId(0),
            },
            AssignmentWarning::CapacityExceeded {
                group: GroupId(0),
                size: 3,
                capacity: 2,
            },
            AssignmentWarning::CannotPairViolated {
                constraint: ConstraintId::from("c1"),
                group: GroupId(0),
                first: PersonId::from("A"),
                second: PersonId::from("C"),
            },
        ];
        let assignment = Assignment::new(
            vec![group(0, &["A", "B", "C"], 9)],
            warnings,
            2,
            RatingScale::default(),
        );

        assert_eq!(assignment.score(), HardSoftScore::of(-2, 9));
        assert!(!assignment.is_feasible());
        assert!(!assignment.score().is_feasible());
    }

    #[test]
    fn test_fallback_alone_is_feasible() {
        let assignment = Assignment::new(
            vec![group(0, &["A"], 0)],
            vec![AssignmentWarning::FallbackPlacement {
                person: PersonId::from("A"),
                group: GroupId(0),
            }],
            2,
            RatingScale::default(),
        );
        assert!(assignment.is_feasible());
    }

    #[test]
    fn test_warning_display() {
        let warning = AssignmentWarning::MustPairNotHonored {
            constraint: ConstraintId::from("m1"),
            first: PersonId::from("A"),
            second: PersonId::from("B"),
        };
        assert_eq!(
            warning.to_string(),
            "must-pair m1 not honored: A and B are in different groups"
        );

        let warning = AssignmentWarning::CapacityExceeded {
            group: GroupId(2),
            size: 4,
            capacity: 3,
        };
        assert_eq!(warning.to_string(), "group-2 has 4 members, capacity is 3");
    }
}
