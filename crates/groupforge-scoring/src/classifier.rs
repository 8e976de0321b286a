//! Must-pair / cannot-pair classification.

use groupforge_core::{ConstraintKind, PairConstraint, PersonId};
use tracing::debug;

/// Constraints split by kind, preserving input order within each kind.
///
/// The order of [`must_pair`](Self::must_pair) decides which must-pair
/// clusters are seeded first. Constraints pairing a person with themselves
/// are dropped. Ids that are not in the entity list are kept here and are
/// simply inert downstream.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedConstraints<'a> {
    must_pair: Vec<&'a PairConstraint>,
    cannot_pair: Vec<&'a PairConstraint>,
}

impl<'a> ClassifiedConstraints<'a> {
    pub fn classify(constraints: &'a [PairConstraint]) -> Self {
        let mut classified = Self::default();
        for constraint in constraints {
            if constraint.first == constraint.second {
                debug!(
                    event = "self_constraint_dropped",
                    constraint = %constraint.id,
                    person = %constraint.first,
                );
                continue;
            }
            match constraint.kind {
                ConstraintKind::MustPair => classified.must_pair.push(constraint),
                ConstraintKind::CannotPair => classified.cannot_pair.push(constraint),
            }
        }
        classified
    }

    pub fn must_pair(&self) -> &[&'a PairConstraint] {
        &self.must_pair
    }

    pub fn cannot_pair(&self) -> &[&'a PairConstraint] {
        &self.cannot_pair
    }

    pub fn len(&self) -> usize {
        self.must_pair.len() + self.cannot_pair.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// People that `id` must not share a group with.
    pub fn cannot_pair_partners<'s>(
        &'s self,
        id: &'s PersonId,
    ) -> impl Iterator<Item = &'a PersonId> + 's {
        self.cannot_pair.iter().copied().filter_map(move |c| {
            if &c.first == id {
                Some(&c.second)
            } else if &c.second == id {
                Some(&c.first)
            } else {
                None
            }
        })
    }

    /// Returns true if placing `id` next to any of `members` breaks a
    /// cannot-pair constraint.
    pub fn conflicts_with<'m>(
        &self,
        id: &PersonId,
        members: impl IntoIterator<Item = &'m PersonId> + Clone,
    ) -> bool {
        self.cannot_pair_partners(id)
            .any(|partner| members.clone().into_iter().any(|m| m == partner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraints() -> Vec<PairConstraint> {
        vec![
            PairConstraint::must_pair("m1", "a", "b"),
            PairConstraint::cannot_pair("c1", "a", "c"),
            PairConstraint::must_pair("m2", "d", "e"),
            PairConstraint::cannot_pair("c2", "f", "a"),
            PairConstraint::must_pair("self", "g", "g"),
        ]
    }

    #[test]
    fn test_split_preserves_order() {
        let all = constraints();
        let classified = ClassifiedConstraints::classify(&all);

        let must: Vec<&str> = classified.must_pair().iter().map(|c| c.id.as_str()).collect();
        let cannot: Vec<&str> = classified
            .cannot_pair()
            .iter()
            .map(|c| c.id.as_str())
            .collect();

        assert_eq!(must, vec!["m1", "m2"]);
        assert_eq!(cannot, vec!["c1", "c2"]);
        assert_eq!(classified.len(), 4);
    }

    #[test]
    fn test_cannot_pair_partners() {
        let all = constraints();
        let classified = ClassifiedConstraints::classify(&all);
        let a = PersonId::from("a");

        let partners: Vec<&str> = classified
            .cannot_pair_partners(&a)
            .map(|p| p.as_str())
            .collect();
        assert_eq!(partners, vec!["c", "f"]);
    }

    #[test]
    fn test_conflicts_with() {
        let all = constraints();
        let classified = ClassifiedConstraints::classify(&all);
        let (a, b, c) = (PersonId::from("a"), PersonId::from("b"), PersonId::from("c"));

        assert!(classified.conflicts_with(&a, [&b, &c]));
        assert!(!classified.conflicts_with(&a, [&b]));
        assert!(!classified.conflicts_with(&b, [&c]));
    }

    #[test]
    fn test_empty() {
        let classified = ClassifiedConstraints::classify(&[]);
        assert!(classified.is_empty());
    }
}
