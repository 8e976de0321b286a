//! Symmetric pair lookup.

use std::collections::HashMap;

use groupforge_core::{ConstraintKind, PairConstraint, PairKey, PairRating, PersonId, RatingScale};

/// Rating and constraint lookup keyed by canonical [`PairKey`].
///
/// Both lookups are symmetric: `lookup_score(a, b) == lookup_score(b, a)`.
/// If the input holds several entries for the same pair, the first one
/// wins.
///
/// # Examples
///
/// ```
/// use groupforge_core::{PairRating, PersonId};
/// use groupforge_scoring::PairIndex;
///
/// let index = PairIndex::new(&[PairRating::new("a", "b", 5)], &[]);
/// let (a, b, c) = (PersonId::from("a"), PersonId::from("b"), PersonId::from("c"));
///
/// assert_eq!(index.lookup_score(&b, &a), 5);
/// assert_eq!(index.lookup_score(&a, &c), 3); // neutral default
/// ```
#[derive(Debug, Clone)]
pub struct PairIndex {
    ratings: HashMap<PairKey, i64>,
    constraints: HashMap<PairKey, ConstraintKind>,
    neutral: i64,
}

impl PairIndex {
    /// Builds an index using the default neutral rating.
    pub fn new(ratings: &[PairRating], constraints: &[PairConstraint]) -> Self {
        Self::with_scale(ratings, constraints, RatingScale::default())
    }

    /// Builds an index whose unrated pairs score `scale.neutral`.
    pub fn with_scale(
        ratings: &[PairRating],
        constraints: &[PairConstraint],
        scale: RatingScale,
    ) -> Self {
        let mut rating_map = HashMap::with_capacity(ratings.len());
        for rating in ratings {
            rating_map.entry(rating.key()).or_insert(rating.rating);
        }

        let mut constraint_map = HashMap::with_capacity(constraints.len());
        for constraint in constraints {
            constraint_map
                .entry(constraint.key())
                .or_insert(constraint.kind);
        }

        Self {
            ratings: rating_map,
            constraints: constraint_map,
            neutral: scale.neutral,
        }
    }

    /// Returns the stored rating for the pair, or the neutral default.
    pub fn lookup_score(&self, a: &PersonId, b: &PersonId) -> i64 {
        self.ratings
            .get(&PairKey::new(a, b))
            .copied()
            .unwrap_or(self.neutral)
    }

    /// Returns the stored constraint kind for the pair.
    pub fn lookup_constraint(&self, a: &PersonId, b: &PersonId) -> Option<ConstraintKind> {
        self.constraints.get(&PairKey::new(a, b)).copied()
    }

    pub fn neutral(&self) -> i64 {
        self.neutral
    }

    pub fn rating_count(&self) -> usize {
        self.ratings.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}
