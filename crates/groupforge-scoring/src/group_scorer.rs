//! Group affinity scoring.

use groupforge_core::{PairRating, Person, PersonId};

use crate::pair_index::PairIndex;

/// Computes the affinity of a group as the sum of its pairwise ratings.
///
/// Groups with fewer than two members score 0. Scoring is pure: the same
/// members and index always give the same result.
#[derive(Debug, Clone, Copy)]
pub struct GroupScorer<'a> {
    index: &'a PairIndex,
}

impl<'a> GroupScorer<'a> {
    pub fn new(index: &'a PairIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &'a PairIndex {
        self.index
    }

    /// Total score of a group of people.
    pub fn score(&self, members: &[Person]) -> i64 {
        self.score_ids(members.iter().map(|m| &m.id))
    }

    /// Total score of a group given by member ids.
    pub fn score_ids<'m>(&self, ids: impl IntoIterator<Item = &'m PersonId>) -> i64 {
        let ids: Vec<&PersonId> = ids.into_iter().collect();
        let mut total = 0;
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                total += self.index.lookup_score(a, b);
            }
        }
        total
    }

    /// Score gained by adding `candidate` to a group with `members`.
    pub fn incremental_score<'m>(
        &self,
        candidate: &PersonId,
        members: impl IntoIterator<Item = &'m PersonId>,
    ) -> i64 {
        members
            .into_iter()
            .map(|member| self.index.lookup_score(candidate, member))
            .sum()
    }
}

/// Scores a group directly from a rating list, using the default neutral
/// rating for unrated pairs.
///
/// # Examples
///
/// ```
/// use groupforge_core::{PairRating, Person};
/// use groupforge_scoring::score_group;
///
/// let members = vec![Person::new("a", "A"), Person::new("b", "B"), Person::new("c", "C")];
/// let ratings = vec![PairRating::new("a", "b", 5)];
///
/// // 5 (a-b) + 3 (a-c) + 3 (b-c)
/// assert_eq!(score_group(&members, &ratings), 11);
/// ```
pub fn score_group(members: &[Person], ratings: &[PairRating]) -> i64 {
    let index = PairIndex::new(ratings, &[]);
    GroupScorer::new(&index).score(members)
}

#[cfg(test)]
mod tests {
    use super::*;
    use groupforge_test::people;

    #[test]
    fn test_small_groups_score_zero() {
        let index = PairIndex::new(&[], &[]);
        let scorer = GroupScorer::new(&index);

        assert_eq!(scorer.score(&[]), 0);
        assert_eq!(scorer.score(&people(&["A"])), 0);
    }

    #[test]
    fn test_unrated_pairs_are_neutral() {
        let index = PairIndex::new(&[], &[]);
        let scorer = GroupScorer::new(&index);

        // C(4,2) = 6 pairs at 3 each
        assert_eq!(scorer.score(&people(&["A", "B", "C", "D"])), 18);
    }

    #[test]
    fn test_rated_pairs() {
        let group = people(&["A", "B", "C"]);
        let ratings = vec![
            PairRating::new(group[0].id.clone(), group[1].id.clone(), 5),
            PairRating::new(group[2].id.clone(), group[1].id.clone(), 1),
        ];
        let index = PairIndex::new(&ratings, &[]);
        let scorer = GroupScorer::new(&index);

        assert_eq!(scorer.score(&group), 5 + 3 + 1);
        assert_eq!(score_group(&group, &ratings), 9);
    }

    #[test]
    fn test_incremental_score() {
        let group = people(&["A", "B", "C"]);
        let ratings = vec![PairRating::new(group[0].id.clone(), group[2].id.clone(), 4)];
        let index = PairIndex::new(&ratings, &[]);
        let scorer = GroupScorer::new(&index);

        let members = [&group[0].id, &group[1].id];
        assert_eq!(scorer.incremental_score(&group[2].id, members), 4 + 3);
        assert_eq!(scorer.incremental_score(&group[2].id, Vec::<&PersonId>::new()), 0);
    }
}
