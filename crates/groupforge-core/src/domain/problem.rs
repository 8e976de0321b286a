//! The grouping problem aggregate.

use crate::error::{GroupForgeError, Result};

use super::pair::{ConstraintId, ConstraintKind, PairConstraint, PairKey, PairRating};
use super::person::{Person, PersonId};
use super::scale::RatingScale;

/// People, pair ratings and pair constraints for one grouping run.
///
/// Mutations keep the data consistent:
/// - at most one rating and at most one constraint per unordered pair
///   (later writes replace earlier ones)
/// - a constrained pair carries no rating
/// - removing a person removes every rating and constraint mentioning them
///
/// # Examples
///
/// ```
/// use groupforge_core::{ConstraintKind, GroupingProblem};
///
/// let mut problem = GroupingProblem::new();
/// let ada = problem.add_person("Ada", None).unwrap();
/// let bob = problem.add_person("Bob", Some("backend".into())).unwrap();
///
/// problem.set_rating(&ada, &bob, 5).unwrap();
/// problem.set_rating(&bob, &ada, 4).unwrap();
/// assert_eq!(problem.rating(&ada, &bob), Some(4));
///
/// problem.set_constraint(&ada, &bob, Some(ConstraintKind::MustPair)).unwrap();
/// assert_eq!(problem.rating(&ada, &bob), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupingProblem {
    #[cfg_attr(feature = "serde", serde(default))]
    people: Vec<Person>,
    #[cfg_attr(feature = "serde", serde(default))]
    ratings: Vec<PairRating>,
    #[cfg_attr(feature = "serde", serde(default))]
    constraints: Vec<PairConstraint>,
    #[cfg_attr(feature = "serde", serde(default))]
    scale: RatingScale,
    #[cfg_attr(feature = "serde", serde(skip))]
    next_person: u64,
    #[cfg_attr(feature = "serde", serde(skip))]
    next_constraint: u64,
}

impl GroupingProblem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scale(scale: RatingScale) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    /// Builds a problem from a list of people, validating each of them.
    pub fn from_people(people: impl IntoIterator<Item = Person>) -> Result<Self> {
        let mut problem = Self::new();
        for person in people {
            problem.insert_person(person)?;
        }
        Ok(problem)
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn ratings(&self) -> &[PairRating] {
        &self.ratings
    }

    pub fn constraints(&self) -> &[PairConstraint] {
        &self.constraints
    }

    pub fn scale(&self) -> RatingScale {
        self.scale
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.iter().find(|p| &p.id == id)
    }

    /// Adds a person with a generated `person-<n>` id.
    pub fn add_person(&mut self, name: &str, description: Option<String>) -> Result<PersonId> {
        let id = self.next_person_id();
        let mut person = Person::new(id.clone(), name.trim());
        if let Some(description) = description {
            person = person.with_description(description);
        }
        self.insert_person(person)?;
        Ok(id)
    }

    /// Adds an existing person, rejecting blank names and duplicate ids.
    pub fn insert_person(&mut self, person: Person) -> Result<()> {
        if person.name.trim().is_empty() {
            return Err(GroupForgeError::DomainModel(format!(
                "person {} has a blank name",
                person.id
            )));
        }
        if self.person(&person.id).is_some() {
            return Err(GroupForgeError::DomainModel(format!(
                "duplicate person id {}",
                person.id
            )));
        }
        self.people.push(person);
        Ok(())
    }

    /// Removes a person together with every rating and constraint on them.
    pub fn remove_person(&mut self, id: &PersonId) -> Option<Person> {
        let index = self.people.iter().position(|p| &p.id == id)?;
        self.ratings.retain(|r| &r.first != id && &r.second != id);
        self.constraints.retain(|c| &c.first != id && &c.second != id);
        Some(self.people.remove(index))
    }

    /// Returns the stored rating for the unordered pair, if any.
    pub fn rating(&self, a: &PersonId, b: &PersonId) -> Option<i64> {
        let key = PairKey::new(a, b);
        self.ratings
            .iter()
            .find(|r| r.key() == key)
            .map(|r| r.rating)
    }

    /// Upserts the rating of an unordered pair.
    ///
    /// # Errors
    ///
    /// Fails for unknown people, self pairs, ratings outside the scale and
    /// pairs that carry a constraint.
    pub fn set_rating(&mut self, a: &PersonId, b: &PersonId, rating: i64) -> Result<()> {
        let key = self.checked_key(a, b)?;
        if !self.scale.contains(rating) {
            return Err(GroupForgeError::InvalidRating {
                rating,
                min: self.scale.min,
                max: self.scale.max,
            });
        }
        if self.constraints.iter().any(|c| c.key() == key) {
            return Err(GroupForgeError::PairConstrained(key));
        }

        match self.ratings.iter_mut().find(|r| r.key() == key) {
            Some(existing) => existing.rating = rating,
            None => self.ratings.push(PairRating::new(a.clone(), b.clone(), rating)),
        }
        Ok(())
    }

    /// Returns the active constraint on the unordered pair, if any.
    pub fn constraint(&self, a: &PersonId, b: &PersonId) -> Option<&PairConstraint> {
        let key = PairKey::new(a, b);
        self.constraints.iter().find(|c| c.key() == key)
    }

    /// Sets, replaces or (with `None`) clears the constraint on a pair.
    ///
    /// Setting a constraint drops any rating stored for the pair. An
    /// existing constraint keeps its id when its kind changes. Returns the
    /// id of the active constraint, or `None` after clearing.
    pub fn set_constraint(
        &mut self,
        a: &PersonId,
        b: &PersonId,
        kind: Option<ConstraintKind>,
    ) -> Result<Option<ConstraintId>> {
        let key = self.checked_key(a, b)?;
        let existing = self.constraints.iter().position(|c| c.key() == key);

        let Some(kind) = kind else {
            if let Some(index) = existing {
                self.constraints.remove(index);
            }
            return Ok(None);
        };

        self.ratings.retain(|r| r.key() != key);
        let id = match existing {
            Some(index) => {
                let constraint = &mut self.constraints[index];
                constraint.kind = kind;
                constraint.id.clone()
            }
            None => {
                let id = self.next_constraint_id();
                self.constraints
                    .push(PairConstraint::new(id.clone(), a.clone(), b.clone(), kind));
                id
            }
        };
        Ok(Some(id))
    }

    /// All unordered pairs of people in input order (`i < j`).
    pub fn pairs(&self) -> impl Iterator<Item = (&Person, &Person)> + '_ {
        self.people.iter().enumerate().flat_map(move |(i, first)| {
            self.people[i + 1..].iter().map(move |second| (first, second))
        })
    }

    /// Number of pairs that carry either a rating or a constraint.
    pub fn rated_pair_count(&self) -> usize {
        self.ratings.len() + self.constraints.len()
    }

    /// Re-checks every rule the mutation methods enforce.
    ///
    /// Needed for problems built by deserialization, which bypasses them.
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_valid() {
            return Err(GroupForgeError::DomainModel(format!(
                "rating scale {}..={} does not contain neutral {}",
                self.scale.min, self.scale.max, self.scale.neutral
            )));
        }

        for (i, person) in self.people.iter().enumerate() {
            if person.name.trim().is_empty() {
                return Err(GroupForgeError::DomainModel(format!(
                    "person {} has a blank name",
                    person.id
                )));
            }
            if self.people[..i].iter().any(|p| p.id == person.id) {
                return Err(GroupForgeError::DomainModel(format!(
                    "duplicate person id {}",
                    person.id
                )));
            }
        }

        let mut seen = Vec::with_capacity(self.constraints.len());
        for constraint in &self.constraints {
            let key = self.checked_key(&constraint.first, &constraint.second)?;
            if seen.contains(&key) {
                return Err(GroupForgeError::DomainModel(format!(
                    "pair {key} has more than one constraint"
                )));
            }
            seen.push(key);
        }

        let mut rated = Vec::with_capacity(self.ratings.len());
        for rating in &self.ratings {
            let key = self.checked_key(&rating.first, &rating.second)?;
            if !self.scale.contains(rating.rating) {
                return Err(GroupForgeError::InvalidRating {
                    rating: rating.rating,
                    min: self.scale.min,
                    max: self.scale.max,
                });
            }
            if seen.contains(&key) {
                return Err(GroupForgeError::PairConstrained(key));
            }
            if rated.contains(&key) {
                return Err(GroupForgeError::DomainModel(format!(
                    "pair {key} has more than one rating"
                )));
            }
            rated.push(key);
        }
        Ok(())
    }

    fn checked_key(&self, a: &PersonId, b: &PersonId) -> Result<PairKey> {
        for id in [a, b] {
            if self.person(id).is_none() {
                return Err(GroupForgeError::UnknownPerson(id.clone()));
            }
        }
        if a == b {
            return Err(GroupForgeError::SelfPair(a.clone()));
        }
        Ok(PairKey::new(a, b))
    }

    fn next_person_id(&mut self) -> PersonId {
        loop {
            self.next_person += 1;
            let id = PersonId::new(format!("person-{}", self.next_person));
            if self.person(&id).is_none() {
                return id;
            }
        }
    }

    fn next_constraint_id(&mut self) -> ConstraintId {
        loop {
            self.next_constraint += 1;
            let id = ConstraintId::new(format!("constraint-{}", self.next_constraint));
            if !self.constraints.iter().any(|c| c.id == id) {
                return id;
            }
        }
    }
}
