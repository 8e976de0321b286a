//! Pair-level facts: ratings and hard constraints.

use std::fmt;

use super::person::PersonId;

/// Canonical key for an unordered pair of people.
///
/// The two ids are stored in sorted order so `PairKey::new(a, b)` and
/// `PairKey::new(b, a)` are equal and hash identically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairKey {
    low: PersonId,
    high: PersonId,
}

impl PairKey {
    pub fn new(a: &PersonId, b: &PersonId) -> Self {
        if a <= b {
            Self {
                low: a.clone(),
                high: b.clone(),
            }
        } else {
            Self {
                low: b.clone(),
                high: a.clone(),
            }
        }
    }

    pub fn low(&self) -> &PersonId {
        &self.low
    }

    pub fn high(&self) -> &PersonId {
        &self.high
    }

    /// Returns true if `id` is one of the two people in the pair.
    pub fn contains(&self, id: &PersonId) -> bool {
        &self.low == id || &self.high == id
    }

    /// Returns the member of the pair that is not `id`.
    pub fn other(&self, id: &PersonId) -> Option<&PersonId> {
        if &self.low == id {
            Some(&self.high)
        } else if &self.high == id {
            Some(&self.low)
        } else {
            None
        }
    }

    pub fn is_self_pair(&self) -> bool {
        self.low == self.high
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}

/// Affinity rating for an unordered pair of people.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairRating {
    pub first: PersonId,
    pub second: PersonId,
    pub rating: i64,
}

impl PairRating {
    pub fn new(first: impl Into<PersonId>, second: impl Into<PersonId>, rating: i64) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            rating,
        }
    }

    pub fn key(&self) -> PairKey {
        PairKey::new(&self.first, &self.second)
    }
}

/// Kind of a hard pairing constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ConstraintKind {
    /// Both people should share a group.
    MustPair,
    /// Both people must never share a group.
    CannotPair,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintKind::MustPair => f.write_str("must-pair"),
            ConstraintKind::CannotPair => f.write_str("cannot-pair"),
        }
    }
}

/// Unique identifier of a [`PairConstraint`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ConstraintId(String);

impl ConstraintId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConstraintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConstraintId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A must-pair or cannot-pair constraint on an unordered pair.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairConstraint {
    pub id: ConstraintId,
    pub first: PersonId,
    pub second: PersonId,
    pub kind: ConstraintKind,
}

impl PairConstraint {
    pub fn new(
        id: impl Into<ConstraintId>,
        first: impl Into<PersonId>,
        second: impl Into<PersonId>,
        kind: ConstraintKind,
    ) -> Self {
        Self {
            id: id.into(),
            first: first.into(),
            second: second.into(),
            kind,
        }
    }

    pub fn must_pair(
        id: impl Into<ConstraintId>,
        first: impl Into<PersonId>,
        second: impl Into<PersonId>,
    ) -> Self {
        Self::new(id, first, second, ConstraintKind::MustPair)
    }

    pub fn cannot_pair(
        id: impl Into<ConstraintId>,
        first: impl Into<PersonId>,
        second: impl Into<PersonId>,
    ) -> Self {
        Self::new(id, first, second, ConstraintKind::CannotPair)
    }

    pub fn key(&self) -> PairKey {
        PairKey::new(&self.first, &self.second)
    }
}
