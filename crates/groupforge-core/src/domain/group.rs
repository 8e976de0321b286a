//! Output groups.

use std::fmt;

use super::person::{Person, PersonId};

/// Identifier of a group within one assignment run.
///
/// Ids follow creation order, so `GroupId(0)` is the first group created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct GroupId(pub usize);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group-{}", self.0)
    }
}

/// A group of people with its precomputed affinity score.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    pub id: GroupId,
    pub members: Vec<Person>,
    pub total_score: i64,
}

impl Group {
    pub fn new(id: GroupId) -> Self {
        Self {
            id,
            members: Vec::new(),
            total_score: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: &PersonId) -> bool {
        self.members.iter().any(|m| &m.id == id)
    }

    /// Number of unordered member pairs, `C(len, 2)`.
    pub fn pair_count(&self) -> usize {
        let n = self.members.len();
        n * n.saturating_sub(1) / 2
    }

    /// Average rating over member pairs, `None` below two members.
    pub fn average_rating(&self) -> Option<f64> {
        match self.pair_count() {
            0 => None,
            pairs => Some(self.total_score as f64 / pairs as f64),
        }
    }
}
