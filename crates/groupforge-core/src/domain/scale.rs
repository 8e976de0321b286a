//! Rating scale bounds.

/// Bounds and neutral value of the affinity rating scale.
///
/// The default is the classic 1..=5 star scale with 3 as neutral. Unrated
/// pairs are scored with `neutral`, and the reporting maximum uses `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "snake_case")
)]
pub struct RatingScale {
    pub min: i64,
    pub max: i64,
    pub neutral: i64,
}

impl RatingScale {
    pub const fn new(min: i64, max: i64, neutral: i64) -> Self {
        Self { min, max, neutral }
    }

    pub fn contains(&self, rating: i64) -> bool {
        (self.min..=self.max).contains(&rating)
    }

    /// Returns true if `min <= neutral <= max`.
    pub fn is_valid(&self) -> bool {
        self.min <= self.max && self.contains(self.neutral)
    }
}

impl Default for RatingScale {
    fn default() -> Self {
        Self::new(1, 5, 3)
    }
}
