//! Error types for GroupForge

use thiserror::Error;

use crate::domain::{PairKey, PersonId};

/// Main error type for GroupForge operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupForgeError {
    /// Invalid engine configuration, such as a zero group size
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error in the domain model (blank names, duplicate ids)
    #[error("Domain model error: {0}")]
    DomainModel(String),

    /// Rating outside the configured scale
    #[error("Rating {rating} is outside the scale {min}..={max}")]
    InvalidRating { rating: i64, min: i64, max: i64 },

    /// A constrained pair cannot carry a rating
    #[error("Pair {0} carries a constraint and cannot be rated")]
    PairConstrained(PairKey),

    /// A pair must consist of two distinct people
    #[error("Person {0} cannot be paired with themselves")]
    SelfPair(PersonId),

    /// Reference to a person that is not part of the problem
    #[error("Unknown person: {0}")]
    UnknownPerson(PersonId),
}

/// Result type alias for GroupForge operations
pub type Result<T> = std::result::Result<T, GroupForgeError>;
