//! Error type shared by dice, games and analyzers

use thiserror::Error;

/// Errors raised by die, game and analyzer operations
///
/// Every variant is returned at the point of the offending call; nothing is
/// retried and no operation leaves partially updated state behind.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MonteCarloError {
    /// Bad construction input, non-positive roll count or unknown result form
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Weight change requested for a face the die does not have
    #[error("Unknown face: {0} is not on this die")]
    UnknownFace(String),

    /// Weight is non-numeric, negative or not finite
    #[error("Invalid weight: {0}")]
    InvalidWeight(String),

    /// Results were requested before the game was played
    #[error("No results yet: the game has not been played")]
    NoResultsYet,

    /// Config or checkpoint JSON could not be read or written
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for MonteCarloError {
    fn from(err: serde_json::Error) -> Self {
        MonteCarloError::Serialization(err.to_string())
    }
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, MonteCarloError>;
