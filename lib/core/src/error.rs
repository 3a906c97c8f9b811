use strata_similarity::SimilarityError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Degenerate vector: magnitude is zero or not finite")]
    DegenerateVector,

    #[error("Index is empty")]
    EmptyIndex,

    #[error("Search did not settle at layer {layer} after {steps} steps")]
    SearchDivergence { layer: usize, steps: usize },

    #[error("Asymmetric edge at layer {layer}: {from} -> {to}")]
    AsymmetricEdge { layer: usize, from: usize, to: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<SimilarityError> for Error {
    fn from(err: SimilarityError) -> Self {
        match err {
            SimilarityError::DimensionMismatch { expected, actual } => {
                Error::DimensionMismatch { expected, actual }
            }
            SimilarityError::DegenerateVector => Error::DegenerateVector,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
