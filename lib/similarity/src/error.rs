use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimilarityError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityError {
    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Zero or non-finite magnitude; cosine similarity is undefined.
    #[error("Degenerate vector: magnitude is zero or not finite")]
    DegenerateVector,
}
