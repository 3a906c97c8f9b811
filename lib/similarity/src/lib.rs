//! # strata Similarity
//!
//! Stateless vector math used by the strata graph index.
//!
//! - [`dot_product`] and [`magnitude`] over dense `f64` slices
//! - [`cosine_similarity`], guarded against length mismatches and
//!   zero-magnitude inputs so it never yields NaN
//! - [`similarity_to_angle_degrees`] for reporting
//!
//! ## Example
//!
//! ```rust
//! use strata_similarity::{cosine_similarity, similarity_to_angle_degrees};
//!
//! let sim = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
//! assert_eq!(sim, 0.0);
//! assert!((similarity_to_angle_degrees(sim) - 90.0).abs() < 1e-9);
//! ```

pub mod cosine;
pub mod error;
mod kernels;

pub use cosine::{
    check_non_degenerate,
    cosine_similarity,
    dot_product,
    magnitude,
    similarity_to_angle_degrees,
};
pub use error::{Result, SimilarityError};
