//! # strata
//!
//! A small layered proximity graph for approximate nearest-neighbor search
//! over fixed-dimension vectors, using cosine similarity.
//!
//! ## Quick Start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! let mut index = HnswIndex::new(2);
//! for v in [[1.0, 0.0], [0.5, 0.5], [0.0, 1.0], [-1.0, 0.0], [0.6, 0.8]] {
//!     index.insert(v).unwrap();
//! }
//!
//! let result = index.search_detailed(&[0.9, 0.7]).unwrap();
//! println!("node {} at {:.2} degrees", result.id, result.angle_degrees);
//! ```
//!
//! ## Crate Structure
//!
//! - [`strata-similarity`](https://docs.rs/strata-similarity) - Cosine similarity engine
//! - [`strata-core`](https://docs.rs/strata-core) - Graph index, configuration, neighbor selection
//!
//! ## Behaviour
//!
//! - Node ids are dense and assigned in insertion order, starting at 0
//! - Every edge is recorded on both ends, per layer
//! - Search starts at node 0 and only ever moves to a more similar neighbor
//! - Inserts are all-or-nothing: a rejected vector leaves the graph untouched

// Re-export core types
pub use strata_core::{
    BestMatch, Candidate, Error, HnswConfig, HnswIndex, LayerPolicy, NeighborList,
    NeighborSelection, NeighborSelector, Node, NodeId, Result, SearchResult, SharedIndex,
    TopK, Vector, ENTRY_POINT, MAX_LEVEL_LIMIT,
};

/// Stateless similarity functions
pub mod similarity {
    pub use strata_similarity::{
        check_non_degenerate, cosine_similarity, dot_product, magnitude,
        similarity_to_angle_degrees, SimilarityError,
    };
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::similarity::{cosine_similarity, similarity_to_angle_degrees};
    pub use crate::{
        Error, HnswConfig, HnswIndex, LayerPolicy, NeighborSelection, NodeId, Result,
        SearchResult, SharedIndex, Vector,
    };
}
