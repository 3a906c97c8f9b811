//! # strata Core
//!
//! Layered proximity graph (HNSW-style) for approximate nearest-neighbor
//! search under cosine similarity.
//!
//! - [`Vector`] - Dense `f64` vector
//! - [`Node`] - An inserted vector with its per-layer neighbor lists
//! - [`HnswIndex`] - Arena-backed graph with `insert` and greedy `search`
//! - [`NeighborSelector`] - Pluggable policy choosing links at insertion
//! - [`SharedIndex`] - Lock-wrapped handle for use across threads
//!
//! ## Example
//!
//! ```rust
//! use strata_core::{HnswConfig, HnswIndex};
//!
//! let mut index = HnswIndex::with_config(HnswConfig::with_max_level(2)).unwrap();
//! for v in [[1.0, 0.0], [0.5, 0.5], [0.0, 1.0], [-1.0, 0.0], [0.6, 0.8]] {
//!     index.insert(v).unwrap();
//! }
//!
//! let id = index.search(&[0.9, 0.7]).unwrap();
//! assert!(id < index.len());
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod hnsw;
pub mod select;
pub mod shared;
pub mod vector;
mod visited;

pub use config::{HnswConfig, LayerPolicy, NeighborSelection, MAX_LEVEL_LIMIT};
pub use error::{Error, Result};
pub use graph::{NeighborList, Node, NodeId};
pub use hnsw::{HnswIndex, SearchResult, ENTRY_POINT};
pub use select::{BestMatch, Candidate, NeighborSelector, TopK};
pub use shared::SharedIndex;
pub use vector::Vector;
