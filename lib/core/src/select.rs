//! Neighbor selection at insertion time
//!
//! Insertion scores every node on a layer and hands the list to a
//! [`NeighborSelector`], which decides which of them the new node links to.
//! Traversal never looks at the selector, so a bounded-degree or diversity
//! heuristic can be dropped in without touching search.

use std::cmp::{Ordering, Reverse};

use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::config::NeighborSelection;
use crate::NodeId;

/// An existing node scored against the vector being inserted
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Candidate {
    pub id: NodeId,
    pub similarity: f64,
}

impl Candidate {
    /// Orders by similarity descending, then by id ascending
    #[inline]
    fn rank_key(&self) -> (Reverse<OrderedFloat<f64>>, NodeId) {
        (Reverse(OrderedFloat(self.similarity)), self.id)
    }
}

#[inline]
fn by_rank(a: &Candidate, b: &Candidate) -> Ordering {
    a.rank_key().cmp(&b.rank_key())
}

pub trait NeighborSelector: Send + Sync {
    /// Picks the nodes a newly inserted node links to at `layer`.
    /// `candidates` holds every node on that layer, in id order.
    fn select(&self, layer: usize, candidates: Vec<Candidate>) -> Vec<Candidate>;
}

/// The single most similar candidate; ties go to the lowest id.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestMatch;

impl NeighborSelector for BestMatch {
    fn select(&self, _layer: usize, candidates: Vec<Candidate>) -> Vec<Candidate> {
        candidates.into_iter().min_by(by_rank).into_iter().collect()
    }
}

/// Up to `m` of the most similar candidates, best first
#[derive(Debug, Clone, Copy)]
pub struct TopK {
    pub m: usize,
}

impl NeighborSelector for TopK {
    fn select(&self, _layer: usize, mut candidates: Vec<Candidate>) -> Vec<Candidate> {
        if candidates.len() > self.m {
            candidates.select_nth_unstable_by(self.m, by_rank);
            candidates.truncate(self.m);
        }
        candidates.sort_unstable_by(by_rank);
        candidates
    }
}

impl NeighborSelector for NeighborSelection {
    fn select(&self, layer: usize, candidates: Vec<Candidate>) -> Vec<Candidate> {
        match *self {
            NeighborSelection::BestMatch => BestMatch.select(layer, candidates),
            NeighborSelection::TopK { m } => TopK { m }.select(layer, candidates),
        }
    }
}
