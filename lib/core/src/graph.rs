// Graph nodes - one per inserted vector, stored in the index arena
use smallvec::SmallVec;

use crate::Vector;

/// Dense, zero-based node identifier. Doubles as the arena index.
pub type NodeId = usize;

/// Neighbor list for one layer, in link order
pub type NeighborList = SmallVec<[NodeId; 4]>;

#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    vector: Vector,
    level: usize,
    /// `layers[l]` holds the neighbors at layer `l`; a node takes part in
    /// exactly the layers `0..layers.len()`.
    layers: Vec<NeighborList>,
}

impl Node {
    #[inline]
    pub(crate) fn new(id: NodeId, vector: Vector, level: usize, layers: Vec<NeighborList>) -> Self {
        Self {
            id,
            vector,
            level,
            layers,
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn vector(&self) -> &Vector {
        &self.vector
    }

    /// Level drawn for this node at insertion
    #[inline]
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Highest layer this node takes part in
    #[inline]
    #[must_use]
    pub fn top_layer(&self) -> usize {
        self.layers.len().saturating_sub(1)
    }

    #[inline]
    #[must_use]
    pub fn participates(&self, layer: usize) -> bool {
        layer < self.layers.len()
    }

    /// Neighbors at `layer`; empty when the node does not take part in it.
    #[inline]
    #[must_use]
    pub fn neighbors(&self, layer: usize) -> &[NodeId] {
        self.layers.get(layer).map_or(&[], |list| list.as_slice())
    }

    /// Number of layers this node takes part in
    #[inline]
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Appends `other` at `layer`. Returns `false` if the node is not on that
    /// layer or the link already exists.
    pub(crate) fn link(&mut self, layer: usize, other: NodeId) -> bool {
        match self.layers.get_mut(layer) {
            Some(list) if !list.contains(&other) => {
                list.push(other);
                true
            }
            _ => false,
        }
    }
}
