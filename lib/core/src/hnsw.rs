use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use strata_similarity::{check_non_degenerate, cosine_similarity, similarity_to_angle_degrees};
use tracing::{debug, trace};

use crate::config::{HnswConfig, LayerPolicy, NeighborSelection, MAX_LEVEL_LIMIT};
use crate::graph::{NeighborList, Node, NodeId};
use crate::select::{Candidate, NeighborSelector};
use crate::visited::LayerMarks;
use crate::{Error, Result, Vector};

/// Every search starts at the first inserted node
pub const ENTRY_POINT: NodeId = 0;

/// Outcome of a greedy walk
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchResult {
    pub id: NodeId,
    pub similarity: f64,
    pub angle_degrees: f64,
    /// Moves made across all layers
    pub hops: usize,
    /// Similarity evaluations, including the entry node
    pub comparisons: usize,
}

/// Layered proximity graph for approximate nearest-neighbor search under
/// cosine similarity.
///
/// Nodes live in a dense arena indexed by [`NodeId`]; neighbor lists store ids
/// into that arena. Insertion links each new node to the candidates chosen by
/// the selector `S` on every layer it takes part in, and search walks greedily
/// from [`ENTRY_POINT`] toward higher similarity, one layer at a time.
pub struct HnswIndex<S = NeighborSelection> {
    nodes: Vec<Node>,
    /// Fixed by configuration or by the first insert
    dim: Option<usize>,
    config: HnswConfig,
    selector: S,
    rng: StdRng,
}

impl HnswIndex<NeighborSelection> {
    /// Index with default settings and the given layer ceiling.
    /// `max_level` is clamped to [`MAX_LEVEL_LIMIT`].
    #[must_use]
    pub fn new(max_level: usize) -> Self {
        let config = HnswConfig::with_max_level(max_level.min(MAX_LEVEL_LIMIT));
        let selector = config.neighbor_selection;
        Self::from_parts(config, selector)
    }

    /// Index using the selector named in `config`
    pub fn with_config(config: HnswConfig) -> Result<Self> {
        config.validate()?;
        let selector = config.neighbor_selection;
        Ok(Self::from_parts(config, selector))
    }
}

impl Default for HnswIndex<NeighborSelection> {
    fn default() -> Self {
        Self::new(HnswConfig::default().max_level)
    }
}

impl<S: NeighborSelector> HnswIndex<S> {
    /// Index with a custom neighbor selector. `config.neighbor_selection` is ignored.
    pub fn with_selector(config: HnswConfig, selector: S) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, selector))
    }

    fn from_parts(config: HnswConfig, selector: S) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            nodes: Vec::new(),
            dim: config.dimension,
            config,
            selector,
            rng,
        }
    }

    #[inline]
    fn check_dimension(&self, actual: usize) -> Result<()> {
        match self.dim {
            Some(expected) if expected != actual => {
                Err(Error::DimensionMismatch { expected, actual })
            }
            _ => Ok(()),
        }
    }

    /// Uniform over `0..=max_level`
    #[inline]
    fn draw_level(&mut self) -> usize {
        self.rng.random_range(0..=self.config.max_level)
    }

    #[inline]
    fn similarity(&self, query: &[f64], node_idx: NodeId) -> Result<f64> {
        Ok(cosine_similarity(query, self.nodes[node_idx].vector().as_slice())?)
    }

    /// Scores every node taking part in `layer` against `query`, in id order
    fn score_layer(&self, query: &[f64], layer: usize) -> Result<Vec<Candidate>> {
        let score = |node: &Node| -> Result<Candidate> {
            Ok(Candidate {
                id: node.id(),
                similarity: cosine_similarity(query, node.vector().as_slice())?,
            })
        };

        if self.nodes.len() >= self.config.parallel_threshold {
            self.nodes
                .par_iter()
                .filter(|node| node.participates(layer))
                .map(score)
                .collect()
        } else {
            self.nodes
                .iter()
                .filter(|node| node.participates(layer))
                .map(score)
                .collect()
        }
    }

    /// Insert a vector and return its id.
    ///
    /// The new node is compared against every node on each layer it takes
    /// part in and linked both ways to whatever the selector picks. All
    /// checks and scoring happen before the graph is touched, so a failed
    /// insert leaves the index unchanged.
    pub fn insert(&mut self, vector: impl Into<Vector>) -> Result<NodeId> {
        let vector = vector.into();
        self.check_dimension(vector.dim())?;
        check_non_degenerate(vector.as_slice())?;

        let id = self.nodes.len();
        let drawn = self.draw_level();
        let max_level = self.config.max_level;
        let (level, top_layer) = match self.config.layer_policy {
            LayerPolicy::Nominal => (drawn, max_level),
            LayerPolicy::Bounded if id == ENTRY_POINT => (max_level, max_level),
            LayerPolicy::Bounded => (drawn, drawn),
        };

        debug!(id, drawn, level, top_layer, dim = vector.dim(), "inserting node");

        let mut plan: Vec<(usize, Vec<Candidate>)> = Vec::with_capacity(top_layer + 1);
        for layer in (0..=top_layer).rev() {
            let candidates = self.score_layer(vector.as_slice(), layer)?;
            if candidates.is_empty() {
                continue;
            }
            let chosen = self.selector.select(layer, candidates);
            for c in &chosen {
                trace!(
                    id,
                    layer,
                    neighbor = c.id,
                    similarity = c.similarity,
                    angle = similarity_to_angle_degrees(c.similarity),
                    "linking"
                );
            }
            plan.push((layer, chosen));
        }

        // Commit. Nothing below can fail.
        let mut layers = vec![NeighborList::new(); top_layer + 1];
        for (layer, chosen) in plan {
            for c in chosen {
                if self.nodes[c.id].link(layer, id) {
                    layers[layer].push(c.id);
                }
            }
        }

        if self.dim.is_none() {
            self.dim = Some(vector.dim());
        }
        self.nodes.push(Node::new(id, vector, level, layers));

        Ok(id)
    }

    /// Approximate nearest neighbor of `query`
    pub fn search(&self, query: &[f64]) -> Result<NodeId> {
        self.search_detailed(query).map(|result| result.id)
    }

    /// Greedy walk from the entry node, top layer first.
    ///
    /// On each layer the walk scans the current node's neighbors in link order
    /// and moves to the first one that is strictly more similar to `query`,
    /// then rescans from there. Nodes already evaluated on the layer are
    /// skipped. When nothing improves the walk drops a layer.
    ///
    /// # Errors
    /// * `EmptyIndex` before any insert
    /// * `DimensionMismatch` / `DegenerateVector` for a bad query
    /// * `SearchDivergence` if a layer takes more moves than the step bound
    pub fn search_detailed(&self, query: &[f64]) -> Result<SearchResult> {
        if self.nodes.is_empty() {
            return Err(Error::EmptyIndex);
        }
        self.check_dimension(query.len())?;
        check_non_degenerate(query)?;

        let step_bound = self.config.max_search_steps.unwrap_or(self.nodes.len());
        let mut visited = LayerMarks::new(self.nodes.len());

        let mut current = ENTRY_POINT;
        let mut current_sim = self.similarity(query, current)?;
        let mut comparisons = 1;
        let mut hops = 0;

        debug!(entry = current, similarity = current_sim, "starting search");

        for layer in (0..=self.config.max_level).rev() {
            visited.next_layer();
            visited.mark(current);
            let mut steps = 0;

            loop {
                let mut next = None;
                for &neighbor in self.nodes[current].neighbors(layer) {
                    if !visited.mark(neighbor) {
                        continue;
                    }
                    let sim = self.similarity(query, neighbor)?;
                    comparisons += 1;
                    trace!(layer, from = current, neighbor, similarity = sim, "comparing");
                    if sim > current_sim {
                        next = Some((neighbor, sim));
                        break;
                    }
                }

                let Some((neighbor, sim)) = next else {
                    break;
                };

                steps += 1;
                if steps > step_bound {
                    return Err(Error::SearchDivergence { layer, steps });
                }
                current = neighbor;
                current_sim = sim;
                hops += 1;
            }
        }

        let result = SearchResult {
            id: current,
            similarity: current_sim,
            angle_degrees: similarity_to_angle_degrees(current_sim),
            hops,
            comparisons,
        };
        debug!(
            id = result.id,
            similarity = result.similarity,
            hops,
            comparisons,
            "search finished"
        );
        Ok(result)
    }

    /// Checks that every edge is recorded on both ends.
    pub fn verify_symmetry(&self) -> Result<()> {
        for node in &self.nodes {
            for layer in 0..node.layer_count() {
                for &other in node.neighbors(layer) {
                    if !self.nodes[other].neighbors(layer).contains(&node.id()) {
                        return Err(Error::AsymmetricEdge {
                            layer,
                            from: node.id(),
                            to: other,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Render the graph in Graphviz DOT.
    ///
    /// One dashed cluster per layer, top layer first, holding the nodes that
    /// take part in it. Edges are emitted from both ends and labelled with
    /// their layer; layer 2 is drawn red, layer 1 blue, the rest black.
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph HNSW {\n");
        dot.push_str("  rankdir=LR;\n");
        dot.push_str("  node [shape=circle, style=filled, fillcolor=lightyellow];\n");

        for layer in (0..=self.config.max_level).rev() {
            dot.push_str(&format!("  subgraph cluster_{layer} {{\n"));
            dot.push_str(&format!("    label=\"Level {layer}\";\n"));
            dot.push_str("    style=dashed;\n");
            for node in self.nodes.iter().filter(|n| n.participates(layer)) {
                dot.push_str(&format!("    n{id} [label=\"{id}\"];\n", id = node.id()));
            }
            dot.push_str("  }\n");
        }

        for node in &self.nodes {
            for layer in 0..node.layer_count() {
                let color = match layer {
                    2 => "red",
                    1 => "blue",
                    _ => "black",
                };
                for &other in node.neighbors(layer) {
                    dot.push_str(&format!(
                        "  n{} -> n{other} [label=\"L{layer}\", color={color}];\n",
                        node.id()
                    ));
                }
            }
        }

        dot.push_str("}\n");
        dot
    }

    /// Undirected edges recorded at `layer`
    #[must_use]
    pub fn edge_count(&self, layer: usize) -> usize {
        self.nodes.iter().map(|n| n.neighbors(layer).len()).sum::<usize>() / 2
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Neighbors of `id` at `layer`, or `None` for an unknown id
    #[must_use]
    pub fn neighbors(&self, id: NodeId, layer: usize) -> Option<&[NodeId]> {
        self.nodes.get(id).map(|node| node.neighbors(layer))
    }

    #[inline]
    #[must_use]
    pub fn entry_point(&self) -> Option<NodeId> {
        (!self.nodes.is_empty()).then_some(ENTRY_POINT)
    }

    #[inline]
    #[must_use]
    pub fn dimension(&self) -> Option<usize> {
        self.dim
    }

    #[inline]
    #[must_use]
    pub fn max_level(&self) -> usize {
        self.config.max_level
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &HnswConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
