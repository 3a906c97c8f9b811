use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::NeighborSelection;
use crate::hnsw::{HnswIndex, SearchResult};
use crate::select::NeighborSelector;
use crate::{NodeId, Result, Vector};

/// Cloneable handle that serializes access to one index.
/// Inserts take the write lock; searches share the read lock.
pub struct SharedIndex<S = NeighborSelection> {
    inner: Arc<RwLock<HnswIndex<S>>>,
}

impl<S> Clone for SharedIndex<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: NeighborSelector> SharedIndex<S> {
    #[must_use]
    pub fn new(index: HnswIndex<S>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    pub fn insert(&self, vector: impl Into<Vector>) -> Result<NodeId> {
        self.inner.write().insert(vector)
    }

    pub fn search(&self, query: &[f64]) -> Result<NodeId> {
        self.inner.read().search(query)
    }

    pub fn search_detailed(&self, query: &[f64]) -> Result<SearchResult> {
        self.inner.read().search_detailed(query)
    }

    /// Runs `f` with shared access to the underlying index
    pub fn read<R>(&self, f: impl FnOnce(&HnswIndex<S>) -> R) -> R {
        f(&self.inner.read())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl<S: NeighborSelector> From<HnswIndex<S>> for SharedIndex<S> {
    fn from(index: HnswIndex<S>) -> Self {
        Self::new(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HnswConfig;
    use std::thread;

    #[test]
    fn test_concurrent_inserts_keep_ids_dense() {
        let shared = SharedIndex::new(HnswIndex::new(2));

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || {
                    (0..25)
                        .map(|i| {
                            let x = (t * 25 + i) as f64;
                            shared.insert(vec![x.cos(), x.sin(), 1.0]).unwrap()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<NodeId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..100).collect::<Vec<_>>());
        assert_eq!(shared.len(), 100);
        shared.read(|index| index.verify_symmetry()).unwrap();
    }

    #[test]
    fn test_concurrent_searches() {
        let mut index = HnswIndex::with_config(HnswConfig::with_max_level(3).seed(8)).unwrap();
        for i in 0..30 {
            let x = i as f64 * 0.2;
            index.insert(vec![x.cos(), x.sin()]).unwrap();
        }
        let shared = SharedIndex::from(index);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || shared.search(&[0.3, 0.9]).unwrap())
            })
            .collect();
        let results: Vec<NodeId> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(results.windows(2).all(|w| w[0] == w[1]));
        assert!(results[0] < 30);
    }
}
