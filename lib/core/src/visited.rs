use crate::NodeId;

/// Nodes already scored on the layer currently being walked.
///
/// One flag per arena slot. The ids that were flagged are remembered so that
/// moving to the next layer only resets those slots, not the whole arena.
#[derive(Debug)]
pub(crate) struct LayerMarks {
    seen: Vec<bool>,
    touched: Vec<NodeId>,
}

impl LayerMarks {
    pub(crate) fn new(arena_len: usize) -> Self {
        Self {
            seen: vec![false; arena_len],
            touched: Vec::new(),
        }
    }

    /// Forget every mark before walking the next layer
    pub(crate) fn next_layer(&mut self) {
        for id in self.touched.drain(..) {
            self.seen[id] = false;
        }
    }

    /// Flags `id`; `false` if it was already flagged on this layer.
    pub(crate) fn mark(&mut self, id: NodeId) -> bool {
        if self.seen[id] {
            return false;
        }
        self.seen[id] = true;
        self.touched.push(id);
        true
    }
}
