//! Compressed per-node neighbor storage.
//!
//! All neighbor lists of one direction live in a single `targets` array; node `i`
//! owns `targets[offsets[i]..offsets[i + 1]]`. A direction that is not stored is an
//! [`Adjacency`] with no slots, which answers every lookup with an empty slice.

use crate::graph::NodeId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Adjacency {
    /// `slots + 1` prefix sums, or empty when nothing is stored.
    offsets: Vec<usize>,
    targets: Vec<NodeId>,
}

impl Adjacency {
    /// Packs per-slot lists. Each list must already be sorted and deduplicated.
    pub(crate) fn from_lists(lists: Vec<Vec<NodeId>>) -> Self {
        let total = lists.iter().map(Vec::len).sum();
        let mut offsets = Vec::with_capacity(lists.len() + 1);
        let mut targets = Vec::with_capacity(total);

        offsets.push(0);
        for list in lists {
            targets.extend_from_slice(&list);
            offsets.push(targets.len());
        }

        Adjacency { offsets, targets }
    }

    /// Builds the reverse direction over `slots` slots.
    ///
    /// Sources are visited in ascending order, so every derived list comes out
    /// sorted, and each edge is written exactly once.
    pub(crate) fn transpose(&self, slots: usize) -> Self {
        let mut offsets = vec![0usize; slots + 1];
        for target in &self.targets {
            offsets[target.index() + 1] += 1;
        }
        for i in 0..slots {
            offsets[i + 1] += offsets[i];
        }

        let mut cursor = offsets[..slots].to_vec();
        let mut targets = vec![NodeId::default(); self.targets.len()];
        for source in 0..self.slots() {
            // Slot indices are bounded by the validated id range.
            let source_id = NodeId::new(source as u32);
            for target in self.neighbors(source) {
                let at = &mut cursor[target.index()];
                targets[*at] = source_id;
                *at += 1;
            }
        }

        Adjacency { offsets, targets }
    }

    /// Number of addressable slots.
    pub(crate) fn slots(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// Neighbors stored for `slot`; empty for unknown slots.
    pub(crate) fn neighbors(&self, slot: usize) -> &[NodeId] {
        match (self.offsets.get(slot), self.offsets.get(slot + 1)) {
            (Some(&start), Some(&end)) => &self.targets[start..end],
            _ => &[],
        }
    }

    /// Total number of stored entries.
    pub(crate) fn edge_count(&self) -> u64 {
        self.targets.len() as u64
    }
}
