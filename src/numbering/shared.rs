//! Thread-safe external/internal id mapping.

use std::hash::Hash;

use dashmap::{mapref::entry::Entry, DashMap};

use crate::{
    graph::NodeId,
    numbering::{allocated_id, NodeNumberer, Renumbering},
    Error, Result,
};

/// A [`NodeNumberer`] that many threads can allocate into at once.
///
/// The forward map is a [`DashMap`]; the reverse table is an append-only
/// [`boxcar::Vec`] whose push index is the internal id. Registering a new
/// external id holds the map entry for that id while the reverse slot is pushed,
/// so two threads racing on the same id agree on one assignment and the two
/// directions never diverge. Ids remain dense: every push corresponds to exactly
/// one registered external id.
///
/// # Examples
///
/// ```rust
/// use densegraph::numbering::SharedNodeNumberer;
/// use std::thread;
///
/// let numberer = SharedNodeNumberer::new();
/// thread::scope(|scope| {
///     for worker in 0..4 {
///         let numberer = &numberer;
///         scope.spawn(move || {
///             for user in 0..100u64 {
///                 numberer.external_to_internal(user * (worker % 2 + 1));
///             }
///         });
///     }
/// });
/// assert_eq!(numberer.len(), 150);
/// ```
#[derive(Debug)]
pub struct SharedNodeNumberer<T>
where
    T: Hash + Eq + Clone,
{
    to_internal: DashMap<T, NodeId>,
    to_external: boxcar::Vec<T>,
}

impl<T> Default for SharedNodeNumberer<T>
where
    T: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SharedNodeNumberer<T>
where
    T: Hash + Eq + Clone,
{
    /// Creates an empty numberer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            to_internal: DashMap::new(),
            to_external: boxcar::Vec::new(),
        }
    }

    /// Returns the internal id of `external`, allocating the next free id if it is new.
    ///
    /// # Panics
    ///
    /// Panics if more ids are registered than a [`NodeId`] can represent.
    pub fn external_to_internal(&self, external: T) -> NodeId {
        if let Some(id) = self.to_internal.get(&external) {
            return *id;
        }

        match self.to_internal.entry(external) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let id = allocated_id(self.to_external.push(entry.key().clone()));
                entry.insert(id);
                id
            }
        }
    }

    /// Returns the internal id of `external` if it has been registered.
    #[must_use]
    pub fn internal_id(&self, external: &T) -> Option<NodeId> {
        self.to_internal.get(external).map(|id| *id)
    }

    /// Returns the external id that `internal` was assigned to.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownInternalId`] if `internal` has not been allocated.
    pub fn internal_to_external(&self, internal: NodeId) -> Result<&T> {
        self.to_external
            .get(internal.index())
            .ok_or(Error::UnknownInternalId(internal))
    }

    /// Number of registered ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.to_external.count()
    }

    /// Returns `true` if no id has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts into a single-owner numberer with the same assignments.
    #[must_use]
    pub fn into_numberer(self) -> NodeNumberer<T> {
        // No writer can be active once `self` is owned, so the slots are gap-free.
        NodeNumberer::from_externals(
            self.to_external
                .iter()
                .map(|(_, external)| external.clone()),
        )
    }
}

impl<T> Renumbering<T> for SharedNodeNumberer<T>
where
    T: Hash + Eq + Clone,
{
    fn internal_id(&self, external: &T) -> Option<NodeId> {
        SharedNodeNumberer::internal_id(self, external)
    }

    fn external_id(&self, internal: NodeId) -> Result<T> {
        self.internal_to_external(internal).cloned()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::*;

    #[test]
    fn test_shared_sequential_allocation() {
        let numberer = SharedNodeNumberer::new();
        assert!(numberer.is_empty());
        assert_eq!(numberer.external_to_internal("a"), NodeId::new(0));
        assert_eq!(numberer.external_to_internal("b"), NodeId::new(1));
        assert_eq!(numberer.external_to_internal("a"), NodeId::new(0));
        assert_eq!(numberer.len(), 2);
        assert_eq!(numberer.internal_id(&"b"), Some(NodeId::new(1)));
        assert_eq!(numberer.internal_id(&"c"), None);
    }

    #[test]
    fn test_shared_unknown_internal_id() {
        let numberer: SharedNodeNumberer<u32> = SharedNodeNumberer::new();
        numberer.external_to_internal(9);
        assert_eq!(*numberer.internal_to_external(NodeId::new(0)).unwrap(), 9);
        assert!(matches!(
            numberer.internal_to_external(NodeId::new(1)),
            Err(Error::UnknownInternalId(_))
        ));
    }

    #[test]
    fn test_shared_concurrent_allocation() {
        let numberer = Arc::new(SharedNodeNumberer::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let numberer = Arc::clone(&numberer);
                thread::spawn(move || {
                    (0..500u32)
                        .map(|external| (external, numberer.external_to_internal(external)))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let results: Vec<Vec<(u32, NodeId)>> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();

        // Every thread observed the same assignment for every external id.
        for result in &results[1..] {
            assert_eq!(result, &results[0]);
        }
        assert_eq!(numberer.len(), 500);

        // Ids are dense and the directions are inverses.
        let mut seen = vec![false; 500];
        for (external, internal) in &results[0] {
            assert_eq!(numberer.internal_to_external(*internal).unwrap(), external);
            seen[internal.index()] = true;
        }
        assert!(seen.into_iter().all(|s| s));
    }

    #[test]
    fn test_into_numberer() {
        let shared = SharedNodeNumberer::new();
        for name in ["x", "y", "z", "y"] {
            shared.external_to_internal(name);
        }
        let numberer = shared.into_numberer();
        assert_eq!(numberer.len(), 3);
        assert_eq!(numberer.internal_id(&"z"), Some(NodeId::new(2)));
        assert_eq!(*numberer.internal_to_external(NodeId::new(1)).unwrap(), "y");
    }
}
