//! Single-owner external/internal id mapping.

use std::{collections::HashMap, hash::Hash};

use crate::{
    graph::{EdgeRecord, NodeId},
    numbering::{allocated_id, Renumbering},
    Error, Result,
};

/// A bidirectional mapping between external ids of type `T` and dense [`NodeId`]s.
///
/// Internal ids are handed out in first-seen order starting from 0. Once assigned,
/// an id never changes and is never reused.
///
/// The numberer is not synchronized; allocation requires `&mut self`. Use
/// [`SharedNodeNumberer`](crate::numbering::SharedNodeNumberer) when several threads
/// must allocate into the same id space.
///
/// # Type Parameters
///
/// * `T` - The external id type (user ids, strings, hashes)
#[derive(Debug, Clone)]
pub struct NodeNumberer<T>
where
    T: Hash + Eq + Clone,
{
    /// Map from external id to internal id
    to_internal: HashMap<T, NodeId>,
    /// External ids indexed by internal id
    to_external: Vec<T>,
}

impl<T> Default for NodeNumberer<T>
where
    T: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodeNumberer<T>
where
    T: Hash + Eq + Clone,
{
    /// Creates an empty numberer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            to_internal: HashMap::new(),
            to_external: Vec::new(),
        }
    }

    /// Creates an empty numberer with room for `capacity` ids.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_internal: HashMap::with_capacity(capacity),
            to_external: Vec::with_capacity(capacity),
        }
    }

    /// Creates a numberer pre-seeded with `externals`, numbered in iteration order.
    ///
    /// A repeated external id keeps the id of its first occurrence.
    pub fn from_externals<I>(externals: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let externals = externals.into_iter();
        let mut numberer = Self::with_capacity(externals.size_hint().0);
        for external in externals {
            numberer.external_to_internal(external);
        }
        numberer
    }

    /// Returns the internal id of `external`, allocating the next free id if it is new.
    ///
    /// # Panics
    ///
    /// Panics if more ids are registered than a [`NodeId`] can represent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use densegraph::{graph::NodeId, numbering::NodeNumberer};
    ///
    /// let mut numberer = NodeNumberer::new();
    /// assert_eq!(numberer.external_to_internal("x"), NodeId::new(0));
    /// assert_eq!(numberer.external_to_internal("y"), NodeId::new(1));
    /// assert_eq!(numberer.external_to_internal("x"), NodeId::new(0));
    /// ```
    pub fn external_to_internal(&mut self, external: T) -> NodeId {
        if let Some(&id) = self.to_internal.get(&external) {
            return id;
        }

        let id = allocated_id(self.to_external.len());
        self.to_external.push(external.clone());
        self.to_internal.insert(external, id);
        id
    }

    /// Returns the internal id of `external` if it has been registered.
    #[must_use]
    pub fn internal_id(&self, external: &T) -> Option<NodeId> {
        self.to_internal.get(external).copied()
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
        self.to_external.len()
    }

    /// Returns `true` if no id has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_external.is_empty()
    }

    /// Returns every `(internal, external)` pair in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &T)> + '_ {
        self.to_external
            .iter()
            .enumerate()
            .map(|(index, external)| (NodeId::new(index as u32), external))
    }

    /// Registers every id of an external adjacency map and returns it as edge records
    /// over internal ids.
    ///
    /// Keys are registered first, in iteration order, then list entries in order,
    /// so nodes that own a record receive the lowest ids.
    pub fn renumber_adjacency<I, E>(&mut self, adjacency: I) -> Vec<EdgeRecord>
    where
        I: IntoIterator<Item = (T, E)>,
        E: IntoIterator<Item = T>,
    {
        let keyed: Vec<(NodeId, E)> = adjacency
            .into_iter()
            .map(|(node, edges)| (self.external_to_internal(node), edges))
            .collect();

        keyed
            .into_iter()
            .map(|(node, edges)| {
                let edges = edges
                    .into_iter()
                    .map(|edge| self.external_to_internal(edge).as_u32() as i32)
                    .collect();
                EdgeRecord::new(node.as_u32() as i32, edges)
            })
            .collect()
    }
}

impl<T> Renumbering<T> for NodeNumberer<T>
where
    T: Hash + Eq + Clone,
{
    fn internal_id(&self, external: &T) -> Option<NodeId> {
        NodeNumberer::internal_id(self, external)
    }

    fn external_id(&self, internal: NodeId) -> Result<T> {
        self.internal_to_external(internal).cloned()
    }
}
