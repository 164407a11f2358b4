//! Node identifiers and per-node adjacency views.
//!
//! This module provides [`NodeId`], the dense internal identifier used by graph
//! storage, and [`Node`], a borrowed read-only view over one vertex's inbound and
//! outbound neighbor lists.

use std::fmt;

use crate::{graph::GraphDir, Error};

/// A strongly-typed identifier for nodes within a directed graph.
///
/// `NodeId` wraps a non-negative 32-bit index. Input records carry signed ids, and
/// conversion through [`TryFrom<i32>`] is where negative ids are rejected, so every
/// `NodeId` held by a graph is a valid slot index.
///
/// # Examples
///
/// ```rust
/// use densegraph::graph::NodeId;
/// use std::collections::HashMap;
///
/// let a = NodeId::new(1);
/// let b = NodeId::try_from(2).unwrap();
/// assert!(a < b);
/// assert!(NodeId::try_from(-1).is_err());
///
/// let mut data: HashMap<NodeId, i32> = HashMap::new();
/// data.insert(a, 42);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Largest representable id; input ids are signed 32-bit values.
    pub const MAX: NodeId = NodeId(i32::MAX as u32);

    /// Creates a new `NodeId` from a raw index value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use densegraph::graph::NodeId;
    ///
    /// let node = NodeId::new(5);
    /// assert_eq!(node.index(), 5);
    /// ```
    #[must_use]
    #[inline]
    pub const fn new(id: u32) -> Self {
        NodeId(id)
    }

    /// Returns the id as an index usable for per-node slot arrays.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the raw id value.
    #[must_use]
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<u32> for NodeId {
    #[inline]
    fn from(id: u32) -> Self {
        NodeId(id)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.index()
    }
}

impl TryFrom<i32> for NodeId {
    type Error = Error;

    /// Converts a signed input id, rejecting negative values as malformed input.
    fn try_from(id: i32) -> Result<Self, Self::Error> {
        u32::try_from(id)
            .map(NodeId)
            .map_err(|_| malformed_error!("Negative node id {}", id))
    }
}

impl TryFrom<usize> for NodeId {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index > NodeId::MAX.index() {
            return Err(malformed_error!(
                "Node index {} exceeds the supported id range",
                index
            ));
        }
        Ok(NodeId(index as u32))
    }
}

/// A read-only view over a single node's adjacency.
///
/// `Node` borrows from the [`DirectedGraph`](crate::graph::DirectedGraph) that produced
/// it and cannot outlive or mutate it. Neighbor lists never contain duplicates. Lists for
/// a direction the graph does not store are empty.
///
/// The lists are currently kept in ascending order, but callers should treat the order
/// as unspecified and sort when they need a canonical form.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Node<'g> {
    id: NodeId,
    outbound: &'g [NodeId],
    inbound: &'g [NodeId],
}

impl<'g> Node<'g> {
    pub(crate) fn new(id: NodeId, outbound: &'g [NodeId], inbound: &'g [NodeId]) -> Self {
        Node {
            id,
            outbound,
            inbound,
        }
    }

    /// Returns the id of this node.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the ids this node has edges to.
    #[must_use]
    pub fn outbound_nodes(&self) -> &'g [NodeId] {
        self.outbound
    }

    /// Returns the ids that have edges to this node.
    #[must_use]
    pub fn inbound_nodes(&self) -> &'g [NodeId] {
        self.inbound
    }

    /// Number of outbound neighbors.
    #[must_use]
    pub fn outbound_count(&self) -> usize {
        self.outbound.len()
    }

    /// Number of inbound neighbors.
    #[must_use]
    pub fn inbound_count(&self) -> usize {
        self.inbound.len()
    }

    /// Returns the neighbors in the given direction.
    #[must_use]
    pub fn neighbor_ids(&self, dir: GraphDir) -> &'g [NodeId] {
        match dir {
            GraphDir::OutDir => self.outbound,
            GraphDir::InDir => self.inbound,
        }
    }

    /// Number of neighbors in the given direction.
    #[must_use]
    pub fn neighbor_count(&self, dir: GraphDir) -> usize {
        self.neighbor_ids(dir).len()
    }

    /// Returns `true` if `id` is a neighbor of this node in the given direction.
    #[must_use]
    pub fn is_neighbor(&self, dir: GraphDir, id: NodeId) -> bool {
        // Storage keeps every list sorted.
        self.neighbor_ids(dir).binary_search(&id).is_ok()
    }

    /// Returns `true` if this node has an edge to `id`.
    #[must_use]
    pub fn is_outbound_node(&self, id: NodeId) -> bool {
        self.is_neighbor(GraphDir::OutDir, id)
    }

    /// Returns `true` if `id` has an edge to this node.
    #[must_use]
    pub fn is_inbound_node(&self, id: NodeId) -> bool {
        self.is_neighbor(GraphDir::InDir, id)
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id.0)
            .field("out", &self.outbound.iter().map(|n| n.0).collect::<Vec<_>>())
            .field("in", &self.inbound.iter().map(|n| n.0).collect::<Vec<_>>())
            .finish()
    }
}
