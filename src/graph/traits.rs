//! Trait definitions for graph abstractions.
//!
//! Graph algorithms (traversals, ranking, sampling) live outside this crate. They
//! program against these traits rather than against [`DirectedGraph`](crate::graph::DirectedGraph)
//! directly, so they keep working over wrappers and alternative storage.
//!
//! - [`GraphBase`] - Node count and node iteration
//! - [`Successors`] - Forward edge traversal (outgoing edges)
//! - [`Predecessors`] - Backward edge traversal (incoming edges)
//!
//! All adjacency queries return iterators rather than collections.

use crate::graph::NodeId;

/// Base trait providing core graph properties.
///
/// # Examples
///
/// ```rust
/// use densegraph::graph::{DirectedGraph, EdgeRecord, GraphBase, StoredGraphDir};
///
/// fn isolated_count<G: GraphBase>(graph: &G) -> usize {
///     graph.node_ids().count()
/// }
///
/// let records = vec![EdgeRecord::new(0, vec![3])];
/// let graph = DirectedGraph::from_records(&records, StoredGraphDir::OnlyOut)?;
/// assert_eq!(isolated_count(&graph), 2);
/// # Ok::<(), densegraph::Error>(())
/// ```
pub trait GraphBase {
    /// Returns the number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all node identifiers in the graph.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support forward edge traversal.
///
/// For a directed edge `(u, v)`, node `v` is a successor of `u`. Graphs that do
/// not store outbound adjacency yield no successors.
pub trait Successors: GraphBase {
    /// Returns an iterator over the successor nodes of the given node.
    ///
    /// Unknown nodes have no successors.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support backward edge traversal.
///
/// For a directed edge `(u, v)`, node `u` is a predecessor of `v`. Graphs that do
/// not store inbound adjacency yield no predecessors.
pub trait Predecessors: GraphBase {
    /// Returns an iterator over the predecessor nodes of the given node.
    ///
    /// Unknown nodes have no predecessors.
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}
