//! The immutable, queryable directed graph.
//!
//! [`DirectedGraph`] owns every node's adjacency. It is produced by
//! [`GraphBuilder`](crate::graph::GraphBuilder) and offers read-only access only,
//! so a built graph can be shared between any number of threads without locking.

use std::sync::Arc;

use rayon::prelude::*;

use crate::{
    graph::{
        adjacency::Adjacency,
        traits::{GraphBase, Predecessors, Successors},
        EdgeRecord, GraphBuilder, GraphDir, Node, NodeId, StoredGraphDir,
    },
    utils::{BitSet, BitSetIter},
    Result,
};

/// A build-once, read-many directed graph over dense integer node ids.
///
/// Node ids come from the input records and need not be contiguous: storage
/// reserves a slot for every id in `[0, max_node_id]`, and only ids that actually
/// occurred are nodes. Lookups of absent ids return `None`.
///
/// Which neighbor lists are populated was fixed by the [`StoredGraphDir`] at
/// build time; lists of an unstored direction are empty.
///
/// # Thread Safety
///
/// `DirectedGraph` is [`Send`] and [`Sync`]. It has no interior mutability, and
/// [`par_nodes`](Self::par_nodes) iterates it from the rayon thread pool.
///
/// # Examples
///
/// ```rust
/// use densegraph::graph::{DirectedGraph, EdgeRecord, NodeId, StoredGraphDir};
///
/// let records = vec![EdgeRecord::new(1, vec![2]), EdgeRecord::new(2, vec![1, 3])];
/// let graph = DirectedGraph::from_records(&records, StoredGraphDir::BothInOut)?;
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// assert!(graph.exists_node_id(NodeId::new(3)));
/// assert!(graph.get_node_by_id(NodeId::new(0)).is_none());
/// # Ok::<(), densegraph::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DirectedGraph {
    dir: StoredGraphDir,
    /// Slots whose id occurred in the input
    present: BitSet,
    outbound: Arc<Adjacency>,
    /// Shares `outbound` for mutual graphs
    inbound: Arc<Adjacency>,
    node_count: usize,
    edge_count: u64,
    max_node_id: Option<NodeId>,
}

impl DirectedGraph {
    /// Creates a graph with no nodes.
    #[must_use]
    pub fn empty(dir: StoredGraphDir) -> Self {
        DirectedGraph {
            dir,
            present: BitSet::default(),
            outbound: Arc::default(),
            inbound: Arc::default(),
            node_count: 0,
            edge_count: 0,
            max_node_id: None,
        }
    }

    pub(crate) fn from_parts(
        dir: StoredGraphDir,
        present: BitSet,
        outbound: Arc<Adjacency>,
        inbound: Arc<Adjacency>,
    ) -> Self {
        let edge_count = match dir.record_dir() {
            GraphDir::OutDir => outbound.edge_count(),
            GraphDir::InDir => inbound.edge_count(),
        };
        let max_node_id = present.iter().last().map(|slot| NodeId::new(slot as u32));

        DirectedGraph {
            dir,
            node_count: present.count(),
            present,
            outbound,
            inbound,
            edge_count,
            max_node_id,
        }
    }

    /// Builds a graph from an in-memory slice of records with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Malformed`] if any record violates the record contract.
    pub fn from_records(records: &[EdgeRecord], dir: StoredGraphDir) -> Result<Self> {
        GraphBuilder::new(dir).build(|| records.iter())
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the number of edges in the graph.
    ///
    /// Each supplied edge counts once: for [`StoredGraphDir::OnlyIn`] this is the
    /// total of the inbound lists, otherwise the total of the outbound lists.
    #[must_use]
    pub fn edge_count(&self) -> u64 {
        self.edge_count
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// The storage mode this graph was built with.
    #[must_use]
    pub fn stored_graph_dir(&self) -> StoredGraphDir {
        self.dir
    }

    /// Returns `true` if neighbor lists in `dir` are materialized.
    #[must_use]
    pub fn is_dir_stored(&self, dir: GraphDir) -> bool {
        self.dir.is_dir_stored(dir)
    }

    /// The largest node id present, or `None` for an empty graph.
    #[must_use]
    pub fn max_node_id(&self) -> Option<NodeId> {
        self.max_node_id
    }

    /// Returns `true` if `id` occurred anywhere in the input records.
    #[must_use]
    pub fn exists_node_id(&self, id: NodeId) -> bool {
        self.present.contains(id.index())
    }

    /// Returns a view of the node with the given id, or `None` if it is absent.
    #[must_use]
    pub fn get_node_by_id(&self, id: NodeId) -> Option<Node<'_>> {
        self.exists_node_id(id).then(|| self.node_at(id))
    }

    /// Returns an iterator over all nodes, in ascending id order.
    ///
    /// Every call starts a new traversal; the order is the same each time.
    #[must_use]
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes {
            graph: self,
            slots: self.present.iter(),
        }
    }

    /// Returns an iterator over all node ids, in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.present.iter().map(|slot| NodeId::new(slot as u32))
    }

    /// Returns a parallel iterator over all nodes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use densegraph::graph::{DirectedGraph, EdgeRecord, StoredGraphDir};
    /// use rayon::prelude::*;
    ///
    /// let records = vec![EdgeRecord::new(0, vec![1, 2]), EdgeRecord::new(1, vec![2])];
    /// let graph = DirectedGraph::from_records(&records, StoredGraphDir::OnlyOut)?;
    ///
    /// let edges: usize = graph.par_nodes().map(|n| n.outbound_count()).sum();
    /// assert_eq!(edges as u64, graph.edge_count());
    /// # Ok::<(), densegraph::Error>(())
    /// ```
    pub fn par_nodes(&self) -> impl ParallelIterator<Item = Node<'_>> + '_ {
        (0..self.present.len())
            .into_par_iter()
            .filter(move |&slot| self.present.contains(slot))
            .map(move |slot| self.node_at(NodeId::new(slot as u32)))
    }

    fn node_at(&self, id: NodeId) -> Node<'_> {
        Node::new(
            id,
            self.outbound.neighbors(id.index()),
            self.inbound.neighbors(id.index()),
        )
    }
}

/// Iterator over the nodes of a [`DirectedGraph`].
#[derive(Clone)]
pub struct Nodes<'g> {
    graph: &'g DirectedGraph,
    slots: BitSetIter<'g>,
}

impl<'g> Iterator for Nodes<'g> {
    type Item = Node<'g>;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.slots.next()?;
        Some(self.graph.node_at(NodeId::new(slot as u32)))
    }
}

impl<'g> IntoIterator for &'g DirectedGraph {
    type Item = Node<'g>;
    type IntoIter = Nodes<'g>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes()
    }
}

impl GraphBase for DirectedGraph {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        DirectedGraph::node_ids(self)
    }
}

impl Successors for DirectedGraph {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.outbound.neighbors(node.index()).iter().copied()
    }
}

impl Predecessors for DirectedGraph {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.inbound.neighbors(node.index()).iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, thread};

    use super::*;
    use crate::test::{complete_graph_records, sample_records};

    fn ids(raw: &[u32]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId::new).collect()
    }

    fn build(dir: StoredGraphDir) -> DirectedGraph {
        DirectedGraph::from_records(&sample_records(), dir).unwrap()
    }

    #[test]
    fn test_empty_graph() {
        let graph = DirectedGraph::empty(StoredGraphDir::OnlyOut);
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.nodes().count(), 0);
        assert!(!graph.exists_node_id(NodeId::new(0)));
        assert!(graph.get_node_by_id(NodeId::new(0)).is_none());
    }

    #[test]
    fn test_sparse_universe() {
        let graph = build(StoredGraphDir::BothInOut);
        let present: Vec<NodeId> = graph.node_ids().collect();
        assert_eq!(present, ids(&[1, 2, 3, 4, 5, 10]));

        for absent in [0, 6, 7, 8, 9, 11, 1_000] {
            assert!(!graph.exists_node_id(NodeId::new(absent)));
            assert!(graph.get_node_by_id(NodeId::new(absent)).is_none());
        }
        assert_eq!(graph.max_node_id(), Some(NodeId::new(10)));
    }

    #[test]
    fn test_only_out() {
        let graph = build(StoredGraphDir::OnlyOut);
        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.edge_count(), 6);
        assert!(graph.is_dir_stored(GraphDir::OutDir));
        assert!(!graph.is_dir_stored(GraphDir::InDir));

        let one = graph.get_node_by_id(NodeId::new(1)).unwrap();
        assert_eq!(one.outbound_nodes(), ids(&[2, 3, 4]).as_slice());
        for node in &graph {
            assert!(node.inbound_nodes().is_empty());
        }
    }

    #[test]
    fn test_only_in() {
        let graph = build(StoredGraphDir::OnlyIn);
        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.edge_count(), 6);

        let one = graph.get_node_by_id(NodeId::new(1)).unwrap();
        assert_eq!(one.inbound_nodes(), ids(&[2, 3, 4]).as_slice());
        let five = graph.get_node_by_id(NodeId::new(5)).unwrap();
        assert_eq!(five.inbound_nodes(), ids(&[1, 10]).as_slice());
        for node in &graph {
            assert!(node.outbound_nodes().is_empty());
        }
    }

    #[test]
    fn test_both_in_out() {
        let graph = build(StoredGraphDir::BothInOut);

        let four = graph.get_node_by_id(NodeId::new(4)).unwrap();
        assert_eq!(four.inbound_nodes(), ids(&[1, 3]).as_slice());
        assert!(four.outbound_nodes().is_empty());

        let one = graph.get_node_by_id(NodeId::new(1)).unwrap();
        assert_eq!(one.inbound_nodes(), ids(&[2, 5]).as_slice());
        assert_eq!(one.outbound_nodes(), ids(&[2, 3, 4]).as_slice());
    }

    #[test]
    fn test_iteration_is_stable() {
        let graph = build(StoredGraphDir::BothInOut);
        let first: Vec<Node<'_>> = graph.nodes().collect();
        let second: Vec<Node<'_>> = graph.into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), graph.node_count());
    }

    #[test]
    fn test_par_nodes_matches_nodes() {
        let graph =
            DirectedGraph::from_records(&complete_graph_records(40), StoredGraphDir::BothInOut)
                .unwrap();
        let sequential: HashSet<NodeId> = graph.nodes().map(|n| n.id()).collect();
        let parallel: HashSet<NodeId> = graph.par_nodes().map(|n| n.id()).collect();
        assert_eq!(sequential, parallel);

        let total: usize = graph.par_nodes().map(|n| n.inbound_count()).sum();
        assert_eq!(total as u64, graph.edge_count());
    }

    #[test]
    fn test_shared_readers() {
        let graph = build(StoredGraphDir::BothInOut);
        thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    let node = graph.get_node_by_id(NodeId::new(1)).unwrap();
                    assert_eq!(node.outbound_count(), 3);
                    assert_eq!(graph.nodes().count(), 6);
                });
            }
        });
    }

    #[test]
    fn test_traits() {
        let graph = build(StoredGraphDir::BothInOut);
        assert_eq!(GraphBase::node_count(&graph), 6);
        assert_eq!(GraphBase::node_ids(&graph).count(), 6);

        let succ: Vec<NodeId> = graph.successors(NodeId::new(5)).collect();
        assert_eq!(succ, ids(&[1, 10]));
        let pred: Vec<NodeId> = graph.predecessors(NodeId::new(1)).collect();
        assert_eq!(pred, ids(&[2, 5]));
        assert_eq!(graph.successors(NodeId::new(999)).count(), 0);
    }

    #[test]
    fn test_complete_graph() {
        let n = 12u32;
        let graph =
            DirectedGraph::from_records(&complete_graph_records(n), StoredGraphDir::BothInOut)
                .unwrap();
        assert_eq!(graph.node_count(), n as usize);
        assert_eq!(graph.edge_count(), u64::from(n * (n - 1)));

        for node in graph.nodes() {
            let expected: Vec<NodeId> = (0..n)
                .filter(|&i| i != node.id().as_u32())
                .map(NodeId::new)
                .collect();
            assert_eq!(node.outbound_nodes(), expected.as_slice());
            assert_eq!(node.inbound_nodes(), expected.as_slice());
        }
    }
}
