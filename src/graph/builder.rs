//! Bulk construction of [`DirectedGraph`] from edge records.
//!
//! The builder pulls records from a factory rather than a single iterator. Each
//! pass asks the factory for a fresh traversal:
//!
//! 1. **Sizing** - validate every record and find the largest id that occurs,
//!    which fixes the slot range `[0, max_id]`. Declared bounds are only checked,
//!    so an overstated bound costs nothing.
//! 2. **Population** - store each record's list in the direction the
//!    [`StoredGraphDir`] assigns to it, deduplicated, and mark every id that occurs
//!    as present.
//! 3. **Derivation** - for [`StoredGraphDir::BothInOut`] the inbound lists are the
//!    transpose of the outbound lists. [`StoredGraphDir::Mutual`] instead checks the
//!    input is symmetric and shares one list for both directions.
//!
//! Any violation aborts the build; no graph is returned.
//!
//! # Examples
//!
//! ```rust
//! use densegraph::graph::{EdgeRecord, GraphBuilder, NodeId, StoredGraphDir};
//!
//! let records = vec![
//!     EdgeRecord::new(1, vec![2, 3, 4]),
//!     EdgeRecord::new(3, vec![4]),
//! ];
//!
//! let graph = GraphBuilder::new(StoredGraphDir::BothInOut).build(|| records.iter())?;
//!
//! let four = graph.get_node_by_id(NodeId::new(4)).unwrap();
//! assert_eq!(four.inbound_nodes(), &[NodeId::new(1), NodeId::new(3)]);
//! assert_eq!(graph.edge_count(), 4);
//! # Ok::<(), densegraph::Error>(())
//! ```

use std::{borrow::Borrow, sync::Arc};

use tracing::{debug, info, warn};

use crate::{
    graph::{
        adjacency::Adjacency, DirectedGraph, DuplicateRecordPolicy, EdgeRecord, GraphConfig,
        NodeId, StoredGraphDir,
    },
    utils::BitSet,
    Result,
};

/// Builds immutable [`DirectedGraph`] values from a re-invocable record source.
///
/// The builder holds only the storage mode and configuration; it can be reused
/// for any number of builds and keeps no state from one build to the next.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphBuilder {
    dir: StoredGraphDir,
    config: GraphConfig,
}

/// Result of the population pass.
struct Populated {
    lists: Vec<Vec<NodeId>>,
    present: BitSet,
}

impl GraphBuilder {
    /// Creates a builder for the given storage mode with the default configuration.
    #[must_use]
    pub fn new(dir: StoredGraphDir) -> Self {
        GraphBuilder {
            dir,
            config: GraphConfig::default(),
        }
    }

    /// Replaces the build configuration.
    #[must_use]
    pub fn with_config(mut self, config: GraphConfig) -> Self {
        self.config = config;
        self
    }

    /// The storage mode graphs from this builder use.
    #[must_use]
    pub fn dir(&self) -> StoredGraphDir {
        self.dir
    }

    /// The configuration graphs from this builder are validated against.
    #[must_use]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Builds a graph from a factory of record sequences.
    ///
    /// `factory` is called once per pass and must yield the same records each time.
    ///
    /// # Arguments
    ///
    /// * `factory` - Returns a fresh traversal of the input records
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Malformed`] if any record violates the record contract,
    /// if a duplicate record is rejected by the configuration, if a rejected self-loop
    /// or asymmetric mutual edge is found, or if a later pass yields ids the sizing
    /// pass never saw.
    pub fn build<F, I, R>(&self, mut factory: F) -> Result<DirectedGraph>
    where
        F: FnMut() -> I,
        I: IntoIterator<Item = R>,
        R: Borrow<EdgeRecord>,
    {
        self.try_build(|| factory().into_iter().map(Ok))
    }

    /// Builds a graph from a factory of fallible record sequences.
    ///
    /// This is the entry point for suppliers that do their own I/O: the first
    /// `Err` a traversal yields aborts the build and is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns the supplier's error, or any error described for [`build`](Self::build).
    pub fn try_build<F, I, R>(&self, mut factory: F) -> Result<DirectedGraph>
    where
        F: FnMut() -> I,
        I: IntoIterator<Item = Result<R>>,
        R: Borrow<EdgeRecord>,
    {
        let Some(max_id) = self.sizing_pass(factory())? else {
            debug!(dir = %self.dir, "no records supplied, graph is empty");
            return Ok(DirectedGraph::empty(self.dir));
        };

        let slots = max_id.index() + 1;
        let Populated { lists, present } = self.population_pass(factory(), max_id, slots)?;
        let primary = Arc::new(Adjacency::from_lists(lists));
        let empty = Arc::new(Adjacency::default());

        let (outbound, inbound) = match self.dir {
            StoredGraphDir::OnlyOut => (primary, empty),
            StoredGraphDir::OnlyIn => (empty, primary),
            StoredGraphDir::BothInOut => {
                let inbound = Arc::new(primary.transpose(slots));
                debug!(edges = inbound.edge_count(), "derived inbound adjacency");
                (primary, inbound)
            }
            StoredGraphDir::Mutual => {
                if self.config.verify_mutual {
                    verify_symmetric(&primary, &present)?;
                }
                (primary.clone(), primary)
            }
        };

        let graph = DirectedGraph::from_parts(self.dir, present, outbound, inbound);
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            dir = %self.dir,
            "graph built"
        );
        Ok(graph)
    }

    /// Validates every record and returns the largest id any record mentions.
    fn sizing_pass<I, R>(&self, records: I) -> Result<Option<NodeId>>
    where
        I: IntoIterator<Item = Result<R>>,
        R: Borrow<EdgeRecord>,
    {
        let mut max_id: Option<NodeId> = None;
        let mut count = 0usize;

        for record in records {
            let record = record?;
            let (_, largest) = record.borrow().validate()?;
            max_id = max_id.max(Some(largest));
            count += 1;
        }

        debug!(records = count, max_id = ?max_id, "sizing pass complete");
        Ok(max_id)
    }

    /// Stores every record's list in its slot and marks the ids that occur.
    fn population_pass<I, R>(&self, records: I, max_id: NodeId, slots: usize) -> Result<Populated>
    where
        I: IntoIterator<Item = Result<R>>,
        R: Borrow<EdgeRecord>,
    {
        let mut lists: Vec<Vec<NodeId>> = vec![Vec::new(); slots];
        let mut present = BitSet::new(slots);
        let mut seen = BitSet::new(slots);
        let mut count = 0usize;

        for record in records {
            let record = record?;
            let record = record.borrow();
            let (node, largest) = record.validate()?;
            if largest > max_id {
                return Err(malformed_error!(
                    "Record for node {} mentions id {}, above the {} found while sizing; the supplier is not restartable",
                    record.node_id,
                    largest.as_u32(),
                    max_id.as_u32()
                ));
            }

            if !seen.insert(node.index()) {
                match self.config.duplicate_records {
                    DuplicateRecordPolicy::Reject => {
                        return Err(malformed_error!(
                            "Node id {} appears in more than one record",
                            record.node_id
                        ));
                    }
                    DuplicateRecordPolicy::LastWins => {
                        warn!(node = record.node_id, "duplicate record replaces earlier one");
                    }
                }
            }

            // Ids are validated non-negative and within `max_id`.
            let mut edges: Vec<NodeId> = record
                .out_edges
                .iter()
                .map(|&id| NodeId::new(id as u32))
                .collect();
            if !self.config.allow_self_loops && edges.contains(&node) {
                return Err(malformed_error!(
                    "Node id {} lists itself as a neighbor",
                    record.node_id
                ));
            }
            edges.sort_unstable();
            edges.dedup();

            present.insert(node.index());
            for edge in &edges {
                present.insert(edge.index());
            }
            lists[node.index()] = edges;
            count += 1;
        }

        debug!(records = count, nodes = present.count(), "population pass complete");
        Ok(Populated { lists, present })
    }
}

/// Fails on the first edge whose reverse edge is missing.
fn verify_symmetric(adjacency: &Adjacency, present: &BitSet) -> Result<()> {
    for source in present.iter() {
        for target in adjacency.neighbors(source) {
            let back = adjacency.neighbors(target.index());
            if back.binary_search(&NodeId::new(source as u32)).is_err() {
                return Err(malformed_error!(
                    "Mutual graph edge {} -> {} has no reverse edge",
                    source,
                    target.as_u32()
                ));
            }
        }
    }
    debug!(edges = adjacency.edge_count(), "mutual symmetry verified");
    Ok(())
}
