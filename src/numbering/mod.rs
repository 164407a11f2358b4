//! Mapping between caller-facing node identifiers and dense internal ids.
//!
//! Graph storage works on dense, zero-based [`NodeId`]s. Callers usually hold
//! identifiers of some other shape: sparse integers, user names, hashes. A numberer
//! assigns each external identifier the next free internal id the first time it is
//! seen and remembers the assignment in both directions.
//!
//! - [`NodeNumberer`] - single-owner numberer, allocation through `&mut self`
//! - [`SharedNodeNumberer`] - thread-safe numberer, allocation through `&self`
//! - [`Renumbering`] - read access shared by both, used by
//!   [`verify::check_renumbered_equivalent`](crate::graph::verify::check_renumbered_equivalent)
//!
//! Assignments are permanent: a numberer only grows, and its two directions are
//! always exact inverses.
//!
//! # Examples
//!
//! ```rust
//! use densegraph::{graph::{DirectedGraph, NodeId, StoredGraphDir}, numbering::NodeNumberer};
//! use std::collections::BTreeMap;
//!
//! let follows = BTreeMap::from([("alice", vec!["bob"]), ("bob", vec!["alice", "carol"])]);
//!
//! let mut numberer = NodeNumberer::new();
//! let records = numberer.renumber_adjacency(follows);
//! let graph = DirectedGraph::from_records(&records, StoredGraphDir::BothInOut)?;
//!
//! let carol = numberer.internal_id(&"carol").unwrap();
//! let node = graph.get_node_by_id(carol).unwrap();
//! assert_eq!(numberer.internal_to_external(node.inbound_nodes()[0])?, &"bob");
//! # Ok::<(), densegraph::Error>(())
//! ```

mod sequential;
mod shared;

pub use sequential::NodeNumberer;
pub use shared::SharedNodeNumberer;

use crate::{graph::NodeId, Result};

/// Read access to an external/internal id mapping.
pub trait Renumbering<T> {
    /// Returns the internal id assigned to `external`, without allocating.
    fn internal_id(&self, external: &T) -> Option<NodeId>;

    /// Returns the external id that `internal` was assigned to.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownInternalId`] if `internal` was never allocated.
    fn external_id(&self, internal: NodeId) -> Result<T>;
}

/// Converts an allocation index into an id, enforcing the id range.
fn allocated_id(index: usize) -> NodeId {
    assert!(
        index <= NodeId::MAX.index(),
        "numberer exhausted the internal id range"
    );
    NodeId::new(index as u32)
}
