//! Immutable directed graphs built in bulk from edge records.
//!
//! # Architecture
//!
//! - **Input**: [`EdgeRecord`] values, each one node with its edge list and an upper
//!   bound on the ids it mentions, pulled from a re-invocable factory
//! - **Construction**: [`GraphBuilder`] validates and sizes the id universe, then
//!   populates the directions selected by [`StoredGraphDir`]
//! - **Queries**: [`DirectedGraph`] answers node lookups, existence checks and counts,
//!   and hands out borrowed [`Node`] views
//! - **Traits**: [`GraphBase`], [`Successors`] and [`Predecessors`] for code that is
//!   generic over graph storage
//! - **Verification**: [`verify`] compares a graph against a reference adjacency map
//!
//! # Design Principles
//!
//! ## Immutable After Construction
//!
//! A graph is built once and never modified. Every query is a pure read, so a
//! published graph can be shared across threads without synchronization.
//!
//! ## Direction Chosen Once
//!
//! The storage mode decides at build time which neighbor lists get populated.
//! Queries do not consult it; a direction that was not stored simply has empty lists.
//!
//! ## Sparse Id Universes
//!
//! Node ids come from the input and need not be contiguous. Storage is sized by the
//! largest id, and a presence mask answers whether a given id is a node.
//!
//! # Usage Examples
//!
//! ```rust
//! use densegraph::graph::{DirectedGraph, EdgeRecord, NodeId, StoredGraphDir};
//!
//! let records = vec![
//!     EdgeRecord::new(1, vec![2, 3, 4]),
//!     EdgeRecord::new(2, vec![1]),
//!     EdgeRecord::new(3, vec![4]),
//!     EdgeRecord::new(5, vec![1, 10]),
//! ];
//! let graph = DirectedGraph::from_records(&records, StoredGraphDir::BothInOut)?;
//!
//! assert_eq!(graph.node_count(), 6);
//! assert_eq!(graph.edge_count(), 6);
//!
//! let one = graph.get_node_by_id(NodeId::new(1)).unwrap();
//! assert_eq!(one.inbound_nodes(), &[NodeId::new(2), NodeId::new(5)]);
//! # Ok::<(), densegraph::Error>(())
//! ```

mod adjacency;
mod builder;
mod config;
mod dir;
mod directed;
mod node;
mod record;
mod traits;

pub mod verify;

pub use builder::GraphBuilder;
pub use config::{DuplicateRecordPolicy, GraphConfig};
pub use dir::{GraphDir, StoredGraphDir};
pub use directed::{DirectedGraph, Nodes};
pub use node::{Node, NodeId};
pub use record::EdgeRecord;
pub use traits::{GraphBase, Predecessors, Successors};
