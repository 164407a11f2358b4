// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # densegraph
//!
//! An immutable, direction-configurable directed graph engine over dense integer
//! node ids, built in bulk from a stream of edge records, plus a bidirectional
//! renumbering layer for callers whose node identifiers are not dense integers.
//!
//! ## Features
//!
//! - **Bulk construction** - Build from a re-invocable supplier of
//!   `(node, edges, max id)` records in a sizing and a population pass
//! - **Direction modes** - Store outbound edges, inbound edges, both, or mutual edges
//! - **Sparse ids** - Input ids need not be contiguous; existence queries stay exact
//! - **Free sharing** - Built graphs are immutable and `Sync`; readers never lock
//! - **Renumbering** - Map any hashable identifier to dense ids and back, from one
//!   thread or many
//!
//! ## Quick Start
//!
//! ```rust
//! use densegraph::prelude::*;
//!
//! let records = vec![
//!     EdgeRecord::new(1, vec![2, 3, 4]),
//!     EdgeRecord::new(2, vec![1]),
//!     EdgeRecord::new(3, vec![4]),
//!     EdgeRecord::new(5, vec![1, 10]),
//! ];
//!
//! let graph = GraphBuilder::new(StoredGraphDir::BothInOut).build(|| records.iter())?;
//!
//! assert_eq!(graph.node_count(), 6);
//! assert_eq!(graph.edge_count(), 6);
//!
//! let four = graph.get_node_by_id(NodeId::new(4)).unwrap();
//! assert_eq!(four.inbound_nodes(), &[NodeId::new(1), NodeId::new(3)]);
//! assert!(four.outbound_nodes().is_empty());
//! # Ok::<(), densegraph::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`graph`] - Edge records, the builder, the graph and its node views
//! - [`numbering`] - External/internal id mapping
//! - [`utils`] - Supporting data structures
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! Construction either succeeds with a graph satisfying every invariant, or fails
//! with an [`Error`] and returns nothing:
//!
//! ```rust
//! use densegraph::{graph::{DirectedGraph, EdgeRecord, StoredGraphDir}, Error};
//!
//! // Node 1 claims no id above 3, then lists 7.
//! let records = vec![EdgeRecord::from_raw(1, vec![7], 3)];
//!
//! match DirectedGraph::from_records(&records, StoredGraphDir::OnlyOut) {
//!     Ok(_) => unreachable!(),
//!     Err(Error::Malformed { message, .. }) => println!("Malformed: {}", message),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
//!
//! ## Logging
//!
//! Construction reports its passes through [`tracing`] at `debug` level and a
//! summary of each built graph at `info` level. The library installs no subscriber.
#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use densegraph::prelude::*;
///
/// let mut numberer = NodeNumberer::new();
/// let records = numberer.renumber_adjacency([("a", vec!["b"])]);
/// let graph = DirectedGraph::from_records(&records, StoredGraphDir::OnlyOut)?;
/// assert_eq!(graph.node_count(), 2);
/// # Ok::<(), densegraph::Error>(())
/// ```
pub mod prelude;

/// Directed graph construction and queries.
///
/// # Key Types
///
/// - [`graph::EdgeRecord`] - One node's adjacency as supplied by the caller
/// - [`graph::GraphBuilder`] - Turns a record supplier into a graph
/// - [`graph::DirectedGraph`] - The immutable, queryable graph
/// - [`graph::Node`] - Borrowed view of one node's neighbors
/// - [`graph::StoredGraphDir`] - Which directions a graph stores
pub mod graph;

/// External/internal node id mapping.
///
/// # Key Types
///
/// - [`numbering::NodeNumberer`] - Single-owner numberer
/// - [`numbering::SharedNodeNumberer`] - Numberer for concurrent allocation
pub mod numbering;

/// Supporting data structures.
pub mod utils;

/// `densegraph` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `densegraph` Error type
///
/// The main error type for all operations in this crate.
pub use error::Error;
