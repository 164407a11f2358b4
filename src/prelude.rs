//! # densegraph Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the densegraph library. Import this module to get quick access to everything
//! needed to build, query and renumber graphs.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all densegraph operations
pub use crate::Error;

/// The result type used throughout densegraph
pub use crate::Result;

// ================================================================================================
// Construction
// ================================================================================================

/// Input records, the builder and its configuration
pub use crate::graph::{DuplicateRecordPolicy, EdgeRecord, GraphBuilder, GraphConfig};

// ================================================================================================
// Queries
// ================================================================================================

/// The graph, its node views and identifiers
pub use crate::graph::{DirectedGraph, GraphDir, Node, NodeId, StoredGraphDir};

/// Traits for code generic over graph storage
pub use crate::graph::{GraphBase, Predecessors, Successors};

// ================================================================================================
// Renumbering
// ================================================================================================

/// External/internal id mapping
pub use crate::numbering::{NodeNumberer, Renumbering, SharedNodeNumberer};
