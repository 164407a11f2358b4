//! Build configuration for graph construction.

/// What to do when more than one record describes the same node id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateRecordPolicy {
    /// The last record in supplier order replaces earlier ones entirely.
    #[default]
    LastWins,
    /// A repeated node id fails the build.
    Reject,
}

/// Configuration for [`GraphBuilder`](crate::graph::GraphBuilder).
///
/// The defaults accept any input that satisfies the record contract: duplicate
/// records resolve last-write-wins, self-loops are stored as given, and symmetric
/// input is verified when building a [`Mutual`](crate::graph::StoredGraphDir::Mutual) graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Policy for repeated node ids across records.
    pub duplicate_records: DuplicateRecordPolicy,

    /// Store self-loops instead of rejecting them as malformed.
    pub allow_self_loops: bool,

    /// Check that every edge of a mutual graph has its reverse edge.
    /// Ignored for the other storage modes.
    pub verify_mutual: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            duplicate_records: DuplicateRecordPolicy::LastWins,
            allow_self_loops: true,
            verify_mutual: true,
        }
    }
}

impl GraphConfig {
    /// Rejects every input the engine can flag: duplicates, self-loops and
    /// asymmetric mutual input.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            duplicate_records: DuplicateRecordPolicy::Reject,
            allow_self_loops: false,
            verify_mutual: true,
        }
    }

    /// Accepts input as given and skips the mutual symmetry pass.
    ///
    /// **Warning**: a mutual graph built from asymmetric input reports the
    /// supplied lists as both its inbound and outbound adjacency.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            duplicate_records: DuplicateRecordPolicy::LastWins,
            allow_self_loops: true,
            verify_mutual: false,
        }
    }
}
