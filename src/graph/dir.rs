//! Edge directions and the build-time storage mode.

use strum::{Display, EnumCount, EnumIter, EnumString};

/// A traversal direction relative to a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, EnumCount, Display)]
pub enum GraphDir {
    /// Edges leaving the node.
    OutDir,
    /// Edges arriving at the node.
    InDir,
}

impl GraphDir {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            GraphDir::OutDir => GraphDir::InDir,
            GraphDir::InDir => GraphDir::OutDir,
        }
    }
}

/// Which adjacency directions a graph materializes.
///
/// The mode is chosen once at build time. It decides how the edge lists of the
/// input records are interpreted and which per-node lists get populated; queries
/// on a built graph never branch on it.
///
/// The string form is snake case, so the mode can be carried in configuration:
///
/// ```rust
/// use densegraph::graph::StoredGraphDir;
///
/// let dir: StoredGraphDir = "both_in_out".parse().unwrap();
/// assert_eq!(dir, StoredGraphDir::BothInOut);
/// assert_eq!(StoredGraphDir::OnlyIn.to_string(), "only_in");
/// ```
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, EnumIter, EnumCount, EnumString, Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum StoredGraphDir {
    /// Record lists are outbound edges; inbound lists stay empty.
    OnlyOut,
    /// Record lists are the node's inbound edges; outbound lists stay empty.
    OnlyIn,
    /// Record lists are outbound edges; inbound lists are derived as the transpose.
    #[default]
    BothInOut,
    /// Record lists are symmetric; inbound and outbound lists are identical.
    Mutual,
}

impl StoredGraphDir {
    /// Returns `true` if adjacency in `dir` is materialized under this mode.
    #[must_use]
    pub const fn is_dir_stored(self, dir: GraphDir) -> bool {
        match self {
            StoredGraphDir::OnlyOut => matches!(dir, GraphDir::OutDir),
            StoredGraphDir::OnlyIn => matches!(dir, GraphDir::InDir),
            StoredGraphDir::BothInOut | StoredGraphDir::Mutual => true,
        }
    }

    /// The direction the record edge lists are stored as.
    #[must_use]
    pub const fn record_dir(self) -> GraphDir {
        match self {
            StoredGraphDir::OnlyIn => GraphDir::InDir,
            _ => GraphDir::OutDir,
        }
    }
}
