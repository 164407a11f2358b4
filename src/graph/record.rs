//! The input record consumed by [`GraphBuilder`](crate::graph::GraphBuilder).

use crate::{graph::NodeId, Result};

/// One node's adjacency as supplied to the builder.
///
/// `max_id_referenced` lets the builder size its id universe without scanning
/// every edge list. It must be at least as large as `node_id` and every entry of
/// `out_edges`; records that understate it are rejected as malformed.
///
/// The fields are signed because they mirror the external record contract.
/// Negative values are representable here and rejected during construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EdgeRecord {
    /// The node this record describes.
    pub node_id: i32,
    /// The node's edge list. Interpreted as inbound edges under
    /// [`StoredGraphDir::OnlyIn`](crate::graph::StoredGraphDir::OnlyIn).
    pub out_edges: Vec<i32>,
    /// Upper bound on every id appearing in this record.
    pub max_id_referenced: i32,
}

impl EdgeRecord {
    /// Creates a record, deriving `max_id_referenced` from its contents.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use densegraph::graph::EdgeRecord;
    ///
    /// let record = EdgeRecord::new(5, vec![1, 10]);
    /// assert_eq!(record.max_id_referenced, 10);
    /// ```
    #[must_use]
    pub fn new(node_id: i32, out_edges: Vec<i32>) -> Self {
        let max_id_referenced = out_edges.iter().copied().fold(node_id, i32::max);
        EdgeRecord {
            node_id,
            out_edges,
            max_id_referenced,
        }
    }

    /// Creates a record with an explicit `max_id_referenced`, taken as given.
    #[must_use]
    pub fn from_raw(node_id: i32, out_edges: Vec<i32>, max_id_referenced: i32) -> Self {
        EdgeRecord {
            node_id,
            out_edges,
            max_id_referenced,
        }
    }

    /// Converts an adjacency map into records, one per entry, in iteration order.
    ///
    /// ```rust
    /// use densegraph::graph::EdgeRecord;
    /// use std::collections::BTreeMap;
    ///
    /// let adjacency = BTreeMap::from([(1, vec![2, 3]), (2, vec![1])]);
    /// let records = EdgeRecord::from_adjacency(adjacency);
    /// assert_eq!(records[0], EdgeRecord::new(1, vec![2, 3]));
    /// ```
    pub fn from_adjacency<I, E>(adjacency: I) -> Vec<EdgeRecord>
    where
        I: IntoIterator<Item = (i32, E)>,
        E: IntoIterator<Item = i32>,
    {
        adjacency
            .into_iter()
            .map(|(node, edges)| EdgeRecord::new(node, edges.into_iter().collect()))
            .collect()
    }

    /// Checks the record contract and returns the node id with the largest id the
    /// record actually mentions.
    ///
    /// The declared bound only has to be an upper bound, so callers size storage
    /// from the returned id rather than from `max_id_referenced`.
    pub(crate) fn validate(&self) -> Result<(NodeId, NodeId)> {
        let node = NodeId::try_from(self.node_id)?;
        let declared = NodeId::try_from(self.max_id_referenced).map_err(|_| {
            malformed_error!(
                "Record for node {} declares a negative maximum id {}",
                self.node_id,
                self.max_id_referenced
            )
        })?;

        if node > declared {
            return Err(malformed_error!(
                "Node id {} exceeds its declared maximum id {}",
                self.node_id,
                self.max_id_referenced
            ));
        }

        let mut largest = node;
        for &edge in &self.out_edges {
            let target = NodeId::try_from(edge).map_err(|_| {
                malformed_error!("Record for node {} lists negative id {}", self.node_id, edge)
            })?;
            if target > declared {
                return Err(malformed_error!(
                    "Record for node {} lists id {} above its declared maximum id {}",
                    self.node_id,
                    edge,
                    self.max_id_referenced
                ));
            }
            largest = largest.max(target);
        }

        Ok((node, largest))
    }
}

impl From<(i32, Vec<i32>)> for EdgeRecord {
    fn from((node_id, out_edges): (i32, Vec<i32>)) -> Self {
        EdgeRecord::new(node_id, out_edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_new_derives_max() {
        assert_eq!(EdgeRecord::new(1, vec![2, 3, 4]).max_id_referenced, 4);
        assert_eq!(EdgeRecord::new(7, vec![2, 3]).max_id_referenced, 7);
        assert_eq!(EdgeRecord::new(3, vec![]).max_id_referenced, 3);
    }

    #[test]
    fn test_from_tuple() {
        let record: EdgeRecord = (5, vec![1, 10]).into();
        assert_eq!(record, EdgeRecord::from_raw(5, vec![1, 10], 10));
    }

    #[test]
    fn test_validate_ok() {
        let (node, max) = EdgeRecord::from_raw(2, vec![1, 3], 8).validate().unwrap();
        assert_eq!(node, NodeId::new(2));
        assert_eq!(max, NodeId::new(3));
    }

    #[test]
    fn test_validate_ignores_overstated_max() {
        let (node, max) = EdgeRecord::from_raw(0, vec![1], i32::MAX).validate().unwrap();
        assert_eq!(node, NodeId::new(0));
        assert_eq!(max, NodeId::new(1));

        let (_, max) = EdgeRecord::from_raw(7, vec![], 1_000).validate().unwrap();
        assert_eq!(max, NodeId::new(7));
    }

    #[test]
    fn test_validate_negative_node() {
        let err = EdgeRecord::from_raw(-1, vec![], 0).validate().unwrap_err();
        assert!(matches!(err, Error::Malformed { .. }));
    }

    #[test]
    fn test_validate_negative_edge() {
        let err = EdgeRecord::from_raw(1, vec![2, -3], 2).validate().unwrap_err();
        assert!(err.to_string().contains("negative id -3"));
    }

    #[test]
    fn test_validate_understated_max() {
        let err = EdgeRecord::from_raw(1, vec![2, 9], 5).validate().unwrap_err();
        assert!(err.to_string().contains("above its declared maximum"));

        let err = EdgeRecord::from_raw(6, vec![], 5).validate().unwrap_err();
        assert!(err.to_string().contains("exceeds its declared maximum"));
    }

    #[test]
    fn test_validate_negative_max() {
        let err = EdgeRecord::from_raw(0, vec![], -1).validate().unwrap_err();
        assert!(err.to_string().contains("negative maximum"));
    }
}
