//! Checks that compare a built graph against a reference adjacency map.
//!
//! These are the assertions a caller needs after a build: that the node set and
//! every outbound list match what was supplied, optionally through a
//! [`Renumbering`], and that the stored directions are consistent with each other.
//! Each check reports the first difference as [`Error::GraphError`].

use std::{
    collections::{HashMap, HashSet},
    fmt::Debug,
    hash::Hash,
};

use crate::{
    graph::{DirectedGraph, GraphDir, NodeId, StoredGraphDir},
    numbering::Renumbering,
    Error, Result,
};

/// Checks that `graph` has exactly the nodes and outbound edges of `reference`.
///
/// The expected node set is every key of `reference` together with every id
/// that appears in one of its lists. Ids that are not keys are expected to have
/// no outbound edges. List order and duplicates in `reference` are ignored.
///
/// # Errors
///
/// Returns [`Error::GraphError`] naming the first node whose adjacency differs.
///
/// # Examples
///
/// ```rust
/// use densegraph::graph::{verify, DirectedGraph, EdgeRecord, StoredGraphDir};
/// use std::collections::BTreeMap;
///
/// let reference = BTreeMap::from([(1, vec![2, 3]), (3, vec![1])]);
/// let records = EdgeRecord::from_adjacency(reference.clone());
/// let graph = DirectedGraph::from_records(&records, StoredGraphDir::OnlyOut)?;
///
/// verify::check_equivalent(&graph, &reference)?;
/// # Ok::<(), densegraph::Error>(())
/// ```
pub fn check_equivalent<'a, R, V>(graph: &DirectedGraph, reference: R) -> Result<()>
where
    R: IntoIterator<Item = (&'a i32, &'a V)>,
    V: AsRef<[i32]> + 'a,
{
    check_translated(graph, reference, |id| {
        i32::try_from(id.as_u32()).map_err(|_| Error::UnknownInternalId(id))
    })
}

/// Checks that `graph`, read back through `numberer`, matches `reference`.
///
/// `reference` is keyed by external ids. Every node id of the graph is mapped to
/// its external id before comparing, so the check fails if the numberer cannot
/// reverse-map a node.
///
/// # Errors
///
/// Returns [`Error::GraphError`] on the first difference, or
/// [`Error::UnknownInternalId`] if the graph holds an id the numberer never allocated.
pub fn check_renumbered_equivalent<'a, T, R, V, N>(
    graph: &DirectedGraph,
    reference: R,
    numberer: &N,
) -> Result<()>
where
    T: Hash + Eq + Clone + Debug + 'a,
    R: IntoIterator<Item = (&'a T, &'a V)>,
    V: AsRef<[T]> + 'a,
    N: Renumbering<T> + ?Sized,
{
    check_translated(graph, reference, |id| numberer.external_id(id))
}

fn check_translated<'a, T, R, V, F>(graph: &DirectedGraph, reference: R, translate: F) -> Result<()>
where
    T: Hash + Eq + Clone + Debug + 'a,
    R: IntoIterator<Item = (&'a T, &'a V)>,
    V: AsRef<[T]> + 'a,
    F: Fn(NodeId) -> Result<T>,
{
    let mut expected: HashMap<T, HashSet<T>> = HashMap::new();
    for (node, edges) in reference {
        let edges = edges.as_ref();
        expected.entry(node.clone()).or_default().extend(edges.iter().cloned());
        for edge in edges {
            expected.entry(edge.clone()).or_default();
        }
    }

    if graph.node_count() != expected.len() {
        return Err(Error::GraphError(format!(
            "Graph has {} nodes, reference has {}",
            graph.node_count(),
            expected.len()
        )));
    }

    for node in graph.nodes() {
        let external = translate(node.id())?;
        let Some(want) = expected.get(&external) else {
            return Err(Error::GraphError(format!(
                "Graph node {:?} is not in the reference",
                external
            )));
        };

        let got = node
            .outbound_nodes()
            .iter()
            .map(|&id| translate(id))
            .collect::<Result<HashSet<T>>>()?;

        if &got != want {
            let missing: Vec<&T> = want.difference(&got).collect();
            let extra: Vec<&T> = got.difference(want).collect();
            return Err(Error::GraphError(format!(
                "Outbound edges of node {:?} differ: missing {:?}, unexpected {:?}",
                external, missing, extra
            )));
        }
    }

    Ok(())
}

/// Checks the direction invariants of `graph` for its storage mode.
///
/// - Every neighbor id is a node of the graph and no list holds duplicates.
/// - Lists of an unstored direction are empty.
/// - When both directions are stored, `v ∈ out(u)` exactly when `u ∈ in(v)`.
///
/// # Errors
///
/// Returns [`Error::GraphError`] describing the first violation.
pub fn check_consistency(graph: &DirectedGraph) -> Result<()> {
    let dir = graph.stored_graph_dir();

    for node in graph.nodes() {
        for list_dir in [GraphDir::OutDir, GraphDir::InDir] {
            let list = node.neighbor_ids(list_dir);

            if !dir.is_dir_stored(list_dir) && !list.is_empty() {
                return Err(Error::GraphError(format!(
                    "Node {} has {} neighbors in unstored direction {}",
                    node.id(),
                    list.len(),
                    list_dir
                )));
            }
            if list.windows(2).any(|pair| pair[0] >= pair[1]) {
                return Err(Error::GraphError(format!(
                    "Node {} has a duplicate or unordered {} neighbor list",
                    node.id(),
                    list_dir
                )));
            }

            for &other in list {
                let Some(other_node) = graph.get_node_by_id(other) else {
                    return Err(Error::GraphError(format!(
                        "Node {} references unknown node {}",
                        node.id(),
                        other
                    )));
                };
                if matches!(dir, StoredGraphDir::BothInOut | StoredGraphDir::Mutual)
                    && !other_node.is_neighbor(list_dir.reverse(), node.id())
                {
                    return Err(Error::GraphError(format!(
                        "Node {} lists {} in {} but not the reverse",
                        node.id(),
                        other,
                        list_dir
                    )));
                }
            }
        }
    }

    Ok(())
}
