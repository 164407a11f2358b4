//! Integration tests for graphs built over renumbered external ids.

use std::{collections::HashMap, thread};

use densegraph::{
    graph::verify::{check_consistency, check_renumbered_equivalent},
    prelude::*,
};

fn follows() -> Vec<(String, Vec<String>)> {
    let edges = [
        ("alice", vec!["bob", "carol"]),
        ("bob", vec!["carol"]),
        ("carol", vec!["alice", "dave"]),
        ("erin", vec!["dave"]),
    ];
    edges
        .into_iter()
        .map(|(node, list)| {
            (
                node.to_string(),
                list.into_iter().map(str::to_string).collect(),
            )
        })
        .collect()
}

#[test]
fn test_string_ids_build_and_map_back() -> Result<()> {
    let mut numberer = NodeNumberer::new();
    let records = numberer.renumber_adjacency(follows());
    let graph = DirectedGraph::from_records(&records, StoredGraphDir::BothInOut)?;

    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 6);
    assert_eq!(numberer.len(), 5);

    let dave = numberer
        .internal_id(&"dave".to_string())
        .expect("dave was registered");
    let followers: Vec<&String> = graph
        .get_node_by_id(dave)
        .expect("dave is a node")
        .inbound_nodes()
        .iter()
        .map(|&id| numberer.internal_to_external(id))
        .collect::<Result<_>>()?;
    let mut followers: Vec<&str> = followers.into_iter().map(String::as_str).collect();
    followers.sort_unstable();
    assert_eq!(followers, vec!["carol", "erin"]);

    let reference: HashMap<String, Vec<String>> = follows().into_iter().collect();
    check_renumbered_equivalent(&graph, &reference, &numberer)?;
    check_consistency(&graph)?;
    Ok(())
}

#[test]
fn test_renumbered_equivalence_detects_difference() -> Result<()> {
    let mut numberer = NodeNumberer::new();
    let records = numberer.renumber_adjacency(follows());
    let graph = DirectedGraph::from_records(&records, StoredGraphDir::OnlyOut)?;

    let mut reference: HashMap<String, Vec<String>> = follows().into_iter().collect();
    reference
        .get_mut("bob")
        .expect("bob has a record")
        .push("erin".to_string());

    assert!(matches!(
        check_renumbered_equivalent(&graph, &reference, &numberer),
        Err(Error::GraphError(_))
    ));
    Ok(())
}

#[test]
fn test_unknown_internal_id_is_reported() {
    let numberer: NodeNumberer<u64> = NodeNumberer::from_externals([42, 43]);
    assert!(matches!(
        numberer.internal_to_external(NodeId::new(7)),
        Err(Error::UnknownInternalId(id)) if id == NodeId::new(7)
    ));
}

#[test]
fn test_shared_numberer_feeds_a_build() -> Result<()> {
    let adjacency: Vec<(u64, Vec<u64>)> = (0..64u64)
        .map(|user| (user * 1_000, vec![((user + 1) % 64) * 1_000]))
        .collect();

    let numberer = SharedNodeNumberer::new();
    let chunks: Vec<Vec<EdgeRecord>> = thread::scope(|scope| {
        let handles: Vec<_> = adjacency
            .chunks(16)
            .map(|chunk| {
                let numberer = &numberer;
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|(node, edges)| {
                            let node = numberer.external_to_internal(*node);
                            let edges = edges
                                .iter()
                                .map(|&e| numberer.external_to_internal(e).as_u32() as i32)
                                .collect();
                            EdgeRecord::new(node.as_u32() as i32, edges)
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("worker panicked"))
            .collect()
    });
    let records: Vec<EdgeRecord> = chunks.into_iter().flatten().collect();

    assert_eq!(numberer.len(), 64);
    let graph = DirectedGraph::from_records(&records, StoredGraphDir::BothInOut)?;
    assert_eq!(graph.node_count(), 64);
    assert_eq!(graph.edge_count(), 64);

    // The ring survives renumbering: every node has one follower and follows one.
    for node in graph.nodes() {
        assert_eq!(node.outbound_count(), 1);
        assert_eq!(node.inbound_count(), 1);
    }

    let reference: HashMap<u64, Vec<u64>> = adjacency.into_iter().collect();
    check_renumbered_equivalent(&graph, &reference, &numberer)?;

    let owned = numberer.into_numberer();
    check_renumbered_equivalent(&graph, &reference, &owned)?;
    Ok(())
}
