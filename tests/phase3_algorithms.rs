//! Phase 3 tests: Minimum spanning trees and shortest paths.

use graphkit::engine::analysis::{get_components, has_cycles};
use graphkit::engine::mst::{kruskal, prim};
use graphkit::engine::pathfinding::{bellman_ford, dijkstra, floyd_warshall};
use graphkit::graph::{k_graph, Graph, GraphBuilder};
use graphkit::types::{Distance, Edge, ErrorKind, GraphError, NodeId, Weight};

// ==================== Helper ====================

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The nine-node weighted example with a minimum spanning tree of weight 37.
fn textbook() -> Graph {
    GraphBuilder::new()
        .title("textbook")
        .weighted(true)
        .edges(vec![
            Edge::new("A", "B", 4),
            Edge::new("A", "H", 8),
            Edge::new("B", "C", 8),
            Edge::new("B", "H", 11),
            Edge::new("C", "D", 7),
            Edge::new("C", "F", 4),
            Edge::new("C", "I", 2),
            Edge::new("D", "E", 9),
            Edge::new("D", "F", 14),
            Edge::new("E", "F", 10),
            Edge::new("F", "G", 2),
            Edge::new("G", "H", 1),
            Edge::new("G", "I", 6),
            Edge::new("H", "I", 7),
        ])
        .build()
        .unwrap()
}

fn total_weight(graph: &Graph) -> Weight {
    graph.edge_list().iter().map(|e| e.weight).sum()
}

fn assert_spanning_tree(tree: &Graph, original: &Graph) {
    assert_eq!(tree.order(), original.order());
    assert_eq!(tree.num_edges(), original.order() - 1);
    assert!(!has_cycles(tree));
    assert_eq!(get_components(tree, false).len(), 1);
    for edge in tree.edge_list() {
        assert_eq!(
            original.weight(&edge.source, &edge.target).unwrap(),
            edge.weight
        );
    }
}

// ==================== MST Tests ====================

#[test]
fn test_kruskal_textbook() {
    init_logging();
    let graph = textbook();
    let mst = kruskal(&graph).unwrap();
    assert_spanning_tree(&mst, &graph);
    assert_eq!(total_weight(&mst), 37);
    assert_eq!(mst.title(), "textbook_(mst)");
    assert!(!mst.is_directed());
    assert!(mst.is_weighted());
}

#[test]
fn test_prim_textbook() {
    init_logging();
    let graph = textbook();
    let mst = prim(&graph).unwrap();
    assert_spanning_tree(&mst, &graph);
    assert_eq!(total_weight(&mst), 37);
    assert_eq!(mst.title(), "textbook_(mst)");
}

#[test]
fn test_mst_with_negative_weights() {
    let graph = GraphBuilder::new()
        .weighted(true)
        .edge("A", "B", -5)
        .edge("B", "C", 3)
        .edge("A", "C", 1)
        .build()
        .unwrap();
    assert_eq!(total_weight(&kruskal(&graph).unwrap()), -4);
    assert_eq!(total_weight(&prim(&graph).unwrap()), -4);
}

#[test]
fn test_mst_unweighted() {
    let graph = k_graph(6).unwrap();
    for mst in [kruskal(&graph).unwrap(), prim(&graph).unwrap()] {
        assert_spanning_tree(&mst, &graph);
        assert!(!mst.is_weighted());
        assert_eq!(mst.title(), "K_6_(mst)");
    }
}

#[test]
fn test_mst_rejects_directed() {
    let graph = GraphBuilder::new()
        .directed(true)
        .link("A", "B")
        .build()
        .unwrap();
    assert_eq!(kruskal(&graph).unwrap_err().kind(), ErrorKind::InvalidGraph);
    assert_eq!(prim(&graph).unwrap_err().kind(), ErrorKind::InvalidGraph);
}

#[test]
fn test_mst_rejects_disconnected() {
    let graph = GraphBuilder::new()
        .link("A", "B")
        .link("C", "D")
        .node("E")
        .build()
        .unwrap();
    assert_eq!(
        kruskal(&graph).unwrap_err(),
        GraphError::Disconnected { components: 3 }
    );
    let err = prim(&graph).unwrap_err();
    assert!(matches!(err, GraphError::Disconnected { components: 3 }));
    assert_eq!(err.kind(), ErrorKind::InvalidGraph);
}

#[test]
fn test_mst_trivial_graphs_unchanged() {
    let empty = Graph::with_title("empty", false, true);
    assert_eq!(kruskal(&empty).unwrap(), empty);
    assert_eq!(prim(&empty).unwrap(), empty);

    let mut single = Graph::with_title("single", true, true);
    single.add_node("A");
    assert_eq!(kruskal(&single).unwrap(), single);
    assert_eq!(prim(&single).unwrap(), single);
}

#[test]
fn test_prim_two_nodes() {
    let graph = GraphBuilder::new()
        .title("pair")
        .weighted(true)
        .edge("B", "A", 6)
        .build()
        .unwrap();
    let mst = prim(&graph).unwrap();
    assert_eq!(mst.title(), "pair_(mst)");
    assert_eq!(mst.edge_list(), vec![Edge::new("A", "B", 6)]);
}

#[test]
fn test_mst_does_not_mutate_input() {
    let graph = textbook();
    let before = graph.clone();
    kruskal(&graph).unwrap();
    prim(&graph).unwrap();
    assert_eq!(graph, before);
}

// ==================== Dijkstra Tests ====================

#[test]
fn test_dijkstra_example() {
    init_logging();
    let mut graph = Graph::new(false, true);
    graph.add_edge("A", "B", 3).unwrap();
    graph.add_edge("B", "C", 1).unwrap();

    let paths = dijkstra(&graph, "A").unwrap();
    assert_eq!(paths.distance("A"), Distance::Finite(0));
    assert_eq!(paths.distance("B"), Distance::Finite(3));
    assert_eq!(paths.distance("C"), Distance::Finite(4));
    assert_eq!(paths.distances.len(), 3);

    assert_eq!(
        paths.tree.edge_list(),
        vec![Edge::new("A", "B", 3), Edge::new("B", "C", 1)]
    );
    assert_eq!(paths.tree.title(), "Graph_(dijkstra_spt)");
}

#[test]
fn test_dijkstra_prefers_cheaper_detour() {
    let graph = GraphBuilder::new()
        .directed(true)
        .weighted(true)
        .edge("A", "B", 1)
        .edge("B", "C", 2)
        .edge("A", "C", 5)
        .build()
        .unwrap();
    let paths = dijkstra(&graph, "A").unwrap();
    assert_eq!(paths.distance("C"), Distance::Finite(3));
    assert_eq!(
        paths.path_to("C").unwrap(),
        vec![NodeId::from("A"), NodeId::from("B"), NodeId::from("C")]
    );
    assert!(paths.tree.has_edge("B", "C").unwrap());
    assert!(!paths.tree.has_node("D"));
    assert!(paths.tree.is_directed());
}

#[test]
fn test_dijkstra_unreachable_is_infinite() {
    let graph = GraphBuilder::new()
        .directed(true)
        .weighted(true)
        .edge("A", "B", 2)
        .edge("C", "A", 2)
        .build()
        .unwrap();
    let paths = dijkstra(&graph, "A").unwrap();
    assert_eq!(paths.distance("C"), Distance::Infinite);
    assert!(paths.path_to("C").is_none());
    assert_eq!(paths.path_to("A").unwrap(), vec![NodeId::from("A")]);
    assert_eq!(paths.tree.order(), 2);
}

#[test]
fn test_dijkstra_unweighted_counts_hops() {
    let graph = k_graph(4).unwrap();
    let paths = dijkstra(&graph, 0).unwrap();
    for node in 1..4 {
        assert_eq!(paths.distance(node), Distance::Finite(1));
    }
}

#[test]
fn test_dijkstra_preconditions() {
    let mut graph = Graph::new(true, true);
    graph.add_edge("A", "B", -1).unwrap();
    assert_eq!(
        dijkstra(&graph, "A").unwrap_err().kind(),
        ErrorKind::InvalidGraph
    );

    graph.remove_edge("A", "B").unwrap();
    assert!(dijkstra(&graph, "A").is_ok());
    assert_eq!(
        dijkstra(&graph, "nope").unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

// ==================== Bellman-Ford Tests ====================

#[test]
fn test_bellman_ford_negative_edges() {
    let graph = GraphBuilder::new()
        .directed(true)
        .weighted(true)
        .edge("A", "B", 4)
        .edge("A", "C", 2)
        .edge("C", "B", -3)
        .edge("B", "D", 1)
        .build()
        .unwrap();
    let paths = bellman_ford(&graph, "A").unwrap();
    assert_eq!(paths.distance("B"), Distance::Finite(-1));
    assert_eq!(paths.distance("D"), Distance::Finite(0));
    assert_eq!(paths.path_to("D").unwrap().len(), 4);
    assert_eq!(paths.tree.title(), "Graph_(bf_spt)");
    assert_eq!(paths.tree.weight("C", "B").unwrap(), -3);
}

#[test]
fn test_bellman_ford_negative_cycle() {
    init_logging();
    let graph = GraphBuilder::new()
        .directed(true)
        .weighted(true)
        .edge("A", "B", 1)
        .edge("B", "C", -2)
        .edge("C", "A", -1)
        .build()
        .unwrap();
    assert_eq!(bellman_ford(&graph, "A").unwrap_err(), GraphError::NegativeCycle);
}

#[test]
fn test_bellman_ford_unreachable_negative_cycle_ignored() {
    let graph = GraphBuilder::new()
        .directed(true)
        .weighted(true)
        .edge("S", "T", 3)
        .edge("X", "Y", -2)
        .edge("Y", "X", -2)
        .build()
        .unwrap();
    let paths = bellman_ford(&graph, "S").unwrap();
    assert_eq!(paths.distance("T"), Distance::Finite(3));
    assert_eq!(paths.distance("X"), Distance::Infinite);
}

#[test]
fn test_bellman_ford_undirected_negative_edge_is_cycle() {
    let graph = GraphBuilder::new()
        .weighted(true)
        .edge("A", "B", -1)
        .build()
        .unwrap();
    assert_eq!(
        bellman_ford(&graph, "A").unwrap_err().kind(),
        ErrorKind::NegativeCycle
    );
}

#[test]
fn test_bellman_ford_extreme_negative_cycle() {
    let graph = GraphBuilder::new()
        .directed(true)
        .weighted(true)
        .edge("A", "B", i64::MIN)
        .edge("B", "A", 0)
        .build()
        .unwrap();
    assert_eq!(bellman_ford(&graph, "A").unwrap_err(), GraphError::NegativeCycle);
    assert_eq!(floyd_warshall(&graph).unwrap_err(), GraphError::NegativeCycle);
}

#[test]
fn test_extreme_weights_do_not_truncate() {
    let graph = GraphBuilder::new()
        .directed(true)
        .weighted(true)
        .edge("A", "B", i64::MAX)
        .edge("B", "C", i64::MAX)
        .build()
        .unwrap();
    let expected = Distance::Finite(2 * i128::from(i64::MAX));

    assert_eq!(dijkstra(&graph, "A").unwrap().distance("C"), expected);
    assert_eq!(bellman_ford(&graph, "A").unwrap().distance("C"), expected);
    assert_eq!(floyd_warshall(&graph).unwrap().get("A", "C"), Some(expected));

    let low = GraphBuilder::new()
        .directed(true)
        .weighted(true)
        .edge("A", "B", i64::MIN)
        .edge("B", "C", i64::MIN)
        .build()
        .unwrap();
    assert_eq!(
        bellman_ford(&low, "A").unwrap().distance("C"),
        Distance::Finite(2 * i128::from(i64::MIN))
    );
}

#[test]
fn test_bellman_ford_matches_dijkstra() {
    let graph = textbook();
    for source in graph.nodes() {
        let d = dijkstra(&graph, source).unwrap();
        let b = bellman_ford(&graph, source).unwrap();
        assert_eq!(d.distances, b.distances, "source {}", source);
    }
}

#[test]
fn test_bellman_ford_missing_source() {
    let graph = textbook();
    assert_eq!(
        bellman_ford(&graph, "Q").unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

// ==================== Floyd-Warshall Tests ====================

#[test]
fn test_floyd_warshall_matches_single_source() {
    let graph = GraphBuilder::new()
        .directed(true)
        .weighted(true)
        .edge("A", "B", 4)
        .edge("A", "C", 2)
        .edge("C", "B", -3)
        .edge("B", "D", 1)
        .edge("D", "A", 5)
        .build()
        .unwrap();
    let all_pairs = floyd_warshall(&graph).unwrap();
    assert_eq!(all_pairs.len(), 4);

    for source in graph.nodes() {
        let single = bellman_ford(&graph, source).unwrap();
        for target in graph.nodes() {
            assert_eq!(
                all_pairs.get(source, target).unwrap(),
                single.distance(target),
                "{} -> {}",
                source,
                target
            );
        }
        assert_eq!(all_pairs.get(source, source), Some(Distance::ZERO));
    }
}

#[test]
fn test_floyd_warshall_unreachable_and_zero_weight() {
    let graph = GraphBuilder::new()
        .directed(true)
        .weighted(true)
        .edge("A", "B", 0)
        .node("C")
        .build()
        .unwrap();
    let all_pairs = floyd_warshall(&graph).unwrap();
    assert_eq!(all_pairs.get("A", "B"), Some(Distance::Finite(0)));
    assert_eq!(all_pairs.get("B", "A"), Some(Distance::Infinite));
    assert_eq!(all_pairs.get("A", "C"), Some(Distance::Infinite));
    assert_eq!(all_pairs.get("A", "missing"), None);
}

#[test]
fn test_floyd_warshall_negative_cycle() {
    let graph = GraphBuilder::new()
        .directed(true)
        .weighted(true)
        .edge("A", "B", 1)
        .edge("B", "C", -2)
        .edge("C", "A", -1)
        .build()
        .unwrap();
    assert_eq!(floyd_warshall(&graph).unwrap_err(), GraphError::NegativeCycle);
}

#[test]
fn test_floyd_warshall_trivial_graphs() {
    let empty = floyd_warshall(&Graph::default()).unwrap();
    assert!(empty.is_empty());
    assert!(empty.distances.is_empty());

    let mut single = Graph::default();
    single.add_node("A");
    let one = floyd_warshall(&single).unwrap();
    assert_eq!(one.distances, vec![vec![Distance::ZERO]]);
}

#[test]
fn test_distance_ordering_and_display() {
    assert!(Distance::Finite(i128::MAX) < Distance::Infinite);
    assert!(Distance::Finite(-3) < Distance::ZERO);
    assert_eq!(Distance::Infinite.plus(5), Distance::Infinite);
    assert_eq!(Distance::Finite(2).join(Distance::Finite(3)), Distance::Finite(5));
    assert_eq!(Distance::Finite(2).join(Distance::Infinite), Distance::Infinite);
    assert_eq!(Distance::Infinite.to_string(), "inf");
    assert_eq!(Distance::Finite(-4).to_string(), "-4");
    assert_eq!(Distance::Finite(7).finite(), Some(7));
}
