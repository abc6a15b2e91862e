//! Integration tests for the public `MatrixGraph` API, including a
//! cross-check of reachability answers against `petgraph`.

use matgraph::{GraphError, MatrixGraph, Traversal};
use petgraph::algo::has_path_connecting;
use petgraph::graph::{DiGraph, NodeIndex};

#[test]
fn demo_program_scenario() {
    let mut graph = MatrixGraph::new(5);
    graph.add_edge(0, 1, 10).unwrap();
    graph.add_edge(1, 2, 20).unwrap();
    graph.add_edge(2, 3, 30).unwrap();

    let rendered = graph.to_string();
    assert_eq!(rendered.lines().count(), 5);
    assert_eq!(rendered.lines().next().unwrap(), "0 10 0 0 0");

    assert!(graph.has_path(0, 3).unwrap());
    assert!(!graph.has_path(3, 0).unwrap());
    assert_eq!(*graph.weight(1, 2).unwrap(), 20);
}

#[test]
fn errors_are_displayable_and_stable() {
    let graph: MatrixGraph<i32> = MatrixGraph::new(2);
    let err = graph.weight(2, 0).unwrap_err();
    assert_eq!(err, GraphError::IndexOutOfRange { index: 2, len: 2 });
    assert_eq!(
        err.to_string(),
        "vertex index 2 out of range for graph with 2 vertices"
    );
}

/// Builds the same edge set in a `MatrixGraph` and a petgraph `DiGraph`,
/// then compares reachability over every vertex pair and both strategies.
fn cross_check(vertex_count: usize, edges: &[(usize, usize)]) {
    let mut graph = MatrixGraph::new(vertex_count);
    let mut reference: DiGraph<(), ()> = DiGraph::new();
    let nodes: Vec<NodeIndex> = (0..vertex_count).map(|_| reference.add_node(())).collect();

    for &(u, v) in edges {
        graph.add_edge(u, v, 1).unwrap();
        reference.update_edge(nodes[u], nodes[v], ());
    }

    for from in 0..vertex_count {
        for to in 0..vertex_count {
            let expected = has_path_connecting(&reference, nodes[from], nodes[to], None);
            for strategy in [Traversal::DepthFirst, Traversal::BreadthFirst] {
                assert_eq!(
                    graph.has_path_with(from, to, strategy).unwrap(),
                    expected,
                    "{from} -> {to} via {strategy:?}"
                );
            }
        }
    }
}

#[test]
fn reachability_matches_petgraph_on_chain() {
    cross_check(6, &[(0, 1), (1, 2), (2, 3), (3, 4)]);
}

#[test]
fn reachability_matches_petgraph_on_cycle_with_tail() {
    cross_check(6, &[(0, 1), (1, 2), (2, 0), (2, 3), (4, 5)]);
}

#[test]
fn reachability_matches_petgraph_on_dense_mesh() {
    let mut edges = Vec::new();
    // Every even vertex points at every odd vertex above it.
    for u in (0..8).step_by(2) {
        for v in (1..8).step_by(2) {
            if v > u {
                edges.push((u, v));
            }
        }
    }
    edges.push((7, 0));
    cross_check(8, &edges);
}

#[test]
fn reachable_count_agrees_with_pairwise_queries() {
    let mut graph = MatrixGraph::new(7);
    for (u, v) in [(0, 1), (1, 2), (2, 3), (0, 4), (5, 6)] {
        graph.add_edge(u, v, 1).unwrap();
    }

    for from in 0..7 {
        let by_pairs = (0..7)
            .filter(|&to| graph.has_path(from, to).unwrap())
            .count();
        assert_eq!(graph.reachable_count(from).unwrap(), by_pairs, "from {from}");
    }
}
