//! Weighted-graph reachability demonstration.
//!
//! Builds a 5-vertex graph, prints its adjacency matrix, and reports whether
//! vertex 3 can be reached from vertex 0.

use anyhow::Result;
use matgraph::MatrixGraph;

fn main() -> Result<()> {
    let mut graph = MatrixGraph::new(5);
    graph.add_edge(0, 1, 10)?;
    graph.add_edge(1, 2, 20)?;
    graph.add_edge(2, 3, 30)?;

    print!("{graph}");

    if graph.has_path(0, 3)? {
        println!("There is a path from 0 to 3");
    }

    Ok(())
}
