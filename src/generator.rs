//! Generation of random connected graphs for benchmarking the solvers.

use rand::Rng;
use crate::graph::UGraph;

/// Generates a random connected graph with around `vertex_count` vertices and at least
/// `edge_count` edges.
///
/// Draws `edge_count` edges between distinct random vertices labeled `1` to
/// `vertex_count`; vertices enter the graph only once an edge touches them, so the
/// result can hold fewer vertices than requested. A repair pass then connects the
/// graph: as long as some vertex is unreachable from the first component, an edge
/// between a random reached and a random unreached vertex is added.
///
/// Returns the empty graph if `vertex_count < 2` or `edge_count == 0`.
pub fn random_connected_graph<R: Rng>(rng: &mut R, vertex_count: usize, edge_count: usize) -> UGraph {
    let mut graph = UGraph::new();
    if vertex_count < 2 || edge_count == 0 {
        return graph
    }
    for _ in 0..edge_count {
        let src = rng.gen_range(1..=vertex_count);
        let mut trg = rng.gen_range(1..=vertex_count);
        while trg == src {
            trg = rng.gen_range(1..=vertex_count);
        }
        let src = graph.add_vertex(&src.to_string());
        let trg = graph.add_vertex(&trg.to_string());
        graph.add_edge(src, trg);
    }
    // Union the remaining components into the one around a random start node.
    let start = rng.gen_range(0..graph.num_nodes());
    let mut reached = graph.reachable(start);
    loop {
        let outside: Vec<usize> = graph.nodes().filter(|node| !reached.contains(node)).collect();
        if outside.is_empty() {
            break
        }
        let component: Vec<usize> = reached.iter().copied().collect();
        let src = component[rng.gen_range(0..component.len())];
        let trg = outside[rng.gen_range(0..outside.len())];
        graph.add_edge(src, trg);
        let seed = component[rng.gen_range(0..component.len())];
        reached = graph.reachable(seed);
    }
    graph
}
