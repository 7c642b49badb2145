//! Implementation of a polynomial time approximation for the Vertex Cover Problem that
//! prunes a degree-sorted candidate list.

use fxhash::FxHashSet;
use crate::graph::UGraph;

impl UGraph {

    /// Approximates a minimum vertex cover in O(n^2) time.
    ///
    /// Starts from the full vertex list sorted ascending by degree (stable, so equal
    /// degrees keep their enumeration order) and scans it once. A vertex is dropped from
    /// the candidate list exactly if all of its neighbors are still candidates, since its
    /// edges then stay covered by the neighbors. Dropping a vertex does not advance the
    /// scan position. Processing low degrees first tends to keep the hub vertices, which
    /// is what makes the greedy pruning work out.
    ///
    /// The returned cover touches every edge but is in general not minimum.
    pub fn approximate_cover(&self) -> FxHashSet<usize> {
        if self.is_empty() {
            return FxHashSet::default()
        }
        let mut candidates: Vec<usize> = self.nodes().collect();
        candidates.sort_by_key(|node| self.degree(*node));
        let mut pos = 0;
        while pos < candidates.len() {
            let node = candidates[pos];
            // Isolated nodes pass vacuously and are always dropped.
            if self.neighbors(node).iter().all(|neigh| candidates.contains(neigh)) {
                candidates.remove(pos);
            } else {
                pos += 1;
            }
        }
        candidates.into_iter().collect()
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn empty_graph_test() {
        let graph = UGraph::new();
        assert!(graph.approximate_cover().is_empty());
    }

    #[test]
    fn single_edge_test() {
        let graph = UGraph::read_edge_list(Cursor::new("1\na b\n")).unwrap();
        let cover = graph.approximate_cover();
        assert_eq!(cover.len(), 1);
        assert!(graph.is_cover(&cover));
    }

    #[test]
    fn triangle_test() {
        let graph = UGraph::read_edge_list(Cursor::new("3\na b\nb c\na c\n")).unwrap();
        let cover = graph.approximate_cover();
        assert!(graph.is_cover(&cover));
        assert!(cover.len() == 2 || cover.len() == 3);
    }

    #[test]
    fn star_test() {
        // All leaves have degree 1 and are dropped while the center remains a candidate.
        let graph = UGraph::read_edge_list(Cursor::new("5\nc l1\nc l2\nc l3\nc l4\nc l5\n")).unwrap();
        let cover = graph.approximate_cover();
        assert_eq!(cover.len(), 1);
        assert!(cover.contains(&graph.vertex("c").unwrap()));
    }

    #[test]
    fn path_test() {
        // On the path a-b-c-d both endpoints are dropped first, leaving the optimal
        // inner cover {b, c}.
        let graph = UGraph::read_edge_list(Cursor::new("3\na b\nb c\nc d\n")).unwrap();
        let cover = graph.approximate_cover();
        assert_eq!(cover.len(), 2);
        assert!(cover.contains(&graph.vertex("b").unwrap()));
        assert!(cover.contains(&graph.vertex("c").unwrap()));
    }

    #[test]
    fn isolated_nodes_dropped_test() {
        let mut graph = UGraph::new();
        graph.add_vertex("lone");
        let a = graph.add_vertex("a");
        let b = graph.add_vertex("b");
        graph.add_edge(a, b);
        let cover = graph.approximate_cover();
        assert!(graph.is_cover(&cover));
        assert!(!cover.contains(&graph.vertex("lone").unwrap()));
    }

}
