//! Implementation of a branch and bound search for a minimum vertex cover.

use std::cmp::min;
use fxhash::FxHashSet;
use crate::graph::UGraph;

impl UGraph {

    /// Computes a minimum vertex cover by a recursive branch and bound search.
    ///
    /// Each call branches on the live node with the highest degree in the remaining
    /// subgraph (ties go to the first node in enumeration order): either the node stays
    /// out of the cover, which forces all of its live neighbors in, or the node itself
    /// goes in. The out-branch is searched first so its result can tighten the upper
    /// bound handed to the in-branch. The bound is threaded through the recursion but
    /// never cuts a branch short, so both subtrees are always searched to completion.
    ///
    /// Worst case exponential in the number of nodes; the high degree selection keeps
    /// the search tree small on most inputs.
    pub fn exact_cover(&self) -> FxHashSet<usize> {
        if self.is_empty() {
            return FxHashSet::default()
        }
        let live: FxHashSet<usize> = self.nodes().collect();
        let upper_bound = live.len();
        self.branch_cover(live, upper_bound, FxHashSet::default())
    }

    /// One branching step on the subgraph induced by `live`.
    /// `cover` is the partial cover accumulated on the path to this call; every frame
    /// owns its sets, so sibling branches never see each other's changes.
    fn branch_cover(
        &self,
        live: FxHashSet<usize>,
        upper_bound: usize,
        cover: FxHashSet<usize>,
    ) -> FxHashSet<usize> {
        if live.is_empty() {
            return cover
        }
        let branch_node = self.max_live_degree_node(&live);
        let live_neighbors: FxHashSet<usize> = self.neighbors(branch_node)
            .intersection(&live)
            .copied()
            .collect();
        // Leave `branch_node` out: its neighbors have to cover all incident edges, and
        // the whole closed neighborhood leaves the subgraph.
        let remaining: FxHashSet<usize> = live.iter()
            .copied()
            .filter(|node| *node != branch_node && !live_neighbors.contains(node))
            .collect();
        let mut covered_by_neighbors = cover.clone();
        covered_by_neighbors.extend(live_neighbors.iter().copied());
        let without = self.branch_cover(remaining, upper_bound, covered_by_neighbors);
        // Take `branch_node` in: its edges are covered, only the node itself leaves.
        let mut remaining = live;
        remaining.remove(&branch_node);
        let mut covered_by_node = cover;
        covered_by_node.insert(branch_node);
        let with = self.branch_cover(
            remaining,
            min(upper_bound, without.len()),
            covered_by_node,
        );
        if with.len() < without.len() {
            with
        } else {
            without
        }
    }

    /// Returns the node in `live` with the most neighbors in `live`. On equal degrees
    /// the node that comes first in enumeration order wins.
    fn max_live_degree_node(&self, live: &FxHashSet<usize>) -> usize {
        let mut best = None;
        let mut best_degree = 0;
        for node in self.nodes().filter(|node| live.contains(node)) {
            let degree = self.neighbors(node).intersection(live).count();
            if best.is_none() || degree > best_degree {
                best = Some(node);
                best_degree = degree;
            }
        }
        best.expect("`live` is not empty")
    }

}
