//! Implementation of a simple, undirected, unweighted graph data structure with labeled
//! vertices and edge list import/export.

use fxhash::{FxHashMap, FxHashSet};
use std::io::{BufRead, Write};
use std::io;
use crate::error::ImportError;

/// A simple undirected graph datastructure.
///
/// Vertices are identified by dense `usize` ids, assigned in the order the vertices are
/// first seen. This insertion order is the fixed enumeration order all deterministic
/// tie-breaks in the solvers rely on. Each vertex carries the opaque string label it was
/// created with.
///
/// The adjacency relation is kept symmetric and irreflexive by construction; `add_edge`
/// expects two distinct vertex ids and the importer rejects self-loops.
#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub struct UGraph {
    adj_list: Vec<FxHashSet<usize>>,
    labels: Vec<String>,
    ids: FxHashMap<String, usize>,
}

// Construction
impl UGraph {

    /// Returns an empty graph.
    pub fn new() -> Self {
        UGraph::default()
    }

    /// Returns the id of the vertex labeled `label`, creating the vertex if it does not
    /// exist yet.
    pub fn add_vertex(&mut self, label: &str) -> usize {
        if let Some(id) = self.ids.get(label) {
            return *id
        }
        let id = self.adj_list.len();
        self.adj_list.push(FxHashSet::default());
        self.labels.push(label.to_owned());
        self.ids.insert(label.to_owned(), id);
        id
    }

    /// Adds an undirected edge between `src` and `trg`.
    /// Both ids must exist and must be distinct; adding an existing edge is a no-op.
    pub fn add_edge(&mut self, src: usize, trg: usize) {
        self.adj_list[src].insert(trg);
        self.adj_list[trg].insert(src);
    }

}

// Static functions
impl UGraph {

    /// Returns an `Iterator` over all node ids in enumeration order.
    pub fn nodes(&self) -> impl Iterator<Item=usize> + '_ {
        0..self.adj_list.len()
    }

    /// Returns the number of nodes of `self`.
    pub fn num_nodes(&self) -> usize {
        self.adj_list.len()
    }

    /// Returns the number of edges of `self`.
    pub fn num_edges(&self) -> usize {
        self.adj_list.iter().map(|neighs| neighs.len()).sum::<usize>() / 2
    }

    /// Returns the neighborhood of `node`.
    pub fn neighbors(&self, node: usize) -> &FxHashSet<usize> {
        &self.adj_list[node]
    }

    /// Returns the degree of `node`.
    pub fn degree(&self, node: usize) -> usize {
        self.adj_list[node].len()
    }

    /// Returns the label of `node`.
    pub fn label(&self, node: usize) -> &str {
        &self.labels[node]
    }

    /// Returns the id of the vertex labeled `label`, or `None` if no such vertex exists.
    pub fn vertex(&self, label: &str) -> Option<usize> {
        self.ids.get(label).copied()
    }

    /// Checks if `edge` exists.
    pub fn edge_exists(&self, edge: (usize, usize)) -> bool {
        self.adj_list[edge.0].contains(&edge.1)
    }

    /// Returns an iterator over all edges. Each edge `(src, trg)` is reported once with
    /// `src < trg`.
    pub fn edges(&self) -> impl Iterator<Item=(usize, usize)> + '_ {
        self.adj_list
            .iter()
            .enumerate()
            .flat_map(|(i, adj)| {
                adj.iter()
                    .filter_map(move |neigh| {
                        if i < *neigh {
                            Some((i, *neigh))
                        } else {
                            None
                        }
                    })
            })
    }

    /// Checks if `self` is empty (holds no nodes).
    pub fn is_empty(&self) -> bool {
        self.adj_list.is_empty()
    }

    /// Returns a set of all nodes reachable from `node`, including `node`.
    pub fn reachable(&self, node: usize) -> FxHashSet<usize> {
        let mut reached = FxHashSet::default();
        let mut queue = vec![node];
        while let Some(next) = queue.pop() {
            if reached.contains(&next) {
                continue
            }
            reached.insert(next);
            queue.extend(self.neighbors(next));
        }
        reached
    }

    /// Checks if `self` is disconnected.
    pub fn disconnected(&self) -> bool {
        if self.num_nodes() == 0 {
            return false
        }
        self.reachable(0).len() != self.num_nodes()
    }

}

// Import and export
impl UGraph {

    /// Reads a line-oriented edge list and creates a `UGraph`.
    ///
    /// The first line holds the number of edges `m`, followed by `m` lines each holding
    /// two whitespace-separated vertex tokens. Tokens are opaque strings; vertices are
    /// numbered in order of first appearance. Empty lines are skipped, duplicate edges
    /// collapse, self-loops are rejected.
    pub fn read_edge_list<R: BufRead>(input: R) -> Result<Self, ImportError> {
        let mut lines = input.lines()
            .filter(|l| {
                if let Ok(line) = l {
                    !line.trim().is_empty()
                } else {
                    true
                }
            });
        // <m>
        let m: usize = lines.next()
            .ok_or(ImportError::InputMalformedError)??
            .trim()
            .parse()?;
        let mut graph = UGraph::new();
        for _ in 0..m {
            // <src> <trg>
            let line = lines.next().ok_or(ImportError::InputMalformedError)??;
            let mut s = line.split_whitespace();
            let src = s.next().ok_or(ImportError::InputMalformedError)?;
            let trg = s.next().ok_or(ImportError::InputMalformedError)?;
            if s.next().is_some() { return Err(ImportError::InputMalformedError); }
            if src == trg { return Err(ImportError::SelfLoopError); }
            let src = graph.add_vertex(src);
            let trg = graph.add_vertex(trg);
            graph.add_edge(src, trg);
        }
        Ok(graph)
    }

    /// Writes `self` as an edge list in the format `read_edge_list` accepts.
    pub fn write_edge_list<W: Write>(&self, mut out: W) -> Result<(), io::Error> {
        writeln!(out, "{}", self.num_edges())?;
        for (src, trg) in self.edges() {
            writeln!(out, "{} {}", self.labels[src], self.labels[trg])?;
        }
        Ok(())
    }

}
