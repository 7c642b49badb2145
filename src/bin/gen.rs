//! Binary that reads a vertex count and an edge count from standard in (one integer per
//! line) and writes a random connected edge list to standard out, for feeding the
//! solver binaries.

use std::error;
use std::io::{self, BufRead};

use rand::thread_rng;

use min_vertex_cover::error::ImportError;
use min_vertex_cover::generator::random_connected_graph;

pub fn main() -> Result<(), Box<dyn error::Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let vertex_count: usize = lines.next()
        .ok_or(ImportError::InputMalformedError)??
        .trim()
        .parse()
        .map_err(ImportError::BadIntError)?;
    let edge_count: usize = lines.next()
        .ok_or(ImportError::InputMalformedError)??
        .trim()
        .parse()
        .map_err(ImportError::BadIntError)?;

    let graph = random_connected_graph(&mut thread_rng(), vertex_count, edge_count);
    let stdout = io::stdout();
    graph.write_edge_list(stdout.lock())?;
    Ok(())
}
