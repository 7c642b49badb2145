//! Binary that takes as standard in a graph as an edge list, computes a minimum vertex
//! cover and writes the sorted solution with the elapsed time to standard out. An
//! optional first argument names a file to write a DOT rendering of the covered graph to.

use std::env;
use std::error;
use std::fs::File;
use std::io::{self, Write};
use std::time::Instant;

use min_vertex_cover::{graph::UGraph, error::CoverError};

pub fn main() -> Result<(), Box<dyn error::Error>> {
    let stdin = io::stdin();
    let stdin = stdin.lock();
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    let graph = UGraph::read_edge_list(stdin)?;

    let start = Instant::now();
    let cover = graph.exact_cover();
    let elapsed = start.elapsed();

    // Validate
    if !graph.is_cover(&cover) {
        return Err(Box::new(CoverError::InvalidCover));
    }

    graph.write_cover(&cover, &mut stdout)?;
    writeln!(stdout, "Time taken: {} seconds", elapsed.as_secs_f64())?;

    if let Some(path) = env::args().nth(1) {
        graph.write_dot(&cover, File::create(path)?)?;
    }
    Ok(())
}
