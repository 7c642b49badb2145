//! Shared utilities on computed vertex covers: validation and text output.

use fxhash::FxHashSet;
use std::io::Write;
use std::io;
use crate::graph::UGraph;

impl UGraph {

    /// Checks if `cover` touches every edge of `self`.
    /// Deterministic and side effect free, so callers may re-check at will.
    pub fn is_cover(&self, cover: &FxHashSet<usize>) -> bool {
        self.edges().all(|(src, trg)| cover.contains(&src) || cover.contains(&trg))
    }

    /// Writes the labels of the nodes in `cover` to a `Write` type, one per line,
    /// sorted lexicographically.
    pub fn write_cover<W: Write>(&self, cover: &FxHashSet<usize>, mut out: W) -> Result<(), io::Error> {
        let mut labels: Vec<&str> = cover.iter().map(|node| self.label(*node)).collect();
        labels.sort_unstable();
        for label in labels {
            writeln!(out, "{}", label)?;
        }
        Ok(())
    }

}
