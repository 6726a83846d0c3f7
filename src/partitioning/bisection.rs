//! Recursive level-set bisection.
//!
//! Starting from a single part holding the whole graph, the largest part is
//! split `k - 1` times. A split runs a level traversal from a
//! pseudo-peripheral vertex of the part's local graph and cuts at the median
//! level: vertices at or below it stay, the rest (unreached vertices
//! included) form a new part appended at the end.
//!
//! Parts are built without halo and list their vertices in ascending global
//! order.

use std::cmp::Reverse;

use crate::algs::traversal::{level_traversal, pseudo_peripheral_vertex};
use crate::graph_error::{GraphError, fatal};
use crate::topology::adjacency::AdjacencyGraph;
use crate::topology::subgraph::{AdjacencySubgraph, HaloWorkspace};

/// Splits `graph` into `k` parts.
///
/// # Panics
/// Panics if `k == 0`.
#[track_caller]
pub fn recursive_graph_bisection(graph: &AdjacencyGraph, k: usize) -> Vec<AdjacencySubgraph> {
    fatal(try_recursive_graph_bisection(graph, k))
}

/// Fallible variant of [`recursive_graph_bisection`].
pub fn try_recursive_graph_bisection(
    graph: &AdjacencyGraph,
    k: usize,
) -> Result<Vec<AdjacencySubgraph>, GraphError> {
    if k == 0 {
        return Err(GraphError::ZeroPartitions);
    }
    let n = graph.size_vertex();
    let mut ws = HaloWorkspace::with_vertices(n);
    let all: Vec<usize> = (0..n).collect();
    let mut parts = Vec::with_capacity(k);
    parts.push(AdjacencySubgraph::try_new_with(graph, &all, 0, &mut ws)?);

    for _ in 1..k {
        let target = parts
            .iter()
            .enumerate()
            .max_by_key(|&(i, p)| (p.size_vertex(), Reverse(i)))
            .map(|(i, _)| i)
            .unwrap_or(0);
        let (low, high) = split_at_median(&parts[target]);
        log::debug!(
            "bisecting part {target} ({} vertices) into {} + {}",
            parts[target].size_vertex(),
            low.len(),
            high.len()
        );
        parts[target] = AdjacencySubgraph::try_new_with(graph, &low, 0, &mut ws)?;
        parts.push(AdjacencySubgraph::try_new_with(graph, &high, 0, &mut ws)?);
    }
    Ok(parts)
}

/// Global vertices of `part` at or below the median level, and the rest.
fn split_at_median(part: &AdjacencySubgraph) -> (Vec<usize>, Vec<usize>) {
    let local = part.graph();
    let Some(root) = pseudo_peripheral_vertex(local) else {
        return (Vec::new(), Vec::new());
    };
    let levels = level_traversal(local, root);
    let max_level = levels.iter().flatten().copied().max().unwrap_or(0);
    // a two-level part would otherwise keep everything on the low side
    let median = if max_level == 1 { 0 } else { max_level.div_ceil(2) };

    let (mut low, mut high) = (Vec::new(), Vec::new());
    for (v, lvl) in levels.iter().enumerate() {
        let g = part.local_global(v);
        match lvl {
            Some(l) if *l <= median => low.push(g),
            _ => high.push(g),
        }
    }
    low.sort_unstable();
    high.sort_unstable();
    (low, high)
}
