//! Multinode level-set expansion: iterative refinement of an existing
//! partition.
//!
//! Every iteration picks a center per part, grows all parts at once from
//! their centers with a multi-source BFS over the parent, and rebuilds each
//! part from the vertices it reached. Refinement stops once the centers no
//! longer move.

use crate::algs::traversal::{level_expansion, level_traversal};
use crate::graph_error::{GraphError, fatal};
use crate::topology::adjacency::AdjacencyGraph;
use crate::topology::subgraph::{AdjacencySubgraph, HaloWorkspace};

use super::metrics::owner_map;

/// Refines `parts` in place for at most `max_iter` iterations and returns
/// the number of iterations performed.
///
/// Rebuilt parts keep their previous halo depth. Empty parts contribute no
/// seed, and vertices that no seed reaches stay with their previous owner.
///
/// # Panics
/// Panics if a part was not extracted from `graph`.
#[track_caller]
pub fn multinode_level_set_expansion(
    graph: &AdjacencyGraph,
    max_iter: usize,
    parts: &mut [AdjacencySubgraph],
) -> usize {
    fatal(try_multinode_level_set_expansion(graph, max_iter, parts))
}

/// Fallible variant of [`multinode_level_set_expansion`].
pub fn try_multinode_level_set_expansion(
    graph: &AdjacencyGraph,
    max_iter: usize,
    parts: &mut [AdjacencySubgraph],
) -> Result<usize, GraphError> {
    if parts.iter().any(|p| !p.is_parent(graph)) {
        return Err(GraphError::ParentMismatch);
    }
    if parts.len() < 2 {
        return Ok(0);
    }

    let n = graph.size_vertex();
    let mut ws = HaloWorkspace::with_vertices(n);
    let mut previous: Option<Vec<Option<usize>>> = None;
    for iter in 0..max_iter {
        let centers: Vec<Option<usize>> = parts.iter().map(part_center).collect();
        if previous.as_ref() == Some(&centers) {
            log::debug!("level-set refinement converged after {iter} iterations");
            return Ok(iter);
        }

        let (active, seeds): (Vec<usize>, Vec<usize>) = centers
            .iter()
            .enumerate()
            .filter_map(|(p, c)| c.map(|c| (p, c)))
            .unzip();
        let color = level_expansion(graph, &seeds);
        let owner = owner_map(n, parts);

        let mut members = vec![Vec::new(); parts.len()];
        for (g, c) in color.iter().enumerate() {
            if let Some(p) = c.map(|c| active[c]).or(owner[g]) {
                members[p].push(g);
            }
        }
        for (part, verts) in parts.iter_mut().zip(&members) {
            let depth = part.max_level();
            *part = AdjacencySubgraph::try_new_with(graph, verts, depth, &mut ws)?;
        }
        log::debug!("level-set iteration {iter}: seeds {seeds:?}");
        previous = Some(centers);
    }
    log::warn!("level-set refinement stopped at max_iter = {max_iter} without converging");
    Ok(max_iter)
}

/// Global index of the primary vertex whose farthest primary vertex is
/// nearest, measured in the part's local graph. Lowest local index wins
/// ties; `None` for a part without primary vertices.
///
/// One BFS per primary vertex, keeping only the current distance row.
fn part_center(part: &AdjacencySubgraph) -> Option<usize> {
    let local = part.graph();
    let primary: Vec<usize> = (0..part.size_vertex())
        .filter(|&v| part.is_local(v))
        .collect();
    primary
        .iter()
        .map(|&v| {
            let dist = level_traversal(local, v);
            let far = primary.iter().filter_map(|&u| dist[u]).max().unwrap_or(0);
            (far, v)
        })
        .min()
        .map(|(_, v)| part.local_global(v))
}
