//! Vertex reorderings for cache locality and bandwidth reduction.
//!
//! Every function returns a permutation `p` with `p[old] = new`, ready for
//! [`AdjacencyGraph::reorder`]. Breadth-first and Cuthill-McKee orderings
//! require a connected undirected graph: a traversal that runs dry before
//! numbering every vertex is fatal (or `GraphError::Disconnected` from the
//! `try_*` variants).
//!
//! Cuthill-McKee follows the classic queue discipline: vertices are numbered
//! in the order they leave the queue, and the unvisited neighbors of each
//! vertex are enqueued by ascending degree (ties by vertex index).

use std::collections::VecDeque;

use crate::graph_error::{GraphError, fatal};
use crate::topology::adjacency::AdjacencyGraph;

/// Breadth-first numbering from `start_vertex`.
///
/// # Panics
/// Panics if `start_vertex` is out of range or the graph is disconnected.
#[track_caller]
pub fn breadth_first(graph: &AdjacencyGraph, start_vertex: usize) -> Vec<usize> {
    fatal(try_breadth_first(graph, start_vertex))
}

/// Fallible variant of [`breadth_first`].
pub fn try_breadth_first(graph: &AdjacencyGraph, start_vertex: usize) -> Result<Vec<usize>, GraphError> {
    queue_numbering(graph, start_vertex, false)
}

/// Cuthill-McKee numbering.
///
/// With `start_vertex = None` the root is the vertex of smallest degree
/// (lowest index on ties).
///
/// # Panics
/// Panics if the start vertex is out of range, if the auto-selected root has
/// degree 0 in a graph of more than one vertex, or if the graph is
/// disconnected.
#[track_caller]
pub fn cuthill_mckee(graph: &AdjacencyGraph, start_vertex: Option<usize>) -> Vec<usize> {
    fatal(try_cuthill_mckee(graph, start_vertex))
}

/// Fallible variant of [`cuthill_mckee`].
pub fn try_cuthill_mckee(
    graph: &AdjacencyGraph,
    start_vertex: Option<usize>,
) -> Result<Vec<usize>, GraphError> {
    let n = graph.size_vertex();
    let root = match start_vertex {
        Some(v) => v,
        None => {
            if n <= 1 {
                return Ok((0..n).collect());
            }
            let root = (0..n)
                .min_by_key(|&v| (graph.degree(v), v))
                .unwrap_or_default();
            if graph.degree(root) == 0 {
                return Err(GraphError::IsolatedVertex(root));
            }
            root
        }
    };
    queue_numbering(graph, root, true)
}

/// Reverse Cuthill-McKee: the Cuthill-McKee numbering read backwards.
///
/// # Panics
/// Same conditions as [`cuthill_mckee`].
#[track_caller]
pub fn reverse_cuthill_mckee(graph: &AdjacencyGraph, start_vertex: Option<usize>) -> Vec<usize> {
    fatal(try_reverse_cuthill_mckee(graph, start_vertex))
}

/// Fallible variant of [`reverse_cuthill_mckee`].
pub fn try_reverse_cuthill_mckee(
    graph: &AdjacencyGraph,
    start_vertex: Option<usize>,
) -> Result<Vec<usize>, GraphError> {
    let n = graph.size_vertex();
    let mut perm = try_cuthill_mckee(graph, start_vertex)?;
    for p in &mut perm {
        *p = n - 1 - *p;
    }
    Ok(perm)
}

fn queue_numbering(
    graph: &AdjacencyGraph,
    root: usize,
    by_degree: bool,
) -> Result<Vec<usize>, GraphError> {
    let n = graph.size_vertex();
    if root >= n {
        return Err(GraphError::VertexOutOfRange { vertex: root, len: n });
    }
    let mut perm = vec![0; n];
    let mut seen = vec![false; n];
    let mut queue = VecDeque::with_capacity(n);
    let mut found = Vec::new();
    let mut next = 0;

    seen[root] = true;
    queue.push_back(root);
    while let Some(v) = queue.pop_front() {
        perm[v] = next;
        next += 1;

        found.clear();
        found.extend(graph.neighbors(v).iter().copied().filter(|&u| !seen[u]));
        for &u in &found {
            seen[u] = true;
        }
        if by_degree {
            // stable: equal degrees keep ascending index order
            found.sort_by_key(|&u| graph.degree(u));
        }
        queue.extend(found.iter().copied());
    }

    if next < n {
        return Err(GraphError::Disconnected {
            visited: next,
            total: n,
        });
    }
    Ok(perm)
}

/// Greedy coloring in vertex order; colors start at 1.
///
/// Each vertex receives the smallest positive color not used by an already
/// colored neighbor, i.e. the first gap in the sorted neighbor colors, or
/// one past their maximum. The result is a proper coloring, not necessarily
/// a minimum one. Works on any graph, connected or not.
pub fn greedy_coloring(graph: &AdjacencyGraph) -> Vec<usize> {
    let n = graph.size_vertex();
    let mut color = vec![0; n];
    let mut taken = Vec::new();
    for v in 0..n {
        taken.clear();
        taken.extend(
            graph
                .neighbors(v)
                .iter()
                .map(|&u| color[u])
                .filter(|&c| c > 0),
        );
        taken.sort_unstable();
        taken.dedup();
        let mut c = 1;
        for &t in &taken {
            if t == c {
                c += 1;
            } else if t > c {
                break;
            }
        }
        color[v] = c;
    }
    color
}

/// Multicolor ordering: vertices grouped by ascending greedy color, then by
/// ascending index within a color.
pub fn greedy_multicoloring(graph: &AdjacencyGraph) -> Vec<usize> {
    let color = greedy_coloring(graph);
    let num_colors = color.iter().copied().max().unwrap_or(0);
    // counting sort over colors 1..=num_colors
    let mut start = vec![0; num_colors + 2];
    for &c in &color {
        start[c + 1] += 1;
    }
    for c in 1..start.len() {
        start[c] += start[c - 1];
    }
    let mut perm = vec![0; color.len()];
    for (v, &c) in color.iter().enumerate() {
        perm[v] = start[c];
        start[c] += 1;
    }
    perm
}

/// Largest `|u - v|` over stored edges; 0 for edgeless graphs.
pub fn bandwidth(graph: &AdjacencyGraph) -> usize {
    graph
        .iter()
        .enumerate()
        .filter_map(|(v, nbrs)| {
            let lo = nbrs.first()?;
            let hi = nbrs.last()?;
            Some(v.abs_diff(*lo).max(v.abs_diff(*hi)))
        })
        .max()
        .unwrap_or(0)
}
