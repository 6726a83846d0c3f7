//! Breadth-first graph metrics used by the partitioners.
//!
//! * [`level_traversal`]: hop distance from one start vertex;
//! * [`level_expansion`]: simultaneous multi-source BFS, coloring each vertex
//!   with its nearest seed;
//! * [`pseudo_peripheral_vertex`]: George–Liu search for a far-apart root;
//! * [`eccentricity`]: all-pairs hop distances.
//!
//! All of them treat unreachable vertices explicitly (`None`) instead of
//! failing, so they can be run on disconnected subgraphs.

use std::collections::VecDeque;

use crate::graph_error::{GraphError, fatal};
use crate::topology::adjacency::AdjacencyGraph;
use crate::topology::direction::Direction;

/// BFS distance of every vertex from `start`; `None` if unreachable.
///
/// # Panics
/// Panics if `start` is out of range.
#[track_caller]
pub fn level_traversal<D: Direction>(graph: &AdjacencyGraph<D>, start: usize) -> Vec<Option<usize>> {
    fatal(try_level_traversal(graph, start))
}

/// Fallible variant of [`level_traversal`].
pub fn try_level_traversal<D: Direction>(
    graph: &AdjacencyGraph<D>,
    start: usize,
) -> Result<Vec<Option<usize>>, GraphError> {
    let n = graph.size_vertex();
    if start >= n {
        return Err(GraphError::VertexOutOfRange { vertex: start, len: n });
    }
    let mut level = vec![None; n];
    let mut queue = VecDeque::with_capacity(n);
    level[start] = Some(0);
    queue.push_back(start);
    while let Some(v) = queue.pop_front() {
        let next = level[v].map(|l| l + 1);
        for &u in graph.neighbors(v) {
            if level[u].is_none() {
                level[u] = next;
                queue.push_back(u);
            }
        }
    }
    Ok(level)
}

/// Multi-source BFS: `color[v] = Some(i)` if `seeds[i]` is the seed that
/// reaches `v` first. Seeds start in the order given and ties go to the
/// earlier frontier entry. A repeated seed keeps its first index.
///
/// # Panics
/// Panics if a seed is out of range.
#[track_caller]
pub fn level_expansion<D: Direction>(graph: &AdjacencyGraph<D>, seeds: &[usize]) -> Vec<Option<usize>> {
    fatal(try_level_expansion(graph, seeds))
}

/// Fallible variant of [`level_expansion`].
pub fn try_level_expansion<D: Direction>(
    graph: &AdjacencyGraph<D>,
    seeds: &[usize],
) -> Result<Vec<Option<usize>>, GraphError> {
    let n = graph.size_vertex();
    let mut color = vec![None; n];
    let mut queue = VecDeque::with_capacity(n);
    for (i, &s) in seeds.iter().enumerate() {
        if s >= n {
            return Err(GraphError::VertexOutOfRange { vertex: s, len: n });
        }
        if color[s].is_none() {
            color[s] = Some(i);
            queue.push_back(s);
        }
    }
    while let Some(v) = queue.pop_front() {
        let c = color[v];
        for &u in graph.neighbors(v) {
            if color[u].is_none() {
                color[u] = c;
                queue.push_back(u);
            }
        }
    }
    Ok(color)
}

/// Picks a vertex of (heuristically) maximal eccentricity in the component
/// of vertex 0.
///
/// Starting from vertex 0, repeatedly re-roots at the minimum-degree vertex
/// of the deepest BFS level while the number of levels keeps growing.
/// Returns `None` for an empty graph.
pub fn pseudo_peripheral_vertex<D: Direction>(graph: &AdjacencyGraph<D>) -> Option<usize> {
    if graph.is_empty() {
        return None;
    }
    let mut root = 0;
    let mut depth = 0;
    loop {
        let levels = level_traversal(graph, root);
        let ecc = levels.iter().flatten().copied().max().unwrap_or(0);
        if depth > 0 && ecc <= depth {
            return Some(root);
        }
        let candidate = levels
            .iter()
            .enumerate()
            .filter(|&(_, l)| *l == Some(ecc))
            .map(|(v, _)| v)
            .min_by_key(|&v| (graph.degree(v), v))
            .unwrap_or(root);
        if ecc == 0 || candidate == root {
            return Some(root);
        }
        depth = ecc;
        root = candidate;
    }
}

/// `true` if every vertex is reachable from vertex 0. Empty graphs count as
/// connected.
pub fn is_connected<D: Direction>(graph: &AdjacencyGraph<D>) -> bool {
    graph.is_empty() || level_traversal(graph, 0).iter().all(Option::is_some)
}

/// Dense all-pairs hop distances.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EccentricityMatrix {
    n: usize,
    dist: Vec<Option<usize>>,
}

impl EccentricityMatrix {
    /// Number of vertices covered.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Hop distance from `a` to `b`; `None` if `b` is unreachable from `a`.
    ///
    /// # Panics
    /// Panics if either vertex is out of range.
    pub fn distance(&self, a: usize, b: usize) -> Option<usize> {
        assert!(a < self.n && b < self.n, "vertex pair ({a}, {b}) out of range");
        self.dist[a * self.n + b]
    }

    /// Largest finite distance from `v` to any vertex in its component.
    pub fn max_distance_from(&self, v: usize) -> usize {
        self.dist[v * self.n..(v + 1) * self.n]
            .iter()
            .flatten()
            .copied()
            .max()
            .unwrap_or(0)
    }
}

/// Shortest-path hop distance between every pair of vertices, by one BFS
/// per vertex. O(V·(V+E)) time and O(V²) memory: meant for partition-sized
/// graphs.
pub fn eccentricity<D: Direction>(graph: &AdjacencyGraph<D>) -> EccentricityMatrix {
    let n = graph.size_vertex();
    let mut dist = Vec::with_capacity(n * n);
    for v in 0..n {
        dist.extend(level_traversal(graph, v));
    }
    EccentricityMatrix { n, dist }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{path, structured_grid};
    use crate::topology::direction::Undirected;

    #[test]
    fn levels_on_grid() {
        let g = structured_grid(3, 3);
        let lv = level_traversal(&g, 0);
        let lv: Vec<usize> = lv.into_iter().map(Option::unwrap).collect();
        assert_eq!(lv, vec![0, 1, 2, 1, 2, 3, 2, 3, 4]);
    }

    #[test]
    fn levels_mark_unreachable() {
        let mut g = path(3);
        g.resize(5);
        let lv = level_traversal(&g, 1);
        assert_eq!(lv, vec![Some(1), Some(0), Some(1), None, None]);
        assert!(!is_connected(&g));
        assert!(is_connected(&path(3)));
        assert!(try_level_traversal(&g, 5).is_err());
    }

    #[test]
    fn expansion_colors_by_nearest_seed() {
        let g = path(7);
        let c = level_expansion(&g, &[0, 6]);
        let c: Vec<usize> = c.into_iter().map(Option::unwrap).collect();
        // vertex 3 is equidistant; seed 0's frontier is served first
        assert_eq!(c, vec![0, 0, 0, 0, 1, 1, 1]);
    }

    #[test]
    fn expansion_ignores_repeated_seed() {
        let g = path(3);
        let c = level_expansion(&g, &[1, 1]);
        assert_eq!(c, vec![Some(0), Some(0), Some(0)]);
    }

    #[test]
    fn pseudo_peripheral_on_path_and_grid() {
        let p = path(6);
        let r = pseudo_peripheral_vertex(&p).unwrap();
        assert!(r == 0 || r == 5);
        assert_eq!(pseudo_peripheral_vertex(&structured_grid(3, 3)), Some(8));
        assert_eq!(pseudo_peripheral_vertex(&AdjacencyGraph::<Undirected>::new()), None);
        assert_eq!(pseudo_peripheral_vertex(&path(1)), Some(0));
    }

    #[test]
    fn eccentricity_matrix() {
        let g = structured_grid(2, 3);
        let e = eccentricity(&g);
        assert_eq!(e.size(), 6);
        assert_eq!(e.distance(0, 5), Some(3));
        assert_eq!(e.distance(5, 0), Some(3));
        assert_eq!(e.distance(2, 2), Some(0));
        assert_eq!(e.max_distance_from(2), 2);

        let mut h = path(2);
        h.resize(3);
        let e = eccentricity(&h);
        assert_eq!(e.distance(0, 2), None);
        assert_eq!(e.max_distance_from(0), 1);
    }
}
