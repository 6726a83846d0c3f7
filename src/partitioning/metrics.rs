//! Partition quality metrics.
//!
//! All metrics look at the primary vertices (level 0) of each part only;
//! halo copies are ignored. Intended for debugging, tests and logging.

use super::PartitionId;
use crate::topology::adjacency::AdjacencyGraph;
use crate::topology::subgraph::AdjacencySubgraph;

/// Owning part of every parent vertex, or `None` if no part claims it as a
/// primary vertex. If two parts claim the same vertex the later one wins.
pub fn owner_map(n: usize, parts: &[AdjacencySubgraph]) -> Vec<Option<PartitionId>> {
    let mut owner = vec![None; n];
    for (p, part) in parts.iter().enumerate() {
        for g in part.primary_vertices() {
            if let Some(slot) = owner.get_mut(g) {
                *slot = Some(p);
            }
        }
    }
    owner
}

/// Number of parent edges whose endpoints have different owners (O(E)).
///
/// An unowned endpoint counts as its own part.
pub fn edge_cut(graph: &AdjacencyGraph, parts: &[AdjacencySubgraph]) -> usize {
    let owner = owner_map(graph.size_vertex(), parts);
    graph
        .edges()
        .filter(|e| owner[e.lower()] != owner[e.upper()])
        .count()
}

/// Primary vertex count per part.
pub fn part_sizes(parts: &[AdjacencySubgraph]) -> Vec<usize> {
    parts.iter().map(|p| p.primary_vertices().count()).collect()
}

/// Halo vertex count per part.
pub fn halo_sizes(parts: &[AdjacencySubgraph]) -> Vec<usize> {
    parts
        .iter()
        .zip(part_sizes(parts))
        .map(|(p, primary)| p.size_vertex() - primary)
        .collect()
}

/// Largest part size over the mean part size; `1.0` is perfect balance.
///
/// Returns `1.0` when there are no parts or no primary vertices.
pub fn imbalance(parts: &[AdjacencySubgraph]) -> f64 {
    let sizes = part_sizes(parts);
    let total: usize = sizes.iter().sum();
    if total == 0 {
        return 1.0;
    }
    let max = sizes.iter().copied().max().unwrap_or(0);
    max as f64 * sizes.len() as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::structured_grid;

    fn halves() -> (AdjacencyGraph, Vec<AdjacencySubgraph>) {
        let g = structured_grid(2, 2);
        let parts = vec![
            AdjacencySubgraph::new(&g, &[0, 1], 1),
            AdjacencySubgraph::new(&g, &[2, 3], 1),
        ];
        (g, parts)
    }

    #[test]
    fn square_split_in_rows() {
        let (g, parts) = halves();
        assert_eq!(owner_map(4, &parts), vec![Some(0), Some(0), Some(1), Some(1)]);
        assert_eq!(edge_cut(&g, &parts), 2);
        assert_eq!(part_sizes(&parts), vec![2, 2]);
        assert_eq!(halo_sizes(&parts), vec![2, 2]);
        assert!((imbalance(&parts) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn unowned_vertices_are_cut() {
        let g = structured_grid(2, 2);
        let parts = vec![AdjacencySubgraph::new(&g, &[0], 0)];
        assert_eq!(owner_map(4, &parts), vec![Some(0), None, None, None]);
        assert_eq!(edge_cut(&g, &parts), 2);
    }

    #[test]
    fn imbalance_of_uneven_parts() {
        let g = structured_grid(3, 1);
        let parts = vec![
            AdjacencySubgraph::new(&g, &[0, 1], 0),
            AdjacencySubgraph::new(&g, &[2], 0),
        ];
        // max 2 over mean 1.5
        assert!((imbalance(&parts) - 4.0 / 3.0).abs() < 1e-12);
        assert_eq!(imbalance(&[]), 1.0);
    }
}
