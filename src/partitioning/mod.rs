//! Entry-point for native graph partitioning.
//!
//! [`partition`] chains the building blocks: recursive bisection into
//! `n_parts`, multinode level-set refinement, then halo growth around every
//! part.

pub mod bisection;
pub mod level_set;
pub mod metrics;

pub use self::bisection::{recursive_graph_bisection, try_recursive_graph_bisection};
pub use self::level_set::{multinode_level_set_expansion, try_multinode_level_set_expansion};
pub use self::metrics::*;

use serde::{Deserialize, Serialize};

use crate::graph_error::{GraphError, fatal};
use crate::topology::adjacency::AdjacencyGraph;
use crate::topology::subgraph::{AdjacencySubgraph, HaloWorkspace};

pub type PartitionId = usize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionerConfig {
    pub n_parts: usize,
    /// Upper bound on level-set refinement iterations.
    pub max_iters: usize,
    /// Halo depth grown around every final part.
    pub halo_levels: usize,
}

impl Default for PartitionerConfig {
    fn default() -> Self {
        Self {
            n_parts: 2,
            max_iters: 20,
            halo_levels: 1,
        }
    }
}

/// Partitions `graph` into `cfg.n_parts` halo-augmented parts.
///
/// # Panics
/// Panics if `cfg.n_parts == 0`.
#[track_caller]
pub fn partition(graph: &AdjacencyGraph, cfg: &PartitionerConfig) -> Vec<AdjacencySubgraph> {
    fatal(try_partition(graph, cfg))
}

/// Fallible variant of [`partition`].
pub fn try_partition(
    graph: &AdjacencyGraph,
    cfg: &PartitionerConfig,
) -> Result<Vec<AdjacencySubgraph>, GraphError> {
    let mut parts = try_recursive_graph_bisection(graph, cfg.n_parts)?;
    let iters = try_multinode_level_set_expansion(graph, cfg.max_iters, &mut parts)?;

    let mut ws = HaloWorkspace::with_vertices(graph.size_vertex());
    for part in &mut parts {
        part.try_update_levels(graph, cfg.halo_levels, Some(&mut ws))?;
    }
    log::debug!(
        "partitioned {} vertices into {} parts after {iters} refinement iterations: cut {}, imbalance {:.3}",
        graph.size_vertex(),
        parts.len(),
        edge_cut(graph, &parts),
        imbalance(&parts)
    );
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::structured_grid;

    #[test]
    fn default_config() {
        let cfg = PartitionerConfig::default();
        assert_eq!(cfg.n_parts, 2);
        assert_eq!(cfg.max_iters, 20);
        assert_eq!(cfg.halo_levels, 1);
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let cfg: PartitionerConfig = serde_json::from_str(r#"{"n_parts": 4}"#).unwrap();
        assert_eq!(
            cfg,
            PartitionerConfig {
                n_parts: 4,
                ..PartitionerConfig::default()
            }
        );
    }

    #[test]
    fn grid_4x4_into_four_parts() {
        let g = structured_grid(4, 4);
        let cfg = PartitionerConfig {
            n_parts: 4,
            ..Default::default()
        };
        let parts = partition(&g, &cfg);
        assert_eq!(part_sizes(&parts), vec![4; 4]);
        assert_eq!(edge_cut(&g, &parts), 12);
        for p in &parts {
            assert_eq!(p.max_level(), 1);
            assert!(p.is_parent(&g));
        }
        let primary: Vec<Vec<usize>> = parts.iter().map(|p| p.primary_vertices().collect()).collect();
        assert_eq!(primary[0], vec![12, 13, 14, 15]);
        // 12..=15 border 8..=11
        assert_eq!(&parts[0].local_to_global()[4..], &[8, 9, 10, 11]);
    }

    #[test]
    fn zero_parts_is_fatal() {
        let g = structured_grid(2, 2);
        let cfg = PartitionerConfig {
            n_parts: 0,
            ..Default::default()
        };
        assert_eq!(try_partition(&g, &cfg), Err(GraphError::ZeroPartitions));
    }
}
