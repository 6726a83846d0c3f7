//! Approximate structural fingerprint of an adjacency graph.
//!
//! A [`GraphFingerprint`] records vertex count, edge count and the degrees of
//! the first and last vertex. It is O(1) to compute and order-insensitive
//! inside each slice, which makes it a cheap "is this still my parent?" check
//! for [`AdjacencySubgraph`](super::subgraph::AdjacencySubgraph).
//!
//! It is **not** a correctness oracle: structurally different graphs collide
//! whenever those four numbers agree, and that is accepted.

use std::hash::{DefaultHasher, Hash, Hasher};

/// Lossy summary used for parent identity checks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GraphFingerprint {
    pub vertices: usize,
    pub edges: usize,
    pub first_degree: usize,
    pub last_degree: usize,
}

impl GraphFingerprint {
    /// Collapses the fingerprint into a single `u64`.
    pub fn approximate_hash(&self) -> u64 {
        let mut h = DefaultHasher::new();
        self.hash(&mut h);
        h.finish()
    }
}
