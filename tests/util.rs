#![allow(dead_code)]
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use sparse_adjacency::{AdjacencyGraph, AdjacencySubgraph};

/// Random simple undirected graph on `n` vertices with up to `m` edges.
/// Self-loop draws are skipped; duplicates collapse.
pub fn random_graph(n: usize, m: usize, seed: u64) -> AdjacencyGraph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut g = AdjacencyGraph::with_vertices(n);
    for _ in 0..m {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a != b {
            g.insert_pair(a, b);
        }
    }
    g
}

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation<T: Ord + Copy + std::fmt::Debug>(got: &[T], want: &[T]) {
    let mut a = got.to_vec();
    a.sort_unstable();
    let mut b = want.to_vec();
    b.sort_unstable();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}

/// Assert the primary vertices of `parts` cover `0..n` exactly once.
pub fn assert_disjoint_cover(parts: &[AdjacencySubgraph], n: usize) {
    let primary: Vec<usize> = parts.iter().flat_map(|p| p.primary_vertices()).collect();
    let want: Vec<usize> = (0..n).collect();
    assert_permutation(&primary, &want);
}
