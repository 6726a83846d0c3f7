//! Small deterministic graph generators for tests, benchmarks and examples.
//!
//! Vertex numbering is row-major for grids: vertex `(i, j)` is `j * nx + i`.

use crate::topology::adjacency::AdjacencyGraph;
use crate::topology::edge::Edge;

/// `nx × ny` five-point-stencil grid (4-neighbor connectivity).
pub fn structured_grid(nx: usize, ny: usize) -> AdjacencyGraph {
    let id = |i: usize, j: usize| j * nx + i;
    let mut edges = Vec::with_capacity(2 * nx * ny);
    for j in 0..ny {
        for i in 0..nx {
            if i + 1 < nx {
                edges.push(Edge::new(id(i, j), id(i + 1, j)));
            }
            if j + 1 < ny {
                edges.push(Edge::new(id(i, j), id(i, j + 1)));
            }
        }
    }
    let mut g = AdjacencyGraph::from_edges(edges);
    // a 1×1 grid has no edges but still one vertex
    g.resize(nx * ny);
    g
}

/// Path `0 - 1 - ... - (n-1)`.
pub fn path(n: usize) -> AdjacencyGraph {
    let mut g = AdjacencyGraph::from_edges((1..n).map(|v| Edge::new(v - 1, v)));
    g.resize(n);
    g
}

/// Cycle on `n >= 3` vertices.
pub fn cycle(n: usize) -> AdjacencyGraph {
    let mut g = path(n);
    if n >= 3 {
        g.insert(Edge::new(n - 1, 0));
    }
    g
}

/// Hand-built 15-vertex, 21-edge planar graph used as a halo test fixture.
/// Seeds `{0, 6, 8}` grow halos of exactly three vertices per level for the
/// first three levels.
pub fn halo_fixture_15() -> AdjacencyGraph {
    AdjacencyGraph::from([
        (0, 1),
        (0, 6),
        (1, 2),
        (1, 7),
        (2, 3),
        (2, 12),
        (3, 4),
        (3, 11),
        (4, 5),
        (5, 9),
        (5, 10),
        (6, 7),
        (7, 8),
        (7, 12),
        (8, 14),
        (9, 10),
        (9, 13),
        (10, 11),
        (11, 12),
        (12, 13),
        (13, 14),
    ])
}
