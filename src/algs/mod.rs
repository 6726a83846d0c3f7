//! Re-export public algorithms.

pub mod reorder;
pub mod traversal;

pub use reorder::{
    bandwidth, breadth_first, cuthill_mckee, greedy_coloring, greedy_multicoloring,
    reverse_cuthill_mckee,
};
pub use traversal::{
    EccentricityMatrix, eccentricity, level_expansion, level_traversal, pseudo_peripheral_vertex,
};
