#![cfg_attr(docsrs, feature(doc_cfg))]
//! # sparse-adjacency
//!
//! sparse-adjacency is an in-memory engine for sparse connectivity graphs whose
//! vertex set is the dense range `[0, V)`. It targets the pre-processing stage of
//! sparse linear solvers and domain decomposition: cache-friendly vertex
//! orderings and balanced, halo-augmented sub-partitions of a global graph.
//!
//! ## Features
//! - [`AdjacencyGraph`]: compressed (CSR) adjacency with in-place insert, resize,
//!   erase and reorder, directed or undirected at the type level
//! - [`AdjacencySubgraph`]: a subset of a parent graph plus halo levels, with a
//!   reusable [`HaloWorkspace`] for cheap halo growth
//! - Reorderings: breadth-first, (reverse) Cuthill-McKee, greedy multicoloring
//! - Partitioning: recursive bisection, multinode level-set refinement, and the
//!   [`partitioning::partition`] driver
//!
//! ## Errors
//!
//! Precondition violations panic with a [`GraphError`] message. Every panicking
//! entry point has a `try_*` twin that returns the error instead.
//!
//! ## Invariant checks
//!
//! Mutations re-validate structural invariants in debug builds, or in release
//! builds with the `strict-invariants` / `check-invariants` features. See
//! [`debug_invariants`].
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger.

pub mod algs;
pub mod debug_invariants;
pub mod generators;
pub mod graph_error;
pub mod partitioning;
pub mod topology;

pub use debug_invariants::DebugInvariants;
pub use graph_error::GraphError;
pub use topology::{
    AdjacencyGraph, AdjacencySubgraph, Directed, Direction, Edge, HaloWorkspace, Undirected,
};

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::reorder::{
        breadth_first, cuthill_mckee, greedy_coloring, greedy_multicoloring,
        reverse_cuthill_mckee,
    };
    pub use crate::algs::traversal::{eccentricity, level_expansion, level_traversal};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::graph_error::GraphError;
    pub use crate::partitioning::{
        PartitionerConfig, multinode_level_set_expansion, partition, recursive_graph_bisection,
    };
    pub use crate::topology::adjacency::AdjacencyGraph;
    pub use crate::topology::direction::{Directed, Direction, Undirected};
    pub use crate::topology::edge::Edge;
    pub use crate::topology::permutation::invert_permutation;
    pub use crate::topology::subgraph::{AdjacencySubgraph, HaloWorkspace};
}
