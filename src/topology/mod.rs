//! Graph storage.
//!
//! - [`direction`]: compile-time edge direction markers
//! - [`edge`]: validated vertex pairs
//! - [`adjacency`]: the CSR [`AdjacencyGraph`]
//! - [`subgraph`]: halo-augmented [`AdjacencySubgraph`]s of a parent graph
//! - [`fingerprint`] and [`permutation`]: small helpers shared by the above

pub mod adjacency;
pub mod direction;
pub mod edge;
pub mod fingerprint;
pub mod permutation;
pub mod subgraph;

pub use adjacency::AdjacencyGraph;
pub use direction::{Directed, Direction, Undirected};
pub use edge::Edge;
pub use fingerprint::GraphFingerprint;
pub use subgraph::{AdjacencySubgraph, HaloWorkspace, NO_MAPPING, UNSET_LEVEL};
