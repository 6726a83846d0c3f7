//! GraphError: unified error type for sparse-adjacency public APIs
//!
//! Every fatal operation in this crate comes in two flavours: the primary
//! method panics with the message of one of these variants (precondition
//! violations are programmer errors), while its `try_*` twin hands the same
//! variant back to the caller. Expected negative outcomes such as "edge
//! already present" or "vertex not found" are never errors; they surface as
//! `bool` or `Option`.

use thiserror::Error;

/// Unified error type for graph, subgraph, ordering and partitioning routines.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge connected a vertex to itself.
    #[error("self-loop on vertex {0} is not allowed")]
    SelfLoop(usize),
    /// A vertex index was outside `[0, len)`.
    #[error("vertex {vertex} out of range for graph with {len} vertices")]
    VertexOutOfRange { vertex: usize, len: usize },
    /// A permutation was not a bijection on `[0, V)`.
    #[error("invalid permutation: {0}")]
    InvalidPermutation(String),
    /// A seed list named the same vertex twice.
    #[error("duplicate seed vertex {0}")]
    DuplicateSeed(usize),
    /// A traversal ran out of frontier before visiting every vertex.
    #[error("graph is disconnected: visited {visited} of {total} vertices")]
    Disconnected { visited: usize, total: usize },
    /// A zero-degree vertex was found where a connected graph is required.
    #[error("vertex {0} has degree 0; graph is disjoint")]
    IsolatedVertex(usize),
    /// Partitioning was asked for zero parts.
    #[error("number of partitions must be positive")]
    ZeroPartitions,
    /// A subgraph operation was given a graph it was not extracted from.
    #[error("subgraph does not recognize the supplied parent graph")]
    ParentMismatch,
    /// A structural invariant of the CSR layout is broken.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

/// Unwraps a fallible graph operation, panicking with the error message.
///
/// Used by the panicking front-ends of the `try_*` functions.
#[inline]
#[track_caller]
pub(crate) fn fatal<T>(res: Result<T, GraphError>) -> T {
    match res {
        Ok(v) => v,
        Err(e) => panic!("{e}"),
    }
}
