//! Invariant checking for the CSR containers.
//!
//! Mutating operations call [`debug_invariants!`](crate::debug_invariants)
//! after they finish; the check compiles away in release builds unless one of
//! the `strict-invariants` / `check-invariants` features is enabled.

use crate::graph_error::GraphError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self);
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), GraphError>;
}

/// Helper macro to run a fallible check and panic on error when invariant
/// checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}

/// Structural checks shared by every offset/adjacency pair:
///
/// * `offset` is empty or starts at 0, is non-decreasing and ends at
///   `adjacency.len()`;
/// * every slice is strictly increasing (sorted, duplicate-free);
/// * every entry is a valid vertex and never the owning vertex itself.
///
/// Symmetry is checked separately because it only applies to undirected
/// storage.
pub(crate) fn check_csr(offset: &[usize], adjacency: &[usize]) -> Result<(), GraphError> {
    if offset.is_empty() {
        return if adjacency.is_empty() {
            Ok(())
        } else {
            Err(GraphError::InvariantViolation(format!(
                "{} adjacency entries without offsets",
                adjacency.len()
            )))
        };
    }
    if offset[0] != 0 {
        return Err(GraphError::InvariantViolation(format!(
            "offset[0] = {}, expected 0",
            offset[0]
        )));
    }
    let last = offset[offset.len() - 1];
    if last != adjacency.len() {
        return Err(GraphError::InvariantViolation(format!(
            "offset[V] = {last} but adjacency holds {} entries",
            adjacency.len()
        )));
    }
    let n = offset.len() - 1;
    for v in 0..n {
        let (lo, hi) = (offset[v], offset[v + 1]);
        if lo > hi || hi > adjacency.len() {
            return Err(GraphError::InvariantViolation(format!(
                "bad offsets at vertex {v} ({lo}..{hi} of {})",
                adjacency.len()
            )));
        }
        let slice = &adjacency[lo..hi];
        if let Some(w) = slice.windows(2).find(|w| w[0] >= w[1]) {
            return Err(GraphError::InvariantViolation(format!(
                "neighbors of {v} not strictly increasing at {} -> {}",
                w[0], w[1]
            )));
        }
        for &u in slice {
            if u == v {
                return Err(GraphError::SelfLoop(v));
            }
            if u >= n {
                return Err(GraphError::VertexOutOfRange { vertex: u, len: n });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_layout_is_valid() {
        assert!(check_csr(&[], &[]).is_ok());
        assert!(check_csr(&[0], &[]).is_ok());
    }

    #[test]
    fn detects_unsorted_slice() {
        let err = check_csr(&[0, 2, 3, 4], &[2, 1, 0, 0]).unwrap_err();
        assert!(matches!(err, GraphError::InvariantViolation(_)));
    }

    #[test]
    fn detects_self_loop_and_range() {
        assert_eq!(check_csr(&[0, 1], &[0]), Err(GraphError::SelfLoop(0)));
        assert_eq!(
            check_csr(&[0, 1, 1], &[5]),
            Err(GraphError::VertexOutOfRange { vertex: 5, len: 2 })
        );
    }

    #[test]
    fn detects_non_monotone_offsets() {
        assert!(check_csr(&[0, 5, 3], &[1, 0, 1]).is_err());
    }

    #[test]
    fn detects_dangling_tail() {
        assert!(check_csr(&[0, 1, 1], &[1, 0]).is_err());
    }
}
