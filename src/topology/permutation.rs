//! Permutation helpers shared by graph and subgraph reordering.
//!
//! A permutation is a `Vec<usize>` with `p[old] = new`. All reorderings in
//! the crate produce and consume this convention.

use crate::graph_error::GraphError;

/// Checks that `perm` is a bijection on `[0, n)`.
///
/// The length and the checksum `Σ p == n(n-1)/2` are tested first (cheap and
/// catches most malformed inputs); a seen-bitmap pass then rejects
/// out-of-range and repeated entries that happen to preserve the sum.
pub fn validate_permutation(perm: &[usize], n: usize) -> Result<(), GraphError> {
    if perm.len() != n {
        return Err(GraphError::InvalidPermutation(format!(
            "length {} does not match {} vertices",
            perm.len(),
            n
        )));
    }
    let expected = n * n.saturating_sub(1) / 2;
    let sum = perm
        .iter()
        .try_fold(0usize, |acc, &p| acc.checked_add(p))
        .ok_or_else(|| GraphError::InvalidPermutation("checksum overflow".into()))?;
    if sum != expected {
        return Err(GraphError::InvalidPermutation(format!(
            "checksum {sum} != {expected}"
        )));
    }
    let mut seen = vec![false; n];
    for (old, &new) in perm.iter().enumerate() {
        if new >= n {
            return Err(GraphError::InvalidPermutation(format!(
                "p[{old}] = {new} out of range"
            )));
        }
        if std::mem::replace(&mut seen[new], true) {
            return Err(GraphError::InvalidPermutation(format!(
                "target {new} assigned twice"
            )));
        }
    }
    Ok(())
}

/// Returns `q` with `q[p[i]] = i`.
///
/// # Panics
/// Panics if `perm` is not a bijection.
pub fn invert_permutation(perm: &[usize]) -> Vec<usize> {
    crate::graph_error::fatal(validate_permutation(perm, perm.len()));
    let mut inv = vec![0; perm.len()];
    for (old, &new) in perm.iter().enumerate() {
        inv[new] = old;
    }
    inv
}

/// Converts a visiting order (`order[k]` = vertex visited `k`-th) into a
/// permutation `p[vertex] = k`.
///
/// Same operation as [`invert_permutation`]; kept separate so call sites
/// read in terms of what they hold.
#[inline]
pub fn order_to_permutation(order: &[usize]) -> Vec<usize> {
    invert_permutation(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bijection() {
        assert!(validate_permutation(&[2, 0, 1], 3).is_ok());
        assert!(validate_permutation(&[], 0).is_ok());
    }

    #[test]
    fn rejects_wrong_length_and_checksum() {
        assert!(validate_permutation(&[0, 1], 3).is_err());
        assert!(validate_permutation(&[0, 0, 1], 3).is_err());
    }

    #[test]
    fn rejects_checksum_preserving_duplicates() {
        // 0 + 2 + 2 + 2 == 0 + 1 + 2 + 3
        let err = validate_permutation(&[0, 2, 2, 2], 4).unwrap_err();
        assert!(matches!(err, GraphError::InvalidPermutation(_)));
    }

    #[test]
    fn inverse_round_trips() {
        let p = vec![3, 0, 2, 1];
        let q = invert_permutation(&p);
        assert_eq!(q, vec![1, 3, 2, 0]);
        assert_eq!(invert_permutation(&q), p);
    }

    #[test]
    fn visiting_order_becomes_permutation() {
        // vertex 2 visited first, then 0, then 1
        assert_eq!(order_to_permutation(&[2, 0, 1]), vec![1, 2, 0]);
    }
}
