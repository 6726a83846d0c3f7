//! Compile-time direction tags for [`AdjacencyGraph`](super::adjacency::AdjacencyGraph).
//!
//! The direction of a graph is fixed for its whole life, so it is carried as a
//! zero-sized type parameter instead of a runtime flag. The insert and lookup
//! paths branch on `D::DIRECTED`, a constant the compiler folds away.

use std::fmt::Debug;
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Directed {}
    impl Sealed for super::Undirected {}
}

/// Marker trait implemented by [`Directed`] and [`Undirected`].
pub trait Direction:
    sealed::Sealed + Copy + Default + Debug + Eq + Ord + Hash + Send + Sync + 'static
{
    /// `true` if edges are stored one way only.
    const DIRECTED: bool;

    /// Orders an endpoint pair for storage.
    ///
    /// Undirected graphs store `(min, max)`; directed graphs keep
    /// `(source, target)` as given.
    fn orient(a: usize, b: usize) -> (usize, usize);

    /// Number of stored adjacency entries per logical edge.
    #[inline]
    fn entries_per_edge() -> usize {
        if Self::DIRECTED { 1 } else { 2 }
    }
}

/// Edges point from source to target; only the source lists the target.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Directed;

/// Edges are symmetric; both endpoints list each other.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Undirected;

impl Direction for Directed {
    const DIRECTED: bool = true;

    #[inline]
    fn orient(a: usize, b: usize) -> (usize, usize) {
        (a, b)
    }
}

impl Direction for Undirected {
    const DIRECTED: bool = false;

    #[inline]
    fn orient(a: usize, b: usize) -> (usize, usize) {
        if a < b { (a, b) } else { (b, a) }
    }
}
