//! Edge: a validated vertex pair in storage orientation.
//!
//! An [`Edge`] never connects a vertex to itself. Its endpoints are oriented
//! on construction by the direction tag `D`: undirected edges are normalized
//! to `(min, max)`, so callers must not rely on the input order surviving.

use std::fmt;
use std::marker::PhantomData;

use super::direction::{Direction, Undirected};
use crate::graph_error::GraphError;

/// A pair of distinct vertex indices.
///
/// # Type Parameters
/// - `D`: [`Undirected`] (default) or [`Directed`](super::direction::Directed).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge<D: Direction = Undirected> {
    lower: usize,
    upper: usize,
    _dir: PhantomData<D>,
}

impl<D: Direction> Edge<D> {
    /// Creates an edge between `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if `a == b`; self-loops are not representable.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sparse_adjacency::topology::edge::Edge;
    /// let e: Edge = Edge::new(4, 1);
    /// assert_eq!((e.lower(), e.upper()), (1, 4));
    /// ```
    #[inline]
    #[track_caller]
    pub fn new(a: usize, b: usize) -> Self {
        crate::graph_error::fatal(Self::try_new(a, b))
    }

    /// Fallible variant of [`Edge::new`].
    #[inline]
    pub fn try_new(a: usize, b: usize) -> Result<Self, GraphError> {
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        let (lower, upper) = D::orient(a, b);
        Ok(Edge {
            lower,
            upper,
            _dir: PhantomData,
        })
    }

    /// The endpoint whose adjacency slice stores the other one.
    ///
    /// For undirected edges this is the smaller index, for directed edges the
    /// source.
    #[inline]
    pub const fn lower(&self) -> usize {
        self.lower
    }

    /// The endpoint stored inside [`lower`](Self::lower)'s slice.
    #[inline]
    pub const fn upper(&self) -> usize {
        self.upper
    }

    /// Largest endpoint; `max_vertex() + 1` vertices are needed to hold the edge.
    #[inline]
    pub fn max_vertex(&self) -> usize {
        self.lower.max(self.upper)
    }
}

impl<D: Direction> fmt::Debug for Edge<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if D::DIRECTED { "->" } else { "--" };
        write!(f, "Edge({} {arrow} {})", self.lower, self.upper)
    }
}

impl<D: Direction> TryFrom<(usize, usize)> for Edge<D> {
    type Error = GraphError;

    fn try_from((a, b): (usize, usize)) -> Result<Self, Self::Error> {
        Edge::try_new(a, b)
    }
}

impl<D: Direction> From<Edge<D>> for (usize, usize) {
    fn from(e: Edge<D>) -> Self {
        (e.lower, e.upper)
    }
}
