//! Compressed (CSR) adjacency graph over a dense vertex range.
//!
//! An [`AdjacencyGraph`] stores the neighbor sets of vertices `0..V` in two
//! flat arrays:
//!
//! * `offset[v] .. offset[v + 1]` delimits the neighbors of `v`,
//! * `adjacency` holds every neighbor set back to back, each one sorted and
//!   duplicate-free.
//!
//! Undirected graphs store every edge in both endpoints' slices; directed
//! graphs store it in the source's slice only. The direction is the type
//! parameter `D` and cannot change after construction.
//!
//! Single inserts shift the offset array and cost O(V + degree); build in
//! bulk (for example with [`AdjacencyGraph::from_edges`]) and call
//! [`shrink_to_fit`](AdjacencyGraph::shrink_to_fit) afterwards. All
//! accessors return slices borrowed from the graph, so they cannot outlive a
//! subsequent mutation.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Index;

use itertools::Itertools;

use super::direction::{Direction, Undirected};
use super::edge::Edge;
use super::fingerprint::GraphFingerprint;
use super::permutation::validate_permutation;
use crate::debug_invariants::{DebugInvariants, check_csr};
use crate::graph_error::{GraphError, fatal};

/// CSR adjacency graph with compile-time direction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyGraph<D: Direction = Undirected> {
    offset: Vec<usize>,
    adjacency: Vec<usize>,
    _dir: PhantomData<D>,
}

impl<D: Direction> AdjacencyGraph<D> {
    /// An empty graph with zero vertices.
    pub fn new() -> Self {
        Self::default()
    }

    /// A graph of `n` isolated vertices.
    pub fn with_vertices(n: usize) -> Self {
        let mut g = Self::new();
        g.resize(n);
        g
    }

    /// An empty graph with room for `vertices` vertices and `edges` edges.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        let mut g = Self::new();
        g.reserve(vertices, edges);
        g
    }

    /// Builds a graph from an edge list.
    ///
    /// Storage is reserved from the largest vertex index seen, every edge is
    /// inserted (duplicates collapse) and excess capacity is released.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge<D>>,
    {
        let edges: Vec<Edge<D>> = edges.into_iter().collect();
        let n = edges.iter().map(|e| e.max_vertex() + 1).max().unwrap_or(0);
        let mut g = Self::with_capacity(n, edges.len());
        g.resize(n);
        for e in edges {
            g.insert(e);
        }
        g.shrink_to_fit();
        crate::debug_invariants!(g.validate_invariants(), "AdjacencyGraph::from_edges");
        g
    }

    /// Builds a graph from raw `(a, b)` pairs.
    ///
    /// # Panics
    /// Panics on a self-loop pair.
    #[track_caller]
    pub fn from_pairs(pairs: &[(usize, usize)]) -> Self {
        fatal(Self::try_from_pairs(pairs))
    }

    /// Fallible variant of [`from_pairs`](Self::from_pairs).
    pub fn try_from_pairs(pairs: &[(usize, usize)]) -> Result<Self, GraphError> {
        let edges = pairs
            .iter()
            .map(|&(a, b)| Edge::try_new(a, b))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_edges(edges))
    }

    /// Adopts ready-made CSR arrays after validating them.
    ///
    /// Slices must be sorted, duplicate-free, self-loop-free, in range and,
    /// for undirected graphs, symmetric.
    pub fn try_from_csr(offset: Vec<usize>, adjacency: Vec<usize>) -> Result<Self, GraphError> {
        let mut g = Self {
            offset,
            adjacency,
            _dir: PhantomData,
        };
        g.validate_invariants()?;
        if g.offset.len() == 1 {
            g.offset.clear();
        }
        Ok(g)
    }

    /// CSR arrays the caller has built correctly by construction.
    pub(crate) fn from_csr_unchecked(offset: Vec<usize>, adjacency: Vec<usize>) -> Self {
        let mut g = Self {
            offset,
            adjacency,
            _dir: PhantomData,
        };
        if g.offset.len() == 1 {
            g.offset.clear();
        }
        crate::debug_invariants!(g.validate_invariants(), "AdjacencyGraph::from_csr_unchecked");
        g
    }

    // --- sizes ----------------------------------------------------------------

    /// Number of vertices.
    #[inline]
    pub fn size_vertex(&self) -> usize {
        self.offset.len().saturating_sub(1)
    }

    /// Number of logical edges (each undirected edge counts once).
    #[inline]
    pub fn size_edge(&self) -> usize {
        self.adjacency.len() / D::entries_per_edge()
    }

    /// `true` if the graph has no vertices. A graph of isolated vertices is
    /// not empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offset.len() < 2
    }

    /// `true` for [`Directed`](super::direction::Directed) graphs.
    #[inline]
    pub fn is_directed(&self) -> bool {
        D::DIRECTED
    }

    /// Vertex slots available without reallocating the offset array.
    pub fn capacity_vertex(&self) -> usize {
        self.offset.capacity().saturating_sub(1)
    }

    /// Edges storable without reallocating the adjacency array.
    pub fn capacity_edge(&self) -> usize {
        self.adjacency.capacity() / D::entries_per_edge()
    }

    /// Reserves room for `vertices` more vertices and `edges` more edges.
    pub fn reserve(&mut self, vertices: usize, edges: usize) {
        let extra_offsets = if self.offset.is_empty() {
            vertices + 1
        } else {
            vertices
        };
        self.offset.reserve(extra_offsets);
        self.adjacency.reserve(edges * D::entries_per_edge());
    }

    /// Releases excess capacity in both arrays.
    pub fn shrink_to_fit(&mut self) {
        self.offset.shrink_to_fit();
        self.adjacency.shrink_to_fit();
    }

    /// Removes every vertex and edge, keeping capacity.
    pub fn clear(&mut self) {
        self.offset.clear();
        self.adjacency.clear();
    }

    // --- accessors ------------------------------------------------------------

    /// Raw offset array (`V + 1` entries, or none for an empty graph).
    #[inline]
    pub fn offsets(&self) -> &[usize] {
        &self.offset
    }

    /// Raw flattened adjacency array.
    #[inline]
    pub fn adjacency(&self) -> &[usize] {
        &self.adjacency
    }

    /// Sorted neighbors of `v`, or `None` if `v` is out of range.
    #[inline]
    pub fn get(&self, v: usize) -> Option<&[usize]> {
        if v < self.size_vertex() {
            Some(&self.adjacency[self.offset[v]..self.offset[v + 1]])
        } else {
            None
        }
    }

    /// Checked neighbor lookup reporting the offending vertex.
    pub fn try_neighbors(&self, v: usize) -> Result<&[usize], GraphError> {
        self.get(v).ok_or(GraphError::VertexOutOfRange {
            vertex: v,
            len: self.size_vertex(),
        })
    }

    /// Sorted neighbors of `v`.
    ///
    /// # Panics
    /// Panics if `v` is out of range.
    #[inline]
    #[track_caller]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        fatal(self.try_neighbors(v))
    }

    /// Neighbors of the first vertex.
    pub fn front(&self) -> Option<&[usize]> {
        self.get(0)
    }

    /// Neighbors of the last vertex.
    pub fn back(&self) -> Option<&[usize]> {
        self.size_vertex().checked_sub(1).and_then(|v| self.get(v))
    }

    /// Number of stored neighbors of `v`.
    ///
    /// # Panics
    /// Panics if `v` is out of range.
    #[inline]
    #[track_caller]
    pub fn degree(&self, v: usize) -> usize {
        self.neighbors(v).len()
    }

    /// Iterates over every vertex's neighbor slice in vertex order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[usize]> + '_ {
        self.offset
            .windows(2)
            .map(move |w| &self.adjacency[w[0]..w[1]])
    }

    /// Iterates over stored edges. Undirected edges are reported once with
    /// `lower < upper`.
    pub fn edges(&self) -> impl Iterator<Item = Edge<D>> + '_ {
        self.iter().enumerate().flat_map(|(v, nbrs)| {
            nbrs.iter()
                .copied()
                .filter(move |&u| D::DIRECTED || v < u)
                .map(move |u| Edge::new(v, u))
        })
    }

    /// `true` if `edge` is stored. Out-of-range endpoints simply yield
    /// `false`.
    pub fn contains(&self, edge: Edge<D>) -> bool {
        let n = self.size_vertex();
        if edge.lower() >= n || edge.upper() >= n {
            return false;
        }
        self.neighbors(edge.lower())
            .binary_search(&edge.upper())
            .is_ok()
    }

    /// Cheap lossy summary; see [`GraphFingerprint`].
    pub fn fingerprint(&self) -> GraphFingerprint {
        GraphFingerprint {
            vertices: self.size_vertex(),
            edges: self.size_edge(),
            first_degree: self.front().map_or(0, <[usize]>::len),
            last_degree: self.back().map_or(0, <[usize]>::len),
        }
    }

    /// Hash of [`fingerprint`](Self::fingerprint). Collisions between
    /// structurally different graphs are expected.
    pub fn approximate_hash(&self) -> u64 {
        self.fingerprint().approximate_hash()
    }

    // --- mutation -------------------------------------------------------------

    /// Inserts `edge`, growing the vertex range if needed.
    ///
    /// Returns `false` (and changes nothing) if the edge is already present.
    pub fn insert(&mut self, edge: Edge<D>) -> bool {
        let (lo, hi) = (edge.lower(), edge.upper());
        if edge.max_vertex() >= self.size_vertex() {
            self.resize(edge.max_vertex() + 1);
        }

        let start = self.offset[lo];
        let pos = match self.adjacency[start..self.offset[lo + 1]].binary_search(&hi) {
            Ok(_) => return false,
            Err(p) => start + p,
        };
        self.adjacency.insert(pos, hi);
        for o in &mut self.offset[lo + 1..] {
            *o += 1;
        }

        if !D::DIRECTED {
            // mirror entry; offsets past `hi` end up shifted by 2 in total
            let start = self.offset[hi];
            let slot = self.adjacency[start..self.offset[hi + 1]].binary_search(&lo);
            debug_assert!(slot.is_err(), "undirected adjacency must be symmetric");
            let p = slot.unwrap_or_else(|p| p);
            self.adjacency.insert(start + p, lo);
            for o in &mut self.offset[hi + 1..] {
                *o += 1;
            }
        }
        true
    }

    /// Inserts the pair `(a, b)`.
    ///
    /// # Panics
    /// Panics if `a == b`.
    #[track_caller]
    pub fn insert_pair(&mut self, a: usize, b: usize) -> bool {
        self.insert(Edge::new(a, b))
    }

    /// Fallible variant of [`insert_pair`](Self::insert_pair).
    pub fn try_insert_pair(&mut self, a: usize, b: usize) -> Result<bool, GraphError> {
        Ok(self.insert(Edge::try_new(a, b)?))
    }

    /// Sets the vertex count to `n`.
    ///
    /// Growing appends isolated vertices. Shrinking drops vertices `>= n`
    /// and every adjacency entry that references them.
    pub fn resize(&mut self, n: usize) {
        if n == 0 {
            self.clear();
            return;
        }
        if self.offset.is_empty() {
            self.offset.push(0);
        }
        let cur = self.size_vertex();
        if n >= cur {
            let last = self.offset[cur];
            self.offset.resize(n + 1, last);
            return;
        }

        let mut write = 0;
        for v in 0..n {
            let (lo, hi) = (self.offset[v], self.offset[v + 1]);
            // slices are sorted, so surviving neighbors form a prefix
            let keep = self.adjacency[lo..hi].partition_point(|&u| u < n);
            self.adjacency.copy_within(lo..lo + keep, write);
            self.offset[v] = write;
            write += keep;
        }
        self.offset[n] = write;
        self.offset.truncate(n + 1);
        self.adjacency.truncate(write);
        crate::debug_invariants!(self.validate_invariants(), "AdjacencyGraph::resize");
    }

    /// Removes every vertex `v` with `pred(v) == true` together with all
    /// incident entries. Survivors are renumbered contiguously in their
    /// original relative order.
    pub fn erase_if<F>(&mut self, mut pred: F)
    where
        F: FnMut(usize) -> bool,
    {
        let n = self.size_vertex();
        let mut relabel: Vec<Option<usize>> = Vec::with_capacity(n);
        let mut kept = 0;
        for v in 0..n {
            if pred(v) {
                relabel.push(None);
            } else {
                relabel.push(Some(kept));
                kept += 1;
            }
        }
        if kept == n {
            return;
        }
        if kept == 0 {
            self.clear();
            return;
        }

        let mut write = 0;
        let mut next = 0;
        for v in 0..n {
            let (lo, hi) = (self.offset[v], self.offset[v + 1]);
            if relabel[v].is_none() {
                continue;
            }
            // `next <= v`, so this never clobbers an offset still to be read
            self.offset[next] = write;
            for k in lo..hi {
                if let Some(u) = relabel[self.adjacency[k]] {
                    self.adjacency[write] = u;
                    write += 1;
                }
            }
            next += 1;
        }
        self.offset[next] = write;
        self.offset.truncate(next + 1);
        self.adjacency.truncate(write);
        debug_assert_eq!(self.offset[next], self.adjacency.len());
        crate::debug_invariants!(self.validate_invariants(), "AdjacencyGraph::erase_if");
    }

    /// Relabels every vertex `v` as `permutation[v]` and returns the graph as
    /// it was before.
    ///
    /// # Panics
    /// Panics if `permutation` is not a bijection on `0..V`.
    #[track_caller]
    pub fn reorder(&mut self, permutation: &[usize]) -> Self {
        fatal(self.try_reorder(permutation))
    }

    /// Fallible variant of [`reorder`](Self::reorder).
    pub fn try_reorder(&mut self, permutation: &[usize]) -> Result<Self, GraphError> {
        let n = self.size_vertex();
        validate_permutation(permutation, n)?;
        if n == 0 {
            return Ok(std::mem::take(self));
        }

        let mut offset = vec![0; n + 1];
        for (v, nbrs) in self.iter().enumerate() {
            offset[permutation[v] + 1] = nbrs.len();
        }
        for i in 0..n {
            offset[i + 1] += offset[i];
        }

        let mut adjacency = vec![0; self.adjacency.len()];
        for (v, nbrs) in self.iter().enumerate() {
            let slot = permutation[v];
            let dst = &mut adjacency[offset[slot]..offset[slot + 1]];
            for (d, &u) in dst.iter_mut().zip(nbrs) {
                *d = permutation[u];
            }
            dst.sort_unstable();
        }

        let reordered = Self {
            offset,
            adjacency,
            _dir: PhantomData,
        };
        crate::debug_invariants!(reordered.validate_invariants(), "AdjacencyGraph::reorder");
        Ok(std::mem::replace(self, reordered))
    }
}

impl<D: Direction> DebugInvariants for AdjacencyGraph<D> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "AdjacencyGraph");
    }

    fn validate_invariants(&self) -> Result<(), GraphError> {
        check_csr(&self.offset, &self.adjacency)?;
        if !D::DIRECTED {
            for (v, nbrs) in self.iter().enumerate() {
                for &u in nbrs {
                    if self.neighbors(u).binary_search(&v).is_err() {
                        return Err(GraphError::InvariantViolation(format!(
                            "edge {v} -> {u} has no mirror"
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

impl<D: Direction> Index<usize> for AdjacencyGraph<D> {
    type Output = [usize];

    #[track_caller]
    fn index(&self, v: usize) -> &[usize] {
        self.neighbors(v)
    }
}

impl<D: Direction> FromIterator<Edge<D>> for AdjacencyGraph<D> {
    fn from_iter<I: IntoIterator<Item = Edge<D>>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl<D: Direction> Extend<Edge<D>> for AdjacencyGraph<D> {
    fn extend<I: IntoIterator<Item = Edge<D>>>(&mut self, iter: I) {
        for e in iter {
            self.insert(e);
        }
    }
}

impl<D: Direction> From<&[(usize, usize)]> for AdjacencyGraph<D> {
    #[track_caller]
    fn from(pairs: &[(usize, usize)]) -> Self {
        Self::from_pairs(pairs)
    }
}

impl<D: Direction, const N: usize> From<[(usize, usize); N]> for AdjacencyGraph<D> {
    #[track_caller]
    fn from(pairs: [(usize, usize); N]) -> Self {
        Self::from_pairs(&pairs)
    }
}

/// Text dump: one line per vertex with its neighbors comma-separated; an
/// isolated vertex prints as `.`.
impl<D: Direction> fmt::Display for AdjacencyGraph<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for nbrs in self.iter() {
            if nbrs.is_empty() {
                writeln!(f, ".")?;
            } else {
                writeln!(f, "{}", nbrs.iter().join(","))?;
            }
        }
        Ok(())
    }
}
