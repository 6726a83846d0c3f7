//! Halo-augmented subgraphs of a parent [`AdjacencyGraph`].
//!
//! An [`AdjacencySubgraph`] owns a graph in *local* numbering plus
//!
//! * `local_to_global`: the parent vertex behind every local vertex
//!   (injective);
//! * `level`: 0 for the primary partition, `k` for vertices added by the
//!   `k`-th round of halo expansion;
//! * a [`GraphFingerprint`] of the parent it was extracted from.
//!
//! Local numbering lists the seeds first (in the order given), then each
//! halo level in discovery order: frontier order, and ascending parent index
//! within one frontier vertex.
//!
//! The parent check is approximate: any change to the parent's topology
//! that keeps its fingerprint goes unnoticed.

use std::mem;

use super::adjacency::AdjacencyGraph;
use super::direction::{Direction, Undirected};
use super::edge::Edge;
use super::fingerprint::GraphFingerprint;
use crate::debug_invariants::DebugInvariants;
use crate::graph_error::{GraphError, fatal};

/// `local_to_global` entry of a slot created by growing [`AdjacencySubgraph::resize`],
/// and the "outside the subgraph" value of a [`HaloWorkspace`].
pub const NO_MAPPING: usize = usize::MAX;

/// Level of a slot created by growing [`AdjacencySubgraph::resize`].
pub const UNSET_LEVEL: usize = usize::MAX;

/// Caller-owned global → local scratch map reused across halo updates.
///
/// Every entry is [`NO_MAPPING`] between calls; halo growth fills the entries
/// of the subgraph it works on and restores them before returning, so one
/// workspace serves any number of subgraphs of the same parent without
/// reallocating a parent-sized buffer each time.
#[derive(Clone, Debug, Default)]
pub struct HaloWorkspace {
    global_to_local: Vec<usize>,
}

impl HaloWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Workspace pre-sized for a parent with `n` vertices.
    pub fn with_vertices(n: usize) -> Self {
        Self {
            global_to_local: vec![NO_MAPPING; n],
        }
    }

    /// Number of parent vertices covered.
    pub fn len(&self) -> usize {
        self.global_to_local.len()
    }

    pub fn is_empty(&self) -> bool {
        self.global_to_local.is_empty()
    }

    /// Local index currently recorded for global vertex `g`.
    pub fn get(&self, g: usize) -> Option<usize> {
        self.global_to_local
            .get(g)
            .copied()
            .filter(|&l| l != NO_MAPPING)
    }

    /// `true` if no entry is mapped.
    pub fn is_clean(&self) -> bool {
        self.global_to_local.iter().all(|&l| l == NO_MAPPING)
    }

    fn prepare(&mut self, n: usize) {
        if self.global_to_local.len() < n {
            self.global_to_local.resize(n, NO_MAPPING);
        }
        debug_assert!(self.is_clean(), "HaloWorkspace reused while still mapped");
    }

    fn map_all(&mut self, local_to_global: &[usize]) {
        for (l, &g) in local_to_global.iter().enumerate() {
            self.global_to_local[g] = l;
        }
    }

    fn reset(&mut self, local_to_global: &[usize]) {
        for &g in local_to_global {
            self.global_to_local[g] = NO_MAPPING;
        }
    }
}

/// Subset of a parent graph with a halo of neighboring levels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencySubgraph<D: Direction = Undirected> {
    graph: AdjacencyGraph<D>,
    local_to_global: Vec<usize>,
    level: Vec<usize>,
    parent: Option<GraphFingerprint>,
}

impl<D: Direction> AdjacencySubgraph<D> {
    /// Extracts `seeds` from `parent` and grows `extra_levels` halo levels
    /// around them.
    ///
    /// # Panics
    /// Panics if a seed is out of range or repeated.
    #[track_caller]
    pub fn new(parent: &AdjacencyGraph<D>, seeds: &[usize], extra_levels: usize) -> Self {
        fatal(Self::try_new(parent, seeds, extra_levels))
    }

    /// Fallible variant of [`new`](Self::new).
    pub fn try_new(
        parent: &AdjacencyGraph<D>,
        seeds: &[usize],
        extra_levels: usize,
    ) -> Result<Self, GraphError> {
        let mut ws = HaloWorkspace::with_vertices(parent.size_vertex());
        Self::try_new_with(parent, seeds, extra_levels, &mut ws)
    }

    /// Like [`try_new`](Self::try_new) but borrows the scratch map from
    /// `ws`.
    pub fn try_new_with(
        parent: &AdjacencyGraph<D>,
        seeds: &[usize],
        extra_levels: usize,
        ws: &mut HaloWorkspace,
    ) -> Result<Self, GraphError> {
        let n = parent.size_vertex();
        ws.prepare(n);
        for (l, &g) in seeds.iter().enumerate() {
            if g >= n {
                ws.reset(&seeds[..l]);
                return Err(GraphError::VertexOutOfRange { vertex: g, len: n });
            }
            if ws.global_to_local[g] != NO_MAPPING {
                ws.reset(&seeds[..l]);
                return Err(GraphError::DuplicateSeed(g));
            }
            ws.global_to_local[g] = l;
        }

        let mut sub = Self {
            graph: AdjacencyGraph::new(),
            local_to_global: seeds.to_vec(),
            level: vec![0; seeds.len()],
            parent: Some(parent.fingerprint()),
        };
        sub.expand(parent, ws, extra_levels);
        sub.induce(parent, ws);
        ws.reset(&sub.local_to_global);
        Ok(sub)
    }

    /// The whole parent as a subgraph with identity mapping and untracked
    /// levels.
    pub fn whole(parent: &AdjacencyGraph<D>) -> Self {
        Self {
            graph: parent.clone(),
            local_to_global: (0..parent.size_vertex()).collect(),
            level: Vec::new(),
            parent: Some(parent.fingerprint()),
        }
    }

    // --- halo construction ----------------------------------------------------

    /// Breadth-first rounds `1..=to`. Round `lvl` starts from every vertex
    /// currently on level `lvl - 1`, including the ones the previous round
    /// added, so partially filled levels left by a shrinking `resize` are
    /// completed. Existing vertices keep their local index; one reached in
    /// fewer hops than recorded moves up to that level. `ws` must map every
    /// current vertex.
    fn expand(&mut self, parent: &AdjacencyGraph<D>, ws: &mut HaloWorkspace, to: usize) {
        let mut frontier = Vec::new();
        for lvl in 1..=to {
            frontier.clear();
            frontier.extend(
                self.local_to_global
                    .iter()
                    .zip(&self.level)
                    .filter(|&(_, &l)| l == lvl - 1)
                    .map(|(&g, _)| g),
            );
            if frontier.is_empty() {
                break;
            }
            for &g in &frontier {
                for &w in parent.neighbors(g) {
                    match ws.global_to_local[w] {
                        NO_MAPPING => {
                            ws.global_to_local[w] = self.local_to_global.len();
                            self.local_to_global.push(w);
                            self.level.push(lvl);
                        }
                        l if self.level[l] > lvl && self.level[l] != UNSET_LEVEL => {
                            self.level[l] = lvl;
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    /// Rebuilds the local graph as the subgraph of `parent` induced by
    /// `local_to_global`. `ws` must map every current vertex.
    fn induce(&mut self, parent: &AdjacencyGraph<D>, ws: &HaloWorkspace) {
        let mut offset = Vec::with_capacity(self.local_to_global.len() + 1);
        let mut adjacency = Vec::new();
        offset.push(0);
        for &g in &self.local_to_global {
            let start = adjacency.len();
            adjacency.extend(
                parent
                    .neighbors(g)
                    .iter()
                    .map(|&w| ws.global_to_local[w])
                    .filter(|&l| l != NO_MAPPING),
            );
            adjacency[start..].sort_unstable();
            offset.push(adjacency.len());
        }
        self.graph = AdjacencyGraph::from_csr_unchecked(offset, adjacency);
    }

    /// Grows or shrinks the halo so that the deepest level is
    /// `new_max_level`.
    ///
    /// Growth uses `workspace` as the global → local scratch map (or a
    /// temporary one); shrinking never touches it.
    ///
    /// # Panics
    /// Panics if `parent` is not recognized as this subgraph's parent.
    #[track_caller]
    pub fn update_levels(
        &mut self,
        parent: &AdjacencyGraph<D>,
        new_max_level: usize,
        workspace: Option<&mut HaloWorkspace>,
    ) {
        fatal(self.try_update_levels(parent, new_max_level, workspace))
    }

    /// Fallible variant of [`update_levels`](Self::update_levels).
    pub fn try_update_levels(
        &mut self,
        parent: &AdjacencyGraph<D>,
        new_max_level: usize,
        workspace: Option<&mut HaloWorkspace>,
    ) -> Result<(), GraphError> {
        if !self.is_parent(parent) {
            return Err(GraphError::ParentMismatch);
        }
        if self.level.is_empty() {
            self.level = vec![0; self.local_to_global.len()];
        }
        let current = self.max_level();
        if new_max_level > current {
            match workspace {
                Some(ws) => self.add_levels(parent, current, new_max_level, ws),
                None => {
                    let mut ws = HaloWorkspace::with_vertices(parent.size_vertex());
                    self.add_levels(parent, current, new_max_level, &mut ws)
                }
            }
        } else if new_max_level < current {
            self.remove_levels(new_max_level);
        }
        Ok(())
    }

    fn add_levels(
        &mut self,
        parent: &AdjacencyGraph<D>,
        from: usize,
        to: usize,
        ws: &mut HaloWorkspace,
    ) {
        let before = self.size_vertex();
        ws.prepare(parent.size_vertex());
        ws.map_all(&self.local_to_global);
        self.expand(parent, ws, to);
        self.induce(parent, ws);
        ws.reset(&self.local_to_global);
        log::trace!(
            "halo grown {from} -> {to} levels: {before} -> {} vertices",
            self.size_vertex()
        );
    }

    fn remove_levels(&mut self, max_level: usize) {
        let before = self.size_vertex();
        let level = &self.level;
        self.graph.erase_if(|v| level[v] > max_level);
        let mut k = 0;
        self.local_to_global.retain(|_| {
            let keep = level[k] <= max_level;
            k += 1;
            keep
        });
        self.level.retain(|&l| l <= max_level);
        log::trace!(
            "halo shrunk to {max_level} levels: {before} -> {} vertices",
            self.size_vertex()
        );
    }

    // --- queries --------------------------------------------------------------

    /// The subgraph in local numbering.
    #[inline]
    pub fn graph(&self) -> &AdjacencyGraph<D> {
        &self.graph
    }

    /// Local → global map.
    #[inline]
    pub fn local_to_global(&self) -> &[usize] {
        &self.local_to_global
    }

    /// Per-vertex levels; empty when levels are not tracked.
    #[inline]
    pub fn levels(&self) -> &[usize] {
        &self.level
    }

    /// `true` if per-vertex levels are recorded.
    #[inline]
    pub fn tracks_levels(&self) -> bool {
        !self.level.is_empty() || self.local_to_global.is_empty()
    }

    /// Deepest halo level present (0 for untracked or empty subgraphs).
    pub fn max_level(&self) -> usize {
        self.level
            .iter()
            .copied()
            .filter(|&l| l != UNSET_LEVEL)
            .max()
            .unwrap_or(0)
    }

    #[track_caller]
    fn check_vertex(&self, v: usize) {
        if v >= self.size_vertex() {
            panic!(
                "{}",
                GraphError::VertexOutOfRange {
                    vertex: v,
                    len: self.size_vertex()
                }
            );
        }
    }

    /// Global index of local vertex `v`.
    ///
    /// # Panics
    /// Panics if `v` is out of range.
    #[track_caller]
    pub fn local_global(&self, v: usize) -> usize {
        self.check_vertex(v);
        self.local_to_global[v]
    }

    /// Halo level of local vertex `v` (0 when levels are not tracked).
    ///
    /// # Panics
    /// Panics if `v` is out of range.
    #[track_caller]
    pub fn vertex_level(&self, v: usize) -> usize {
        self.check_vertex(v);
        self.level.get(v).copied().unwrap_or(0)
    }

    /// `true` if `v` belongs to the primary partition. Always `true` when
    /// levels are not tracked.
    #[track_caller]
    pub fn is_local(&self, v: usize) -> bool {
        self.vertex_level(v) == 0
    }

    /// Local index of global vertex `g`, if it is part of the subgraph.
    pub fn find_global(&self, g: usize) -> Option<usize> {
        self.local_to_global.iter().position(|&x| x == g)
    }

    /// Global indices of the primary partition, in local order.
    pub fn primary_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.local_to_global
            .iter()
            .enumerate()
            .filter(|&(l, _)| self.level.get(l).is_none_or(|&lvl| lvl == 0))
            .map(|(_, &g)| g)
    }

    /// Approximate check that `candidate` is the graph this subgraph was
    /// extracted from. Collisions are possible; see [`GraphFingerprint`].
    pub fn is_parent(&self, candidate: &AdjacencyGraph<D>) -> bool {
        self.parent == Some(candidate.fingerprint())
    }

    /// Fingerprint of the recorded parent, if still valid.
    pub fn parent_fingerprint(&self) -> Option<GraphFingerprint> {
        self.parent
    }

    // --- delegation -----------------------------------------------------------

    #[inline]
    pub fn size_vertex(&self) -> usize {
        self.local_to_global.len()
    }

    #[inline]
    pub fn size_edge(&self) -> usize {
        self.graph.size_edge()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.local_to_global.is_empty()
    }

    #[track_caller]
    pub fn degree(&self, v: usize) -> usize {
        self.graph.degree(v)
    }

    #[track_caller]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        self.graph.neighbors(v)
    }

    /// Edge lookup in local numbering.
    pub fn contains(&self, edge: Edge<D>) -> bool {
        self.graph.contains(edge)
    }

    pub fn capacity_vertex(&self) -> usize {
        self.local_to_global.capacity()
    }

    pub fn capacity_edge(&self) -> usize {
        self.graph.capacity_edge()
    }

    /// Drops every vertex. The parent fingerprint is kept, as for
    /// `resize(0)`.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.local_to_global.clear();
        self.level.clear();
    }

    /// Sets the local vertex count to `n`.
    ///
    /// Shrinking drops local vertices `>= n` with their edges and keeps the
    /// parent fingerprint. Growing appends isolated vertices whose mapping
    /// is [`NO_MAPPING`] and whose level is [`UNSET_LEVEL`]; the caller is
    /// expected to overwrite them. Growing forgets the parent, since the
    /// subgraph no longer describes a part of it.
    pub fn resize(&mut self, n: usize) {
        let cur = self.size_vertex();
        self.graph.resize(n);
        if n > cur {
            let tracked = self.tracks_levels();
            self.local_to_global.resize(n, NO_MAPPING);
            if tracked {
                self.level.resize(n, UNSET_LEVEL);
            }
            self.parent = None;
        } else {
            self.local_to_global.truncate(n);
            self.level.truncate(n);
        }
    }

    /// Exchanges the whole contents of two subgraphs.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Relabels local vertex `v` as `permutation[v]`, carrying the global
    /// map and levels along, and returns the subgraph as it was before.
    ///
    /// # Panics
    /// Panics if `permutation` is not a bijection on the local range.
    #[track_caller]
    pub fn reorder(&mut self, permutation: &[usize]) -> Self {
        fatal(self.try_reorder(permutation))
    }

    /// Fallible variant of [`reorder`](Self::reorder).
    pub fn try_reorder(&mut self, permutation: &[usize]) -> Result<Self, GraphError> {
        let old_graph = self.graph.try_reorder(permutation)?;
        let n = self.size_vertex();
        let mut local_to_global = vec![NO_MAPPING; n];
        for (v, &p) in permutation.iter().enumerate() {
            local_to_global[p] = self.local_to_global[v];
        }
        let mut level = Vec::with_capacity(self.level.len());
        if !self.level.is_empty() {
            level.resize(n, 0);
            for (v, &p) in permutation.iter().enumerate() {
                level[p] = self.level[v];
            }
        }
        Ok(Self {
            graph: old_graph,
            local_to_global: mem::replace(&mut self.local_to_global, local_to_global),
            level: mem::replace(&mut self.level, level),
            parent: self.parent,
        })
    }

    /// Splits into graph, local → global map and levels.
    pub fn into_parts(self) -> (AdjacencyGraph<D>, Vec<usize>, Vec<usize>) {
        (self.graph, self.local_to_global, self.level)
    }
}

impl<D: Direction> DebugInvariants for AdjacencySubgraph<D> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "AdjacencySubgraph");
    }

    fn validate_invariants(&self) -> Result<(), GraphError> {
        self.graph.validate_invariants()?;
        let n = self.local_to_global.len();
        if self.graph.size_vertex() != n {
            return Err(GraphError::InvariantViolation(format!(
                "graph has {} vertices but map has {n}",
                self.graph.size_vertex()
            )));
        }
        if !self.level.is_empty() && self.level.len() != n {
            return Err(GraphError::InvariantViolation(format!(
                "{} levels for {n} vertices",
                self.level.len()
            )));
        }
        let mut mapped: Vec<usize> = self
            .local_to_global
            .iter()
            .copied()
            .filter(|&g| g != NO_MAPPING)
            .collect();
        mapped.sort_unstable();
        if let Some(w) = mapped.windows(2).find(|w| w[0] == w[1]) {
            return Err(GraphError::InvariantViolation(format!(
                "global vertex {} mapped twice",
                w[0]
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{halo_fixture_15, path, structured_grid};
    use crate::topology::direction::Directed;

    #[test]
    fn halo_levels_on_fixture_graph() {
        let parent = halo_fixture_15();
        let sub = AdjacencySubgraph::new(&parent, &[0, 6, 8], 2);
        assert_eq!(sub.size_vertex(), 9);
        assert_eq!(sub.local_to_global(), &[0, 6, 8, 1, 7, 14, 2, 12, 13]);
        assert_eq!(sub.levels(), &[0, 0, 0, 1, 1, 1, 2, 2, 2]);
        assert_eq!(sub.size_edge(), 11);
        // local 4 is global 7: neighbors 1, 6, 8, 12
        assert_eq!(sub.neighbors(4), &[1, 2, 3, 7]);
        assert!(sub.is_parent(&parent));
        sub.validate_invariants().unwrap();
        for v in 0..sub.size_vertex() {
            assert_eq!(sub.is_local(v), sub.vertex_level(v) == 0);
        }
    }

    #[test]
    fn seeds_are_validated() {
        let parent = path(4);
        assert_eq!(
            AdjacencySubgraph::try_new(&parent, &[1, 1], 0),
            Err(GraphError::DuplicateSeed(1))
        );
        assert_eq!(
            AdjacencySubgraph::try_new(&parent, &[0, 9], 0),
            Err(GraphError::VertexOutOfRange { vertex: 9, len: 4 })
        );
    }

    #[test]
    fn failed_construction_leaves_workspace_clean() {
        let parent = path(4);
        let mut ws = HaloWorkspace::with_vertices(4);
        assert!(AdjacencySubgraph::try_new_with(&parent, &[0, 2, 2], 1, &mut ws).is_err());
        assert!(ws.is_clean());
        let sub = AdjacencySubgraph::try_new_with(&parent, &[0, 2], 1, &mut ws).unwrap();
        assert_eq!(sub.size_vertex(), 4);
        assert!(ws.is_clean());
    }

    #[test]
    fn update_levels_grows_and_shrinks() {
        let parent = halo_fixture_15();
        let mut ws = HaloWorkspace::new();
        let mut sub = AdjacencySubgraph::new(&parent, &[0, 6, 8], 0);
        assert_eq!(sub.size_vertex(), 3);
        assert_eq!(sub.size_edge(), 1);

        sub.update_levels(&parent, 2, Some(&mut ws));
        assert!(ws.is_clean());
        assert_eq!(ws.len(), 15);
        assert_eq!(sub, AdjacencySubgraph::new(&parent, &[0, 6, 8], 2));

        sub.update_levels(&parent, 1, Some(&mut ws));
        assert_eq!(sub.size_vertex(), 6);
        assert_eq!(sub.local_to_global(), &[0, 6, 8, 1, 7, 14]);
        assert_eq!(sub.size_edge(), 6);
        assert_eq!(sub.max_level(), 1);
        sub.validate_invariants().unwrap();

        sub.update_levels(&parent, 0, None);
        assert_eq!(sub.size_vertex(), 3);
        assert_eq!(sub.max_level(), 0);
    }

    #[test]
    fn regrowth_after_resize_completes_partial_level() {
        let parent = halo_fixture_15();
        let mut sub = AdjacencySubgraph::new(&parent, &[0, 6, 8], 2);
        // keeps global 2 but drops 12 and 13 from level 2
        sub.resize(7);
        assert!(sub.is_parent(&parent));
        sub.update_levels(&parent, 3, None);
        assert_eq!(sub, AdjacencySubgraph::new(&parent, &[0, 6, 8], 3));
        assert_eq!(sub.levels(), &[0, 0, 0, 1, 1, 1, 2, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn regrowth_after_reorder_and_resize_matches_fresh_build() {
        let by_global = |sub: &AdjacencySubgraph| {
            let mut pairs: Vec<(usize, usize)> = sub
                .local_to_global()
                .iter()
                .copied()
                .zip(sub.levels().iter().copied())
                .collect();
            pairs.sort_unstable();
            pairs
        };
        let parent = halo_fixture_15();
        let mut sub = AdjacencySubgraph::new(&parent, &[0, 6, 8], 2);
        // move global 1 (level 1) to the back, then cut it and global 13
        sub.reorder(&[0, 1, 2, 8, 3, 4, 5, 6, 7]);
        sub.resize(7);
        assert_eq!(sub.local_to_global(), &[0, 6, 8, 7, 14, 2, 12]);

        sub.update_levels(&parent, 3, None);
        let fresh = AdjacencySubgraph::new(&parent, &[0, 6, 8], 3);
        assert_eq!(by_global(&sub), by_global(&fresh));
        assert_eq!(sub.size_edge(), fresh.size_edge());
        sub.validate_invariants().unwrap();
    }

    #[test]
    fn directed_parent_follows_out_edges() {
        // 0 -> 1 -> 2 -> 3, plus 3 -> 1
        let parent = AdjacencyGraph::<Directed>::from([(0, 1), (1, 2), (2, 3), (3, 1)]);
        let mut sub = AdjacencySubgraph::new(&parent, &[1], 2);
        assert_eq!(sub.local_to_global(), &[1, 2, 3]);
        assert_eq!(sub.levels(), &[0, 1, 2]);
        assert_eq!(sub.neighbors(0), &[1]);
        assert_eq!(sub.neighbors(2), &[0]);
        assert!(!sub.contains(Edge::new(1, 0)));
        assert_eq!(sub.size_edge(), 3);
        sub.validate_invariants().unwrap();

        sub.update_levels(&parent, 1, None);
        assert_eq!(sub.local_to_global(), &[1, 2]);
        assert_eq!(sub.size_edge(), 1);
        sub.update_levels(&parent, 5, None);
        assert_eq!(sub, AdjacencySubgraph::new(&parent, &[1], 5));

        let before = sub.clone();
        sub.reorder(&[2, 0, 1]);
        assert_eq!(sub.local_to_global(), &[2, 3, 1]);
        assert!(sub.contains(Edge::new(2, 0)));
        sub.reorder(&[1, 2, 0]);
        assert_eq!(sub, before);
    }

    #[test]
    fn update_levels_rejects_foreign_parent() {
        let parent = halo_fixture_15();
        let other = structured_grid(3, 3);
        let mut sub = AdjacencySubgraph::new(&parent, &[0], 0);
        assert_eq!(
            sub.try_update_levels(&other, 1, None),
            Err(GraphError::ParentMismatch)
        );
    }

    #[test]
    fn halo_stops_at_component_boundary() {
        let parent = path(3);
        let sub = AdjacencySubgraph::new(&parent, &[0], 10);
        assert_eq!(sub.size_vertex(), 3);
        assert_eq!(sub.max_level(), 2);
    }

    #[test]
    fn whole_graph_has_untracked_levels() {
        let parent = structured_grid(2, 2);
        let sub = AdjacencySubgraph::whole(&parent);
        assert!(sub.levels().is_empty());
        assert!((0..4).all(|v| sub.is_local(v)));
        assert_eq!(sub.graph(), &parent);
        assert_eq!(sub.primary_vertices().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn reorder_moves_maps_in_lockstep() {
        let parent = halo_fixture_15();
        let mut sub = AdjacencySubgraph::new(&parent, &[0, 6, 8], 1);
        let before = sub.clone();
        let perm = vec![5, 4, 3, 2, 1, 0];
        let old = sub.reorder(&perm);
        assert_eq!(old, before);
        assert_eq!(sub.local_to_global(), &[14, 7, 1, 8, 6, 0]);
        assert_eq!(sub.levels(), &[1, 1, 1, 0, 0, 0]);
        // edge 0-6 (local 0-1 before) is now local 5-4
        assert!(sub.contains(Edge::new(4, 5)));
        sub.validate_invariants().unwrap();
        sub.reorder(&perm);
        assert_eq!(sub, before);
    }

    #[test]
    fn resize_semantics() {
        let parent = halo_fixture_15();
        let mut sub = AdjacencySubgraph::new(&parent, &[0, 6, 8], 1);
        sub.resize(4);
        assert!(sub.is_parent(&parent));
        assert_eq!(sub.local_to_global(), &[0, 6, 8, 1]);
        assert_eq!(sub.size_edge(), 2);

        sub.resize(5);
        assert!(!sub.is_parent(&parent));
        assert_eq!(sub.local_global(4), NO_MAPPING);
        assert_eq!(sub.vertex_level(4), UNSET_LEVEL);
        assert_eq!(sub.degree(4), 0);
    }

    #[test]
    fn swap_and_find() {
        let parent = path(5);
        let mut a = AdjacencySubgraph::new(&parent, &[0, 1], 0);
        let mut b = AdjacencySubgraph::new(&parent, &[4], 1);
        a.swap(&mut b);
        assert_eq!(a.local_to_global(), &[4, 3]);
        assert_eq!(a.find_global(3), Some(1));
        assert_eq!(a.find_global(0), None);
        assert_eq!(b.size_vertex(), 2);

        let (graph, l2g, levels) = a.into_parts();
        assert_eq!(graph.size_edge(), 1);
        assert_eq!(l2g, vec![4, 3]);
        assert_eq!(levels, vec![0, 1]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn local_global_is_bounds_checked() {
        let parent = path(3);
        let sub = AdjacencySubgraph::new(&parent, &[0], 0);
        sub.local_global(1);
    }
}
