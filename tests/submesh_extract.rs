use sparse_adjacency::generators::{halo_fixture_15, structured_grid};
use sparse_adjacency::{AdjacencySubgraph, DebugInvariants, HaloWorkspace};

#[test]
fn three_seeds_two_levels() {
    let parent = halo_fixture_15();
    let sub = AdjacencySubgraph::new(&parent, &[0, 6, 8], 2);
    assert_eq!(sub.size_vertex(), 9);
    let per_level: Vec<usize> = (0..=2)
        .map(|l| sub.levels().iter().filter(|&&x| x == l).count())
        .collect();
    assert_eq!(per_level, vec![3, 3, 3]);
    assert_eq!(sub.max_level(), 2);
    sub.validate_invariants().unwrap();
}

#[test]
fn local_global_is_injective_and_consistent() {
    let parent = structured_grid(5, 4);
    let sub = AdjacencySubgraph::new(&parent, &[7, 12], 2);
    let mut globals = sub.local_to_global().to_vec();
    globals.sort_unstable();
    globals.dedup();
    assert_eq!(globals.len(), sub.size_vertex());
    for v in 0..sub.size_vertex() {
        assert_eq!(sub.is_local(v), sub.vertex_level(v) == 0);
        assert_eq!(sub.find_global(sub.local_global(v)), Some(v));
        // local edges are parent edges
        for &u in sub.neighbors(v) {
            assert!(parent.neighbors(sub.local_global(v)).contains(&sub.local_global(u)));
        }
    }
}

#[test]
fn one_workspace_serves_many_subgraphs() {
    let parent = structured_grid(6, 6);
    let mut ws = HaloWorkspace::with_vertices(parent.size_vertex());
    let mut subs: Vec<AdjacencySubgraph> = (0..6)
        .map(|row| {
            let seeds: Vec<usize> = (0..6).map(|i| row * 6 + i).collect();
            AdjacencySubgraph::try_new_with(&parent, &seeds, 0, &mut ws).unwrap()
        })
        .collect();
    for sub in &mut subs {
        sub.update_levels(&parent, 1, Some(&mut ws));
        assert!(ws.is_clean());
    }
    // top and bottom rows see one neighboring row, the rest see two
    let sizes: Vec<usize> = subs.iter().map(AdjacencySubgraph::size_vertex).collect();
    assert_eq!(sizes, vec![12, 18, 18, 18, 18, 12]);
}

#[test]
fn growing_then_shrinking_restores_the_subgraph() {
    let parent = halo_fixture_15();
    let original = AdjacencySubgraph::new(&parent, &[3, 9], 1);
    let mut sub = original.clone();
    sub.update_levels(&parent, 4, None);
    assert!(sub.size_vertex() > original.size_vertex());
    sub.update_levels(&parent, 1, None);
    assert_eq!(sub, original);
}
