use circuits::{
    algorithm::paton, count_all_sccs, count_sccs, count_simple_cycles, cycle_summary,
    find_all_sccs, find_sccs, find_simple_cycles, Algorithm, CycleError, DiGraph, JohnsonSimpleCycles,
    PatonCycleBase, PatonSimpleCycles, SzwarcfiterLauerSimpleCycles, TarjanSimpleCycles,
    TiernanSimpleCycles, UnGraph,
};

// ── helpers ──────────────────────────────────────────────────────────────

fn all_algos() -> Vec<(&'static str, Algorithm)> {
    vec![
        ("tiernan", Algorithm::Tiernan),
        ("tarjan", Algorithm::Tarjan),
        ("johnson", Algorithm::Johnson),
        ("szwarcfiter-lauer", Algorithm::SzwarcfiterLauer),
    ]
}

fn digraph(vertices: u32, edges: &[(u32, u32)]) -> DiGraph<u32> {
    let mut g = DiGraph::new();
    for v in 0..vertices {
        g.add_vertex(v);
    }
    for &(u, v) in edges {
        g.add_edge(u, v);
    }
    g
}

fn ungraph(edges: &[(u32, u32)]) -> UnGraph<u32> {
    UnGraph::from_edges(edges.iter().copied())
}

/// Complete directed graph on n vertices, self-loops included.
fn complete_with_loops(n: u32) -> DiGraph<u32> {
    let mut g = DiGraph::new();
    for u in 0..n {
        for v in 0..n {
            g.add_edge(u, v);
        }
    }
    g
}

/// Two reciprocal 2-cycle pairs joined by one-way bridges, plus an isolated
/// vertex.
fn two_pairs_graph() -> DiGraph<u32> {
    digraph(
        9,
        &[
            (0, 1),
            (1, 0),
            (1, 2),
            (2, 3),
            (3, 2),
            (4, 5),
            (5, 4),
            (5, 6),
            (6, 7),
            (7, 6),
        ],
    )
}

/// 30 vertices, each pointing at the eight multiples of four, unioned with
/// the edges of the two-pair graph.
fn hub_union_graph() -> DiGraph<u32> {
    let mut g = DiGraph::new();
    for v in 0..30u32 {
        g.add_vertex(v);
    }
    for v in 0..30u32 {
        for h in [0u32, 4, 8, 12, 16, 20, 24, 28] {
            g.add_edge(v, h);
        }
    }
    for (u, v) in [
        (0u32, 1u32),
        (1, 0),
        (1, 2),
        (2, 3),
        (3, 2),
        (4, 5),
        (5, 4),
        (5, 6),
        (6, 7),
        (7, 6),
    ] {
        g.add_edge(u, v);
    }
    g
}

/// Rotate a simple cycle so its smallest vertex comes first.
fn canonical_rotation(cycle: &[u32]) -> Vec<u32> {
    let pivot = cycle
        .iter()
        .enumerate()
        .min_by_key(|&(_, v)| v)
        .map(|(i, _)| i)
        .unwrap();
    let mut out = Vec::with_capacity(cycle.len());
    out.extend_from_slice(&cycle[pivot..]);
    out.extend_from_slice(&cycle[..pivot]);
    out
}

/// Canonical form under rotation and reflection, for undirected cycles.
fn canonical_undirected(cycle: &[u32]) -> Vec<u32> {
    let forward = canonical_rotation(cycle);
    let mut reversed: Vec<u32> = cycle.to_vec();
    reversed.reverse();
    let backward = canonical_rotation(&reversed);
    forward.min(backward)
}

/// Simplicity, validity and rotation-uniqueness for a directed cycle set.
fn check_directed_invariants(name: &str, g: &DiGraph<u32>, cycles: &[Vec<u32>]) {
    let mut seen = std::collections::HashSet::new();
    for cycle in cycles {
        assert!(!cycle.is_empty(), "{}: empty cycle", name);
        let distinct: std::collections::HashSet<_> = cycle.iter().collect();
        assert_eq!(
            distinct.len(),
            cycle.len(),
            "{}: repeated vertex in {:?}",
            name,
            cycle
        );
        for i in 0..cycle.len() {
            let u = cycle[i];
            let v = cycle[(i + 1) % cycle.len()];
            assert!(
                g.contains_edge(&u, &v),
                "{}: missing edge ({}, {}) in {:?}",
                name,
                u,
                v,
                cycle
            );
        }
        assert!(
            seen.insert(canonical_rotation(cycle)),
            "{}: duplicate cycle {:?}",
            name,
            cycle
        );
    }
}

/// Simplicity, validity and rotation/reflection-uniqueness for an
/// undirected cycle set.
fn check_undirected_invariants(name: &str, g: &UnGraph<u32>, cycles: &[Vec<u32>]) {
    let mut seen = std::collections::HashSet::new();
    for cycle in cycles {
        assert!(!cycle.is_empty(), "{}: empty cycle", name);
        let distinct: std::collections::HashSet<_> = cycle.iter().collect();
        assert_eq!(
            distinct.len(),
            cycle.len(),
            "{}: repeated vertex in {:?}",
            name,
            cycle
        );
        for i in 0..cycle.len() {
            let u = cycle[i];
            let v = cycle[(i + 1) % cycle.len()];
            assert!(
                g.contains_edge(&u, &v),
                "{}: missing edge ({}, {}) in {:?}",
                name,
                u,
                v,
                cycle
            );
        }
        assert!(
            seen.insert(canonical_undirected(cycle)),
            "{}: duplicate cycle {:?}",
            name,
            cycle
        );
    }
}

// ── directed: known scenarios ────────────────────────────────────────────

#[test]
fn test_two_pairs_cycles() {
    let g = two_pairs_graph();
    let expected: Vec<Vec<u32>> = vec![vec![0, 1], vec![2, 3], vec![4, 5], vec![6, 7]];
    for (name, algo) in all_algos() {
        let cycles = find_simple_cycles(algo, &g);
        check_directed_invariants(name, &g, &cycles);
        let mut got: Vec<Vec<u32>> = cycles.iter().map(|c| canonical_rotation(c)).collect();
        got.sort();
        assert_eq!(got, expected, "failed for {}", name);
    }
}

#[test]
fn test_two_pairs_sccs() {
    let g = two_pairs_graph();
    assert_eq!(count_sccs(&g), 4);
    // The isolated vertex 8 adds one trivial component to the full count.
    assert_eq!(count_all_sccs(&g), 5);

    let mut members: Vec<Vec<u32>> = find_sccs(&g)
        .into_iter()
        .map(|mut scc| {
            scc.sort();
            scc
        })
        .collect();
    members.sort();
    assert_eq!(
        members,
        vec![vec![0, 1], vec![2, 3], vec![4, 5], vec![6, 7]]
    );

    // Back edges across the bridges collapse everything but vertex 8.
    let mut g = two_pairs_graph();
    g.add_edge(2, 1);
    g.add_edge(7, 0);
    assert_eq!(count_sccs(&g), 1);
    assert_eq!(find_sccs(&g)[0].len(), 8);
}

#[test]
fn test_complete_graph_counts() {
    // Counts follow sum over k of C(n,k) * (k-1)! with self-loops included.
    let expected = [1usize, 3, 8, 24, 89, 415, 2372, 16072, 125673];
    for (i, &want) in expected.iter().enumerate() {
        let n = (i + 1) as u32;
        let g = complete_with_loops(n);
        for (name, algo) in all_algos() {
            let cycles = find_simple_cycles(algo, &g);
            assert_eq!(cycles.len(), want, "failed for {} at n={}", name, n);
            if n <= 6 {
                check_directed_invariants(name, &g, &cycles);
            }
        }
    }
}

#[test]
fn test_hub_union_count() {
    let g = hub_union_graph();
    for (name, algo) in all_algos() {
        assert_eq!(
            count_simple_cycles(algo, &g),
            203961,
            "failed for {}",
            name
        );
    }
}

#[test]
fn test_self_loop_only() {
    let g = digraph(1, &[(0, 0)]);
    for (name, algo) in all_algos() {
        assert_eq!(find_simple_cycles(algo, &g), vec![vec![0]], "failed for {}", name);
    }
    assert_eq!(count_sccs(&g), 1);
    assert_eq!(count_all_sccs(&g), 1);
}

#[test]
fn test_self_loop_inside_larger_cycle() {
    // Self-loop on a vertex of a 3-cycle contributes exactly one extra
    // length-1 cycle.
    let g = digraph(3, &[(0, 1), (1, 2), (2, 0), (1, 1)]);
    for (name, algo) in all_algos() {
        let cycles = find_simple_cycles(algo, &g);
        check_directed_invariants(name, &g, &cycles);
        assert_eq!(cycles.len(), 2, "failed for {}", name);
        let loops: Vec<_> = cycles.iter().filter(|c| c.len() == 1).collect();
        assert_eq!(loops, vec![&vec![1u32]], "failed for {}", name);
    }
}

#[test]
fn test_acyclic_graph() {
    let g = digraph(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
    for (name, algo) in all_algos() {
        assert!(find_simple_cycles(algo, &g).is_empty(), "failed for {}", name);
    }
    assert_eq!(count_sccs(&g), 0);
    assert_eq!(count_all_sccs(&g), 4);
}

#[test]
fn test_empty_graph() {
    let g: DiGraph<u32> = DiGraph::new();
    for (name, algo) in all_algos() {
        assert!(find_simple_cycles(algo, &g).is_empty(), "failed for {}", name);
    }
    assert_eq!(count_all_sccs(&g), 0);
    assert!(find_all_sccs(&g).is_empty());
}

// ── directed: cross-agreement and determinism ────────────────────────────

#[test]
fn test_cross_agreement_random() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    let mut rng = StdRng::seed_from_u64(42);

    for trial in 0..40 {
        let n = rng.gen_range(2..=7u32);
        let p = rng.gen_range(0.15..0.5f64);
        let mut g = DiGraph::new();
        for v in 0..n {
            g.add_vertex(v);
        }
        for u in 0..n {
            for v in 0..n {
                if rng.gen::<f64>() < p {
                    g.add_edge(u, v);
                }
            }
        }

        let reference = find_simple_cycles(Algorithm::Johnson, &g);
        check_directed_invariants("johnson", &g, &reference);
        for (name, algo) in all_algos() {
            let cycles = find_simple_cycles(algo, &g);
            check_directed_invariants(name, &g, &cycles);
            assert_eq!(
                cycles.len(),
                reference.len(),
                "trial {}: {} disagrees with johnson",
                trial,
                name
            );
        }
    }
}

#[test]
fn test_determinism() {
    let build = || {
        digraph(
            6,
            &[
                (0, 1),
                (1, 2),
                (2, 0),
                (2, 3),
                (3, 4),
                (4, 2),
                (4, 5),
                (5, 4),
                (1, 1),
            ],
        )
    };
    for (name, algo) in all_algos() {
        let a = find_simple_cycles(algo, &build());
        let b = find_simple_cycles(algo, &build());
        assert_eq!(a, b, "failed for {}", name);
        assert!(!a.is_empty(), "failed for {}", name);
    }
}

// ── finder front-ends ────────────────────────────────────────────────────

#[test]
fn test_unbound_finder_fails() {
    let tiernan: TiernanSimpleCycles<'_, u32> = TiernanSimpleCycles::new();
    assert!(matches!(
        tiernan.find_simple_cycles(),
        Err(CycleError::InvalidArgument(_))
    ));
    let tarjan: TarjanSimpleCycles<'_, u32> = TarjanSimpleCycles::new();
    assert!(matches!(
        tarjan.count_simple_cycles(),
        Err(CycleError::InvalidArgument(_))
    ));
    let paton_base: PatonCycleBase<'_, u32> = PatonCycleBase::new();
    assert!(matches!(
        paton_base.find_cycle_base(),
        Err(CycleError::InvalidArgument(_))
    ));
    let paton_cycles: PatonSimpleCycles<'_, u32> = PatonSimpleCycles::new();
    assert!(matches!(
        paton_cycles.find_simple_cycles(),
        Err(CycleError::InvalidArgument(_))
    ));
}

#[test]
fn test_finder_binding_and_agreement() {
    let g = two_pairs_graph();

    let mut tiernan = TiernanSimpleCycles::new();
    tiernan.set_graph(&g);
    assert!(tiernan.graph().is_some());
    assert_eq!(tiernan.count_simple_cycles().unwrap(), 4);
    assert_eq!(
        tiernan.find_simple_cycles().unwrap().len(),
        tiernan.count_simple_cycles().unwrap()
    );

    let johnson = JohnsonSimpleCycles::with_graph(&g);
    assert_eq!(johnson.count_simple_cycles().unwrap(), 4);

    let sl = SzwarcfiterLauerSimpleCycles::with_graph(&g);
    assert_eq!(sl.count_simple_cycles().unwrap(), 4);

    let tarjan = TarjanSimpleCycles::with_graph(&g);
    assert_eq!(tarjan.count_simple_cycles().unwrap(), 4);
}

// ── undirected: Paton ────────────────────────────────────────────────────

#[test]
fn test_paton_triangle() {
    let g = ungraph(&[(0, 1), (1, 2), (2, 0)]);
    let cycles = paton::simple_cycles(&g);
    check_undirected_invariants("paton-cycles", &g, &cycles);
    assert_eq!(cycles.len(), 1);
    assert_eq!(canonical_undirected(&cycles[0]), vec![0, 1, 2]);
    assert_eq!(paton::cycle_base(&g).len(), 1);
}

#[test]
fn test_paton_incremental_growth() {
    // Each edge batch below grows the cycle space by the listed amount; the
    // pendant edge (4,5) grows it by nothing.
    let mut edges: Vec<(u32, u32)> = vec![(0, 1), (1, 2), (2, 0)];
    let steps: Vec<(Vec<(u32, u32)>, usize)> = vec![
        (vec![(2, 3), (3, 0)], 2),
        (vec![(3, 1)], 3),
        (vec![(3, 4), (4, 2)], 4),
        (vec![(4, 5)], 4),
        (vec![(5, 2)], 5),
        (vec![(5, 6), (6, 4)], 6),
    ];
    for (batch, want) in steps {
        edges.extend_from_slice(&batch);
        let g = ungraph(&edges);
        let cycles = paton::simple_cycles(&g);
        check_undirected_invariants("paton-cycles", &g, &cycles);
        assert_eq!(cycles.len(), want, "after adding {:?}", batch);
        assert_eq!(paton::cycle_base(&g).len(), want, "after adding {:?}", batch);
    }
}

#[test]
fn test_paton_complete_graphs() {
    // |E| - |V| + 1 for connected n >= 2; small-n corner values otherwise.
    let expected = [0usize, 0, 0, 1, 3, 6, 10, 15, 21, 28, 36];
    for (n, &want) in expected.iter().enumerate() {
        let mut g: UnGraph<u32> = UnGraph::new();
        for v in 0..n as u32 {
            g.add_vertex(v);
        }
        for u in 0..n as u32 {
            for v in (u + 1)..n as u32 {
                g.add_edge(u, v);
            }
        }
        let cycles = paton::simple_cycles(&g);
        check_undirected_invariants("paton-cycles", &g, &cycles);
        assert_eq!(cycles.len(), want, "failed for K{}", n);
        let base = paton::cycle_base(&g);
        check_undirected_invariants("paton-base", &g, &base);
        assert_eq!(base.len(), want, "failed for K{} base", n);
    }
}

#[test]
fn test_paton_self_loop() {
    let g = ungraph(&[(0, 0)]);
    assert_eq!(paton::simple_cycles(&g), vec![vec![0]]);
    assert_eq!(paton::cycle_base(&g), vec![vec![0]]);

    // A self-loop beside a triangle adds exactly one length-1 cycle.
    let g = ungraph(&[(0, 1), (1, 2), (2, 0), (1, 1)]);
    let cycles = paton::simple_cycles(&g);
    check_undirected_invariants("paton-cycles", &g, &cycles);
    assert_eq!(cycles.len(), 2);
    assert_eq!(cycles.iter().filter(|c| c.len() == 1).count(), 1);
}

#[test]
fn test_paton_disconnected() {
    // Two triangles in separate components plus an isolated vertex.
    let mut g = ungraph(&[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
    g.add_vertex(6);
    for cycles in [paton::simple_cycles(&g), paton::cycle_base(&g)] {
        check_undirected_invariants("paton", &g, &cycles);
        assert_eq!(cycles.len(), 2);
    }
}

// ── graph views ──────────────────────────────────────────────────────────

#[test]
fn test_graph_views() {
    let g = two_pairs_graph();
    let verts: Vec<u32> = g.vertices().copied().collect();
    assert_eq!(verts, (0..9).collect::<Vec<u32>>());
    let succ: Vec<u32> = g.neighbors(&1).copied().collect();
    assert_eq!(succ, vec![0, 2]);
    assert!(g.contains_edge(&5, &6));
    assert!(!g.contains_edge(&6, &5));
    assert!(g.contains_vertex(&8));
    assert_eq!(g.vertex_count(), 9);
    assert_eq!(g.edge_count(), 10);

    // Duplicate insertions are coalesced.
    let mut g2 = two_pairs_graph();
    assert!(!g2.add_edge(0, 1));
    assert_eq!(g2.edge_count(), 10);

    // Undirected incidence yields the other endpoint; a self-loop yields
    // the vertex itself.
    let u = ungraph(&[(0, 1), (1, 1)]);
    let inc: Vec<u32> = u.neighbors(&1).copied().collect();
    assert_eq!(inc, vec![0, 1]);
    assert!(u.contains_edge(&1, &0));
    assert_eq!(u.edge_count(), 2);
}

// ── summary statistics ───────────────────────────────────────────────────

#[test]
fn test_cycle_summary() {
    let g = DiGraph::from_edges([(0u32, 1u32), (1, 0), (2, 2)]);
    let cycles = find_simple_cycles(Algorithm::Johnson, &g);
    let stats = cycle_summary(&cycles);
    assert_eq!(stats.num_cycles, 2);
    assert_eq!(stats.num_self_loops, 1);
    assert_eq!(stats.min_len, 1);
    assert_eq!(stats.max_len, 2);
    assert_eq!(stats.total_vertices, 3);

    let empty: Vec<Vec<u32>> = Vec::new();
    let stats = cycle_summary(&empty);
    assert_eq!(stats.num_cycles, 0);
    assert_eq!(stats.min_len, 0);
    assert_eq!(stats.max_len, 0);
}
