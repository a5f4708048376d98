//! Strongly connected components.
//!
//! R.E. Tarjan, "Depth-first search and linear graph algorithms,"
//! SIAM J. Comput., 1(2):146-160, June 1972.
//!
//! Shared primitive: Johnson restricts each search round to one strong
//! component of an induced subgraph, and Szwarcfiter-Lauer roots one search
//! per component of the whole graph.

use std::hash::Hash;

use crate::graph::DiGraph;

/// Strongly connected components of the subgraph induced on vertices
/// `lower..adj.len()`. Edges into vertices below `lower` are treated as
/// absent, which is how Johnson scopes each of its rounds.
///
/// Single-pass index/lowlink search: each vertex is stamped with a
/// visitation number and a low value, the smallest number reachable from
/// its search subtree through one edge into the open part of the stack.
/// A vertex whose low value still equals its own number when its visit
/// finishes closes a component, consisting of everything at or above it on
/// the open stack. `open_mark` is the O(1) on-stack test. Components come
/// out in completion order, sinks first, so a component is always emitted
/// before any component that can reach it.
pub(crate) fn strong_components(adj: &[Vec<usize>], lower: usize) -> Vec<Vec<usize>> {
    const UNVISITED: usize = usize::MAX;
    let mut number = vec![UNVISITED; adj.len()];
    let mut low = vec![0usize; adj.len()];
    let mut clock = 0usize;
    let mut open: Vec<usize> = Vec::new();
    let mut open_mark = vec![false; adj.len()];
    let mut components: Vec<Vec<usize>> = Vec::new();
    // One entry per in-progress visit: the vertex, the vertex to fold its
    // low value into when it finishes, and its remaining neighbors.
    let mut visits: Vec<(usize, usize, std::slice::Iter<'_, usize>)> = Vec::new();

    for seed in lower..adj.len() {
        if number[seed] != UNVISITED {
            continue;
        }
        number[seed] = clock;
        low[seed] = clock;
        clock += 1;
        open.push(seed);
        open_mark[seed] = true;
        visits.push((seed, seed, adj[seed].iter()));

        while !visits.is_empty() {
            let top = visits.len() - 1;
            let v = visits[top].0;
            let next = visits[top].2.find(|&&w| w >= lower).copied();
            match next {
                Some(w) if number[w] == UNVISITED => {
                    number[w] = clock;
                    low[w] = clock;
                    clock += 1;
                    open.push(w);
                    open_mark[w] = true;
                    visits.push((w, v, adj[w].iter()));
                }
                Some(w) => {
                    if open_mark[w] && number[w] < low[v] {
                        low[v] = number[w];
                    }
                }
                None => {
                    let (fin, up, _) = visits.pop().unwrap();
                    if low[fin] < low[up] {
                        low[up] = low[fin];
                    }
                    if low[fin] == number[fin] {
                        let first = open.iter().rposition(|&u| u == fin).unwrap();
                        let members = open.split_off(first);
                        for &u in &members {
                            open_mark[u] = false;
                        }
                        components.push(members);
                    }
                }
            }
        }
    }

    components
}

/// True if the component contains at least one cycle: more than one vertex,
/// or a single vertex carrying a self-loop.
pub(crate) fn is_nontrivial(adj: &[Vec<usize>], scc: &[usize]) -> bool {
    scc.len() > 1 || adj[scc[0]].contains(&scc[0])
}

/// Strongly connected components that contain at least one cycle: size two
/// or more, or a single vertex with a self-loop.
///
/// ```
/// use circuits::{find_sccs, DiGraph};
///
/// let g = DiGraph::from_edges([(0, 1), (1, 0), (1, 2)]);
/// assert_eq!(find_sccs(&g).len(), 1);
/// ```
pub fn find_sccs<V: Eq + Hash + Clone>(graph: &DiGraph<V>) -> Vec<Vec<V>> {
    let adj = graph.succ_lists();
    strong_components(adj, 0)
        .into_iter()
        .filter(|scc| is_nontrivial(adj, scc))
        .map(|scc| scc.into_iter().map(|s| graph.vertex_at(s).clone()).collect())
        .collect()
}

/// Number of strongly connected components that contain at least one cycle.
pub fn count_sccs<V: Eq + Hash + Clone>(graph: &DiGraph<V>) -> usize {
    let adj = graph.succ_lists();
    strong_components(adj, 0)
        .iter()
        .filter(|scc| is_nontrivial(adj, scc))
        .count()
}

/// All strongly connected components, single-vertex ones included.
pub fn find_all_sccs<V: Eq + Hash + Clone>(graph: &DiGraph<V>) -> Vec<Vec<V>> {
    strong_components(graph.succ_lists(), 0)
        .into_iter()
        .map(|scc| scc.into_iter().map(|s| graph.vertex_at(s).clone()).collect())
        .collect()
}

/// Number of strongly connected components, single-vertex ones included.
pub fn count_all_sccs<V: Eq + Hash + Clone>(graph: &DiGraph<V>) -> usize {
    strong_components(graph.succ_lists(), 0).len()
}
