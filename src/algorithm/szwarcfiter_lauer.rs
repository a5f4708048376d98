use std::collections::HashSet;
use std::hash::Hash;

use crate::graph::DiGraph;
use crate::scc::{is_nontrivial, strong_components};
use crate::traverse::{in_degrees, preorder_numbering, renumbered_adjacency};
use crate::types::CycleError;

/// Szwarcfiter-Lauer circuit enumeration, O(V + E*C).
///
/// J.L. Szwarcfiter and P.E. Lauer, "A search strategy for the elementary
/// cycles of a directed graph," BIT Numerical Mathematics, 16:192-204, 1976.
///
/// One search per strong component of the whole graph, rooted at the
/// component's vertex of maximum in-degree. `position` tracks where each
/// path vertex sits on the stack (1-based; |V| once finalized); each frame
/// carries `q`, the deepest stack position holding a vertex that had never
/// been finalized when it was pushed. A back edge into a position at or
/// below `q` closes a cycle that cannot have been reported before; the
/// emitted slice runs from that position up to the top of the stack.
/// `removed` and the b-sets defer re-exploration of a successor exactly
/// until an unmark could expose a new cycle through it.
pub fn simple_cycles<V: Eq + Hash + Clone>(graph: &DiGraph<V>) -> Vec<Vec<V>> {
    let succ = graph.succ_lists();
    let n = succ.len();
    let nm = preorder_numbering(succ);
    let adj = renumbered_adjacency(succ, &nm);
    let indeg = in_degrees(&adj);

    let mut cycles: Vec<Vec<usize>> = Vec::new();
    let mut marked = vec![false; n];
    let mut stack: Vec<usize> = Vec::new();
    let mut position = vec![0usize; n];
    let mut reach = vec![false; n];
    let mut removed: Vec<HashSet<usize>> = vec![HashSet::new(); n];
    let mut b_sets: Vec<HashSet<usize>> = vec![HashSet::new(); n];

    // Search frames: (vertex, its q threshold, position of its next
    // neighbor, cycle found at or below it)
    let mut frames: Vec<(usize, usize, usize, bool)> = Vec::new();

    for comp in strong_components(&adj, 0) {
        if !is_nontrivial(&adj, &comp) {
            continue;
        }

        // Root the search at the component's maximum in-degree vertex,
        // lowest number on ties.
        let mut members = comp;
        members.sort_unstable();
        let mut root = members[0];
        for &v in &members[1..] {
            if indeg[v] > indeg[root] {
                root = v;
            }
        }

        // cycle(root, 0)
        marked[root] = true;
        stack.push(root);
        position[root] = 1;
        let q0 = if reach[root] { 0 } else { 1 };
        frames.push((root, q0, 0, false));

        while let Some(&(v, q, ni, _)) = frames.last() {
            if ni < adj[v].len() {
                let w = adj[v][ni];
                frames.last_mut().unwrap().2 += 1;
                if removed[v].contains(&w) {
                    continue;
                }
                if !marked[w] {
                    marked[w] = true;
                    stack.push(w);
                    let t = stack.len();
                    position[w] = t;
                    let qw = if reach[w] { q } else { t };
                    frames.push((w, qw, 0, false));
                } else if position[w] <= q {
                    // Back edge into the fresh part of the path: the stack
                    // slice from w's position through the top is a new cycle.
                    cycles.push(stack[position[w] - 1..].to_vec());
                    frames.last_mut().unwrap().3 = true;
                } else {
                    no_cycle(v, w, &mut removed, &mut b_sets);
                }
            } else {
                let (v, _, _, found) = frames.pop().unwrap();
                stack.pop();
                if found {
                    unmark(v, &mut marked, &mut removed, &mut b_sets);
                }
                reach[v] = true;
                position[v] = n;
                if let Some(parent) = frames.last_mut() {
                    if found {
                        parent.3 = true;
                    } else {
                        let pv = parent.0;
                        no_cycle(pv, v, &mut removed, &mut b_sets);
                    }
                }
            }
        }
    }

    super::map_cycles(graph, &nm, cycles)
}

/// Exploring y from x yielded nothing: prune the edge and register x for
/// reinstatement when y is unmarked.
fn no_cycle(
    x: usize,
    y: usize,
    removed: &mut [HashSet<usize>],
    b_sets: &mut [HashSet<usize>],
) {
    b_sets[y].insert(x);
    removed[x].insert(y);
}

/// Unmark `x`, reinstating the pruned edges registered on it and cascading
/// into any still-marked dependents.
fn unmark(
    x: usize,
    marked: &mut [bool],
    removed: &mut [HashSet<usize>],
    b_sets: &mut [HashSet<usize>],
) {
    let mut work = vec![x];
    while let Some(u) = work.pop() {
        marked[u] = false;
        for y in b_sets[u].drain() {
            removed[y].remove(&u);
            if marked[y] {
                work.push(y);
            }
        }
    }
}

/// Stateful front-end over [`simple_cycles`].
pub struct SzwarcfiterLauerSimpleCycles<'g, V> {
    graph: Option<&'g DiGraph<V>>,
}

impl<'g, V: Eq + Hash + Clone> SzwarcfiterLauerSimpleCycles<'g, V> {
    pub fn new() -> Self {
        SzwarcfiterLauerSimpleCycles { graph: None }
    }

    pub fn with_graph(graph: &'g DiGraph<V>) -> Self {
        SzwarcfiterLauerSimpleCycles { graph: Some(graph) }
    }

    pub fn set_graph(&mut self, graph: &'g DiGraph<V>) {
        self.graph = Some(graph);
    }

    pub fn graph(&self) -> Option<&'g DiGraph<V>> {
        self.graph
    }

    pub fn find_simple_cycles(&self) -> Result<Vec<Vec<V>>, CycleError> {
        match self.graph {
            Some(g) => Ok(simple_cycles(g)),
            None => Err(CycleError::InvalidArgument("no graph bound".to_string())),
        }
    }

    pub fn count_simple_cycles(&self) -> Result<usize, CycleError> {
        Ok(self.find_simple_cycles()?.len())
    }
}

impl<'g, V: Eq + Hash + Clone> Default for SzwarcfiterLauerSimpleCycles<'g, V> {
    fn default() -> Self {
        Self::new()
    }
}
