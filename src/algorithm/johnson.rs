use std::collections::HashSet;
use std::hash::Hash;

use crate::graph::DiGraph;
use crate::scc::{is_nontrivial, strong_components};
use crate::traverse::{preorder_numbering, renumbered_adjacency};
use crate::types::CycleError;

/// Johnson's circuit enumeration.
///
/// D.B. Johnson, "Finding all the elementary circuits of a directed graph,"
/// SIAM J. Comput., 4(1):77-84, March 1975.
///
/// Start vertices are processed in number order. Each round restricts the
/// search to the least strong component: among components of the subgraph
/// induced on vertices at or above the current threshold that still contain
/// a cycle, the one owning the smallest vertex. Within it, a vertex stays
/// blocked after exploration exactly until some circuit through the start
/// could use it again; the b-sets record who to unblock when. This
/// discipline gives O((V + E) * (C + 1)).
pub fn simple_cycles<V: Eq + Hash + Clone>(graph: &DiGraph<V>) -> Vec<Vec<V>> {
    let succ = graph.succ_lists();
    let n = succ.len();
    let nm = preorder_numbering(succ);
    let adj = renumbered_adjacency(succ, &nm);

    let mut cycles: Vec<Vec<usize>> = Vec::new();
    let mut blocked = vec![false; n];
    let mut b_sets: Vec<HashSet<usize>> = vec![HashSet::new(); n];
    let mut in_scg = vec![false; n];
    let mut path: Vec<usize> = Vec::new();
    // Search frames: (vertex, position of its next neighbor, circuit found
    // at or below it)
    let mut frames: Vec<(usize, usize, bool)> = Vec::new();

    let mut threshold = 0usize;
    while threshold < n {
        let mut best: Option<(Vec<usize>, usize)> = None;
        for comp in strong_components(&adj, threshold) {
            if !is_nontrivial(&adj, &comp) {
                continue;
            }
            let least = *comp.iter().min().unwrap();
            let replace = match &best {
                Some((_, s)) => least < *s,
                None => true,
            };
            if replace {
                best = Some((comp, least));
            }
        }
        let (scg, start) = match best {
            Some(pair) => pair,
            None => break,
        };

        for &v in &scg {
            in_scg[v] = true;
            blocked[v] = false;
            b_sets[v].clear();
        }

        // circuit(start, start)
        path.push(start);
        blocked[start] = true;
        frames.push((start, 0, false));

        while let Some(&(v, ni, _)) = frames.last() {
            if ni < adj[v].len() {
                let w = adj[v][ni];
                frames.last_mut().unwrap().1 += 1;
                if !in_scg[w] {
                    continue;
                }
                if w == start {
                    cycles.push(path.clone());
                    frames.last_mut().unwrap().2 = true;
                } else if !blocked[w] {
                    path.push(w);
                    blocked[w] = true;
                    frames.push((w, 0, false));
                }
            } else {
                let (_, _, found) = frames.pop().unwrap();
                if found {
                    unblock(v, &mut blocked, &mut b_sets);
                } else {
                    // No circuit below v this time: defer v's unblocking
                    // until one of its successors is unblocked.
                    for &w in &adj[v] {
                        if in_scg[w] {
                            b_sets[w].insert(v);
                        }
                    }
                }
                path.pop();
                if found {
                    if let Some(parent) = frames.last_mut() {
                        parent.2 = true;
                    }
                }
            }
        }

        for &v in &scg {
            in_scg[v] = false;
        }
        threshold = start + 1;
    }

    super::map_cycles(graph, &nm, cycles)
}

/// Unblock `v` and, transitively, every vertex whose unblocking was deferred
/// on it.
fn unblock(v: usize, blocked: &mut [bool], b_sets: &mut [HashSet<usize>]) {
    let mut work = vec![v];
    while let Some(u) = work.pop() {
        blocked[u] = false;
        for w in b_sets[u].drain() {
            if blocked[w] {
                work.push(w);
            }
        }
    }
}

/// Stateful front-end over [`simple_cycles`].
pub struct JohnsonSimpleCycles<'g, V> {
    graph: Option<&'g DiGraph<V>>,
}

impl<'g, V: Eq + Hash + Clone> JohnsonSimpleCycles<'g, V> {
    pub fn new() -> Self {
        JohnsonSimpleCycles { graph: None }
    }

    pub fn with_graph(graph: &'g DiGraph<V>) -> Self {
        JohnsonSimpleCycles { graph: Some(graph) }
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

impl<'g, V: Eq + Hash + Clone> Default for JohnsonSimpleCycles<'g, V> {
    fn default() -> Self {
        Self::new()
    }
}
