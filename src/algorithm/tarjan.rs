use std::collections::HashSet;
use std::hash::Hash;

use crate::graph::DiGraph;
use crate::traverse::{preorder_numbering, renumbered_adjacency};
use crate::types::CycleError;

/// Tarjan's 1973 circuit enumeration.
///
/// R.E. Tarjan, "Enumeration of the elementary circuits of a directed
/// graph," SIAM J. Comput., 2(3):211-216, September 1973.
///
/// One DFS per start vertex, restricted to vertices numbered at or above the
/// start. The point stack holds the current path; the marked stack lets a
/// whole subtree be unmarked at once when a circuit was found below it.
/// The `removed` sets persist across start vertices — a successor once
/// proven below the current start never needs to be looked at again, which
/// is what gives the O(V * E * C) bound.
pub fn simple_cycles<V: Eq + Hash + Clone>(graph: &DiGraph<V>) -> Vec<Vec<V>> {
    let succ = graph.succ_lists();
    let n = succ.len();
    let nm = preorder_numbering(succ);
    let adj = renumbered_adjacency(succ, &nm);

    let mut cycles: Vec<Vec<usize>> = Vec::new();
    let mut marked = vec![false; n];
    let mut marked_stack: Vec<usize> = Vec::new();
    let mut point_stack: Vec<usize> = Vec::new();
    let mut removed: Vec<HashSet<usize>> = vec![HashSet::new(); n];

    // Search frames: (vertex, position of its next neighbor, circuit found
    // at or below it)
    let mut frames: Vec<(usize, usize, bool)> = Vec::new();

    for start in 0..n {
        point_stack.push(start);
        marked[start] = true;
        marked_stack.push(start);
        frames.push((start, 0, false));

        while let Some(&(v, ni, _)) = frames.last() {
            if ni < adj[v].len() {
                let w = adj[v][ni];
                frames.last_mut().unwrap().1 += 1;
                if removed[v].contains(&w) {
                    continue;
                }
                if w < start {
                    // Below the current start: useless for this and every
                    // later start.
                    removed[v].insert(w);
                } else if w == start {
                    // The point stack, from the start down to v, is a
                    // circuit. A self-loop on the start lands here too and
                    // emits the one-vertex cycle.
                    cycles.push(point_stack.clone());
                    frames.last_mut().unwrap().2 = true;
                } else if !marked[w] {
                    point_stack.push(w);
                    marked[w] = true;
                    marked_stack.push(w);
                    frames.push((w, 0, false));
                }
            } else {
                let (_, _, found) = frames.pop().unwrap();
                if found {
                    // Unmark everything marked since v was entered so those
                    // vertices can participate in further circuits through
                    // the start.
                    loop {
                        let u = marked_stack.pop().unwrap();
                        marked[u] = false;
                        if u == v {
                            break;
                        }
                    }
                }
                point_stack.pop();
                if found {
                    if let Some(parent) = frames.last_mut() {
                        parent.2 = true;
                    }
                }
            }
        }

        // Between start vertices every mark is dropped; removed persists.
        while let Some(u) = marked_stack.pop() {
            marked[u] = false;
        }
    }

    super::map_cycles(graph, &nm, cycles)
}

/// Stateful front-end over [`simple_cycles`].
pub struct TarjanSimpleCycles<'g, V> {
    graph: Option<&'g DiGraph<V>>,
}

impl<'g, V: Eq + Hash + Clone> TarjanSimpleCycles<'g, V> {
    pub fn new() -> Self {
        TarjanSimpleCycles { graph: None }
    }

    pub fn with_graph(graph: &'g DiGraph<V>) -> Self {
        TarjanSimpleCycles { graph: Some(graph) }
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

impl<'g, V: Eq + Hash + Clone> Default for TarjanSimpleCycles<'g, V> {
    fn default() -> Self {
        Self::new()
    }
}
