use std::collections::HashSet;
use std::hash::Hash;

use crate::graph::DiGraph;
use crate::traverse::{preorder_numbering, renumbered_adjacency};
use crate::types::CycleError;

/// Tiernan's path-extension search (EC2-EC5).
///
/// J.C. Tiernan, "An efficient search algorithm to find the elementary
/// circuits of a graph," Comm. ACM, 13(12):722-726, December 1970.
///
/// Grows a path one vertex at a time, only into vertices numbered above the
/// path's first vertex, and confirms a circuit whenever an edge closes the
/// path back to its start. The per-vertex blocked sets record successors
/// already exhausted at the current path prefix and are wiped whenever the
/// path retreats past their owner. Worst case O(V * C^V); fine on sparse
/// realistic graphs.
pub fn simple_cycles<V: Eq + Hash + Clone>(graph: &DiGraph<V>) -> Vec<Vec<V>> {
    let succ = graph.succ_lists();
    let n = succ.len();
    let nm = preorder_numbering(succ);
    let adj = renumbered_adjacency(succ, &nm);

    let mut cycles: Vec<Vec<usize>> = Vec::new();
    let mut on_path = vec![false; n];
    let mut blocked: Vec<HashSet<usize>> = vec![HashSet::new(); n];

    for start in 0..n {
        let mut path: Vec<usize> = vec![start];
        on_path[start] = true;

        loop {
            // Path extension: grow while some successor is above the start,
            // off the path, and not blocked at the current endpoint.
            loop {
                let end = *path.last().unwrap();
                let next = adj[end]
                    .iter()
                    .copied()
                    .find(|&w| w > start && !on_path[w] && !blocked[end].contains(&w));
                match next {
                    Some(w) => {
                        path.push(w);
                        on_path[w] = true;
                    }
                    None => break,
                }
            }

            // Circuit confirmation: an edge back to the start closes the
            // path. With path = [start] this is the self-loop case.
            let end = *path.last().unwrap();
            if adj[end].contains(&start) {
                cycles.push(path.clone());
            }

            // Vertex closure: retreat one vertex and block the one we left
            // at its new predecessor.
            if path.len() > 1 {
                blocked[end].clear();
                path.pop();
                on_path[end] = false;
                blocked[*path.last().unwrap()].insert(end);
                continue;
            }

            // Advance initial vertex.
            on_path[start] = false;
            for b in &mut blocked {
                b.clear();
            }
            break;
        }
    }

    super::map_cycles(graph, &nm, cycles)
}

/// Stateful front-end over [`simple_cycles`]: bind a graph, then query it.
pub struct TiernanSimpleCycles<'g, V> {
    graph: Option<&'g DiGraph<V>>,
}

impl<'g, V: Eq + Hash + Clone> TiernanSimpleCycles<'g, V> {
    /// Create an unbound finder; binding a graph is required before use.
    pub fn new() -> Self {
        TiernanSimpleCycles { graph: None }
    }

    pub fn with_graph(graph: &'g DiGraph<V>) -> Self {
        TiernanSimpleCycles { graph: Some(graph) }
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

impl<'g, V: Eq + Hash + Clone> Default for TiernanSimpleCycles<'g, V> {
    fn default() -> Self {
        Self::new()
    }
}
