pub mod tiernan;
pub mod tarjan;
pub mod johnson;
pub mod szwarcfiter_lauer;
pub mod paton;

use std::hash::Hash;

use crate::graph::DiGraph;
use crate::traverse::Numbering;
use crate::types::Algorithm;

/// Map cycles of internal vertex numbers back to caller vertices.
pub(crate) fn map_cycles<V: Eq + Hash + Clone>(
    graph: &DiGraph<V>,
    nm: &Numbering,
    cycles: Vec<Vec<usize>>,
) -> Vec<Vec<V>> {
    cycles
        .into_iter()
        .map(|cycle| {
            cycle
                .into_iter()
                .map(|x| graph.vertex_at(nm.slot[x]).clone())
                .collect()
        })
        .collect()
}

/// Dispatch to the selected directed cycle enumeration algorithm.
pub fn find_simple_cycles<V: Eq + Hash + Clone>(
    algorithm: Algorithm,
    graph: &DiGraph<V>,
) -> Vec<Vec<V>> {
    match algorithm {
        Algorithm::Tiernan => tiernan::simple_cycles(graph),
        Algorithm::Tarjan => tarjan::simple_cycles(graph),
        Algorithm::Johnson => johnson::simple_cycles(graph),
        Algorithm::SzwarcfiterLauer => szwarcfiter_lauer::simple_cycles(graph),
    }
}

/// Count simple cycles with the selected algorithm.
pub fn count_simple_cycles<V: Eq + Hash + Clone>(
    algorithm: Algorithm,
    graph: &DiGraph<V>,
) -> usize {
    find_simple_cycles(algorithm, graph).len()
}
