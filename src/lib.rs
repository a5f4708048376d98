//! Enumeration of simple cycles (elementary circuits) in graphs.
//!
//! Four algorithms cover directed graphs — Tiernan, Tarjan (1973), Johnson
//! and Szwarcfiter-Lauer — and Paton's spanning-forest method covers
//! undirected graphs, either as a depth-first cycle base or as fundamental
//! cycles of a breadth-first forest. A Tarjan (1972) strongly-connected-
//! components utility is exposed alongside, and is what the Johnson and
//! Szwarcfiter-Lauer searches are scoped by internally.
//!
//! A self-loop counts as a cycle of length one. Every algorithm emits one
//! rotation per distinct cycle, in an order determined entirely by vertex
//! and edge insertion order.
//!
//! ```
//! use circuits::{find_simple_cycles, Algorithm, DiGraph};
//!
//! let mut g = DiGraph::new();
//! g.add_edge("a", "b");
//! g.add_edge("b", "a");
//! g.add_edge("b", "c");
//! let cycles = find_simple_cycles(Algorithm::Johnson, &g);
//! assert_eq!(cycles, vec![vec!["a", "b"]]);
//! ```

pub mod types;
pub mod graph;
pub mod scc;
pub mod algorithm;
mod traverse;

// Re-exports for convenience
pub use types::{cycle_summary, Algorithm, CycleError, CycleSummary};
pub use graph::{DiGraph, UnGraph};
pub use scc::{count_all_sccs, count_sccs, find_all_sccs, find_sccs};
pub use algorithm::{count_simple_cycles, find_simple_cycles};
pub use algorithm::tiernan::TiernanSimpleCycles;
pub use algorithm::tarjan::TarjanSimpleCycles;
pub use algorithm::johnson::JohnsonSimpleCycles;
pub use algorithm::szwarcfiter_lauer::SzwarcfiterLauerSimpleCycles;
pub use algorithm::paton::{PatonCycleBase, PatonSimpleCycles};
