use std::collections::VecDeque;
use std::hash::Hash;

use crate::graph::UnGraph;
use crate::types::CycleError;

/// Queue discipline for the spanning-forest walk. LIFO grows a depth-first
/// forest; FIFO grows a breadth-first forest.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Discipline {
    Lifo,
    Fifo,
}

/// Fundamental cycle base of an undirected graph: one cycle per non-tree
/// edge of a depth-first spanning forest, |E| - |V| + #components cycles in
/// total, plus one length-1 cycle per self-loop.
///
/// K. Paton, "An algorithm for finding a fundamental set of cycles of a
/// graph," Comm. ACM, 12(9):514-518, September 1969.
pub fn cycle_base<V: Eq + Hash + Clone>(graph: &UnGraph<V>) -> Vec<Vec<V>> {
    paton(graph, Discipline::Lifo)
}

/// Fundamental cycles relative to a breadth-first spanning forest.
///
/// This is NOT the full set of simple cycles of the graph: the complete set
/// would require combining base cycles under symmetric difference, which
/// this library does not do. The count equals |E| - |V| + #components
/// (self-loops extra), the same as [`cycle_base`]; the cycles themselves
/// differ.
pub fn simple_cycles<V: Eq + Hash + Clone>(graph: &UnGraph<V>) -> Vec<Vec<V>> {
    paton(graph, Discipline::Fifo)
}

fn paton<V: Eq + Hash + Clone>(graph: &UnGraph<V>, discipline: Discipline) -> Vec<Vec<V>> {
    let adj = graph.adj_lists();
    let n = adj.len();

    let mut cycles: Vec<Vec<usize>> = Vec::new();
    let mut parent = vec![usize::MAX; n]; // MAX = not yet in the forest
    let mut depth = vec![0usize; n];
    let mut used: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut queue: VecDeque<usize> = VecDeque::new();

    for root in 0..n {
        if parent[root] != usize::MAX {
            continue;
        }
        parent[root] = root;
        queue.push_back(root);

        loop {
            let current = match discipline {
                Discipline::Lifo => queue.pop_back(),
                Discipline::Fifo => queue.pop_front(),
            };
            let current = match current {
                Some(c) => c,
                None => break,
            };

            for &neighbor in &adj[current] {
                if parent[neighbor] == usize::MAX {
                    // Tree edge: adopt into the spanning forest.
                    parent[neighbor] = current;
                    depth[neighbor] = depth[current] + 1;
                    used[neighbor].push(current);
                    queue.push_back(neighbor);
                } else if neighbor == current {
                    // Self-loop.
                    cycles.push(vec![current]);
                } else if !used[current].contains(&neighbor) {
                    // Chord: each non-tree edge closes exactly one cycle.
                    let cycle = match discipline {
                        Discipline::Lifo => chord_cycle_walk(current, neighbor, &parent, &used),
                        Discipline::Fifo => chord_cycle_lca(current, neighbor, &parent, &depth),
                    };
                    used[neighbor].push(current);
                    cycles.push(cycle);
                }
            }
        }
    }

    cycles
        .into_iter()
        .map(|cycle| {
            cycle
                .into_iter()
                .map(|s| graph.vertex_at(s).clone())
                .collect()
        })
        .collect()
}

/// Depth-first chord closure: walk tree ancestors of `current` down to the
/// first one the chord partner has already used (its tree parent or an
/// earlier chord partner; either way an edge back to `neighbor` exists).
fn chord_cycle_walk(
    current: usize,
    neighbor: usize,
    parent: &[usize],
    used: &[Vec<usize>],
) -> Vec<usize> {
    let mut cycle = vec![neighbor, current];
    let mut ancestor = parent[current];
    while !used[neighbor].contains(&ancestor) {
        cycle.push(ancestor);
        ancestor = parent[ancestor];
    }
    cycle.push(ancestor);
    cycle
}

/// Breadth-first chord closure: join the two tree paths at their deepest
/// common ancestor. In a breadth-first forest the chord partner's parent
/// need not lie on `current`'s ancestor path at all, so the depth-first
/// walk above would not terminate here.
fn chord_cycle_lca(
    current: usize,
    neighbor: usize,
    parent: &[usize],
    depth: &[usize],
) -> Vec<usize> {
    let mut up_current: Vec<usize> = Vec::new();
    let mut up_neighbor: Vec<usize> = Vec::new();
    let mut x = current;
    let mut y = neighbor;
    while depth[x] > depth[y] {
        x = parent[x];
        up_current.push(x);
    }
    while depth[y] > depth[x] {
        y = parent[y];
        up_neighbor.push(y);
    }
    while x != y {
        x = parent[x];
        up_current.push(x);
        y = parent[y];
        up_neighbor.push(y);
    }
    // x == y is the deepest common ancestor. It sits at the end of both
    // chains (when they moved); keep it on the current side only.
    let mut cycle = vec![neighbor, current];
    if up_current.last() == Some(&y) && y == neighbor {
        // The partner is itself the common ancestor; do not repeat it.
        up_current.pop();
        cycle.extend(up_current);
    } else {
        cycle.extend(up_current);
        if up_neighbor.last() == Some(&y) {
            up_neighbor.pop();
        }
        up_neighbor.reverse();
        cycle.extend(up_neighbor);
    }
    cycle
}

/// Stateful front-end over [`cycle_base`].
pub struct PatonCycleBase<'g, V> {
    graph: Option<&'g UnGraph<V>>,
}

impl<'g, V: Eq + Hash + Clone> PatonCycleBase<'g, V> {
    pub fn new() -> Self {
        PatonCycleBase { graph: None }
    }

    pub fn with_graph(graph: &'g UnGraph<V>) -> Self {
        PatonCycleBase { graph: Some(graph) }
    }

    pub fn set_graph(&mut self, graph: &'g UnGraph<V>) {
        self.graph = Some(graph);
    }

    pub fn graph(&self) -> Option<&'g UnGraph<V>> {
        self.graph
    }

    pub fn find_cycle_base(&self) -> Result<Vec<Vec<V>>, CycleError> {
        match self.graph {
            Some(g) => Ok(cycle_base(g)),
            None => Err(CycleError::InvalidArgument("no graph bound".to_string())),
        }
    }

    pub fn count_cycle_base(&self) -> Result<usize, CycleError> {
        Ok(self.find_cycle_base()?.len())
    }
}

impl<'g, V: Eq + Hash + Clone> Default for PatonCycleBase<'g, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Stateful front-end over [`simple_cycles`].
pub struct PatonSimpleCycles<'g, V> {
    graph: Option<&'g UnGraph<V>>,
}

impl<'g, V: Eq + Hash + Clone> PatonSimpleCycles<'g, V> {
    pub fn new() -> Self {
        PatonSimpleCycles { graph: None }
    }

    pub fn with_graph(graph: &'g UnGraph<V>) -> Self {
        PatonSimpleCycles { graph: Some(graph) }
    }

    pub fn set_graph(&mut self, graph: &'g UnGraph<V>) {
        self.graph = Some(graph);
    }

    pub fn graph(&self) -> Option<&'g UnGraph<V>> {
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

impl<'g, V: Eq + Hash + Clone> Default for PatonSimpleCycles<'g, V> {
    fn default() -> Self {
        Self::new()
    }
}
