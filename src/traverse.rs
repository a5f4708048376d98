//! Vertex numbering and degree passes shared by the directed finders.
//!
//! Every directed algorithm renames vertices to integers 0..n-1 by DFS
//! pre-order over the insertion-ordered vertex set and compares vertices by
//! that number only. Number space keeps every "index(a) < index(b)" test a
//! plain integer comparison and makes the per-start pruning thresholds
//! (Tiernan, Tarjan, Johnson) trivially correct.

/// Bidirectional rename between container slots and DFS pre-order numbers.
pub(crate) struct Numbering {
    /// slot -> pre-order number
    pub number: Vec<usize>,
    /// pre-order number -> slot
    pub slot: Vec<usize>,
}

/// Number vertices by iterative DFS pre-order. Roots are taken in insertion
/// order; out-neighbors are explored in edge insertion order.
pub(crate) fn preorder_numbering(succ: &[Vec<usize>]) -> Numbering {
    let n = succ.len();
    let mut number = vec![usize::MAX; n]; // MAX = unnumbered
    let mut slot = Vec::with_capacity(n);
    let mut next = 0usize;
    // In-progress visits: (vertex, position of its next neighbor)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if number[root] != usize::MAX {
            continue;
        }
        number[root] = next;
        slot.push(root);
        next += 1;
        stack.push((root, 0));

        while let Some(&(v, ni)) = stack.last() {
            if ni < succ[v].len() {
                let w = succ[v][ni];
                stack.last_mut().unwrap().1 += 1;
                if number[w] == usize::MAX {
                    number[w] = next;
                    slot.push(w);
                    next += 1;
                    stack.push((w, 0));
                }
            } else {
                stack.pop();
            }
        }
    }

    Numbering { number, slot }
}

/// Rewrite a slot-space adjacency into number space. Neighbor list order
/// (edge insertion order) is preserved.
pub(crate) fn renumbered_adjacency(succ: &[Vec<usize>], nm: &Numbering) -> Vec<Vec<usize>> {
    let mut adj = vec![Vec::new(); succ.len()];
    for (s, outs) in succ.iter().enumerate() {
        adj[nm.number[s]] = outs.iter().map(|&t| nm.number[t]).collect();
    }
    adj
}

/// In-degree of every vertex of `adj`.
pub(crate) fn in_degrees(adj: &[Vec<usize>]) -> Vec<usize> {
    let mut deg = vec![0usize; adj.len()];
    for outs in adj {
        for &w in outs {
            deg[w] += 1;
        }
    }
    deg
}
