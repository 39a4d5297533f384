//! Utilities for tests and benchmarks: seeded random graphs, exhaustive graph
//! enumeration and brute force reference solvers.

use fxhash::FxHashSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::graph::UGraph;

/// Returns a graph on `n` nodes in which each of the possible edges is present with
/// probability `edge_prob`, drawn from a generator seeded with `seed`.
pub fn random_graph(n: usize, edge_prob: f64, seed: u64) -> UGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = UGraph::new(n);
    for src in 0..n {
        for trg in (src + 1)..n {
            if rng.gen_bool(edge_prob) {
                graph.add_edge(src, trg).expect("`src` and `trg` are distinct nodes of `graph`");
            }
        }
    }
    graph
}

/// Iterator over all graphs on `n` labeled nodes, driven by a bitmask over the possible
/// edges.
pub struct GraphEnumerator {
    n: usize,
    mask: usize,
    last_mask: usize,
}

impl GraphEnumerator {
    pub fn new(n: usize) -> Self {
        GraphEnumerator {
            n,
            mask: 0,
            last_mask: 1 << (n * (n - 1) / 2),
        }
    }
}

impl Iterator for GraphEnumerator {
    type Item = UGraph;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == self.last_mask {
            return None
        }
        let mut graph = UGraph::new(self.n);
        let mut check = 0;
        for src in 0..self.n {
            for trg in (src + 1)..self.n {
                if self.mask & (1 << check) != 0 {
                    graph.add_edge(src, trg).expect("`src` and `trg` are distinct nodes of `graph`");
                }
                check += 1;
            }
        }
        self.mask += 1;
        Some(graph)
    }
}

/// Computes a minimum vertex cover of `graph` by subset enumeration. Only sensible for
/// small graphs.
pub fn brute_force_cover(graph: &UGraph) -> FxHashSet<usize> {
    let nodes: Vec<usize> = graph.nodes().collect();
    let edge_list: Vec<(usize, usize)> = graph.edges().collect();
    let mut best: Option<FxHashSet<usize>> = None;
    for mask in 0..(1usize << nodes.len()) {
        if let Some(incumbent) = best.as_ref() {
            if incumbent.len() <= mask.count_ones() as usize {
                continue
            }
        }
        let subset: FxHashSet<usize> = nodes.iter()
            .enumerate()
            .filter(|(pos, _)| mask & (1 << pos) != 0)
            .map(|(_, node)| *node)
            .collect();
        if edge_list.iter().all(|(src, trg)| subset.contains(src) || subset.contains(trg)) {
            best = Some(subset);
        }
    }
    best.expect("the full node set covers every edge")
}

/// Computes a minimum dominating set of `graph` by subset enumeration. Only sensible for
/// small graphs.
pub fn brute_force_dominating_set(graph: &UGraph) -> FxHashSet<usize> {
    let nodes: Vec<usize> = graph.nodes().collect();
    let mut best: Option<FxHashSet<usize>> = None;
    for mask in 0..(1usize << nodes.len()) {
        if let Some(incumbent) = best.as_ref() {
            if incumbent.len() <= mask.count_ones() as usize {
                continue
            }
        }
        let subset: FxHashSet<usize> = nodes.iter()
            .enumerate()
            .filter(|(pos, _)| mask & (1 << pos) != 0)
            .map(|(_, node)| *node)
            .collect();
        let dominates = nodes.iter().all(|node| {
            subset.contains(node)
                || graph.neighbors(*node).as_ref().expect("`node` exists")
                    .iter()
                    .any(|neigh| subset.contains(neigh))
        });
        if dominates {
            best = Some(subset);
        }
    }
    best.expect("the full node set dominates every node")
}

/// Checks if `graph` is chordal by exhaustive search for an induced cycle of length at
/// least four. Such a cycle is exactly a connected 2-regular induced subgraph on at
/// least four nodes. Only sensible for small graphs.
pub fn is_chordal(graph: &UGraph) -> bool {
    let nodes: Vec<usize> = graph.nodes().collect();
    let n = nodes.len();
    let mut position = vec![usize::MAX; graph.num_reserved()];
    for (pos, node) in nodes.iter().enumerate() {
        position[*node] = pos;
    }
    let mut adj_masks = vec![0usize; n];
    for (pos, node) in nodes.iter().enumerate() {
        for neigh in graph.neighbors(*node).as_ref().expect("`node` exists") {
            adj_masks[pos] |= 1 << position[*neigh];
        }
    }
    for mask in 0..(1usize << n) {
        if (mask.count_ones() as usize) < 4 {
            continue
        }
        let mut two_regular = true;
        for pos in 0..n {
            if mask & (1 << pos) != 0 && (adj_masks[pos] & mask).count_ones() != 2 {
                two_regular = false;
                break
            }
        }
        if !two_regular {
            continue
        }
        // Connectivity over the members of `mask`.
        let mut reached = 1usize << mask.trailing_zeros();
        loop {
            let mut next = reached;
            for pos in 0..n {
                if reached & (1 << pos) != 0 {
                    next |= adj_masks[pos] & mask;
                }
            }
            if next == reached {
                break
            }
            reached = next;
        }
        if reached == mask {
            return false
        }
    }
    true
}
