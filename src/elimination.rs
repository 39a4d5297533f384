//! Maximum cardinality search and perfect elimination orderings.

use std::collections::BTreeSet;
use crate::graph::UGraph;

/// An elimination ordering of a graph.
///
/// `order[0]` is the first eliminated node; for a chordal graph the ordering computed by
/// maximum cardinality search is perfect, each node's later neighbors form a clique.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct EliminationOrder {
    /// The nodes in elimination order.
    pub order: Vec<usize>,
    /// The position of each node in `order`, `usize::MAX` for reserved slots without a
    /// node.
    pub rank: Vec<usize>,
}

impl EliminationOrder {

    /// Computes an elimination ordering of `graph` by maximum cardinality search.
    ///
    /// Repeatedly selects the unnumbered node with the most numbered neighbors (ties
    /// broken towards the smallest node id) and assigns ranks from the last eliminated
    /// node down to the first. The buckets are ordered sets keyed by the numbered
    /// neighbor count, so the search is deterministic.
    pub fn maximum_cardinality_search(graph: &UGraph) -> Self {
        let num_reserved = graph.num_reserved();
        let n = graph.num_nodes();
        let mut buckets: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); n + 1];
        let mut count = vec![0usize; num_reserved];
        let mut numbered = vec![false; num_reserved];
        for node in graph.nodes() {
            buckets[0].insert(node);
        }
        let mut max_count = 0;
        let mut selection: Vec<usize> = Vec::with_capacity(n);
        while selection.len() < n {
            while max_count > 0 && buckets[max_count].is_empty() {
                max_count -= 1;
            }
            let node = *buckets[max_count].iter().next().expect("an unnumbered node remains");
            buckets[max_count].remove(&node);
            numbered[node] = true;
            selection.push(node);
            for neigh in graph.neighbors(node).as_ref().expect("`node` exists") {
                if !numbered[*neigh] {
                    buckets[count[*neigh]].remove(neigh);
                    count[*neigh] += 1;
                    buckets[count[*neigh]].insert(*neigh);
                    if count[*neigh] > max_count {
                        max_count = count[*neigh];
                    }
                }
            }
        }
        // The search numbers nodes from the last eliminated end.
        selection.reverse();
        let mut rank = vec![usize::MAX; num_reserved];
        for (pos, node) in selection.iter().enumerate() {
            rank[*node] = pos;
        }
        EliminationOrder {
            order: selection,
            rank,
        }
    }

    /// Checks if `self` is a perfect elimination ordering of `graph`: the ordering covers
    /// the nodes of `graph` exactly and each node's later neighbors form a clique.
    ///
    /// The clique condition only needs each node's later neighborhood checked against the
    /// earliest ranked member of that neighborhood, which keeps the pass linear.
    pub fn is_perfect(&self, graph: &UGraph) -> bool {
        if self.order.len() != graph.num_nodes() {
            return false
        }
        let mut seen = vec![false; graph.num_reserved()];
        for node in &self.order {
            if *node >= graph.num_reserved()
                || *node >= self.rank.len()
                || graph.neighbors(*node).is_none()
                || seen[*node] {
                return false
            }
            seen[*node] = true;
        }
        for node in &self.order {
            let neighbors = graph.neighbors(*node).as_ref().expect("`node` exists");
            let later: Vec<usize> = neighbors.iter()
                .copied()
                .filter(|neigh| self.rank[*neigh] > self.rank[*node] && self.rank[*neigh] != usize::MAX)
                .collect();
            if let Some(first) = later.iter().copied().min_by_key(|neigh| self.rank[*neigh]) {
                let first_neighbors = graph.neighbors(first).as_ref().expect("`first` exists");
                if later.iter().any(|neigh| *neigh != first && !first_neighbors.contains(neigh)) {
                    return false
                }
            }
        }
        true
    }

}
