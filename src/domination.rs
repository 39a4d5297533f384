//! Minimum dominating sets of chordal graphs along a perfect elimination ordering.

use fxhash::FxHashSet;
use crate::graph::UGraph;
use crate::elimination::EliminationOrder;
use crate::cust_error::ProcessingError;

/// A domination instance over a chordal graph and one of its perfect elimination
/// orderings. The graph and the ordering are read-only for the lifetime of the instance.
#[derive(Debug)]
pub struct DominationInstance<'a> {
    graph: &'a UGraph,
    order: &'a EliminationOrder,
}

impl<'a> DominationInstance<'a> {

    /// Creates an instance over `graph` and `order`.
    /// Returns an `InconsistentState` error if `order` does not cover the nodes of
    /// `graph` exactly.
    pub fn new(graph: &'a UGraph, order: &'a EliminationOrder) -> Result<Self, ProcessingError> {
        if order.order.len() != graph.num_nodes() {
            return Err(ProcessingError::InconsistentState(
                "the ordering and the graph differ in size".to_owned()))
        }
        let mut seen = vec![false; graph.num_reserved()];
        for node in &order.order {
            if *node >= graph.num_reserved()
                || *node >= order.rank.len()
                || graph.neighbors(*node).is_none()
                || order.rank[*node] == usize::MAX
                || seen[*node] {
                return Err(ProcessingError::InconsistentState(
                    format!("the ordering does not cover node {} exactly once", node)))
            }
            seen[*node] = true;
        }
        Ok(DominationInstance {
            graph,
            order,
        })
    }

    fn undominated_closed_count(&self, node: usize, dominated: &[bool]) -> usize {
        let neighbors = self.graph.neighbors(node).as_ref().expect("`node` exists");
        let mut count = neighbors.iter().filter(|neigh| !dominated[**neigh]).count();
        if !dominated[node] {
            count += 1;
        }
        count
    }

    fn undominated_closed_neighborhood(&self, node: usize, dominated: &[bool]) -> FxHashSet<usize> {
        let neighbors = self.graph.neighbors(node).as_ref().expect("`node` exists");
        let mut undominated: FxHashSet<usize> = neighbors.iter()
            .copied()
            .filter(|neigh| !dominated[*neigh])
            .collect();
        if !dominated[node] {
            undominated.insert(node);
        }
        undominated
    }

    /// Runs the elimination order greedy and returns the found dominating set.
    ///
    /// Processes nodes in elimination order. For the first undominated node `v` the
    /// closed later-neighborhood of `v` is a clique by perfectness; among these
    /// candidates the one with the most undominated nodes in its own closed neighborhood
    /// is selected (ties broken towards the smallest id) and its closed neighborhood is
    /// marked dominated. The result is a valid dominating set but not always a minimum
    /// one, so it serves as the incumbent of `minimum_dominating_set`.
    pub fn greedy_domination(&self) -> FxHashSet<usize> {
        let mut dominated = vec![false; self.graph.num_reserved()];
        let mut solution = FxHashSet::default();
        for node in &self.order.order {
            if dominated[*node] {
                continue
            }
            let mut candidates: Vec<usize> = self.graph.neighbors(*node).as_ref().expect("`node` exists")
                .iter()
                .copied()
                .filter(|neigh| self.order.rank[*neigh] > self.order.rank[*node])
                .collect();
            candidates.push(*node);
            candidates.sort_unstable();
            let mut pick = *node;
            let mut pick_gain = 0;
            for candidate in &candidates {
                let gain = self.undominated_closed_count(*candidate, &dominated);
                if gain > pick_gain {
                    pick = *candidate;
                    pick_gain = gain;
                }
            }
            solution.insert(pick);
            dominated[pick] = true;
            for neigh in self.graph.neighbors(pick).as_ref().expect("`pick` exists") {
                dominated[*neigh] = true;
            }
        }
        solution
    }

    /// Returns a lower bound on the size of any dominating set: the size of a packing of
    /// pairwise disjoint closed neighborhoods along the elimination order. Each packed
    /// neighborhood needs a dominator of its own.
    pub fn disjoint_neighborhood_bound(&self) -> usize {
        self.packing_bound(&vec![false; self.graph.num_reserved()])
    }

    fn packing_bound(&self, dominated: &[bool]) -> usize {
        let mut blocked = vec![false; self.graph.num_reserved()];
        let mut bound = 0;
        for node in &self.order.order {
            if dominated[*node] || blocked[*node] {
                continue
            }
            let neighbors = self.graph.neighbors(*node).as_ref().expect("`node` exists");
            if neighbors.iter().any(|neigh| blocked[*neigh]) {
                continue
            }
            bound += 1;
            blocked[*node] = true;
            for neigh in neighbors {
                blocked[*neigh] = true;
            }
        }
        bound
    }

    /// Computes a minimum dominating set.
    ///
    /// A bounded search over the dominators of the first undominated node in elimination
    /// order; every dominating set intersects that node's closed neighborhood, so the
    /// enumeration is exhaustive. The greedy solution is the incumbent, candidates are
    /// visited most-covering first so the first descent reproduces the greedy, and
    /// `packing_bound` prunes branches that can not improve on the incumbent. The
    /// incumbent is replaced on strict improvement only, which makes the result
    /// deterministic.
    pub fn minimum_dominating_set(&self) -> FxHashSet<usize> {
        let mut best = self.greedy_domination();
        if best.is_empty() {
            return best
        }
        let mut dominated = vec![false; self.graph.num_reserved()];
        let mut current = Vec::new();
        self.branch(0, &mut dominated, &mut current, &mut best);
        best
    }

    fn branch(
        &self,
        from: usize,
        dominated: &mut Vec<bool>,
        current: &mut Vec<usize>,
        best: &mut FxHashSet<usize>,
    ) {
        let mut idx = from;
        while idx < self.order.order.len() && dominated[self.order.order[idx]] {
            idx += 1;
        }
        if idx == self.order.order.len() {
            if current.len() < best.len() {
                *best = current.iter().copied().collect();
            }
            return
        }
        if current.len() + self.packing_bound(dominated) >= best.len() {
            return
        }
        let node = self.order.order[idx];
        let mut candidates: Vec<usize> = self.graph.neighbors(node).as_ref().expect("`node` exists")
            .iter()
            .copied()
            .collect();
        candidates.push(node);
        candidates.sort_unstable();
        let mut branches: Vec<(usize, FxHashSet<usize>)> = candidates.into_iter()
            .map(|candidate| (candidate, self.undominated_closed_neighborhood(candidate, dominated)))
            .collect();
        // A candidate whose undominated closed neighborhood is contained in another
        // candidate's can be swapped for that candidate without losing domination, so it
        // never has to be branched on. Equal neighborhoods keep the smaller id.
        let mut keep = vec![true; branches.len()];
        for a in 0..branches.len() {
            for b in 0..branches.len() {
                if a == b || !keep[a] || !keep[b] {
                    continue
                }
                let (node_a, set_a) = &branches[a];
                let (node_b, set_b) = &branches[b];
                if set_a.len() < set_b.len() {
                    if set_a.is_subset(set_b) {
                        keep[a] = false;
                    }
                } else if set_a.len() == set_b.len() && node_a > node_b && set_a == set_b {
                    keep[a] = false;
                }
            }
        }
        let mut kept_iter = keep.iter();
        branches.retain(|_| *kept_iter.next().expect("`keep` matches `branches`"));
        branches.sort_by(|(node_a, set_a), (node_b, set_b)| {
            set_b.len().cmp(&set_a.len()).then(node_a.cmp(node_b))
        });
        for (candidate, newly_dominated) in &branches {
            current.push(*candidate);
            for covered in newly_dominated {
                dominated[*covered] = true;
            }
            self.branch(idx, dominated, current, best);
            for covered in newly_dominated {
                dominated[*covered] = false;
            }
            current.pop();
        }
    }

}
