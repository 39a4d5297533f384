//! The end to end cover pipeline: isolate removal, the chordal reduction, the ordering
//! guard, exact domination and the projection back to the input graph.

use fxhash::FxHashSet;
use std::io::{Write};
use std::io;
use crate::graph::UGraph;
use crate::derived::DerivedGraph;
use crate::elimination::EliminationOrder;
use crate::domination::DominationInstance;
use crate::cust_error::ProcessingError;

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct CoverInstance {
    pub graph: UGraph,
    pub solution: FxHashSet<usize>,
}

impl CoverInstance {

    pub fn new(graph: UGraph) -> Self {
        CoverInstance {
            graph,
            solution: FxHashSet::default(),
        }
    }

    /// Computes a minimum vertex cover of `self.graph`.
    ///
    /// Strips isolated nodes, reduces the remainder to a domination instance on the
    /// derived chordal graph, computes an elimination ordering and solves domination
    /// exactly along it. The ordering is verified to be perfect before it is used; a
    /// failed check is surfaced as `InconsistentState` since the derived graph is chordal
    /// by construction.
    /// The solution is stored in `self.solution` and returned.
    pub fn solve(&mut self) -> Result<FxHashSet<usize>, ProcessingError> {
        let mut work = self.graph.clone();
        work.remove_isolated();
        if work.is_empty() {
            self.solution = FxHashSet::default();
            return Ok(self.solution.clone())
        }
        let derived = DerivedGraph::from_graph(&work)?;
        let order = EliminationOrder::maximum_cardinality_search(&derived.graph);
        if !order.is_perfect(&derived.graph) {
            return Err(ProcessingError::InconsistentState(
                "the derived graph admits no perfect elimination ordering".to_owned()))
        }
        let domination = DominationInstance::new(&derived.graph, &order)?;
        let dominating_set = domination.minimum_dominating_set();
        self.solution = derived.extract_cover(&dominating_set)?;
        Ok(self.solution.clone())
    }

    /// Checks if a solution is valid.
    pub fn validate_solution(&self, sol: &FxHashSet<usize>) -> bool {
        let mut clone = self.graph.clone();
        for node in sol {
            if *node >= clone.num_reserved() {
                return false
            }
            clone.delete_node(*node);
        }
        if clone.edges().count() != 0 {
            return false
        }
        true
    }

}

impl CoverInstance {

    /// Writes a solution to a `Write` type.
    pub fn write_solution<W: Write>(solution: &FxHashSet<usize>, mut out: W) -> Result<(), io::Error> {
        for elem in solution {
            writeln!(out, "{}", elem + 1)?;
        }
        Ok(())
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use crate::testing::{brute_force_cover, random_graph, GraphEnumerator};

    fn solve(graph: UGraph) -> FxHashSet<usize> {
        let mut instance = CoverInstance::new(graph);
        let solution = instance.solve().unwrap();
        assert!(instance.validate_solution(&solution));
        solution
    }

    #[test]
    fn path_test() {
        let mut graph = UGraph::new(3);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 2).unwrap();
        assert_eq!(solve(graph), vec![1].into_iter().collect());
    }

    #[test]
    fn single_edge_test() {
        let mut graph = UGraph::new(2);
        graph.add_edge(0, 1).unwrap();
        let solution = solve(graph);
        assert_eq!(solution.len(), 1);
        assert!(solution.contains(&0) || solution.contains(&1));
    }

    #[test]
    fn triangle_test() {
        let mut graph = UGraph::new(3);
        for (src, trg) in [(0, 1), (1, 2), (0, 2)] {
            graph.add_edge(src, trg).unwrap();
        }
        assert_eq!(solve(graph).len(), 2);
    }

    #[test]
    fn edgeless_test() {
        assert!(solve(UGraph::new(4)).is_empty());
        assert!(solve(UGraph::new(0)).is_empty());
    }

    #[test]
    fn star_test() {
        let mut graph = UGraph::new(6);
        for leaf in 1..6 {
            graph.add_edge(0, leaf).unwrap();
        }
        assert_eq!(solve(graph), vec![0].into_iter().collect());
    }

    #[test]
    fn spider_test() {
        // The instance on which the plain ordering greedy overshoots by one.
        let mut graph = UGraph::new(7);
        for (src, trg) in [(0, 3), (1, 4), (2, 5), (0, 6), (1, 6), (2, 6)] {
            graph.add_edge(src, trg).unwrap();
        }
        assert_eq!(solve(graph), vec![0, 1, 2].into_iter().collect());
    }

    #[test]
    fn matches_brute_force_exhaustive_test() {
        // Every graph on up to 5 labeled nodes.
        for n in [4, 5] {
            for graph in GraphEnumerator::new(n) {
                let reference = brute_force_cover(&graph);
                let solution = solve(graph);
                assert_eq!(solution.len(), reference.len());
            }
        }
    }

    #[test]
    fn matches_brute_force_random_test() {
        for seed in 0..15 {
            let graph = random_graph(9, 0.3, seed);
            let reference = brute_force_cover(&graph);
            let solution = solve(graph);
            assert_eq!(solution.len(), reference.len());
        }
    }

    #[test]
    fn isolated_nodes_stay_out_test() {
        let mut graph = UGraph::new(6);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 2).unwrap();
        // 3, 4 and 5 are isolated.
        let solution = solve(graph);
        assert_eq!(solution, vec![1].into_iter().collect());
    }

    #[test]
    fn deterministic_test() {
        for seed in 0..5 {
            let graph = random_graph(10, 0.35, seed);
            let first = solve(graph.clone());
            let second = solve(graph);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn validate_solution_test() {
        let gr = Cursor::new("p td 4 4\n1 2\n2 3\n3 4\n4 1\n");
        let graph = UGraph::read_gr(gr).unwrap();
        let instance = CoverInstance::new(graph);
        assert!(instance.validate_solution(&vec![0, 2].into_iter().collect()));
        assert!(!instance.validate_solution(&vec![0, 1].into_iter().collect()));
        assert!(!instance.validate_solution(&vec![0, 7].into_iter().collect()));
    }

    #[test]
    fn write_solution_test() {
        let solution: FxHashSet<usize> = vec![2].into_iter().collect();
        let mut out = Vec::new();
        CoverInstance::write_solution(&solution, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "3\n");
    }

}
