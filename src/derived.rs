//! Reduction of a cover instance to a domination instance on a chordal graph, and the
//! projection of a dominating set back to a vertex cover.

use fxhash::{FxHashMap, FxHashSet};
use crate::graph::UGraph;
use crate::cust_error::ProcessingError;

/// The derived graph of a cover instance.
///
/// Each original vertex `i` is represented by the vertex node `(i, i)`; the vertex nodes
/// form a clique. Each original edge `{i, j}` contributes the incidence nodes `(i, j)`
/// and `(j, i)`, both adjacent to exactly the two vertex nodes `(i, i)` and `(j, j)` and
/// never to each other. A minimum dominating set of the derived graph projects to a
/// minimum vertex cover of the original graph.
#[derive(Debug, Clone)]
pub struct DerivedGraph {
    pub graph: UGraph,
    labels: Vec<(usize, usize)>,
    ids: FxHashMap<(usize, usize), usize>,
}

impl DerivedGraph {

    /// Builds the derived graph of `graph`.
    ///
    /// Node ids are assigned vertex nodes first in ascending vertex order, then incidence
    /// nodes in sorted edge order, so the construction depends only on the graph and the
    /// order of its node identifiers.
    /// Returns an `InvalidInput` error if `graph` contains an isolated node.
    pub fn from_graph(graph: &UGraph) -> Result<Self, ProcessingError> {
        let mut vertices: Vec<usize> = graph.nodes().collect();
        vertices.sort_unstable();
        for vertex in &vertices {
            if graph.degree(*vertex) == Some(0) {
                return Err(ProcessingError::InvalidInput(format!("node {} is isolated", vertex)))
            }
        }
        let mut edge_list: Vec<(usize, usize)> = graph.edges().collect();
        edge_list.sort_unstable();
        let mut labels: Vec<(usize, usize)> = Vec::with_capacity(vertices.len() + 2 * edge_list.len());
        let mut ids: FxHashMap<(usize, usize), usize> = FxHashMap::default();
        for vertex in &vertices {
            ids.insert((*vertex, *vertex), labels.len());
            labels.push((*vertex, *vertex));
        }
        for (src, trg) in &edge_list {
            ids.insert((*src, *trg), labels.len());
            labels.push((*src, *trg));
            ids.insert((*trg, *src), labels.len());
            labels.push((*trg, *src));
        }
        let mut derived = UGraph::new(labels.len());
        // Vertex nodes form a clique, whether or not the vertices are adjacent in `graph`.
        for a in 0..vertices.len() {
            for b in (a + 1)..vertices.len() {
                derived.add_edge(a, b)?;
            }
        }
        for (src, trg) in &edge_list {
            let src_node = ids[&(*src, *src)];
            let trg_node = ids[&(*trg, *trg)];
            let src_incidence = ids[&(*src, *trg)];
            let trg_incidence = ids[&(*trg, *src)];
            derived.add_edge(src_node, src_incidence)?;
            derived.add_edge(trg_node, src_incidence)?;
            derived.add_edge(src_node, trg_incidence)?;
            derived.add_edge(trg_node, trg_incidence)?;
        }
        Ok(DerivedGraph {
            graph: derived,
            labels,
            ids,
        })
    }

    /// Returns the label of the derived node `node`, or `None` if no such node exists.
    pub fn label(&self, node: usize) -> Option<(usize, usize)> {
        self.labels.get(node).copied()
    }

    /// Returns the derived node carrying `label`, or `None` if no such node exists.
    pub fn node_id(&self, label: (usize, usize)) -> Option<usize> {
        self.ids.get(&label).copied()
    }

    /// Checks if `node` is a vertex node.
    pub fn is_vertex_node(&self, node: usize) -> bool {
        matches!(self.labels.get(node), Some((src, trg)) if src == trg)
    }

    /// Projects a dominating set of the derived graph to a vertex subset of the original
    /// graph by keeping the first coordinate of every selected node. An optimal solver
    /// selects vertex nodes only, but incidence selections still project to a cover.
    /// Returns an `InconsistentState` error if `dominating_set` references a node outside
    /// the derived graph.
    pub fn extract_cover(&self, dominating_set: &FxHashSet<usize>) -> Result<FxHashSet<usize>, ProcessingError> {
        let mut cover = FxHashSet::default();
        for node in dominating_set {
            match self.labels.get(*node) {
                Some((src, _)) => { cover.insert(*src); },
                None => return Err(ProcessingError::InconsistentState(
                    format!("dominating set references the unknown node {}", node))),
            }
        }
        Ok(cover)
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{is_chordal, GraphEnumerator};

    #[test]
    fn derived_structure_test() {
        let mut graph = UGraph::new(3);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 2).unwrap();
        let derived = DerivedGraph::from_graph(&graph).unwrap();
        assert_eq!(derived.graph.num_nodes(), 7);
        assert_eq!(derived.graph.num_edges(), 11);
        let vertex_nodes: FxHashSet<usize> = [(0, 0), (1, 1), (2, 2)].iter()
            .map(|label| derived.node_id(*label).unwrap())
            .collect();
        assert!(derived.graph.is_clique(&vertex_nodes));
        let src_incidence = derived.node_id((0, 1)).unwrap();
        let trg_incidence = derived.node_id((1, 0)).unwrap();
        assert!(derived.graph.edge_exists((derived.node_id((0, 0)).unwrap(), src_incidence)));
        assert!(derived.graph.edge_exists((derived.node_id((1, 1)).unwrap(), src_incidence)));
        assert!(!derived.graph.edge_exists((src_incidence, trg_incidence)));
        assert_eq!(derived.graph.degree(src_incidence), Some(2));
        assert_eq!(derived.graph.degree(trg_incidence), Some(2));
        assert!(derived.node_id((0, 2)).is_none());
        assert!(derived.is_vertex_node(derived.node_id((2, 2)).unwrap()));
        assert!(!derived.is_vertex_node(src_incidence));
    }

    #[test]
    fn rejects_isolated_test() {
        let mut graph = UGraph::new(3);
        graph.add_edge(0, 1).unwrap();
        assert!(DerivedGraph::from_graph(&graph).is_err());
    }

    #[test]
    fn extract_cover_test() {
        let mut graph = UGraph::new(3);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 2).unwrap();
        let derived = DerivedGraph::from_graph(&graph).unwrap();
        let dominating_set = vec![derived.node_id((1, 1)).unwrap(), derived.node_id((2, 1)).unwrap()]
            .into_iter()
            .collect();
        let cover = derived.extract_cover(&dominating_set).unwrap();
        assert_eq!(cover, vec![1, 2].into_iter().collect());
        let bad_set = vec![derived.graph.num_reserved()].into_iter().collect();
        assert!(derived.extract_cover(&bad_set).is_err());
    }

    #[test]
    fn derived_is_chordal_exhaustive_test() {
        for mut graph in GraphEnumerator::new(4) {
            graph.remove_isolated();
            if graph.num_edges() == 0 {
                continue
            }
            let derived = DerivedGraph::from_graph(&graph).unwrap();
            assert!(is_chordal(&derived.graph));
        }
    }

    #[test]
    fn deterministic_construction_test() {
        let mut graph = UGraph::new(5);
        for (src, trg) in [(0, 1), (1, 2), (2, 3), (3, 4), (0, 4), (1, 3)] {
            graph.add_edge(src, trg).unwrap();
        }
        let first = DerivedGraph::from_graph(&graph).unwrap();
        let second = DerivedGraph::from_graph(&graph).unwrap();
        assert_eq!(first.graph, second.graph);
        assert_eq!(first.labels, second.labels);
    }

}
