//! Implementation of a simple, undirected graph data structure with basic queries and the
//! few mutations the cover pipeline needs.

use fxhash::FxHashSet;
use std::io::BufRead;
use crate::cust_error::{ImportError, ProcessingError};

/// A simple undirected graph datastructure. Adjacency is symmetric, self-loops and
/// parallel edges can not be represented.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct UGraph {
    adj_list: Vec<Option<FxHashSet<usize>>>,
}

// Static functions
impl UGraph {

    /// Creates a graph with `n` nodes and no edges.
    pub fn new(n: usize) -> Self {
        UGraph {
            adj_list: vec![Some(FxHashSet::default()); n],
        }
    }

    /// Returns an `Iterator` over all nodes that have not yet been deleted.
    pub fn nodes(&self) -> impl Iterator<Item=usize> + '_ {
        self.adj_list
            .iter()
            .enumerate()
            .filter_map(|(i,adj)| {
                if adj.is_some() {
                    Some(i)
                } else {
                    None
                }
            })
    }

    /// Returns the number of nodes of `self`.
    pub fn num_nodes(&self) -> usize {
        self.nodes().count()
    }

    /// Returns the amount of reserved nodes of `self`. Deleted or not.
    pub fn num_reserved(&self) -> usize {
        self.adj_list.len()
    }

    /// Returns the neighborhood of `node`, or `None` if `node` was deleted.
    pub fn neighbors(&self, node: usize) -> &Option<FxHashSet<usize>> {
        &self.adj_list[node]
    }

    /// Returns the degree of `node`, or `None` if `node` was deleted.
    pub fn degree(&self, node: usize) -> Option<usize> {
        self.adj_list[node].as_ref().map(|neighbors| neighbors.len())
    }

    /// Returns an iterator over all edges.
    pub fn edges(&self) -> impl Iterator<Item=(usize, usize)> + '_ {
        self.adj_list
            .iter()
            .enumerate()
            .filter(|(_,adj)| adj.is_some())
            .flat_map(|(i,adj)| {
                adj.as_ref().expect("`adj` is some")
                    .iter()
                    .filter_map(|neigh| {
                    if i < *neigh {
                        Some((i, *neigh))
                    } else {
                        None
                    }
                }).collect::<Vec<(usize, usize)>>()
            })
    }

    /// Returns the number of edges of `self`.
    pub fn num_edges(&self) -> usize {
        self.edges().count()
    }

    /// Checks if `edge` exists.
    pub fn edge_exists(&self, edge: (usize, usize)) -> bool {
        if let Some(neighs) = &self.adj_list[edge.0] {
            return neighs.contains(&edge.1)
        }
        false
    }

    /// Checks if `self` is empty (holds no undeleted nodes).
    pub fn is_empty(&self) -> bool {
        self.num_nodes() == 0
    }

    /// Checks if `node_set` is a clique in `self`.
    pub fn is_clique(&self, node_set: &FxHashSet<usize>) -> bool {
        let mut remaining = node_set.clone();
        while !remaining.is_empty() {
            let node = remaining.iter().next().cloned().expect("`remaining` is not empty");
            remaining.remove(&node);
            if let Some(neighbors) = self.neighbors(node) {
                if !(remaining.difference(neighbors).count() == 0) {
                    return false
                }
            } else {
                return false
            }
        }
        true
    }

}

// Dynamic functions
impl UGraph {

    /// Inserts the edge between `node_a` and `node_b` into both adjacency sets. Inserting
    /// an existing edge changes nothing.
    /// Returns an `InvalidInput` error on a self-loop or a deleted endpoint.
    pub fn add_edge(&mut self, node_a: usize, node_b: usize) -> Result<(), ProcessingError> {
        if node_a == node_b {
            return Err(ProcessingError::InvalidInput(format!("self-loop at node {}", node_a)))
        }
        if node_a >= self.adj_list.len() || self.adj_list[node_a].is_none()
            || node_b >= self.adj_list.len() || self.adj_list[node_b].is_none() {
            return Err(ProcessingError::InvalidInput(format!("edge ({}, {}) leaves the node range", node_a, node_b)))
        }
        self.adj_list[node_a].as_mut().expect("`node_a` exists").insert(node_b);
        self.adj_list[node_b].as_mut().expect("`node_b` exists").insert(node_a);
        Ok(())
    }

    /// Tries to delete `node`.
    /// Returns the old neighborhood of `node` or `None` if nothing was deleted.
    pub fn delete_node(&mut self, node: usize) -> Option<FxHashSet<usize>> {
        let opt_neighbors = self.adj_list[node].take();
        if let Some(neighborhood) = opt_neighbors.as_ref() {
            for neighbor in neighborhood.iter() {
                if let Some(ref mut nn) = self.adj_list[*neighbor] {
                    nn.remove(&node);
                }
            }
        }
        opt_neighbors
    }

    /// Deletes all nodes with an empty neighborhood.
    /// Returns the deleted nodes.
    pub fn remove_isolated(&mut self) -> FxHashSet<usize> {
        let isolated: FxHashSet<usize> = self.nodes()
            .filter(|node| self.degree(*node) == Some(0))
            .collect();
        for node in &isolated {
            self.delete_node(*node);
        }
        isolated
    }

}

impl UGraph {

    /// Reads a `.gr` input and creates a `UGraph`.
    /// Duplicate edge lines are absorbed by the set representation; self-loops and out of
    /// range endpoints are rejected.
    pub fn read_gr<R: BufRead>(gr: R) -> Result<Self, ImportError> {
        let (lines, _): (Vec<_>, Vec<_>) = gr.lines()
            .partition(|l| {
                if let Ok(line) = l {
                    // ignore empty lines and comment lines
                    !line.starts_with("c ") && !line.is_empty()
                } else {
                    true
                }
            });
        let mut lines = lines.into_iter();
        // p td <n> <m>
        let (n, m) = {
            let line = lines.next().ok_or(ImportError::InputMalformedError)??;
            let mut s = line.split(' ');
            if let Some("p") = s.next() {} else { return Err(ImportError::InputMalformedError); }
            if let Some("td") = s.next() {} else { return Err(ImportError::InputMalformedError); }
            let n: usize = s.next().ok_or(ImportError::InputMalformedError)?.parse()?;
            let m: usize = s.next().ok_or(ImportError::InputMalformedError)?.parse()?;
            if s.next().is_some() { return Err(ImportError::InputMalformedError); }
            (n, m)
        };
        let mut adj_list = vec![Some(FxHashSet::default()); n];
        let mut num_edges = 0;
        for line in lines {
            // <src> <trg>
            let line = line?;
            let mut s = line.split(' ');
            let src = s.next().ok_or(ImportError::InputMalformedError)?.parse::<usize>()?;
            let trg = s.next().ok_or(ImportError::InputMalformedError)?.parse::<usize>()?;
            if s.next().is_some() { return Err(ImportError::InputMalformedError); }
            if src == trg || src < 1 || src > n || trg < 1 || trg > n {
                return Err(ImportError::InputMalformedError);
            }
            adj_list[src - 1].as_mut().expect("`src` exists").insert(trg - 1);
            adj_list[trg - 1].as_mut().expect("`trg` exists").insert(src - 1);
            num_edges += 1;
        }
        if num_edges != m { return Err(ImportError::InputMalformedError); }
        Ok(UGraph {
            adj_list,
        })
    }

}
