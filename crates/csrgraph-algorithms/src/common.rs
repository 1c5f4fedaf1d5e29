//! Shared utilities for graph algorithms
//!
//! Provides the read-only Compressed Sparse Row (CSR) graph every algorithm
//! in this crate runs against, plus the error taxonomy they share.

use std::ops::Range;
use thiserror::Error;

/// Node identifier: the node's index in `[0, node_count)`
pub type NodeId = usize;

/// Errors that can occur while building a graph or running an algorithm
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    #[error("Node {node} out of range for graph with {node_count} nodes")]
    NodeOutOfRange { node: NodeId, node_count: usize },

    #[error("Negative-weight cycle detected")]
    NegativeCycleDetected,

    #[error("Precondition violated: {0}")]
    PreconditionViolated(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// An immutable, integer-indexed graph in Compressed Sparse Row (CSR) format.
///
/// Node `i`'s out-neighbors are `targets[offsets[i]..offsets[i + 1]]`. The
/// optional weights are aligned positionally with `targets`. An undirected
/// graph is stored with both directions of every edge.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrGraph {
    /// Offsets into `targets`. Size = node_count + 1
    offsets: Vec<usize>,
    /// Contiguous array of target node indices
    targets: Vec<NodeId>,
    /// Edge weights: aligned with `targets`
    weights: Option<Vec<f64>>,
}

impl CsrGraph {
    /// Build a graph from raw CSR arrays, validating every structural invariant.
    pub fn new(
        offsets: Vec<usize>,
        targets: Vec<NodeId>,
        weights: Option<Vec<f64>>,
    ) -> GraphResult<Self> {
        let Some(&first) = offsets.first() else {
            return Err(GraphError::InvalidGraph(
                "offsets must contain node_count + 1 entries".to_string(),
            ));
        };
        if first != 0 {
            return Err(GraphError::InvalidGraph(format!(
                "offsets[0] = {} != 0",
                first
            )));
        }

        if let Some(i) = offsets.windows(2).position(|w| w[0] > w[1]) {
            return Err(GraphError::InvalidGraph(format!(
                "offsets not monotonic at index {}",
                i
            )));
        }

        let edge_count = offsets[offsets.len() - 1];
        if edge_count != targets.len() {
            return Err(GraphError::InvalidGraph(format!(
                "offsets[node_count] = {} != targets.len() = {}",
                edge_count,
                targets.len()
            )));
        }

        let node_count = offsets.len() - 1;
        if let Some(&bad) = targets.iter().find(|&&t| t >= node_count) {
            return Err(GraphError::InvalidGraph(format!(
                "target {} >= node_count {}",
                bad, node_count
            )));
        }

        if let Some(ref w) = weights {
            if w.len() != targets.len() {
                return Err(GraphError::InvalidGraph(format!(
                    "weights.len() = {} != targets.len() = {}",
                    w.len(),
                    targets.len()
                )));
            }
        }

        Ok(CsrGraph {
            offsets,
            targets,
            weights,
        })
    }

    /// A graph with `node_count` nodes and no edges
    pub fn empty(node_count: usize) -> Self {
        CsrGraph {
            offsets: vec![0; node_count + 1],
            targets: Vec::new(),
            weights: None,
        }
    }

    /// Helper to create a graph from per-node adjacency lists
    pub fn from_adjacency_list(
        adjacency: Vec<Vec<NodeId>>,
        weights: Option<Vec<Vec<f64>>>,
    ) -> GraphResult<Self> {
        let mut offsets = Vec::with_capacity(adjacency.len() + 1);
        let mut targets = Vec::new();
        let mut flat_weights = weights.as_ref().map(|_| Vec::new());

        if let Some(ref w) = weights {
            if w.len() != adjacency.len() {
                return Err(GraphError::InvalidGraph(format!(
                    "{} weight rows for {} adjacency rows",
                    w.len(),
                    adjacency.len()
                )));
            }
        }

        offsets.push(0);
        for (i, neighbors) in adjacency.into_iter().enumerate() {
            if let (Some(w_flat), Some(w_rows)) = (flat_weights.as_mut(), weights.as_ref()) {
                if w_rows[i].len() != neighbors.len() {
                    return Err(GraphError::InvalidGraph(format!(
                        "node {} has {} neighbors but {} weights",
                        i,
                        neighbors.len(),
                        w_rows[i].len()
                    )));
                }
                w_flat.extend(w_rows[i].iter());
            }
            targets.extend(neighbors);
            offsets.push(targets.len());
        }

        Self::new(offsets, targets, flat_weights)
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of stored (directed) edges
    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    pub fn is_weighted(&self) -> bool {
        self.weights.is_some()
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    pub fn targets(&self) -> &[NodeId] {
        &self.targets
    }

    pub fn edge_weights(&self) -> Option<&[f64]> {
        self.weights.as_deref()
    }

    /// Position range of a node's edges inside `targets`
    pub fn edge_range(&self, idx: NodeId) -> Range<usize> {
        self.offsets[idx]..self.offsets[idx + 1]
    }

    /// Get the out-degree of a node
    pub fn out_degree(&self, idx: NodeId) -> usize {
        self.offsets[idx + 1] - self.offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: NodeId) -> &[NodeId] {
        &self.targets[self.edge_range(idx)]
    }

    /// Get weights for outgoing edges of a node
    pub fn weights(&self, idx: NodeId) -> Option<&[f64]> {
        let range = self.edge_range(idx);
        self.weights.as_ref().map(|w| &w[range])
    }

    /// Outgoing `(neighbor, weight)` pairs; unweighted graphs yield 1.0
    pub fn weighted_successors(
        &self,
        idx: NodeId,
    ) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        let range = self.edge_range(idx);
        let weights = self.weights.as_ref().map(|w| &w[range.clone()]);
        self.targets[range]
            .iter()
            .enumerate()
            .map(move |(i, &v)| (v, weights.map_or(1.0, |w| w[i])))
    }

    /// Fails with `NodeOutOfRange` when `idx` is not a node of this graph
    pub fn check_node(&self, idx: NodeId) -> GraphResult<()> {
        if idx < self.node_count() {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                node: idx,
                node_count: self.node_count(),
            })
        }
    }

    /// True when every adjacency slice is sorted ascending
    pub fn has_sorted_adjacency(&self) -> bool {
        (0..self.node_count()).all(|i| self.successors(i).windows(2).all(|w| w[0] <= w[1]))
    }

    /// Fails with `PreconditionViolated` unless adjacency is sorted
    pub fn require_sorted_adjacency(&self, algorithm: &str) -> GraphResult<()> {
        match (0..self.node_count())
            .find(|&i| self.successors(i).windows(2).any(|w| w[0] > w[1]))
        {
            None => Ok(()),
            Some(i) => Err(GraphError::PreconditionViolated(format!(
                "{} requires sorted adjacency, node {} is unsorted",
                algorithm, i
            ))),
        }
    }

    /// True when every edge u -> v has a matching v -> u
    pub fn is_symmetric(&self) -> bool {
        sorted_rows(self) == sorted_rows(&self.transpose())
    }

    /// Build the reversed-edge graph (CSC of this graph), carrying weights
    pub fn transpose(&self) -> CsrGraph {
        let n = self.node_count();

        // Count in-degrees for the new offsets
        let mut offsets = vec![0usize; n + 1];
        for &t in &self.targets {
            offsets[t + 1] += 1;
        }
        for i in 0..n {
            offsets[i + 1] += offsets[i];
        }

        let mut cursor = offsets.clone();
        let mut targets = vec![0; self.targets.len()];
        let mut weights = self.weights.as_ref().map(|_| vec![0.0; self.targets.len()]);

        for u in 0..n {
            for pos in self.edge_range(u) {
                let v = self.targets[pos];
                let slot = cursor[v];
                targets[slot] = u;
                if let (Some(out), Some(src)) = (weights.as_mut(), self.weights.as_ref()) {
                    out[slot] = src[pos];
                }
                cursor[v] += 1;
            }
        }

        CsrGraph {
            offsets,
            targets,
            weights,
        }
    }
}

fn sorted_rows(graph: &CsrGraph) -> Vec<Vec<NodeId>> {
    (0..graph.node_count())
        .map(|i| {
            let mut row = graph.successors(i).to_vec();
            row.sort_unstable();
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_with_tail() -> CsrGraph {
        // 0-1, 0-2, 1-2, 2-3 (undirected)
        CsrGraph::from_adjacency_list(
            vec![vec![1, 2], vec![0, 2], vec![0, 1, 3], vec![2]],
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_neighbor_lookup() {
        let g = triangle_with_tail();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 8);
        assert_eq!(g.out_degree(2), 3);
        assert_eq!(g.successors(2), &[0, 1, 3]);
        assert_eq!(g.offsets(), &[0, 2, 4, 7, 8]);
        assert!(g.weights(0).is_none());
        let unit: Vec<_> = g.weighted_successors(3).collect();
        assert_eq!(unit, vec![(2, 1.0)]);
    }

    #[test]
    fn test_rejects_malformed_offsets() {
        assert!(matches!(
            CsrGraph::new(vec![], vec![], None),
            Err(GraphError::InvalidGraph(_))
        ));
        assert!(matches!(
            CsrGraph::new(vec![1, 1], vec![0], None),
            Err(GraphError::InvalidGraph(_))
        ));
        assert!(matches!(
            CsrGraph::new(vec![0, 2, 1], vec![1, 0], None),
            Err(GraphError::InvalidGraph(_))
        ));
        assert!(matches!(
            CsrGraph::new(vec![0, 1, 2], vec![1], None),
            Err(GraphError::InvalidGraph(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_target() {
        let err = CsrGraph::new(vec![0, 1, 2], vec![1, 2], None).unwrap_err();
        assert!(matches!(err, GraphError::InvalidGraph(_)));
    }

    #[test]
    fn test_rejects_misaligned_weights() {
        let err = CsrGraph::new(vec![0, 1, 2], vec![1, 0], Some(vec![1.0])).unwrap_err();
        assert!(matches!(err, GraphError::InvalidGraph(_)));
    }

    #[test]
    fn test_transpose_carries_weights() {
        // 0->1 (2.0), 0->2 (3.0), 2->1 (4.0)
        let g = CsrGraph::from_adjacency_list(
            vec![vec![1, 2], vec![], vec![1]],
            Some(vec![vec![2.0, 3.0], vec![], vec![4.0]]),
        )
        .unwrap();
        let t = g.transpose();
        assert_eq!(t.successors(0), &[] as &[usize]);
        assert_eq!(t.successors(1), &[0, 2]);
        assert_eq!(t.weights(1), Some(&[2.0, 4.0][..]));
        assert_eq!(t.successors(2), &[0]);
        assert_eq!(t.transpose(), g);
    }

    #[test]
    fn test_sortedness_and_symmetry() {
        let g = triangle_with_tail();
        assert!(g.has_sorted_adjacency());
        assert!(g.is_symmetric());
        assert!(g.require_sorted_adjacency("test").is_ok());

        let directed = CsrGraph::from_adjacency_list(vec![vec![2, 1], vec![], vec![]], None).unwrap();
        assert!(!directed.has_sorted_adjacency());
        assert!(!directed.is_symmetric());
        assert!(matches!(
            directed.require_sorted_adjacency("test"),
            Err(GraphError::PreconditionViolated(_))
        ));
    }

    #[test]
    fn test_check_node() {
        let g = CsrGraph::empty(3);
        assert!(g.check_node(2).is_ok());
        assert_eq!(
            g.check_node(3),
            Err(GraphError::NodeOutOfRange { node: 3, node_count: 3 })
        );
    }
}
