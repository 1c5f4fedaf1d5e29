//! Edge list to CSR conversion

use csrgraph_algorithms::{CsrGraph, GraphError, GraphResult, NodeId};
use tracing::debug;

/// Collects edges and packs them into a validated [`CsrGraph`].
///
/// ```
/// use csrgraph::graph::EdgeListBuilder;
///
/// let mut builder = EdgeListBuilder::new(3).symmetric(true);
/// builder.add_edge(0, 1).add_edge(1, 2);
/// let graph = builder.build().unwrap();
/// assert_eq!(graph.successors(1), &[0, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct EdgeListBuilder {
    node_count: usize,
    edges: Vec<(NodeId, NodeId, f64)>,
    weighted: bool,
    symmetric: bool,
    sort: bool,
    dedup: bool,
}

impl EdgeListBuilder {
    /// Builder for a graph with `node_count` nodes; rows are sorted by default
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            edges: Vec::new(),
            weighted: false,
            symmetric: false,
            sort: true,
            dedup: false,
        }
    }

    /// Store every non-loop edge in both directions
    pub fn symmetric(mut self, symmetric: bool) -> Self {
        self.symmetric = symmetric;
        self
    }

    /// Sort each adjacency row by target (then weight)
    pub fn sorted(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Keep only the lightest of parallel edges; implies sorting
    pub fn dedup(mut self, dedup: bool) -> Self {
        self.dedup = dedup;
        self
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Edges added so far, before symmetrization
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Add an unweighted edge (weight 1.0 if the graph ends up weighted)
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> &mut Self {
        self.edges.push((source, target, 1.0));
        self
    }

    /// Add a weighted edge; the built graph carries a weight array
    pub fn add_weighted_edge(&mut self, source: NodeId, target: NodeId, weight: f64) -> &mut Self {
        self.weighted = true;
        self.edges.push((source, target, weight));
        self
    }

    pub fn extend_edges<I>(&mut self, edges: I) -> &mut Self
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        self.edges.extend(edges.into_iter().map(|(u, v)| (u, v, 1.0)));
        self
    }

    /// Pack the edges into CSR form
    pub fn build(self) -> GraphResult<CsrGraph> {
        let n = self.node_count;
        let mut rows: Vec<Vec<(NodeId, f64)>> = vec![Vec::new(); n];

        for &(u, v, w) in &self.edges {
            for node in [u, v] {
                if node >= n {
                    return Err(GraphError::NodeOutOfRange {
                        node,
                        node_count: n,
                    });
                }
            }
            rows[u].push((v, w));
            if self.symmetric && u != v {
                rows[v].push((u, w));
            }
        }

        if self.sort || self.dedup {
            for row in &mut rows {
                row.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));
                if self.dedup {
                    row.dedup_by_key(|edge| edge.0);
                }
            }
        }

        let mut offsets = Vec::with_capacity(n + 1);
        let mut targets = Vec::new();
        let mut weights = Vec::new();
        offsets.push(0);
        for row in rows {
            for (v, w) in row {
                targets.push(v);
                weights.push(w);
            }
            offsets.push(targets.len());
        }

        debug!(
            "Built CSR graph: {} nodes, {} stored edges (symmetric={})",
            n,
            targets.len(),
            self.symmetric
        );
        CsrGraph::new(offsets, targets, self.weighted.then_some(weights))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directed_rows_sorted() {
        let mut builder = EdgeListBuilder::new(3);
        builder.add_edge(0, 2).add_edge(0, 1).add_edge(2, 0);
        let g = builder.build().unwrap();
        assert_eq!(g.offsets(), &[0, 2, 2, 3]);
        assert_eq!(g.targets(), &[1, 2, 0]);
        assert!(!g.is_weighted());
        assert!(g.has_sorted_adjacency());
    }

    #[test]
    fn test_unsorted_keeps_insertion_order() {
        let mut builder = EdgeListBuilder::new(3).sorted(false);
        builder.add_edge(0, 2).add_edge(0, 1);
        let g = builder.build().unwrap();
        assert_eq!(g.successors(0), &[2, 1]);
    }

    #[test]
    fn test_symmetric_weighted_dedup() {
        let mut builder = EdgeListBuilder::new(3).symmetric(true).dedup(true);
        builder
            .add_weighted_edge(0, 1, 4.0)
            .add_weighted_edge(1, 0, 2.5)
            .add_edge(1, 2)
            .add_edge(2, 2);
        let g = builder.build().unwrap();

        assert_eq!(g.successors(0), &[1]);
        assert_eq!(g.weights(0), Some(&[2.5][..]));
        assert_eq!(g.successors(1), &[0, 2]);
        assert_eq!(g.weights(1), Some(&[2.5, 1.0][..]));
        // Self-loop stored once
        assert_eq!(g.successors(2), &[1, 2]);
        assert!(g.is_symmetric());
    }

    #[test]
    fn test_out_of_range_endpoint() {
        let mut builder = EdgeListBuilder::new(2);
        builder.add_edge(0, 5);
        assert_eq!(
            builder.build().unwrap_err(),
            GraphError::NodeOutOfRange {
                node: 5,
                node_count: 2
            }
        );
    }
}
