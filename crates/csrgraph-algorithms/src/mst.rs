//! Minimum Spanning Tree algorithms
//!
//! Implements Prim's (priority queue) and Kruskal's (sorted edges +
//! union-find) algorithms. Both expect an undirected graph stored with both
//! directions of every edge; unweighted graphs use a weight of 1.0.

use super::common::{CsrGraph, NodeId};
use super::community::UnionFind;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use serde::Serialize;
use tracing::debug;

/// Spanning tree described by a parent array (Prim)
#[derive(Debug, Clone, Serialize)]
pub struct SpanningTree {
    /// Tree parent of each node; `None` for the start node and nodes outside its component
    pub parent: Vec<Option<NodeId>>,
    pub total_weight: f64,
}

/// Spanning forest described by its edges (Kruskal)
#[derive(Debug, Clone, Serialize)]
pub struct MSTResult {
    pub total_weight: f64,
    pub edges: Vec<(NodeId, NodeId, f64)>, // (source, target, weight)
}

#[derive(Copy, Clone, PartialEq)]
struct EdgeState {
    weight: f64,
    source: NodeId,
    target: NodeId,
}

impl Eq for EdgeState {}

impl Ord for EdgeState {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse for min-heap
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.target.cmp(&self.target))
    }
}

impl PartialOrd for EdgeState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Prim's Algorithm for Minimum Spanning Tree
///
/// Grows the tree from node 0. Same lazy-deletion heap as Dijkstra, but keyed
/// by the weight of the edge that connects a node to the tree rather than by
/// path length. If the graph is disconnected, only node 0's component is spanned.
pub fn prim_mst(view: &CsrGraph) -> SpanningTree {
    let n = view.node_count();
    let mut parent = vec![None; n];
    if n == 0 {
        return SpanningTree { parent, total_weight: 0.0 };
    }

    let mut key = vec![f64::INFINITY; n];
    let mut in_tree = vec![false; n];
    let mut heap = BinaryHeap::new();
    let mut total_weight = 0.0;

    key[0] = 0.0;
    heap.push(EdgeState { weight: 0.0, source: 0, target: 0 });

    while let Some(EdgeState { weight, source, target }) = heap.pop() {
        if in_tree[target] || weight > key[target] {
            continue;
        }

        in_tree[target] = true;
        if target != 0 {
            parent[target] = Some(source);
            total_weight += weight;
        }

        for (next, w) in view.weighted_successors(target) {
            if !in_tree[next] && w < key[next] {
                key[next] = w;
                heap.push(EdgeState { weight: w, source: target, target: next });
            }
        }
    }

    debug!("Prim spanned {} of {} nodes", in_tree.iter().filter(|&&t| t).count(), n);
    SpanningTree {
        parent,
        total_weight,
    }
}

/// Kruskal's Algorithm for Minimum Spanning Forest
///
/// Edges are taken in enumeration order and stable-sorted by weight, so equal
/// weights keep their original order. Returns the accepted edges in the order
/// they were added. The forest has `node_count - components` edges.
pub fn kruskal_mst(view: &CsrGraph) -> MSTResult {
    let n = view.node_count();
    let mut edges: Vec<(NodeId, NodeId, f64)> = Vec::with_capacity(view.edge_count());
    for u in 0..n {
        edges.extend(view.weighted_successors(u).map(|(v, w)| (u, v, w)));
    }

    edges.sort_by(|a, b| a.2.total_cmp(&b.2));

    let mut uf = UnionFind::new(n);
    let mut tree = Vec::with_capacity(n.saturating_sub(1));
    let mut total_weight = 0.0;
    for (source, target, weight) in edges {
        if uf.union(source, target) {
            tree.push((source, target, weight));
            total_weight += weight;
        }
    }

    debug!("Kruskal accepted {} edges, {} components", tree.len(), uf.component_count());
    MSTResult {
        total_weight,
        edges: tree,
    }
}
