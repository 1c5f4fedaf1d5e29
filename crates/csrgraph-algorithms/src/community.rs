//! Community and connectivity algorithms
//!
//! Connected components three ways (DFS labelling, union-find,
//! Shiloach-Vishkin hook-and-compress) and strongly connected components
//! (Kosaraju, Tarjan).

use super::common::{CsrGraph, GraphError, GraphResult, NodeId};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use serde::Serialize;
use tracing::debug;

const UNLABELED: usize = usize::MAX;

/// Result of WCC algorithm
#[derive(Debug, Clone, Serialize)]
pub struct WccResult {
    /// Members of each component, ordered by smallest member
    pub components: Vec<Vec<NodeId>>,
    /// Component index for every node
    pub node_component: Vec<usize>,
}

/// Union-Find data structure
///
/// Two flat arrays indexed by node. `find` compresses paths; `union` links by
/// rank and, when ranks tie, the second root absorbs the first.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<NodeId>,
    rank: Vec<u32>,
    components: usize,
}

impl UnionFind {
    pub fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
            components: size,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets
    pub fn component_count(&self) -> usize {
        self.components
    }

    pub fn find(&mut self, i: NodeId) -> NodeId {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Path compression
        let mut node = i;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merge the sets containing `i` and `j`. Returns false if already joined.
    pub fn union(&mut self, i: NodeId, j: NodeId) -> bool {
        let mut root_i = self.find(i);
        let mut root_j = self.find(j);

        if root_i == root_j {
            return false;
        }

        if self.rank[root_i] > self.rank[root_j] {
            std::mem::swap(&mut root_i, &mut root_j);
        }
        self.parent[root_i] = root_j;
        if self.rank[root_i] == self.rank[root_j] {
            self.rank[root_j] += 1;
        }

        self.components -= 1;
        true
    }

    pub fn connected(&mut self, i: NodeId, j: NodeId) -> bool {
        self.find(i) == self.find(j)
    }

    /// Flattened root of every node
    pub fn roots(&mut self) -> Vec<NodeId> {
        (0..self.parent.len()).map(|i| self.find(i)).collect()
    }
}

/// Connected components by DFS label propagation.
///
/// Each unlabeled node, taken in index order, seeds a new label that is
/// pushed to everything reachable over out-edges. Labels are 0, 1, 2, ... in
/// order of each component's first node. Undirected graphs must be stored
/// symmetrically.
pub fn label_connected_components(view: &CsrGraph) -> Vec<usize> {
    let n = view.node_count();
    let mut label = vec![UNLABELED; n];
    let mut label_count = 0;
    let mut stack = Vec::new();

    for seed in 0..n {
        if label[seed] != UNLABELED {
            continue;
        }

        label[seed] = label_count;
        stack.push(seed);
        while let Some(curr) = stack.pop() {
            for &next in view.successors(curr) {
                if label[next] == UNLABELED {
                    label[next] = label_count;
                    stack.push(next);
                }
            }
        }
        label_count += 1;
    }

    debug!("DFS labelling found {} components over {} nodes", label_count, n);
    label
}

/// Connected components by union-find over every stored edge.
///
/// Returns each node's flattened root; edge direction is ignored.
pub fn union_find_components(view: &CsrGraph) -> Vec<NodeId> {
    let n = view.node_count();
    let mut uf = UnionFind::new(n);

    for u in 0..n {
        for &v in view.successors(u) {
            uf.union(u, v);
        }
    }

    debug!("Union-find found {} components over {} nodes", uf.component_count(), n);
    uf.roots()
}

/// Weakly Connected Components (WCC)
///
/// Finds all disjoint subgraphs in the graph.
/// Ignores edge direction.
pub fn weakly_connected_components(view: &CsrGraph) -> WccResult {
    let roots = union_find_components(view);
    let mut root_component = vec![UNLABELED; roots.len()];
    let mut components: Vec<Vec<NodeId>> = Vec::new();
    let mut node_component = Vec::with_capacity(roots.len());

    for (i, &root) in roots.iter().enumerate() {
        if root_component[root] == UNLABELED {
            root_component[root] = components.len();
            components.push(Vec::new());
        }
        let c = root_component[root];
        components[c].push(i);
        node_component.push(c);
    }

    WccResult {
        components,
        node_component,
    }
}

/// Connected components by Shiloach-Vishkin hooking and pointer jumping.
///
/// Every phase reads a snapshot of the labels and writes a fresh buffer, so
/// the result does not depend on the order nodes are visited in. The final
/// label of every node is the smallest node id of its component.
pub fn shiloach_vishkin(view: &CsrGraph) -> Vec<NodeId> {
    let n = view.node_count();
    let mut parent: Vec<NodeId> = (0..n).collect();
    let mut passes = 0;

    loop {
        passes += 1;

        // Hooking
        let mut hooked = parent.clone();
        for u in 0..n {
            for &v in view.successors(u) {
                let low = parent[u].min(parent[v]);
                hooked[u] = hooked[u].min(low);
                hooked[v] = hooked[v].min(low);
            }
        }
        let mut changed = hooked != parent;
        parent = hooked;

        // Compressing
        loop {
            let jumped: Vec<NodeId> = parent.iter().map(|&p| parent[p]).collect();
            if jumped == parent {
                break;
            }
            parent = jumped;
            changed = true;
        }

        if !changed {
            break;
        }
    }

    debug!("Shiloach-Vishkin converged after {} passes", passes);
    parent
}

/// Data-parallel Shiloach-Vishkin.
///
/// Hooking scatters `fetch_min` into the next buffer while every reader sees
/// the pre-phase snapshot; compressing maps the snapshot in parallel. The
/// rayon joins at the end of each phase act as the barrier. Produces exactly
/// the labels of [`shiloach_vishkin`].
pub fn shiloach_vishkin_parallel(view: &CsrGraph) -> Vec<NodeId> {
    let n = view.node_count();
    let mut parent: Vec<NodeId> = (0..n).collect();
    let mut passes = 0;

    loop {
        passes += 1;

        let hooked: Vec<AtomicUsize> = parent.iter().map(|&p| AtomicUsize::new(p)).collect();
        (0..n).into_par_iter().for_each(|u| {
            for &v in view.successors(u) {
                let low = parent[u].min(parent[v]);
                hooked[u].fetch_min(low, Ordering::Relaxed);
                hooked[v].fetch_min(low, Ordering::Relaxed);
            }
        });
        let hooked: Vec<NodeId> = hooked.into_iter().map(AtomicUsize::into_inner).collect();
        let mut changed = hooked != parent;
        parent = hooked;

        loop {
            let jumped: Vec<NodeId> = parent.par_iter().map(|&p| parent[p]).collect();
            if jumped == parent {
                break;
            }
            parent = jumped;
            changed = true;
        }

        if !changed {
            break;
        }
    }

    debug!("Parallel Shiloach-Vishkin converged after {} passes", passes);
    parent
}

/// Kosaraju's SCC algorithm.
///
/// `transpose` must be the reversed-edge graph of `view` (for example
/// `view.transpose()`). Returns one node list per component, in the order the
/// second pass discovers them.
pub fn kosaraju_scc(view: &CsrGraph, transpose: &CsrGraph) -> GraphResult<Vec<Vec<NodeId>>> {
    let n = view.node_count();
    if transpose.node_count() != n || transpose.edge_count() != view.edge_count() {
        return Err(GraphError::InvalidGraph(format!(
            "transpose has {} nodes / {} edges, expected {} / {}",
            transpose.node_count(),
            transpose.edge_count(),
            n,
            view.edge_count()
        )));
    }

    // First pass: post-order finish sequence over the forward graph
    let mut visited = vec![false; n];
    let mut finish_order = Vec::with_capacity(n);
    let mut frames: Vec<(NodeId, usize)> = Vec::new();

    for start in 0..n {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        frames.push((start, 0));

        while let Some(frame) = frames.last_mut() {
            let (v, next) = *frame;
            let neighbors = view.successors(v);
            if next < neighbors.len() {
                frame.1 += 1;
                let w = neighbors[next];
                if !visited[w] {
                    visited[w] = true;
                    frames.push((w, 0));
                }
            } else {
                frames.pop();
                finish_order.push(v);
            }
        }
    }

    // Second pass: claim still-visited nodes over the transpose
    let mut components = Vec::new();
    let mut stack = Vec::new();
    for &root in finish_order.iter().rev() {
        if !visited[root] {
            continue;
        }

        let mut component = Vec::new();
        visited[root] = false;
        stack.push(root);
        while let Some(v) = stack.pop() {
            component.push(v);
            for &w in transpose.successors(v) {
                if visited[w] {
                    visited[w] = false;
                    stack.push(w);
                }
            }
        }
        components.push(component);
    }

    debug!("Kosaraju found {} strongly connected components", components.len());
    Ok(components)
}

/// Tarjan's SCC algorithm.
///
/// Single DFS with discovery index and low-link; an explicit frame stack
/// replaces recursion. Components are emitted in reverse topological order.
pub fn tarjan_scc(view: &CsrGraph) -> Vec<Vec<NodeId>> {
    let n = view.node_count();
    let mut index = vec![UNLABELED; n];
    let mut low_link = vec![0; n];
    let mut on_stack = vec![false; n];
    let mut scc_stack = Vec::new();
    let mut frames: Vec<(NodeId, usize)> = Vec::new();
    let mut components = Vec::new();
    let mut counter = 0;

    for start in 0..n {
        if index[start] != UNLABELED {
            continue;
        }

        frames.push((start, 0));
        while let Some(frame) = frames.last_mut() {
            let (v, next) = *frame;
            if next == 0 && index[v] == UNLABELED {
                index[v] = counter;
                low_link[v] = counter;
                counter += 1;
                scc_stack.push(v);
                on_stack[v] = true;
            }

            let neighbors = view.successors(v);
            if next < neighbors.len() {
                frame.1 += 1;
                let w = neighbors[next];
                if index[w] == UNLABELED {
                    frames.push((w, 0));
                } else if on_stack[w] {
                    low_link[v] = low_link[v].min(index[w]);
                }
                continue;
            }

            frames.pop();
            if let Some(&(parent, _)) = frames.last() {
                low_link[parent] = low_link[parent].min(low_link[v]);
            }

            if low_link[v] == index[v] {
                let mut component = Vec::new();
                while let Some(w) = scc_stack.pop() {
                    on_stack[w] = false;
                    component.push(w);
                    if w == v {
                        break;
                    }
                }
                components.push(component);
            }
        }
    }

    debug!("Tarjan found {} strongly connected components", components.len());
    components
}
