//! Biconnected components and articulation points (Tarjan)
//!
//! Expects an undirected graph stored with both directions of every edge.

use super::common::{CsrGraph, NodeId};
use serde::Serialize;
use tracing::debug;

const UNVISITED: usize = usize::MAX;

/// Result of the biconnected-components search
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BiconnectedComponents {
    /// Node set of each component (sorted), in the order components close
    pub components: Vec<Vec<NodeId>>,
    /// Cut vertices, ascending
    pub articulation_points: Vec<NodeId>,
}

/// Tarjan's biconnected components.
///
/// One low-link DFS with an edge stack. Whenever a child's low-link does not
/// reach above its parent (`low[child] >= disc[parent]`), the edges down to and
/// including that tree edge form one component. A DFS root is a cut vertex
/// with two or more tree children, any other node when such a child exists.
/// Isolated nodes belong to no component.
pub fn tarjan_bcc(view: &CsrGraph) -> BiconnectedComponents {
    let n = view.node_count();
    let mut disc = vec![UNVISITED; n];
    let mut low = vec![0; n];
    let mut parent: Vec<Option<NodeId>> = vec![None; n];
    let mut is_cut = vec![false; n];
    let mut edge_stack: Vec<(NodeId, NodeId)> = Vec::new();
    let mut frames: Vec<(NodeId, usize)> = Vec::new();
    let mut components = Vec::new();
    let mut time = 0;

    for root in 0..n {
        if disc[root] != UNVISITED {
            continue;
        }

        disc[root] = time;
        low[root] = time;
        time += 1;
        let mut root_children = 0;
        frames.push((root, 0));

        while let Some(frame) = frames.last_mut() {
            let (v, next) = *frame;
            let neighbors = view.successors(v);

            if next < neighbors.len() {
                frame.1 += 1;
                let w = neighbors[next];
                if disc[w] == UNVISITED {
                    parent[w] = Some(v);
                    disc[w] = time;
                    low[w] = time;
                    time += 1;
                    edge_stack.push((v, w));
                    frames.push((w, 0));
                    if v == root {
                        root_children += 1;
                    }
                } else if parent[v] != Some(w) && disc[w] < disc[v] {
                    // back edge to an ancestor
                    low[v] = low[v].min(disc[w]);
                    edge_stack.push((v, w));
                }
                continue;
            }

            frames.pop();
            let Some(&(u, _)) = frames.last() else {
                continue;
            };

            low[u] = low[u].min(low[v]);
            if low[v] >= disc[u] {
                if u != root {
                    is_cut[u] = true;
                }
                components.push(pop_component(&mut edge_stack, (u, v)));
            }
        }

        if root_children >= 2 {
            is_cut[root] = true;
        }
    }

    let articulation_points: Vec<NodeId> = (0..n).filter(|&i| is_cut[i]).collect();
    debug!(
        "Found {} biconnected components, {} articulation points",
        components.len(),
        articulation_points.len()
    );

    BiconnectedComponents {
        components,
        articulation_points,
    }
}

/// Pop edges down to and including `tree_edge`, returning their sorted node set
fn pop_component(edge_stack: &mut Vec<(NodeId, NodeId)>, tree_edge: (NodeId, NodeId)) -> Vec<NodeId> {
    let mut nodes = Vec::new();
    while let Some(edge) = edge_stack.pop() {
        nodes.push(edge.0);
        nodes.push(edge.1);
        if edge == tree_edge {
            break;
        }
    }
    nodes.sort_unstable();
    nodes.dedup();
    nodes
}

/// Cut vertices of an undirected graph, ascending
pub fn articulation_points(view: &CsrGraph) -> Vec<NodeId> {
    tarjan_bcc(view).articulation_points
}
