//! Pathfinding algorithms
//!
//! Single-source shortest paths: Bellman-Ford (negative weights, cycle
//! detection) and Dijkstra (non-negative weights). Unweighted graphs use a
//! weight of 1.0 per edge.

use super::common::{CsrGraph, GraphError, GraphResult, NodeId};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use serde::Serialize;
use tracing::{debug, warn};

/// Distances and shortest-path tree from a single source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths {
    pub source: NodeId,
    /// `f64::INFINITY` for unreachable nodes
    pub distance: Vec<f64>,
    /// Predecessor on the shortest path; `None` for the source and unreachable nodes
    pub parent: Vec<Option<NodeId>>,
}

/// Outcome of Bellman-Ford.
///
/// When a negative cycle is reachable from the source, `negative_cycle` is set
/// and both arrays are empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BellmanFordResult {
    pub source: NodeId,
    pub distance: Vec<f64>,
    pub parent: Vec<Option<NodeId>>,
    pub negative_cycle: bool,
}

impl BellmanFordResult {
    /// Converts a detected negative cycle into `GraphError::NegativeCycleDetected`
    pub fn into_result(self) -> GraphResult<ShortestPaths> {
        if self.negative_cycle {
            return Err(GraphError::NegativeCycleDetected);
        }
        Ok(ShortestPaths {
            source: self.source,
            distance: self.distance,
            parent: self.parent,
        })
    }
}

/// Result of a point-to-point path query
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub source: NodeId,
    pub target: NodeId,
    pub path: Vec<NodeId>,
    pub cost: f64,
}

/// State for Dijkstra priority queue
#[derive(Copy, Clone, PartialEq)]
pub(crate) struct State {
    pub(crate) cost: f64,
    pub(crate) node_idx: NodeId,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare costs reversed for min-heap, smaller node first on ties
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node_idx.cmp(&self.node_idx))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Bellman-Ford single-source shortest paths, O(V·E).
///
/// Relaxes every edge up to `node_count - 1` times, then runs one extra pass:
/// if anything still relaxes, a negative cycle is reachable from `source`.
pub fn bellman_ford(view: &CsrGraph, source: NodeId) -> GraphResult<BellmanFordResult> {
    view.check_node(source)?;

    let n = view.node_count();
    let mut distance = vec![f64::INFINITY; n];
    let mut parent = vec![None; n];
    distance[source] = 0.0;

    let mut rounds = 0;
    for _ in 1..n {
        rounds += 1;
        if !relax_all(view, &mut distance, &mut parent) {
            break;
        }
    }

    if relax_all(view, &mut distance, &mut parent) {
        warn!("Negative cycle reachable from node {}", source);
        return Ok(BellmanFordResult {
            source,
            distance: Vec::new(),
            parent: Vec::new(),
            negative_cycle: true,
        });
    }

    debug!("Bellman-Ford from {} settled after {} rounds", source, rounds);
    Ok(BellmanFordResult {
        source,
        distance,
        parent,
        negative_cycle: false,
    })
}

/// One relaxation pass over every edge. Returns true if any distance dropped.
fn relax_all(view: &CsrGraph, distance: &mut [f64], parent: &mut [Option<NodeId>]) -> bool {
    let mut changed = false;
    for u in 0..view.node_count() {
        if distance[u] == f64::INFINITY {
            continue;
        }
        for (v, weight) in view.weighted_successors(u) {
            let candidate = distance[u] + weight;
            if candidate < distance[v] {
                distance[v] = candidate;
                parent[v] = Some(u);
                changed = true;
            }
        }
    }
    changed
}

/// Dijkstra's Algorithm (Weighted Shortest Path)
///
/// Uses a binary heap without decrease-key: improved distances push a new
/// entry and stale entries are skipped when popped. Negative edge weights are
/// rejected before the search starts.
pub fn dijkstra(view: &CsrGraph, source: NodeId) -> GraphResult<ShortestPaths> {
    view.check_node(source)?;

    if let Some(w) = view.edge_weights() {
        if let Some(pos) = w.iter().position(|&x| x < 0.0) {
            return Err(GraphError::PreconditionViolated(format!(
                "Dijkstra requires non-negative weights, edge {} has weight {}",
                pos, w[pos]
            )));
        }
    }

    let n = view.node_count();
    let mut distance = vec![f64::INFINITY; n];
    let mut parent = vec![None; n];
    let mut heap = BinaryHeap::new();

    distance[source] = 0.0;
    heap.push(State { cost: 0.0, node_idx: source });

    let mut settled = 0;
    while let Some(State { cost, node_idx }) = heap.pop() {
        if cost > distance[node_idx] {
            continue;
        }
        settled += 1;

        for (next_idx, weight) in view.weighted_successors(node_idx) {
            let next_cost = cost + weight;
            if next_cost < distance[next_idx] {
                distance[next_idx] = next_cost;
                parent[next_idx] = Some(node_idx);
                heap.push(State { cost: next_cost, node_idx: next_idx });
            }
        }
    }

    debug!("Dijkstra from {} settled {} nodes", source, settled);
    Ok(ShortestPaths {
        source,
        distance,
        parent,
    })
}

/// Walk a parent array back from `target`. Empty when `target` was not reached.
pub fn reconstruct_path(parent: &[Option<NodeId>], source: NodeId, target: NodeId) -> Vec<NodeId> {
    if target >= parent.len() || (target != source && parent[target].is_none()) {
        return Vec::new();
    }

    let mut path = vec![target];
    let mut curr = target;
    while curr != source {
        match parent[curr] {
            Some(p) => {
                path.push(p);
                curr = p;
            }
            None => return Vec::new(),
        }
        if path.len() > parent.len() {
            return Vec::new();
        }
    }
    path.reverse();
    path
}

/// Weighted shortest path between two nodes using Dijkstra
pub fn shortest_path(
    view: &CsrGraph,
    source: NodeId,
    target: NodeId,
) -> GraphResult<Option<PathResult>> {
    view.check_node(target)?;
    let tree = dijkstra(view, source)?;
    let path = reconstruct_path(&tree.parent, source, target);
    if path.is_empty() {
        return Ok(None);
    }
    Ok(Some(PathResult {
        source,
        target,
        path,
        cost: tree.distance[target],
    }))
}
