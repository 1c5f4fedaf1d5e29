//! SCAN structural graph clustering
//!
//! Nodes sharing many neighbors are structurally similar. Edges whose
//! similarity exceeds ε are strong; nodes with at least μ strong edges are
//! cores; clusters grow from cores along strong edges.

use super::common::{CsrGraph, GraphResult, NodeId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// SCAN parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Similarity threshold ε; an edge is strong when similarity > epsilon
    pub epsilon: f64,
    /// Minimum number of strong neighbors μ for a core node
    pub mu: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self { epsilon: 0.7, mu: 2 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScanResult {
    /// Members of each cluster, ascending, in order of their seeding core
    pub clusters: Vec<Vec<NodeId>>,
    /// Core nodes, ascending
    pub cores: Vec<NodeId>,
    /// Nodes that joined no cluster, ascending
    pub outliers: Vec<NodeId>,
}

/// Structural similarity |N(u) ∩ N(v)| / sqrt(deg(u)·deg(v)).
///
/// Merge-style intersection; both adjacency slices must be sorted.
pub fn structural_similarity(view: &CsrGraph, u: NodeId, v: NodeId) -> f64 {
    let a = view.successors(u);
    let b = view.successors(v);
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (mut i, mut j, mut common) = (0, 0, 0usize);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Equal => {
                common += 1;
                i += 1;
                j += 1;
            }
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
        }
    }

    common as f64 / ((a.len() * b.len()) as f64).sqrt()
}

/// SCAN clustering.
///
/// Each core not yet clustered, in index order, seeds a cluster grown by DFS
/// over strong edges. Only cores expand; non-core strong neighbors join as
/// border members and may border more than one cluster. Requires sorted
/// adjacency.
pub fn scan(view: &CsrGraph, config: &ScanConfig) -> GraphResult<ScanResult> {
    view.require_sorted_adjacency("SCAN")?;

    let n = view.node_count();
    let strong_neighbors: Vec<Vec<NodeId>> = (0..n)
        .map(|u| {
            view.successors(u)
                .iter()
                .copied()
                .filter(|&v| structural_similarity(view, u, v) > config.epsilon)
                .collect()
        })
        .collect();

    let is_core: Vec<bool> = strong_neighbors
        .iter()
        .map(|s| s.len() >= config.mu)
        .collect();

    let mut clustered = vec![false; n];
    let mut in_cluster = vec![usize::MAX; n];
    let mut clusters = Vec::new();
    let mut stack = Vec::new();

    for seed in 0..n {
        if !is_core[seed] || clustered[seed] {
            continue;
        }

        let cluster_id = clusters.len();
        let mut members = vec![seed];
        in_cluster[seed] = cluster_id;
        clustered[seed] = true;
        stack.push(seed);

        while let Some(u) = stack.pop() {
            for &v in &strong_neighbors[u] {
                if in_cluster[v] == cluster_id {
                    continue;
                }
                in_cluster[v] = cluster_id;
                clustered[v] = true;
                members.push(v);
                if is_core[v] {
                    stack.push(v);
                }
            }
        }

        members.sort_unstable();
        clusters.push(members);
    }

    let cores: Vec<NodeId> = (0..n).filter(|&i| is_core[i]).collect();
    let outliers: Vec<NodeId> = (0..n).filter(|&i| !clustered[i]).collect();
    debug!(
        "SCAN found {} clusters, {} cores, {} outliers",
        clusters.len(),
        cores.len(),
        outliers.len()
    );

    Ok(ScanResult {
        clusters,
        cores,
        outliers,
    })
}
