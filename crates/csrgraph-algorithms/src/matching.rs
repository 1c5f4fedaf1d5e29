//! Greedy maximal matching

use super::common::{CsrGraph, NodeId};
use tracing::debug;

/// Maximal (not maximum) matching in a single greedy pass.
///
/// Each unmatched node, in index order, is matched with its first unmatched
/// neighbor in adjacency order. Afterwards no edge has two unmatched
/// endpoints. Self-loops are never matched.
pub fn maximal_matching(view: &CsrGraph) -> Vec<(NodeId, NodeId)> {
    let n = view.node_count();
    let mut matched = vec![false; n];
    let mut pairs = Vec::new();

    for source in 0..n {
        if matched[source] {
            continue;
        }
        if let Some(&target) = view
            .successors(source)
            .iter()
            .find(|&&t| t != source && !matched[t])
        {
            matched[source] = true;
            matched[target] = true;
            pairs.push((source, target));
        }
    }

    debug!("Matched {} pairs over {} nodes", pairs.len(), n);
    pairs
}
