//! Graph topology analysis: triangle counting

use super::common::{CsrGraph, GraphResult};
use tracing::debug;

/// Triangle Counting
///
/// For every node and every pair of its neighbors `i < j` (by adjacency
/// position), a binary search checks whether the second neighbor appears in
/// the first one's adjacency. On a symmetric graph every triangle is seen
/// once from each corner, so the raw count is divided by three.
///
/// Requires sorted adjacency.
pub fn count_triangles(view: &CsrGraph) -> GraphResult<u64> {
    view.require_sorted_adjacency("triangle counting")?;

    let mut raw: u64 = 0;
    for u in 0..view.node_count() {
        let neighbors = view.successors(u);
        for (i, &a) in neighbors.iter().enumerate() {
            let a_neighbors = view.successors(a);
            for &b in &neighbors[i + 1..] {
                if a_neighbors.binary_search(&b).is_ok() {
                    raw += 1;
                }
            }
        }
    }

    let triangles = raw / 3;
    debug!("Counted {} triangles over {} nodes", triangles, view.node_count());
    Ok(triangles)
}
