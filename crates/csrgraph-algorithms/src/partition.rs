//! Low-diameter decomposition

use super::common::CsrGraph;
use std::collections::VecDeque;
use tracing::debug;

/// Partition nodes into BFS-grown sets of at most `beta` nodes.
///
/// Each set is seeded at the lowest unvisited node and grown breadth-first
/// along out-edges until it holds `beta` nodes (the seed included) or the
/// frontier runs dry. Nodes still queued when a set fills are left for later
/// sets. `beta == 0` is treated as 1. Returns the set id of every node; ids
/// are dense and follow seed order.
pub fn low_diameter_decomposition(view: &CsrGraph, beta: usize) -> Vec<usize> {
    let n = view.node_count();
    let cap = beta.max(1);
    let mut set_of = vec![usize::MAX; n];
    let mut queue = VecDeque::new();
    let mut set_id = 0;

    for seed in 0..n {
        if set_of[seed] != usize::MAX {
            continue;
        }

        set_of[seed] = set_id;
        let mut size = 1;
        queue.clear();
        queue.push_back(seed);

        'grow: while let Some(u) = queue.pop_front() {
            for &v in view.successors(u) {
                if size >= cap {
                    break 'grow;
                }
                if set_of[v] != usize::MAX {
                    continue;
                }
                set_of[v] = set_id;
                size += 1;
                queue.push_back(v);
            }
        }

        set_id += 1;
    }

    debug!("Decomposed {} nodes into {} sets (beta={})", n, set_id, beta);
    set_of
}
