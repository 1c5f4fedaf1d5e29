//! Betweenness centrality (Brandes)
//!
//! For unweighted graphs, O(V·E) time. An undirected graph stored with both
//! edge directions counts every pair of endpoints twice, once per direction.

use super::common::{CsrGraph, NodeId};
use rayon::prelude::*;
use std::collections::VecDeque;
use tracing::debug;

/// Per-source scratch space, reused across sources
struct BrandesScratch {
    distance: Vec<i64>,
    path_count: Vec<f64>,
    dependency: Vec<f64>,
    predecessors: Vec<Vec<NodeId>>,
    order: Vec<NodeId>,
    queue: VecDeque<NodeId>,
}

impl BrandesScratch {
    fn new(n: usize) -> Self {
        BrandesScratch {
            distance: vec![-1; n],
            path_count: vec![0.0; n],
            dependency: vec![0.0; n],
            predecessors: vec![Vec::new(); n],
            order: Vec::with_capacity(n),
            queue: VecDeque::new(),
        }
    }

    fn reset(&mut self) {
        for &v in &self.order {
            self.distance[v] = -1;
            self.path_count[v] = 0.0;
            self.dependency[v] = 0.0;
            self.predecessors[v].clear();
        }
        self.order.clear();
    }

    /// BFS from `source`, then fold dependencies back into `betweenness`
    fn accumulate(&mut self, view: &CsrGraph, source: NodeId, betweenness: &mut [f64]) {
        self.reset();

        self.distance[source] = 0;
        self.path_count[source] = 1.0;
        self.queue.push_back(source);

        while let Some(v) = self.queue.pop_front() {
            self.order.push(v);
            for &w in view.successors(v) {
                if self.distance[w] < 0 {
                    self.distance[w] = self.distance[v] + 1;
                    self.queue.push_back(w);
                }
                // shortest path to w via v?
                if self.distance[w] == self.distance[v] + 1 {
                    self.path_count[w] += self.path_count[v];
                    self.predecessors[w].push(v);
                }
            }
        }

        // Reverse BFS order
        for &w in self.order.iter().rev() {
            let coefficient = (1.0 + self.dependency[w]) / self.path_count[w];
            for &p in &self.predecessors[w] {
                self.dependency[p] += self.path_count[p] * coefficient;
            }
            if w != source {
                betweenness[w] += self.dependency[w];
            }
        }
    }
}

/// Brandes betweenness centrality, one BFS per source
pub fn brandes_betweenness(view: &CsrGraph) -> Vec<f64> {
    let n = view.node_count();
    let mut betweenness = vec![0.0; n];
    let mut scratch = BrandesScratch::new(n);

    for source in 0..n {
        scratch.accumulate(view, source, &mut betweenness);
    }

    debug!("Betweenness computed for {} nodes", n);
    betweenness
}

/// Brandes betweenness with sources spread across the rayon pool.
///
/// Each worker owns its scratch space and accumulator; accumulators are
/// summed at the end. Matches [`brandes_betweenness`] up to floating-point
/// summation order.
pub fn brandes_betweenness_parallel(view: &CsrGraph) -> Vec<f64> {
    let n = view.node_count();

    let betweenness = (0..n)
        .into_par_iter()
        .fold(
            || (BrandesScratch::new(n), vec![0.0; n]),
            |(mut scratch, mut local), source| {
                scratch.accumulate(view, source, &mut local);
                (scratch, local)
            },
        )
        .map(|(_, local)| local)
        .reduce(
            || vec![0.0; n],
            |mut acc, local| {
                for (a, b) in acc.iter_mut().zip(local) {
                    *a += b;
                }
                acc
            },
        );

    debug!("Parallel betweenness computed for {} nodes", n);
    betweenness
}
