//! Greedy vertex coloring

use super::common::CsrGraph;
use tracing::debug;

const UNCOLORED: usize = usize::MAX;

/// Greedy coloring in node-index order.
///
/// Each node takes the smallest color not used by an already-colored
/// neighbor. Deterministic for a given node order, not necessarily optimal;
/// uses at most max-degree + 1 colors.
pub fn greedy_coloring(view: &CsrGraph) -> Vec<usize> {
    let n = view.node_count();
    let mut colors = vec![UNCOLORED; n];
    // used[c] marks colors taken around the current node; reset after each node
    let mut used = vec![false; n + 1];

    for v in 0..n {
        let neighbors = view.successors(v);
        for &w in neighbors {
            if colors[w] != UNCOLORED {
                used[colors[w]] = true;
            }
        }

        let color = used.iter().position(|&taken| !taken).unwrap_or(n);
        colors[v] = color;

        for &w in neighbors {
            if colors[w] != UNCOLORED {
                used[colors[w]] = false;
            }
        }
    }

    debug!("Greedy coloring used {} colors", color_count(&colors));
    colors
}

/// Number of distinct colors in a coloring
pub fn color_count(colors: &[usize]) -> usize {
    colors.iter().max().map_or(0, |&c| c + 1)
}
