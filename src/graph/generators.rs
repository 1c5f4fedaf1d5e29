//! Deterministic graph generators
//!
//! Every generator returns an undirected [`EdgeListBuilder`] (symmetric,
//! sorted rows); call `build()` to obtain the graph.

use super::builder::EdgeListBuilder;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Path 0 - 1 - ... - (n-1)
pub fn path(n: usize) -> EdgeListBuilder {
    let mut builder = EdgeListBuilder::new(n).symmetric(true);
    builder.extend_edges((1..n).map(|i| (i - 1, i)));
    builder
}

/// Cycle over n nodes; fewer than three nodes give a path
pub fn cycle(n: usize) -> EdgeListBuilder {
    let mut builder = path(n);
    if n >= 3 {
        builder.add_edge(n - 1, 0);
    }
    builder
}

/// Complete graph K_n
pub fn complete(n: usize) -> EdgeListBuilder {
    let mut builder = EdgeListBuilder::new(n).symmetric(true);
    for u in 0..n {
        builder.extend_edges((u + 1..n).map(|v| (u, v)));
    }
    builder
}

/// Star with center 0 and `leaves` leaves
pub fn star(leaves: usize) -> EdgeListBuilder {
    let mut builder = EdgeListBuilder::new(leaves + 1).symmetric(true);
    builder.extend_edges((1..=leaves).map(|leaf| (0, leaf)));
    builder
}

/// `rows x cols` lattice, node id `r * cols + c`
pub fn grid(rows: usize, cols: usize) -> EdgeListBuilder {
    let mut builder = EdgeListBuilder::new(rows * cols).symmetric(true);
    for r in 0..rows {
        for c in 0..cols {
            let id = r * cols + c;
            if c + 1 < cols {
                builder.add_edge(id, id + 1);
            }
            if r + 1 < rows {
                builder.add_edge(id, id + cols);
            }
        }
    }
    builder
}

/// G(n, p): each unordered pair is an edge with probability `p`
pub fn erdos_renyi(n: usize, p: f64, seed: u64) -> EdgeListBuilder {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = EdgeListBuilder::new(n).symmetric(true);
    for u in 0..n {
        for v in u + 1..n {
            if rng.gen_bool(p.clamp(0.0, 1.0)) {
                builder.add_edge(u, v);
            }
        }
    }
    builder
}

/// G(n, p) with edge weights drawn uniformly from `[1, max_weight)`
pub fn erdos_renyi_weighted(n: usize, p: f64, max_weight: f64, seed: u64) -> EdgeListBuilder {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = EdgeListBuilder::new(n).symmetric(true);
    let upper = max_weight.max(1.0 + f64::EPSILON);
    for u in 0..n {
        for v in u + 1..n {
            if rng.gen_bool(p.clamp(0.0, 1.0)) {
                builder.add_weighted_edge(u, v, rng.gen_range(1.0..upper));
            }
        }
    }
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapes() {
        let p = path(4).build().unwrap();
        assert_eq!(p.edge_count(), 6);
        assert_eq!(p.successors(1), &[0, 2]);

        let c = cycle(4).build().unwrap();
        assert_eq!(c.successors(0), &[1, 3]);
        assert_eq!(cycle(2).build().unwrap().edge_count(), 2);

        let k = complete(5).build().unwrap();
        assert_eq!(k.edge_count(), 20);

        let s = star(3).build().unwrap();
        assert_eq!(s.out_degree(0), 3);

        let g = grid(2, 3).build().unwrap();
        // 3 + 4 undirected edges
        assert_eq!(g.edge_count(), 14);
        assert_eq!(g.successors(4), &[1, 3, 5]);
    }

    #[test]
    fn test_erdos_renyi_is_seeded() {
        let a = erdos_renyi(50, 0.1, 7).build().unwrap();
        let b = erdos_renyi(50, 0.1, 7).build().unwrap();
        assert_eq!(a, b);
        assert!(a.is_symmetric());
        assert!(a.has_sorted_adjacency());

        assert_eq!(erdos_renyi(10, 0.0, 1).build().unwrap().edge_count(), 0);
        assert_eq!(erdos_renyi(10, 1.0, 1).build().unwrap().edge_count(), 90);
    }

    #[test]
    fn test_weighted_range() {
        let g = erdos_renyi_weighted(30, 0.3, 5.0, 11).build().unwrap();
        let weights = g.edge_weights().unwrap();
        assert!(weights.iter().all(|&w| (1.0..5.0).contains(&w)));
    }
}
