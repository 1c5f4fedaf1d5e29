use csrgraph::algo::*;
use csrgraph::graph::{generators, EdgeListBuilder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Relabel so that labels appear as 0, 1, 2, ... in node order
fn canonical(labels: &[usize]) -> Vec<usize> {
    let mut seen = std::collections::HashMap::new();
    labels
        .iter()
        .map(|l| {
            let next = seen.len();
            *seen.entry(*l).or_insert(next)
        })
        .collect()
}

fn normalize(mut sets: Vec<Vec<NodeId>>) -> Vec<Vec<NodeId>> {
    for set in &mut sets {
        set.sort_unstable();
    }
    sets.sort();
    sets
}

fn component_count(g: &CsrGraph) -> usize {
    label_connected_components(g)
        .into_iter()
        .max()
        .map_or(0, |m| m + 1)
}

fn random_directed(n: usize, edges: usize, seed: u64) -> CsrGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = EdgeListBuilder::new(n);
    for _ in 0..edges {
        builder.add_edge(rng.gen_range(0..n), rng.gen_range(0..n));
    }
    builder.build().unwrap()
}

/// Undirected edges `u < v` of a symmetric graph
fn undirected_edges(g: &CsrGraph) -> Vec<(NodeId, NodeId)> {
    (0..g.node_count())
        .flat_map(|u| g.successors(u).iter().map(move |&v| (u, v)))
        .filter(|&(u, v)| u < v)
        .collect()
}

#[test]
fn test_connectivity_methods_agree() {
    for seed in 0..8 {
        let g = generators::erdos_renyi(120, 0.012, seed).build().unwrap();
        let dfs = canonical(&label_connected_components(&g));
        assert_eq!(canonical(&union_find_components(&g)), dfs, "seed {}", seed);
        assert_eq!(canonical(&shiloach_vishkin(&g)), dfs, "seed {}", seed);
        assert_eq!(shiloach_vishkin_parallel(&g), shiloach_vishkin(&g));
    }
}

#[test]
fn test_shiloach_vishkin_labels_are_component_minimum() {
    let g = generators::erdos_renyi(80, 0.02, 3).build().unwrap();
    let labels = shiloach_vishkin(&g);
    for (node, &label) in labels.iter().enumerate() {
        assert!(label <= node);
        assert_eq!(labels[label], label);
    }
}

#[test]
fn test_betweenness_on_paths() {
    for n in [5usize, 6] {
        let g = generators::path(n).build().unwrap();
        let bc = brandes_betweenness(&g);
        let expected: Vec<f64> = (0..n).map(|k| (2 * k * (n - 1 - k)) as f64).collect();
        for (score, want) in bc.iter().zip(&expected) {
            assert!((score - want).abs() < 1e-9, "n={}: {:?}", n, bc);
        }
    }
}

#[test]
fn test_betweenness_parallel_on_random_graph() {
    let g = generators::erdos_renyi(60, 0.08, 21).build().unwrap();
    let seq = brandes_betweenness(&g);
    let par = brandes_betweenness_parallel(&g);
    for (a, b) in seq.iter().zip(&par) {
        assert!((a - b).abs() < 1e-6 * a.max(1.0));
    }
}

#[test]
fn test_bellman_ford_matches_dijkstra() {
    for seed in 0..5 {
        let g = generators::erdos_renyi_weighted(70, 0.06, 20.0, seed)
            .build()
            .unwrap();
        let bf = bellman_ford(&g, 0).unwrap();
        let dj = dijkstra(&g, 0).unwrap();
        assert!(!bf.negative_cycle);
        assert_eq!(bf.parent, dj.parent, "seed {}", seed);
        for (a, b) in bf.distance.iter().zip(&dj.distance) {
            assert!(a == b || (a - b).abs() < 1e-9);
        }
    }
}

#[test]
fn test_negative_cycle_detection_and_recovery() {
    // 0 -> 1 -> 2 -> 3, plus 3 -> 1 closing a cycle of weight 1 + 1 - 3
    let edges = [(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 1, -3.0)];

    let mut builder = EdgeListBuilder::new(4);
    for &(u, v, w) in &edges {
        builder.add_weighted_edge(u, v, w);
    }
    let with_cycle = bellman_ford(&builder.build().unwrap(), 0).unwrap();
    assert!(with_cycle.negative_cycle);
    assert!(with_cycle.parent.is_empty());
    assert!(with_cycle.distance.is_empty());
    assert!(matches!(
        with_cycle.into_result(),
        Err(GraphError::NegativeCycleDetected)
    ));

    let mut builder = EdgeListBuilder::new(4);
    for &(u, v, w) in &edges[..3] {
        builder.add_weighted_edge(u, v, w);
    }
    let tree = bellman_ford(&builder.build().unwrap(), 0)
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(tree.parent, vec![None, Some(0), Some(1), Some(2)]);
    assert_eq!(tree.distance, vec![0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn test_kruskal_and_prim_agree() {
    for seed in 0..5 {
        let g = generators::erdos_renyi_weighted(60, 0.04, 50.0, seed)
            .build()
            .unwrap();
        let kruskal = kruskal_mst(&g);
        assert_eq!(kruskal.edges.len(), g.node_count() - component_count(&g));
        assert!(kruskal.edges.windows(2).all(|w| w[0].2 <= w[1].2));
    }

    let mut checked = 0;
    for seed in 0..5 {
        let g = generators::erdos_renyi_weighted(40, 0.3, 50.0, seed)
            .build()
            .unwrap();
        if component_count(&g) != 1 {
            continue;
        }
        checked += 1;
        let prim = prim_mst(&g);
        let kruskal = kruskal_mst(&g);
        assert!((prim.total_weight - kruskal.total_weight).abs() < 1e-9);
        assert_eq!(prim.parent.iter().filter(|p| p.is_some()).count(), 39);
    }
    assert!(checked > 0);
}

#[test]
fn test_triangle_count_example() {
    let g = CsrGraph::new(
        vec![0, 3, 5, 7, 10, 12, 14],
        vec![1, 2, 3, 0, 2, 0, 1, 0, 4, 5, 3, 5, 3, 4],
        None,
    )
    .unwrap();
    assert_eq!(count_triangles(&g).unwrap(), 2);
    assert_eq!(count_triangles(&generators::complete(6).build().unwrap()).unwrap(), 20);
    assert_eq!(count_triangles(&generators::grid(4, 4).build().unwrap()).unwrap(), 0);
}

#[test]
fn test_scc_algorithms_agree() {
    for seed in 0..8 {
        let g = random_directed(90, 130, seed);
        let tarjan = normalize(tarjan_scc(&g));
        let kosaraju = normalize(kosaraju_scc(&g, &g.transpose()).unwrap());
        assert_eq!(tarjan, kosaraju, "seed {}", seed);
        assert_eq!(tarjan.iter().map(Vec::len).sum::<usize>(), 90);
    }
}

#[test]
fn test_greedy_coloring_is_proper() {
    for seed in 0..5 {
        let g = generators::erdos_renyi(100, 0.1, seed).build().unwrap();
        let colors = greedy_coloring(&g);
        let max_degree = (0..g.node_count()).map(|u| g.out_degree(u)).max().unwrap_or(0);
        assert!(color_count(&colors) <= max_degree + 1);
        for u in 0..g.node_count() {
            for &v in g.successors(u) {
                assert_ne!(colors[u], colors[v], "edge {}-{}", u, v);
            }
        }
    }
}

#[test]
fn test_articulation_points_by_removal() {
    for seed in 0..4 {
        let g = generators::erdos_renyi(30, 0.08, seed).build().unwrap();
        let edges = undirected_edges(&g);
        let base = component_count(&g);
        let cut = articulation_points(&g);

        for v in 0..g.node_count() {
            if g.out_degree(v) == 0 {
                assert!(!cut.contains(&v));
                continue;
            }
            let mut builder = EdgeListBuilder::new(g.node_count()).symmetric(true);
            builder.extend_edges(edges.iter().copied().filter(|&(a, b)| a != v && b != v));
            // v stays behind as a singleton
            let without = component_count(&builder.build().unwrap()) - 1;
            assert_eq!(cut.contains(&v), without > base, "seed {} node {}", seed, v);
        }
    }
}

#[test]
fn test_biconnected_components_cover_edges() {
    let g = generators::erdos_renyi(40, 0.1, 9).build().unwrap();
    let bcc = tarjan_bcc(&g);
    for (u, v) in undirected_edges(&g) {
        let holders = bcc
            .components
            .iter()
            .filter(|c| c.binary_search(&u).is_ok() && c.binary_search(&v).is_ok())
            .count();
        assert_eq!(holders, 1, "edge {}-{}", u, v);
    }
}

#[test]
fn test_matching_is_maximal() {
    let g = generators::erdos_renyi(80, 0.05, 4).build().unwrap();
    let pairs = maximal_matching(&g);
    let mut matched = vec![false; g.node_count()];
    for &(u, v) in &pairs {
        assert!(!matched[u] && !matched[v]);
        matched[u] = true;
        matched[v] = true;
    }
    for (u, v) in undirected_edges(&g) {
        assert!(matched[u] || matched[v]);
    }
}

#[test]
fn test_low_diameter_sets_are_bounded() {
    let g = generators::grid(10, 10).build().unwrap();
    for beta in [1, 3, 7] {
        let sets = low_diameter_decomposition(&g, beta);
        let set_count = sets.iter().max().map_or(0, |m| m + 1);
        let mut sizes = vec![0; set_count];
        for &s in &sets {
            sizes[s] += 1;
        }
        assert!(sizes.iter().all(|&size| (1..=beta).contains(&size)));
    }
}

#[test]
fn test_scan_separates_cliques() {
    // Two K5 joined by a single bridge 4-5
    let mut builder = EdgeListBuilder::new(10).symmetric(true);
    for base in [0, 5] {
        for u in base..base + 5 {
            builder.extend_edges((u + 1..base + 5).map(|v| (u, v)));
        }
    }
    builder.add_edge(4, 5);
    let g = builder.build().unwrap();

    let result = scan(&g, &ScanConfig { epsilon: 0.5, mu: 3 }).unwrap();
    assert_eq!(
        result.clusters,
        vec![vec![0, 1, 2, 3, 4], vec![5, 6, 7, 8, 9]]
    );
    assert!(result.outliers.is_empty());
}

#[test]
fn test_bfs_path_is_shortest() {
    let g = generators::grid(6, 6).build().unwrap();
    let bfs = bfs_path(&g, 0, 35).unwrap();
    let unit = dijkstra(&g, 0).unwrap();
    assert_eq!(bfs.len() as f64 - 1.0, unit.distance[35]);

    let dfs = dfs_path(&g, 0, 35).unwrap();
    assert_eq!(dfs.first(), Some(&0));
    assert_eq!(dfs.last(), Some(&35));
    for w in dfs.windows(2) {
        assert!(g.successors(w[0]).contains(&w[1]));
    }
}

#[test]
fn test_shortest_path_query() {
    let mut builder = EdgeListBuilder::new(4);
    builder
        .add_weighted_edge(0, 1, 1.0)
        .add_weighted_edge(1, 3, 1.0)
        .add_weighted_edge(0, 2, 0.5)
        .add_weighted_edge(2, 3, 0.5);
    let g = builder.build().unwrap();

    let result = shortest_path(&g, 0, 3).unwrap().unwrap();
    assert_eq!(result.path, vec![0, 2, 3]);
    assert_eq!(result.cost, 1.0);
    assert!(shortest_path(&g, 3, 0).unwrap().is_none());
}
