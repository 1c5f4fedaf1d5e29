//! Graph algorithms module
//!
//! Algorithms are implemented in the `csrgraph-algorithms` crate.
//! This module re-exports them and provides a config-driven runner.

use crate::config::{Algorithm, AnalyticsConfig};
use anyhow::Context;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, warn};

// Re-export algorithms
pub use csrgraph_algorithms::{
    articulation_points, tarjan_bcc, BiconnectedComponents,
    brandes_betweenness, brandes_betweenness_parallel,
    scan, structural_similarity, ScanConfig, ScanResult,
    color_count, greedy_coloring,
    CsrGraph, GraphError, GraphResult, NodeId,
    kosaraju_scc, label_connected_components, shiloach_vishkin, shiloach_vishkin_parallel,
    tarjan_scc, union_find_components, weakly_connected_components, UnionFind, WccResult,
    maximal_matching,
    kruskal_mst, prim_mst, MSTResult, SpanningTree,
    low_diameter_decomposition,
    bellman_ford, dijkstra, reconstruct_path, shortest_path, BellmanFordResult, PathResult,
    ShortestPaths,
    count_triangles,
    bfs_path, dfs_path,
};

/// Outputs of one analytics run; only the algorithms that ran are present
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalyticsReport {
    pub node_count: usize,
    pub edge_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bfs_path: Option<Vec<NodeId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dfs_path: Option<Vec<NodeId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected_components: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub union_find: Option<Vec<NodeId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shiloach_vishkin: Option<Vec<NodeId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bellman_ford: Option<BellmanFordResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dijkstra: Option<ShortestPaths>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prim: Option<SpanningTree>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kruskal: Option<MSTResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub betweenness: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kosaraju: Option<Vec<Vec<NodeId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tarjan_scc: Option<Vec<Vec<NodeId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biconnected: Option<BiconnectedComponents>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan: Option<ScanResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coloring: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching: Option<Vec<(NodeId, NodeId)>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triangles: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_diameter: Option<Vec<usize>>,
}

impl AnalyticsReport {
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize analytics report")
    }
}

/// Run every algorithm named in `config` against `graph`.
///
/// The configuration is validated first. Algorithm failures (unsorted
/// adjacency, negative Dijkstra weights, out-of-range nodes) abort the run
/// with the algorithm name attached. A negative cycle is not a failure: it
/// shows up in the Bellman-Ford entry of the report.
pub fn run_analytics(graph: &CsrGraph, config: &AnalyticsConfig) -> anyhow::Result<AnalyticsReport> {
    config.validate()?;

    match config.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build rayon thread pool")?;
            pool.install(|| run_all(graph, config))
        }
        None => run_all(graph, config),
    }
}

fn run_all(graph: &CsrGraph, config: &AnalyticsConfig) -> anyhow::Result<AnalyticsReport> {
    let mut report = AnalyticsReport {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        ..AnalyticsReport::default()
    };

    info!(
        "Running {} algorithms on {} nodes / {} edges",
        config.algorithms.len(),
        graph.node_count(),
        graph.edge_count()
    );

    for &algorithm in &config.algorithms {
        let start = Instant::now();
        run_one(graph, config, algorithm, &mut report)
            .with_context(|| format!("{} failed", algorithm.name()))?;
        debug!("{} finished in {:?}", algorithm.name(), start.elapsed());
    }

    Ok(report)
}

fn run_one(
    graph: &CsrGraph,
    config: &AnalyticsConfig,
    algorithm: Algorithm,
    report: &mut AnalyticsReport,
) -> GraphResult<()> {
    // validate() guarantees a target for path searches
    let target = config.target.unwrap_or(config.root);

    match algorithm {
        Algorithm::Bfs => report.bfs_path = Some(bfs_path(graph, config.root, target)?),
        Algorithm::Dfs => report.dfs_path = Some(dfs_path(graph, config.root, target)?),
        Algorithm::ConnectedComponents => {
            report.connected_components = Some(label_connected_components(graph))
        }
        Algorithm::UnionFind => report.union_find = Some(union_find_components(graph)),
        Algorithm::ShiloachVishkin => {
            report.shiloach_vishkin = Some(if config.parallel {
                shiloach_vishkin_parallel(graph)
            } else {
                shiloach_vishkin(graph)
            })
        }
        Algorithm::BellmanFord => {
            let result = bellman_ford(graph, config.root)?;
            if result.negative_cycle {
                warn!("Bellman-Ford from {} hit a negative cycle", config.root);
            }
            report.bellman_ford = Some(result);
        }
        Algorithm::Dijkstra => report.dijkstra = Some(dijkstra(graph, config.root)?),
        Algorithm::Prim => report.prim = Some(prim_mst(graph)),
        Algorithm::Kruskal => report.kruskal = Some(kruskal_mst(graph)),
        Algorithm::Betweenness => {
            report.betweenness = Some(if config.parallel {
                brandes_betweenness_parallel(graph)
            } else {
                brandes_betweenness(graph)
            })
        }
        Algorithm::Kosaraju => {
            report.kosaraju = Some(kosaraju_scc(graph, &graph.transpose())?)
        }
        Algorithm::TarjanScc => report.tarjan_scc = Some(tarjan_scc(graph)),
        Algorithm::Biconnected => report.biconnected = Some(tarjan_bcc(graph)),
        Algorithm::Scan => report.scan = Some(scan(graph, &config.scan)?),
        Algorithm::Coloring => report.coloring = Some(greedy_coloring(graph)),
        Algorithm::Matching => report.matching = Some(maximal_matching(graph)),
        Algorithm::Triangles => report.triangles = Some(count_triangles(graph)?),
        Algorithm::LowDiameter => {
            report.low_diameter = Some(low_diameter_decomposition(graph, config.ldd_beta))
        }
    }

    Ok(())
}
