pub mod biconnected;
pub mod centrality;
pub mod clustering;
pub mod coloring;
pub mod common;
pub mod community;
pub mod matching;
pub mod mst;
pub mod partition;
pub mod pathfinding;
pub mod topology;
pub mod traversal;

pub use biconnected::{articulation_points, tarjan_bcc, BiconnectedComponents};
pub use centrality::{brandes_betweenness, brandes_betweenness_parallel};
pub use clustering::{scan, structural_similarity, ScanConfig, ScanResult};
pub use coloring::{color_count, greedy_coloring};
pub use common::{CsrGraph, GraphError, GraphResult, NodeId};
pub use community::{
    kosaraju_scc, label_connected_components, shiloach_vishkin, shiloach_vishkin_parallel,
    tarjan_scc, union_find_components, weakly_connected_components, UnionFind, WccResult,
};
pub use matching::maximal_matching;
pub use mst::{kruskal_mst, prim_mst, MSTResult, SpanningTree};
pub use partition::low_diameter_decomposition;
pub use pathfinding::{
    bellman_ford, dijkstra, reconstruct_path, shortest_path, BellmanFordResult, PathResult,
    ShortestPaths,
};
pub use topology::count_triangles;
pub use traversal::{bfs_path, dfs_path};
