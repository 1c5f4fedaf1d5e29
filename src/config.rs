//! Analytics run configuration
//!
//! Loaded from YAML or JSON; every field has a default.

use anyhow::Context;
use csrgraph_algorithms::{NodeId, ScanConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// SCAN similarity threshold outside [0, 1]
    #[error("SCAN epsilon must lie in [0, 1], got {0}")]
    InvalidEpsilon(f64),

    /// SCAN core threshold below one
    #[error("SCAN mu must be at least 1")]
    InvalidMu,

    /// Path search requested without a target node
    #[error("{0} requires a target node")]
    MissingTarget(&'static str),

    /// Thread pool of size zero
    #[error("threads must be at least 1")]
    InvalidThreads,

    /// File extension is neither YAML nor JSON
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Algorithms the runner knows how to execute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Bfs,
    Dfs,
    ConnectedComponents,
    UnionFind,
    ShiloachVishkin,
    BellmanFord,
    Dijkstra,
    Prim,
    Kruskal,
    Betweenness,
    Kosaraju,
    TarjanScc,
    Biconnected,
    Scan,
    Coloring,
    Matching,
    Triangles,
    LowDiameter,
}

impl Algorithm {
    pub const ALL: [Algorithm; 18] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::ConnectedComponents,
        Algorithm::UnionFind,
        Algorithm::ShiloachVishkin,
        Algorithm::BellmanFord,
        Algorithm::Dijkstra,
        Algorithm::Prim,
        Algorithm::Kruskal,
        Algorithm::Betweenness,
        Algorithm::Kosaraju,
        Algorithm::TarjanScc,
        Algorithm::Biconnected,
        Algorithm::Scan,
        Algorithm::Coloring,
        Algorithm::Matching,
        Algorithm::Triangles,
        Algorithm::LowDiameter,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::ConnectedComponents => "connected_components",
            Algorithm::UnionFind => "union_find",
            Algorithm::ShiloachVishkin => "shiloach_vishkin",
            Algorithm::BellmanFord => "bellman_ford",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Prim => "prim",
            Algorithm::Kruskal => "kruskal",
            Algorithm::Betweenness => "betweenness",
            Algorithm::Kosaraju => "kosaraju",
            Algorithm::TarjanScc => "tarjan_scc",
            Algorithm::Biconnected => "biconnected",
            Algorithm::Scan => "scan",
            Algorithm::Coloring => "coloring",
            Algorithm::Matching => "matching",
            Algorithm::Triangles => "triangles",
            Algorithm::LowDiameter => "low_diameter",
        }
    }

    /// Point-to-point searches need `target`
    pub fn needs_target(&self) -> bool {
        matches!(self, Algorithm::Bfs | Algorithm::Dfs)
    }
}

/// Which algorithms to run and with what parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Algorithms to run, in order
    pub algorithms: Vec<Algorithm>,
    /// Source node for traversals and single-source shortest paths
    pub root: NodeId,
    /// Destination for BFS/DFS path search
    pub target: Option<NodeId>,
    pub scan: ScanConfig,
    /// Maximum set size for low-diameter decomposition
    pub ldd_beta: usize,
    /// Use the rayon variants of Shiloach-Vishkin and betweenness
    pub parallel: bool,
    /// Size of the dedicated rayon pool; `None` uses the global pool
    pub threads: Option<usize>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            algorithms: Algorithm::ALL
                .iter()
                .copied()
                .filter(|a| !a.needs_target())
                .collect(),
            root: 0,
            target: None,
            scan: ScanConfig::default(),
            ldd_beta: 4,
            parallel: false,
            threads: None,
        }
    }
}

impl AnalyticsConfig {
    /// Configuration running exactly `algorithms` with default parameters
    pub fn with_algorithms(algorithms: &[Algorithm]) -> Self {
        Self {
            algorithms: algorithms.to_vec(),
            ..Self::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let epsilon = self.scan.epsilon;
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(ConfigError::InvalidEpsilon(epsilon));
        }
        if self.scan.mu == 0 {
            return Err(ConfigError::InvalidMu);
        }
        if self.target.is_none() {
            if let Some(algo) = self.algorithms.iter().find(|a| a.needs_target()) {
                return Err(ConfigError::MissingTarget(algo.name()));
            }
        }
        if self.threads == Some(0) {
            return Err(ConfigError::InvalidThreads);
        }
        Ok(())
    }

    pub fn from_yaml_str(text: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(text).context("Failed to parse YAML config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(text).context("Failed to parse JSON config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load a `.yaml`/`.yml` or `.json` file
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&text),
            "json" => Self::from_json_str(&text),
            other => Err(ConfigError::UnsupportedFormat(other.to_string()).into()),
        }
    }
}
