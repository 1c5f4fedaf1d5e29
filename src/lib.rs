//! csrgraph
//!
//! Classical graph analytics over one shared, immutable Compressed Sparse
//! Row (CSR) graph.
//!
//! # Architecture
//!
//! - `csrgraph-algorithms` (workspace crate): `CsrGraph` and every algorithm
//! - `graph`: edge-list builder and deterministic generators
//! - `config`: serde-loaded `AnalyticsConfig`
//! - `algo`: algorithm re-exports and the `run_analytics` runner
//! - `logging`: `tracing-subscriber` setup
//!
//! ## Example Usage
//!
//! ```rust
//! use csrgraph::algo::{count_triangles, label_connected_components};
//! use csrgraph::graph::EdgeListBuilder;
//!
//! let mut builder = EdgeListBuilder::new(5).symmetric(true);
//! builder.add_edge(0, 1).add_edge(1, 2).add_edge(2, 0).add_edge(3, 4);
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(count_triangles(&graph).unwrap(), 1);
//! assert_eq!(label_connected_components(&graph), vec![0, 0, 0, 1, 1]);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod graph;
pub mod logging;

// Re-export main types for convenience
pub use algo::{run_analytics, AnalyticsReport};
pub use config::{Algorithm, AnalyticsConfig, ConfigError};
pub use csrgraph_algorithms::{CsrGraph, GraphError, GraphResult, NodeId};
pub use graph::EdgeListBuilder;
pub use logging::init_tracing;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
