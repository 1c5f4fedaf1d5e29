//! Graph construction
//!
//! This module turns edge lists into the CSR representation the algorithms
//! consume:
//! - `EdgeListBuilder` with optional symmetrization, row sorting and deduplication
//! - Deterministic generators (paths, cycles, cliques, grids, seeded random graphs)

pub mod builder;
pub mod generators;

// Re-export main types
pub use builder::EdgeListBuilder;
pub use csrgraph_algorithms::{CsrGraph, GraphError, GraphResult, NodeId};
