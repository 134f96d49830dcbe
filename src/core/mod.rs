//! Core execution scaffolding: contexts, graph dimensions, and shared utilities.

pub mod context;
pub mod graph_dimensions;
pub mod utils;

pub use context::{Context, ExecutionConfig, ExecutionMetrics, ExecutionMode, LogLevel};
pub use graph_dimensions::{ConcreteGraphDimensions, GraphDimensions};
