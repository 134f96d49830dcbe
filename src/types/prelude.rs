//! Curated prelude for the `types` module.
//!
//! The prelude re-exports a small, stable set of traits and defaults that
//! downstream consumers can rely on. Keep this module intentionally small.

// Re-export a conservative set of graph and graph_store types
pub use crate::types::graph::{DefaultGraph, Degrees, Graph, GraphExt};
pub use crate::types::graph_store::{DefaultGraphStore, GraphStore, GraphStoreAdapter};

// Schema & property essentials
pub use crate::types::properties::property::Property;
pub use crate::types::schema::{
    GraphSchema, NodeLabel, NodeSchema, PropertySchema, RelationshipType,
};
pub use crate::types::value_type::ValueType;

// Property traits
pub use crate::types::properties::{
    GraphPropertyValues, NodePropertyValues, PropertyValues, RelationshipPropertyValues,
};

// Re-export core helpers
pub use crate::concurrency::Concurrency;

// Keep additions conservative: expand on demand.
