//! GraphStore - Central interface for managing and accessing graph data.
#![allow(clippy::module_inception)]
//!
//! The GraphStore module provides the main orchestration layer for graph data management,
//! including schema, properties, topology, and filtered views.

mod capabilities;
mod database_id;
mod database_info;
mod default_graph_store;
mod deletion_result;
mod graph_name;
mod graph_store;
mod graph_store_builder;
mod relationship_import;

pub use capabilities::*;
pub use database_id::*;
pub use database_info::*;
pub use default_graph_store::*;
pub use deletion_result::*;
pub use graph_name::*;
pub use graph_store::*;
pub use graph_store_builder::*;
pub use relationship_import::{import_relationships, RelationshipImportResult, RelationshipTuple};
