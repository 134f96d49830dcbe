//! Validated construction path for [`DefaultGraphStore`].

use super::{Capabilities, DatabaseInfo, DefaultGraphStore, GraphName};
use crate::concurrency::Concurrency;
use crate::types::graph::RelationshipTopology;
use crate::types::id_map::SimpleIdMap;
use crate::types::schema::{GraphSchema, RelationshipType};
use std::collections::HashMap;
use thiserror::Error;

/// Raised by [`GraphStoreBuilder::build`] when one or more required
/// components were never supplied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("graph store is missing required fields: {}", .missing.join(", "))]
pub struct GraphStoreBuilderError {
    pub missing: Vec<String>,
}

/// Builder for [`DefaultGraphStore`] that fails fast, listing every missing
/// required component, instead of accepting a partially-specified store.
#[derive(Default)]
pub struct GraphStoreBuilder {
    graph_name: Option<GraphName>,
    database_info: Option<DatabaseInfo>,
    schema: Option<GraphSchema>,
    capabilities: Option<Capabilities>,
    nodes: Option<SimpleIdMap>,
    relationships: Option<HashMap<RelationshipType, RelationshipTopology>>,
    concurrency: Option<Concurrency>,
}

impl GraphStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph_name(mut self, graph_name: GraphName) -> Self {
        self.graph_name = Some(graph_name);
        self
    }

    pub fn database_info(mut self, database_info: DatabaseInfo) -> Self {
        self.database_info = Some(database_info);
        self
    }

    pub fn schema(mut self, schema: GraphSchema) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = Some(capabilities);
        self
    }

    pub fn nodes(mut self, nodes: SimpleIdMap) -> Self {
        self.nodes = Some(nodes);
        self
    }

    pub fn relationships(
        mut self,
        relationships: HashMap<RelationshipType, RelationshipTopology>,
    ) -> Self {
        self.relationships = Some(relationships);
        self
    }

    pub fn concurrency(mut self, concurrency: Concurrency) -> Self {
        self.concurrency = Some(concurrency);
        self
    }

    /// Validates that every required component is present, returning the
    /// names of the missing ones on failure rather than panicking or
    /// silently defaulting.
    pub fn build(self) -> Result<DefaultGraphStore, GraphStoreBuilderError> {
        let mut missing = Vec::new();
        if self.graph_name.is_none() {
            missing.push("graph_name".to_string());
        }
        if self.database_info.is_none() {
            missing.push("database_info".to_string());
        }
        if self.schema.is_none() {
            missing.push("schema".to_string());
        }
        if self.capabilities.is_none() {
            missing.push("capabilities".to_string());
        }
        if self.nodes.is_none() {
            missing.push("nodes".to_string());
        }
        if self.relationships.is_none() {
            missing.push("relationships".to_string());
        }
        if self.concurrency.is_none() {
            missing.push("concurrency".to_string());
        }

        if !missing.is_empty() {
            return Err(GraphStoreBuilderError { missing });
        }

        Ok(DefaultGraphStore::with_concurrency(
            self.graph_name.unwrap(),
            self.database_info.unwrap(),
            self.schema.unwrap(),
            self.capabilities.unwrap(),
            self.nodes.unwrap(),
            self.relationships.unwrap(),
            self.concurrency.unwrap(),
        ))
    }
}
