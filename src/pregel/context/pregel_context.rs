//! PregelContext - Base context for all Pregel contexts
//!
//! Provides common functionality shared across all context types:
//! configuration access, logging, and graph statistics.

use crate::pregel::PregelConfig;
use crate::types::graph::Graph;
use std::sync::Arc;

/// Base context for all Pregel context types.
///
/// This provides the foundation for all specialized contexts:
/// - `NodeCentricContext` (adds node-specific operations)
/// - `MasterComputeContext` (adds master compute operations)
pub struct PregelContext<C: PregelConfig> {
    config: C,
    graph: Arc<dyn Graph>,
}

impl<C: PregelConfig> PregelContext<C> {
    /// Create a new Pregel context.
    pub fn new(config: C, graph: Arc<dyn Graph>) -> Self {
        Self { config, graph }
    }

    /// Get the algorithm configuration.
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Get the graph backing this context.
    pub fn graph(&self) -> &Arc<dyn Graph> {
        &self.graph
    }

    /// Log a debug message.
    pub fn log_debug(&self, message: &str) {
        println!("[Pregel::debug] {}", message);
    }

    /// Log an info message.
    pub fn log_message(&self, message: &str) {
        println!("[Pregel::info] {}", message);
    }

    /// Log a warning message.
    pub fn log_warning(&self, message: &str) {
        println!("[Pregel::warn] {}", message);
    }

    /// Check if the input graph is a multi-graph (allows parallel edges).
    pub fn is_multi_graph(&self) -> bool {
        self.graph.is_multi_graph()
    }

    /// Get the number of nodes in the input graph.
    pub fn node_count(&self) -> u64 {
        self.graph.node_count() as u64
    }

    /// Get the number of relationships in the input graph.
    pub fn relationship_count(&self) -> u64 {
        self.graph.relationship_count() as u64
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::types::graph::{Graph, RelationshipTopology};
    use crate::types::graph_store::{
        Capabilities, DatabaseId, DatabaseInfo, DatabaseLocation, DefaultGraphStore, GraphName,
    };
    use crate::types::id_map::SimpleIdMap;
    use crate::types::schema::{GraphSchema, RelationshipType};
    use std::collections::HashMap;
    use std::sync::Arc;

    /// A tiny 3-node, directed triangle-ish graph (0->1, 0->2, 1->2) shared by
    /// the Pregel context and executor tests.
    pub(crate) fn triangle_graph() -> Arc<dyn Graph> {
        let graph_name = GraphName::new("g");
        let database_info = DatabaseInfo::new(
            DatabaseId::new("db"),
            DatabaseLocation::remote("localhost", 7687, None, None),
        );
        let schema = GraphSchema::empty();
        let capabilities = Capabilities::default();
        let id_map = SimpleIdMap::from_original_ids([0, 1, 2]);

        let topology = RelationshipTopology::new(vec![vec![1, 2], vec![2], vec![]], None);
        let mut relationship_topologies = HashMap::new();
        relationship_topologies.insert(RelationshipType::of("KNOWS"), topology);

        let store = DefaultGraphStore::new(
            graph_name,
            database_info,
            schema,
            capabilities,
            id_map,
            relationship_topologies,
        );
        store.graph()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::triangle_graph;
    use super::*;
    use crate::concurrency::Concurrency;

    struct TestConfig;
    impl PregelConfig for TestConfig {
        fn max_iterations(&self) -> usize {
            10
        }

        fn concurrency(&self) -> Concurrency {
            Concurrency::single_threaded()
        }
    }

    #[test]
    fn test_pregel_context_creation() {
        let ctx: PregelContext<TestConfig> = PregelContext::new(TestConfig, triangle_graph());
        assert_eq!(ctx.node_count(), 3);
    }

    #[test]
    fn test_graph_statistics() {
        let ctx: PregelContext<TestConfig> = PregelContext::new(TestConfig, triangle_graph());
        assert!(!ctx.is_multi_graph());
        assert_eq!(ctx.relationship_count(), 3);
    }
}
