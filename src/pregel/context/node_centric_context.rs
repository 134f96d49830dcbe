//! NodeCentricContext - Base context for node-centric operations
//!
//! Provides the foundation for InitContext and ComputeContext with common
//! node-centric operations like setting node values, accessing neighbors, etc.

use super::PregelContext;
use crate::pregel::node_value::NodeValue;
use crate::pregel::PregelConfig;
use crate::types::graph::Graph;
use std::collections::HashSet;
use std::sync::Arc;

/// Base context class providing node-centric access to the graph.
///
/// This serves as the foundation for `InitContext` and `ComputeContext`,
/// providing common operations that work on a per-node basis.
pub struct NodeCentricContext<C: PregelConfig> {
    base: PregelContext<C>,
    node_id: u64,
    node_value: Arc<parking_lot::RwLock<NodeValue>>,
}

impl<C: PregelConfig> NodeCentricContext<C> {
    /// Create a new node-centric context.
    pub fn new(
        graph: Arc<dyn Graph>,
        config: C,
        node_value: Arc<parking_lot::RwLock<NodeValue>>,
    ) -> Self {
        Self {
            base: PregelContext::new(config, graph),
            node_id: 0,
            node_value,
        }
    }

    /// Get the graph backing this context.
    pub fn graph(&self) -> &Arc<dyn Graph> {
        self.base.graph()
    }

    /// Get the configuration.
    pub fn config(&self) -> &C {
        self.base.config()
    }

    /// Set the node ID for this context.
    ///
    /// Called by the framework before each init() or compute() invocation
    /// to indicate which node is being processed.
    pub fn set_node_id(&mut self, node_id: u64) {
        self.node_id = node_id;
    }

    /// Get the node ID currently being processed.
    pub fn node_id(&self) -> u64 {
        self.node_id
    }

    /// Get the number of nodes in the graph.
    pub fn node_count(&self) -> u64 {
        self.base.node_count()
    }

    /// Check if a node exists in the graph.
    pub fn node_exists(&self, node_id: u64) -> bool {
        node_id < self.node_count()
    }

    /// Set a double node value for the given property key.
    pub fn set_node_value(&mut self, key: &str, value: f64) {
        self.node_value.write().set(key, self.node_id as usize, value);
    }

    /// Set a long node value for the given property key.
    pub fn set_node_value_long(&mut self, key: &str, value: i64) {
        self.node_value
            .write()
            .set_long(key, self.node_id as usize, value);
    }

    /// Set a long array node value for the given property key.
    pub fn set_node_value_long_array(&mut self, key: &str, value: Vec<i64>) {
        self.node_value
            .write()
            .set_long_array(key, self.node_id as usize, value);
    }

    /// Set a double array node value for the given property key.
    pub fn set_node_value_double_array(&mut self, key: &str, value: Vec<f64>) {
        self.node_value
            .write()
            .set_double_array(key, self.node_id as usize, value);
    }

    /// Read a double node value for the given property key.
    pub fn double_node_value(&self, key: &str) -> f64 {
        self.node_value.read().double_value(key, self.node_id as usize)
    }

    /// Read a long node value for the given property key.
    pub fn long_node_value(&self, key: &str) -> i64 {
        self.node_value.read().long_value(key, self.node_id as usize)
    }

    /// Get the degree (number of outgoing relationships) of the current node.
    pub fn degree(&self) -> usize {
        self.base.graph().degree(self.node_id)
    }

    /// Convert internal node ID to original graph node ID.
    pub fn to_original_id(&self, internal_node_id: u64) -> u64 {
        self.base
            .graph()
            .to_original_node_id(internal_node_id)
            .map(|id| id as u64)
            .unwrap_or(internal_node_id)
    }

    /// Convert original graph node ID to internal node ID.
    pub fn to_internal_id(&self, original_node_id: u64) -> u64 {
        self.base
            .graph()
            .to_mapped_node_id(original_node_id as i64)
            .unwrap_or(original_node_id)
    }

    /// Iterate over neighbors of the current node.
    pub fn for_each_neighbor<F>(&self, mut consumer: F)
    where
        F: FnMut(u64),
    {
        self.base
            .graph()
            .for_each_relationship(self.node_id, &mut |_source, target| {
                consumer(target);
                true
            });
    }

    /// Iterate over distinct neighbors (each neighbor only once).
    pub fn for_each_distinct_neighbor<F>(&self, mut consumer: F)
    where
        F: FnMut(u64),
    {
        let mut seen = HashSet::new();
        self.for_each_neighbor(|neighbor| {
            if seen.insert(neighbor) {
                consumer(neighbor);
            }
        });
    }
}

/// Trait for bidirectional context operations.
///
/// Provides access to incoming edges in addition to outgoing edges.
/// This is only available when using `BidirectionalPregelComputation`.
pub trait BidirectionalNodeCentricContext {
    /// Get the incoming degree (number of incoming relationships) of the current node.
    fn incoming_degree(&self) -> usize {
        0
    }

    /// Iterate over incoming neighbors of the current node.
    fn for_each_incoming_neighbor<F>(&self, _consumer: F)
    where
        F: FnMut(u64),
    {
    }

    /// Iterate over distinct incoming neighbors (each neighbor only once).
    fn for_each_distinct_incoming_neighbor<F>(&self, _consumer: F)
    where
        F: FnMut(u64),
    {
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concurrency::Concurrency;
    use super::super::pregel_context::test_support::triangle_graph;
    use crate::pregel::schema::{PregelSchema, Visibility};
    use crate::types::value_type::ValueType;

    struct TestConfig;
    impl PregelConfig for TestConfig {
        fn max_iterations(&self) -> usize {
            10
        }

        fn concurrency(&self) -> Concurrency {
            Concurrency::single_threaded()
        }
    }

    fn node_value_storage() -> Arc<parking_lot::RwLock<NodeValue>> {
        let schema = PregelSchema::builder()
            .add("rank", ValueType::Double, Visibility::Public)
            .build();
        Arc::new(parking_lot::RwLock::new(NodeValue::of(
            &schema,
            3,
            Concurrency::single_threaded(),
        )))
    }

    #[test]
    fn test_node_centric_context_creation() {
        let ctx: NodeCentricContext<TestConfig> =
            NodeCentricContext::new(triangle_graph(), TestConfig, node_value_storage());
        assert_eq!(ctx.node_id(), 0);
    }

    #[test]
    fn test_set_node_id() {
        let mut ctx: NodeCentricContext<TestConfig> =
            NodeCentricContext::new(triangle_graph(), TestConfig, node_value_storage());
        ctx.set_node_id(2);
        assert_eq!(ctx.node_id(), 2);
    }

    #[test]
    fn test_degree_and_neighbors() {
        let mut ctx: NodeCentricContext<TestConfig> =
            NodeCentricContext::new(triangle_graph(), TestConfig, node_value_storage());
        ctx.set_node_id(0);
        assert_eq!(ctx.degree(), 2);

        let mut neighbors = Vec::new();
        ctx.for_each_neighbor(|n| neighbors.push(n));
        neighbors.sort_unstable();
        assert_eq!(neighbors, vec![1, 2]);
    }

    #[test]
    fn test_set_and_read_node_value() {
        let mut ctx: NodeCentricContext<TestConfig> =
            NodeCentricContext::new(triangle_graph(), TestConfig, node_value_storage());
        ctx.set_node_id(1);
        ctx.set_node_value("rank", 0.42);
        assert_eq!(ctx.double_node_value("rank"), 0.42);
    }

    #[test]
    fn test_id_translation_is_identity_for_simple_id_map() {
        let ctx: NodeCentricContext<TestConfig> =
            NodeCentricContext::new(triangle_graph(), TestConfig, node_value_storage());
        assert_eq!(ctx.to_original_id(1), 1);
        assert_eq!(ctx.to_internal_id(1), 1);
    }
}
