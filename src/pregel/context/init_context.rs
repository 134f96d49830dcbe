//! InitContext - API for vertex initialization phase
//!
//! Provides access to node properties and configuration during the init() phase.

use crate::pregel::node_value::NodeValue;
use crate::pregel::{DefaultValue, PregelConfig};
use crate::types::graph::Graph;
use std::sync::Arc;

/// Context provided to vertices during the initialization phase.
///
/// The `InitContext` gives vertices access to:
/// - Node properties from the input graph
/// - Algorithm configuration
/// - API to set initial node values
///
/// # Lifecycle
///
/// - Created once per vertex before the first superstep
/// - Used only during the `PregelComputation::init()` call
/// - Provides read-only access to input graph properties
pub struct InitContext<C: PregelConfig> {
    base: super::NodeCentricContext<C>,
}

impl<C: PregelConfig> InitContext<C> {
    /// Create a new initialization context.
    pub fn new(
        graph: Arc<dyn Graph>,
        config: C,
        node_value: Arc<parking_lot::RwLock<NodeValue>>,
    ) -> Self {
        Self {
            base: super::NodeCentricContext::new(graph, config, node_value),
        }
    }

    /// Set the node ID for this context.
    ///
    /// Delegates to the base NodeCentricContext.
    pub fn set_node_id(&mut self, node_id: u64) {
        self.base.set_node_id(node_id);
    }

    /// Get the node ID currently being processed.
    pub fn node_id(&self) -> u64 {
        self.base.node_id()
    }

    /// Get the total number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.base.node_count() as usize
    }

    /// Set a double node value for the given property key.
    pub fn set_node_value(&mut self, key: &str, value: f64) {
        self.base.set_node_value(key, value);
    }

    /// Set a long node value for the given property key.
    pub fn set_node_value_long(&mut self, key: &str, value: i64) {
        self.base.set_node_value_long(key, value);
    }

    /// Get the out-degree of the current node.
    pub fn degree(&self) -> usize {
        self.base.degree()
    }

    /// Get a node property by name, converted to a double for the current node.
    ///
    /// Returns `None` if the graph has no such property, or if its value
    /// type cannot be converted to a plain double.
    pub fn node_property(&self, key: &str) -> Option<f64> {
        let property_values = self.base.graph().node_properties(key)?;
        match DefaultValue::from_property(property_values.as_ref(), self.node_id())? {
            DefaultValue::Double(v) => Some(v),
            DefaultValue::Long(v) => Some(v as f64),
            _ => None,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &C {
        self.base.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concurrency::Concurrency;
    use crate::pregel::context::pregel_context::test_support::triangle_graph;
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
    fn test_set_node_id_and_value() {
        let mut ctx = InitContext::new(triangle_graph(), TestConfig, node_value_storage());
        ctx.set_node_id(1);
        assert_eq!(ctx.node_id(), 1);
        ctx.set_node_value("rank", 1.5);
    }

    #[test]
    fn test_node_count_and_degree() {
        let mut ctx = InitContext::new(triangle_graph(), TestConfig, node_value_storage());
        assert_eq!(ctx.node_count(), 3);
        ctx.set_node_id(0);
        assert_eq!(ctx.degree(), 2);
    }

    #[test]
    fn test_node_property_missing_returns_none() {
        let ctx = InitContext::new(triangle_graph(), TestConfig, node_value_storage());
        assert_eq!(ctx.node_property("seed_value"), None);
    }
}
