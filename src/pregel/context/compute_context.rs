//! ComputeContext - API for vertex computation phase
//!
//! Provides the complete API for vertices to interact with the Pregel framework
//! during the compute phase of each superstep.

use crate::collections::HugeAtomicBitSet;
use crate::pregel::node_value::NodeValue;
use crate::pregel::{MessageIterator, Messenger, PregelConfig};
use crate::types::graph::Graph;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Context provided to vertices during the compute phase.
///
/// The `ComputeContext` gives vertices the full Pregel API:
/// - Read/write node values
/// - Send messages to other nodes
/// - Vote to halt
/// - Access superstep number
/// - Query node degree and neighbors
///
/// # Message Sending
///
/// Vertices can send messages to:
/// - All neighbors: `send_to_neighbors(msg)`
/// - A specific node: `send_to(node_id, msg)`
///
/// Messages sent in superstep N are delivered in superstep N+1.
///
/// # Voting to Halt
///
/// A vertex can vote to halt by calling `vote_to_halt()`. Once halted:
/// - No more `compute()` calls until a message is received
/// - Receiving a message reactivates the vertex
/// - Computation ends when all vertices halt with no messages in flight
pub struct ComputeContext<C: PregelConfig, I: MessageIterator> {
    base: super::NodeCentricContext<C>,
    iteration: usize,
    messenger: Arc<dyn Messenger<I>>,
    vote_bits: Arc<HugeAtomicBitSet>,
    has_sent_message: Arc<AtomicBool>,
}

impl<C: PregelConfig, I: MessageIterator> ComputeContext<C, I> {
    /// Create a new compute context.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        graph: Arc<dyn Graph>,
        config: C,
        node_value: Arc<parking_lot::RwLock<NodeValue>>,
        iteration: usize,
        messenger: Arc<dyn Messenger<I>>,
        vote_bits: Arc<HugeAtomicBitSet>,
        has_sent_message: Arc<AtomicBool>,
    ) -> Self {
        Self {
            base: super::NodeCentricContext::new(graph, config, node_value),
            iteration,
            messenger,
            vote_bits,
            has_sent_message,
        }
    }

    /// Set the node ID for this context.
    pub fn set_node_id(&mut self, node_id: u64) {
        self.base.set_node_id(node_id);
    }

    /// Get the node ID currently being processed.
    pub fn node_id(&self) -> u64 {
        self.base.node_id()
    }

    /// Get the current superstep number (0-indexed).
    pub fn superstep(&self) -> usize {
        self.iteration
    }

    /// Returns true if this is the initial superstep (superstep 0).
    pub fn is_initial_superstep(&self) -> bool {
        self.superstep() == 0
    }

    /// Get the total number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.base.node_count() as usize
    }

    /// Get the current node's double value for the given property key.
    pub fn double_node_value(&self, key: &str) -> f64 {
        self.base.double_node_value(key)
    }

    /// Get the current node's long value for the given property key.
    pub fn long_node_value(&self, key: &str) -> i64 {
        self.base.long_node_value(key)
    }

    /// Set the current node's double value for the given property key.
    pub fn set_node_value(&mut self, key: &str, value: f64) {
        self.base.set_node_value(key, value);
    }

    /// Set the current node's long value for the given property key.
    pub fn set_node_value_long(&mut self, key: &str, value: i64) {
        self.base.set_node_value_long(key, value);
    }

    /// Get the out-degree of the current node.
    pub fn degree(&self) -> usize {
        self.base.degree()
    }

    /// Send a message to all neighbors of the current node.
    pub fn send_to_neighbors(&mut self, message: f64) {
        let source = self.base.node_id();
        let messenger = Arc::clone(&self.messenger);
        let has_sent_message = Arc::clone(&self.has_sent_message);
        let graph = Arc::clone(self.base.graph());

        graph.for_each_relationship(source, &mut |_source, target| {
            messenger.send_to(source, target, message);
            has_sent_message.store(true, Ordering::Relaxed);
            true
        });
    }

    /// Send a message to a specific node.
    pub fn send_to(&mut self, target: u64, message: f64) {
        let source = self.base.node_id();
        self.messenger.send_to(source, target, message);
        self.has_sent_message.store(true, Ordering::Relaxed);
    }

    /// Vote to halt this node.
    ///
    /// The node will not receive further compute() calls unless it receives
    /// a message, which will reactivate it.
    pub fn vote_to_halt(&mut self) {
        self.vote_bits.set(self.base.node_id() as usize);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concurrency::Concurrency;
    use crate::pregel::context::pregel_context::test_support::triangle_graph;
    use crate::pregel::messengers::{SyncQueueMessageIterator, SyncQueueMessenger};
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

    fn context() -> ComputeContext<TestConfig, SyncQueueMessageIterator> {
        let messenger: Arc<dyn Messenger<SyncQueueMessageIterator>> =
            Arc::new(SyncQueueMessenger::new(3));
        ComputeContext::new(
            triangle_graph(),
            TestConfig,
            node_value_storage(),
            0,
            messenger,
            Arc::new(HugeAtomicBitSet::new(3)),
            Arc::new(AtomicBool::new(false)),
        )
    }

    #[test]
    fn test_initial_superstep() {
        let ctx = context();
        assert!(ctx.is_initial_superstep());
        assert_eq!(ctx.node_count(), 3);
    }

    #[test]
    fn test_send_to_neighbors_reaches_every_outgoing_edge() {
        let mut ctx = context();
        ctx.set_node_id(0);
        ctx.send_to_neighbors(7.0);
        assert!(ctx.has_sent_message.load(Ordering::Relaxed));
    }

    #[test]
    fn test_vote_to_halt_sets_vote_bit() {
        let mut ctx = context();
        ctx.set_node_id(1);
        ctx.vote_to_halt();
        assert!(ctx.vote_bits.get(1));
    }

    #[test]
    fn test_set_and_read_node_value() {
        let mut ctx = context();
        ctx.set_node_id(2);
        ctx.set_node_value("rank", 3.0);
        assert_eq!(ctx.double_node_value("rank"), 3.0);
    }
}
