//! MasterComputeContext - API for global coordination between supersteps
//!
//! Provides the master compute API for algorithm-level coordination.

use crate::pregel::{NodeValue, PregelConfig, ProgressTracker};
use crate::types::graph::Graph;
use std::sync::Arc;

/// Context for the master compute step.
///
/// The `MasterComputeContext` runs once per superstep (not per vertex) and provides:
/// - Global statistics and convergence checking
/// - Access to aggregated values across all vertices
/// - Ability to signal early termination
///
/// # Master Compute Phase
///
/// Unlike regular compute() which runs per-node, masterCompute() runs once after
/// each superstep completes. It's useful for:
/// - Checking convergence criteria
/// - Gathering global statistics
/// - Deciding whether to terminate early
/// - Logging progress
pub struct MasterComputeContext<C: PregelConfig> {
    config: C,
    graph: Arc<dyn Graph>,
    iteration: usize,
    node_values: Arc<parking_lot::RwLock<NodeValue>>,
    progress_tracker: Arc<ProgressTracker>,
}

impl<C: PregelConfig> MasterComputeContext<C> {
    /// Create a new MasterComputeContext.
    pub fn new(
        config: C,
        graph: Arc<dyn Graph>,
        iteration: usize,
        node_values: Arc<parking_lot::RwLock<NodeValue>>,
        progress_tracker: Arc<ProgressTracker>,
    ) -> Self {
        Self {
            config,
            graph,
            iteration,
            node_values,
            progress_tracker,
        }
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
        self.graph.node_count()
    }

    /// Get the total number of relationships in the graph.
    pub fn relationship_count(&self) -> usize {
        self.graph.relationship_count()
    }

    /// Get the configuration.
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Read a node's double value for the given schema key.
    pub fn double_node_value(&self, node_id: usize, key: &str) -> f64 {
        self.node_values.read().double_value(key, node_id)
    }

    /// Read a node's long value for the given schema key.
    pub fn long_node_value(&self, node_id: usize, key: &str) -> i64 {
        self.node_values.read().long_value(key, node_id)
    }

    /// Log a progress message for the current superstep.
    pub fn log_progress(&self, message: &str) {
        self.progress_tracker.log_progress(self.iteration, message);
    }

    /// Iterate over all nodes with a consumer function.
    ///
    /// The consumer receives one node ID at a time and returns true to continue
    /// or false to stop iteration.
    pub fn for_each_node<F>(&self, mut consumer: F)
    where
        F: FnMut(usize) -> bool,
    {
        for node_id in 0..self.node_count() {
            if !consumer(node_id) {
                break;
            }
        }
    }
}
