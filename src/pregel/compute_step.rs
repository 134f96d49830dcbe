//! ForkJoinComputeStep - Fork-join work-stealing task for Pregel computation
//!
//! A compute step processes a batch of nodes in a Pregel computation using
//! fork-join parallelism (via Rayon). This is a concrete implementation that
//! subdivides work recursively for parallel execution.
//!
//! Corresponds to Java's ForkJoinComputeStep and TypeScript's ForkJoinComputeStep.

use crate::collections::HugeAtomicBitSet;
use crate::core::utils::progress::tasks::LeafTask;
use crate::pregel::{
    ComputeContext, InitContext, MasterComputeContext, MessageIterator, Messages, Messenger,
    NodeValue, Partition, PregelConfig,
};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Threshold for sequential vs parallel execution.
/// Batches smaller than this are processed sequentially.
const SEQUENTIAL_THRESHOLD: usize = 1000;

/// Function type for initialization logic.
///
/// Called once per node before the first superstep.
pub type InitFn<C> = Arc<dyn Fn(&mut InitContext<C>) + Send + Sync>;

/// Function type for computation logic.
///
/// Called for each active node in every superstep.
pub type ComputeFn<C, I> = Arc<dyn Fn(&mut ComputeContext<C, I>, &mut Messages<I>) + Send + Sync>;

/// Function type for the per-superstep master compute step.
///
/// Called once, single-threaded, after every superstep. Returning `true`
/// signals the computation to stop even if nodes have not all voted to halt.
pub type MasterComputeFn<C> = Arc<dyn Fn(&mut MasterComputeContext<C>) -> bool + Send + Sync>;

/// A fork-join compute step that processes a batch of nodes in a Pregel computation.
///
/// This struct encapsulates all the state needed to process a partition of nodes
/// using fork-join parallelism. When a batch is larger than the sequential threshold,
/// it subdivides recursively and uses Rayon for parallel execution.
///
/// This corresponds to Java's `ForkJoinComputeStep` which extends `CountedCompleter`.
/// In Rust, we use Rayon's work-stealing instead of manually implementing the task tree.
///
/// # Type Parameters
///
/// * `C` - The Pregel configuration type
/// * `I` - The message iterator type
///
/// # Example
///
/// ```ignore
/// use gds_core::pregel::ForkJoinComputeStep;
///
/// let step = ForkJoinComputeStep::new(
///     init_fn,
///     compute_fn,
///     partition,
///     node_value,
///     messenger,
///     vote_bits,
///     iteration,
///     has_sent_message,
///     progress_tracker,
/// );
///
/// // Process the batch (may subdivide for parallelism)
/// step.compute();
/// ```
pub struct ForkJoinComputeStep<C: PregelConfig, I: MessageIterator> {
    /// Initialization function
    init_fn: InitFn<C>,

    /// Compute function
    compute_fn: ComputeFn<C, I>,

    /// The batch of nodes to process
    node_batch: Partition,

    /// Node value storage (wrapped in RwLock for contexts to write)
    node_value: Arc<parking_lot::RwLock<NodeValue>>,

    /// Graph topology (for contexts to query)
    graph: Arc<dyn crate::types::graph::Graph>,

    /// Messenger for sending/receiving messages
    messenger: Arc<dyn Messenger<I>>,

    /// Vote tracking bitset
    vote_bits: Arc<HugeAtomicBitSet>,

    /// Current iteration number
    iteration: usize,

    /// Current node ID being processed
    /// (Reserved for future use - tracking active node in context)
    #[allow(dead_code)]
    current_node_id: u64,

    /// Flag indicating if any message has been sent
    has_sent_message: Arc<AtomicBool>,

    /// Progress task (optional)
    progress_task: Option<Arc<LeafTask>>,

    /// Compute context (one per step)
    compute_context: ComputeContext<C, I>,

    /// Configuration (needed to create new contexts for child tasks)
    config: C,
}

impl<C: PregelConfig + Clone, I: MessageIterator> ForkJoinComputeStep<C, I> {
    /// Create a new fork-join compute step.
    ///
    /// # Arguments
    ///
    /// * `init_fn` - Function to initialize nodes
    /// * `compute_fn` - Function to compute node values
    /// * `config` - Pregel configuration
    /// * `graph` - Graph topology
    /// * `node_batch` - Partition of nodes to process
    /// * `node_value` - Node value storage (wrapped in RwLock)
    /// * `messenger` - Message passing system
    /// * `vote_bits` - Vote-to-halt tracking
    /// * `iteration` - Current iteration number
    /// * `has_sent_message` - Shared flag for message tracking
    /// * `progress_tracker` - Progress tracking
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        init_fn: InitFn<C>,
        compute_fn: ComputeFn<C, I>,
        config: C,
        graph: Arc<dyn crate::types::graph::Graph>,
        node_batch: Partition,
        node_value: Arc<parking_lot::RwLock<NodeValue>>,
        messenger: Arc<dyn Messenger<I>>,
        vote_bits: Arc<HugeAtomicBitSet>,
        iteration: usize,
        has_sent_message: Arc<AtomicBool>,
        progress_task: Option<Arc<LeafTask>>,
    ) -> Self
    where
        C: Clone,
    {
        let compute_context = ComputeContext::new(
            Arc::clone(&graph),
            config.clone(),
            Arc::clone(&node_value),
            iteration,
            Arc::clone(&messenger),
            Arc::clone(&vote_bits),
            Arc::clone(&has_sent_message),
        );

        Self {
            init_fn,
            compute_fn,
            node_batch,
            node_value,
            graph,
            messenger,
            vote_bits,
            iteration,
            current_node_id: 0,
            has_sent_message,
            progress_task,
            compute_context,
            config,
        }
    }

    /// Get the batch of nodes to process.
    pub fn node_batch(&self) -> &Partition {
        &self.node_batch
    }

    /// Get the vote bits.
    pub fn vote_bits(&self) -> &HugeAtomicBitSet {
        &self.vote_bits
    }

    /// Get the messenger.
    pub fn messenger(&self) -> &dyn Messenger<I> {
        self.messenger.as_ref()
    }

    /// Get the progress task (if present).
    pub fn progress_task(&self) -> Option<&Arc<LeafTask>> {
        self.progress_task.as_ref()
    }

    /// Compute this batch, potentially subdividing for parallel execution.
    ///
    /// If the batch is larger than `SEQUENTIAL_THRESHOLD`, it will be split
    /// into two sub-batches that can be processed in parallel.
    pub fn compute(mut self) {
        if self.node_batch.node_count() >= SEQUENTIAL_THRESHOLD {
            // Split the batch for parallel processing
            let (left_batch, right_batch) = self.split_batch();

            // Create left subtask
            let left_step = ForkJoinComputeStep {
                init_fn: Arc::clone(&self.init_fn),
                compute_fn: Arc::clone(&self.compute_fn),
                node_batch: left_batch,
                node_value: Arc::clone(&self.node_value),
                graph: Arc::clone(&self.graph),
                messenger: Arc::clone(&self.messenger),
                vote_bits: Arc::clone(&self.vote_bits),
                iteration: self.iteration,
                current_node_id: 0,
                has_sent_message: Arc::clone(&self.has_sent_message),
                progress_task: self.progress_task.clone(),
                compute_context: ComputeContext::new(
                    Arc::clone(&self.graph),
                    self.config.clone(),
                    Arc::clone(&self.node_value),
                    self.iteration,
                    Arc::clone(&self.messenger),
                    Arc::clone(&self.vote_bits),
                    Arc::clone(&self.has_sent_message),
                ),
                config: self.config.clone(),
            };

            // Update this task to handle right batch
            self.node_batch = right_batch; // Process both halves (Rayon will handle parallelism)
            rayon::join(|| left_step.compute(), || self.compute());
        } else {
            // Base case - process sequentially
            self.compute_batch();

            // Update sent message flag (TODO: implement has_sent_message in ComputeContext)
            // if self.compute_context.has_sent_message() {
            //     self.has_sent_message.store(true, Ordering::Relaxed);
            // }
        }
    }

    /// Split this batch into two sub-batches.
    fn split_batch(&self) -> (Partition, Partition) {
        let start_node = self.node_batch.start_node();
        let batch_size = self.node_batch.node_count();
        let is_even = batch_size % 2 == 0;

        // Calculate pivot point
        let pivot = if batch_size % 2 == 0 {
            batch_size / 2
        } else {
            (batch_size / 2) + 1
        };

        // Create left and right partitions
        let left_batch = Partition::new(start_node, pivot);

        let right_size = if is_even { pivot } else { pivot - 1 };
        let right_batch = Partition::new(start_node + pivot, right_size);

        (left_batch, right_batch)
    }

    /// Process the batch of nodes sequentially.
    ///
    /// This is the core computation logic that:
    /// 1. Initializes nodes (if first superstep)
    /// 2. Retrieves messages for each node
    /// 3. Invokes the compute function
    /// 4. Tracks progress
    fn compute_batch(&mut self) {
        let is_initial_superstep = self.compute_context.is_initial_superstep();

        self.node_batch.consume(|node_id_usize| {
            // Convert usize node_id from Partition to u64 for contexts
            let node_id = node_id_usize as u64;

            // Initialize on first superstep
            if is_initial_superstep {
                let mut init_ctx = InitContext::new(
                    Arc::clone(&self.graph),
                    self.config.clone(),
                    Arc::clone(&self.node_value),
                );
                init_ctx.set_node_id(node_id);
                (self.init_fn)(&mut init_ctx);
            }

            // Get messages for this node
            let mut message_iterator = self.messenger.message_iterator();
            self.messenger.init_message_iterator(
                &mut message_iterator,
                node_id,
                is_initial_superstep,
            );
            let mut messages = Messages::new(message_iterator);

            // Only compute if node has messages or hasn't voted to halt
            if !messages.is_empty() || !self.vote_bits.get(node_id_usize) {
                // Clear vote bit - node is active
                self.vote_bits.clear_bit(node_id_usize);

                // Set up compute context
                self.compute_context.set_node_id(node_id);

                // Invoke user's compute function
                (self.compute_fn)(&mut self.compute_context, &mut messages);
            }
        });

        // Log progress for entire batch
        if let Some(task) = &self.progress_task {
            let batch_size = self.node_batch.node_count();
            task.log_progress(batch_size);
        }
    }
}
