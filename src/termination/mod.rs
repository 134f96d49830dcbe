//! Termination system for graceful cancellation of long-running algorithms.
//!
//! Provides a lightweight mechanism that lets algorithms check for cancellation
//! requests and stop gracefully: a [`TerminationMonitor`] trait supplies the
//! yes/no signal, [`TerminationFlag`] wraps it with throttled checking, and
//! [`TerminatedException`] is the error raised when a check fails.

mod termination_exception;
mod termination_flag;
mod termination_monitor;

pub use termination_exception::*;
pub use termination_flag::*;
pub use termination_monitor::*;

/// Number of nodes to process before checking termination status.
pub const RUN_CHECK_NODE_COUNT: usize = 10_000;
