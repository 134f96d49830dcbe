//! Small cross-cutting utilities: feature toggles, logging, exception handling, and
//! thread-local helpers.

pub mod checked;
pub mod exception_util;
pub mod feature_toggles;
pub mod log;
pub mod thread_local;

pub use checked::{
    checked_consumer, checked_function, checked_runnable, checked_supplier, CheckedConsumer,
    CheckedFunction, CheckedRunnable, CheckedSupplier,
};
pub use exception_util::{AutoCloseable, ExceptionUtil};
pub use feature_toggles::{AdjacencyPackingStrategy, FeatureConfig, FeatureToggle};
pub use log::{ConsoleLog, Log, NoOpLog, PrefixedLog};
pub use thread_local::{AutoCloseableThreadLocal, CloseableThreadLocal};
