pub mod concurrency_level;

pub use concurrency_level::{Concurrency, ConcurrencyError};
