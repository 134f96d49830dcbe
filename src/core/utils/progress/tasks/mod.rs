pub mod leaf_task;

pub use leaf_task::{LeafTask, UNKNOWN_VOLUME};
