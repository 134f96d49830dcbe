mod adjacency_cursor;
mod adjacency_list;
mod weighted_adjacency_cursor;

pub use adjacency_cursor::{AdjacencyCursor, AdjacencyCursorExt, NOT_FOUND_TARGET};
pub use adjacency_list::{AdjacencyList, AdjacencyListExt};
pub use weighted_adjacency_cursor::{EdgeWeight, WeightedAdjacencyCursor, WeightedAdjacencyCursorExt};
