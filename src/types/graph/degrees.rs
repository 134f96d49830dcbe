use crate::types::id_map::MappedNodeId;

/// Interface for retrieving degree information about nodes in a graph.
pub trait Degrees {
    /// Returns the number of outgoing (or undirected) relationships for the node.
    fn degree(&self, node_id: MappedNodeId) -> usize;

    /// Returns the number of incoming relationships for the node.
    /// Implementations may return `None` when inverse indexing is unsupported.
    fn degree_inverse(&self, node_id: MappedNodeId) -> Option<usize>;

    /// Returns the number of relationships for `node_id` without counting parallel edges.
    fn degree_without_parallel_relationships(&self, node_id: MappedNodeId) -> usize;
}

impl<T: Degrees + ?Sized> Degrees for &T {
    fn degree(&self, node_id: MappedNodeId) -> usize {
        (**self).degree(node_id)
    }

    fn degree_inverse(&self, node_id: MappedNodeId) -> Option<usize> {
        (**self).degree_inverse(node_id)
    }

    fn degree_without_parallel_relationships(&self, node_id: MappedNodeId) -> usize {
        (**self).degree_without_parallel_relationships(node_id)
    }
}
