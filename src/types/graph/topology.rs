use crate::types::id_map::MappedNodeId;

/// Compressed-sparse-row adjacency: `offsets[v]..offsets[v+1]` indexes the
/// slice of `neighbors` holding `v`'s targets. `offsets` has `node_count + 1`
/// entries, is non-decreasing, starts at 0, and ends at `neighbors.len()`.
#[derive(Debug, Clone)]
struct CsrAdjacency {
    offsets: Vec<u64>,
    neighbors: Vec<MappedNodeId>,
}

impl CsrAdjacency {
    fn from_rows(rows: Vec<Vec<MappedNodeId>>) -> Self {
        let mut offsets = Vec::with_capacity(rows.len() + 1);
        let mut neighbors = Vec::with_capacity(rows.iter().map(Vec::len).sum());
        offsets.push(0u64);
        for row in rows {
            neighbors.extend(row);
            offsets.push(neighbors.len() as u64);
        }
        Self { offsets, neighbors }
    }

    fn node_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    fn element_count(&self) -> usize {
        self.neighbors.len()
    }

    fn row(&self, node: MappedNodeId) -> Option<&[MappedNodeId]> {
        let idx = node as usize;
        if idx + 1 >= self.offsets.len() {
            return None;
        }
        let start = self.offsets[idx] as usize;
        let end = self.offsets[idx + 1] as usize;
        Some(&self.neighbors[start..end])
    }

    fn degree(&self, node: MappedNodeId) -> usize {
        self.row(node).map_or(0, <[MappedNodeId]>::len)
    }

    fn has_parallel_edges(&self) -> bool {
        (0..self.node_count()).any(|v| {
            let row = self.row(v as MappedNodeId).unwrap_or(&[]);
            let mut sorted = row.to_vec();
            sorted.sort_unstable();
            sorted.windows(2).any(|window| window[0] == window[1])
        })
    }
}

/// In-memory adjacency representation used by the default graph implementation.
///
/// Storage is true CSR (`offsets` + `neighbors`), matching the on-disk/export
/// shape: `offsets[0] = 0`, non-decreasing, `offsets[node_count] =
/// element_count`, every entry in `neighbors` is a valid mapped id.
#[derive(Debug, Clone)]
pub struct RelationshipTopology {
    outgoing: CsrAdjacency,
    incoming: Option<CsrAdjacency>,
    relationship_count: usize,
    has_parallel_edges: bool,
}

impl RelationshipTopology {
    /// Creates a new topology from per-node adjacency rows, compressing them
    /// into CSR `(offsets, neighbors)` storage.
    pub fn new(outgoing: Vec<Vec<MappedNodeId>>, incoming: Option<Vec<Vec<MappedNodeId>>>) -> Self {
        let outgoing = CsrAdjacency::from_rows(outgoing);
        let incoming = incoming.map(CsrAdjacency::from_rows);
        let relationship_count = outgoing.element_count();
        let has_parallel_edges = outgoing.has_parallel_edges();

        Self {
            outgoing,
            incoming,
            relationship_count,
            has_parallel_edges,
        }
    }

    /// Creates a topology directly from already-compressed CSR arrays.
    ///
    /// # Panics
    ///
    /// Panics if `offsets` is empty, doesn't start at 0, isn't
    /// non-decreasing, or doesn't end at `neighbors.len()`.
    pub fn from_csr(
        offsets: Vec<u64>,
        neighbors: Vec<MappedNodeId>,
        incoming: Option<(Vec<u64>, Vec<MappedNodeId>)>,
    ) -> Self {
        assert!(!offsets.is_empty(), "offsets must have at least one entry");
        assert_eq!(offsets[0], 0, "offsets[0] must be 0");
        assert!(
            offsets.windows(2).all(|w| w[0] <= w[1]),
            "offsets must be non-decreasing"
        );
        assert_eq!(
            *offsets.last().unwrap(),
            neighbors.len() as u64,
            "offsets[N] must equal element_count"
        );

        let outgoing = CsrAdjacency { offsets, neighbors };
        let incoming = incoming.map(|(offsets, neighbors)| CsrAdjacency { offsets, neighbors });
        let relationship_count = outgoing.element_count();
        let has_parallel_edges = outgoing.has_parallel_edges();

        Self {
            outgoing,
            incoming,
            relationship_count,
            has_parallel_edges,
        }
    }

    /// Returns the number of relationships encoded in this topology.
    pub fn relationship_count(&self) -> usize {
        self.relationship_count
    }

    /// Returns true when this topology may contain parallel edges.
    pub fn has_parallel_edges(&self) -> bool {
        self.has_parallel_edges
    }

    /// Returns the outgoing adjacency for the given node, if available.
    pub fn outgoing(&self, node: MappedNodeId) -> Option<&[MappedNodeId]> {
        self.outgoing.row(node)
    }

    /// Returns the incoming adjacency for the given node when an inverse index exists.
    pub fn incoming(&self, node: MappedNodeId) -> Option<&[MappedNodeId]> {
        self.incoming.as_ref().and_then(|csr| csr.row(node))
    }

    /// Returns `offsets[v+1] - offsets[v]` for the outgoing adjacency.
    pub fn degree(&self, node: MappedNodeId) -> usize {
        self.outgoing.degree(node)
    }

    /// Returns `offsets[v+1] - offsets[v]` for the incoming adjacency, or 0
    /// when no inverse index exists.
    pub fn degree_inverse(&self, node: MappedNodeId) -> usize {
        self.incoming.as_ref().map_or(0, |csr| csr.degree(node))
    }

    /// Returns the raw CSR offsets array for the outgoing adjacency.
    pub fn offsets(&self) -> &[u64] {
        &self.outgoing.offsets
    }

    /// Returns the raw CSR neighbors array for the outgoing adjacency.
    pub fn neighbors(&self) -> &[MappedNodeId] {
        &self.outgoing.neighbors
    }

    /// Returns true when an inverse index is available.
    pub fn is_inverse_indexed(&self) -> bool {
        self.incoming.is_some()
    }

    /// Returns the total number of nodes tracked by this topology.
    pub fn node_capacity(&self) -> usize {
        self.outgoing.node_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_parallel_edges() {
        let topology = RelationshipTopology::new(vec![vec![1, 1], vec![]], None);
        assert!(topology.has_parallel_edges());
    }

    #[test]
    fn counts_relationships() {
        let topology = RelationshipTopology::new(vec![vec![1, 2], vec![0]], None);
        assert_eq!(topology.relationship_count(), 3);
    }

    #[test]
    fn offsets_are_well_formed() {
        let topology = RelationshipTopology::new(vec![vec![1, 2], vec![0], vec![]], None);
        let offsets = topology.offsets();

        assert_eq!(offsets[0], 0);
        assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*offsets.last().unwrap(), topology.relationship_count() as u64);
    }

    #[test]
    fn degree_matches_offset_delta() {
        let topology = RelationshipTopology::new(vec![vec![1, 2], vec![0], vec![]], None);

        assert_eq!(topology.degree(0), 2);
        assert_eq!(topology.degree(1), 1);
        assert_eq!(topology.degree(2), 0);
    }

    #[test]
    fn neighbors_are_contiguous_per_row() {
        let topology = RelationshipTopology::new(vec![vec![1, 2], vec![0]], None);
        assert_eq!(topology.outgoing(0), Some(&[1, 2][..]));
        assert_eq!(topology.outgoing(1), Some(&[0][..]));
    }

    #[test]
    fn from_csr_validates_offsets() {
        let topology = RelationshipTopology::from_csr(vec![0, 2, 3], vec![1, 2, 0], None);
        assert_eq!(topology.relationship_count(), 3);
        assert_eq!(topology.degree(0), 2);
    }

    #[test]
    #[should_panic(expected = "offsets[0] must be 0")]
    fn from_csr_rejects_nonzero_start() {
        RelationshipTopology::from_csr(vec![1, 2], vec![0], None);
    }

    #[test]
    fn inverse_degree_defaults_to_zero_without_index() {
        let topology = RelationshipTopology::new(vec![vec![1]], None);
        assert_eq!(topology.degree_inverse(0), 0);
    }
}
