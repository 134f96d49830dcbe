/// Graph Dimensions trait - defines the interface for graph dimensions
pub trait GraphDimensions {
    fn node_count(&self) -> u64;
    fn relationship_count(&self) -> u64;
    fn rel_count_upper_bound(&self) -> u64;
}

/// Graph Dimensions implementation - placeholder for graph dimensions
pub struct GraphDimensionsImpl;

impl GraphDimensions for GraphDimensionsImpl {
    fn node_count(&self) -> u64 {
        0
    }

    fn relationship_count(&self) -> u64 {
        0
    }

    fn rel_count_upper_bound(&self) -> u64 {
        0
    }
}

impl GraphDimensionsImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GraphDimensionsImpl {
    fn default() -> Self {
        Self::new()
    }
}

/// Concrete Graph Dimensions - placeholder for concrete graph dimensions
pub struct ConcreteGraphDimensions {
    pub node_count: u64,
    pub relationship_count: usize,
}

impl GraphDimensions for ConcreteGraphDimensions {
    fn node_count(&self) -> u64 {
        self.node_count
    }

    fn relationship_count(&self) -> u64 {
        self.relationship_count as u64
    }

    fn rel_count_upper_bound(&self) -> u64 {
        self.relationship_count as u64
    }
}

impl ConcreteGraphDimensions {
    pub fn new(node_count: u64, relationship_count: usize) -> Self {
        Self {
            node_count,
            relationship_count,
        }
    }

    pub fn of(node_count: u64, relationship_count: usize) -> Self {
        Self::new(node_count, relationship_count)
    }
}