use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::types::schema::NodeLabel;

use super::{
    batch_node_iterable::{BatchNodeIterable, NodeIdBatch},
    id_map::{IdMap, NodeLabelConsumer},
    node_iterator::{NodeIdIterator, NodeIterator},
    partial_id_map::PartialIdMap,
    Concurrency, FilteredIdMap, MappedNodeId, OriginalNodeId,
};

/// In-memory [`IdMap`] built on top of `HashMap`s, suitable for tests and small graphs.
#[derive(Debug, Clone, Default)]
pub struct SimpleIdMap {
    forward: HashMap<OriginalNodeId, MappedNodeId>,
    reverse: Vec<OriginalNodeId>,
    labels_by_node: HashMap<MappedNodeId, HashSet<NodeLabel>>,
    available_labels: HashSet<NodeLabel>,
}

impl SimpleIdMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_original_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = OriginalNodeId>,
    {
        let mut forward = HashMap::new();
        let mut reverse = Vec::new();
        for (index, original) in ids.into_iter().enumerate() {
            let mapped = index as MappedNodeId;
            forward.insert(original, mapped);
            reverse.push(original);
        }

        Self {
            forward,
            reverse,
            ..Default::default()
        }
    }

    fn mapped_range(&self) -> std::ops::Range<MappedNodeId> {
        0..self.reverse.len() as MappedNodeId
    }
}

impl PartialIdMap for SimpleIdMap {
    fn to_mapped_node_id(&self, original_node_id: OriginalNodeId) -> Option<MappedNodeId> {
        self.forward.get(&original_node_id).copied()
    }

    fn root_node_count(&self) -> Option<usize> {
        Some(self.reverse.len())
    }
}

impl NodeIterator for SimpleIdMap {
    fn for_each_node(&self, consumer: &mut dyn super::NodeConsumer) {
        for mapped in self.mapped_range() {
            if !consumer.accept(mapped) {
                break;
            }
        }
    }

    fn iter(&self) -> NodeIdIterator<'_> {
        Box::new(self.mapped_range())
    }

    fn iter_with_labels<'a>(&'a self, labels: &'a HashSet<NodeLabel>) -> NodeIdIterator<'a> {
        if labels.is_empty() {
            return self.iter();
        }

        Box::new(self.mapped_range().filter(move |node_id| {
            self.labels_by_node
                .get(node_id)
                .map(|node_labels| labels.iter().any(|label| node_labels.contains(label)))
                .unwrap_or(false)
        }))
    }
}

impl BatchNodeIterable for SimpleIdMap {
    fn batch_iterables(&self, batch_size: usize) -> Vec<NodeIdBatch> {
        if batch_size == 0 {
            return vec![];
        }

        let mut batches = Vec::new();
        let mut start = 0u64;
        let total = self.node_count() as u64;
        while start < total {
            let remaining = total - start;
            let length = usize::min(batch_size, remaining as usize);
            batches.push(NodeIdBatch::new(start, length));
            start += length as u64;
        }
        batches
    }
}

impl IdMap for SimpleIdMap {
    fn type_id(&self) -> &str {
        "simple"
    }

    fn safe_to_mapped_node_id(&self, original_node_id: OriginalNodeId) -> Option<MappedNodeId> {
        self.to_mapped_node_id(original_node_id)
    }

    fn to_original_node_id(&self, mapped_node_id: MappedNodeId) -> Option<OriginalNodeId> {
        self.reverse.get(mapped_node_id as usize).copied()
    }

    fn to_root_node_id(&self, mapped_node_id: MappedNodeId) -> Option<MappedNodeId> {
        Some(mapped_node_id)
    }

    fn node_count(&self) -> usize {
        self.reverse.len()
    }

    fn node_count_for_label(&self, node_label: &NodeLabel) -> usize {
        self.labels_by_node
            .values()
            .filter(|labels| labels.contains(node_label))
            .count()
    }

    fn highest_original_id(&self) -> Option<OriginalNodeId> {
        self.forward.keys().copied().max()
    }

    fn node_labels(&self, mapped_node_id: MappedNodeId) -> HashSet<NodeLabel> {
        self.labels_by_node
            .get(&mapped_node_id)
            .cloned()
            .unwrap_or_default()
    }

    fn for_each_node_label(&self, mapped_node_id: MappedNodeId, consumer: &mut dyn NodeLabelConsumer) {
        if let Some(labels) = self.labels_by_node.get(&mapped_node_id) {
            for label in labels {
                if !consumer.accept(label) {
                    break;
                }
            }
        }
    }

    fn available_node_labels(&self) -> HashSet<NodeLabel> {
        self.available_labels.clone()
    }

    fn has_label(&self, mapped_node_id: MappedNodeId, label: &NodeLabel) -> bool {
        self.labels_by_node
            .get(&mapped_node_id)
            .map(|labels| labels.contains(label))
            .unwrap_or(false)
    }

    fn add_node_label(&mut self, node_label: NodeLabel) {
        self.available_labels.insert(node_label);
    }

    fn add_node_id_to_label(&mut self, node_id: MappedNodeId, node_label: NodeLabel) {
        self.available_labels.insert(node_label.clone());
        self.labels_by_node
            .entry(node_id)
            .or_default()
            .insert(node_label);
    }

    fn root_id_map(&self) -> &dyn IdMap {
        self
    }

    fn with_filtered_labels(
        &self,
        node_labels: &HashSet<NodeLabel>,
        _concurrency: Concurrency,
    ) -> Option<Box<dyn FilteredIdMap>> {
        if node_labels.is_empty() {
            return None;
        }

        let root = Arc::new(self.clone());
        let mut filtered_to_root = Vec::new();
        let mut root_to_filtered = HashMap::new();

        for root_id in self.mapped_range() {
            let keep = self
                .labels_by_node
                .get(&root_id)
                .map(|labels| node_labels.iter().any(|label| labels.contains(label)))
                .unwrap_or(false);

            if keep {
                let filtered_id = filtered_to_root.len() as MappedNodeId;
                filtered_to_root.push(root_id);
                root_to_filtered.insert(root_id, filtered_id);
            }
        }

        Some(Box::new(FilteredSimpleIdMap {
            root,
            filtered_to_root,
            root_to_filtered,
        }))
    }
}

/// Label-filtered view over a [`SimpleIdMap`], restricting its node set to those
/// carrying at least one of the requested labels and renumbering them into a
/// dense, contiguous identifier space.
#[derive(Debug, Clone)]
pub struct FilteredSimpleIdMap {
    root: Arc<SimpleIdMap>,
    /// Filtered mapped id -> root mapped id.
    filtered_to_root: Vec<MappedNodeId>,
    /// Root mapped id -> filtered mapped id.
    root_to_filtered: HashMap<MappedNodeId, MappedNodeId>,
}

impl FilteredSimpleIdMap {
    fn filtered_range(&self) -> std::ops::Range<MappedNodeId> {
        0..self.filtered_to_root.len() as MappedNodeId
    }
}

impl PartialIdMap for FilteredSimpleIdMap {
    fn to_mapped_node_id(&self, original_node_id: OriginalNodeId) -> Option<MappedNodeId> {
        let root_id = self.root.to_mapped_node_id(original_node_id)?;
        self.root_to_filtered.get(&root_id).copied()
    }

    fn root_node_count(&self) -> Option<usize> {
        self.root.root_node_count()
    }
}

impl NodeIterator for FilteredSimpleIdMap {
    fn for_each_node(&self, consumer: &mut dyn super::NodeConsumer) {
        for filtered_id in self.filtered_range() {
            if !consumer.accept(filtered_id) {
                break;
            }
        }
    }

    fn iter(&self) -> NodeIdIterator<'_> {
        Box::new(self.filtered_range())
    }

    fn iter_with_labels<'a>(&'a self, labels: &'a HashSet<NodeLabel>) -> NodeIdIterator<'a> {
        if labels.is_empty() {
            return self.iter();
        }

        Box::new(self.filtered_range().filter(move |filtered_id| {
            let root_id = self.filtered_to_root[*filtered_id as usize];
            self.root
                .labels_by_node
                .get(&root_id)
                .map(|node_labels| labels.iter().any(|label| node_labels.contains(label)))
                .unwrap_or(false)
        }))
    }
}

impl BatchNodeIterable for FilteredSimpleIdMap {
    fn batch_iterables(&self, batch_size: usize) -> Vec<NodeIdBatch> {
        if batch_size == 0 {
            return vec![];
        }

        let mut batches = Vec::new();
        let mut start = 0u64;
        let total = self.node_count() as u64;
        while start < total {
            let remaining = total - start;
            let length = usize::min(batch_size, remaining as usize);
            batches.push(NodeIdBatch::new(start, length));
            start += length as u64;
        }
        batches
    }
}

impl IdMap for FilteredSimpleIdMap {
    fn type_id(&self) -> &str {
        "simple-filtered"
    }

    fn to_original_node_id(&self, mapped_node_id: MappedNodeId) -> Option<OriginalNodeId> {
        let root_id = self.filtered_to_root.get(mapped_node_id as usize).copied()?;
        self.root.to_original_node_id(root_id)
    }

    fn to_root_node_id(&self, mapped_node_id: MappedNodeId) -> Option<MappedNodeId> {
        self.filtered_to_root.get(mapped_node_id as usize).copied()
    }

    fn node_count(&self) -> usize {
        self.filtered_to_root.len()
    }

    fn node_count_for_label(&self, node_label: &NodeLabel) -> usize {
        self.filtered_to_root
            .iter()
            .filter(|root_id| {
                self.root
                    .labels_by_node
                    .get(root_id)
                    .map(|labels| labels.contains(node_label))
                    .unwrap_or(false)
            })
            .count()
    }

    fn highest_original_id(&self) -> Option<OriginalNodeId> {
        self.filtered_to_root
            .iter()
            .filter_map(|root_id| self.root.to_original_node_id(*root_id))
            .max()
    }

    fn node_labels(&self, mapped_node_id: MappedNodeId) -> HashSet<NodeLabel> {
        self.filtered_to_root
            .get(mapped_node_id as usize)
            .map(|root_id| self.root.node_labels(*root_id))
            .unwrap_or_default()
    }

    fn for_each_node_label(&self, mapped_node_id: MappedNodeId, consumer: &mut dyn NodeLabelConsumer) {
        if let Some(root_id) = self.filtered_to_root.get(mapped_node_id as usize) {
            self.root.for_each_node_label(*root_id, consumer);
        }
    }

    fn available_node_labels(&self) -> HashSet<NodeLabel> {
        self.root.available_node_labels()
    }

    fn has_label(&self, mapped_node_id: MappedNodeId, label: &NodeLabel) -> bool {
        self.filtered_to_root
            .get(mapped_node_id as usize)
            .map(|root_id| self.root.has_label(*root_id, label))
            .unwrap_or(false)
    }

    fn add_node_label(&mut self, _node_label: NodeLabel) {
        // Filtered views are read-only projections of their root mapping;
        // labels are registered on the root map instead.
    }

    fn add_node_id_to_label(&mut self, _node_id: MappedNodeId, _node_label: NodeLabel) {
        // Filtered views are read-only projections of their root mapping.
    }

    fn root_id_map(&self) -> &dyn IdMap {
        self.root.as_ref()
    }

    fn with_filtered_labels(
        &self,
        node_labels: &HashSet<NodeLabel>,
        concurrency: Concurrency,
    ) -> Option<Box<dyn FilteredIdMap>> {
        self.root.with_filtered_labels(node_labels, concurrency)
    }
}

impl FilteredIdMap for FilteredSimpleIdMap {
    fn to_filtered_node_id(&self, root_node_id: MappedNodeId) -> Option<MappedNodeId> {
        self.root_to_filtered.get(&root_node_id).copied()
    }

    fn contains_root_node_id(&self, root_node_id: MappedNodeId) -> bool {
        self.root_to_filtered.contains_key(&root_node_id)
    }
}
