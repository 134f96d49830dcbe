//! Batch ingestion of raw relationship tuples into compressed CSR topology.
//!
//! Runs the three-step pipeline per source node's unsorted target slice:
//! indirect sort by target id, pre-aggregation of duplicate `(source,
//! target)` pairs via per-property `Aggregation` functions, and compaction
//! of the surviving rows into final `(offsets, neighbors, property
//! columns…)` CSR storage.

use std::collections::HashMap;

use crate::core::utils::AscendingLongComparator;
use crate::types::graph::RelationshipTopology;
use crate::types::id_map::{IdMap, MappedNodeId, OriginalNodeId};
use crate::types::schema::Aggregation;

/// A single `(source, target, properties)` tuple as read from the input
/// stream, addressed by original node identifiers.
#[derive(Debug, Clone)]
pub struct RelationshipTuple {
    pub source: OriginalNodeId,
    pub target: OriginalNodeId,
    pub properties: Vec<f64>,
}

impl RelationshipTuple {
    pub fn new(source: OriginalNodeId, target: OriginalNodeId, properties: Vec<f64>) -> Self {
        Self {
            source,
            target,
            properties,
        }
    }
}

/// Result of [`import_relationships`]: a compressed CSR topology plus one
/// property column per configured key, aligned 1:1 with
/// `topology.neighbors()`.
#[derive(Debug, Clone)]
pub struct RelationshipImportResult {
    pub topology: RelationshipTopology,
    pub property_columns: HashMap<String, Vec<f64>>,
    pub is_multigraph: bool,
}

/// Imports a batch of relationship tuples into compressed CSR storage.
///
/// `property_keys` and `aggregations` must be the same length; `aggregations[i]`
/// is the merge function used for duplicate `(source, target)` pairs'
/// `property_keys[i]` column. Tuples whose source or target cannot be
/// resolved through `id_map` are dropped (out-of-graph). Setting
/// `preserve_parallel_edges` skips pre-aggregation entirely, keeping every
/// tuple as a parallel edge regardless of `aggregations`.
///
/// # Panics
///
/// Panics if `property_keys.len() != aggregations.len()`, if a tuple's
/// `properties` does not match `property_keys` in length, or if any
/// property value is NaN.
pub fn import_relationships<M: IdMap + ?Sized>(
    id_map: &M,
    tuples: impl IntoIterator<Item = RelationshipTuple>,
    property_keys: &[String],
    aggregations: &[Aggregation],
    preserve_parallel_edges: bool,
) -> RelationshipImportResult {
    assert_eq!(
        property_keys.len(),
        aggregations.len(),
        "every property key needs a matching aggregation"
    );

    let node_count = id_map.node_count();
    let mut rows: Vec<Vec<(MappedNodeId, Vec<f64>)>> = vec![Vec::new(); node_count];

    for tuple in tuples {
        assert_eq!(
            tuple.properties.len(),
            property_keys.len(),
            "tuple property count must match the configured property keys"
        );
        assert!(
            tuple.properties.iter().all(|value| !value.is_nan()),
            "relationship property values must not be NaN"
        );

        let (Some(source), Some(target)) = (
            id_map.to_mapped_node_id(tuple.source),
            id_map.to_mapped_node_id(tuple.target),
        ) else {
            continue;
        };

        rows[source as usize].push((target, tuple.properties));
    }

    let mut offsets = Vec::with_capacity(node_count + 1);
    let mut neighbors = Vec::new();
    let mut property_columns: HashMap<String, Vec<f64>> = property_keys
        .iter()
        .map(|key| (key.clone(), Vec::new()))
        .collect();

    offsets.push(0u64);
    for row in rows {
        let survivors = aggregate_row(row, aggregations, preserve_parallel_edges);
        for (target, properties) in survivors {
            neighbors.push(target);
            for (key, value) in property_keys.iter().zip(properties) {
                property_columns.get_mut(key).unwrap().push(value);
            }
        }
        offsets.push(neighbors.len() as u64);
    }

    let topology = RelationshipTopology::from_csr(offsets, neighbors, None);
    let is_multigraph = topology.has_parallel_edges();

    RelationshipImportResult {
        topology,
        property_columns,
        is_multigraph,
    }
}

/// Runs the indirect sort and pre-aggregation steps for one source node's
/// unsorted `(target, properties)` pairs.
fn aggregate_row(
    row: Vec<(MappedNodeId, Vec<f64>)>,
    aggregations: &[Aggregation],
    preserve_parallel_edges: bool,
) -> Vec<(MappedNodeId, Vec<f64>)> {
    if row.is_empty() {
        return row;
    }

    // Step 1: indirect sort of this node's targets, ascending and stable.
    let targets: Vec<i64> = row.iter().map(|(target, _)| *target as i64).collect();
    let comparator = AscendingLongComparator::new(&targets);
    let mut order: Vec<usize> = (0..row.len()).collect();
    order.sort_by(|&a, &b| comparator.compare(a, b));
    let sorted: Vec<(MappedNodeId, Vec<f64>)> =
        order.into_iter().map(|index| row[index].clone()).collect();

    if preserve_parallel_edges {
        return sorted;
    }

    // Step 2: pre-aggregation — fold each run of equal target ids into its
    // first occurrence (the survivor), eliding the rest. Because
    // `MappedNodeId` is unsigned it cannot carry the spec's `IGNORE_VALUE`
    // sentinel directly, so duplicates are dropped by construction instead
    // of marked and compacted in a second pass.
    let mut survivors: Vec<(MappedNodeId, Vec<f64>)> = Vec::with_capacity(sorted.len());
    for (target, properties) in sorted {
        match survivors.last_mut() {
            Some((last_target, last_properties)) if *last_target == target => {
                for ((value, merged), aggregation) in properties
                    .into_iter()
                    .zip(last_properties.iter_mut())
                    .zip(aggregations)
                {
                    *merged = aggregation.merge(*merged, value);
                }
            }
            _ => {
                let properties = properties
                    .into_iter()
                    .zip(aggregations)
                    .map(|(value, aggregation)| aggregation.initial_value(value))
                    .collect();
                survivors.push((target, properties));
            }
        }
    }
    survivors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::id_map::SimpleIdMap;

    fn tuple(source: i64, target: i64, properties: Vec<f64>) -> RelationshipTuple {
        RelationshipTuple::new(source, target, properties)
    }

    #[test]
    fn sorts_and_compacts_duplicate_targets() {
        let id_map = SimpleIdMap::from_original_ids([1, 2, 3]);
        let tuples = vec![
            tuple(1, 3, vec![1.0]),
            tuple(1, 2, vec![1.0]),
            tuple(1, 2, vec![1.0]),
        ];

        let result = import_relationships(
            &id_map,
            tuples,
            &["weight".to_string()],
            &[Aggregation::Sum],
            false,
        );

        assert_eq!(result.topology.relationship_count(), 2);
        assert_eq!(result.topology.outgoing(0), Some(&[1, 2][..]));
        assert_eq!(result.property_columns["weight"], vec![2.0, 1.0]);
        assert!(!result.is_multigraph);
    }

    #[test]
    fn none_aggregation_preserves_parallel_edges() {
        let id_map = SimpleIdMap::from_original_ids([1, 2]);
        let tuples = vec![tuple(1, 2, vec![1.0]), tuple(1, 2, vec![3.0])];

        let result = import_relationships(
            &id_map,
            tuples,
            &["weight".to_string()],
            &[Aggregation::None],
            true,
        );

        assert_eq!(result.topology.relationship_count(), 2);
        assert_eq!(result.property_columns["weight"], vec![1.0, 3.0]);
        assert!(result.is_multigraph);
    }

    #[test]
    fn unresolvable_endpoints_are_dropped() {
        let id_map = SimpleIdMap::from_original_ids([1, 2]);
        let tuples = vec![tuple(1, 2, vec![]), tuple(1, 999, vec![]), tuple(999, 2, vec![])];

        let result = import_relationships(&id_map, tuples, &[], &[], false);

        assert_eq!(result.topology.relationship_count(), 1);
    }

    #[test]
    fn count_aggregation_counts_occurrences_not_values() {
        let id_map = SimpleIdMap::from_original_ids([1, 2]);
        let tuples = vec![
            tuple(1, 2, vec![40.0]),
            tuple(1, 2, vec![40.0]),
            tuple(1, 2, vec![40.0]),
        ];

        let result = import_relationships(
            &id_map,
            tuples,
            &["weight".to_string()],
            &[Aggregation::Count],
            false,
        );

        assert_eq!(result.property_columns["weight"], vec![3.0]);
    }

    #[test]
    #[should_panic(expected = "must not be NaN")]
    fn rejects_nan_property_values() {
        let id_map = SimpleIdMap::from_original_ids([1, 2]);
        let tuples = vec![tuple(1, 2, vec![f64::NAN])];

        import_relationships(
            &id_map,
            tuples,
            &["weight".to_string()],
            &[Aggregation::Sum],
            false,
        );
    }
}
