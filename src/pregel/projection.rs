//! Bridges between stored node properties and Pregel's runtime value representation.
//!
//! [`PregelSchema`] elements can name a `property_source` to seed a Pregel property from
//! an existing node property instead of a hardcoded default. [`PropertyProjection`]
//! performs the type-erased read; [`materialize_pregel_values`] does the inverse,
//! turning a computation's results back into a [`GdsValue`] per node for write-back.

use crate::pregel::DefaultValue;
use crate::types::properties::node::NodePropertyValues;
use crate::types::value_type::ValueType;
use crate::values::GdsValue;

/// Converts a stored node property into Pregel's runtime [`DefaultValue`] representation.
pub trait PropertyProjection: Sized {
    fn from_property(props: &dyn NodePropertyValues, node_id: u64) -> Option<Self>;
}

impl PropertyProjection for DefaultValue {
    fn from_property(props: &dyn NodePropertyValues, node_id: u64) -> Option<Self> {
        if !props.has_value(node_id) {
            return None;
        }
        match props.value_type() {
            ValueType::Double | ValueType::Float => {
                props.double_value(node_id).ok().map(DefaultValue::Double)
            }
            ValueType::Long => props.long_value(node_id).ok().map(DefaultValue::Long),
            ValueType::DoubleArray | ValueType::FloatArray => props
                .double_array_value(node_id)
                .ok()
                .map(DefaultValue::DoubleArray),
            ValueType::LongArray => props
                .long_array_value(node_id)
                .ok()
                .map(DefaultValue::LongArray),
            _ => None,
        }
    }
}

/// Converts a computed Pregel value back into a [`GdsValue`] for writing into a
/// property store.
pub fn materialize_pregel_values(value: &DefaultValue) -> GdsValue {
    match value {
        DefaultValue::Long(v) => GdsValue::Long(*v),
        DefaultValue::Double(v) => GdsValue::Double(*v),
        DefaultValue::LongArray(v) => GdsValue::LongArray(v.clone()),
        DefaultValue::DoubleArray(v) => GdsValue::DoubleArray(v.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::properties::node::impls::DefaultDoubleNodePropertyValues;

    #[test]
    fn projects_double_property_into_default_value() {
        let props = DefaultDoubleNodePropertyValues::new(vec![1.0, 2.0, 3.0], 3);
        let value = DefaultValue::from_property(&props, 1).unwrap();
        assert_eq!(value, DefaultValue::Double(2.0));
    }

    #[test]
    fn materializes_long_value_back_to_gds_value() {
        let materialized = materialize_pregel_values(&DefaultValue::Long(42));
        assert_eq!(materialized, GdsValue::Long(42));
    }
}
