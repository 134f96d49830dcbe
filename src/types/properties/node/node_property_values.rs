use crate::types::properties::property_values::{PropertyValues, PropertyValuesResult};
use std::any::Any;

pub use super::impls::{
    DefaultDoubleArrayNodePropertyValues, DefaultDoubleNodePropertyValues,
    DefaultFloatArrayNodePropertyValues, DefaultLongArrayNodePropertyValues,
    DefaultLongNodePropertyValues,
};

/// Per-node accessors shared by every concrete node property value type.
///
/// Unsupported conversions (e.g. asking a `Long` property for its array value) return
/// [`PropertyValuesError::UnsupportedType`](crate::types::properties::property_values::PropertyValuesError::UnsupportedType)
/// rather than panicking, matching the checked accessors on [`PropertyValues`].
pub trait NodePropertyValues: PropertyValues {
    /// Number of nodes with values in this container.
    fn node_count(&self) -> usize {
        self.element_count()
    }

    fn double_value(&self, node_id: u64) -> PropertyValuesResult<f64>;
    fn long_value(&self, node_id: u64) -> PropertyValuesResult<i64>;
    fn double_array_value(&self, node_id: u64) -> PropertyValuesResult<Vec<f64>>;
    fn float_array_value(&self, node_id: u64) -> PropertyValuesResult<Vec<f32>>;
    fn long_array_value(&self, node_id: u64) -> PropertyValuesResult<Vec<i64>>;

    /// Returns the value for `node_id` boxed as `Any`, for callers that only know the
    /// value type at runtime.
    fn get_object(&self, node_id: u64) -> PropertyValuesResult<Box<dyn Any>>;

    /// Width of array-typed values, if this container holds arrays of fixed dimension.
    fn dimension(&self) -> Option<usize>;

    fn get_max_long_property_value(&self) -> Option<i64>;
    fn get_max_double_property_value(&self) -> Option<f64>;

    /// Whether `node_id` has a stored value (as opposed to a missing/null entry).
    fn has_value(&self, node_id: u64) -> bool;
}

/// Node property values known to hold a `Long` scalar.
pub trait LongNodePropertyValues: NodePropertyValues {
    /// Reads the value without the `PropertyValuesResult` round trip; panics-free callers
    /// must first confirm `has_value`.
    fn long_value_unchecked(&self, node_id: u64) -> i64;
}

/// Node property values known to hold a `Double` scalar.
pub trait DoubleNodePropertyValues: NodePropertyValues {
    fn double_value_unchecked(&self, node_id: u64) -> f64;
}

/// Node property values known to hold a `DoubleArray`.
pub trait DoubleArrayNodePropertyValues: NodePropertyValues {
    fn double_array_value_unchecked(&self, node_id: u64) -> Option<Vec<f64>>;
}

/// Node property values known to hold a `FloatArray`.
pub trait FloatArrayNodePropertyValues: NodePropertyValues {
    fn float_array_value_unchecked(&self, node_id: u64) -> Option<Vec<f32>>;
}

/// Node property values known to hold a `LongArray`.
pub trait LongArrayNodePropertyValues: NodePropertyValues {
    fn long_array_value_unchecked(&self, node_id: u64) -> Option<Vec<i64>>;
}
