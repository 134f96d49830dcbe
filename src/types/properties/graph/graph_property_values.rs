use crate::types::properties::property_values::PropertyValues;
use std::any::Any;

pub use super::impls::{
    DefaultDoubleArrayGraphPropertyValues, DefaultDoubleGraphPropertyValues,
    DefaultFloatArrayGraphPropertyValues, DefaultLongArrayGraphPropertyValues,
    DefaultLongGraphPropertyValues,
};

/// Graph-level property values: one value per element in the underlying collection,
/// accessed by iteration rather than by node/relationship id.
pub trait GraphPropertyValues: PropertyValues {
    fn double_values(&self) -> Box<dyn Iterator<Item = f64> + '_>;
    fn long_values(&self) -> Box<dyn Iterator<Item = i64> + '_>;
    fn double_array_values(&self) -> Box<dyn Iterator<Item = Vec<f64>> + '_>;
    fn float_array_values(&self) -> Box<dyn Iterator<Item = Vec<f32>> + '_>;
    fn long_array_values(&self) -> Box<dyn Iterator<Item = Vec<i64>> + '_>;

    /// Values boxed as `Any`, for callers that only know the value type at runtime.
    fn objects(&self) -> Box<dyn Iterator<Item = Box<dyn Any>> + '_>;
}

/// Graph property values known to hold `Long` scalars.
pub trait LongGraphPropertyValues: GraphPropertyValues {
    fn long_values_unchecked(&self) -> &[i64];
}

/// Graph property values known to hold `Double` scalars.
pub trait DoubleGraphPropertyValues: GraphPropertyValues {
    fn double_values_unchecked(&self) -> &[f64];
}

/// Graph property values known to hold `DoubleArray` values.
pub trait DoubleArrayGraphPropertyValues: GraphPropertyValues {
    fn double_arrays_unchecked(&self) -> &[Vec<f64>];
}

/// Graph property values known to hold `FloatArray` values.
pub trait FloatArrayGraphPropertyValues: GraphPropertyValues {
    fn float_arrays_unchecked(&self) -> &[Vec<f32>];
}

/// Graph property values known to hold `LongArray` values.
pub trait LongArrayGraphPropertyValues: GraphPropertyValues {
    fn long_arrays_unchecked(&self) -> &[Vec<i64>];
}
