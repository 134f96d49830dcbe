use crate::property_values_impl;
use crate::types::properties::graph::graph_property_values::{
    DoubleGraphPropertyValues, GraphPropertyValues,
};
use crate::types::properties::property_values::PropertyValues;
use crate::types::value_type::ValueType;
use crate::values::GdsValue;
use std::any::Any;

/// Default implementation for double graph property values.
/// 
/// Storage: Vec<f64> - suitable for pure in-memory graph-level properties.
/// Future: Can be replaced with Arrow2 Float64Array for columnar storage.
#[derive(Debug, Clone)]
pub struct DefaultDoubleGraphPropertyValues {
    values: Vec<f64>,
}

impl DefaultDoubleGraphPropertyValues {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn singleton(value: f64) -> Self {
        Self::new(vec![value])
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

// Generate PropertyValues trait implementation
property_values_impl!(
    DefaultDoubleGraphPropertyValues,
    Double,
    f64,
    GdsValue::Double,
    graph
);

// Manual GraphPropertyValues implementation (iterator-based)
impl GraphPropertyValues for DefaultDoubleGraphPropertyValues {
    fn double_values(&self) -> Box<dyn Iterator<Item = f64> + '_> {
        Box::new(self.values.iter().copied())
    }

    fn long_values(&self) -> Box<dyn Iterator<Item = i64> + '_> {
        Box::new(self.values.iter().map(|&value| value as i64))
    }

    fn double_array_values(&self) -> Box<dyn Iterator<Item = Vec<f64>> + '_> {
        Box::new(std::iter::empty())
    }

    fn float_array_values(&self) -> Box<dyn Iterator<Item = Vec<f32>> + '_> {
        Box::new(std::iter::empty())
    }

    fn long_array_values(&self) -> Box<dyn Iterator<Item = Vec<i64>> + '_> {
        Box::new(std::iter::empty())
    }

    fn objects(&self) -> Box<dyn Iterator<Item = Box<dyn Any>> + '_> {
        Box::new(
            self.values
                .iter()
                .map(|&value| Box::new(value) as Box<dyn Any>),
        )
    }
}

// Specialized unchecked accessor for Double values
impl DoubleGraphPropertyValues for DefaultDoubleGraphPropertyValues {
    fn double_values_unchecked(&self) -> &[f64] {
        &self.values
    }
}

// Convenient FromIterator for building from iterators
impl FromIterator<f64> for DefaultDoubleGraphPropertyValues {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
