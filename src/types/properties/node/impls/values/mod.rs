/// Individual value type implementations for node properties.
/// Each file contains a focused implementation of a specific ValueType,
/// making it easy to swap backends (Vec -> Arrow2/Polars) per type.
mod double;
mod double_array;
mod float_array;
mod long;
mod long_array;

pub use double::DefaultDoubleNodePropertyValues;
pub use double_array::DefaultDoubleArrayNodePropertyValues;
pub use float_array::DefaultFloatArrayNodePropertyValues;
pub use long::DefaultLongNodePropertyValues;
pub use long_array::DefaultLongArrayNodePropertyValues;
