//! Tagged-union value representation (`GdsValue`) used by default values and by
//! property-value accessors that need to hand back a self-describing scalar/array.
//!
//! The source models values as dynamically-dispatched wrapper objects, one per type.
//! Per the closed [`crate::types::value_type::ValueType`] universe this crate enforces,
//! a single tagged enum with an exhaustive match is both simpler and faster: no virtual
//! dispatch in the hot property-read path, and the compiler checks exhaustiveness for us.

pub mod primitive_values;

pub use primitive_values::{GdsValue, PrimitiveValues};
