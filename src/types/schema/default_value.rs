use crate::types::value_type::ValueType;
use serde::{Deserialize, Serialize};

/// The resolved payload a [`DefaultValue`] carries, one variant per
/// [`ValueType`] that has a concrete representation. `UntypedArray` and
/// `Unknown` have no representation of their own and always resolve to
/// `Null`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
enum DefaultValueInner {
    Null,
    Long(i64),
    Double(f64),
    Float(f32),
    Bool(bool),
    String(String),
    LongArray(Vec<i64>),
    DoubleArray(Vec<f64>),
    FloatArray(Vec<f32>),
    BooleanArray(Vec<bool>),
    StringArray(Vec<String>),
}

/// Default value for a property when no value is present for a node,
/// relationship, or graph element.
///
/// Carries its [`ValueType`], a resolved value, and whether that value was
/// supplied by a caller (`is_user_defined`) or derived from the type's
/// deterministic fallback (`0`/`0.0`/`""`/`false`/empty array). Two default
/// values are equal iff their type, user-defined flag, and resolved value
/// are all equal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DefaultValue {
    value_type: ValueType,
    value: DefaultValueInner,
    is_user_defined: bool,
}

impl DefaultValue {
    /// Creates the deterministic fallback default for the given value type.
    /// Exhaustive over every `ValueType` variant: array types fall back to
    /// an empty array, `UntypedArray`/`Unknown` fall back to null.
    pub fn of(value_type: ValueType) -> Self {
        let value = match value_type {
            ValueType::Long => DefaultValueInner::Long(0),
            ValueType::Double => DefaultValueInner::Double(0.0),
            ValueType::Float => DefaultValueInner::Float(0.0),
            ValueType::Boolean => DefaultValueInner::Bool(false),
            ValueType::String => DefaultValueInner::String(String::new()),
            ValueType::LongArray => DefaultValueInner::LongArray(Vec::new()),
            ValueType::DoubleArray => DefaultValueInner::DoubleArray(Vec::new()),
            ValueType::FloatArray => DefaultValueInner::FloatArray(Vec::new()),
            ValueType::BooleanArray => DefaultValueInner::BooleanArray(Vec::new()),
            ValueType::StringArray => DefaultValueInner::StringArray(Vec::new()),
            ValueType::UntypedArray | ValueType::Unknown => DefaultValueInner::Null,
        };
        Self {
            value_type,
            value,
            is_user_defined: false,
        }
    }

    /// Creates a null default value for a type that has no representable
    /// fallback, e.g. an explicit user override to null.
    pub fn null_for(value_type: ValueType) -> Self {
        Self {
            value_type,
            value: DefaultValueInner::Null,
            is_user_defined: true,
        }
    }

    /// A null default with no associated type, for call sites that only
    /// need the absence marker and resolve the type elsewhere.
    pub fn null() -> Self {
        Self {
            value_type: ValueType::Unknown,
            value: DefaultValueInner::Null,
            is_user_defined: false,
        }
    }

    pub fn long(value: i64) -> Self {
        Self {
            value_type: ValueType::Long,
            value: DefaultValueInner::Long(value),
            is_user_defined: true,
        }
    }

    pub fn double(value: f64) -> Self {
        Self {
            value_type: ValueType::Double,
            value: DefaultValueInner::Double(value),
            is_user_defined: true,
        }
    }

    pub fn float(value: f32) -> Self {
        Self {
            value_type: ValueType::Float,
            value: DefaultValueInner::Float(value),
            is_user_defined: true,
        }
    }

    pub fn boolean(value: bool) -> Self {
        Self {
            value_type: ValueType::Boolean,
            value: DefaultValueInner::Bool(value),
            is_user_defined: true,
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self {
            value_type: ValueType::String,
            value: DefaultValueInner::String(value.into()),
            is_user_defined: true,
        }
    }

    pub fn long_array(value: Vec<i64>) -> Self {
        Self {
            value_type: ValueType::LongArray,
            value: DefaultValueInner::LongArray(value),
            is_user_defined: true,
        }
    }

    pub fn double_array(value: Vec<f64>) -> Self {
        Self {
            value_type: ValueType::DoubleArray,
            value: DefaultValueInner::DoubleArray(value),
            is_user_defined: true,
        }
    }

    pub fn float_array(value: Vec<f32>) -> Self {
        Self {
            value_type: ValueType::FloatArray,
            value: DefaultValueInner::FloatArray(value),
            is_user_defined: true,
        }
    }

    pub fn boolean_array(value: Vec<bool>) -> Self {
        Self {
            value_type: ValueType::BooleanArray,
            value: DefaultValueInner::BooleanArray(value),
            is_user_defined: true,
        }
    }

    pub fn string_array(value: Vec<String>) -> Self {
        Self {
            value_type: ValueType::StringArray,
            value: DefaultValueInner::StringArray(value),
            is_user_defined: true,
        }
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// True when this value was supplied by a caller rather than derived
    /// from the type's fallback.
    pub fn is_user_defined(&self) -> bool {
        self.is_user_defined
    }

    /// True when the resolved value is null (no representable payload).
    pub fn is_null(&self) -> bool {
        matches!(self.value, DefaultValueInner::Null)
    }

    /// Returns the long value, or 0 if this default does not resolve to one.
    pub fn long_value(&self) -> i64 {
        match &self.value {
            DefaultValueInner::Long(v) => *v,
            _ => 0,
        }
    }

    /// Returns the double value, or 0.0 if this default does not resolve to one.
    pub fn double_value(&self) -> f64 {
        match &self.value {
            DefaultValueInner::Double(v) => *v,
            _ => 0.0,
        }
    }

    /// Checks if this default value equals another: same type, same
    /// user-defined flag, and structurally equal resolved values.
    pub fn equals(&self, other: &DefaultValue) -> bool {
        self == other
    }
}

impl std::fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            DefaultValueInner::Null => write!(f, "null"),
            DefaultValueInner::Long(v) => write!(f, "{}", v),
            DefaultValueInner::Double(v) => write!(f, "{}", v),
            DefaultValueInner::Float(v) => write!(f, "{}", v),
            DefaultValueInner::Bool(v) => write!(f, "{}", v),
            DefaultValueInner::String(v) => write!(f, "\"{}\"", v),
            DefaultValueInner::LongArray(v) => write!(f, "{:?}", v),
            DefaultValueInner::DoubleArray(v) => write!(f, "{:?}", v),
            DefaultValueInner::FloatArray(v) => write!(f, "{:?}", v),
            DefaultValueInner::BooleanArray(v) => write!(f, "{:?}", v),
            DefaultValueInner::StringArray(v) => write!(f, "{:?}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn of_covers_every_value_type() {
        assert_eq!(DefaultValue::of(ValueType::Long), DefaultValue::long(0));
        assert_eq!(DefaultValue::of(ValueType::Double), DefaultValue::double(0.0));
        assert_eq!(DefaultValue::of(ValueType::Float), DefaultValue::float(0.0));
        assert_eq!(
            DefaultValue::of(ValueType::String),
            DefaultValue::string(String::new())
        );
        assert_eq!(
            DefaultValue::of(ValueType::Boolean),
            DefaultValue::boolean(false)
        );
        assert_eq!(
            DefaultValue::of(ValueType::LongArray),
            DefaultValue::long_array(Vec::new())
        );
        assert_eq!(
            DefaultValue::of(ValueType::DoubleArray),
            DefaultValue::double_array(Vec::new())
        );
        assert_eq!(
            DefaultValue::of(ValueType::FloatArray),
            DefaultValue::float_array(Vec::new())
        );
        assert_eq!(
            DefaultValue::of(ValueType::BooleanArray),
            DefaultValue::boolean_array(Vec::new())
        );
        assert_eq!(
            DefaultValue::of(ValueType::StringArray),
            DefaultValue::string_array(Vec::new())
        );
        assert!(DefaultValue::of(ValueType::UntypedArray).is_null());
        assert!(DefaultValue::of(ValueType::Unknown).is_null());
    }

    #[test]
    fn of_is_never_user_defined() {
        for vt in [ValueType::Long, ValueType::Double, ValueType::Unknown] {
            assert!(!DefaultValue::of(vt).is_user_defined());
        }
    }

    #[test]
    fn typed_factories_are_user_defined() {
        assert!(DefaultValue::long(0).is_user_defined());
        assert!(DefaultValue::double(0.0).is_user_defined());
    }

    #[test]
    fn equality_requires_type_flag_and_value() {
        let fallback = DefaultValue::of(ValueType::Long);
        let user_zero = DefaultValue::long(0);

        // Same resolved value, different user-defined flag: not equal.
        assert_ne!(fallback, user_zero);
        assert_eq!(DefaultValue::long(42), DefaultValue::long(42));
        assert_ne!(DefaultValue::long(42), DefaultValue::long(0));
    }

    #[test]
    fn user_defined_null_is_distinct_from_fallback() {
        let fallback = DefaultValue::of(ValueType::Long);
        let user_null = DefaultValue::null_for(ValueType::Long);

        assert!(!fallback.is_null());
        assert!(user_null.is_null());
        assert!(user_null.is_user_defined());
        assert_ne!(fallback, user_null);
    }

    #[test]
    fn test_equals() {
        let dv1 = DefaultValue::long(42);
        let dv2 = DefaultValue::long(42);
        let dv3 = DefaultValue::long(0);

        assert!(dv1.equals(&dv2));
        assert!(!dv1.equals(&dv3));
    }
}
