use crate::types::value_type::ValueType;
use serde_json::Value as JsonValue;

/// Maximum long magnitude a double can represent exactly (2^53).
const MAX_EXACT_LONG: i64 = 1 << 53;
/// Maximum long magnitude a float can represent exactly (2^24).
const MAX_EXACT_FLOAT_LONG: i64 = 1 << 24;

/// A self-describing scalar or array value, tagged by [`ValueType`].
///
/// Every variant corresponds to a storage-bearing member of the closed value-type
/// universe; `UntypedArray` and `Unknown` never appear as a concrete value, only as a
/// column's declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum GdsValue {
    Long(i64),
    Double(f64),
    Float(f32),
    Boolean(bool),
    String(String),
    LongArray(Vec<i64>),
    DoubleArray(Vec<f64>),
    FloatArray(Vec<f32>),
    BooleanArray(Vec<bool>),
    StringArray(Vec<String>),
}

impl GdsValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            GdsValue::Long(_) => ValueType::Long,
            GdsValue::Double(_) => ValueType::Double,
            GdsValue::Float(_) => ValueType::Float,
            GdsValue::Boolean(_) => ValueType::Boolean,
            GdsValue::String(_) => ValueType::String,
            GdsValue::LongArray(_) => ValueType::LongArray,
            GdsValue::DoubleArray(_) => ValueType::DoubleArray,
            GdsValue::FloatArray(_) => ValueType::FloatArray,
            GdsValue::BooleanArray(_) => ValueType::BooleanArray,
            GdsValue::StringArray(_) => ValueType::StringArray,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            GdsValue::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            GdsValue::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            GdsValue::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_json(&self) -> JsonValue {
        match self {
            GdsValue::Long(v) => JsonValue::from(*v),
            GdsValue::Double(v) => JsonValue::from(*v),
            GdsValue::Float(v) => JsonValue::from(*v as f64),
            GdsValue::Boolean(v) => JsonValue::from(*v),
            GdsValue::String(v) => JsonValue::from(v.clone()),
            GdsValue::LongArray(v) => JsonValue::from(v.clone()),
            GdsValue::DoubleArray(v) => JsonValue::from(v.clone()),
            GdsValue::FloatArray(v) => JsonValue::from(v.iter().map(|f| *f as f64).collect::<Vec<_>>()),
            GdsValue::BooleanArray(v) => JsonValue::from(v.clone()),
            GdsValue::StringArray(v) => JsonValue::from(v.clone()),
        }
    }
}

/// Errors from the value-conversion rules in §4.3: these are the *only* permitted
/// implicit cross-type reads, and they fail loudly rather than silently truncating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("{0} does not fit in the target type without loss of precision")]
    NotExact,
}

/// Conversion and lightweight construction helpers centered on [`GdsValue`].
///
/// Named after the source's `PrimitiveValues` factory; the "exact" family implements the
/// narrow set of implicit conversions the spec permits between numeric columns.
pub struct PrimitiveValues;

impl PrimitiveValues {
    /// Succeeds iff `d` is an integer value representable without loss as `i64`.
    pub fn exact_double_to_long(d: f64) -> Result<i64, ConversionError> {
        if d.is_finite() && d.fract() == 0.0 && d.abs() <= i64::MAX as f64 {
            Ok(d as i64)
        } else {
            Err(ConversionError::NotExact)
        }
    }

    /// Succeeds iff `|l| <= 2^53`, the largest magnitude an `f64` mantissa represents exactly.
    pub fn exact_long_to_double(l: i64) -> Result<f64, ConversionError> {
        if l.unsigned_abs() as i128 <= MAX_EXACT_LONG as i128 {
            Ok(l as f64)
        } else {
            Err(ConversionError::NotExact)
        }
    }

    /// Succeeds iff `|l| < 2^24`, the largest magnitude an `f32` mantissa represents exactly.
    pub fn exact_long_to_float(l: i64) -> Result<f32, ConversionError> {
        if l.unsigned_abs() as i128 < MAX_EXACT_FLOAT_LONG as i128 {
            Ok(l as f32)
        } else {
            Err(ConversionError::NotExact)
        }
    }

    /// Succeeds iff `|d| <= f32::MAX`; NaN passes through unchanged.
    pub fn not_overflowing_double_to_float(d: f64) -> Result<f32, ConversionError> {
        if d.is_nan() || d.abs() <= f32::MAX as f64 {
            Ok(d as f32)
        } else {
            Err(ConversionError::NotExact)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_double_to_long_rejects_fractions() {
        assert_eq!(PrimitiveValues::exact_double_to_long(4.0), Ok(4));
        assert!(PrimitiveValues::exact_double_to_long(4.5).is_err());
    }

    #[test]
    fn exact_long_to_float_rejects_large_magnitude() {
        assert!(PrimitiveValues::exact_long_to_float((1i64 << 24) - 1).is_ok());
        assert!(PrimitiveValues::exact_long_to_float(1i64 << 24).is_err());
    }

    #[test]
    fn not_overflowing_double_to_float_lets_nan_through() {
        assert!(PrimitiveValues::not_overflowing_double_to_float(f64::NAN).is_ok());
        assert!(PrimitiveValues::not_overflowing_double_to_float(1e300).is_err());
    }

    #[test]
    fn value_type_round_trip() {
        assert_eq!(GdsValue::Long(5).value_type(), ValueType::Long);
        assert_eq!(
            GdsValue::DoubleArray(vec![1.0]).value_type(),
            ValueType::DoubleArray
        );
    }
}
