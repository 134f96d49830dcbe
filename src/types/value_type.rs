use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed universe of value types a column can hold.
///
/// Every variant has a deterministic fallback used by [`crate::types::schema::DefaultValue`]
/// when no user-supplied default is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    Long,
    Double,
    Float,
    Boolean,
    String,
    LongArray,
    DoubleArray,
    FloatArray,
    BooleanArray,
    StringArray,
    UntypedArray,
    Unknown,
}

impl ValueType {
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Long => "LONG",
            ValueType::Double => "DOUBLE",
            ValueType::Float => "FLOAT",
            ValueType::Boolean => "BOOLEAN",
            ValueType::String => "STRING",
            ValueType::LongArray => "LONG_ARRAY",
            ValueType::DoubleArray => "DOUBLE_ARRAY",
            ValueType::FloatArray => "FLOAT_ARRAY",
            ValueType::BooleanArray => "BOOLEAN_ARRAY",
            ValueType::StringArray => "STRING_ARRAY",
            ValueType::UntypedArray => "UNTYPED_ARRAY",
            ValueType::Unknown => "UNKNOWN",
        }
    }

    /// The stable CSV/export name for this type. `UNKNOWN` has none.
    pub fn csv_name(self) -> Result<&'static str, &'static str> {
        match self {
            ValueType::Long => Ok("long"),
            ValueType::Double => Ok("double"),
            ValueType::Float => Ok("float"),
            ValueType::Boolean => Ok("boolean"),
            ValueType::String => Ok("string"),
            ValueType::LongArray => Ok("long[]"),
            ValueType::DoubleArray => Ok("double[]"),
            ValueType::FloatArray => Ok("float[]"),
            ValueType::BooleanArray => Ok("boolean[]"),
            ValueType::StringArray => Ok("string[]"),
            ValueType::UntypedArray => Ok("Any[]"),
            ValueType::Unknown => Err("ValueType::UNKNOWN has no CSV name"),
        }
    }

    /// Parses one of the stable CSV names (`long`, `bigint`, `double[]`, ...) back into a
    /// `ValueType`. `bigint`/`bigint[]` are accepted as aliases for `Long`/`LongArray` since
    /// `Long` is compatible with the wider `BigInt` (see [`ValueType::is_compatible_with`]).
    pub fn from_csv_name(name: &str) -> Option<ValueType> {
        match name {
            "long" | "bigint" => Some(ValueType::Long),
            "double" => Some(ValueType::Double),
            "float" => Some(ValueType::Float),
            "boolean" => Some(ValueType::Boolean),
            "string" => Some(ValueType::String),
            "long[]" | "bigint[]" => Some(ValueType::LongArray),
            "double[]" => Some(ValueType::DoubleArray),
            "float[]" => Some(ValueType::FloatArray),
            "boolean[]" => Some(ValueType::BooleanArray),
            "string[]" => Some(ValueType::StringArray),
            "Any[]" => Some(ValueType::UntypedArray),
            _ => None,
        }
    }

    pub fn cypher_name(self) -> &'static str {
        match self {
            ValueType::Long => "Integer",
            ValueType::Double => "Float",
            ValueType::Float => "Float",
            ValueType::Boolean => "Boolean",
            ValueType::String => "String",
            ValueType::LongArray => "List of Integer",
            ValueType::DoubleArray => "List of Float",
            ValueType::FloatArray => "List of Float",
            ValueType::BooleanArray => "List of Boolean",
            ValueType::StringArray => "List of String",
            ValueType::UntypedArray => "List of Any",
            ValueType::Unknown => "Unknown",
        }
    }

    /// `T` is compatible with `T`; every typed array is compatible with `UntypedArray`;
    /// `Float` is compatible with `Double`. (The source also allows `Long` ~ `BigInt`, a
    /// wider integer type this closed universe does not carry as a separate variant — see
    /// the spec's open question on `DefaultValue.of`.)
    pub fn is_compatible_with(self, other: ValueType) -> bool {
        if self == other {
            return true;
        }

        if other == ValueType::UntypedArray {
            return matches!(
                self,
                ValueType::LongArray
                    | ValueType::DoubleArray
                    | ValueType::FloatArray
                    | ValueType::BooleanArray
                    | ValueType::StringArray
            );
        }

        self == ValueType::Float && other == ValueType::Double
    }

    /// True for the array variants (`UntypedArray` included).
    pub fn is_array(self) -> bool {
        matches!(
            self,
            ValueType::LongArray
                | ValueType::DoubleArray
                | ValueType::FloatArray
                | ValueType::BooleanArray
                | ValueType::StringArray
                | ValueType::UntypedArray
        )
    }
}

/// Visitor over the closed value-type universe; exhaustive match stands in for the
/// source's `default: throw`.
pub trait Visitor<R> {
    fn visit_long(&self) -> R;
    fn visit_double(&self) -> R;
    fn visit_float(&self) -> R;
    fn visit_boolean(&self) -> R;
    fn visit_string(&self) -> R;
    fn visit_long_array(&self) -> R;
    fn visit_double_array(&self) -> R;
    fn visit_float_array(&self) -> R;
    fn visit_boolean_array(&self) -> R;
    fn visit_string_array(&self) -> R;
    fn visit_untyped_array(&self) -> Option<R> {
        None
    }
    fn visit_unknown(&self) -> Option<R> {
        None
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_round_trip() {
        for vt in [
            ValueType::Long,
            ValueType::Double,
            ValueType::Float,
            ValueType::Boolean,
            ValueType::String,
            ValueType::LongArray,
            ValueType::DoubleArray,
            ValueType::FloatArray,
            ValueType::BooleanArray,
            ValueType::StringArray,
            ValueType::UntypedArray,
        ] {
            let csv = vt.csv_name().unwrap();
            assert_eq!(ValueType::from_csv_name(csv), Some(vt));
        }
    }

    #[test]
    fn unknown_has_no_csv_name() {
        assert!(ValueType::Unknown.csv_name().is_err());
    }

    #[test]
    fn typed_arrays_are_compatible_with_untyped_array() {
        assert!(ValueType::LongArray.is_compatible_with(ValueType::UntypedArray));
        assert!(!ValueType::UntypedArray.is_compatible_with(ValueType::LongArray));
    }

    #[test]
    fn float_is_compatible_with_double() {
        assert!(ValueType::Float.is_compatible_with(ValueType::Double));
        assert!(!ValueType::Double.is_compatible_with(ValueType::Float));
    }
}
