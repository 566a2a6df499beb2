//! Natively typed field values and write handles.
//!
//! [`Value`] is an owned snapshot of a field, used by the export views and as
//! the source side of weak decoding. [`Slot`] is a typed `&mut` handle into a
//! field, used as the target side. [`FieldType`] ties both to the Rust types a
//! `StructConfig` field may have.

use serde::Serialize;

use crate::error::ValueTypeError;

/// An owned field value that keeps the field's native type.
///
/// Each variant is named after the Rust type it holds. Serializes to the bare
/// JSON form of its payload, so strings are quoted, numbers are bare and
/// booleans render as `true`/`false`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
}

impl Value {
    /// Name of the native type held.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "String",
            Value::Bool(_) => "bool",
            Value::I8(_) => "i8",
            Value::I16(_) => "i16",
            Value::I32(_) => "i32",
            Value::I64(_) => "i64",
            Value::Isize(_) => "isize",
            Value::U8(_) => "u8",
            Value::U16(_) => "u16",
            Value::U32(_) => "u32",
            Value::U64(_) => "u64",
            Value::Usize(_) => "usize",
            Value::F32(_) => "f32",
            Value::F64(_) => "f64",
        }
    }

    /// Render as JSON text.
    pub fn to_json(&self) -> String {
        match serde_json::to_string(self) {
            Ok(json) => json,
            Err(err) => {
                tracing::debug!(error = %err, "failed to encode value as JSON");
                "null".to_string()
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

/// A mutable handle into one field of a configuration struct, one variant per
/// supported field type.
#[derive(Debug)]
pub enum Slot<'a> {
    String(&'a mut String),
    Bool(&'a mut bool),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    Isize(&'a mut isize),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    Usize(&'a mut usize),
    F32(&'a mut f32),
    F64(&'a mut f64),
}

/// Types that may appear as fields of a `StructConfig` struct.
///
/// Used by macro-generated code. A field whose type does not implement this
/// trait is rejected at compile time:
///
/// ```compile_fail
/// use structconfig::StructConfig;
///
/// #[derive(StructConfig)]
/// struct Config {
///     #[env = "TAGS"]
///     pub tags: Vec<String>,
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be a StructConfig field",
    label = "unsupported field type",
    note = "fields must be `String`, `bool`, an integer or a float"
)]
pub trait FieldType {
    /// Snapshot the current value.
    fn value(&self) -> Value;

    /// Borrow the field for writing.
    fn slot(&mut self) -> Slot<'_>;
}

/// Generates `FieldType`, `From` and `TryFrom` for each supported field type
macro_rules! impl_field_type {
    ($($t:ty => $variant:ident),+ $(,)?) => {
        $(
            impl FieldType for $t {
                fn value(&self) -> Value {
                    Value::$variant(Clone::clone(self))
                }

                fn slot(&mut self) -> Slot<'_> {
                    Slot::$variant(self)
                }
            }

            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v)
                }
            }

            impl TryFrom<Value> for $t {
                type Error = ValueTypeError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(ValueTypeError {
                            expected: stringify!($t),
                            found: other.type_name(),
                        }),
                    }
                }
            }
        )+
    };
}

impl_field_type!(
    String => String,
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_matching_variant() {
        let value = Value::from(1000i64);
        assert_eq!(i64::try_from(value).unwrap(), 1000);
    }

    #[test]
    fn test_try_from_rejects_other_width() {
        let err = i32::try_from(Value::I64(1)).unwrap_err();
        assert_eq!(err.expected, "i32");
        assert_eq!(err.found, "i64");
        assert_eq!(err.to_string(), "expected i32 value, found i64");
    }

    #[test]
    fn test_to_json() {
        assert_eq!(Value::from("default").to_json(), r#""default""#);
        assert_eq!(Value::I16(-3).to_json(), "-3");
        assert_eq!(Value::Bool(true).to_json(), "true");
        assert_eq!(Value::F64(10000.555).to_json(), "10000.555");
        assert_eq!(Value::F32(1000.5).to_json(), "1000.5");
        assert_eq!(Value::F64(f64::NAN).to_json(), "null");
    }

    #[test]
    fn test_slot_writes_through() {
        let mut port = 80u16;
        if let Slot::U16(p) = port.slot() {
            *p = 8080;
        }
        assert_eq!(port, 8080);
        assert_eq!(port.value(), Value::U16(8080));
    }
}
