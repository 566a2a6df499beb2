//! Weakly typed decoding of values into struct fields
//!
//! Every (source, target) pair has a conversion; conversions that cannot
//! succeed for a given input report [`DecodeError`] and leave the field as it
//! was. Nothing in this module panics or propagates errors past [`decode`].
//!
//! | target \ source | `String` | `Bool` | integer | float |
//! |---|---|---|---|---|
//! | `String` | as is | `"1"` / `"0"` | decimal | shortest decimal |
//! | integer | base-10 parse (`""` is 0), wrapped to width | 1 / 0 | wrapped to width | truncated, wrapped |
//! | float | decimal parse (`""` is 0) | 1 / 0 | cast | cast |
//! | `bool` | [`parse_bool`] | as is | `!= 0` | `!= 0` |

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::DecodeError;
use crate::field::{fields_mut, StructConfig};
use crate::value::{Slot, Value};

/// Outcome of decoding into a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// The field was overwritten.
    Set,
    /// No update targeted the field.
    Unchanged,
    /// An update targeted the field but could not be coerced; the field kept its value.
    Malformed(DecodeError),
}

/// Per-field outcomes of one [`decode`] call, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodeReport {
    outcomes: Vec<(&'static str, Decoded)>,
}

impl DecodeReport {
    /// Outcome for the named field, if it exists.
    pub fn get(&self, field: &str) -> Option<&Decoded> {
        self.outcomes
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, outcome)| outcome)
    }

    /// Names of fields that were overwritten.
    pub fn set(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, Decoded::Set))
            .map(|(name, _)| *name)
    }

    /// Fields whose update was rejected, with the reason.
    pub fn malformed(&self) -> impl Iterator<Item = (&'static str, &DecodeError)> + '_ {
        self.outcomes.iter().filter_map(|(name, outcome)| match outcome {
            Decoded::Malformed(err) => Some((*name, err)),
            _ => None,
        })
    }

    /// Whether every targeted field accepted its update.
    pub fn is_clean(&self) -> bool {
        self.malformed().next().is_none()
    }
}

/// Apply `update` (field name to value) onto `config`.
///
/// Fields absent from `update` are left untouched, names in `update` that match
/// no field are ignored, and secret fields are written like any other.
pub fn decode<C: StructConfig>(update: &HashMap<String, Value>, config: &mut C) -> DecodeReport {
    let mut report = DecodeReport::default();
    for field in fields_mut(config, true) {
        let outcome = match update.get(field.name) {
            None => Decoded::Unchanged,
            Some(value) => match assign(field.handle, value) {
                Ok(()) => {
                    tracing::trace!(field = field.name, "field updated");
                    Decoded::Set
                }
                Err(err) => {
                    tracing::debug!(
                        field = field.name,
                        error = %err,
                        "ignoring value that does not fit field"
                    );
                    Decoded::Malformed(err)
                }
            },
        };
        report.outcomes.push((field.name, outcome));
    }
    report
}

/// Coerce `value` into the field behind `slot`.
///
/// On error the field is not written.
pub fn assign(slot: Slot<'_>, value: &Value) -> Result<(), DecodeError> {
    // Integer targets wrap to their width: `as` from i128 keeps the low bits.
    match slot {
        Slot::String(s) => *s = to_text(value),
        Slot::Bool(b) => *b = to_bool(value)?,
        Slot::I8(n) => *n = to_integer(value)? as i8,
        Slot::I16(n) => *n = to_integer(value)? as i16,
        Slot::I32(n) => *n = to_integer(value)? as i32,
        Slot::I64(n) => *n = to_integer(value)? as i64,
        Slot::Isize(n) => *n = to_integer(value)? as isize,
        Slot::U8(n) => *n = to_integer(value)? as u8,
        Slot::U16(n) => *n = to_integer(value)? as u16,
        Slot::U32(n) => *n = to_integer(value)? as u32,
        Slot::U64(n) => *n = to_integer(value)? as u64,
        Slot::Usize(n) => *n = to_integer(value)? as usize,
        Slot::F32(f) => {
            *f = match value {
                // Parse at target precision to avoid double rounding.
                Value::String(s) => parse_number::<f32>(s)?,
                other => to_float(other)? as f32,
            }
        }
        Slot::F64(f) => *f = to_float(value)?,
    }
    Ok(())
}

/// Parse a boolean.
///
/// ASCII case-insensitive: `1`, `t`, `true` are true; `0`, `f`, `false` and the
/// empty string are false. Anything else, including `yes` and `2`, is rejected.
pub fn parse_bool(s: &str) -> Result<bool, DecodeError> {
    if s.is_empty() {
        return Ok(false);
    }
    match s.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Ok(true),
        "0" | "f" | "false" => Ok(false),
        _ => Err(DecodeError::InvalidBool),
    }
}

fn parse_number<T>(s: &str) -> Result<T, DecodeError>
where
    T: FromStr + Default,
    DecodeError: From<T::Err>,
{
    if s.is_empty() {
        return Ok(T::default());
    }
    Ok(s.parse::<T>()?)
}

/// Parse base-10 integer text, wrapping modulo 2^128 instead of overflowing.
///
/// Only text that is not an optionally signed run of ASCII digits is rejected.
fn parse_integer(s: &str) -> Result<i128, DecodeError> {
    if s.is_empty() {
        return Ok(0);
    }
    let (negative, digits) = match s.as_bytes()[0] {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        // Not a digit run, so the std parser reports why.
        return Ok(s.parse::<i128>()?);
    }
    let n = digits.bytes().fold(0i128, |acc, b| {
        acc.wrapping_mul(10).wrapping_add(i128::from(b - b'0'))
    });
    Ok(if negative { n.wrapping_neg() } else { n })
}

fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => String::from(if *b { "1" } else { "0" }),
        Value::I8(n) => n.to_string(),
        Value::I16(n) => n.to_string(),
        Value::I32(n) => n.to_string(),
        Value::I64(n) => n.to_string(),
        Value::Isize(n) => n.to_string(),
        Value::U8(n) => n.to_string(),
        Value::U16(n) => n.to_string(),
        Value::U32(n) => n.to_string(),
        Value::U64(n) => n.to_string(),
        Value::Usize(n) => n.to_string(),
        Value::F32(f) => f.to_string(),
        Value::F64(f) => f.to_string(),
    }
}

fn to_integer(value: &Value) -> Result<i128, DecodeError> {
    Ok(match value {
        Value::String(s) => parse_integer(s)?,
        Value::Bool(b) => i128::from(*b),
        Value::I8(n) => i128::from(*n),
        Value::I16(n) => i128::from(*n),
        Value::I32(n) => i128::from(*n),
        Value::I64(n) => i128::from(*n),
        Value::Isize(n) => *n as i128,
        Value::U8(n) => i128::from(*n),
        Value::U16(n) => i128::from(*n),
        Value::U32(n) => i128::from(*n),
        Value::U64(n) => i128::from(*n),
        Value::Usize(n) => *n as i128,
        // Truncates toward zero; NaN becomes 0.
        Value::F32(f) => *f as i128,
        Value::F64(f) => *f as i128,
    })
}

fn to_float(value: &Value) -> Result<f64, DecodeError> {
    Ok(match value {
        Value::String(s) => parse_number::<f64>(s)?,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::I8(n) => f64::from(*n),
        Value::I16(n) => f64::from(*n),
        Value::I32(n) => f64::from(*n),
        Value::I64(n) => *n as f64,
        Value::Isize(n) => *n as f64,
        Value::U8(n) => f64::from(*n),
        Value::U16(n) => f64::from(*n),
        Value::U32(n) => f64::from(*n),
        Value::U64(n) => *n as f64,
        Value::Usize(n) => *n as f64,
        Value::F32(f) => f64::from(*f),
        Value::F64(f) => *f,
    })
}

fn to_bool(value: &Value) -> Result<bool, DecodeError> {
    Ok(match value {
        Value::String(s) => parse_bool(s)?,
        Value::Bool(b) => *b,
        Value::F32(f) => *f != 0.0,
        Value::F64(f) => *f != 0.0,
        other => to_integer(other)? != 0,
    })
}
