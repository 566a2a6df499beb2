//! Read-only export views of a configuration struct.
//!
//! All views walk fields in declaration order and omit secret fields unless
//! `with_secrets` is set.

use std::collections::HashMap;

use crate::field::{fields, StructConfig};
use crate::value::Value;

/// One field in a [`slice`] view.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Field name as declared.
    pub name: &'static str,
    /// Current value.
    pub value: Value,
    /// Environment variable the field binds to, `""` if none.
    pub tag: String,
}

/// Fields as ordered `{name, value, tag}` entries.
pub fn slice<C: StructConfig>(config: &C, with_secrets: bool) -> Vec<Entry> {
    fields(config, with_secrets)
        .into_iter()
        .map(|field| Entry {
            name: field.name,
            value: field.handle,
            tag: field.tag.name,
        })
        .collect()
}

/// Fields as a name to value map.
pub fn map<C: StructConfig>(config: &C, with_secrets: bool) -> HashMap<&'static str, Value> {
    fields(config, with_secrets)
        .into_iter()
        .map(|field| (field.name, field.handle))
        .collect()
}

/// Fields rendered as `name=<json>` pairs joined with `", "`.
pub fn string<C: StructConfig>(config: &C, with_secrets: bool) -> String {
    fields(config, with_secrets)
        .iter()
        .map(|field| format!("{}={}", field.name, field.handle.to_json()))
        .collect::<Vec<_>>()
        .join(", ")
}
