//! Field registration and walking.
//!
//! `#[derive(StructConfig)]` registers each field of a struct as a
//! [`FieldSchema`] alongside read and write accessors. The walkers here zip the
//! schema with those accessors into [`Field`] descriptors, in declaration
//! order, filtering out secret fields on request.

use crate::tag::Tag;
use crate::value::{Slot, Value};

/// Static description of one field: its name and raw `env` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    /// Field name as declared.
    pub name: &'static str,
    /// Raw tag text, `""` for untagged fields.
    pub tag: &'static str,
}

/// A configuration struct whose fields can be walked, bound and exported.
///
/// Implement with `#[derive(StructConfig)]`. `FIELDS`, `values` and `slots`
/// must all list the same fields in the same order.
pub trait StructConfig {
    /// Prefix prepended to every non-empty target name.
    const PREFIX: &'static str = "";

    /// Field schema in declaration order.
    const FIELDS: &'static [FieldSchema];

    /// Current field values in declaration order.
    fn values(&self) -> Vec<Value>;

    /// Write handles to every field in declaration order.
    fn slots(&mut self) -> Vec<Slot<'_>>;
}

/// Field descriptor produced by a walk.
///
/// `H` is the value handle: a [`Value`] for read-only walks, a [`Slot`] for
/// mutable ones.
#[derive(Debug)]
pub struct Field<H> {
    /// Field name as declared.
    pub name: &'static str,
    /// Raw tag text.
    pub raw_tag: &'static str,
    /// Parsed tag with the struct prefix applied.
    pub tag: Tag,
    /// Value handle.
    pub handle: H,
}

fn walk<C: StructConfig, H>(handles: Vec<H>, with_secrets: bool) -> Vec<Field<H>> {
    C::FIELDS
        .iter()
        .zip(handles)
        .filter_map(|(schema, handle)| {
            let tag = Tag::parse(schema.tag).prefixed(C::PREFIX);
            if tag.secret && !with_secrets {
                return None;
            }
            Some(Field {
                name: schema.name,
                raw_tag: schema.tag,
                tag,
                handle,
            })
        })
        .collect()
}

/// Walk the schema of `C` without touching any instance.
///
/// Secret fields are omitted entirely unless `with_secrets` is set.
pub fn schema<C: StructConfig>(with_secrets: bool) -> Vec<Field<()>> {
    walk::<C, ()>(vec![(); C::FIELDS.len()], with_secrets)
}

/// Walk `config` read-only, in declaration order.
///
/// Secret fields are omitted entirely unless `with_secrets` is set.
pub fn fields<C: StructConfig>(config: &C, with_secrets: bool) -> Vec<Field<Value>> {
    walk::<C, _>(config.values(), with_secrets)
}

/// Walk `config` with write handles, in declaration order.
///
/// Secret fields are omitted entirely unless `with_secrets` is set.
pub fn fields_mut<C: StructConfig>(config: &mut C, with_secrets: bool) -> Vec<Field<Slot<'_>>> {
    walk::<C, _>(config.slots(), with_secrets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::FieldType;

    // Hand-written impl, mirrors what the derive generates.
    struct Manual {
        host: String,
        port: u16,
        token: String,
    }

    impl StructConfig for Manual {
        const PREFIX: &'static str = "APP_";
        const FIELDS: &'static [FieldSchema] = &[
            FieldSchema { name: "host", tag: "HOST" },
            FieldSchema { name: "port", tag: "" },
            FieldSchema { name: "token", tag: "TOKEN,secret" },
        ];

        fn values(&self) -> Vec<Value> {
            vec![self.host.value(), self.port.value(), self.token.value()]
        }

        fn slots(&mut self) -> Vec<Slot<'_>> {
            vec![self.host.slot(), self.port.slot(), self.token.slot()]
        }
    }

    fn manual() -> Manual {
        Manual {
            host: "localhost".to_string(),
            port: 80,
            token: "hunter2".to_string(),
        }
    }

    #[test]
    fn test_fields_declaration_order() {
        let names: Vec<_> = fields(&manual(), true).iter().map(|f| f.name).collect();
        assert_eq!(names, ["host", "port", "token"]);
    }

    #[test]
    fn test_fields_hide_secrets() {
        let names: Vec<_> = fields(&manual(), false).iter().map(|f| f.name).collect();
        assert_eq!(names, ["host", "port"]);
    }

    #[test]
    fn test_fields_apply_prefix() {
        let walked = fields(&manual(), true);
        assert_eq!(walked[0].tag.name, "APP_HOST");
        assert_eq!(walked[0].raw_tag, "HOST");
        assert_eq!(walked[1].tag.name, "");
        assert_eq!(walked[2].tag.name, "APP_TOKEN");
        assert!(walked[2].tag.secret);
    }

    #[test]
    fn test_schema_matches_fields() {
        let names: Vec<_> = schema::<Manual>(false).iter().map(|f| f.name).collect();
        assert_eq!(names, ["host", "port"]);
        assert_eq!(schema::<Manual>(true).len(), 3);
    }

    #[test]
    fn test_fields_mut_writes_through() {
        let mut config = manual();
        for field in fields_mut(&mut config, true) {
            if let Slot::String(s) = field.handle {
                s.push('!');
            }
        }
        assert_eq!(config.host, "localhost!");
        assert_eq!(config.token, "hunter2!");
        assert_eq!(config.port, 80);
    }

    #[test]
    fn test_fields_mut_hide_secrets() {
        let mut config = manual();
        let names: Vec<_> = fields_mut(&mut config, false)
            .iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, ["host", "port"]);
    }
}
