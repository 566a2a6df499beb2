//! Binding environment entries onto a configuration struct

use std::collections::HashMap;

use crate::de::{self, DecodeReport};
use crate::environ::Environ;
use crate::field::{schema, StructConfig};
use crate::value::Value;

/// Update `config` in place from `NAME=VALUE` entries.
///
/// Each field whose tag names a variable present in `environ` is overwritten
/// by weak decoding; every other field keeps its value. Secret fields are
/// bound like any other. Calling twice with the same entries is a no-op the
/// second time. Never fails: malformed entries and values are skipped.
pub fn from_environ<C, I, S>(config: &mut C, environ: I)
where
    C: StructConfig,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    bind(config, environ);
}

/// Like [`from_environ`], returning what happened to each field.
pub fn bind<C, I, S>(config: &mut C, environ: I) -> DecodeReport
where
    C: StructConfig,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let environ = Environ::new(environ);
    let update: HashMap<String, Value> = schema::<C>(true)
        .into_iter()
        .filter(|field| field.tag.is_bindable())
        .filter_map(|field| {
            let value = environ.get(&field.tag.name)?;
            Some((field.name.to_string(), Value::from(value)))
        })
        .collect();

    tracing::debug!(matched = update.len(), "binding environment to config");
    de::decode(&update, config)
}
