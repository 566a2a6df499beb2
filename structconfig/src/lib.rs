//! Typed configuration structs bound to `NAME=VALUE` environment entries
//!
//! `structconfig` treats one annotated struct as the single source of truth for
//! a program's runtime configuration. Field defaults come from the value you
//! construct, the environment overrides tagged fields, and the struct can be
//! exported for logging without leaking fields marked secret.
//!
//! # Features
//!
//! - **Declarative**: field registration with `#[derive(StructConfig)]`
//! - **Weak typing**: environment text is coerced into `String`, `bool`,
//!   integers of any width and floats, never failing the whole load
//! - **Secret-aware export**: [`slice`], [`map`] and [`string`] omit secret
//!   fields unless asked for them
//! - **Injected environment**: nothing reads the process environment behind
//!   your back; pass [`process_environ()`] or any list of entries
//!
//! # Example
//!
//! ```rust
//! use structconfig::StructConfig;
//!
//! #[derive(Debug, StructConfig)]
//! struct Config {
//!     #[env = "DATABASE_URL"]
//!     pub database_url: String,
//!
//!     #[env = "MAX_CONNECTIONS"]
//!     pub max_connections: u32,
//!
//!     #[env = "API_KEY,secret"]
//!     pub api_key: String,
//! }
//!
//! let mut config = Config {
//!     database_url: "postgres://localhost/db".to_string(),
//!     max_connections: 10,
//!     api_key: String::new(),
//! };
//!
//! structconfig::from_environ(&mut config, ["MAX_CONNECTIONS=42", "API_KEY=hunter2"]);
//! assert_eq!(config.max_connections, 42);
//! assert_eq!(config.api_key, "hunter2");
//!
//! let exported = structconfig::string(&config, false);
//! assert_eq!(exported, r#"database_url="postgres://localhost/db", max_connections=42"#);
//! ```
//!
//! # Tags
//!
//! A tag has the grammar `NAME[,secret]`:
//!
//! ```rust
//! # use structconfig::StructConfig;
//! #[derive(StructConfig)]
//! struct Config {
//!     // Bound from PORT
//!     #[env = "PORT"]
//!     pub port: u16,
//!
//!     // Same thing, structured form
//!     #[env(name = "TOKEN", secret)]
//!     pub token: String,
//!
//!     // No tag: exported, never bound
//!     pub build: String,
//! }
//! ```
//!
//! ## `#[structconfig(prefix = "APP_")]`
//!
//! Prepend a prefix to every tagged variable name.
//!
//! ```rust
//! # use structconfig::StructConfig;
//! #[derive(StructConfig)]
//! #[structconfig(prefix = "APP_")]
//! struct Config {
//!     // Bound from APP_PORT
//!     #[env = "PORT"]
//!     pub port: u16,
//! }
//! ```
//!
//! # Value Coercion
//!
//! - Integers parse as base 10 and wrap to the field's width (`100000` into
//!   an `i16` is `-31072`)
//! - Booleans accept `1`, `t`, `true`, `0`, `f`, `false` in any case
//! - An empty entry (`DEBUG=`) is read as `1`, so it turns flags on
//! - A value that cannot be coerced leaves the field unchanged
//!
//! See [`de`] for the full table.

mod bind;
pub mod de;
mod environ;
mod error;
mod export;
mod field;
mod tag;
mod value;

pub use bind::{bind, from_environ};
pub use environ::{process_environ, Environ, EMPTY_VALUE};
pub use error::{DecodeError, ValueTypeError};
pub use export::{map, slice, string, Entry};
pub use field::{fields, fields_mut, schema, Field, FieldSchema, StructConfig};
pub use structconfig_derive::StructConfig;
pub use tag::Tag;
pub use value::{FieldType, Slot, Value};
