//! Parsing of `env` tags.
//!
//! A tag has the grammar `targetName[,secret]`. The first comma-separated
//! segment names the environment variable, the second marks the field as
//! secret when it is exactly `secret`. Further segments are ignored.

/// Parsed form of a raw `env` tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    /// Environment variable the field binds to. Empty for untagged fields.
    pub name: String,

    /// Whether the field is hidden from export views unless secrets are requested.
    pub secret: bool,
}

impl Tag {
    /// Parse a raw tag. Every input, including the empty string, yields a tag.
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split(',');
        let name = parts.next().unwrap_or_default().to_string();
        let secret = parts.next() == Some("secret");
        Self { name, secret }
    }

    /// Prepend `prefix` to the target name.
    ///
    /// An empty target name stays empty so untagged fields remain unbindable.
    pub fn prefixed(mut self, prefix: &str) -> Self {
        if !self.name.is_empty() && !prefix.is_empty() {
            self.name.insert_str(0, prefix);
        }
        self
    }

    /// Whether this tag can ever match an environment entry.
    pub fn is_bindable(&self) -> bool {
        !self.name.is_empty()
    }
}
