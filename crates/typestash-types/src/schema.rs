//! Schema declarations: which [`TypeTag`] each key is stored under.
//!
//! A schema is a flat map; nested declarations are not supported. Schemas
//! can be built in code or loaded from TOML:
//!
//! ```toml
//! count = "number"
//! theme = "string"
//! last_seen = "date"
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tag::TypeTag;

/// Errors from loading a schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid schema: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A mapping from key name to its declared [`TypeTag`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    fields: BTreeMap<String, TypeTag>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: declare `key` with `tag`, replacing any earlier declaration.
    pub fn with(mut self, key: impl Into<String>, tag: TypeTag) -> Self {
        self.fields.insert(key.into(), tag);
        self
    }

    /// Parse a schema from a TOML table of `key = "tag"` entries.
    pub fn from_toml(s: &str) -> Result<Self, SchemaError> {
        Ok(toml::from_str(s)?)
    }

    /// The tag declared for `key`, if any.
    pub fn tag(&self, key: &str) -> Option<TypeTag> {
        self.fields.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Declared keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, TypeTag)> {
        self.fields.iter().map(|(k, t)| (k.as_str(), *t))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, TypeTag)> for Schema {
    fn from_iter<I: IntoIterator<Item = (K, TypeTag)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, t)| (k.into(), t)).collect(),
        }
    }
}
