//! # Storage configuration
//!
//! [`StorageConfig`] controls how the factories behave and can carry named
//! schemas so that key declarations live next to the rest of an
//! application's settings:
//!
//! ```toml
//! duplicate_keys = "warn"   # or "ignore"
//!
//! [schemas.prefs]
//! theme = "string"
//! font_size = "number"
//! ```
//!
//! A missing or empty file is equivalent to [`StorageConfig::default`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use typestash_types::Schema;

/// Errors from loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid storage config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot serialize storage config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// What to do when a schema declares a key an earlier schema already claimed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateKeyPolicy {
    /// Log a warning carrying the `KeyAlreadyRegistered` error value.
    #[default]
    Warn,
    /// Record the collision on the accessor without logging it.
    Ignore,
}

/// Top-level storage configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub duplicate_keys: DuplicateKeyPolicy,
    /// Named schemas, looked up with [`StorageConfig::schema`].
    #[serde(default)]
    pub schemas: BTreeMap<String, Schema>,
}

impl StorageConfig {
    /// Builder method to set the duplicate-key policy.
    pub fn with_duplicate_keys(mut self, policy: DuplicateKeyPolicy) -> Self {
        self.duplicate_keys = policy;
        self
    }

    /// Builder method to register a named schema.
    pub fn with_schema(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.schemas.insert(name.into(), schema);
        self
    }

    pub fn schema(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
