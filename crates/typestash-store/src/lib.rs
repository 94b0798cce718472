//! Typed, schema-bound access to flat key/value storage.
//!
//! Callers declare once which [`TypeTag`] each key holds and receive a
//! [`TypedStorage`] that encodes on write and decodes, with validation, on
//! read. Reads return [`StorageResult`]; binding to a backend the runtime
//! does not provide fails with [`SetupError`].
//!
//! # Example
//!
//! ```
//! use typestash_store::{Schema, Storages, TypeTag};
//!
//! let storages = Storages::in_memory();
//! let prefs = storages
//!     .use_local_storage(Schema::new().with("count", TypeTag::Number))
//!     .unwrap();
//!
//! prefs.set_item("count", 42);
//! assert_eq!(prefs.get_item("count").unwrap().as_f64(), Some(42.0));
//! ```
//!
//! # Modules
//!
//! - [`traits`] -- The [`StorageBackend`] collaborator interface
//! - [`memory`] -- [`InMemoryStorage`] for tests and non-browser hosts
//! - `web` -- `WebStorage` over `window.localStorage` / `window.sessionStorage`
//!   (feature `web`, `wasm32` only)
//! - [`registry`] -- [`KeyRegistry`], the duplicate-key guard
//! - [`accessor`] -- [`TypedStorage`]
//! - [`service`] -- [`StorageService`] and [`Storages`], the factories
//! - [`config`] -- [`StorageConfig`]
//!
//! # Design Rules
//!
//! 1. A key's tag is fixed when the accessor is bound.
//! 2. Every read outcome, success or failure, comes back as a `Result`.
//! 3. Writes, removals and clears are infallible.
//! 4. `clear` empties the whole backend, not just the schema's keys.
//! 5. Key collisions across schemas are reported, never rejected.

pub mod accessor;
pub mod config;
pub mod memory;
pub mod registry;
pub mod service;
pub mod traits;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub mod web;

pub use accessor::TypedStorage;
pub use config::{ConfigError, DuplicateKeyPolicy, StorageConfig};
pub use memory::InMemoryStorage;
pub use registry::KeyRegistry;
pub use service::{StorageService, Storages};
pub use traits::StorageBackend;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::WebStorage;

// Re-export the shared vocabulary so callers need a single dependency.
pub use typestash_types::{
    BackendKind, ErrorCode, KeyCollision, Schema, SetupError, StorageError, StorageResult,
    StoredValue, Timestamp, TypeTag,
};
