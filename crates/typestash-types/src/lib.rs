//! Foundation types for Typestash.
//!
//! Typestash is a typed access layer over flat, string-keyed, string-valued
//! key/value stores such as the browser's `localStorage` and
//! `sessionStorage`. This crate holds the vocabulary every other Typestash
//! crate shares.
//!
//! # Key Types
//!
//! - [`TypeTag`] -- Declared semantic type of a key
//! - [`Schema`] -- Mapping from key name to [`TypeTag`]
//! - [`StoredValue`] -- A decoded, typed value
//! - [`Timestamp`] -- Millisecond date value, possibly invalid
//! - [`BackendKind`] -- Page-scoped or session-scoped backend
//! - [`ErrorCode`], [`StorageError`], [`SetupError`], [`KeyCollision`] -- The error taxonomy

pub mod error;
pub mod schema;
pub mod tag;
pub mod value;

pub use error::{BackendKind, ErrorCode, KeyCollision, SetupError, StorageError, StorageResult};
pub use schema::{Schema, SchemaError};
pub use tag::{TypeTag, UnknownTagError};
pub use value::{StoredValue, Timestamp};
