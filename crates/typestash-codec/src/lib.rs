//! The Typestash coercion engine.
//!
//! Every value lives in the backing store as a single string. This crate
//! converts between those strings and [`StoredValue`]s:
//!
//! - [`decode`] -- raw string (or absence) plus the key's [`TypeTag`] to a
//!   typed value, or a [`StorageError`] naming the key.
//! - [`encode`] -- typed value to its storage string. Total: never fails.
//! - [`decode_as`] -- decode a JSON-tagged key straight into a caller type.
//!
//! # Decode rules
//!
//! | Tag | Accepts | Failure |
//! |-----|---------|---------|
//! | `Number` | numeric literal, including `Infinity` | `UnexpectedNumber` |
//! | `Date` | numeric literal (ms since epoch; non-finite gives an invalid date) | `UnexpectedDate` |
//! | `Boolean` | anything; `"false"` and `""` are false | none |
//! | `Object` | any JSON text | `UnexpectedObject` |
//! | `Array` | JSON text holding an array | `UnexpectedObject` |
//! | `String`, `Unknown` | anything, unchanged | none |
//!
//! An absent raw value fails with `KeyUndefined` for every tag.
//!
//! [`StoredValue`]: typestash_types::StoredValue
//! [`TypeTag`]: typestash_types::TypeTag
//! [`StorageError`]: typestash_types::StorageError

pub mod decode;
pub mod encode;
pub mod number;

pub use decode::{decode, decode_as};
pub use encode::encode;
pub use number::{format_number, parse_number};
