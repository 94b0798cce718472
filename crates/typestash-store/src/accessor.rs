use std::fmt;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use tracing::debug;
use typestash_codec::{decode, decode_as, encode};
use typestash_types::{
    BackendKind, KeyCollision, Schema, StorageResult, StoredValue, TypeTag,
};

use crate::traits::StorageBackend;

/// A schema-bound, typed view over one storage backend.
///
/// Created by [`StorageService::open`](crate::StorageService::open). The
/// schema is fixed for the accessor's lifetime, so a key always decodes
/// with the tag it was bound with. Keys the schema does not declare decode
/// as raw strings.
#[derive(Clone)]
pub struct TypedStorage {
    kind: BackendKind,
    schema: Schema,
    backend: Rc<dyn StorageBackend>,
    collisions: Vec<KeyCollision>,
}

impl TypedStorage {
    pub(crate) fn new(
        kind: BackendKind,
        schema: Schema,
        backend: Rc<dyn StorageBackend>,
        collisions: Vec<KeyCollision>,
    ) -> Self {
        Self {
            kind,
            schema,
            backend,
            collisions,
        }
    }

    /// Read and decode the value stored under `key`.
    ///
    /// Fails with `KeyUndefined` when nothing is stored, or with the
    /// tag-specific error when the stored string does not decode.
    pub fn get_item(&self, key: &str) -> StorageResult<StoredValue> {
        let raw = self.backend.get(key);
        decode(key, self.tag(key), raw.as_deref())
            .inspect_err(|err| debug!(kind = %self.kind, key, code = %err.code(), "typed read failed"))
    }

    /// Read a key declared `Object` or `Array` and deserialize it into `T`.
    pub fn get_object<T: DeserializeOwned>(&self, key: &str) -> StorageResult<T> {
        let raw = self.backend.get(key);
        decode_as(key, self.tag(key), raw.as_deref())
            .inspect_err(|err| debug!(kind = %self.kind, key, code = %err.code(), "typed read failed"))
    }

    /// Encode `value` and write it under `key`.
    pub fn set_item(&self, key: &str, value: impl Into<StoredValue>) {
        self.backend.set(key, &encode(&value.into()));
    }

    /// Remove `key` from the backend. Removing an absent key is a no-op.
    pub fn remove_item(&self, key: &str) {
        self.backend.remove(key);
    }

    /// Remove every key in the backend, including keys this accessor's
    /// schema does not declare.
    pub fn clear(&self) {
        self.backend.clear();
    }

    pub fn kind(&self) -> BackendKind {
        self.kind
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Keys of this schema that an earlier schema had already claimed.
    pub fn collisions(&self) -> &[KeyCollision] {
        &self.collisions
    }

    fn tag(&self, key: &str) -> TypeTag {
        self.schema.tag(key).unwrap_or(TypeTag::Unknown)
    }
}

impl fmt::Debug for TypedStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedStorage")
            .field("kind", &self.kind)
            .field("schema", &self.schema)
            .field("collisions", &self.collisions.len())
            .finish()
    }
}
