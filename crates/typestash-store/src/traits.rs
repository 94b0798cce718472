//! The [`StorageBackend`] trait: the flat string store accessors write through.

/// A flat, string-keyed, string-valued key/value store.
///
/// Backends are durable and synchronous, and every operation completes
/// immediately. The interface is infallible: writes are assumed to
/// succeed, and a backend that cannot service a read reports the key as
/// absent. Implementations are not required to be `Send` or `Sync`;
/// browser storage handles are neither.
pub trait StorageBackend {
    /// Read the string stored under `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str);

    /// Remove every key in the backend.
    fn clear(&self);

    /// Number of keys currently stored.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the runtime actually provides this backend.
    ///
    /// Checked once when an accessor is bound.
    fn is_available(&self) -> bool {
        true
    }
}
