//! # Browser storage backend
//!
//! [`WebStorage`] is the [`StorageBackend`] used on the **web platform**. It
//! wraps `window.localStorage` or `window.sessionStorage` through
//! [`web_sys::Storage`].
//!
//! The handle is looked up once, at construction. Browsers can withhold
//! storage (disabled cookies, sandboxed frames, some private modes); the
//! backend then reports itself unavailable and binding an accessor fails
//! with `BackendNotSupported`.
//!
//! ## Error handling
//!
//! Storage calls can throw (quota exceeded, security errors). The trait is
//! infallible, so exceptions are logged at WARN and swallowed: failed reads
//! report the key as absent, failed writes leave the store unchanged.

use tracing::warn;
use typestash_types::BackendKind;
use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::traits::StorageBackend;

/// `window.localStorage` / `window.sessionStorage` backend.
#[derive(Clone, Debug)]
pub struct WebStorage {
    kind: BackendKind,
    storage: Option<Storage>,
}

impl WebStorage {
    /// Bind to `window.localStorage`.
    pub fn local() -> Self {
        Self::for_kind(BackendKind::Local)
    }

    /// Bind to `window.sessionStorage`.
    pub fn session() -> Self {
        Self::for_kind(BackendKind::Session)
    }

    pub fn for_kind(kind: BackendKind) -> Self {
        let storage = web_sys::window().and_then(|window| {
            let handle = match kind {
                BackendKind::Local => window.local_storage(),
                BackendKind::Session => window.session_storage(),
            };
            handle.unwrap_or_else(|err| {
                log_failure(kind, "open", "", &err);
                None
            })
        });
        Self { kind, storage }
    }

    pub fn kind(&self) -> BackendKind {
        self.kind
    }
}

fn log_failure(kind: BackendKind, op: &str, key: &str, err: &JsValue) {
    warn!(kind = %kind, op, key, error = ?err, "web storage call failed");
}

impl StorageBackend for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        storage.get_item(key).unwrap_or_else(|err| {
            log_failure(self.kind, "get", key, &err);
            None
        })
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.set_item(key, value) {
                log_failure(self.kind, "set", key, &err);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.remove_item(key) {
                log_failure(self.kind, "remove", key, &err);
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.clear() {
                log_failure(self.kind, "clear", "", &err);
            }
        }
    }

    fn len(&self) -> usize {
        self.storage
            .as_ref()
            .and_then(|storage| storage.length().ok())
            .map_or(0, |n| n as usize)
    }

    fn is_available(&self) -> bool {
        self.storage.is_some()
    }
}
