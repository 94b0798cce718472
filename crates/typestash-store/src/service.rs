//! Construction factories.
//!
//! A [`StorageService`] owns everything tied to one backend kind: the
//! backend handle (absent when the runtime does not provide it), the
//! [`KeyRegistry`] guarding against key reuse, and the configuration.
//! [`Storages`] pairs the page-scoped and session-scoped services and is
//! meant to be created once at start-up and kept for the life of the
//! process.

use std::rc::Rc;

use tracing::{debug, warn};
use typestash_types::{BackendKind, ErrorCode, Schema, SetupError};

use crate::accessor::TypedStorage;
use crate::config::{DuplicateKeyPolicy, StorageConfig};
use crate::memory::InMemoryStorage;
use crate::registry::KeyRegistry;
use crate::traits::StorageBackend;

/// Factory for accessors bound to one backend kind.
pub struct StorageService {
    kind: BackendKind,
    backend: Option<Rc<dyn StorageBackend>>,
    registry: KeyRegistry,
    config: StorageConfig,
}

impl StorageService {
    /// A service over `backend`, or over nothing when the runtime lacks it.
    pub fn new(kind: BackendKind, backend: Option<Rc<dyn StorageBackend>>) -> Self {
        Self {
            kind,
            backend,
            registry: KeyRegistry::new(kind),
            config: StorageConfig::default(),
        }
    }

    pub fn with_config(mut self, config: StorageConfig) -> Self {
        self.config = config;
        self
    }

    pub fn kind(&self) -> BackendKind {
        self.kind
    }

    pub fn registry(&self) -> &KeyRegistry {
        &self.registry
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Bind `schema` to this service's backend.
    ///
    /// Fails with [`SetupError::BackendNotSupported`] before touching the
    /// registry when the backend is missing or reports itself unavailable.
    /// Otherwise every key is claimed; keys claimed by an earlier schema are
    /// logged per the duplicate-key policy and recorded on the accessor,
    /// but never prevent binding.
    pub fn open(&self, schema: Schema) -> Result<TypedStorage, SetupError> {
        let backend = self
            .backend
            .as_ref()
            .filter(|backend| backend.is_available())
            .cloned()
            .ok_or(SetupError::BackendNotSupported { kind: self.kind })?;

        let collisions = self.registry.claim(schema.keys());
        if self.config.duplicate_keys == DuplicateKeyPolicy::Warn {
            for collision in &collisions {
                warn!(
                    code = %ErrorCode::KeyAlreadyRegistered,
                    kind = %collision.kind,
                    key = %collision.key,
                    "{}",
                    collision.to_error()
                );
            }
        }

        debug!(kind = %self.kind, keys = schema.len(), collisions = collisions.len(), "typed storage bound");
        Ok(TypedStorage::new(self.kind, schema, backend, collisions))
    }

    /// Bind the schema registered under `name` in this service's config.
    ///
    /// Returns `Ok(None)` when no such schema is configured.
    pub fn open_named(&self, name: &str) -> Result<Option<TypedStorage>, SetupError> {
        match self.config.schema(name) {
            Some(schema) => self.open(schema.clone()).map(Some),
            None => Ok(None),
        }
    }
}

impl std::fmt::Debug for StorageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageService")
            .field("kind", &self.kind)
            .field("available", &self.backend.as_ref().is_some_and(|b| b.is_available()))
            .field("claimed_keys", &self.registry.len())
            .finish()
    }
}

/// The page-scoped and session-scoped factories of one process.
#[derive(Debug)]
pub struct Storages {
    local: StorageService,
    session: StorageService,
}

impl Storages {
    /// Pair the given backend handles. `None` marks a backend the runtime
    /// does not provide.
    pub fn new(
        local: Option<Rc<dyn StorageBackend>>,
        session: Option<Rc<dyn StorageBackend>>,
    ) -> Self {
        Self {
            local: StorageService::new(BackendKind::Local, local),
            session: StorageService::new(BackendKind::Session, session),
        }
    }

    /// Fresh in-memory backends for both kinds.
    pub fn in_memory() -> Self {
        Self::new(
            Some(Rc::new(InMemoryStorage::new())),
            Some(Rc::new(InMemoryStorage::new())),
        )
    }

    /// Bind to the browser's `window.localStorage` and `window.sessionStorage`.
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    pub fn from_window() -> Self {
        use crate::web::WebStorage;

        Self::new(
            Some(Rc::new(WebStorage::local())),
            Some(Rc::new(WebStorage::session())),
        )
    }

    /// Apply `config` to both services.
    pub fn with_config(self, config: StorageConfig) -> Self {
        Self {
            local: self.local.with_config(config.clone()),
            session: self.session.with_config(config),
        }
    }

    pub fn local(&self) -> &StorageService {
        &self.local
    }

    pub fn session(&self) -> &StorageService {
        &self.session
    }

    pub fn service(&self, kind: BackendKind) -> &StorageService {
        match kind {
            BackendKind::Local => &self.local,
            BackendKind::Session => &self.session,
        }
    }

    /// Bind `schema` to page-scoped storage.
    pub fn use_local_storage(&self, schema: Schema) -> Result<TypedStorage, SetupError> {
        self.local.open(schema)
    }

    /// Bind `schema` to session-scoped storage.
    pub fn use_session_storage(&self, schema: Schema) -> Result<TypedStorage, SetupError> {
        self.session.open(schema)
    }
}
