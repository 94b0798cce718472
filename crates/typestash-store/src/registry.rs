//! The duplicate-key guard.
//!
//! One [`KeyRegistry`] exists per backend kind. Each time an accessor is
//! bound, its schema's keys are claimed; keys that an earlier schema already
//! claimed come back as [`KeyCollision`]s. Collisions are diagnostics only.
//! The registry never shrinks and lives as long as its owning service.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use typestash_types::{BackendKind, KeyCollision};

/// Set of keys claimed by accessors bound to one backend kind.
#[derive(Debug)]
pub struct KeyRegistry {
    kind: BackendKind,
    claimed: Mutex<HashSet<String>>,
}

impl KeyRegistry {
    pub fn new(kind: BackendKind) -> Self {
        Self {
            kind,
            claimed: Mutex::new(HashSet::new()),
        }
    }

    pub fn kind(&self) -> BackendKind {
        self.kind
    }

    /// Claim every key in `keys`, returning one collision per key that was
    /// already claimed.
    pub fn claim<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> Vec<KeyCollision> {
        let mut claimed = self.claimed.lock().unwrap_or_else(PoisonError::into_inner);
        keys.into_iter()
            .filter(|key| !claimed.insert((*key).to_owned()))
            .map(|key| KeyCollision::new(self.kind, key))
            .collect()
    }

    pub fn is_claimed(&self, key: &str) -> bool {
        self.claimed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(key)
    }

    /// Number of distinct keys claimed so far.
    pub fn len(&self) -> usize {
        self.claimed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typestash_types::ErrorCode;

    #[test]
    fn first_claim_has_no_collisions() {
        let registry = KeyRegistry::new(BackendKind::Local);
        assert!(registry.claim(["a", "b"]).is_empty());
        assert!(registry.is_claimed("a"));
        assert!(registry.is_claimed("b"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn repeated_key_collides_once_per_claim() {
        let registry = KeyRegistry::new(BackendKind::Session);
        registry.claim(["theme"]);

        let collisions = registry.claim(["theme", "lang"]);
        assert_eq!(collisions, vec![KeyCollision::new(BackendKind::Session, "theme")]);
        assert_eq!(collisions[0].to_error().code(), ErrorCode::KeyAlreadyRegistered);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn registry_only_grows() {
        let registry = KeyRegistry::new(BackendKind::Local);
        registry.claim(["x"]);
        assert_eq!(registry.claim(["x"]).len(), 1);
        assert_eq!(registry.claim(["x"]).len(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn kinds_are_independent() {
        let local = KeyRegistry::new(BackendKind::Local);
        let session = KeyRegistry::new(BackendKind::Session);
        local.claim(["k"]);
        assert!(session.claim(["k"]).is_empty());
        assert!(!KeyRegistry::new(BackendKind::Local).is_claimed("k"));
        assert!(KeyRegistry::new(BackendKind::Local).is_empty());
    }
}
