//! The Typestash error taxonomy.
//!
//! Failures fall into three statically distinct kinds:
//!
//! - [`SetupError`] -- fatal, raised while binding an accessor to a backend
//!   that the runtime does not provide.
//! - [`StorageError`] -- returned from every read that cannot produce a
//!   typed value (absent key, malformed payload).
//! - [`KeyCollision`] -- advisory only, reported when two schemas bound to
//!   the same backend kind declare the same key.
//!
//! All three map onto a stable [`ErrorCode`] for programmatic branching.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which flat key/value store an accessor is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Page-scoped storage (`localStorage`).
    Local,
    /// Session-scoped storage (`sessionStorage`).
    Session,
}

impl BackendKind {
    /// The code raised when this backend is missing from the runtime.
    pub const fn unsupported_code(self) -> ErrorCode {
        match self {
            Self::Local => ErrorCode::LocalStorageNotSupported,
            Self::Session => ErrorCode::SessionStorageNotSupported,
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "LocalStorage"),
            Self::Session => write!(f, "SessionStorage"),
        }
    }
}

/// Stable, machine-readable error codes.
///
/// Discriminants are part of the public contract and never reordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum ErrorCode {
    LocalStorageNotSupported = 0,
    SessionStorageNotSupported = 1,
    KeyAlreadyRegistered = 2,
    KeyUndefined = 3,
    UnexpectedNumber = 4,
    UnexpectedObject = 5,
    UnexpectedDate = 6,
}

impl ErrorCode {
    /// Every code, in discriminant order.
    pub const ALL: [ErrorCode; 7] = [
        Self::LocalStorageNotSupported,
        Self::SessionStorageNotSupported,
        Self::KeyAlreadyRegistered,
        Self::KeyUndefined,
        Self::UnexpectedNumber,
        Self::UnexpectedObject,
        Self::UnexpectedDate,
    ];

    /// The numeric value of this code.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Look up a code by its numeric value.
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }

    /// The fixed human-readable template for this code.
    pub const fn message(self) -> &'static str {
        match self {
            Self::LocalStorageNotSupported => "[LocalStorage] is not supported",
            Self::SessionStorageNotSupported => "[SessionStorage] is not supported",
            Self::KeyAlreadyRegistered => "[Storage] used key",
            Self::KeyUndefined => "[Storage] undefined key",
            Self::UnexpectedNumber => "[Storage] not expected number key",
            Self::UnexpectedObject => "[Storage] not expected object key",
            Self::UnexpectedDate => "[Storage] not expected date key",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LocalStorageNotSupported => "LOCAL_STORAGE_NOT_SUPPORTED",
            Self::SessionStorageNotSupported => "SESSION_STORAGE_NOT_SUPPORTED",
            Self::KeyAlreadyRegistered => "KEY_ALREADY_REGISTERED",
            Self::KeyUndefined => "KEY_UNDEFINED",
            Self::UnexpectedNumber => "UNEXPECTED_NUMBER",
            Self::UnexpectedObject => "UNEXPECTED_OBJECT",
            Self::UnexpectedDate => "UNEXPECTED_DATE",
        };
        f.write_str(name)
    }
}

/// A structured error value: a code plus a rendered message.
///
/// The message is the code's template followed by an optional `(key)`
/// suffix naming the offending key.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StorageError {
    code: ErrorCode,
    key: Option<String>,
    message: String,
}

impl StorageError {
    /// Build an error value. Pure: no logging, no side effects.
    pub fn new(code: ErrorCode, key: Option<&str>) -> Self {
        let message = match key {
            Some(key) => format!("{}({key})", code.message()),
            None => code.message().to_owned(),
        };
        Self {
            code,
            key: key.map(str::to_owned),
            message,
        }
    }

    /// Build an error value naming `key`.
    pub fn with_key(code: ErrorCode, key: &str) -> Self {
        Self::new(code, Some(key))
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// The offending key, if one was attached.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ErrorCode> for StorageError {
    fn from(code: ErrorCode) -> Self {
        Self::new(code, None)
    }
}

/// Result alias for every typed read.
pub type StorageResult<T> = Result<T, StorageError>;

/// Fatal failure while constructing an accessor.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The runtime does not provide the requested backend.
    #[error("[{kind}] is not supported")]
    BackendNotSupported { kind: BackendKind },
}

impl SetupError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::BackendNotSupported { kind } => kind.unsupported_code(),
        }
    }
}

impl From<SetupError> for StorageError {
    fn from(err: SetupError) -> Self {
        Self::new(err.code(), None)
    }
}

/// Advisory diagnostic: `key` was already claimed by an earlier schema
/// bound to the same backend kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyCollision {
    pub kind: BackendKind,
    pub key: String,
}

impl KeyCollision {
    pub fn new(kind: BackendKind, key: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
        }
    }

    /// The `KeyAlreadyRegistered` error value carried by this diagnostic.
    pub fn to_error(&self) -> StorageError {
        StorageError::with_key(ErrorCode::KeyAlreadyRegistered, &self.key)
    }
}

impl fmt::Display for KeyCollision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {}", self.to_error(), self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_have_stable_discriminants() {
        assert_eq!(ErrorCode::LocalStorageNotSupported.as_u8(), 0);
        assert_eq!(ErrorCode::SessionStorageNotSupported.as_u8(), 1);
        assert_eq!(ErrorCode::KeyAlreadyRegistered.as_u8(), 2);
        assert_eq!(ErrorCode::KeyUndefined.as_u8(), 3);
        assert_eq!(ErrorCode::UnexpectedNumber.as_u8(), 4);
        assert_eq!(ErrorCode::UnexpectedObject.as_u8(), 5);
        assert_eq!(ErrorCode::UnexpectedDate.as_u8(), 6);
    }

    #[test]
    fn from_u8_inverts_as_u8() {
        for code in ErrorCode::ALL {
            assert_eq!(ErrorCode::from_u8(code.as_u8()), Some(code));
        }
        assert_eq!(ErrorCode::from_u8(7), None);
        assert_eq!(ErrorCode::from_u8(u8::MAX), None);
    }

    #[test]
    fn message_without_key_is_template() {
        let err = StorageError::new(ErrorCode::KeyUndefined, None);
        assert_eq!(err.code(), ErrorCode::KeyUndefined);
        assert_eq!(err.key(), None);
        assert_eq!(err.to_string(), "[Storage] undefined key");
    }

    #[test]
    fn message_with_key_has_suffix() {
        let err = StorageError::with_key(ErrorCode::UnexpectedNumber, "count");
        assert_eq!(err.key(), Some("count"));
        assert_eq!(err.message(), "[Storage] not expected number key(count)");
        assert_eq!(err.to_string(), err.message());
    }

    #[test]
    fn construction_is_pure() {
        let a = StorageError::with_key(ErrorCode::UnexpectedDate, "when");
        let b = StorageError::with_key(ErrorCode::UnexpectedDate, "when");
        assert_eq!(a, b);
    }

    #[test]
    fn setup_error_codes_follow_backend_kind() {
        let local = SetupError::BackendNotSupported {
            kind: BackendKind::Local,
        };
        let session = SetupError::BackendNotSupported {
            kind: BackendKind::Session,
        };
        assert_eq!(local.code(), ErrorCode::LocalStorageNotSupported);
        assert_eq!(session.code(), ErrorCode::SessionStorageNotSupported);
        assert_eq!(local.to_string(), ErrorCode::LocalStorageNotSupported.message());
        assert_eq!(session.to_string(), ErrorCode::SessionStorageNotSupported.message());

        let value: StorageError = session.into();
        assert_eq!(value.code(), ErrorCode::SessionStorageNotSupported);
    }

    #[test]
    fn collision_carries_key_already_registered() {
        let collision = KeyCollision::new(BackendKind::Local, "theme");
        let err = collision.to_error();
        assert_eq!(err.code(), ErrorCode::KeyAlreadyRegistered);
        assert_eq!(err.to_string(), "[Storage] used key(theme)");
        assert_eq!(collision.to_string(), "[Storage] used key(theme) in LocalStorage");
    }

    #[test]
    fn code_display_is_screaming_snake() {
        assert_eq!(ErrorCode::KeyUndefined.to_string(), "KEY_UNDEFINED");
        assert_eq!(
            ErrorCode::SessionStorageNotSupported.to_string(),
            "SESSION_STORAGE_NOT_SUPPORTED"
        );
    }
}
