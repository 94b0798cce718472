use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use typestash_types::{ErrorCode, StorageError, StorageResult, StoredValue, Timestamp, TypeTag};

use crate::number::parse_number;

/// Decode the raw backend string stored under `key` according to `tag`.
///
/// `raw` is `None` when the backend holds nothing under `key`. Every error
/// names `key` in its message.
///
/// `Number` accepts `Infinity` and literals that overflow to it; `Date`
/// turns them into an invalid date. JSON payloads may nest to any depth,
/// but numbers outside the `f64` range cannot be held by a JSON value and
/// fail with `UnexpectedObject`.
pub fn decode(key: &str, tag: TypeTag, raw: Option<&str>) -> StorageResult<StoredValue> {
    let raw = raw.ok_or_else(|| StorageError::with_key(ErrorCode::KeyUndefined, key))?;

    match tag {
        TypeTag::Boolean => Ok(StoredValue::Boolean(decode_boolean(raw))),
        TypeTag::Number => parse_number(raw)
            .map(StoredValue::Number)
            .ok_or_else(|| StorageError::with_key(ErrorCode::UnexpectedNumber, key)),
        TypeTag::Date => parse_number(raw)
            .map(|ms| StoredValue::Date(Timestamp::from_millis(ms)))
            .ok_or_else(|| StorageError::with_key(ErrorCode::UnexpectedDate, key)),
        TypeTag::Object => parse_json(key, raw).map(StoredValue::Object),
        TypeTag::Array => match parse_json(key, raw)? {
            Value::Array(items) => Ok(StoredValue::Array(items)),
            _ => Err(StorageError::with_key(ErrorCode::UnexpectedObject, key)),
        },
        TypeTag::String | TypeTag::Unknown => Ok(StoredValue::String(raw.to_owned())),
    }
}

/// Decode a JSON-tagged key and deserialize it into `T`.
///
/// Fails with `UnexpectedObject` when `tag` is not `Object` or `Array`, or
/// when the payload does not match the shape of `T`.
pub fn decode_as<T: DeserializeOwned>(
    key: &str,
    tag: TypeTag,
    raw: Option<&str>,
) -> StorageResult<T> {
    let unexpected = || StorageError::with_key(ErrorCode::UnexpectedObject, key);
    let json = decode(key, tag, raw)?.into_json().ok_or_else(unexpected)?;
    serde_json::from_value(json).map_err(|_| unexpected())
}

/// `"true"` and `"false"` are literal; any other non-empty string is true.
fn decode_boolean(raw: &str) -> bool {
    match raw {
        "true" => true,
        "false" => false,
        other => !other.is_empty(),
    }
}

fn parse_json(key: &str, raw: &str) -> StorageResult<Value> {
    let mut de = serde_json::Deserializer::from_str(raw);
    de.disable_recursion_limit();
    Value::deserialize(serde_stacker::Deserializer::new(&mut de))
        .and_then(|value| de.end().map(|()| value))
        .map_err(|_| StorageError::with_key(ErrorCode::UnexpectedObject, key))
}
