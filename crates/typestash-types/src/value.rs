use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tag::TypeTag;

/// Largest magnitude, in milliseconds from the epoch, a date may hold.
const MAX_TIME_MS: f64 = 8.64e15;

/// A millisecond-precision date.
///
/// Mirrors a host date object: it either holds a valid millisecond count
/// since the UNIX epoch or is in the invalid-date state. Decoding a numeric
/// but out-of-range timestamp yields an invalid date rather than an error.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(Option<i64>);

impl Timestamp {
    /// Build a date from a millisecond count, clipping like a host date:
    /// non-finite or out-of-range input is invalid, fractions truncate
    /// toward zero.
    pub fn from_millis(ms: f64) -> Self {
        if !ms.is_finite() || ms.abs() > MAX_TIME_MS {
            return Self::invalid();
        }
        Self(Some(ms.trunc() as i64))
    }

    pub const fn invalid() -> Self {
        Self(None)
    }

    /// The current wall-clock time.
    pub fn now() -> Self {
        Self(Some(Utc::now().timestamp_millis()))
    }

    /// Milliseconds since the UNIX epoch, or `None` for an invalid date.
    pub fn millis(&self) -> Option<i64> {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// Convert to a chrono timestamp. `None` for invalid dates and for
    /// instants outside chrono's representable range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        self.0.and_then(DateTime::from_timestamp_millis)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(ms) => write!(f, "Timestamp({ms})"),
            None => write!(f, "Timestamp(invalid)"),
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(Some(dt.timestamp_millis()))
    }
}

/// A typed value, as produced by decoding or accepted for encoding.
#[derive(Clone, Debug, PartialEq)]
pub enum StoredValue {
    Number(f64),
    String(String),
    Boolean(bool),
    Date(Timestamp),
    /// Any JSON payload, including `null` and primitives.
    Object(Value),
    Array(Vec<Value>),
}

impl StoredValue {
    /// The tag whose decode rule produces this variant.
    pub fn tag(&self) -> TypeTag {
        match self {
            Self::Number(_) => TypeTag::Number,
            Self::String(_) => TypeTag::String,
            Self::Boolean(_) => TypeTag::Boolean,
            Self::Date(_) => TypeTag::Date,
            Self::Object(_) => TypeTag::Object,
            Self::Array(_) => TypeTag::Array,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            Self::Date(ts) => Some(*ts),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Object(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Convert an `Object` or `Array` value into a plain JSON value.
    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Object(v) => Some(v),
            Self::Array(items) => Some(Value::Array(items)),
            _ => None,
        }
    }
}

macro_rules! number_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for StoredValue {
                fn from(n: $ty) -> Self {
                    Self::Number(f64::from(n))
                }
            }
        )*
    };
}

number_from!(f64, f32, i32, u32, i16, u16, i8, u8);

impl From<String> for StoredValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for StoredValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<bool> for StoredValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<Timestamp> for StoredValue {
    fn from(ts: Timestamp) -> Self {
        Self::Date(ts)
    }
}

impl From<DateTime<Utc>> for StoredValue {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Date(dt.into())
    }
}

impl From<Value> for StoredValue {
    fn from(v: Value) -> Self {
        Self::Object(v)
    }
}

impl From<Vec<Value>> for StoredValue {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_millis_truncates_toward_zero() {
        assert_eq!(Timestamp::from_millis(1.9).millis(), Some(1));
        assert_eq!(Timestamp::from_millis(-1.9).millis(), Some(-1));
        assert_eq!(Timestamp::from_millis(-0.0).millis(), Some(0));
    }

    #[test]
    fn from_millis_clips_out_of_range() {
        assert!(Timestamp::from_millis(8.64e15).is_valid());
        assert!(Timestamp::from_millis(-8.64e15).is_valid());
        assert!(!Timestamp::from_millis(8.64e15 + 1.0).is_valid());
        assert!(!Timestamp::from_millis(f64::INFINITY).is_valid());
        assert!(!Timestamp::from_millis(f64::NAN).is_valid());
    }

    #[test]
    fn chrono_interop() {
        let dt = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        let ts = Timestamp::from(dt);
        assert_eq!(ts.millis(), Some(1_700_000_000_123));
        assert_eq!(ts.to_datetime(), Some(dt));
        assert_eq!(Timestamp::invalid().to_datetime(), None);
    }

    #[test]
    fn now_is_valid() {
        assert!(Timestamp::now().is_valid());
    }

    #[test]
    fn debug_shows_invalid_state() {
        assert_eq!(format!("{:?}", Timestamp::invalid()), "Timestamp(invalid)");
        assert_eq!(format!("{:?}", Timestamp::from_millis(5.0)), "Timestamp(5)");
    }

    #[test]
    fn conversions_pick_the_right_variant() {
        assert_eq!(StoredValue::from(42).tag(), TypeTag::Number);
        assert_eq!(StoredValue::from("hi").tag(), TypeTag::String);
        assert_eq!(StoredValue::from(true).tag(), TypeTag::Boolean);
        assert_eq!(StoredValue::from(Timestamp::now()).tag(), TypeTag::Date);
        assert_eq!(StoredValue::from(json!({"a": 1})).tag(), TypeTag::Object);
        assert_eq!(StoredValue::from(vec![json!(1)]).tag(), TypeTag::Array);
    }

    #[test]
    fn accessors_match_variant_only() {
        let n = StoredValue::Number(1.5);
        assert_eq!(n.as_f64(), Some(1.5));
        assert_eq!(n.as_str(), None);
        assert_eq!(n.as_bool(), None);

        let a = StoredValue::Array(vec![json!(1), json!(2)]);
        assert_eq!(a.as_array().map(<[Value]>::len), Some(2));
        assert_eq!(a.clone().into_json(), Some(json!([1, 2])));
        assert_eq!(a.as_json(), None);
    }
}
