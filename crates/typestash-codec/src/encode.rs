use serde_json::Value;
use typestash_types::StoredValue;

use crate::number::format_number;

/// Encode a typed value as its storage string.
///
/// Dates store their millisecond timestamp (`NaN` for an invalid date),
/// objects and arrays store compact JSON, everything else its plain string
/// form. Encoding never fails.
pub fn encode(value: &StoredValue) -> String {
    match value {
        StoredValue::Date(ts) => match ts.millis() {
            Some(ms) => ms.to_string(),
            None => format_number(f64::NAN),
        },
        StoredValue::Object(v) => v.to_string(),
        StoredValue::Array(items) => Value::Array(items.clone()).to_string(),
        StoredValue::Number(n) => format_number(*n),
        StoredValue::String(s) => s.clone(),
        StoredValue::Boolean(b) => b.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use typestash_types::Timestamp;

    use super::*;

    #[test]
    fn numbers_use_host_formatting() {
        assert_eq!(encode(&StoredValue::Number(42.0)), "42");
        assert_eq!(encode(&StoredValue::Number(-0.5)), "-0.5");
    }

    #[test]
    fn strings_are_stored_verbatim() {
        assert_eq!(encode(&StoredValue::String("123".into())), "123");
        assert_eq!(encode(&StoredValue::String(String::new())), "");
    }

    #[test]
    fn booleans_are_literals() {
        assert_eq!(encode(&StoredValue::Boolean(true)), "true");
        assert_eq!(encode(&StoredValue::Boolean(false)), "false");
    }

    #[test]
    fn dates_store_millis() {
        let ts = Timestamp::from_millis(1_700_000_000_123.0);
        assert_eq!(encode(&StoredValue::Date(ts)), "1700000000123");
        assert_eq!(encode(&StoredValue::Date(Timestamp::invalid())), "NaN");
    }

    #[test]
    fn json_values_are_compact() {
        assert_eq!(encode(&StoredValue::Object(json!({"world": "world"}))), r#"{"world":"world"}"#);
        assert_eq!(encode(&StoredValue::Object(json!(null))), "null");
        assert_eq!(encode(&StoredValue::Array(vec![json!(1), json!(2), json!(3)])), "[1,2,3]");
        assert_eq!(encode(&StoredValue::Array(Vec::new())), "[]");
    }
}
