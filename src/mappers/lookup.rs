//! Lenient field lookups on JSON objects. A missing key, a `null` or a value
//! of the wrong type all read as `None`.

use serde_json::Value;

pub(crate) fn opt_f64(item: &Value, key: &str) -> Option<f64> {
    item.get(key).and_then(Value::as_f64)
}

pub(crate) fn opt_i64(item: &Value, key: &str) -> Option<i64> {
    let value = item.get(key)?;
    value.as_i64().or_else(|| {
        // Integral values sometimes arrive as floats (e.g. `12.0`)
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

pub(crate) fn opt_u64(item: &Value, key: &str) -> Option<u64> {
    opt_i64(item, key).and_then(|v| u64::try_from(v).ok())
}

pub(crate) fn opt_string(item: &Value, key: &str) -> Option<String> {
    item.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// The array under `key`, empty when absent.
pub(crate) fn array<'a>(item: &'a Value, key: &str) -> &'a [Value] {
    item.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_and_mistyped_read_as_none() {
        let item = json!({"a": 1.5, "b": "text", "c": null, "d": 12.0, "e": -3});
        assert_eq!(opt_f64(&item, "a"), Some(1.5));
        assert_eq!(opt_f64(&item, "b"), None);
        assert_eq!(opt_f64(&item, "c"), None);
        assert_eq!(opt_f64(&item, "missing"), None);
        assert_eq!(opt_i64(&item, "a"), None);
        assert_eq!(opt_i64(&item, "d"), Some(12));
        assert_eq!(opt_u64(&item, "e"), None);
        assert_eq!(opt_string(&item, "b").as_deref(), Some("text"));
        assert_eq!(opt_string(&item, "a"), None);
    }

    #[test]
    fn test_array_defaults_to_empty() {
        let item = json!({"list": [1, 2], "scalar": 3});
        assert_eq!(array(&item, "list").len(), 2);
        assert!(array(&item, "scalar").is_empty());
        assert!(array(&item, "missing").is_empty());
        assert!(array(&Value::Null, "list").is_empty());
    }
}
