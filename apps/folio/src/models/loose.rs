//! Lenient field decoding: resume JSON is hand-written, so numeric years,
//! GPAs and phone numbers show up as often as strings, and a field of the
//! wrong shape must not take the whole document down with it. Every helper
//! here goes through `serde_json::Value` and turns a mismatch into an absent
//! field (or a skipped item) plus a warning.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

/// Text form of a JSON scalar. Null, arrays and objects have none.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Text for a bullet item: scalars as text, anything else as its JSON.
pub fn item_text(value: &Value) -> String {
    scalar_text(value).unwrap_or_else(|| value.to_string())
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Decodes an optional scalar (string, number or bool) into its text form.
/// `null` and non-scalars decode to `None`.
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    let text = scalar_text(&value);
    if text.is_none() {
        warn!("Ignoring non-scalar value where text was expected: {value}");
    }
    Ok(text)
}

/// Decodes a list of scalars. Non-scalar items are skipped; a value that is
/// not a list at all decodes to `None`.
pub fn opt_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Array(items) => Ok(Some(
            items
                .iter()
                .filter_map(|item| {
                    let text = scalar_text(item);
                    if text.is_none() {
                        warn!("Skipping non-scalar list item: {item}");
                    }
                    text
                })
                .collect(),
        )),
        other => {
            warn!("Ignoring value where a list was expected: {other}");
            Ok(None)
        }
    }
}

/// Decodes a nested record, or `None` when the value has the wrong shape.
pub fn opt_record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(decode_or_warn(value))
}

/// Decodes a list of records, skipping items with the wrong shape. A value
/// that is not a list decodes to `None`.
pub fn opt_records<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Array(items) => Ok(Some(items.into_iter().filter_map(decode_or_warn).collect())),
        other => {
            warn!(
                "Ignoring value where a list of {} was expected: {other}",
                short_type_name::<T>()
            );
            Ok(None)
        }
    }
}

fn decode_or_warn<T: DeserializeOwned>(value: Value) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!("Skipping malformed {}: {e}", short_type_name::<T>());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Field {
        #[serde(default, deserialize_with = "super::opt_text")]
        value: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    struct Point {
        x: i64,
    }

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "super::opt_list")]
        list: Option<Vec<String>>,
        #[serde(default, deserialize_with = "super::opt_record")]
        point: Option<Point>,
        #[serde(default, deserialize_with = "super::opt_records")]
        points: Option<Vec<Point>>,
    }

    fn holder(value: serde_json::Value) -> Holder {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_null_is_none() {
        let f: Field = serde_json::from_value(json!({ "value": null })).unwrap();
        assert!(f.value.is_none());
    }

    #[test]
    fn test_integer_keeps_digits() {
        let f: Field = serde_json::from_value(json!({ "value": 5551234 })).unwrap();
        assert_eq!(f.value.as_deref(), Some("5551234"));
    }

    #[test]
    fn test_array_text_degrades_to_none() {
        let f: Field = serde_json::from_value(json!({ "value": ["a", "b"] })).unwrap();
        assert!(f.value.is_none());
    }

    #[test]
    fn test_list_keeps_scalars_and_skips_the_rest() {
        let h = holder(json!({ "list": [123, "Rust", true, { "x": 1 }, null] }));
        assert_eq!(
            h.list,
            Some(vec!["123".to_string(), "Rust".to_string(), "true".to_string()])
        );
    }

    #[test]
    fn test_list_given_a_string_is_none() {
        assert!(holder(json!({ "list": "Rust, Go" })).list.is_none());
    }

    #[test]
    fn test_record_of_wrong_shape_is_none() {
        assert!(holder(json!({ "point": "Ada" })).point.is_none());
        assert_eq!(holder(json!({ "point": { "x": 3 } })).point.unwrap().x, 3);
    }

    #[test]
    fn test_records_skip_malformed_items() {
        let h = holder(json!({ "points": [{ "x": 1 }, "two", { "x": 3 }] }));
        let xs: Vec<i64> = h.points.unwrap().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1, 3]);
        assert!(holder(json!({ "points": { "x": 1 } })).points.is_none());
    }

    #[test]
    fn test_item_text_renders_non_scalars_as_json() {
        assert_eq!(super::item_text(&json!(1)), "1");
        assert_eq!(super::item_text(&json!({ "a": 1 })), r#"{"a":1}"#);
    }
}
