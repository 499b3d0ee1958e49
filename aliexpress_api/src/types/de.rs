//! Lenient deserializers for the platform's loosely typed JSON.
//!
//! The gateway sends ids and counts as numbers on some endpoints and as
//! strings on others, and wraps lists in a single-key object
//! (`{"products": {"product": [...]}}`).

use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::Deserialize;
use serde_json::Value;

/// Reads a string, number or bool as a `String`. `null` becomes empty.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_string_or_number(deserializer)?.unwrap_or_default())
}

/// Like [`string_or_number`] but keeps `null` as `None`.
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(D::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

/// Reads an integer that may arrive quoted. `null` and `""` become 0.
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_lenient_i64(deserializer)?.unwrap_or_default())
}

/// Like [`lenient_i64`] but keeps absence as `None`.
pub fn opt_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("integer out of range: {}", n))),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected integer, got {:?}", s))),
        other => Err(D::Error::custom(format!("expected integer, got {}", other))),
    }
}

/// Reads `null` as the type's default. Missing keys are covered by
/// `#[serde(default)]`, explicit nulls are not.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads `true`, `"true"`, `1` or `"1"` as true. `null` is false.
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(b),
        Value::Number(n) => Ok(n.as_i64() == Some(1)),
        Value::String(s) => Ok(matches!(s.trim().to_lowercase().as_str(), "true" | "1" | "y")),
        other => Err(D::Error::custom(format!("expected boolean, got {}", other))),
    }
}

/// Reads a list that may be bare, wrapped in a single-key object, a lone
/// element, or `null`.
pub fn nested_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    unwrap_list(value)
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(D::Error::custom))
        .collect()
}

/// Reads a wrapped list of ids or strings, converting numbers to strings.
pub fn nested_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    unwrap_list(value)
        .into_iter()
        .filter_map(|item| match item {
            Value::Null => None,
            Value::String(s) => Some(Ok(s)),
            Value::Number(n) => Some(Ok(n.to_string())),
            other => Some(Err(D::Error::custom(format!(
                "expected string list element, got {}",
                other
            )))),
        })
        .collect()
}

fn unwrap_list(value: Value) -> Vec<Value> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        Value::Object(map) if map.is_empty() => Vec::new(),
        Value::Object(map) => {
            let wrapper = map.len() == 1
                && map
                    .values()
                    .next()
                    .map(|inner| inner.is_array() || inner.is_object() || inner.is_null())
                    .unwrap_or(false);
            if !wrapper {
                return vec![Value::Object(map)];
            }
            match map.into_iter().next().map(|(_, inner)| inner) {
                Some(Value::Array(items)) => items,
                Some(Value::Null) | None => Vec::new(),
                Some(other) => vec![other],
            }
        }
        other => vec![other],
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    struct Item {
        #[serde(default, deserialize_with = "super::string_or_number")]
        id: String,
    }

    #[derive(Deserialize, Debug)]
    struct Holder {
        #[serde(default, deserialize_with = "super::nested_list")]
        items: Vec<Item>,
        #[serde(default, deserialize_with = "super::lenient_i64")]
        count: i64,
        #[serde(default, deserialize_with = "super::lenient_bool")]
        ok: bool,
        #[serde(default, deserialize_with = "super::nested_string_list")]
        urls: Vec<String>,
    }

    #[test]
    fn wrapped_list_is_flattened() {
        let h: Holder =
            serde_json::from_str(r#"{"items": {"item": [{"id": 1}, {"id": "2"}]}}"#).unwrap();
        let ids: Vec<_> = h.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn bare_list_and_single_element() {
        let h: Holder = serde_json::from_str(r#"{"items": [{"id": "a"}]}"#).unwrap();
        assert_eq!(h.items.len(), 1);
        let h: Holder = serde_json::from_str(r#"{"items": {"item": {"id": "b"}}}"#).unwrap();
        assert_eq!(h.items[0].id, "b");
    }

    #[test]
    fn single_key_element_is_not_mistaken_for_wrapper() {
        let h: Holder = serde_json::from_str(r#"{"items": {"id": "c"}}"#).unwrap();
        assert_eq!(h.items.len(), 1);
        assert_eq!(h.items[0].id, "c");
    }

    #[test]
    fn empty_wrapper_is_an_empty_list() {
        let h: Holder = serde_json::from_str(r#"{"items": {}}"#).unwrap();
        assert!(h.items.is_empty());
    }

    #[test]
    fn missing_and_null_fields_default() {
        let h: Holder = serde_json::from_str(r#"{"items": null, "count": null}"#).unwrap();
        assert!(h.items.is_empty());
        assert_eq!(h.count, 0);
        assert!(!h.ok);
        assert!(h.urls.is_empty());
    }

    #[test]
    fn quoted_numbers_and_bools() {
        let h: Holder = serde_json::from_str(
            r#"{"count": "42", "ok": "true", "urls": {"string": ["u1", 2]}}"#,
        )
        .unwrap();
        assert_eq!(h.count, 42);
        assert!(h.ok);
        assert_eq!(h.urls, vec!["u1", "2"]);
    }

    #[derive(Deserialize, Debug, Default)]
    #[serde(default)]
    struct Titled {
        #[serde(deserialize_with = "super::null_as_default")]
        title: String,
        #[serde(deserialize_with = "super::null_as_default")]
        inner: Inner,
    }

    #[derive(Deserialize, Debug, Default, PartialEq)]
    #[serde(default)]
    struct Inner {
        #[serde(deserialize_with = "super::null_as_default")]
        name: String,
    }

    #[test]
    fn explicit_null_reads_as_default() {
        let t: Titled = serde_json::from_str(r#"{"title": null, "inner": null}"#).unwrap();
        assert_eq!(t.title, "");
        assert_eq!(t.inner, Inner::default());

        let t: Titled =
            serde_json::from_str(r#"{"title": "Lamp", "inner": {"name": null}}"#).unwrap();
        assert_eq!(t.title, "Lamp");
        assert_eq!(t.inner.name, "");
    }

    #[test]
    fn null_as_default_still_rejects_wrong_types() {
        assert!(serde_json::from_str::<Titled>(r#"{"title": 12}"#).is_err());
    }

    #[test]
    fn bad_integer_is_an_error() {
        let r = serde_json::from_str::<Holder>(r#"{"count": "many"}"#);
        assert!(r.is_err());
    }
}
