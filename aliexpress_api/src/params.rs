//! Request parameter map and the "one value or a list" parameter type.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::Error;

/// Sorted map of request parameters. Absent optional values are never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter, replacing any previous value for the key.
    pub fn push(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.0.insert(key.to_string(), value.to_string());
        self
    }

    /// Inserts the parameter only when a value is present.
    pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Inserts a list parameter as its comma-joined form. Empty lists are omitted.
    pub fn push_list(&mut self, key: &str, value: Option<&OneOrMany>) -> &mut Self {
        if let Some(value) = value {
            if !value.is_empty() {
                self.push(key, value.normalize());
            }
        }
        self
    }

    /// JSON-encodes a structured value into a single parameter.
    pub fn push_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<&mut Self, Error> {
        let encoded = serde_json::to_string(value).map_err(|e| Error::InvalidParameter {
            name: key.to_string(),
            reason: e.to_string(),
        })?;
        Ok(self.push(key, encoded))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copies every entry of `other` into `self`; `other` wins on conflicts.
    pub fn extend(&mut self, other: &Params) {
        for (key, value) in other.iter() {
            self.push(key, value);
        }
    }

    pub fn keys(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }
}

/// A parameter the platform accepts either as a single value or a list,
/// sent as one comma-delimited string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// The serialized form: a single value as-is, a list joined with `,`.
    pub fn normalize(&self) -> String {
        match self {
            OneOrMany::One(value) => value.clone(),
            OneOrMany::Many(values) => values.join(","),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            OneOrMany::One(value) => value.is_empty(),
            OneOrMany::Many(values) => values.is_empty(),
        }
    }

    /// The individual values, splitting a single comma-delimited string.
    pub fn values(&self) -> Vec<String> {
        match self {
            OneOrMany::One(value) => value
                .split(',')
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .collect(),
            OneOrMany::Many(values) => values.clone(),
        }
    }
}

impl std::fmt::Display for OneOrMany {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.normalize())
    }
}

impl From<&str> for OneOrMany {
    fn from(value: &str) -> Self {
        OneOrMany::One(value.to_string())
    }
}

impl From<String> for OneOrMany {
    fn from(value: String) -> Self {
        OneOrMany::One(value)
    }
}

impl From<Vec<String>> for OneOrMany {
    fn from(values: Vec<String>) -> Self {
        OneOrMany::Many(values)
    }
}

impl From<Vec<&str>> for OneOrMany {
    fn from(values: Vec<&str>) -> Self {
        OneOrMany::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for OneOrMany {
    fn from(values: &[&str]) -> Self {
        OneOrMany::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

impl From<&[String]> for OneOrMany {
    fn from(values: &[String]) -> Self {
        OneOrMany::Many(values.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for OneOrMany {
    fn from(values: [&str; N]) -> Self {
        OneOrMany::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_value_and_one_element_list_match() {
        let one = OneOrMany::from("1005001234567890");
        let many = OneOrMany::from(vec!["1005001234567890"]);
        assert_eq!(one.normalize(), many.normalize());

        let mut a = Params::new();
        a.push_list("product_ids", Some(&one));
        let mut b = Params::new();
        b.push_list("product_ids", Some(&many));
        assert_eq!(a, b);
    }

    #[test]
    fn list_is_comma_joined() {
        let ids = OneOrMany::from(["1", "2", "3"]);
        assert_eq!(ids.normalize(), "1,2,3");
        assert_eq!(ids.to_string(), "1,2,3");
    }

    #[test]
    fn values_splits_delimited_string() {
        let ids = OneOrMany::from("1, 2,,3");
        assert_eq!(ids.values(), vec!["1", "2", "3"]);
    }

    #[test]
    fn absent_and_empty_values_are_omitted() {
        let mut params = Params::new();
        params
            .push_opt::<String>("keywords", None)
            .push_list("fields", None)
            .push_list("category_ids", Some(&OneOrMany::Many(vec![])))
            .push_opt("page_no", Some(2));
        assert_eq!(params.keys(), vec!["page_no"]);
        assert_eq!(params.get("page_no"), Some("2"));
    }

    #[test]
    fn extend_overrides_existing_keys() {
        let mut base = Params::new();
        base.push("a", "1").push("b", "2");
        let mut other = Params::new();
        other.push("b", "3");
        base.extend(&other);
        assert_eq!(base.get("b"), Some("3"));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn push_json_encodes_struct() {
        #[derive(Serialize)]
        struct Req {
            #[serde(rename = "productId")]
            product_id: String,
        }
        let mut params = Params::new();
        params
            .push_json(
                "queryDeliveryReq",
                &Req {
                    product_id: "1".to_string(),
                },
            )
            .unwrap();
        assert_eq!(params.get("queryDeliveryReq"), Some(r#"{"productId":"1"}"#));
    }
}
