use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Wire representation of one row: an ordered map of field name to text.
///
/// `None` is an explicit JSON `null`. Inbound numbers, booleans and nested JSON
/// are normalized to their textual form during deserialization, so everything
/// past the boundary only ever sees strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record(IndexMap<String, Option<String>>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(IndexMap::with_capacity(capacity))
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        self.0.insert(key.into(), value);
    }

    /// `None` when the key is absent, `Some(None)` when present as null.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.0.get(key).map(Option::as_deref)
    }

    /// Text of a present key; an explicit null reads as `"null"`.
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key)
            .map(|value| value.map_or_else(|| "null".to_string(), str::to_string))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter()
                .map(|(key, value)| (key, normalize(value)))
                .collect(),
        ))
    }
}

fn normalize(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_normalizes_scalars_to_text() {
        let record: Record = serde_json::from_value(json!({
            "name": "widget",
            "quantity": 12,
            "price": 9.5,
            "active": true,
            "missing": null,
        }))
        .unwrap();

        assert_eq!(record.get("name"), Some(Some("widget")));
        assert_eq!(record.get("quantity"), Some(Some("12")));
        assert_eq!(record.get("price"), Some(Some("9.5")));
        assert_eq!(record.get("active"), Some(Some("true")));
        assert_eq!(record.get("missing"), Some(None));
        assert_eq!(record.get("absent"), None);
    }

    #[test]
    fn nested_values_keep_their_json_text() {
        let record: Record =
            serde_json::from_value(json!({ "tags": ["a", "b"], "meta": { "k": 1 } })).unwrap();
        assert_eq!(record.get("tags"), Some(Some(r#"["a","b"]"#)));
        assert_eq!(record.get("meta"), Some(Some(r#"{"k":1}"#)));
    }

    #[test]
    fn explicit_null_reads_as_null_text() {
        let mut record = Record::new();
        record.insert("user_id", None);
        assert_eq!(record.text("user_id").as_deref(), Some("null"));
        assert_eq!(record.text("operation"), None);
    }

    #[test]
    fn serializes_in_insertion_order_with_nulls() {
        let mut record = Record::new();
        record.insert("b", Some("2".to_string()));
        record.insert("a", None);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"b":"2","a":null}"#);
    }

    #[test]
    fn non_object_payload_is_rejected() {
        assert!(serde_json::from_value::<Record>(json!(["not", "a", "map"])).is_err());
    }
}
