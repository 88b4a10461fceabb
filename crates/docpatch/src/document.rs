//! The document value type.
//!
//! A [`Document`] is a JSON-equivalent value: scalar, sequence, or
//! string-keyed mapping. Container children are `Arc`-wrapped so that a
//! shallow container copy shares unmodified subtrees by reference — the basis
//! of the structural-sharing contract in [`crate::patch`].
//!
//! Object key order is preserved through conversions and serialization so
//! that a document round-trips stably, but has no bearing on equality.

use indexmap::IndexMap;
use serde::de::Deserializer;
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::sync::Arc;

/// A JSON-equivalent nested value.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Arc<Document>>),
    Object(IndexMap<String, Arc<Document>>),
}

impl Document {
    pub fn is_null(&self) -> bool {
        matches!(self, Document::Null)
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Document::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Document::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Document::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Document::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Document::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Document::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Get the elements if this is a sequence.
    pub fn as_array(&self) -> Option<&[Arc<Document>]> {
        match self {
            Document::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Get the entries if this is a mapping.
    pub fn as_object(&self) -> Option<&IndexMap<String, Arc<Document>>> {
        match self {
            Document::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Get the value under a mapping key.
    pub fn get_key(&self, key: &str) -> Option<&Arc<Document>> {
        self.as_object()?.get(key)
    }

    /// Get the element at a sequence index.
    pub fn get_index(&self, index: usize) -> Option<&Arc<Document>> {
        self.as_array()?.get(index)
    }

    /// Convert to a `serde_json::Value` (deep copy).
    ///
    /// The result round-trips: `Document::from(doc.to_value()) == doc`.
    pub fn to_value(&self) -> Value {
        match self {
            Document::Null => Value::Null,
            Document::Bool(b) => Value::Bool(*b),
            Document::Number(n) => Value::Number(n.clone()),
            Document::String(s) => Value::String(s.clone()),
            Document::Array(items) => {
                Value::Array(items.iter().map(|d| d.to_value()).collect())
            }
            Document::Object(map) => Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_value())).collect(),
            ),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Document::Null
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Document::Null,
            Value::Bool(b) => Document::Bool(b),
            Value::Number(n) => Document::Number(n),
            Value::String(s) => Document::String(s),
            Value::Array(items) => Document::Array(
                items
                    .into_iter()
                    .map(|v| Arc::new(Document::from(v)))
                    .collect(),
            ),
            Value::Object(map) => Document::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Arc::new(Document::from(v))))
                    .collect(),
            ),
        }
    }
}

impl From<&Document> for Value {
    fn from(doc: &Document) -> Self {
        doc.to_value()
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Document::Null => serializer.serialize_unit(),
            Document::Bool(b) => serializer.serialize_bool(*b),
            Document::Number(n) => n.serialize(serializer),
            Document::String(s) => serializer.serialize_str(s),
            Document::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item.as_ref())?;
                }
                seq.end()
            }
            Document::Object(map) => {
                let mut entries = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    entries.serialize_entry(k, v.as_ref())?;
                }
                entries.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Document::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_scalars() {
        assert_eq!(Document::from(json!(null)), Document::Null);
        assert_eq!(Document::from(json!(true)), Document::Bool(true));
        assert_eq!(Document::from(json!("x")), Document::String("x".into()));
        assert_eq!(Document::from(json!(42)).as_i64(), Some(42));
        assert_eq!(Document::from(json!(1.5)).as_f64(), Some(1.5));
    }

    #[test]
    fn test_value_roundtrip() {
        let value = json!({
            "profiles": [{"name": "X", "tags": ["a", "b"]}, null],
            "count": 3,
            "active": false,
        });
        let doc = Document::from(value.clone());
        assert_eq!(doc.to_value(), value);
    }

    #[test]
    fn test_key_order_preserved() {
        let doc = Document::from(json!({"z": 1, "a": 2, "m": 3}));
        let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_serde_roundtrip() {
        let text = r#"{"b":[1,2,{"c":null}],"a":"x"}"#;
        let doc: Document = serde_json::from_str(text).unwrap();
        assert_eq!(serde_json::to_string(&doc).unwrap(), text);
    }

    #[test]
    fn test_accessors() {
        let doc = Document::from(json!({"items": ["x", "y"]}));
        assert!(doc.is_object());
        let items = doc.get_key("items").unwrap();
        assert!(items.is_array());
        assert_eq!(items.get_index(1).unwrap().as_str(), Some("y"));
        assert_eq!(items.get_index(2), None);
        assert_eq!(doc.get_key("missing"), None);
        assert_eq!(doc.get_index(0), None);
    }

    #[test]
    fn test_equality_ignores_sharing() {
        let shared = Arc::new(Document::from(json!({"k": 1})));
        let a = Document::Array(vec![shared.clone(), shared]);
        let b = Document::from(json!([{"k": 1}, {"k": 1}]));
        assert_eq!(a, b);
    }
}
