//! JSON bridge
//!
//! Conversion from `serde_json` documents and serialization that matches host
//! JSON stringification: `undefined` and callables are dropped from records
//! and become `null` elsewhere, non-finite numbers become `null`.

use crate::error::Result;
use crate::record::Record;
use crate::sequence::Sequence;
use crate::value::{Map, Value};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as Json;

/// Largest integer that survives an `f64` round trip
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl Value {
    /// Parse JSON text into a raw value
    pub fn from_json_str(text: &str) -> Result<Value> {
        let json: Json = serde_json::from_str(text)?;
        Ok(Value::from(json))
    }

    /// Convert into a `serde_json` document
    pub fn to_json(&self) -> Json {
        match self {
            Value::Undefined | Value::Null | Value::Function(_) => Json::Null,
            Value::Bool(b) => Json::Bool(*b),
            Value::Number(n) => number_to_json(*n),
            Value::String(s) => Json::String(s.clone()),
            Value::Object(map) => Json::Object(
                map.iter()
                    .filter(|(_, value)| !is_dropped_from_record(value))
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
            Value::Array(items) => Json::Array(items.iter().map(Value::to_json).collect()),
            Value::Record(record) => Json::Object(
                record
                    .iter()
                    .filter(|(_, value)| !is_dropped_from_record(value))
                    .map(|(key, value)| (key.to_string(), value.to_json()))
                    .collect(),
            ),
            Value::Sequence(seq) => Json::Array(seq.iter().map(Value::to_json).collect()),
        }
    }

    /// Serialize to a JSON string
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn is_dropped_from_record(value: &Value) -> bool {
    matches!(value, Value::Undefined | Value::Function(_))
}

fn is_safe_integer(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER
}

fn number_to_json(n: f64) -> Json {
    if is_safe_integer(n) {
        return Json::from(n as i64);
    }
    serde_json::Number::from_f64(n).map_or(Json::Null, Json::Number)
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Json::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect::<Map>(),
            ),
        }
    }
}

impl From<&Value> for Json {
    fn from(value: &Value) -> Self {
        value.to_json()
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null | Value::Function(_) => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => {
                if is_safe_integer(*n) {
                    serializer.serialize_i64(*n as i64)
                } else if n.is_finite() {
                    serializer.serialize_f64(*n)
                } else {
                    serializer.serialize_unit()
                }
            }
            Value::String(s) => serializer.serialize_str(s),
            Value::Object(map) => {
                serialize_entries(map.iter().map(|(k, v)| (k.as_str(), v)), serializer)
            }
            Value::Array(items) => serialize_elements(items, serializer),
            Value::Record(record) => record.serialize(serializer),
            Value::Sequence(seq) => seq.serialize(serializer),
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_entries(self.iter(), serializer)
    }
}

impl Serialize for Sequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_elements(self.source(), serializer)
    }
}

fn serialize_entries<'a, I, S>(entries: I, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    I: Iterator<Item = (&'a str, &'a Value)>,
    S: Serializer,
{
    let kept: Vec<_> = entries
        .filter(|(_, value)| !is_dropped_from_record(value))
        .collect();
    let mut map = serializer.serialize_map(Some(kept.len()))?;
    for (key, value) in kept {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

fn serialize_elements<S: Serializer>(
    items: &[Value],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(items.len()))?;
    for item in items {
        seq.serialize_element(item)?;
    }
    seq.end()
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Json::deserialize(deserializer).map(Value::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Callable;
    use crate::wrap;
    use serde_json::json;

    #[test]
    fn test_from_json_preserves_key_order() {
        let value = Value::from_json_str(r#"{"z":1,"a":2,"m":3}"#).unwrap();
        let view = wrap(value);
        let keys: Vec<_> = view.as_record().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = Value::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, crate::ImmuError::Json(_)));
    }

    #[test]
    fn test_view_serializes_like_source() {
        let source = json!({"a": [1, 2, {"b": null}], "c": "d", "e": 1.5});
        let raw = Value::from(source.clone());
        let view = wrap(raw.clone());

        assert_eq!(view.to_json(), source);
        assert_eq!(
            view.to_json_string().unwrap(),
            raw.to_json_string().unwrap()
        );
        assert_eq!(serde_json::to_value(&view).unwrap(), source);
    }

    #[test]
    fn test_undefined_and_callables() {
        let mut map = Map::new();
        map.insert("gone".to_string(), Value::Undefined);
        map.insert("func".to_string(), Value::Function(Callable::new(|_| Value::Null)));
        map.insert(
            "list".to_string(),
            Value::from(vec![Value::Undefined, Value::from(f64::NAN)]),
        );
        let view = wrap(Value::Object(map));

        let expected = json!({"list": [null, null]});
        assert_eq!(view.to_json(), expected);
        assert_eq!(view.to_json_string().unwrap(), r#"{"list":[null,null]}"#);
    }

    #[test]
    fn test_integral_numbers_serialize_as_integers() {
        let view = wrap(Value::from([1.0, -0.0, 2.5]));
        assert_eq!(view.to_json_string().unwrap(), "[1,0,2.5]");
    }

    #[test]
    fn test_deserialize_value() {
        let value: Value = serde_json::from_str(r#"[1, {"a": true}]"#).unwrap();
        assert_eq!(value.get(1usize).and_then(|v| v.get("a")), Some(Value::from(true)));
    }
}
