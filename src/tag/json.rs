//! JSON rendition of tag trees
//!
//! Objects keep their key order (serde_json is built with `preserve_order`),
//! so a tree read from disk fingerprints the same way every time.

use super::value::{Compound, Tag};
use crate::error::{Result, TrophyError};
use serde_json::{Map, Number, Value};

impl Tag {
    /// Convert a JSON value into a tag
    ///
    /// Integers that fit in 32 bits become `Int`, wider ones `Long`; other
    /// numbers become `Double`; booleans become `Byte(0|1)`. `null` has no
    /// tag equivalent and is rejected.
    pub fn from_json(value: &Value) -> Result<Tag> {
        Ok(match value {
            Value::Null => {
                return Err(TrophyError::MalformedTag(
                    "null has no tag representation".to_string(),
                ))
            }
            Value::Bool(b) => Tag::Byte(i8::from(*b)),
            Value::Number(n) => number_to_tag(n)?,
            Value::String(s) => Tag::String(s.clone()),
            Value::Array(items) => Tag::List(
                items
                    .iter()
                    .map(Tag::from_json)
                    .collect::<Result<Vec<_>>>()?,
            ),
            Value::Object(map) => Tag::Compound(Compound::from_json_map(map)?),
        })
    }

    pub fn to_json(&self) -> Value {
        match self {
            Tag::Byte(v) => Value::from(*v),
            Tag::Short(v) => Value::from(*v),
            Tag::Int(v) => Value::from(*v),
            Tag::Long(v) => Value::from(*v),
            Tag::Float(v) => float_value(*v as f64),
            Tag::Double(v) => float_value(*v),
            Tag::String(s) => Value::String(s.clone()),
            Tag::List(items) => Value::Array(items.iter().map(Tag::to_json).collect()),
            Tag::Compound(c) => c.to_json(),
        }
    }
}

impl Compound {
    /// Convert a JSON object into a compound; any other JSON value is an error
    pub fn from_json(value: &Value) -> Result<Compound> {
        match value {
            Value::Object(map) => Compound::from_json_map(map),
            other => Err(TrophyError::MalformedTag(format!(
                "expected an object, found {}",
                json_kind(other)
            ))),
        }
    }

    fn from_json_map(map: &Map<String, Value>) -> Result<Compound> {
        let mut compound = Compound::new();
        for (key, value) in map {
            let tag = Tag::from_json(value)
                .map_err(|e| TrophyError::MalformedTag(format!("field '{}': {}", key, e)))?;
            compound.put(key.clone(), tag);
        }
        Ok(compound)
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (key, value) in self.iter() {
            map.insert(key.to_string(), value.to_json());
        }
        Value::Object(map)
    }
}

fn number_to_tag(n: &Number) -> Result<Tag> {
    if let Some(i) = n.as_i64() {
        return Ok(match i32::try_from(i) {
            Ok(small) => Tag::Int(small),
            Err(_) => Tag::Long(i),
        });
    }
    n.as_f64()
        .map(Tag::Double)
        .ok_or_else(|| TrophyError::MalformedTag(format!("number {} is out of range", n)))
}

fn float_value(v: f64) -> Value {
    Number::from_f64(v).map(Value::Number).unwrap_or(Value::Null)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_keeps_key_order() {
        let value = json!({ "z": 1, "a": 2, "m": 3 });
        let compound = Compound::from_json(&value).unwrap();

        let names: Vec<&str> = compound.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_number_mapping() {
        let value = json!({ "small": 200, "wide": 5_000_000_000i64, "frac": 0.25, "flag": true });
        let c = Compound::from_json(&value).unwrap();

        assert_eq!(c.get("small"), Some(&Tag::Int(200)));
        assert_eq!(c.get("wide"), Some(&Tag::Long(5_000_000_000)));
        assert_eq!(c.get("frac"), Some(&Tag::Double(0.25)));
        assert_eq!(c.get("flag"), Some(&Tag::Byte(1)));
    }

    #[test]
    fn test_null_rejected() {
        let value = json!({ "entityType": null });
        let err = Compound::from_json(&value).unwrap_err();
        assert!(err.to_string().contains("entityType"));
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(Compound::from_json(&json!([1, 2])).is_err());
    }

    #[test]
    fn test_to_json_nested() {
        let value = json!({ "id": "minecraft:pig", "Passengers": [ { "id": "minecraft:zombie" } ] });
        let c = Compound::from_json(&value).unwrap();
        assert_eq!(c.to_json(), value);
    }
}
