use serde_json::{Map, Value};

/// Total accessors over an untyped JSON payload.
///
/// Every lookup answers `None` when the key is missing or holds a value of
/// the wrong type. A payload that is not an object has no keys at all.
pub trait PayloadExt {
    fn field(&self, key: &str) -> Option<&Value>;

    fn string_value(&self, key: &str) -> Option<&str> {
        self.field(key).and_then(Value::as_str)
    }

    fn dict_value(&self, key: &str) -> Option<&Map<String, Value>> {
        self.field(key).and_then(Value::as_object)
    }

    /// JSON numbers, with booleans read as `1.0`/`0.0`. Numeric strings are
    /// not numbers.
    fn number_value(&self, key: &str) -> Option<f64> {
        match self.field(key)? {
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            other => other.as_f64(),
        }
    }
}

impl PayloadExt for Value {
    fn field(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }
}

impl PayloadExt for Map<String, Value> {
    fn field(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}
