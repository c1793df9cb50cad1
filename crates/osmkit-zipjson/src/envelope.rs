//! The single-key envelope wrapper.

use serde_json::{Map, Value};

/// The only key an envelope may carry.
pub const ZIPJSON_KEY: &str = "base64(zip(o))";

/// A value that passed the envelope shape check.
///
/// The payload has not been decoded yet; it is only known to be present
/// and truthy under a key set of exactly `{ZIPJSON_KEY}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    payload: Value,
}

impl Envelope {
    /// Wrap an already-encoded payload string.
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: Value::String(payload.into()),
        }
    }

    /// Check the shape of `value` and return an envelope view if it matches.
    ///
    /// Extra sibling keys make the value malformed even when the payload key
    /// is present and decodable.
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        if map.len() != 1 {
            return None;
        }
        let payload = map.get(ZIPJSON_KEY)?;
        is_truthy(payload).then(|| Self {
            payload: payload.clone(),
        })
    }

    /// The raw payload value. A string for anything produced by [`zip`](crate::zip).
    pub const fn payload(&self) -> &Value {
        &self.payload
    }

    /// Convert back into the JSON object form.
    pub fn into_value(self) -> Value {
        let mut map = Map::with_capacity(1);
        map.insert(ZIPJSON_KEY.to_string(), self.payload);
        Value::Object(map)
    }
}

impl From<Envelope> for Value {
    fn from(envelope: Envelope) -> Self {
        envelope.into_value()
    }
}

/// Empty, zero and null payloads do not count as present.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_single_key_object() {
        let value = json!({ ZIPJSON_KEY: "eJwDAAAAAAE=" });
        let envelope = Envelope::from_value(&value).unwrap();
        assert_eq!(envelope.payload(), &json!("eJwDAAAAAAE="));
        assert_eq!(envelope.into_value(), value);
    }

    #[test]
    fn rejects_extra_sibling_keys() {
        let value = json!({ ZIPJSON_KEY: "X", "extra": 1 });
        assert!(Envelope::from_value(&value).is_none());
    }

    #[test]
    fn rejects_missing_key() {
        assert!(Envelope::from_value(&json!({})).is_none());
        assert!(Envelope::from_value(&json!({ "other": "X" })).is_none());
    }

    #[test]
    fn rejects_non_objects() {
        assert!(Envelope::from_value(&json!(123)).is_none());
        assert!(Envelope::from_value(&json!("123")).is_none());
        assert!(Envelope::from_value(&json!([ZIPJSON_KEY])).is_none());
        assert!(Envelope::from_value(&Value::Null).is_none());
    }

    #[test]
    fn rejects_falsy_payloads() {
        for payload in [json!(null), json!(false), json!(0), json!(""), json!([]), json!({})] {
            let value = json!({ ZIPJSON_KEY: payload });
            assert!(Envelope::from_value(&value).is_none(), "{value}");
        }
    }

    #[test]
    fn truthy_non_string_payload_passes_shape_check() {
        let value = json!({ ZIPJSON_KEY: 5 });
        assert!(Envelope::from_value(&value).is_some());
    }
}
