use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Identifier of a JSON-RPC call, echoed back verbatim in the response.
///
/// `Null` is kept distinct from an absent id: a request carrying
/// `"id": null` is stored as `Some(RequestId::Null)`, a request without
/// the member as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    String(String),
    Number(Number),
    Null,
}

impl RequestId {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RequestId::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            RequestId::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, RequestId::Null)
    }

    /// Converts a decoded JSON member into an id; only scalars and null qualify.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(RequestId::String(s)),
            Value::Number(n) => Some(RequestId::Number(n)),
            Value::Null => Some(RequestId::Null),
            _ => None,
        }
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestId::String(s) => write!(f, "{}", s),
            RequestId::Number(n) => write!(f, "{}", n),
            RequestId::Null => write!(f, "null"),
        }
    }
}

impl From<i64> for RequestId {
    fn from(n: i64) -> Self {
        RequestId::Number(n.into())
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        RequestId::String(s.to_string())
    }
}

impl From<String> for RequestId {
    fn from(s: String) -> Self {
        RequestId::String(s)
    }
}

/// JSON-RPC version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonRpcVersion {
    #[default]
    V2_0,
}

impl JsonRpcVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            JsonRpcVersion::V2_0 => crate::JSONRPC_VERSION,
        }
    }
}

impl fmt::Display for JsonRpcVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for JsonRpcVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for JsonRpcVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "2.0" => Ok(JsonRpcVersion::V2_0),
            _ => Err(serde::de::Error::custom(format!(
                "Invalid JSON-RPC version: {}",
                s
            ))),
        }
    }
}

/// Parameters of a call: positional (array) or named (object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestParams {
    Array(Vec<Value>),
    Object(Map<String, Value>),
}

impl RequestParams {
    /// Look up a named parameter.
    ///
    /// A key present literally in the object wins. Otherwise the key is
    /// treated as a dotted path: each segment descends into a nested object
    /// by key or into a nested array by decimal index. Positional params
    /// never match.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let RequestParams::Object(map) = self else {
            return None;
        };

        if let Some(value) = map.get(key) {
            return Some(value);
        }

        let mut segments = key.split('.');
        let mut current = map.get(segments.next()?)?;
        for segment in segments {
            current = match current {
                Value::Object(inner) => inner.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Get a parameter by index (array params only)
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            RequestParams::Array(items) => items.get(index),
            RequestParams::Object(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            RequestParams::Object(map) => map.is_empty(),
            RequestParams::Array(items) => items.is_empty(),
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            RequestParams::Object(map) => Value::Object(map.clone()),
            RequestParams::Array(items) => Value::Array(items.clone()),
        }
    }
}

impl From<Vec<Value>> for RequestParams {
    fn from(items: Vec<Value>) -> Self {
        RequestParams::Array(items)
    }
}

impl From<Map<String, Value>> for RequestParams {
    fn from(map: Map<String, Value>) -> Self {
        RequestParams::Object(map)
    }
}

impl TryFrom<Value> for RequestParams {
    type Error = Value;

    /// Scalars are handed back unchanged as the error value.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => Ok(RequestParams::Array(items)),
            Value::Object(map) => Ok(RequestParams::Object(map)),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_id_serialization() {
        assert_eq!(
            serde_json::to_string(&RequestId::from("test")).unwrap(),
            r#""test""#
        );
        assert_eq!(serde_json::to_string(&RequestId::from(42)).unwrap(), "42");
        assert_eq!(serde_json::to_string(&RequestId::Null).unwrap(), "null");
    }

    #[test]
    fn test_request_id_keeps_fractional_numbers() {
        let id: RequestId = serde_json::from_str("1.5").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "1.5");
        assert_eq!(id.as_i64(), None);
    }

    #[test]
    fn test_request_id_rejects_structured_values() {
        assert_eq!(RequestId::from_value(json!(null)), Some(RequestId::Null));
        assert_eq!(RequestId::from_value(json!([1])), None);
        assert_eq!(RequestId::from_value(json!({"a": 1})), None);
        assert_eq!(RequestId::from_value(json!(true)), None);
    }

    #[test]
    fn test_json_rpc_version() {
        let version = JsonRpcVersion::V2_0;
        assert_eq!(version.as_str(), "2.0");
        assert_eq!(serde_json::to_string(&version).unwrap(), r#""2.0""#);
        assert!(serde_json::from_str::<JsonRpcVersion>(r#""1.0""#).is_err());
    }

    #[test]
    fn test_params_dotted_lookup() {
        let params = RequestParams::try_from(json!({
            "user": {"name": "ada", "tags": ["x", "y"]},
            "plain.key": 7
        }))
        .unwrap();

        assert_eq!(params.get("user.name"), Some(&json!("ada")));
        assert_eq!(params.get("user.tags.1"), Some(&json!("y")));
        assert_eq!(params.get("plain.key"), Some(&json!(7)));
        assert_eq!(params.get("user.missing"), None);
        assert_eq!(params.get("user.name.deeper"), None);
    }

    #[test]
    fn test_positional_params_have_no_names() {
        let params = RequestParams::from(vec![json!(1), json!(2)]);
        assert_eq!(params.get("0"), None);
        assert_eq!(params.get_index(1), Some(&json!(2)));
    }

    #[test]
    fn test_scalar_params_rejected() {
        assert_eq!(RequestParams::try_from(json!(3)), Err(json!(3)));
    }
}
