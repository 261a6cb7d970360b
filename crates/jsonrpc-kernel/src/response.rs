use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{JsonRpcErrorCode, JsonRpcErrorObject, ResponseError};
use crate::request::Request;
use crate::types::{JsonRpcVersion, RequestId};

/// What a response carries: exactly one of a result or an error
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Result(Value),
    Error(JsonRpcErrorObject),
}

/// A JSON-RPC 2.0 response envelope.
///
/// Built fresh for every handled request. Setting a result clears any error
/// and vice versa, so the serialised form never carries both.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    id: Option<RequestId>,
    outcome: Outcome,
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}

impl Response {
    /// An empty success response: `null` result, no id yet
    pub fn new() -> Self {
        Self {
            id: None,
            outcome: Outcome::Result(Value::Null),
        }
    }

    pub fn success(id: Option<RequestId>, result: Value) -> Self {
        Self {
            id,
            outcome: Outcome::Result(result),
        }
    }

    pub fn error(id: Option<RequestId>, error: ResponseError) -> Self {
        Self {
            id,
            outcome: Outcome::Error(error.into()),
        }
    }

    /// Mark the response successful, dropping any previous error
    pub fn set_result(&mut self, result: Value) -> &mut Self {
        self.outcome = Outcome::Result(result);
        self
    }

    /// Mark the response failed, dropping any previous result
    pub fn set_error(
        &mut self,
        code: impl Into<JsonRpcErrorCode>,
        message: impl Into<String>,
        data: Option<Value>,
    ) -> &mut Self {
        self.outcome = Outcome::Error(JsonRpcErrorObject {
            code: code.into().code(),
            message: message.into(),
            data,
        });
        self
    }

    pub fn set_response_error(&mut self, error: ResponseError) -> &mut Self {
        self.outcome = Outcome::Error(error.into());
        self
    }

    /// Set the id explicitly; `prepare` will not override it afterwards
    pub fn set_id(&mut self, id: RequestId) -> &mut Self {
        self.id = Some(id);
        self
    }

    /// Copy the originating request's id unless one was set explicitly
    pub fn prepare(&mut self, request: &Request) -> &mut Self {
        if self.id.is_none() {
            self.id = request.id().cloned();
        }
        self
    }

    pub fn id(&self) -> Option<&RequestId> {
        self.id.as_ref()
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn result(&self) -> Option<&Value> {
        match &self.outcome {
            Outcome::Result(value) => Some(value),
            Outcome::Error(_) => None,
        }
    }

    pub fn error_object(&self) -> Option<&JsonRpcErrorObject> {
        match &self.outcome {
            Outcome::Error(error) => Some(error),
            Outcome::Result(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.outcome, Outcome::Error(_))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_vec(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

impl Serialize for Response {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("jsonrpc", &JsonRpcVersion::V2_0)?;
        // An unknown id goes out as null
        map.serialize_entry("id", self.id.as_ref().unwrap_or(&RequestId::Null))?;
        match &self.outcome {
            Outcome::Result(value) => map.serialize_entry("result", value)?,
            Outcome::Error(error) => map.serialize_entry("error", error)?,
        }
        map.end()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Envelope {
    #[serde(rename = "jsonrpc")]
    _version: JsonRpcVersion,
    #[serde(default)]
    id: Option<RequestId>,
    #[serde(default, deserialize_with = "present")]
    result: Option<Value>,
    #[serde(default)]
    error: Option<JsonRpcErrorObject>,
}

/// Keeps `"result": null` distinguishable from a missing member
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl<'de> Deserialize<'de> for Response {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let envelope = Envelope::deserialize(deserializer)?;
        let outcome = match (envelope.result, envelope.error) {
            (Some(result), None) => Outcome::Result(result),
            (None, Some(error)) => Outcome::Error(error),
            (Some(_), Some(_)) => {
                return Err(D::Error::custom("response carries both result and error"));
            }
            (None, None) => {
                return Err(D::Error::custom("response carries neither result nor error"));
            }
        };

        Ok(Self {
            id: envelope.id.filter(|id| !id.is_null()),
            outcome,
        })
    }
}
