//! Serializer for snapshot state (state <-> JSON value).

use serde_json::Value;

use super::sink::SinkError;

/// Converts state to and from the JSON form pushed to a sink.
pub trait Serializer<S>: Send + Sync {
    fn to_value(&self, state: &S) -> Result<Value, SinkError>;
    fn from_value(&self, value: Value) -> Result<S, SinkError>;
}

/// serde_json-based serializer. Requires S: Serialize + DeserializeOwned.
pub struct JsonSerializer;

impl<S> Serializer<S> for JsonSerializer
where
    S: serde::Serialize + serde::de::DeserializeOwned,
{
    fn to_value(&self, state: &S) -> Result<Value, SinkError> {
        serde_json::to_value(state).map_err(|e| SinkError::Serialization(e.to_string()))
    }

    fn from_value(&self, value: Value) -> Result<S, SinkError> {
        serde_json::from_value(value).map_err(|e| SinkError::Serialization(e.to_string()))
    }
}
