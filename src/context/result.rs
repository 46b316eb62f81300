// context/result.rs
use crate::context::{ContextMap, ContextValue};
use crate::errors::ViewError;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

pub const RESULT_KEY: &str = "result";
pub const RESULT_OK: &str = "ok";
pub const RESULT_ERROR: &str = "error";

#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Ok,
    Error,
    /// A `result` value supplied by the view that is neither "ok" nor "error".
    Other(String),
}

/// The body of a JSON data response.
///
/// Serializes as `{"result": ..., ...payload}` on success and as
/// `{"result": "error", "sError": msg, "text": msg}` for errors.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextResult {
    result: ContextValue,
    payload: ContextMap,
    message: Option<String>,
}

impl ContextResult {
    /// Wraps a view's context mapping. A `result` entry in the mapping is kept
    /// as-is; otherwise the result is "ok".
    pub fn ok(mut payload: ContextMap) -> Self {
        let result = payload
            .remove(RESULT_KEY)
            .unwrap_or_else(|| ContextValue::from(RESULT_OK));
        Self {
            result,
            payload,
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            result: ContextValue::from(RESULT_ERROR),
            payload: ContextMap::new(),
            message: Some(message.into()),
        }
    }

    pub fn status(&self) -> Status {
        match self.result.as_text().as_deref() {
            Some(RESULT_OK) => Status::Ok,
            Some(RESULT_ERROR) => Status::Error,
            Some(other) => Status::Other(other.to_string()),
            None => Status::Other(self.result.to_string()),
        }
    }

}

impl TryFrom<ContextValue> for ContextResult {
    type Error = ViewError;

    fn try_from(value: ContextValue) -> Result<Self, Self::Error> {
        match value {
            ContextValue::Map(map) => Ok(ContextResult::ok(map)),
            other => Err(ViewError::NotAMapping(other.kind())),
        }
    }
}

impl Serialize for ContextResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extra = if self.message.is_some() { 2 } else { 0 };
        let mut map = serializer.serialize_map(Some(1 + extra + self.payload.len()))?;
        map.serialize_entry(RESULT_KEY, &self.result)?;
        if let Some(msg) = &self.message {
            map.serialize_entry("sError", msg)?;
            map.serialize_entry("text", msg)?;
        }
        for (k, v) in self.payload.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
