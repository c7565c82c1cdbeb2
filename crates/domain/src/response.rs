//! Device response — the decoded JSON body returned by the device API.
//!
//! The body shape is only loosely specified: every endpoint reports a
//! `status` field (`"OK"` or `"FAIL"`) and may add arbitrary fields. The
//! raw value is kept so it can be shown to the user verbatim, in the order
//! the server sent the keys.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Status value reported on success.
pub const STATUS_OK: &str = "OK";
/// Status value reported on a logical failure.
pub const STATUS_FAIL: &str = "FAIL";

/// A decoded device response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceResponse(Value);

impl DeviceResponse {
    /// A `{"status":"OK"}` body.
    #[must_use]
    pub fn ok() -> Self {
        Self::with_status(STATUS_OK)
    }

    /// A `{"status":"FAIL","detail":..}` body.
    #[must_use]
    pub fn fail(detail: impl Into<String>) -> Self {
        Self::with_status(STATUS_FAIL).with("detail", detail.into())
    }

    fn with_status(status: &str) -> Self {
        let mut map = Map::new();
        map.insert("status".to_string(), Value::String(status.to_string()));
        Self(Value::Object(map))
    }

    /// Add (or replace) a field. No-op when the body is not a JSON object.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        if let Value::Object(map) = &mut self.0 {
            map.insert(key.to_string(), value.into());
        }
        self
    }

    /// The `status` field, when present and a string.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(Value::as_str)
    }

    /// Whether the device reported `status == "OK"`.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status() == Some(STATUS_OK)
    }

    /// Look up an arbitrary field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Borrow the raw JSON value.
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for DeviceResponse {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Compact JSON, as shown in alert dialogs.
impl fmt::Display for DeviceResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
