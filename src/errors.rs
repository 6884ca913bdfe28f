use reqwest::StatusCode;
use std::fmt;

/// Every way a tick can fail to produce slot data. All variants surface to the
/// viewer as the same warning; the detail only goes to the log.
#[derive(Debug)]
pub enum DataUnavailable {
    Network(reqwest::Error),
    Status(StatusCode),
    Parse(serde_json::Error),
    Shape(String),
}

impl DataUnavailable {
    pub fn shape(found: &serde_json::Value) -> Self {
        let kind = match found {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "a boolean",
            serde_json::Value::Number(_) => "a number",
            serde_json::Value::String(_) => "a string",
            serde_json::Value::Array(_) => "an array",
            serde_json::Value::Object(_) => "an object",
        };
        Self::Shape(format!("expected an array of slots, got {kind}"))
    }
}

impl fmt::Display for DataUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataUnavailable::Network(err) => write!(f, "request failed: {err}"),
            DataUnavailable::Status(status) => write!(f, "unexpected status {status}"),
            DataUnavailable::Parse(err) => write!(f, "invalid slot payload: {err}"),
            DataUnavailable::Shape(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for DataUnavailable {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataUnavailable::Network(err) => Some(err),
            DataUnavailable::Parse(err) => Some(err),
            DataUnavailable::Status(_) | DataUnavailable::Shape(_) => None,
        }
    }
}

impl From<reqwest::Error> for DataUnavailable {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err)
    }
}

impl From<serde_json::Error> for DataUnavailable {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}
