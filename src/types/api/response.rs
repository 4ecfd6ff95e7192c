use crate::models::ctx::FormatError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The envelope every endpoint of the API answers with.
///
/// Fields are kept as raw JSON so that a malformed payload is reported as a
/// [`FormatError`] instead of failing the whole request.
#[derive(Clone, PartialEq, Serialize, Deserialize, Default, Debug)]
pub struct ApiResponse {
    #[serde(default)]
    pub success: Value,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub pagination: Value,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        is_truthy(&self.success)
    }
    pub fn ensure_success(self) -> Result<Self, FormatError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(FormatError::Unsuccessful(self.error))
        }
    }
    pub fn data<T: DeserializeOwned>(&self) -> Result<T, FormatError> {
        serde_json::from_value(self.data.to_owned())
            .map_err(|error| FormatError::MalformedData(error.to_string()))
    }
    /// `None` when the response carries no pagination.
    pub fn pagination<T: DeserializeOwned>(&self) -> Result<Option<T>, FormatError> {
        match &self.pagination {
            Value::Null => Ok(None),
            pagination => serde_json::from_value(pagination.to_owned())
                .map(Some)
                .map_err(|error| FormatError::MalformedData(error.to_string())),
        }
    }
}

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(value) => *value,
        Value::Number(number) => number.as_f64().map_or(true, |number| number != 0.0),
        Value::String(string) => !string.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
