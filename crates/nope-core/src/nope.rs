use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::NopeError;

/// Payload returned by the Nope API.
///
/// Only [`NopeData::nope`] carries meaning for display, so it is the only
/// field a body must carry. The rest of the envelope is kept when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NopeResponse {
    #[serde(default)]
    pub success: bool,
    pub data: NopeData,
    #[serde(default)]
    pub error: Value,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NopeData {
    #[serde(default)]
    pub language: String,
    pub nope: String,
}

impl NopeResponse {
    /// Decode a raw JSON body into a typed response.
    pub fn from_value(value: Value) -> Result<Self, NopeError> {
        serde_json::from_value(value).map_err(|e| NopeError::UpstreamDecode(e.to_string()))
    }

    /// The refusal phrase shown to the user.
    pub fn phrase(&self) -> &str {
        &self.data.nope
    }
}
