//! Request and response bodies of the remote agent service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatPayload {
    pub message: String,
    /// Snapshot of every dataset currently loaded, keyed by name
    pub context: Value,
}

/// Body returned by `POST /chat` and `POST /analyze/{type}`.
///
/// `success: false` is an application-level failure; `error` then carries the
/// agent's explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentReply {
    #[serde(default)]
    pub response: String,
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

fn default_success() -> bool {
    true
}

/// Body returned by `GET /sample-data/{type}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleData {
    pub data: Value,
    #[serde(default)]
    pub description: String,
}
