use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A message published on a realtime topic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RealtimeMessage {
    pub topic: String,
    pub payload: String,
}

impl fmt::Display for RealtimeMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => f.write_str("Failed to serialize"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct MessageResponse {
    /// This is a message from the server.
    pub message: String,
}
