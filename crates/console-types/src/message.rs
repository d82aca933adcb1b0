use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::AgentReply;

/// Who produced a turn in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Agent,
}

/// Monotonic message token, assigned by the timeline on append.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub u64);

/// A single entry in the conversation timeline.
///
/// Only the timeline creates these (from a [`MessageDraft`]), which is where
/// `id` and `timestamp` get assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl Message {
    /// A turn is failed when it carries an error, or the agent reported
    /// `success: false`. Content may still be empty in either case.
    pub fn is_failure(&self) -> bool {
        self.error.is_some() || self.success == Some(false)
    }

    /// Text shown for this turn: the error for failed turns, else the content.
    pub fn display_text(&self) -> &str {
        match &self.error {
            Some(err) => err,
            None => &self.content,
        }
    }
}

/// Everything about a message except what the timeline assigns.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageDraft {
    pub role: Role,
    pub content: String,
    pub success: Option<bool>,
    pub error: Option<String>,
}

impl MessageDraft {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: text.into(),
            success: None,
            error: None,
        }
    }

    /// Agent turn that completed normally on our side.
    pub fn agent(text: impl Into<String>) -> Self {
        Self {
            role: Role::Agent,
            content: text.into(),
            success: Some(true),
            error: None,
        }
    }

    /// Agent turn built from a remote reply. The reply's own `success` and
    /// `error` are kept as-is.
    pub fn from_reply(reply: AgentReply) -> Self {
        Self {
            role: Role::Agent,
            content: reply.response,
            success: Some(reply.success),
            error: reply.error,
        }
    }

    /// Agent turn for a call that never came back cleanly.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            role: Role::Agent,
            content: String::new(),
            success: Some(false),
            error: Some(error.into()),
        }
    }
}
