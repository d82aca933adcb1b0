use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConsoleError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Another request is still in flight")]
    Busy,

    #[error("Message is empty")]
    EmptyInput,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),

    #[error("{0}")]
    Other(String),
}

impl ConsoleError {
    /// True for failures that happened on the way to or from the agent service.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ConsoleError::Network(_) | ConsoleError::Http { .. } | ConsoleError::Decode(_)
        )
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(e: serde_json::Error) -> Self {
        ConsoleError::Serialization(e.to_string())
    }
}
