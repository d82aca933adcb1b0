//! Port traits — the hexagonal architecture boundary.
//!
//! The trait is defined here in `console-core` (pure Rust).
//! The HTTP implementation lives in `console-platform`.
//! The core never imports platform code; it only depends on this trait.

use async_trait::async_trait;
use console_types::{
    Result,
    api::{AgentReply, ChatPayload, SampleData},
    dataset::DatasetKind,
};

// ─── Agent API Port ──────────────────────────────────────────

/// The remote analytics agent.
///
/// `Err` means the call never came back cleanly (transport failure).
/// An agent that answered but failed reports it inside [`AgentReply`].
#[async_trait(?Send)]
pub trait AgentApiPort {
    /// `POST /chat`
    async fn chat(&self, payload: ChatPayload) -> Result<AgentReply>;

    /// `GET /sample-data/{kind}`
    async fn sample_data(&self, kind: DatasetKind) -> Result<SampleData>;

    /// `POST /analyze/{analysis}`
    async fn analyze(&self, analysis: &str) -> Result<AgentReply>;

    /// Base URL of the service (for logging/debug)
    fn endpoint_name(&self) -> &str;
}
