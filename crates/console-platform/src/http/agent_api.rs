//! HTTP adapter for the remote analytics agent.
//!
//! Uses browser `fetch()` via gloo-net for WASM compatibility.
//! Any non-2xx status, connection failure, or undecodable body comes back as
//! `Err`; an agent that answered with `success: false` is returned as-is.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use console_core::ports::AgentApiPort;
use console_types::{
    ConsoleError, Result,
    api::{AgentReply, ChatPayload, SampleData},
    config::ApiConfig,
    dataset::DatasetKind,
};

/// Agent service reached over plain JSON-over-HTTP.
pub struct HttpAgentApi {
    config: ApiConfig,
}

impl HttpAgentApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn chat_url(&self) -> String {
        self.config.endpoint("chat")
    }

    pub fn sample_data_url(&self, kind: DatasetKind) -> String {
        self.config.endpoint(&format!("sample-data/{}", kind.key()))
    }

    pub fn analyze_url(&self, analysis: &str) -> String {
        self.config.endpoint(&format!("analyze/{}", analysis.trim()))
    }
}

#[async_trait(?Send)]
impl AgentApiPort for HttpAgentApi {
    async fn chat(&self, payload: ChatPayload) -> Result<AgentReply> {
        let url = self.chat_url();
        log::debug!("POST {}", url);

        let response = Request::post(&url)
            .json(&payload)
            .map_err(|e| ConsoleError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ConsoleError::Network(e.to_string()))?;

        decode(response).await
    }

    async fn sample_data(&self, kind: DatasetKind) -> Result<SampleData> {
        let url = self.sample_data_url(kind);
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ConsoleError::Network(e.to_string()))?;

        decode(response).await
    }

    async fn analyze(&self, analysis: &str) -> Result<AgentReply> {
        let url = self.analyze_url(analysis);
        log::debug!("POST {}", url);

        let response = Request::post(&url)
            .send()
            .await
            .map_err(|e| ConsoleError::Network(e.to_string()))?;

        decode(response).await
    }

    fn endpoint_name(&self) -> &str {
        &self.config.base_url
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    if !response.ok() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        return Err(ConsoleError::Http { status, body });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ConsoleError::Decode(e.to_string()))
}
