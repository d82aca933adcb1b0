use serde::{Deserialize, Serialize};

use crate::dataset::DatasetKind;

/// Top-level console configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    pub api: ApiConfig,
    /// Example queries offered while the timeline is empty
    pub starter_prompts: Vec<String>,
    /// Datasets offered in the sidebar
    pub dataset_kinds: Vec<DatasetKind>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            starter_prompts: DEFAULT_STARTER_PROMPTS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            dataset_kinds: DatasetKind::all().to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Join the base URL and an endpoint path, e.g. `endpoint("chat")`.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim().trim_end_matches('/');
        let base = if base.is_empty() { DEFAULT_API_BASE } else { base };
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

const DEFAULT_STARTER_PROMPTS: &[&str] = &[
    "Analyze the sales trends of my products",
    "Which products need urgent restocking?",
    "Suggest pricing strategies to maximize profit",
    "Identify cross-selling opportunities",
    "Analyze performance by product category",
];
