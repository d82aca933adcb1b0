//! Keyed dataset cache. A write replaces whatever was stored under the key;
//! payloads are kept exactly as the service sent them.

use std::collections::HashMap;
use serde_json::{Map, Value};

const PREVIEW_CHARS: usize = 200;

#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    datasets: HashMap<String, Value>,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or fully replace the dataset under `key`.
    pub fn write(&mut self, key: impl Into<String>, payload: Value) {
        self.datasets.insert(key.into(), payload);
    }

    pub fn read(&self, key: &str) -> Option<&Value> {
        self.datasets.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.datasets.contains_key(key)
    }

    /// Keys in sorted order
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.datasets.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    pub fn has_data(&self) -> bool {
        !self.is_empty()
    }

    /// The whole store as one JSON object, sent as chat context.
    pub fn snapshot(&self) -> Value {
        let map: Map<String, Value> = self
            .datasets
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Value::Object(map)
    }

    /// Pretty-printed payload, cut for the sidebar cards.
    pub fn preview(&self, key: &str) -> Option<String> {
        self.read(key).map(preview_payload)
    }
}

/// Pretty JSON cut to a fixed number of characters, with `...` when cut.
pub fn preview_payload(payload: &Value) -> String {
    let pretty = serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
    match pretty.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &pretty[..cut]),
        None => pretty,
    }
}
