use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dataset::DatasetKind;

/// The three outbound call families.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallKind {
    Chat,
    GenerateDataset(DatasetKind),
    QuickAnalysis(String),
}

impl fmt::Display for CallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallKind::Chat => f.write_str("chat"),
            CallKind::GenerateDataset(kind) => write!(f, "generate-dataset/{}", kind),
            CallKind::QuickAnalysis(name) => write!(f, "quick-analysis/{}", name),
        }
    }
}

/// Dispatcher state machine: `Idle → Busy → Idle`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchState {
    #[default]
    Idle,
    Busy(CallKind),
}

impl DispatchState {
    pub fn is_busy(&self) -> bool {
        matches!(self, DispatchState::Busy(_))
    }

    /// Short status line for the UI
    pub fn label(&self) -> String {
        match self {
            DispatchState::Idle => "Online".to_string(),
            DispatchState::Busy(CallKind::Chat) => "Processing...".to_string(),
            DispatchState::Busy(CallKind::GenerateDataset(kind)) => {
                format!("Generating {} data...", kind)
            }
            DispatchState::Busy(CallKind::QuickAnalysis(name)) => {
                format!("Analyzing {}...", name)
            }
        }
    }
}
