use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConsoleError;

/// Dataset families the agent service can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    Sales,
    Inventory,
    Pricing,
}

impl DatasetKind {
    /// Store key and path segment for this kind
    pub fn key(&self) -> &'static str {
        match self {
            DatasetKind::Sales => "sales",
            DatasetKind::Inventory => "inventory",
            DatasetKind::Pricing => "pricing",
        }
    }

    pub fn all() -> &'static [DatasetKind] {
        &[DatasetKind::Sales, DatasetKind::Inventory, DatasetKind::Pricing]
    }

    /// Button label for generating this dataset
    pub fn generate_label(&self) -> &str {
        match self {
            DatasetKind::Sales => "Generate Sales Data",
            DatasetKind::Inventory => "Generate Inventory",
            DatasetKind::Pricing => "Generate Pricing",
        }
    }

    /// Button label for the quick analysis of this dataset
    pub fn analysis_label(&self) -> &str {
        match self {
            DatasetKind::Sales => "Analyze Sales",
            DatasetKind::Inventory => "Optimize Inventory",
            DatasetKind::Pricing => "Analyze Pricing",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DatasetKind {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sales" => Ok(DatasetKind::Sales),
            "inventory" => Ok(DatasetKind::Inventory),
            "pricing" => Ok(DatasetKind::Pricing),
            other => Err(ConsoleError::Config(format!("unknown dataset kind: {}", other))),
        }
    }
}
