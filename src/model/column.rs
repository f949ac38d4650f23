//! Datasource column and saved metric records.

use serde::{Deserialize, Serialize};

/// A physical column of the datasource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub column_name: String,
    /// Database type as reported by the datasource (e.g. `VARCHAR(255)`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}

impl Column {
    pub fn new(column_name: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
            data_type: None,
        }
    }

    pub fn with_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = Some(data_type.into());
        self
    }
}

/// A named metric stored in datasource metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedMetric {
    pub metric_name: String,
    /// SQL expression computing the metric.
    pub expression: String,
}

impl SavedMetric {
    pub fn new(metric_name: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            metric_name: metric_name.into(),
            expression: expression.into(),
        }
    }
}
