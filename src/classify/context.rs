//! Datasource lookups available to the classifier.

use serde::Deserialize;
use std::collections::HashMap;

use crate::model::{Column, SavedMetric};

/// Known columns and saved metrics of the current datasource.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "ContextDef")]
pub struct ClassifyContext {
    columns: Vec<Column>,
    saved_metrics: HashMap<String, SavedMetric>,
}

/// Wire form: `{ "columns": [...], "saved_metrics": [...] }`.
#[derive(Deserialize)]
struct ContextDef {
    #[serde(default)]
    columns: Vec<Column>,
    #[serde(default)]
    saved_metrics: Vec<SavedMetric>,
}

impl From<ContextDef> for ClassifyContext {
    fn from(def: ContextDef) -> Self {
        ClassifyContext::new(def.columns, def.saved_metrics)
    }
}

impl ClassifyContext {
    /// Build a context. Saved metrics are keyed by `metric_name`; when a name
    /// repeats, the first definition is kept.
    pub fn new(
        columns: impl IntoIterator<Item = Column>,
        saved_metrics: impl IntoIterator<Item = SavedMetric>,
    ) -> Self {
        let mut by_name = HashMap::new();
        for metric in saved_metrics {
            by_name.entry(metric.metric_name.clone()).or_insert(metric);
        }
        Self {
            columns: columns.into_iter().collect(),
            saved_metrics: by_name,
        }
    }

    pub fn saved_metric(&self, name: &str) -> Option<&SavedMetric> {
        self.saved_metrics.get(name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.column_name == name)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn saved_metric_count(&self) -> usize {
        self.saved_metrics.len()
    }
}
