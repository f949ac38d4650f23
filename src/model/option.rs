//! Options offered by the filter selector.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::metric::AdhocMetric;
use crate::error::{FilterError, FilterResult};
use crate::filter::{AdhocFilter, RawFilter};

/// One entry of the selector's current selection.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectableOption {
    /// A filter accepted earlier, possibly edited since. Passed through.
    ExistingFilter(AdhocFilter),
    /// Reference to a saved metric by name.
    SavedMetricRef { saved_metric_name: String },
    /// An inline metric.
    AdhocMetricRef(AdhocMetric),
    /// A raw datasource column.
    ColumnRef { column_name: String },
}

impl SelectableOption {
    pub fn saved_metric(name: impl Into<String>) -> Self {
        SelectableOption::SavedMetricRef {
            saved_metric_name: name.into(),
        }
    }

    pub fn column(name: impl Into<String>) -> Self {
        SelectableOption::ColumnRef {
            column_name: name.into(),
        }
    }

    /// Short name of the variant, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SelectableOption::ExistingFilter(_) => "filter",
            SelectableOption::SavedMetricRef { .. } => "saved_metric",
            SelectableOption::AdhocMetricRef(_) => "adhoc_metric",
            SelectableOption::ColumnRef { .. } => "column",
        }
    }

    /// Recognize an option from its JSON shape.
    ///
    /// Checked in order: filter (`expressionType` + `clause`), saved metric
    /// (`saved_metric_name`), ad-hoc metric (`aggregate` or `sqlExpression`),
    /// column (`column_name`). Anything else is a
    /// [`FilterError::ShapeMismatch`].
    pub fn from_json(value: &Value) -> FilterResult<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| FilterError::ShapeMismatch(format!("expected an object, got {}", value)))?;

        if obj.contains_key("expressionType") && obj.contains_key("clause") {
            let raw: RawFilter = serde_json::from_value(value.clone())?;
            return Ok(SelectableOption::ExistingFilter(AdhocFilter::create(raw)?));
        }

        if let Some(name) = obj.get("saved_metric_name") {
            return string_field(obj, "saved_metric_name", name)
                .map(SelectableOption::saved_metric);
        }

        if obj.contains_key("aggregate") || obj.contains_key("sqlExpression") {
            let metric: AdhocMetric = serde_json::from_value(value.clone())?;
            return Ok(SelectableOption::AdhocMetricRef(metric));
        }

        if let Some(name) = obj.get("column_name") {
            return string_field(obj, "column_name", name).map(SelectableOption::column);
        }

        Err(FilterError::ShapeMismatch(value.to_string()))
    }

    /// Recognize every entry of a JSON array.
    pub fn from_json_list(value: &Value) -> FilterResult<Vec<Self>> {
        let items = value
            .as_array()
            .ok_or_else(|| FilterError::ShapeMismatch(format!("expected an array, got {}", value)))?;
        items.iter().map(Self::from_json).collect()
    }
}

fn string_field(obj: &Map<String, Value>, key: &str, value: &Value) -> FilterResult<String> {
    value.as_str().map(str::to_string).ok_or_else(|| {
        FilterError::ShapeMismatch(format!(
            "'{}' must be a string in {}",
            key,
            Value::Object(obj.clone())
        ))
    })
}

impl From<AdhocFilter> for SelectableOption {
    fn from(filter: AdhocFilter) -> Self {
        SelectableOption::ExistingFilter(filter)
    }
}

impl From<AdhocMetric> for SelectableOption {
    fn from(metric: AdhocMetric) -> Self {
        SelectableOption::AdhocMetricRef(metric)
    }
}

impl<'de> Deserialize<'de> for SelectableOption {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        SelectableOption::from_json(&value).map_err(serde::de::Error::custom)
    }
}
