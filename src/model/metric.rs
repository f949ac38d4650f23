//! Ad-hoc metrics defined inline by the user.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::column::Column;
use crate::filter::ExpressionType;

/// SQL expressions at least this long are truncated in default labels.
const SQL_LABEL_TRUNCATE_AT: usize = 43;
const SQL_LABEL_KEEP: usize = 40;

/// Aggregate function of a SIMPLE ad-hoc metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Aggregate {
    Avg,
    Count,
    CountDistinct,
    Max,
    Min,
    Sum,
}

impl Aggregate {
    /// Parse an aggregate from its wire name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "AVG" => Some(Aggregate::Avg),
            "COUNT" => Some(Aggregate::Count),
            "COUNT_DISTINCT" => Some(Aggregate::CountDistinct),
            "MAX" => Some(Aggregate::Max),
            "MIN" => Some(Aggregate::Min),
            "SUM" => Some(Aggregate::Sum),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Aggregate::Avg => "AVG",
            Aggregate::Count => "COUNT",
            Aggregate::CountDistinct => "COUNT_DISTINCT",
            Aggregate::Max => "MAX",
            Aggregate::Min => "MIN",
            Aggregate::Sum => "SUM",
        }
    }
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A metric defined inline: an aggregate over a column (SIMPLE) or a SQL
/// expression (SQL).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdhocMetric {
    pub expression_type: ExpressionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<Column>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<Aggregate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql_expression: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub has_custom_label: bool,
}

impl AdhocMetric {
    /// An aggregate over a column, e.g. `SUM(source)`.
    pub fn simple(column: Column, aggregate: Aggregate) -> Self {
        Self {
            expression_type: ExpressionType::Simple,
            column: Some(column),
            aggregate: Some(aggregate),
            sql_expression: None,
            label: None,
            has_custom_label: false,
        }
    }

    /// A free-form SQL metric.
    pub fn sql(sql_expression: impl Into<String>) -> Self {
        Self {
            expression_type: ExpressionType::Sql,
            column: None,
            aggregate: None,
            sql_expression: Some(sql_expression.into()),
            label: None,
            has_custom_label: false,
        }
    }

    /// Attach a user-chosen label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self.has_custom_label = true;
        self
    }

    /// Human-readable label: the custom label when one is set, otherwise the
    /// default label.
    pub fn label(&self) -> String {
        match (&self.label, self.has_custom_label) {
            (Some(label), true) if !label.is_empty() => label.clone(),
            _ => self.default_label(),
        }
    }

    /// Label derived from the metric definition.
    pub fn default_label(&self) -> String {
        match self.expression_type {
            ExpressionType::Simple => {
                let aggregate = self.aggregate.map(|a| a.as_str()).unwrap_or("");
                let column = self
                    .column
                    .as_ref()
                    .map(|c| c.column_name.as_str())
                    .unwrap_or("");
                format!("{}({})", aggregate, column)
            }
            ExpressionType::Sql => {
                let expr = self.sql_expression.as_deref().unwrap_or("");
                if expr.chars().count() < SQL_LABEL_TRUNCATE_AT {
                    expr.to_string()
                } else {
                    let head: String = expr.chars().take(SQL_LABEL_KEEP).collect();
                    format!("{}...", head)
                }
            }
        }
    }
}
