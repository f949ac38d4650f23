//! The adhoc filter record.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::clause::{Clause, ExpressionType};
use super::comparator::Comparator;
use super::operator::Operator;
use crate::error::{FilterError, FilterResult};

/// One filter clause.
///
/// Immutable once built: use [`AdhocFilter::duplicate_with`] to derive a
/// modified copy. Two filters are equal iff all five attributes are equal
/// (see [`Comparator`] for how values compare).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFilter", into = "RawFilter")]
pub struct AdhocFilter {
    expression_type: ExpressionType,
    subject: String,
    operator: Operator,
    comparator: Comparator,
    clause: Clause,
}

/// String-typed filter fields, as received from a caller or over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFilter {
    pub expression_type: String,
    pub subject: String,
    pub operator: String,
    /// Absent or `null` for unary operators.
    #[serde(default)]
    pub comparator: Comparator,
    pub clause: String,
}

/// Fields to replace in [`AdhocFilter::duplicate_with`]. `None` keeps the
/// current value.
#[derive(Debug, Clone, Default)]
pub struct FilterPatch {
    pub expression_type: Option<ExpressionType>,
    pub subject: Option<String>,
    pub operator: Option<Operator>,
    pub comparator: Option<Comparator>,
    pub clause: Option<Clause>,
}

impl AdhocFilter {
    pub fn new(
        expression_type: ExpressionType,
        subject: impl Into<String>,
        operator: Operator,
        comparator: impl Into<Comparator>,
        clause: Clause,
    ) -> Self {
        Self {
            expression_type,
            subject: subject.into(),
            operator,
            comparator: comparator.into(),
            clause,
        }
    }

    /// Build a filter from string-typed fields.
    ///
    /// Unknown clause, expression type or operator values fail with
    /// [`FilterError::InvalidEnum`]. No other validation is applied.
    pub fn create(raw: RawFilter) -> FilterResult<Self> {
        Ok(Self {
            expression_type: ExpressionType::parse(&raw.expression_type)?,
            subject: raw.subject,
            operator: Operator::parse(&raw.operator)?,
            comparator: raw.comparator,
            clause: Clause::parse(&raw.clause)?,
        })
    }

    /// Structural equality over all five attributes.
    pub fn equals(&self, other: &AdhocFilter) -> bool {
        self == other
    }

    pub fn expression_type(&self) -> ExpressionType {
        self.expression_type
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn comparator(&self) -> &Comparator {
        &self.comparator
    }

    pub fn clause(&self) -> Clause {
        self.clause
    }

    /// True when the filter applies after aggregation.
    pub fn is_metric_filter(&self) -> bool {
        self.clause == Clause::Having
    }

    /// Copy this filter, replacing the fields set in `patch`.
    pub fn duplicate_with(&self, patch: FilterPatch) -> Self {
        Self {
            expression_type: patch.expression_type.unwrap_or(self.expression_type),
            subject: patch.subject.unwrap_or_else(|| self.subject.clone()),
            operator: patch.operator.unwrap_or(self.operator),
            comparator: patch.comparator.unwrap_or_else(|| self.comparator.clone()),
            clause: patch.clause.unwrap_or(self.clause),
        }
    }

    /// Check whether the filter is complete enough to be applied.
    pub fn is_valid(&self) -> bool {
        if self.subject.trim().is_empty() {
            return false;
        }
        match self.expression_type {
            ExpressionType::Simple => self.operator.is_unary() || !self.comparator.is_empty(),
            ExpressionType::Sql => true,
        }
    }

    /// Render the filter as SQL text.
    ///
    /// SIMPLE filters quote text comparators and map operators to their SQL
    /// spelling. SQL filters keep the subject verbatim and append the
    /// operator symbol and comparator as given.
    pub fn to_sql(&self) -> String {
        if self.operator.is_unary() {
            return format!("{} {}", self.subject, self.operator.sql());
        }
        match self.expression_type {
            ExpressionType::Sql => {
                format!("{} {} {}", self.subject, self.operator, self.comparator)
            }
            ExpressionType::Simple => {
                let rhs = match (&self.comparator, self.operator.is_multi()) {
                    (Comparator::List(_), _) | (_, false) => self.comparator.to_sql_literal(),
                    (single, true) => format!("({})", single.to_sql_literal()),
                };
                format!("{} {} {}", self.subject, self.operator.sql(), rhs)
            }
        }
    }
}

impl fmt::Display for AdhocFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

impl TryFrom<RawFilter> for AdhocFilter {
    type Error = FilterError;

    fn try_from(raw: RawFilter) -> Result<Self, Self::Error> {
        AdhocFilter::create(raw)
    }
}

impl From<AdhocFilter> for RawFilter {
    fn from(filter: AdhocFilter) -> Self {
        RawFilter {
            expression_type: filter.expression_type.as_str().to_string(),
            subject: filter.subject,
            operator: filter.operator.symbol().to_string(),
            comparator: filter.comparator,
            clause: filter.clause.as_str().to_string(),
        }
    }
}
