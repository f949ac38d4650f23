//! Default operator and comparator applied to freshly classified filters.
//!
//! Metric filters default to "greater than zero" (a HAVING threshold).
//! Column filters default to an equality with an empty comparator that the
//! user is expected to fill in.

use crate::filter::{Clause, Comparator, Operator};

/// Operator given to filters derived from metrics.
pub const METRIC_OPERATOR: Operator = Operator::GreaterThan;

/// Comparator given to filters derived from metrics.
pub const METRIC_COMPARATOR: f64 = 0.0;

/// Operator given to filters derived from raw columns.
pub const COLUMN_OPERATOR: Operator = Operator::Equals;

/// Comparator given to filters derived from raw columns.
pub const COLUMN_COMPARATOR: &str = "";

/// Default operator and comparator for a clause.
#[derive(Debug, Clone, PartialEq)]
pub struct ClauseDefaults {
    pub operator: Operator,
    pub comparator: Comparator,
}

/// Defaults for filters created in the given clause.
pub fn for_clause(clause: Clause) -> ClauseDefaults {
    match clause {
        Clause::Having => ClauseDefaults {
            operator: METRIC_OPERATOR,
            comparator: Comparator::Number(METRIC_COMPARATOR),
        },
        Clause::Where => ClauseDefaults {
            operator: COLUMN_OPERATOR,
            comparator: Comparator::text(COLUMN_COMPARATOR),
        },
    }
}
