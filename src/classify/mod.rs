//! Classification of selector options into adhoc filters.
//!
//! Each selected option maps to exactly one filter:
//!
//! | Option              | Expression | Subject            | Operator | Comparator | Clause |
//! |---------------------|------------|--------------------|----------|------------|--------|
//! | existing filter     | unchanged  | unchanged          | unchanged| unchanged  | unchanged |
//! | saved metric        | SQL        | metric expression  | `>`      | `0`        | HAVING |
//! | ad-hoc metric       | SQL        | metric label       | `>`      | `0`        | HAVING |
//! | column              | SIMPLE     | column name        | `==`     | `""`       | WHERE  |
//!
//! The classifier does not merge old and new selections; callers pass the
//! complete list (see [`merge_selection`] for the common case).

mod classifier;
mod context;

pub use classifier::{classify, classify_option, dedup_filters, merge_selection, Classifier};
pub use context::ClassifyContext;
