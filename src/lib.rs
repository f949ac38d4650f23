//! # adhoc-filter
//!
//! Turns a filter selector's selection into a uniform list of adhoc filters.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │        Selection (SelectableOption, in order)            │
//! │  existing filters · saved metrics · ad-hoc metrics ·     │
//! │  columns                                                 │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [classify + ClassifyContext]
//! ┌─────────────────────────────────────────────────────────┐
//! │              AdhocFilter (one per option)                │
//! │   expression type · subject · operator · comparator ·   │
//! │   clause                                                 │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use adhoc_filter::prelude::*;
//!
//! let ctx = ClassifyContext::new(
//!     vec![Column::new("target")],
//!     vec![SavedMetric::new("sum__value", "SUM(value)")],
//! );
//! let filters = classify(
//!     &[
//!         SelectableOption::saved_metric("sum__value"),
//!         SelectableOption::column("target"),
//!     ],
//!     &ctx,
//! )
//! .unwrap();
//!
//! assert_eq!(filters[0].to_sql(), "SUM(value) > 0");
//! assert_eq!(filters[1].clause(), Clause::Where);
//! ```

pub mod classify;
pub mod config;
pub mod defaults;
pub mod error;
pub mod filter;
pub mod model;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::classify::{classify, merge_selection, ClassifyContext, Classifier};
    pub use crate::error::{FilterError, FilterResult};
    pub use crate::filter::{AdhocFilter, Clause, Comparator, ExpressionType, Operator};
    pub use crate::model::{Aggregate, AdhocMetric, Column, SavedMetric, SelectableOption};
}

pub use classify::{classify, ClassifyContext};
pub use error::{FilterError, FilterResult};
pub use filter::AdhocFilter;
pub use model::SelectableOption;
