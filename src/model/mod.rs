//! Datasource metadata and selector option types.

pub mod column;
pub mod metric;
pub mod option;

pub use column::{Column, SavedMetric};
pub use metric::{Aggregate, AdhocMetric};
pub use option::SelectableOption;
