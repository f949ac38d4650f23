//! Adhoc filter records and their value types.

pub mod clause;
pub mod comparator;
pub mod entity;
pub mod operator;

pub use clause::{Clause, ExpressionType};
pub use comparator::Comparator;
pub use entity::{AdhocFilter, FilterPatch, RawFilter};
pub use operator::Operator;
