//! Right-hand-side values of adhoc filters.
//!
//! Equality is by value *and* type: `Number(0.0)` is never equal to
//! `Text("0")`. Numbers compare bitwise (IEEE-754 total order), which keeps
//! `Eq` reflexive and consistent with `Hash`: `NaN == NaN` and `0.0 != -0.0`.
//!
//! On the wire, integral numbers are written as JSON integers (`0`, not
//! `0.0`) and non-finite numbers are rejected, since JSON cannot carry them.

use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Largest magnitude at which every integer is exactly representable as f64.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Comparator value: a string, a number, a list of values, or nothing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(untagged)]
pub enum Comparator {
    Number(f64),
    Text(String),
    List(Vec<Comparator>),
    /// No value, as carried by `IS NULL` / `IS NOT NULL` filters.
    #[default]
    Null,
}

impl Comparator {
    pub fn text(s: impl Into<String>) -> Self {
        Comparator::Text(s.into())
    }

    /// True for null, the empty string and the empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            Comparator::Text(s) => s.is_empty(),
            Comparator::List(items) => items.is_empty(),
            Comparator::Number(_) => false,
            Comparator::Null => true,
        }
    }

    /// Render as a SQL literal. Text is single-quoted with quotes doubled.
    pub fn to_sql_literal(&self) -> String {
        match self {
            Comparator::Number(n) => n.to_string(),
            Comparator::Text(s) => format!("'{}'", s.replace('\'', "''")),
            Comparator::List(items) => {
                let parts: Vec<String> = items.iter().map(|c| c.to_sql_literal()).collect();
                format!("({})", parts.join(", "))
            }
            Comparator::Null => "NULL".to_string(),
        }
    }
}

impl PartialEq for Comparator {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Comparator::Number(a), Comparator::Number(b)) => a.to_bits() == b.to_bits(),
            (Comparator::Text(a), Comparator::Text(b)) => a == b,
            (Comparator::List(a), Comparator::List(b)) => a == b,
            (Comparator::Null, Comparator::Null) => true,
            _ => false,
        }
    }
}

impl Eq for Comparator {}

impl Hash for Comparator {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Comparator::Number(n) => n.to_bits().hash(state),
            Comparator::Text(s) => s.hash(state),
            Comparator::List(items) => items.hash(state),
            Comparator::Null => {}
        }
    }
}

impl Serialize for Comparator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Comparator::Number(n) if !n.is_finite() => Err(S::Error::custom(format!(
                "non-finite comparator {} cannot be serialized",
                n
            ))),
            Comparator::Number(n) if is_exact_integer(*n) => serializer.serialize_i64(*n as i64),
            Comparator::Number(n) => serializer.serialize_f64(*n),
            Comparator::Text(s) => serializer.serialize_str(s),
            Comparator::List(items) => serializer.collect_seq(items),
            Comparator::Null => serializer.serialize_unit(),
        }
    }
}

/// Integral, within the exactly representable range, and not `-0.0`.
fn is_exact_integer(n: f64) -> bool {
    n.fract() == 0.0 && n.abs() <= MAX_EXACT_INT && !(n == 0.0 && n.is_sign_negative())
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparator::Number(n) => write!(f, "{}", n),
            Comparator::Text(s) => f.write_str(s),
            Comparator::List(items) => {
                let parts: Vec<String> = items.iter().map(|c| c.to_string()).collect();
                write!(f, "({})", parts.join(", "))
            }
            Comparator::Null => Ok(()),
        }
    }
}

impl From<&str> for Comparator {
    fn from(s: &str) -> Self {
        Comparator::Text(s.to_string())
    }
}

impl From<String> for Comparator {
    fn from(s: String) -> Self {
        Comparator::Text(s)
    }
}

impl From<f64> for Comparator {
    fn from(n: f64) -> Self {
        Comparator::Number(n)
    }
}

/// Numbers are held as f64: integers beyond 2^53 in magnitude round to the
/// nearest representable value, the same as JSON numbers parsed from the
/// front end.
impl From<i64> for Comparator {
    fn from(n: i64) -> Self {
        Comparator::Number(n as f64)
    }
}
