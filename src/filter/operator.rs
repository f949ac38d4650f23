//! Filter operator vocabulary.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::{FilterError, FilterResult};

/// Comparison operator of an adhoc filter.
///
/// Serialized as its wire symbol (`"=="`, `">"`, `"not in"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
    In,
    NotIn,
    Like,
    Regex,
    IsNotNull,
    IsNull,
}

impl Operator {
    pub const ALL: [Operator; 12] = [
        Operator::Equals,
        Operator::NotEquals,
        Operator::GreaterThan,
        Operator::LessThan,
        Operator::GreaterThanOrEqual,
        Operator::LessThanOrEqual,
        Operator::In,
        Operator::NotIn,
        Operator::Like,
        Operator::Regex,
        Operator::IsNotNull,
        Operator::IsNull,
    ];

    /// Parse an operator from its wire symbol.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.symbol() == s)
    }

    /// Parse an operator, failing with [`FilterError::InvalidEnum`].
    pub fn parse(s: &str) -> FilterResult<Self> {
        Self::from_str(s).ok_or_else(|| FilterError::invalid_enum("operator", s))
    }

    /// Wire symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Equals => "==",
            Operator::NotEquals => "!=",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThanOrEqual => "<=",
            Operator::In => "in",
            Operator::NotIn => "not in",
            Operator::Like => "LIKE",
            Operator::Regex => "regex",
            Operator::IsNotNull => "IS NOT NULL",
            Operator::IsNull => "IS NULL",
        }
    }

    /// SQL spelling used when rendering a structured filter.
    pub fn sql(&self) -> &'static str {
        match self {
            Operator::Equals => "=",
            Operator::NotEquals => "<>",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
            Operator::Regex => "REGEXP",
            other => other.symbol(),
        }
    }

    /// Operators that take no comparator.
    pub fn is_unary(&self) -> bool {
        matches!(self, Operator::IsNull | Operator::IsNotNull)
    }

    /// Operators that take a list of comparators.
    pub fn is_multi(&self) -> bool {
        matches!(self, Operator::In | Operator::NotIn)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for Operator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Operator::parse(&s).map_err(serde::de::Error::custom)
    }
}
