//! Clause and expression type enums.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FilterError, FilterResult};

/// Whether a filter applies before or after aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Clause {
    /// Filters raw rows before aggregation.
    #[serde(rename = "WHERE")]
    Where,
    /// Filters aggregated rows (metrics).
    #[serde(rename = "HAVING")]
    Having,
}

impl Clause {
    /// Parse a clause from its wire name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "WHERE" => Some(Clause::Where),
            "HAVING" => Some(Clause::Having),
            _ => None,
        }
    }

    /// Parse a clause, failing with [`FilterError::InvalidEnum`].
    pub fn parse(s: &str) -> FilterResult<Self> {
        Self::from_str(s).ok_or_else(|| FilterError::invalid_enum("clause", s))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Clause::Where => "WHERE",
            Clause::Having => "HAVING",
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a filter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpressionType {
    /// Structured subject/operator/comparator triplet.
    #[serde(rename = "SIMPLE")]
    Simple,
    /// Free-form SQL boolean expression held in the subject.
    #[serde(rename = "SQL")]
    Sql,
}

impl ExpressionType {
    /// Parse an expression type from its wire name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "SIMPLE" => Some(ExpressionType::Simple),
            "SQL" => Some(ExpressionType::Sql),
            _ => None,
        }
    }

    /// Parse an expression type, failing with [`FilterError::InvalidEnum`].
    pub fn parse(s: &str) -> FilterResult<Self> {
        Self::from_str(s).ok_or_else(|| FilterError::invalid_enum("expressionType", s))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpressionType::Simple => "SIMPLE",
            ExpressionType::Sql => "SQL",
        }
    }
}

impl fmt::Display for ExpressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
