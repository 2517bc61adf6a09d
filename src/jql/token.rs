//! # Query Tokens
//!
//! The units a query is assembled from: comparison clauses, boolean connectives
//! and the terminating `ORDER BY` clause.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt;

// =============================================================================
// Operators and Values
// =============================================================================

/// Comparison operator of a field clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Equals,
    NotEquals,
    In,
    NotIn,
    /// Text search (`~`)
    Contains,
}

impl Operator {
    /// Returns the operator as it appears in a query.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::NotEquals => "!=",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::Contains => "~",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Right-hand side of a comparison.
///
/// Values are quoted verbatim. Single quotes inside a value are not escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Single(String),
    List(Vec<String>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(value) => write!(f, "'{value}'"),
            Self::List(values) if values.is_empty() => f.write_str("()"),
            Self::List(values) => write!(f, "('{}')", values.join("', '")),
        }
    }
}

// =============================================================================
// Tokens
// =============================================================================

/// Boolean keyword joining two comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    And,
    Or,
    Not,
}

impl Connective {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Comparison,
    Connective,
    /// Must be the last token of a query.
    Terminator,
}

/// A single element of a query, in the order it was added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `field OP value`
    Comparison {
        field: String,
        operator: Operator,
        value: Value,
    },
    Connective(Connective),
    /// `ORDER BY f1, f2 ASC|DESC`
    OrderBy { fields: Vec<String>, ascending: bool },
}

impl Token {
    /// Creates a comparison against a single quoted value.
    pub fn comparison(field: impl Into<String>, operator: Operator, value: impl Into<String>) -> Self {
        Self::Comparison {
            field: field.into(),
            operator,
            value: Value::Single(value.into()),
        }
    }

    /// Creates a comparison against a parenthesized value list.
    pub fn list_comparison<I, S>(field: impl Into<String>, operator: Operator, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Comparison {
            field: field.into(),
            operator,
            value: Value::List(values.into_iter().map(Into::into).collect()),
        }
    }

    pub const fn category(&self) -> Category {
        match self {
            Self::Comparison { .. } => Category::Comparison,
            Self::Connective(_) => Category::Connective,
            Self::OrderBy { .. } => Category::Terminator,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comparison {
                field,
                operator,
                value,
            } => write!(f, "{field} {operator} {value}"),
            Self::Connective(connective) => connective.fmt(f),
            Self::OrderBy { fields, ascending } => {
                let direction = if *ascending { "ASC" } else { "DESC" };
                write!(f, "ORDER BY {} {direction}", fields.join(", "))
            }
        }
    }
}
