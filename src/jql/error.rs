//! # Query Errors
//!
//! Syntax errors reported by [`QueryBuilder::build`](super::QueryBuilder::build).
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt;

/// Error returned when a query cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Neither tokens nor a raw query were supplied.
    #[error("no query parts added")]
    EmptyQuery,

    /// The token sequence breaks a syntax rule.
    ///
    /// `query` is the full rendered (invalid) query and `offset` the character
    /// position where the offending token starts.
    #[error("invalid query:\n\"{query}\"\n{}\nError: {violation}", marker(.offset))]
    Invalid {
        query: String,
        offset: usize,
        violation: Violation,
    },
}

impl QueryError {
    /// Returns the violated rule, if the query was non-empty.
    pub const fn violation(&self) -> Option<&Violation> {
        match self {
            Self::EmptyQuery => None,
            Self::Invalid { violation, .. } => Some(violation),
        }
    }
}

/// Caret line under the quoted query (shifted by one for the opening quote).
fn marker(offset: &usize) -> String {
    format!("{}^", " ".repeat(offset + 1))
}

/// A syntax rule broken by a token sequence.
///
/// Each variant carries the rendered text of the tokens involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The first token is a connective or an `ORDER BY`.
    MustStartWithComparison { token: String },
    /// Two comparisons without a connective between them.
    ConsecutiveComparisons { previous: String, current: String },
    /// Two connectives without a comparison between them.
    ConsecutiveConnectives { previous: String, current: String },
    /// An `ORDER BY` not directly preceded by a comparison.
    MisplacedTerminator { previous: String, current: String },
    /// A token follows an `ORDER BY`.
    TerminatorNotLast { terminator: String },
    /// The query ends with a connective.
    TrailingConnective { token: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MustStartWithComparison { token } => {
                write!(f, "first word must be an operator, got {token:?}")
            }
            Self::ConsecutiveComparisons { previous, current } => {
                write!(f, "consecutive operators {previous:?} & {current:?}")
            }
            Self::ConsecutiveConnectives { previous, current } => {
                write!(f, "consecutive keywords {previous:?} & {current:?}")
            }
            Self::MisplacedTerminator { previous, current } => {
                write!(f, "{current:?} must follow an operator, got {previous:?}")
            }
            Self::TerminatorNotLast { terminator } => {
                write!(f, "keyword {terminator:?} must be the last part of the query")
            }
            Self::TrailingConnective { token } => {
                write!(f, "query cannot end with a keyword, got {token:?}")
            }
        }
    }
}
