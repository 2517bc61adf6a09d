//! # JQL Query Builder
//!
//! Assembles Jira Query Language strings through a chained API and validates
//! the token sequence before handing the query to the search endpoint.
//!
//! Only syntax is checked: field names, operators and values are never
//! compared against what the Jira instance supports.
//!
//! ```
//! use jt::jql::QueryBuilder;
//!
//! let query = QueryBuilder::new()
//!     .equals("project", "My Project")
//!     .and()
//!     .is_in("status", ["In Progress", "To do"])
//!     .order_by(false, ["created"])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     query,
//!     "project = 'My Project' AND status IN ('In Progress', 'To do') ORDER BY created DESC"
//! );
//! ```
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod error;
mod token;

pub use self::{
    error::{QueryError, Violation},
    token::{Category, Connective, Operator, Token, Value},
};

/// Accumulates query tokens in call order.
///
/// Nothing is validated until [`build`](Self::build) is called.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    tokens: Vec<Token>,
    raw: String,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a verbatim query that replaces the tokens when building.
    ///
    /// Tokens added before or after are kept but ignored while the raw query
    /// is non-empty.
    pub fn set_raw_query(&mut self, query: impl Into<String>) -> &mut Self {
        self.raw = query.into();
        self
    }

    /// Appends an already constructed token.
    pub fn push(&mut self, token: Token) -> &mut Self {
        self.tokens.push(token);
        self
    }

    /// Returns the tokens added so far.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    // -------------------------------------------------------------------------
    // Comparisons
    // -------------------------------------------------------------------------

    /// `field = 'value'`
    pub fn equals(&mut self, field: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.push(Token::comparison(field, Operator::Equals, value))
    }

    /// `field != 'value'`
    pub fn not_equals(&mut self, field: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.push(Token::comparison(field, Operator::NotEquals, value))
    }

    /// `field ~ 'value'`
    pub fn contains(&mut self, field: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.push(Token::comparison(field, Operator::Contains, value))
    }

    /// `field IN ('v1', 'v2', ...)`
    pub fn is_in<I, S>(&mut self, field: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(Token::list_comparison(field, Operator::In, values))
    }

    /// `field NOT IN ('v1', 'v2', ...)`
    pub fn not_in<I, S>(&mut self, field: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(Token::list_comparison(field, Operator::NotIn, values))
    }

    // -------------------------------------------------------------------------
    // Connectives and ordering
    // -------------------------------------------------------------------------

    pub fn and(&mut self) -> &mut Self {
        self.push(Token::Connective(Connective::And))
    }

    pub fn or(&mut self) -> &mut Self {
        self.push(Token::Connective(Connective::Or))
    }

    /// Appends `NOT`. It is treated like any other connective, so it cannot
    /// directly follow `AND` or `OR`.
    pub fn not(&mut self) -> &mut Self {
        self.push(Token::Connective(Connective::Not))
    }

    /// `ORDER BY f1, f2 ASC|DESC`, which must be the last token.
    pub fn order_by<I, S>(&mut self, ascending: bool, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(Token::OrderBy {
            fields: fields.into_iter().map(Into::into).collect(),
            ascending,
        })
    }

    // -------------------------------------------------------------------------
    // Build
    // -------------------------------------------------------------------------

    /// Renders the query and validates the token sequence.
    ///
    /// Rendering always covers every token so the error can show the whole
    /// attempted query; only the first violation is reported.
    pub fn build(&self) -> Result<String, QueryError> {
        if !self.raw.is_empty() {
            return Ok(self.raw.clone());
        }

        let Some(last) = self.tokens.last() else {
            return Err(QueryError::EmptyQuery);
        };

        let mut query = String::new();
        let mut position = 0;
        let mut start = 0;
        let mut failure: Option<(usize, Violation)> = None;
        let mut previous: Option<(&Token, String)> = None;

        for token in &self.tokens {
            let rendered = token.to_string();

            if !query.is_empty() {
                query.push(' ');
                position += 1;
            }
            start = position;

            if failure.is_none() {
                let prev = previous.as_ref().map(|(t, s)| (*t, s.as_str()));
                if let Err(violation) = check_adjacent(prev, token, &rendered) {
                    failure = Some((start, violation));
                }
            }

            query.push_str(&rendered);
            position += rendered.chars().count();
            previous = Some((token, rendered));
        }

        if failure.is_none() && last.category() == Category::Connective {
            failure = Some((
                start,
                Violation::TrailingConnective {
                    token: last.to_string(),
                },
            ));
        }

        match failure {
            None => Ok(query),
            Some((offset, violation)) => Err(QueryError::Invalid {
                query,
                offset,
                violation,
            }),
        }
    }
}

/// Checks a token against the one before it.
fn check_adjacent(
    previous: Option<(&Token, &str)>,
    token: &Token,
    rendered: &str,
) -> Result<(), Violation> {
    let Some((previous, previous_text)) = previous else {
        if token.category() == Category::Comparison {
            return Ok(());
        }
        return Err(Violation::MustStartWithComparison {
            token: rendered.to_string(),
        });
    };

    let pair = || (previous_text.to_string(), rendered.to_string());

    match (previous.category(), token.category()) {
        (Category::Terminator, _) => Err(Violation::TerminatorNotLast {
            terminator: previous_text.to_string(),
        }),
        (Category::Comparison, Category::Comparison) => {
            let (previous, current) = pair();
            Err(Violation::ConsecutiveComparisons { previous, current })
        }
        (Category::Connective, Category::Connective) => {
            let (previous, current) = pair();
            Err(Violation::ConsecutiveConnectives { previous, current })
        }
        (Category::Connective, Category::Terminator) => {
            let (previous, current) = pair();
            Err(Violation::MisplacedTerminator { previous, current })
        }
        _ => Ok(()),
    }
}
