//! # Query Builder Tests
//!
//! Tests for JQL assembly and syntax validation through the public API.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use jt::jql::{QueryBuilder, QueryError, Violation};

/// Builds and returns the violated rule, panicking if the query was valid.
fn violation_of(builder: &QueryBuilder) -> Violation {
    match builder.build() {
        Ok(query) => panic!("expected an error, got {query:?}"),
        Err(QueryError::EmptyQuery) => panic!("expected a syntax error, got EmptyQuery"),
        Err(QueryError::Invalid { violation, .. }) => violation,
    }
}

// =============================================================================
// Valid Queries
// =============================================================================

#[test]
fn test_valid_simple_query() {
    let query = QueryBuilder::new()
        .equals("project", "My Project")
        .and()
        .is_in("status", ["In Progress", "To do"])
        .order_by(false, ["created"])
        .build()
        .expect("query should build");

    assert_eq!(
        query,
        "project = 'My Project' AND status IN ('In Progress', 'To do') ORDER BY created DESC"
    );
}

#[test]
fn test_valid_complex_query() {
    let query = QueryBuilder::new()
        .equals("status", "Open")
        .and()
        .not_equals("priority", "Low")
        .and()
        .is_in("assignee", ["Alice", "Bob", "Charlie"])
        .and()
        .not_in("project", ["ProjectA", "ProjectB"])
        .or()
        .equals("reporter", "Dave")
        .and()
        .not_equals("issueType", "Bug")
        .or()
        .is_in("labels", ["critical", "urgent"])
        .and()
        .equals("resolution", "Unresolved")
        .and()
        .equals("created", "2023-10-01")
        .and()
        .not_equals("updated", "2023-11-01")
        .and()
        .is_in("component", ["Backend", "Frontend"])
        .order_by(true, ["priority", "created"])
        .build()
        .expect("query should build");

    let expected = "status = 'Open' AND priority != 'Low' AND assignee IN ('Alice', 'Bob', 'Charlie') \
AND project NOT IN ('ProjectA', 'ProjectB') OR reporter = 'Dave' AND issueType != 'Bug' \
OR labels IN ('critical', 'urgent') AND resolution = 'Unresolved' AND created = '2023-10-01' \
AND updated != '2023-11-01' AND component IN ('Backend', 'Frontend') ORDER BY priority, created ASC";

    assert_eq!(query, expected);
}

#[test]
fn test_single_comparison() {
    let query = QueryBuilder::new()
        .contains("summary", "login*")
        .build()
        .unwrap();
    assert_eq!(query, "summary ~ 'login*'");
}

#[test]
fn test_output_has_no_surrounding_whitespace() {
    let query = QueryBuilder::new()
        .equals("a", "1")
        .or()
        .equals("b", "2")
        .order_by(true, ["a"])
        .build()
        .unwrap();

    assert_eq!(query.trim(), query);
    assert!(!query.contains("  "));
}

#[test]
fn test_quotes_in_values_are_not_escaped() {
    let query = QueryBuilder::new()
        .equals("summary", "don't")
        .build()
        .unwrap();
    assert_eq!(query, "summary = 'don't'");
}

// =============================================================================
// Raw Override
// =============================================================================

#[test]
fn test_raw_query_wins_over_tokens() {
    let mut builder = QueryBuilder::new();
    builder.equals("a", "1").equals("b", "2");
    builder.set_raw_query("assignee = currentUser()");
    builder.and();

    assert_eq!(builder.build().unwrap(), "assignee = currentUser()");
    assert_eq!(builder.tokens().len(), 3);
}

#[test]
fn test_raw_query_alone() {
    let query = QueryBuilder::new()
        .set_raw_query("ORDER BY created")
        .build()
        .unwrap();
    assert_eq!(query, "ORDER BY created");
}

#[test]
fn test_empty_raw_query_falls_back_to_tokens() {
    let query = QueryBuilder::new()
        .set_raw_query("")
        .equals("a", "1")
        .build()
        .unwrap();
    assert_eq!(query, "a = '1'");
}

// =============================================================================
// Invalid Queries
// =============================================================================

#[test]
fn test_empty_query() {
    assert_eq!(QueryBuilder::new().build(), Err(QueryError::EmptyQuery));
    assert_eq!(
        QueryBuilder::new().set_raw_query("").build(),
        Err(QueryError::EmptyQuery)
    );
}

#[test]
fn test_consecutive_comparisons() {
    let mut builder = QueryBuilder::new();
    builder.equals("a", "1").equals("b", "2");

    assert_eq!(
        violation_of(&builder),
        Violation::ConsecutiveComparisons {
            previous: "a = '1'".to_string(),
            current: "b = '2'".to_string(),
        }
    );
}

#[test]
fn test_comparison_followed_by_list_comparison() {
    let mut builder = QueryBuilder::new();
    builder.equals("status", "Open").is_in("priority", ["High"]);

    assert!(matches!(
        violation_of(&builder),
        Violation::ConsecutiveComparisons { .. }
    ));
}

#[test]
fn test_consecutive_connectives() {
    let mut builder = QueryBuilder::new();
    builder
        .equals("status", "Open")
        .and()
        .and()
        .equals("priority", "High");

    assert_eq!(
        violation_of(&builder),
        Violation::ConsecutiveConnectives {
            previous: "AND".to_string(),
            current: "AND".to_string(),
        }
    );
}

#[test]
fn test_not_after_and_is_consecutive_connectives() {
    let mut builder = QueryBuilder::new();
    builder
        .equals("status", "Open")
        .and()
        .not()
        .equals("priority", "High");

    assert!(matches!(
        violation_of(&builder),
        Violation::ConsecutiveConnectives { .. }
    ));
}

#[test]
fn test_order_by_only() {
    let mut builder = QueryBuilder::new();
    builder.order_by(true, ["created"]);

    assert!(matches!(
        violation_of(&builder),
        Violation::MustStartWithComparison { .. }
    ));
}

#[test]
fn test_start_with_connective() {
    let mut builder = QueryBuilder::new();
    builder.or().equals("status", "Open");

    assert_eq!(
        violation_of(&builder),
        Violation::MustStartWithComparison {
            token: "OR".to_string()
        }
    );
}

#[test]
fn test_order_by_at_start() {
    let mut builder = QueryBuilder::new();
    builder.order_by(false, ["created"]).equals("status", "Open");

    assert!(matches!(
        violation_of(&builder),
        Violation::MustStartWithComparison { .. }
    ));
}

#[test]
fn test_order_by_after_connective() {
    let mut builder = QueryBuilder::new();
    builder.equals("status", "Open").and().order_by(false, ["created"]);

    assert_eq!(
        violation_of(&builder),
        Violation::MisplacedTerminator {
            previous: "AND".to_string(),
            current: "ORDER BY created DESC".to_string(),
        }
    );
}

#[test]
fn test_order_by_in_the_middle() {
    let mut builder = QueryBuilder::new();
    builder
        .equals("status", "Open")
        .order_by(false, ["created"])
        .and()
        .equals("priority", "High");

    assert_eq!(
        violation_of(&builder),
        Violation::TerminatorNotLast {
            terminator: "ORDER BY created DESC".to_string()
        }
    );
}

#[test]
fn test_anything_after_order_by_is_terminator_not_last() {
    let mut followed_by_comparison = QueryBuilder::new();
    followed_by_comparison
        .equals("status", "Open")
        .order_by(true, ["created"])
        .equals("priority", "High");

    let mut followed_by_order_by = QueryBuilder::new();
    followed_by_order_by
        .equals("status", "Open")
        .order_by(true, ["created"])
        .order_by(false, ["updated"]);

    for builder in [followed_by_comparison, followed_by_order_by] {
        assert!(matches!(
            violation_of(&builder),
            Violation::TerminatorNotLast { .. }
        ));
    }
}

#[test]
fn test_trailing_connective() {
    let mut ends_with_and = QueryBuilder::new();
    ends_with_and
        .equals("status", "Open")
        .and()
        .equals("priority", "High")
        .and();

    let mut ends_with_or = QueryBuilder::new();
    ends_with_or.equals("status", "Open").or();

    for builder in [ends_with_and, ends_with_or] {
        assert!(matches!(
            violation_of(&builder),
            Violation::TrailingConnective { .. }
        ));
    }
}

#[test]
fn test_only_first_violation_is_reported() {
    // Starts with OR and also has consecutive comparisons later on.
    let mut builder = QueryBuilder::new();
    builder.or().equals("a", "1").equals("b", "2").and();

    assert!(matches!(
        violation_of(&builder),
        Violation::MustStartWithComparison { .. }
    ));
}

#[test]
fn test_error_message_shows_full_query_and_marker() {
    let err = QueryBuilder::new()
        .equals("status", "Open")
        .order_by(false, ["created"])
        .and()
        .equals("priority", "High")
        .build()
        .unwrap_err();

    let message = err.to_string();
    let lines: Vec<&str> = message.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[1],
        "\"status = 'Open' ORDER BY created DESC AND priority = 'High'\""
    );

    let caret = lines[2].find('^').expect("marker line should contain a caret");
    assert_eq!(lines[2].trim_end().len(), caret + 1);
    assert!(lines[1][caret..].starts_with("AND"));
    assert!(lines[3].contains("must be the last part of the query"));
}
