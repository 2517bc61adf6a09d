//! # Query Command
//!
//! Searches the configured project for issues of one kind and prints them,
//! one per line.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::{
    config::Config,
    constants::{
        ISSUE_TYPE_BUG, ISSUE_TYPE_EPIC, ISSUE_TYPE_INITIATIVE, ISSUE_TYPE_STORY, ISSUE_TYPE_TASK,
    },
    credentials::{self, KeyringStore},
    jira::{Field, Issue, JiraClient},
    jql::{QueryBuilder, QueryError},
};

/// Kind of issues to search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QueryKind {
    /// Parent issues (the configured parent types, Epics and Initiatives by default)
    Parents,
    Epics,
    Initiatives,
    Tasks,
    Bugs,
}

/// Parsed `--query` value: a kind plus an optional summary search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    pub kind: QueryKind,
    pub search: Option<String>,
}

/// Parses `KIND[,TEXT]`, e.g. `parents` or `epics,login page`.
pub fn parse_query_spec(value: &str) -> Result<QuerySpec, String> {
    let (kind, search) = match value.split_once(',') {
        Some((kind, search)) => (kind, Some(search)),
        None => (value, None),
    };

    let kind = QueryKind::from_str(kind.trim(), true).map_err(|_| {
        format!(
            "unsupported query type: {kind} (expected one of: parents, epics, initiatives, tasks, bugs)"
        )
    })?;

    Ok(QuerySpec {
        kind,
        search: search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string),
    })
}

/// Arguments for the query command
pub struct QueryArgs {
    pub spec: QuerySpec,
    pub config: Option<PathBuf>,
}

/// Executes the query command.
pub fn execute(args: &QueryArgs) -> Result<()> {
    let config = Config::load(args.config.as_deref()).context("Failed to read config")?;

    config.project_key()?;

    let jql = build_query(&config, &args.spec).context("Failed to build query")?;
    tracing::debug!(%jql, "built query");

    let token = credentials::token_or_prompt(&KeyringStore, credentials::prompt_token)
        .context("Failed to get token")?;
    let client = JiraClient::new(&config.url, &config.email, token)?;

    let mut issues = client
        .search(&jql, &[Field::Components, Field::Issuetype, Field::Summary])
        .context("Failed to query issues")?;

    if issues.is_empty() {
        println!("No issues found.");
        return Ok(());
    }

    sort_by_type(&mut issues);
    for issue in &issues {
        println!("{}", format_issue(issue));
    }

    Ok(())
}

/// Builds the JQL for a query.
///
/// The query is scoped to the default project and, when configured, the
/// default components.
pub fn build_query(config: &Config, spec: &QuerySpec) -> Result<String, QueryError> {
    let mut builder = QueryBuilder::new();
    builder.equals("project", &config.default_project_key);

    if !config.default_component_names.is_empty() {
        builder
            .and()
            .is_in("component", &config.default_component_names);
    }

    if let Some(ref search) = spec.search {
        builder.and().contains("summary", format!("{search}*"));
    }

    builder.and();
    match spec.kind {
        QueryKind::Parents => builder.is_in("type", config.parent_issue_types()),
        QueryKind::Epics => builder.equals("type", ISSUE_TYPE_EPIC),
        QueryKind::Initiatives => builder.equals("type", ISSUE_TYPE_INITIATIVE),
        QueryKind::Tasks => builder.equals("type", ISSUE_TYPE_TASK),
        QueryKind::Bugs => builder.equals("type", ISSUE_TYPE_BUG),
    };

    builder.build()
}

/// Sorts issues Initiatives first, then Epics, Stories, Tasks and everything
/// else. The order within a type is kept.
pub fn sort_by_type(issues: &mut [Issue]) {
    issues.sort_by_key(|issue| type_rank(issue.issue_type()));
}

fn type_rank(issue_type: &str) -> u8 {
    match issue_type {
        ISSUE_TYPE_INITIATIVE => 1,
        ISSUE_TYPE_EPIC => 2,
        ISSUE_TYPE_STORY => 3,
        ISSUE_TYPE_TASK => 4,
        _ => 5,
    }
}

/// Formats an issue as `KEY [Type]: Summary`.
pub fn format_issue(issue: &Issue) -> String {
    format!("{} [{}]: {}", issue.key, issue.issue_type(), issue.summary())
}
