//! # Jira Client
//!
//! Blocking HTTP client for the Jira Cloud REST API v3, authenticated with
//! the user's email and API token (HTTP basic auth).
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::time::Duration;

use reqwest::{
    blocking::Client,
    header::{ACCEPT, CONTENT_TYPE},
    StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};

use super::{
    error::{JiraError, Result},
    types::{
        CreateIssueRequest, CreatedIssue, ErrorResponse, Field, Issue, NewIssue, SearchRequest,
        SearchResponse,
    },
};
use crate::constants::{API_ISSUE_PATH, API_SEARCH_PATH, HTTP_TIMEOUT_SECS, SEARCH_PAGE_SIZE};

/// Client for a single Jira instance.
#[derive(Debug, Clone)]
pub struct JiraClient {
    http: Client,
    base_url: String,
    email: String,
    token: String,
}

impl JiraClient {
    /// Creates a client for the instance at `base_url`.
    pub fn new(
        base_url: impl Into<String>,
        email: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            email: email.into(),
            token: token.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Creates an issue and returns its key and id.
    ///
    /// <https://developer.atlassian.com/cloud/jira/platform/rest/v3/api-group-issues/#api-rest-api-3-issue-post>
    pub fn create_issue(&self, issue: &NewIssue) -> Result<CreatedIssue> {
        let body = CreateIssueRequest::from(issue);
        self.post(API_ISSUE_PATH, &body, StatusCode::CREATED)
    }

    /// Fetches one page of search results.
    ///
    /// <https://developer.atlassian.com/cloud/jira/platform/rest/v3/api-group-issue-search/#api-rest-api-3-search-jql-post>
    pub fn search_page(&self, request: &SearchRequest) -> Result<SearchResponse> {
        self.post(API_SEARCH_PATH, request, StatusCode::OK)
    }

    /// Runs a JQL search and collects every page of results.
    pub fn search(&self, jql: &str, fields: &[Field]) -> Result<Vec<Issue>> {
        let mut request = SearchRequest {
            jql: jql.to_string(),
            fields: fields.to_vec(),
            max_results: SEARCH_PAGE_SIZE,
            next_page_token: None,
        };
        let mut issues = Vec::new();

        loop {
            let page = self.search_page(&request)?;
            let next = page.next_page().map(str::to_string);
            issues.extend(page.issues);

            match next {
                Some(token) => request.next_page_token = Some(token),
                None => break,
            }
        }

        tracing::debug!(count = issues.len(), "search finished");
        Ok(issues)
    }

    /// Sends a JSON `POST` and decodes the response if it has status `expected`.
    fn post<B, T>(&self, path: &str, body: &B, expected: StatusCode) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "POST");

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.email, Some(&self.token))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(body)?)
            .send()?;

        let status = response.status();
        let text = response.text()?;
        tracing::debug!(status = status.as_u16(), "response");

        if status != expected {
            return Err(api_error(status, &text));
        }

        Ok(serde_json::from_str(&text)?)
    }
}

/// Builds an error from a failed response, using the API's error payload when
/// there is one.
fn api_error(status: StatusCode, body: &str) -> JiraError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|response| response.message())
        .ok()
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });

    JiraError::Api {
        status: status.as_u16(),
        message,
    }
}
