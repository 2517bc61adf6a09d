//! # Jira API Types
//!
//! Request and response bodies for the Jira Cloud REST API v3.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// Issue Creation
// =============================================================================

/// Everything needed to create an issue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewIssue {
    pub summary: String,
    pub description: String,
    pub project_key: String,
    pub issue_type: String,
    pub component_names: Vec<String>,
    pub parent_key: Option<String>,
}

/// Body of `POST /rest/api/3/issue`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateIssueRequest {
    pub fields: CreateFields,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateFields {
    pub project: KeyRef,
    pub issuetype: NameRef,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Document>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<KeyRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<NameRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRef {
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRef {
    #[serde(default)]
    pub name: String,
}

impl From<&NewIssue> for CreateIssueRequest {
    fn from(issue: &NewIssue) -> Self {
        Self {
            fields: CreateFields {
                project: KeyRef {
                    key: issue.project_key.clone(),
                },
                issuetype: NameRef {
                    name: issue.issue_type.clone(),
                },
                summary: issue.summary.clone(),
                description: Document::from_text(&issue.description),
                parent: issue.parent_key.clone().map(|key| KeyRef { key }),
                components: issue
                    .component_names
                    .iter()
                    .map(|name| NameRef { name: name.clone() })
                    .collect(),
            },
        }
    }
}

/// Successful response of `POST /rest/api/3/issue`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIssue {
    pub id: String,
    pub key: String,
    #[serde(rename = "self")]
    pub self_url: String,
}

/// Error payload returned by the API on failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[serde(default)]
    pub error_messages: Vec<String>,
    #[serde(default)]
    pub errors: BTreeMap<String, String>,
}

impl ErrorResponse {
    /// Flattens the payload into one line.
    ///
    /// `errorMessages` win when present, otherwise the field errors are listed.
    pub fn message(&self) -> String {
        if self.error_messages.is_empty() {
            self.errors
                .iter()
                .map(|(field, message)| format!("{field}: {message}"))
                .collect::<Vec<_>>()
                .join(", ")
        } else {
            self.error_messages.join(", ")
        }
    }
}

// =============================================================================
// Description (Atlassian Document Format)
// =============================================================================

/// A minimal Atlassian Document Format document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    #[serde(rename = "type")]
    kind: &'static str,
    version: u8,
    content: Vec<Node>,
}

/// Document nodes used for plain-text descriptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Paragraph { content: Vec<Node> },
    Text { text: String },
    HardBreak,
}

impl Document {
    /// Converts plain text to a document, or `None` for blank text.
    ///
    /// Blank lines separate paragraphs; line breaks inside a paragraph are
    /// kept as hard breaks.
    pub fn from_text(text: &str) -> Option<Self> {
        let mut paragraphs = Vec::new();
        let mut current: Vec<Node> = Vec::new();

        for line in text.lines() {
            let line = line.trim_end();
            if line.trim().is_empty() {
                if !current.is_empty() {
                    paragraphs.push(Node::Paragraph {
                        content: std::mem::take(&mut current),
                    });
                }
                continue;
            }
            if !current.is_empty() {
                current.push(Node::HardBreak);
            }
            current.push(Node::Text {
                text: line.to_string(),
            });
        }
        if !current.is_empty() {
            paragraphs.push(Node::Paragraph { content: current });
        }

        if paragraphs.is_empty() {
            return None;
        }

        Some(Self {
            kind: "doc",
            version: 1,
            content: paragraphs,
        })
    }

    pub fn content(&self) -> &[Node] {
        &self.content
    }
}

// =============================================================================
// Search
// =============================================================================

/// Issue fields requested from the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Components,
    Issuetype,
    Summary,
}

/// Body of `POST /rest/api/3/search/jql`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub jql: String,
    pub fields: Vec<Field>,
    pub max_results: u32,
    /// Opaque token returned by the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// One page of search results.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub is_last: Option<bool>,
}

impl SearchResponse {
    /// Returns the token of the next page, if there is one.
    pub fn next_page(&self) -> Option<&str> {
        if self.is_last == Some(true) {
            return None;
        }
        self.next_page_token.as_deref().filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Issue {
    pub key: String,
    #[serde(default)]
    pub fields: IssueFields,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IssueFields {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub issuetype: NameRef,
    #[serde(default)]
    pub components: Vec<NameRef>,
}

impl Issue {
    pub fn issue_type(&self) -> &str {
        &self.fields.issuetype.name
    }

    pub fn summary(&self) -> &str {
        &self.fields.summary
    }
}
