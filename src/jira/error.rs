//! # Jira API Errors
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

/// Error returned by [`JiraClient`](super::JiraClient) calls.
#[derive(Debug, thiserror::Error)]
pub enum JiraError {
    /// The request could not be sent or the response body not read.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with an unexpected status.
    #[error("non-success status {status}, {message}")]
    Api { status: u16, message: String },

    /// The response body was not the expected JSON.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, JiraError>;
