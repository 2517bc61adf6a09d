//! # Jira
//!
//! REST API client and wire types for issue creation and JQL search.
//!
//! - [`JiraClient`]: blocking client for a single instance
//! - [`types`]: request and response bodies
//! - [`JiraError`]: errors returned by API calls
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod client;
pub mod error;
pub mod types;

pub use self::{
    client::JiraClient,
    error::{JiraError, Result},
    types::{CreatedIssue, Field, Issue, NewIssue},
};
