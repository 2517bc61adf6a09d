//! # jt
//!
//! Create and query Jira issues from the command line.
//!
//! ## Features
//!
//! - **Issue Creation**: Summary from arguments or composed in your editor
//! - **Queries**: Parents, epics, initiatives, tasks and bugs of the default project
//! - **JQL Builder**: Chained query assembly with syntax validation
//! - **Keyring Storage**: API token kept in the OS credential store
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod commands;
pub mod config;
pub mod constants;
pub mod credentials;
pub mod editor;
pub mod jira;
pub mod jql;

pub use config::{set_home_override, Config};
pub use jql::{QueryBuilder, QueryError};
