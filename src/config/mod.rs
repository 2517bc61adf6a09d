//! # Configuration
//!
//! Loads the YAML configuration stored at `~/.config/jt/config.yaml`.
//!
//! ```yaml
//! url: https://example.atlassian.net
//! email: me@example.com
//! defaultProjectKey: PRJ
//! defaultIssueType: Task
//! defaultComponentNames: [Backend]
//! defaultParentIssueTypes: [Epic, Initiative]
//! ```
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{
    BROWSE_PATH, CONFIG_DIR, CONFIG_FILENAME, DEFAULT_ISSUE_TYPE, ISSUE_TYPE_EPIC,
    ISSUE_TYPE_INITIATIVE,
};

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

/// Returns the home directory, honoring the thread-local override.
pub fn home_dir() -> Option<PathBuf> {
    HOME_OVERRIDE
        .with(|cell| cell.borrow().clone())
        .or_else(dirs::home_dir)
}

/// Expands a leading `~/` to the home directory.
///
/// Only the prefix is expanded, so paths like `/something/~/else` are kept.
pub fn expand_path(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

/// User configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Base URL of the Jira instance.
    #[serde(default)]
    pub url: String,

    /// Jira user email, used as the basic-auth username.
    #[serde(default)]
    pub email: String,

    /// Project key (e.g. `PRJ`) used for new issues and queries.
    #[serde(default)]
    pub default_project_key: String,

    /// Issue type used for new issues.
    #[serde(default = "default_issue_type")]
    pub default_issue_type: String,

    /// Components added to new issues and used to filter queries.
    #[serde(default)]
    pub default_component_names: Vec<String>,

    /// Issue types searched by the `parents` query.
    #[serde(default)]
    pub default_parent_issue_types: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            email: String::new(),
            default_project_key: String::new(),
            default_issue_type: default_issue_type(),
            default_component_names: Vec::new(),
            default_parent_issue_types: Vec::new(),
        }
    }
}

fn default_issue_type() -> String {
    DEFAULT_ISSUE_TYPE.to_string()
}

impl Config {
    /// Returns the default config path (`~/.config/jt/config.yaml`).
    pub fn path() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".config").join(CONFIG_DIR).join(CONFIG_FILENAME))
    }

    /// Loads the config from `path`, or from the default location.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => expand_path(path),
            None => Self::path().context("Could not determine home directory")?,
        };

        tracing::debug!(path = %path.display(), "loading config");

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        Self::from_yaml(&content)
            .with_context(|| format!("Failed to decode config file: {}", path.display()))
    }

    /// Parses and validates config file content.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let mut config: Self = serde_yml::from_str(content)?;

        if config.url.trim().is_empty() {
            anyhow::bail!("Missing required key: url");
        }
        if config.email.trim().is_empty() {
            anyhow::bail!("Missing required key: email");
        }

        let url = reqwest::Url::parse(config.url.trim())
            .with_context(|| format!("Invalid url: {}", config.url))?;
        config.url = url.as_str().trim_end_matches('/').to_string();

        Ok(config)
    }

    /// Returns the default project key, failing if it isn't configured.
    pub fn project_key(&self) -> Result<&str> {
        if self.default_project_key.trim().is_empty() {
            anyhow::bail!("Missing required key: defaultProjectKey");
        }
        Ok(&self.default_project_key)
    }

    /// Returns the issue types searched for parent issues.
    pub fn parent_issue_types(&self) -> Vec<String> {
        if self.default_parent_issue_types.is_empty() {
            vec![
                ISSUE_TYPE_EPIC.to_string(),
                ISSUE_TYPE_INITIATIVE.to_string(),
            ]
        } else {
            self.default_parent_issue_types.clone()
        }
    }

    /// Returns the browser link for an issue key.
    pub fn browse_url(&self, key: &str) -> String {
        format!("{}{BROWSE_PATH}{key}", self.url)
    }
}
