//! # Constants
//!
//! Centralized constants for magic values used throughout jt.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Configuration
// =============================================================================

/// Global configuration directory name (inside `~/.config`).
pub const CONFIG_DIR: &str = "jt";

/// Configuration file name (inside `CONFIG_DIR`).
pub const CONFIG_FILENAME: &str = "config.yaml";

/// Issue type used for new issues when the config doesn't set one.
pub const DEFAULT_ISSUE_TYPE: &str = "Task";

// =============================================================================
// Credentials
// =============================================================================

/// Keyring service name.
pub const KEYRING_SERVICE: &str = "jt";

/// Keyring entry holding the Jira API token.
pub const KEYRING_TOKEN_KEY: &str = "jira-pat";

// =============================================================================
// Editor
// =============================================================================

/// Editor used when neither `$VISUAL` nor `$EDITOR` is set.
pub const DEFAULT_EDITOR: &str = "vim";

/// Suffix of the temporary file the issue message is composed in.
pub const MESSAGE_FILE_SUFFIX: &str = "-ISSUE_MSG.jt";

/// Instructions appended to the message file.
pub const MESSAGE_BOILERPLATE: &str = "
# Please enter the issue summary on the first line.
# Separate the summary from the description with an empty line.
# Lines starting with '#' will be ignored.
# The rest of the file will be used as the issue description.
";

// =============================================================================
// Jira
// =============================================================================

/// Issue creation endpoint (relative to the instance URL).
pub const API_ISSUE_PATH: &str = "/rest/api/3/issue";

/// JQL search endpoint (relative to the instance URL).
pub const API_SEARCH_PATH: &str = "/rest/api/3/search/jql";

/// Browse path prefix for issue links.
pub const BROWSE_PATH: &str = "/browse/";

/// Page size requested from the search endpoint.
pub const SEARCH_PAGE_SIZE: u32 = 100;

/// Timeout for a single HTTP request, in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

pub const ISSUE_TYPE_INITIATIVE: &str = "Initiative";
pub const ISSUE_TYPE_EPIC: &str = "Epic";
pub const ISSUE_TYPE_STORY: &str = "Story";
pub const ISSUE_TYPE_TASK: &str = "Task";
pub const ISSUE_TYPE_BUG: &str = "Bug";

// =============================================================================
// Logging
// =============================================================================

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV_VAR: &str = "JT_LOG";
