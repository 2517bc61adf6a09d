//! # Test Harness
//!
//! Provides utilities for integration testing jt without touching the user's
//! configuration. The home directory is redirected through a thread-local
//! override for in-process tests, and through `HOME` for spawned binaries.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{fs, path::PathBuf, sync::Mutex};

use tempfile::TempDir;

use jt::set_home_override;

/// Global lock to ensure tests sharing the home override run sequentially.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Test environment with a temporary home directory.
pub struct TestEnv {
    /// Temporary directory simulating the user's home (for ~/.config/jt/config.yaml)
    pub home_dir: TempDir,
    /// Guard for the test lock
    test_guard: std::sync::MutexGuard<'static, ()>,
}

impl TestEnv {
    pub fn new() -> Self {
        // Recover from poisoned mutex (if a previous test panicked while holding the lock)
        let test_guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        set_home_override(Some(home_dir.path().to_path_buf()));

        Self {
            home_dir,
            test_guard,
        }
    }

    /// Returns the path where the config file is looked up.
    pub fn config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("jt")
            .join("config.yaml")
    }

    /// Writes the config file at its default location.
    pub fn write_config(&self, content: &str) {
        let path = self.config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create config directory");
        }
        fs::write(path, content).expect("Failed to write config");
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        set_home_override(None);
    }
}

// =============================================================================
// Config Builder
// =============================================================================

/// Builder for YAML config files.
pub struct ConfigBuilder {
    url: Option<String>,
    email: Option<String>,
    project_key: Option<String>,
    issue_type: Option<String>,
    components: Vec<String>,
    parent_types: Vec<String>,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            url: Some("https://example.atlassian.net".to_string()),
            email: Some("me@example.com".to_string()),
            project_key: Some("PRJ".to_string()),
            issue_type: None,
            components: Vec::new(),
            parent_types: Vec::new(),
        }
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(mut self, url: Option<&str>) -> Self {
        self.url = url.map(String::from);
        self
    }

    pub fn email(mut self, email: Option<&str>) -> Self {
        self.email = email.map(String::from);
        self
    }

    pub fn project_key(mut self, key: Option<&str>) -> Self {
        self.project_key = key.map(String::from);
        self
    }

    pub fn issue_type(mut self, issue_type: &str) -> Self {
        self.issue_type = Some(issue_type.to_string());
        self
    }

    pub fn component(mut self, name: &str) -> Self {
        self.components.push(name.to_string());
        self
    }

    pub fn parent_type(mut self, name: &str) -> Self {
        self.parent_types.push(name.to_string());
        self
    }

    pub fn build(self) -> String {
        let mut lines = Vec::new();
        let scalars = [
            ("url", self.url),
            ("email", self.email),
            ("defaultProjectKey", self.project_key),
            ("defaultIssueType", self.issue_type),
        ];
        for (key, value) in scalars {
            if let Some(value) = value {
                lines.push(format!("{key}: {value}"));
            }
        }
        for (key, values) in [
            ("defaultComponentNames", self.components),
            ("defaultParentIssueTypes", self.parent_types),
        ] {
            if !values.is_empty() {
                lines.push(format!("{key}:"));
                lines.extend(values.iter().map(|v| format!("  - {v}")));
            }
        }
        lines.join("\n")
    }
}
