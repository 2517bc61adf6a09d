//! # Create Command
//!
//! Creates a new issue in the default project.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::{
    config::Config,
    credentials::{self, KeyringStore},
    editor::{self, Message},
    jira::{JiraClient, NewIssue},
};

/// Arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Summary words from the command line
    pub summary: Vec<String>,
    pub description: Option<String>,
    /// Open the editor even if a summary was given
    pub edit: bool,
    pub parent: Option<String>,
    pub config: Option<PathBuf>,
}

impl CreateArgs {
    /// Returns the summary words joined with spaces.
    pub fn summary(&self) -> String {
        self.summary.join(" ").trim().to_string()
    }

    /// Whether the message has to be composed in the editor.
    pub fn needs_editor(&self) -> bool {
        self.edit || self.summary().is_empty()
    }
}

/// Executes the create command.
pub fn execute(args: &CreateArgs) -> Result<()> {
    let config = Config::load(args.config.as_deref()).context("Failed to read config")?;
    config.project_key()?;

    let description = args.description.clone().unwrap_or_default();
    let message = if args.needs_editor() {
        editor::compose(&args.summary(), &description)?
    } else {
        Message {
            summary: args.summary(),
            description,
        }
    };

    let token = credentials::token_or_prompt(&KeyringStore, credentials::prompt_token)
        .context("Failed to get token")?;
    let client = JiraClient::new(&config.url, &config.email, token)?;

    let issue = new_issue(&config, message, args.parent.clone());
    let created = client
        .create_issue(&issue)
        .context("Failed to create issue")?;

    tracing::info!(key = %created.key, id = %created.id, "issue created");
    println!(
        "created issue: {}\tURL: {}",
        created.key,
        config.browse_url(&created.key)
    );

    Ok(())
}

/// Combines the message with the configured defaults.
pub fn new_issue(config: &Config, message: Message, parent: Option<String>) -> NewIssue {
    NewIssue {
        summary: message.summary,
        description: message.description,
        project_key: config.default_project_key.clone(),
        issue_type: config.default_issue_type.clone(),
        component_names: config.default_component_names.clone(),
        parent_key: parent.map(|p| p.trim().to_string()).filter(|p| !p.is_empty()),
    }
}
