//! # Set Token Command
//!
//! Prompts for a Jira API token and stores it in the OS keyring, replacing
//! any token saved before.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::credentials::{self, KeyringStore};

/// Executes the set-token command.
pub fn execute() -> Result<()> {
    credentials::replace_token(&KeyringStore, credentials::prompt_token)?;
    eprintln!("{} Saved Jira API token to the keyring", "✓".green());
    Ok(())
}
