//! # Editor Integration
//!
//! Composes an issue summary and description in the user's preferred editor.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs,
    io::{IsTerminal, Write},
    path::Path,
    process::Command,
};

use anyhow::{Context, Result};

use crate::constants::{DEFAULT_EDITOR, MESSAGE_BOILERPLATE, MESSAGE_FILE_SUFFIX};

/// Summary and description written in the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub summary: String,
    pub description: String,
}

/// Returns the editor command.
///
/// The editor is determined by (in order of priority):
/// 1. `$VISUAL` environment variable
/// 2. `$EDITOR` environment variable
/// 3. Fallback to `vim`
pub fn editor_command() -> String {
    std::env::var("VISUAL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| std::env::var("EDITOR").ok().filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}

/// Opens the editor on a temporary message file and parses the result.
///
/// `summary` and `description` pre-fill the file, so text given on the
/// command line can be refined instead of retyped.
pub fn compose(summary: &str, description: &str) -> Result<Message> {
    if !std::io::stdin().is_terminal() {
        anyhow::bail!("Cannot open editor: not running in a terminal. Pass the summary as arguments.");
    }

    let template = template(summary, description);

    let mut file = tempfile::Builder::new()
        .suffix(MESSAGE_FILE_SUFFIX)
        .tempfile()
        .context("Failed to create temporary file")?;
    file.write_all(template.as_bytes())
        .context("Failed to write boilerplate to file")?;
    file.flush()?;

    open(file.path(), &editor_command())?;

    let result = fs::read_to_string(file.path()).context("Failed to read message file")?;
    if result == template {
        anyhow::bail!("Issue message not modified, aborting");
    }

    parse_message(&result)
}

/// Runs `editor` on `path` and waits for it to exit.
fn open(path: &Path, editor: &str) -> Result<()> {
    // Split editor command in case it has arguments (e.g., "code --wait")
    let parts = shlex::split(editor).context("Invalid editor command")?;
    let (program, args) = parts.split_first().context("Empty editor command")?;

    tracing::debug!(editor, path = %path.display(), "launching editor");

    let status = Command::new(program)
        .args(args)
        .arg(path)
        .status()
        .with_context(|| format!("Failed to launch editor: {editor}"))?;

    if !status.success() {
        anyhow::bail!("Editor exited with error: {status}");
    }

    Ok(())
}

/// Builds the initial message file content.
pub fn template(summary: &str, description: &str) -> String {
    let mut content = String::new();
    if !summary.is_empty() || !description.is_empty() {
        content.push_str(summary);
        content.push('\n');
        if !description.is_empty() {
            content.push('\n');
            content.push_str(description.trim_end());
            content.push('\n');
        }
    }
    content.push_str(MESSAGE_BOILERPLATE);
    content
}

/// Splits a message file into summary and description.
///
/// Lines starting with `#` are dropped. The first non-blank line is the
/// summary, everything after it is the description with surrounding blank
/// lines removed.
pub fn parse_message(content: &str) -> Result<Message> {
    let mut lines = content.lines().filter(|line| !line.starts_with('#'));

    let summary = lines
        .by_ref()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .context("Empty summary, aborting")?
        .to_string();

    let rest: Vec<&str> = lines.map(str::trim_end).collect();
    let description = rest.join("\n").trim_matches('\n').to_string();

    Ok(Message {
        summary,
        description,
    })
}
