//! # Completions Command
//!
//! Prints a shell completion script for `jt`.
//!
//! ```bash
//! jt --completion zsh > ~/.zfunc/_jt
//! ```
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Command;
use clap_complete::{generate, Shell};

/// Writes the completion script for `shell` to stdout.
///
/// `cmd` is the binary's CLI definition (`Cli::command()`).
pub fn execute(shell: Shell, cmd: &mut Command) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write_script(shell, cmd, &mut stdout)?;
    stdout.flush().context("Failed to write completion script")
}

/// Writes the completion script for `shell` to `out`.
pub fn write_script(shell: Shell, cmd: &mut Command, out: &mut dyn Write) -> Result<()> {
    let name = cmd.get_name().to_string();
    tracing::debug!(%shell, %name, "generating completions");

    let mut script = Vec::new();
    generate(shell, cmd, name, &mut script);
    out.write_all(&script)
        .context("Failed to write completion script")
}
