//! # Credentials
//!
//! Stores the Jira API token in the operating system's credential storage:
//! - macOS: Keychain
//! - Windows: Credential Manager
//! - Linux: Secret Service (libsecret)
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::IsTerminal;

use anyhow::{Context, Result};

use crate::constants::{KEYRING_SERVICE, KEYRING_TOKEN_KEY};

/// Storage backend for the API token.
pub trait TokenStore {
    /// Returns the stored token, or `None` if no token was saved yet.
    fn get(&self) -> Result<Option<String>>;

    /// Saves (or replaces) the token.
    fn set(&self, token: &str) -> Result<()>;
}

/// Token store backed by the OS keyring.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyringStore;

impl KeyringStore {
    fn entry() -> Result<keyring::Entry> {
        keyring::Entry::new(KEYRING_SERVICE, KEYRING_TOKEN_KEY)
            .context("Failed to open keyring")
    }
}

impl TokenStore for KeyringStore {
    fn get(&self) -> Result<Option<String>> {
        match Self::entry()?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e).context("Failed to get token from keyring"),
        }
    }

    fn set(&self, token: &str) -> Result<()> {
        Self::entry()?
            .set_password(token)
            .context("Failed to save token to keyring")
    }
}

/// Returns the stored token, asking for one with `prompt` if none is stored.
///
/// A prompted token is saved before it is returned.
pub fn token_or_prompt<S, P>(store: &S, prompt: P) -> Result<String>
where
    S: TokenStore + ?Sized,
    P: FnOnce() -> Result<String>,
{
    if let Some(token) = store.get()? {
        tracing::debug!("using token from keyring");
        return Ok(token);
    }

    tracing::debug!("no token in keyring, prompting");
    replace_token(store, prompt)
}

/// Asks for a new token with `prompt` and saves it.
pub fn replace_token<S, P>(store: &S, prompt: P) -> Result<String>
where
    S: TokenStore + ?Sized,
    P: FnOnce() -> Result<String>,
{
    let token = prompt()?;
    let token = token.trim();
    if token.is_empty() {
        anyhow::bail!("Token cannot be empty");
    }

    store.set(token)?;
    tracing::info!("token saved to keyring");
    Ok(token.to_string())
}

/// Reads a token from the terminal without echoing it.
pub fn prompt_token() -> Result<String> {
    if !std::io::stdin().is_terminal() {
        anyhow::bail!("No Jira API token stored and stdin is not a terminal. Run `jt --set-token`.");
    }

    rpassword::prompt_password("Please enter your Jira personal access token: ")
        .context("Failed to read token")
}
