//! # jt CLI
//!
//! Command-line interface for creating and querying Jira issues.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use jt::{
    commands::{self, CreateArgs, QueryArgs, QuerySpec},
    constants::LOG_ENV_VAR,
};

const GLOBAL_HELP: &str = "\
Configuration File:
  ~/.config/jt/config.yaml

  url: https://example.atlassian.net
  email: me@example.com
  defaultProjectKey: PRJ
  defaultIssueType: Task
  defaultComponentNames: [Backend]
  defaultParentIssueTypes: [Epic, Initiative]

The API token is stored in the OS keyring and requested on first use.

Examples:
  jt Fix the login page                Create an issue with this summary
  jt -m \"Steps to reproduce\" Crash     Create an issue with a description
  jt -p PRJ-12 Add retry               Create an issue under parent PRJ-12
  jt                                   Compose summary and description in $EDITOR
  jt -q parents                        List parent issues (Epics, Initiatives)
  jt -q \"epics,login\"                  List epics whose summary starts with 'login'
  jt -c zsh > ~/.zfunc/_jt             Install zsh completions";

#[derive(Parser)]
#[command(name = "jt")]
#[command(version)]
#[command(about = "Create and query Jira issues from the command line")]
#[command(
    long_about = "Create and query Jira issues from the command line.\n\n\
If no summary is given, jt opens your editor ($VISUAL, $EDITOR or vim) and \
prompts for a summary and description."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    /// Issue summary (opens the editor when omitted)
    summary: Vec<String>,

    /// Issue description
    #[arg(short, long, value_name = "TEXT")]
    msg: Option<String>,

    /// Open the editor for summary and description
    #[arg(short, long)]
    edit: bool,

    /// Assign the issue to a parent Epic or Initiative
    #[arg(short, long, value_name = "KEY")]
    parent: Option<String>,

    /// Query issues and exit: parents, epics, initiatives, tasks or bugs.
    /// A summary search term can follow after a comma, e.g. "parents,some issue"
    #[arg(
        short,
        long,
        value_name = "KIND[,TEXT]",
        value_parser = commands::parse_query_spec,
        conflicts_with_all = ["summary", "msg", "edit", "parent"]
    )]
    query: Option<QuerySpec>,

    /// Print a shell completion script to stdout and exit
    #[arg(short, long, value_enum, value_name = "SHELL", exclusive = true)]
    completion: Option<Shell>,

    /// Store a new Jira API token in the keyring and exit
    #[arg(long, exclusive = true)]
    set_token: bool,

    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging (or set JT_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(shell) = cli.completion {
        return commands::completions(shell, &mut Cli::command());
    }

    if cli.set_token {
        return commands::set_token();
    }

    if let Some(spec) = cli.query {
        return commands::query(&QueryArgs {
            spec,
            config: cli.config,
        });
    }

    commands::create(&CreateArgs {
        summary: cli.summary,
        description: cli.msg,
        edit: cli.edit,
        parent: cli.parent,
        config: cli.config,
    })
}

/// Logs to stderr. `JT_LOG` takes a full filter directive; otherwise only
/// warnings are shown unless `--verbose` is set.
fn init_tracing(verbose: bool) {
    let default = if verbose { "jt=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
