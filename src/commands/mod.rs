//! # Commands
//!
//! CLI command implementations for jt.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod completions;
pub mod create;
pub mod query;
pub mod token;

pub use self::{
    completions::execute as completions,
    create::{execute as create, CreateArgs},
    query::{execute as query, parse_query_spec, QueryArgs, QueryKind, QuerySpec},
    token::execute as set_token,
};
