//! GitHub provider implementation for pr-report.
//!
//! This crate provides the REST/Search API client used to build reports
//! and the OAuth app used by the server's browser login.

mod client;
mod oauth;
mod types;

pub use client::{search_query, Credentials, GitHubClient};
pub use oauth::{OAuthApp, OAUTH_SCOPES};
pub use types::*;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("pr-report/", env!("CARGO_PKG_VERSION"));
