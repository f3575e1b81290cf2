//! Core traits, types, and error handling for pr-report.
//!
//! This crate provides the foundational abstractions shared by the GitHub
//! client, the report pipeline, the session store and the HTTP server.

pub mod config;
pub mod date;
pub mod error;
pub mod provider;
pub mod types;

pub use config::Config;
pub use date::parse_report_date;
pub use error::{Error, Result};
pub use provider::PullRequestSource;
pub use types::{CommitRecord, PullRequestSummary, User};
