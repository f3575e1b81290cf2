//! HTTP service for pr-report.
//!
//! Serves Markdown reports to a browser frontend that logs in with GitHub
//! OAuth, and to API clients that bring their own GitHub token.

pub mod auth;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod server;

pub use error::ApiError;
pub use server::{router, serve, AppState};
