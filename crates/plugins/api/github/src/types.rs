//! GitHub API response types.
//!
//! These types represent the raw JSON responses from GitHub API.
//! They are deserialized and then mapped to the shared core types.

use serde::{Deserialize, Serialize};

// =============================================================================
// User
// =============================================================================

/// GitHub user representation (`GET /user`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

// =============================================================================
// Search
// =============================================================================

/// Response of `GET /search/issues`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubSearchResponse {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    #[serde(default)]
    pub items: Vec<GitHubSearchItem>,
}

/// One issue or pull request in a search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubSearchItem {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    /// Present only when the item is a pull request
    #[serde(default)]
    pub pull_request: Option<GitHubPullRequestLinks>,
}

/// Links attached to a pull request search item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubPullRequestLinks {
    /// REST URL of the pull request
    pub url: String,
    #[serde(default)]
    pub html_url: Option<String>,
}

// =============================================================================
// Commits
// =============================================================================

/// Entry of `GET /repos/{owner}/{repo}/pulls/{number}/commits`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubCommit {
    pub sha: String,
    pub commit: GitHubCommitDetail,
}

/// Git-level commit data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubCommitDetail {
    pub message: String,
}

// =============================================================================
// OAuth
// =============================================================================

/// Request body for exchanging an authorization code.
#[derive(Debug, Clone, Serialize)]
pub struct AccessTokenRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub code: &'a str,
    pub redirect_uri: &'a str,
}

/// Response of `POST /login/oauth/access_token` with `Accept: application/json`.
///
/// GitHub answers `200 OK` with an `error` field when the code is rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}
