//! Common types shared by the client, the report pipeline and the server.

use serde::{Deserialize, Serialize};

/// The authenticated GitHub user a report is generated for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A pull request found by the search step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestSummary {
    pub title: String,
    pub html_url: String,
    pub number: u64,
    /// REST URL of the pull request; its commits live at `{api_url}/commits`.
    pub api_url: String,
}

/// A commit on a pull request, reduced to what the report shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub sha: String,
    /// First line of the commit message.
    pub summary: String,
}

impl CommitRecord {
    /// Build a record from a full commit message, keeping only its first line.
    pub fn from_message(sha: impl Into<String>, message: &str) -> Self {
        Self {
            sha: sha.into(),
            summary: message.lines().next().unwrap_or_default().to_string(),
        }
    }
}
