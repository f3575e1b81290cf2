//! Source trait for pull request data.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{CommitRecord, PullRequestSummary, User};

/// Something that can answer the three questions a report needs:
/// who am I, which PRs did I open on a date, and what commits do they have.
#[async_trait]
pub trait PullRequestSource: Send + Sync {
    /// Get the provider name (e.g., "github")
    fn name(&self) -> &'static str;

    /// Get the user the source is authenticated as
    async fn fetch_user(&self) -> Result<User>;

    /// Search pull requests authored by `login` and created on `date` (`YYYY-MM-DD`)
    async fn search_pull_requests(&self, login: &str, date: &str)
        -> Result<Vec<PullRequestSummary>>;

    /// Get the commits of a pull request by its REST URL
    async fn fetch_commits(&self, pr_api_url: &str) -> Result<Vec<CommitRecord>>;
}
