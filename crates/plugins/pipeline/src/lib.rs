//! Report pipeline: pull requests of a day, rendered as Markdown.
//!
//! The pipeline drives a [`PullRequestSource`] through three sequential
//! steps and renders the result:
//!
//! 1. resolve the authenticated user (the report is always about the caller)
//! 2. search the user's pull requests created on the requested date
//! 3. fetch the commits of each pull request, in search order
//!
//! A failed search aborts the report. A failed commit fetch only affects the
//! block of that pull request.
//!
//! # Example
//!
//! ```ignore
//! use pr_report_core::config::DEFAULT_API_URL;
//! use pr_report_github::{Credentials, GitHubClient};
//! use pr_report_pipeline::generate_report;
//!
//! let client = GitHubClient::with_base_url(
//!     DEFAULT_API_URL,
//!     Credentials::Basic { username: "alice".into(), token: "ghp_xxx".into() },
//! );
//! let markdown = generate_report(&client, "2024-03-01").await?;
//! ```

pub mod markdown;

use pr_report_core::{
    parse_report_date, CommitRecord, PullRequestSource, PullRequestSummary, Result, User,
};
use tracing::{debug, info, warn};

/// Maximum number of commits listed per pull request.
pub const MAX_COMMITS_PER_PR: usize = 5;

/// Commits of a pull request, or why they are missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitList {
    /// At most [`MAX_COMMITS_PER_PR`] commits, in API order
    Fetched(Vec<CommitRecord>),
    /// The commit request failed with this message
    Failed(String),
}

/// One pull request of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportBlock {
    pub pull_request: PullRequestSummary,
    pub commits: CommitList,
}

impl ReportBlock {
    /// Render the block as Markdown.
    pub fn to_markdown(&self) -> String {
        let mut output = markdown::pr_heading(&self.pull_request);

        match &self.commits {
            CommitList::Fetched(commits) => {
                for commit in commits.iter().take(MAX_COMMITS_PER_PR) {
                    output.push_str(&markdown::commit_bullet(commit));
                }
                output.push('\n');
            }
            CommitList::Failed(error) => {
                output.push_str(&markdown::commit_failure_note(
                    self.pull_request.number,
                    error,
                ));
            }
        }

        output
    }
}

/// A rendered-on-demand report for one user and one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub user: User,
    pub date: String,
    pub blocks: Vec<ReportBlock>,
}

impl Report {
    /// Concatenate all blocks, in order.
    pub fn to_markdown(&self) -> String {
        self.blocks.iter().map(ReportBlock::to_markdown).collect()
    }

    /// Number of pull request blocks whose commits could not be fetched.
    pub fn failed_blocks(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b.commits, CommitList::Failed(_)))
            .count()
    }
}

/// Collect the report data for the source's user on `date`.
pub async fn build_report(source: &dyn PullRequestSource, date: &str) -> Result<Report> {
    let date = parse_report_date(date)?;
    info!(date = %date, provider = source.name(), "Generating report");

    let user = source.fetch_user().await?;
    let pull_requests = source.search_pull_requests(&user.login, &date).await?;
    debug!(
        login = %user.login,
        count = pull_requests.len(),
        "Found pull requests"
    );

    let mut blocks = Vec::with_capacity(pull_requests.len());
    for pull_request in pull_requests {
        let commits = match source.fetch_commits(&pull_request.api_url).await {
            Ok(mut commits) => {
                commits.truncate(MAX_COMMITS_PER_PR);
                CommitList::Fetched(commits)
            }
            Err(e) => {
                warn!(number = pull_request.number, error = %e, "Failed to fetch commits");
                CommitList::Failed(e.to_string())
            }
        };
        blocks.push(ReportBlock {
            pull_request,
            commits,
        });
    }

    Ok(Report { user, date, blocks })
}

/// Generate the Markdown report for the source's user on `date`.
pub async fn generate_report(source: &dyn PullRequestSource, date: &str) -> Result<String> {
    Ok(build_report(source, date).await?.to_markdown())
}
