//! Markdown rendering for pull request reports.
//!
//! A report is a sequence of blocks, one per pull request:
//!
//! ```text
//! ## [Fix bug](https://github.com/x/y/pull/1)
//! - `abcdef1`: Fix bug
//! - `1234567`: Add test
//!
//! ```
//!
//! When the commits of a PR can't be fetched the bullets and the blank
//! line are replaced by a single failure note.

use pr_report_core::{CommitRecord, PullRequestSummary};

/// Number of SHA characters shown per commit.
pub const SHORT_SHA_LEN: usize = 7;

/// Heading line for a pull request.
pub fn pr_heading(pr: &PullRequestSummary) -> String {
    format!("## [{}]({})\n", pr.title, pr.html_url)
}

/// Bullet line for a commit.
pub fn commit_bullet(commit: &CommitRecord) -> String {
    format!(
        "- `{}`: {}\n",
        short_sha(&commit.sha),
        first_line(&commit.summary)
    )
}

/// Note emitted in place of the commit list when fetching commits failed.
pub fn commit_failure_note(number: u64, error: &str) -> String {
    format!("Failed to fetch commits for PR #{}: {}\n\n", number, error)
}

/// First [`SHORT_SHA_LEN`] characters of a SHA; shorter ids are returned whole.
pub fn short_sha(sha: &str) -> &str {
    match sha.char_indices().nth(SHORT_SHA_LEN) {
        Some((idx, _)) => &sha[..idx],
        None => sha,
    }
}

/// First line of a commit message.
pub fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pr() -> PullRequestSummary {
        PullRequestSummary {
            title: "Fix bug".to_string(),
            html_url: "https://github.com/x/y/pull/1".to_string(),
            number: 1,
            api_url: "https://api.github.com/repos/x/y/pulls/1".to_string(),
        }
    }

    #[test]
    fn test_pr_heading() {
        assert_eq!(
            pr_heading(&sample_pr()),
            "## [Fix bug](https://github.com/x/y/pull/1)\n"
        );
    }

    #[test]
    fn test_commit_bullet() {
        let commit = CommitRecord {
            sha: "abcdef1234567890abcdef1234567890abcdef12".to_string(),
            summary: "Fix bug".to_string(),
        };
        assert_eq!(commit_bullet(&commit), "- `abcdef1`: Fix bug\n");
    }

    #[test]
    fn test_commit_bullet_multiline_summary() {
        let commit = CommitRecord {
            sha: "1234567890".to_string(),
            summary: "Add test\n\nWith body".to_string(),
        };
        assert_eq!(commit_bullet(&commit), "- `1234567`: Add test\n");
    }

    #[test]
    fn test_short_sha() {
        assert_eq!(short_sha("abcdef1234"), "abcdef1");
        assert_eq!(short_sha("abcdef1"), "abcdef1");
        assert_eq!(short_sha("abc"), "abc");
        assert_eq!(short_sha(""), "");
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line("Fix bug\n\nDetails"), "Fix bug");
        assert_eq!(first_line("single"), "single");
        assert_eq!(first_line(""), "");
    }

    #[test]
    fn test_commit_failure_note() {
        assert_eq!(
            commit_failure_note(42, "API error: status code 404, body: Not Found"),
            "Failed to fetch commits for PR #42: API error: status code 404, body: Not Found\n\n"
        );
    }
}
