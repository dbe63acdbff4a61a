//! Pull Request Event

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Label, Organization, Repository, User};

/// Payload of the `pull_request` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PullRequestEvent {
    /// `opened`, `closed`, `synchronize`, `reopened`, `edited`, ...
    pub action: Option<String>,
    pub number: Option<u64>,
    pub pull_request: Option<PullRequest>,
    pub changes: Option<serde_json::Value>,
    pub label: Option<Label>,
    pub requested_reviewer: Option<User>,
    /// Previous head SHA (`synchronize` action only).
    pub before: Option<String>,
    /// New head SHA (`synchronize` action only).
    pub after: Option<String>,
    pub repository: Option<Repository>,
    pub sender: Option<User>,
    pub organization: Option<Organization>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub id: Option<u64>,
    pub number: Option<u64>,
    /// `"open"` or `"closed"`.
    pub state: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub user: Option<User>,
    pub head: Option<PullRequestBranch>,
    pub base: Option<PullRequestBranch>,
    pub draft: Option<bool>,
    pub merged: Option<bool>,
    pub mergeable: Option<bool>,
    pub merge_commit_sha: Option<String>,
    pub html_url: Option<String>,
    pub commits: Option<u64>,
    pub additions: Option<u64>,
    pub deletions: Option<u64>,
    pub changed_files: Option<u64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
    pub merged_at: Option<DateTime<Utc>>,
}

impl PullRequest {
    /// Closed by a merge rather than abandoned.
    pub fn is_merged(&self) -> bool {
        self.merged.unwrap_or(false) || self.merged_at.is_some()
    }
}

/// One side (head or base) of a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestBranch {
    /// `owner:branch`.
    pub label: Option<String>,
    /// Branch name.
    #[serde(rename = "ref")]
    pub git_ref: Option<String>,
    pub sha: Option<String>,
    pub user: Option<User>,
    pub repo: Option<Repository>,
}
