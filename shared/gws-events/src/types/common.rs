//! Common Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GitHub account (user, bot or organization acting as sender).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<u64>,
    pub login: Option<String>,
    /// Only present on repository owners embedded in push payloads.
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
    /// `"User"`, `"Bot"` or `"Organization"`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub site_admin: Option<bool>,
}

/// Repository the event occurred in.
///
/// Timestamps are left out on purpose: push payloads encode them as Unix
/// seconds while every other event uses ISO 8601 strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub owner: Option<User>,
    pub private: Option<bool>,
    pub fork: Option<bool>,
    pub description: Option<String>,
    pub html_url: Option<String>,
    pub clone_url: Option<String>,
    pub default_branch: Option<String>,
}

/// Organization owning the repository, when there is one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: Option<u64>,
    pub login: Option<String>,
    pub description: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
    pub default: Option<bool>,
}

/// Issue (or pull request viewed through the issues API).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: Option<u64>,
    pub number: Option<u64>,
    pub title: Option<String>,
    pub body: Option<String>,
    /// `"open"` or `"closed"`.
    pub state: Option<String>,
    pub locked: Option<bool>,
    pub user: Option<User>,
    pub labels: Option<Vec<Label>>,
    pub assignees: Option<Vec<User>>,
    pub comments: Option<u64>,
    pub html_url: Option<String>,
    /// Set when the issue is a pull request.
    pub pull_request: Option<IssuePullRequestLinks>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl Issue {
    /// Whether this issue is the conversation view of a pull request.
    pub const fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuePullRequestLinks {
    pub url: Option<String>,
    pub html_url: Option<String>,
    pub diff_url: Option<String>,
    pub patch_url: Option<String>,
}

/// Comment on an issue or pull request conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Option<u64>,
    pub body: Option<String>,
    pub user: Option<User>,
    pub html_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
