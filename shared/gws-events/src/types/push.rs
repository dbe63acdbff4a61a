//! Push Event

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Organization, Repository, User};

/// Payload of the `push` event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushEvent {
    /// Full ref that was pushed (e.g. `refs/heads/main`).
    #[serde(rename = "ref")]
    pub git_ref: Option<String>,
    /// Head SHA before the push.
    pub before: Option<String>,
    /// Head SHA after the push.
    pub after: Option<String>,
    pub created: Option<bool>,
    pub deleted: Option<bool>,
    pub forced: Option<bool>,
    pub base_ref: Option<String>,
    /// Comparison URL between `before` and `after`.
    pub compare: Option<String>,
    pub commits: Option<Vec<Commit>>,
    pub head_commit: Option<Commit>,
    pub repository: Option<Repository>,
    pub pusher: Option<CommitAuthor>,
    pub sender: Option<User>,
    pub organization: Option<Organization>,
}

impl PushEvent {
    /// Branch name when the pushed ref is a branch.
    pub fn branch(&self) -> Option<&str> {
        self.git_ref.as_deref()?.strip_prefix("refs/heads/")
    }

    /// Tag name when the pushed ref is a tag.
    pub fn tag(&self) -> Option<&str> {
        self.git_ref.as_deref()?.strip_prefix("refs/tags/")
    }
}

/// Commit summary embedded in a push payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub id: Option<String>,
    pub tree_id: Option<String>,
    /// Whether this commit is new to the repository.
    pub distinct: Option<bool>,
    pub message: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub url: Option<String>,
    pub author: Option<CommitAuthor>,
    pub committer: Option<CommitAuthor>,
    pub added: Option<Vec<String>>,
    pub removed: Option<Vec<String>>,
    pub modified: Option<Vec<String>>,
}

/// Git identity (commit author, committer or pusher).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitAuthor {
    pub name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
}
