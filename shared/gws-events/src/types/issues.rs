//! Issue Events

use serde::{Deserialize, Serialize};

use super::common::{Comment, Issue, Label, Organization, Repository, User};

/// Payload of the `issues` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssuesEvent {
    /// `opened`, `edited`, `closed`, `labeled`, `assigned`, ...
    pub action: Option<String>,
    pub issue: Option<Issue>,
    /// Previous values of edited fields (`edited` action only).
    pub changes: Option<serde_json::Value>,
    /// Label added or removed (`labeled` / `unlabeled`).
    pub label: Option<Label>,
    /// User assigned or unassigned (`assigned` / `unassigned`).
    pub assignee: Option<User>,
    pub repository: Option<Repository>,
    pub sender: Option<User>,
    pub organization: Option<Organization>,
}

/// Payload of the `issue_comment` event.
///
/// Comments on the conversation tab of a pull request arrive here too; check
/// [`Issue::is_pull_request`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueCommentEvent {
    /// `created`, `edited` or `deleted`.
    pub action: Option<String>,
    pub issue: Option<Issue>,
    pub comment: Option<Comment>,
    pub changes: Option<serde_json::Value>,
    pub repository: Option<Repository>,
    pub sender: Option<User>,
    pub organization: Option<Organization>,
}
