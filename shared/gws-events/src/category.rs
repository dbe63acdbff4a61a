//! Event Categories
//!
//! Labels carried in the `X-GitHub-Event` header that have a dedicated
//! payload type. Anything else is delivered as a generic [`crate::Event`].

use serde::{Deserialize, Serialize};

/// A webhook event label with a typed payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    /// Commits pushed to a branch or tag ([`crate::PushEvent`]).
    Push,
    /// Issue opened, edited, closed, labeled, ... ([`crate::IssuesEvent`]).
    Issues,
    /// Comment on an issue or pull request conversation ([`crate::IssueCommentEvent`]).
    IssueComment,
    /// Pull request lifecycle activity ([`crate::PullRequestEvent`]).
    PullRequest,
}

impl EventCategory {
    /// Every category with a typed payload, in routing order.
    pub const ALL: [Self; 4] = [
        Self::Push,
        Self::Issues,
        Self::IssueComment,
        Self::PullRequest,
    ];

    /// Parse a header label. Matching is exact and case-sensitive.
    pub fn parse_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == s)
    }

    /// The header label for this category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Issues => "issues",
            Self::IssueComment => "issue_comment",
            Self::PullRequest => "pull_request",
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
