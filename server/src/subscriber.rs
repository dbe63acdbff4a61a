//! Console Subscriber
//!
//! Drains every delivery channel and logs one line per event. This is the
//! consumer `main` runs; embedders usually replace it with their own.

use gws_events::{Event, IssueCommentEvent, IssuesEvent, PullRequestEvent, PushEvent};
use tracing::info;

use crate::webhooks::EventStreams;

/// Log events until every channel is closed. Returns the number of events
/// consumed.
pub async fn run(mut streams: EventStreams) -> usize {
    let mut consumed = 0;

    loop {
        tokio::select! {
            Some(event) = streams.push.recv() => log_push(&event),
            Some(event) = streams.issues.recv() => log_issues(&event),
            Some(event) = streams.issue_comment.recv() => log_issue_comment(&event),
            Some(event) = streams.pull_request.recv() => log_pull_request(&event),
            Some(event) = streams.other.recv() => log_other(&event),
            else => break,
        }
        consumed += 1;
    }

    info!(consumed, "All delivery channels closed");
    consumed
}

fn log_push(event: &PushEvent) {
    let head = event.head_commit.as_ref().and_then(|c| c.id.as_deref());
    info!(
        git_ref = event.git_ref.as_deref().unwrap_or_default(),
        head = head.unwrap_or_default(),
        commits = event.commits.as_ref().map_or(0, Vec::len),
        "Received push"
    );
}

fn log_issues(event: &IssuesEvent) {
    info!(
        action = event.action.as_deref().unwrap_or_default(),
        number = event.issue.as_ref().and_then(|i| i.number),
        "Received issues"
    );
}

fn log_issue_comment(event: &IssueCommentEvent) {
    let author = event
        .comment
        .as_ref()
        .and_then(|c| c.user.as_ref())
        .and_then(|u| u.login.as_deref());
    info!(
        action = event.action.as_deref().unwrap_or_default(),
        number = event.issue.as_ref().and_then(|i| i.number),
        author = author.unwrap_or_default(),
        "Received issue_comment"
    );
}

fn log_pull_request(event: &PullRequestEvent) {
    info!(
        action = event.action.as_deref().unwrap_or_default(),
        number = event.number,
        "Received pull_request"
    );
}

fn log_other(event: &Event) {
    info!(
        event = %event.name,
        action = event.action().unwrap_or_default(),
        "Received event"
    );
}
