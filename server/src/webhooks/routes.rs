//! Event Routing Table
//!
//! Maps each `X-GitHub-Event` label to a decoder and a bounded delivery
//! channel. Labels without an entry fall through to the generic route.

use std::collections::HashMap;

use gws_events::{
    Event, EventCategory, IssueCommentEvent, IssuesEvent, PullRequestEvent, PushEvent,
};
use serde::de::DeserializeOwned;
use tokio::sync::mpsc::{self, error::TrySendError};

/// Slots per delivery channel. A subscriber that falls behind loses events.
pub const DELIVERY_CAPACITY: usize = 1;

/// Outcome of a non-blocking publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Handed to the channel.
    Delivered,
    /// Channel at capacity; the event was discarded.
    Full,
    /// Subscriber dropped its receiver; the event was discarded.
    Closed,
}

impl Delivery {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Delivered => "delivered",
            Self::Full => "channel_full",
            Self::Closed => "subscriber_gone",
        }
    }
}

/// Decode a raw body and try to hand it to a subscriber.
pub trait Route: Send + Sync {
    fn publish(&self, event: &str, body: &[u8]) -> Result<Delivery, serde_json::Error>;
}

type Decoder<T> = fn(&str, &[u8]) -> serde_json::Result<T>;

/// Producer half of one delivery channel together with its decoder.
pub struct Channel<T> {
    sender: mpsc::Sender<T>,
    decode: Decoder<T>,
}

impl<T> Channel<T> {
    fn new(decode: Decoder<T>) -> (Self, mpsc::Receiver<T>) {
        let (sender, receiver) = mpsc::channel(DELIVERY_CAPACITY);
        (Self { sender, decode }, receiver)
    }
}

impl<T: Send> Route for Channel<T> {
    fn publish(&self, event: &str, body: &[u8]) -> Result<Delivery, serde_json::Error> {
        let decoded = (self.decode)(event, body)?;
        Ok(match self.sender.try_send(decoded) {
            Ok(()) => Delivery::Delivered,
            Err(TrySendError::Full(_)) => Delivery::Full,
            Err(TrySendError::Closed(_)) => Delivery::Closed,
        })
    }
}

fn typed<T: DeserializeOwned>(_event: &str, body: &[u8]) -> serde_json::Result<T> {
    serde_json::from_slice(body)
}

/// Consumer side of every delivery channel.
///
/// Dropping a receiver is allowed; events for that category are then
/// discarded.
#[derive(Debug)]
pub struct EventStreams {
    pub push: mpsc::Receiver<PushEvent>,
    pub issues: mpsc::Receiver<IssuesEvent>,
    pub issue_comment: mpsc::Receiver<IssueCommentEvent>,
    pub pull_request: mpsc::Receiver<PullRequestEvent>,
    /// Every label without a typed route.
    pub other: mpsc::Receiver<Event>,
}

pub struct RouteTable {
    routes: HashMap<EventCategory, Box<dyn Route>>,
    fallback: Box<dyn Route>,
}

impl RouteTable {
    /// Build the table with one channel per [`EventCategory`] plus the
    /// fallback, returning the receivers.
    pub fn new() -> (Self, EventStreams) {
        let (push, push_rx) = Channel::new(typed::<PushEvent>);
        let (issues, issues_rx) = Channel::new(typed::<IssuesEvent>);
        let (issue_comment, issue_comment_rx) = Channel::new(typed::<IssueCommentEvent>);
        let (pull_request, pull_request_rx) = Channel::new(typed::<PullRequestEvent>);
        let (other, other_rx) = Channel::new(Event::from_slice);

        let mut routes: HashMap<EventCategory, Box<dyn Route>> = HashMap::new();
        routes.insert(EventCategory::Push, Box::new(push));
        routes.insert(EventCategory::Issues, Box::new(issues));
        routes.insert(EventCategory::IssueComment, Box::new(issue_comment));
        routes.insert(EventCategory::PullRequest, Box::new(pull_request));

        let table = Self {
            routes,
            fallback: Box::new(other),
        };
        let streams = EventStreams {
            push: push_rx,
            issues: issues_rx,
            issue_comment: issue_comment_rx,
            pull_request: pull_request_rx,
            other: other_rx,
        };
        (table, streams)
    }

    /// Route for a label. Matching is exact; unknown labels get the fallback.
    pub fn resolve(&self, event: &str) -> &dyn Route {
        EventCategory::parse_str(event)
            .and_then(|category| self.routes.get(&category))
            .map_or(self.fallback.as_ref(), |route| route.as_ref())
    }

    /// Labels with a typed route, in no particular order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes.keys().map(EventCategory::as_str)
    }
}
