//! Per-sender activity aggregation.
//!
//! An [`ActivityReport`] maps each sender id to the number of messages that
//! sender contributed. It is derived from the conversation as it stands when
//! the report step runs (so it reflects any filtering applied earlier in the
//! pipeline) and is attached to the exported document, never to the message
//! sequence itself.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Conversation, Message};

/// Message counts per sender.
///
/// Backed by a `BTreeMap` so iteration and the serialized JSON object are
/// deterministically ordered by sender id.
///
/// # Example
///
/// ```
/// use chatscrub::report::ActivityReport;
/// use chatscrub::transcript::parse_transcript;
///
/// let convo = parse_transcript("c\n1 bob hi\n2 angus yo\n3 bob again\n")?;
/// let report = ActivityReport::of(&convo.messages);
///
/// assert_eq!(report.count("bob"), 2);
/// assert_eq!(report.count("angus"), 1);
/// assert_eq!(report.total(), 3);
/// # Ok::<(), chatscrub::ChatscrubError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityReport {
    counts: BTreeMap<String, u64>,
}

impl ActivityReport {
    /// Computes the report over a message sequence.
    pub fn of(messages: &[Message]) -> Self {
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for message in messages {
            *counts.entry(message.sender_id.clone()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of messages recorded for `sender_id` (0 when absent).
    pub fn count(&self, sender_id: &str) -> u64 {
        self.counts.get(sender_id).copied().unwrap_or(0)
    }

    /// Sum of all per-sender counts; equals the message count of the
    /// conversation the report was computed over.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct senders.
    pub fn senders(&self) -> usize {
        self.counts.len()
    }

    /// Iterates `(sender_id, count)` pairs in sender-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Computes an activity report over `conversation` and attaches it.
///
/// Message content, order and count are untouched; only the `report` field
/// of the derived conversation changes.
pub fn attach_report(conversation: Conversation) -> Conversation {
    let report = ActivityReport::of(&conversation.messages);
    conversation.with_report(report)
}
