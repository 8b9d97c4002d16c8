//! The conversation container.
//!
//! A [`Conversation`] is a named, ordered collection of [`Message`]s plus an
//! optional attached [`ActivityReport`]. Pipeline steps never mutate a
//! conversation in place; each step derives a new one, so an observer never
//! sees a partially transformed state.

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::report::ActivityReport;

/// A named, ordered collection of messages.
///
/// Created once by the transcript parser; every pipeline step derives a new
/// `Conversation` with the same name. The `report` field only appears in the
/// serialized document when a report step ran.
///
/// # Example
///
/// ```
/// use chatscrub::transcript::parse_transcript;
///
/// let convo = parse_transcript("My Conversation\n1448470901 bob Hello there!\n")?;
/// assert_eq!(convo.name, "My Conversation");
/// assert_eq!(convo.len(), 1);
/// # Ok::<(), chatscrub::ChatscrubError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Label taken from the first line of the source transcript. May be empty.
    pub name: String,

    /// Messages in transcript order.
    pub messages: Vec<Message>,

    /// Per-sender message counts, attached by the report step.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub report: Option<ActivityReport>,
}

impl Conversation {
    /// Creates a conversation with no attached report.
    pub fn new(name: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            name: name.into(),
            messages,
            report: None,
        }
    }

    /// Derives a new conversation with the same name and report but a
    /// different message sequence.
    ///
    /// This is the building block every filter uses: name and any attached
    /// report are carried through untouched.
    #[must_use]
    pub fn with_messages(&self, messages: Vec<Message>) -> Self {
        Self {
            name: self.name.clone(),
            messages,
            report: self.report.clone(),
        }
    }

    /// Derives a new conversation with the given report attached.
    #[must_use]
    pub fn with_report(self, report: ActivityReport) -> Self {
        Self {
            report: Some(report),
            ..self
        }
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if the conversation holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
