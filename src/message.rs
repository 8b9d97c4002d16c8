//! The message value type.
//!
//! This module provides [`Message`], a single timestamped utterance by one
//! sender. Messages are immutable values: the transcript parser constructs
//! them once, and every transformation that touches a message builds a new
//! one instead of mutating in place.
//!
//! # Wire format
//!
//! Messages serialize with camelCase keys and the timestamp as integer
//! epoch seconds, never as an ISO string:
//!
//! ```
//! use chatscrub::Message;
//! use chrono::{TimeZone, Utc};
//!
//! let msg = Message::new(
//!     Utc.timestamp_opt(1448470901, 0).unwrap(),
//!     "bob",
//!     "Hello there!",
//! );
//! let json = serde_json::to_string(&msg)?;
//!
//! assert!(json.contains("\"timestamp\":1448470901"));
//! assert!(json.contains("\"senderId\":\"bob\""));
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A single timestamped utterance by one sender.
///
/// All three fields are always present. `content` may be empty; `sender_id`
/// is a non-empty identifier without embedded whitespace (guaranteed by the
/// transcript parser, which splits on whitespace).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// When the message was sent, at seconds resolution.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,

    /// Identifier of the author.
    pub sender_id: String,

    /// Text content of the message. May contain spaces; may be empty.
    pub content: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(
        timestamp: DateTime<Utc>,
        sender_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender_id: sender_id.into(),
            content: content.into(),
        }
    }

    /// Creates a message from a non-negative epoch-seconds offset.
    ///
    /// Returns `None` if the offset is not representable as a timestamp.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatscrub::Message;
    ///
    /// let msg = Message::from_epoch(1448470901, "bob", "Hello there!").unwrap();
    /// assert_eq!(msg.timestamp.timestamp(), 1448470901);
    /// ```
    pub fn from_epoch(
        epoch_seconds: u64,
        sender_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Option<Self> {
        let secs = i64::try_from(epoch_seconds).ok()?;
        let timestamp = Utc.timestamp_opt(secs, 0).single()?;
        Some(Self::new(timestamp, sender_id, content))
    }

    /// Returns the sender identifier.
    pub fn sender_id(&self) -> &str {
        &self.sender_id
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns a copy of this message with different content.
    ///
    /// Used by the redaction filters, which rewrite content but never touch
    /// the timestamp or sender.
    #[must_use]
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self {
            timestamp: self.timestamp,
            sender_id: self.sender_id.clone(),
            content: content.into(),
        }
    }

    /// Returns a copy of this message with a different sender id.
    #[must_use]
    pub fn with_sender_id(&self, sender_id: impl Into<String>) -> Self {
        Self {
            timestamp: self.timestamp,
            sender_id: sender_id.into(),
            content: self.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_message_new() {
        let msg = Message::new(ts(1448470901), "bob", "Hello there!");
        assert_eq!(msg.sender_id(), "bob");
        assert_eq!(msg.content(), "Hello there!");
        assert_eq!(msg.timestamp(), ts(1448470901));
    }

    #[test]
    fn test_message_from_epoch() {
        let msg = Message::from_epoch(1448470901, "bob", "Hello").unwrap();
        assert_eq!(msg.timestamp.timestamp(), 1448470901);
    }

    #[test]
    fn test_message_from_epoch_unrepresentable() {
        assert!(Message::from_epoch(u64::MAX, "bob", "Hello").is_none());
    }

    #[test]
    fn test_message_serializes_epoch_and_camel_case() {
        let msg = Message::new(ts(1448470901), "bob", "Hello there!");
        let json = serde_json::to_string(&msg).unwrap();

        assert!(json.contains("\"timestamp\":1448470901"));
        assert!(json.contains("\"senderId\":\"bob\""));
        assert!(!json.contains("sender_id"));
    }

    #[test]
    fn test_message_round_trip() {
        let msg = Message::new(ts(1448470905), "mike", "how are you?");
        let json = serde_json::to_string(&msg).unwrap();
        let parsed: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(msg, parsed);
    }

    #[test]
    fn test_message_empty_content() {
        let msg = Message::new(ts(0), "bob", "");
        assert_eq!(msg.content(), "");
        let json = serde_json::to_string(&msg).unwrap();
        let parsed: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(msg, parsed);
    }

    #[test]
    fn test_with_content_keeps_other_fields() {
        let msg = Message::new(ts(42), "bob", "my PIN is 1234");
        let redacted = msg.with_content("my PIN is *redacted*");
        assert_eq!(redacted.sender_id(), "bob");
        assert_eq!(redacted.timestamp(), ts(42));
        assert_eq!(redacted.content(), "my PIN is *redacted*");
    }

    #[test]
    fn test_with_sender_id_keeps_other_fields() {
        let msg = Message::new(ts(42), "bob", "hi");
        let obfuscated = msg.with_sender_id("User1");
        assert_eq!(obfuscated.sender_id(), "User1");
        assert_eq!(obfuscated.content(), "hi");
        assert_eq!(obfuscated.timestamp(), ts(42));
    }
}
