//! Redact a blacklisted word from message content.

use crate::Conversation;
use crate::filters::{Filter, REDACTED};

/// Replaces every occurrence of a word in message content with
/// [`REDACTED`].
///
/// Matching is case-sensitive plain substring replacement, not whole-word:
/// blacklisting `pie` also rewrites the middle of `pierced`. Messages are
/// never removed; only their content changes.
///
/// # Example
///
/// ```
/// use chatscrub::filters::{BlacklistFilter, Filter};
/// use chatscrub::transcript::parse_transcript;
///
/// let convo = parse_transcript("c\n1 bob do you like pie?\n")?;
/// let scrubbed = BlacklistFilter::new("pie").transform(convo);
///
/// assert_eq!(scrubbed.messages[0].content, "do you like *redacted*?");
/// # Ok::<(), chatscrub::ChatscrubError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BlacklistFilter {
    word: String,
}

impl BlacklistFilter {
    /// Creates a filter that redacts the given word.
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into() }
    }

    /// Returns the blacklisted word.
    pub fn word(&self) -> &str {
        &self.word
    }
}

impl Filter for BlacklistFilter {
    fn name(&self) -> &'static str {
        "blacklist"
    }

    fn transform(&self, conversation: Conversation) -> Conversation {
        let scrubbed = conversation
            .messages
            .iter()
            .map(|m| {
                if m.content.contains(&self.word) {
                    m.with_content(m.content.replace(&self.word, REDACTED))
                } else {
                    m.clone()
                }
            })
            .collect();
        conversation.with_messages(scrubbed)
    }
}
