//! Filter messages by sender.

use crate::Conversation;
use crate::filters::Filter;

/// Keeps messages whose sender id contains the configured text.
///
/// Matching is case-insensitive substring containment: the filter text and
/// each sender id are lowercased before comparison, so `-user bob` keeps
/// messages from `Bob`, `bobby` and `BOB2`. An empty filter text matches
/// every message.
///
/// # Example
///
/// ```
/// use chatscrub::filters::{Filter, UserFilter};
/// use chatscrub::transcript::parse_transcript;
///
/// let convo = parse_transcript("c\n1 Bob hi\n2 angus yo\n3 bobby hey\n")?;
/// let filtered = UserFilter::new("bob").transform(convo);
///
/// assert_eq!(filtered.len(), 2);
/// # Ok::<(), chatscrub::ChatscrubError>(())
/// ```
#[derive(Debug, Clone)]
pub struct UserFilter {
    /// Lowercased needle matched against lowercased sender ids.
    pattern: String,
}

impl UserFilter {
    /// Creates a filter for the given sender text.
    pub fn new(sender: impl AsRef<str>) -> Self {
        Self {
            pattern: sender.as_ref().to_lowercase(),
        }
    }

    fn matches(&self, sender_id: &str) -> bool {
        sender_id.to_lowercase().contains(&self.pattern)
    }
}

impl Filter for UserFilter {
    fn name(&self) -> &'static str {
        "user"
    }

    fn transform(&self, conversation: Conversation) -> Conversation {
        let kept = conversation
            .messages
            .iter()
            .filter(|m| self.matches(&m.sender_id))
            .cloned()
            .collect();
        conversation.with_messages(kept)
    }
}
